//! Per-metric detectors.
//!
//! Each detector is a pure function of the partitioned transcript view
//! and produces one [`MetricResult`](super::domain::MetricResult). The
//! detectors are independent of each other and may run in any order.

pub(crate) mod adaptability;
pub(crate) mod commitment;
pub(crate) mod control;
pub(crate) mod engagement;
pub(crate) mod listening;
pub(crate) mod matter;
pub(crate) mod objection;
pub(crate) mod question_quality;
