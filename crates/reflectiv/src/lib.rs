//! Core library for the Reflectiv sales-coaching platform.
//!
//! The load-bearing piece is [`scoring`]: a deterministic, single-pass
//! evaluation of a roleplay transcript against the eight behavioral
//! metrics. Everything else is the plumbing around it — transcript
//! ingestion, observable-cue extraction, and the roleplay session
//! workflow that the HTTP service exposes.

pub mod config;
pub mod cues;
pub mod error;
pub mod roleplay;
pub mod scoring;
pub mod telemetry;
pub mod transcript;
