//! Wire-shape views over engine results.
//!
//! The engine's internal component outcome is a sum type; downstream
//! consumers (the HTTP API, the stored score snapshots, the dashboard)
//! expect the flat `{score, applicable}` record shape, so these views
//! do the flattening at the serialization boundary.

use serde::Serialize;

use super::domain::{ComponentResult, MetricResult};

/// Flat component record for API payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentView {
    pub name: &'static str,
    pub score: Option<f64>,
    pub applicable: bool,
    pub weight: f64,
    pub rationale: String,
}

impl From<&ComponentResult> for ComponentView {
    fn from(component: &ComponentResult) -> Self {
        Self {
            name: component.name,
            score: component.score(),
            applicable: component.is_applicable(),
            weight: component.weight,
            rationale: component.outcome.rationale().to_string(),
        }
    }
}

/// Flat metric record for API payloads.
#[derive(Debug, Clone, Serialize)]
pub struct MetricResultView {
    pub id: &'static str,
    pub metric: &'static str,
    pub optional: bool,
    pub score_formula: &'static str,
    pub overall_score: Option<f64>,
    pub not_applicable: bool,
    pub components: Vec<ComponentView>,
}

impl From<&MetricResult> for MetricResultView {
    fn from(result: &MetricResult) -> Self {
        Self {
            id: result.id.as_str(),
            metric: result.id.label(),
            optional: result.id.optional(),
            score_formula: result.id.formula().as_str(),
            overall_score: result.overall_score,
            not_applicable: result.not_applicable,
            components: result.components.iter().map(ComponentView::from).collect(),
        }
    }
}
