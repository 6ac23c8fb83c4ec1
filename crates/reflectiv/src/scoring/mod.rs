//! Behavioral metrics scoring engine.
//!
//! A single-pass, stateless pipeline over a complete transcript: the
//! speaker partitioner feeds eight independent lexical detectors, an
//! applicability gate separates "no opportunity to demonstrate the
//! behavior" from "demonstrated it poorly", and the assembler returns
//! the eight metric results in fixed taxonomy order for every input —
//! including the empty one.
//!
//! The engine holds no state and performs no I/O; it is a pure function
//! of its input and safe to call concurrently.

pub mod aggregate;
pub mod domain;
mod detectors;
pub mod patterns;
pub mod views;

#[cfg(test)]
mod tests;

pub use aggregate::{average_applicable, round1, weighted_average_applicable};
pub use domain::{
    ComponentResult, ComponentScore, MetricId, MetricResult, ScoreFormula,
    NOT_APPLICABLE_COMPONENT,
};
pub use views::{ComponentView, MetricResultView};

use crate::transcript::{TranscriptView, Turn};

/// Evaluate a transcript against all eight behavioral metrics.
///
/// Always returns exactly eight results, in [`MetricId::ordered`] order.
/// A transcript with no turns, or no rep turns, has no evaluable content
/// and short-circuits every metric to not-applicable without invoking
/// the detectors.
pub fn score_conversation(turns: &[Turn]) -> Vec<MetricResult> {
    let view = TranscriptView::partition(turns);

    if view.is_empty() || view.rep_indexes().is_empty() {
        let rationale = if view.is_empty() {
            "empty transcript"
        } else {
            "transcript contains no rep turns to evaluate"
        };
        return MetricId::ordered()
            .into_iter()
            .map(|id| MetricResult::no_evaluable_content(id, rationale))
            .collect();
    }

    MetricId::ordered()
        .into_iter()
        .map(|id| detect(id, &view))
        .collect()
}

fn detect(id: MetricId, view: &TranscriptView) -> MetricResult {
    match id {
        MetricId::QuestionQuality => detectors::question_quality::detect(view),
        MetricId::ListeningResponsiveness => detectors::listening::detect(view),
        MetricId::MakingItMatter => detectors::matter::detect(view),
        MetricId::CustomerEngagementSignals => detectors::engagement::detect(view),
        MetricId::ObjectionNavigation => detectors::objection::detect(view),
        MetricId::ConversationControlStructure => detectors::control::detect(view),
        MetricId::Adaptability => detectors::adaptability::detect(view),
        MetricId::CommitmentGaining => detectors::commitment::detect(view),
    }
}
