use crate::scoring::aggregate::count_score;
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::STRUCTURE_MARKERS;
use crate::transcript::TranscriptView;

const STRUCTURAL_MARKERS: &str = "structural_markers";

/// Structure starts from a neutral baseline of 2 even with zero markers;
/// a single rep turn is enough to assess how it was shaped.
const STRUCTURE_BASE: f64 = 2.0;
const STRUCTURE_STEP: f64 = 1.0;

/// Sequencing and agenda control from the rep's side. Always applicable:
/// unlike the sparse behaviors, absence of structure is itself a
/// legitimate (low) assessment.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let marker_turns = STRUCTURE_MARKERS.count_matching(view.rep_texts());

    let component = ComponentResult::applicable(
        STRUCTURAL_MARKERS,
        1.0,
        count_score(STRUCTURE_BASE, STRUCTURE_STEP, marker_turns),
        format!("{marker_turns} rep turn(s) used structural markers"),
    );

    MetricResult::from_components(MetricId::ConversationControlStructure, vec![component])
}
