use crate::scoring::aggregate::count_score;
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::COMMITMENT_PHRASES;
use crate::transcript::TranscriptView;

const CLOSING_LANGUAGE: &str = "closing_language";

const COMMITMENT_BASE: f64 = 2.0;
const COMMITMENT_STEP: f64 = 1.0;

/// Closing and commitment language from the rep. Sparse signal: a
/// conversation that never reached a close leaves the metric not
/// applicable instead of scoring the rep down.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let closing_turns = COMMITMENT_PHRASES.count_matching(view.rep_texts());

    let component = if closing_turns == 0 {
        ComponentResult::not_applicable(
            CLOSING_LANGUAGE,
            1.0,
            "no closing or commitment language in rep turns",
        )
    } else {
        ComponentResult::applicable(
            CLOSING_LANGUAGE,
            1.0,
            count_score(COMMITMENT_BASE, COMMITMENT_STEP, closing_turns),
            format!("{closing_turns} rep turn(s) proposed a commitment or next step"),
        )
    };

    MetricResult::from_components(MetricId::CommitmentGaining, vec![component])
}
