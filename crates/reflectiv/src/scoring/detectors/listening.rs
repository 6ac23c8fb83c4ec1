use crate::scoring::aggregate::{count_score, ratio_score};
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::{ACKNOWLEDGMENT_PHRASES, CONCERN_MARKERS, LISTENING_PHRASES};
use crate::transcript::{Speaker, TranscriptView};

const ACKNOWLEDGMENT: &str = "acknowledgment_of_concerns";
const ACTIVE_LISTENING: &str = "active_listening";

const ACKNOWLEDGMENT_WEIGHT: f64 = 0.5;
const ACTIVE_LISTENING_WEIGHT: f64 = 0.5;

/// Active-listening base/step for `count_score`: one listening phrase
/// lands at 3, each further phrase adds a point up to the cap.
const LISTENING_BASE: f64 = 2.0;
const LISTENING_STEP: f64 = 1.0;

/// Two-part listening assessment.
///
/// Acknowledgment is only measurable when the customer actually raised
/// a concern; the general listening-phrase component only when the rep
/// used reflective language at all. The overall score is the unweighted
/// mean of whichever components apply.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    if view.customer_indexes().is_empty() {
        return MetricResult::from_components(
            MetricId::ListeningResponsiveness,
            vec![
                ComponentResult::not_applicable(
                    ACKNOWLEDGMENT,
                    ACKNOWLEDGMENT_WEIGHT,
                    "no customer turns to respond to",
                ),
                ComponentResult::not_applicable(
                    ACTIVE_LISTENING,
                    ACTIVE_LISTENING_WEIGHT,
                    "no customer turns to respond to",
                ),
            ],
        );
    }

    let acknowledgment = acknowledgment_component(view);

    let listening_turns = LISTENING_PHRASES.count_matching(view.rep_texts());
    let active_listening = if listening_turns == 0 {
        ComponentResult::not_applicable(
            ACTIVE_LISTENING,
            ACTIVE_LISTENING_WEIGHT,
            "no active-listening phrases in rep turns",
        )
    } else {
        ComponentResult::applicable(
            ACTIVE_LISTENING,
            ACTIVE_LISTENING_WEIGHT,
            count_score(LISTENING_BASE, LISTENING_STEP, listening_turns),
            format!("{listening_turns} rep turn(s) used listening phrases"),
        )
    };

    MetricResult::from_components(
        MetricId::ListeningResponsiveness,
        vec![acknowledgment, active_listening],
    )
}

fn acknowledgment_component(view: &TranscriptView) -> ComponentResult {
    let concern_turns: Vec<usize> = view
        .customer_indexes()
        .iter()
        .copied()
        .filter(|&index| CONCERN_MARKERS.matches(view.text(index)))
        .collect();

    if concern_turns.is_empty() {
        return ComponentResult::not_applicable(
            ACKNOWLEDGMENT,
            ACKNOWLEDGMENT_WEIGHT,
            "customer raised no concerns",
        );
    }

    let acknowledged = concern_turns
        .iter()
        .filter(|&&index| {
            let next = index + 1;
            next < view.len()
                && view.speaker(next) == Speaker::Rep
                && ACKNOWLEDGMENT_PHRASES.matches(view.text(next))
        })
        .count();

    let ratio = acknowledged as f64 / concern_turns.len() as f64;
    ComponentResult::applicable(
        ACKNOWLEDGMENT,
        ACKNOWLEDGMENT_WEIGHT,
        ratio_score(ratio),
        format!(
            "{acknowledged}/{} customer concerns acknowledged",
            concern_turns.len()
        ),
    )
}
