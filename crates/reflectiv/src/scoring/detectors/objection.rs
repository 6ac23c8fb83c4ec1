use crate::scoring::aggregate::{count_score, ratio_score};
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::{OBJECTION_HANDLING_PHRASES, OBJECTION_MARKERS};
use crate::transcript::{Speaker, TranscriptView};

const ACKNOWLEDGMENT: &str = "concern_acknowledgment";
const EXPLORATION: &str = "concern_exploration";

const ACKNOWLEDGMENT_WEIGHT: f64 = 0.6;
const EXPLORATION_WEIGHT: f64 = 0.4;

/// Acknowledgment lands at 3 for a single handling phrase, 5 for two.
const ACKNOWLEDGMENT_BASE: f64 = 1.0;
const ACKNOWLEDGMENT_STEP: f64 = 2.0;

/// How many turns after an objection still count as a follow-up.
const EXPLORATION_WINDOW: usize = 2;

/// Optional metric: only evaluated when objection-style language occurs
/// anywhere in the conversation, on either side. Without that trigger
/// the rep had nothing to navigate and the whole metric is reported as
/// not applicable.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let triggered = view.all_texts().any(|text| OBJECTION_MARKERS.matches(text));
    if !triggered {
        return MetricResult::from_components(
            MetricId::ObjectionNavigation,
            vec![
                ComponentResult::not_applicable(
                    ACKNOWLEDGMENT,
                    ACKNOWLEDGMENT_WEIGHT,
                    "no objection-style language in the conversation",
                ),
                ComponentResult::not_applicable(
                    EXPLORATION,
                    EXPLORATION_WEIGHT,
                    "no objection-style language in the conversation",
                ),
            ],
        );
    }

    let handling_turns = OBJECTION_HANDLING_PHRASES.count_matching(view.rep_texts());
    let acknowledgment = ComponentResult::applicable(
        ACKNOWLEDGMENT,
        ACKNOWLEDGMENT_WEIGHT,
        count_score(ACKNOWLEDGMENT_BASE, ACKNOWLEDGMENT_STEP, handling_turns),
        format!("{handling_turns} rep turn(s) used objection-handling phrases"),
    );

    MetricResult::from_components(
        MetricId::ObjectionNavigation,
        vec![acknowledgment, exploration_component(view)],
    )
}

fn exploration_component(view: &TranscriptView) -> ComponentResult {
    let customer_objections: Vec<usize> = view
        .customer_indexes()
        .iter()
        .copied()
        .filter(|&index| OBJECTION_MARKERS.matches(view.text(index)))
        .collect();

    if customer_objections.is_empty() {
        return ComponentResult::not_applicable(
            EXPLORATION,
            EXPLORATION_WEIGHT,
            "objection language came from the rep side only",
        );
    }

    let explored = customer_objections
        .iter()
        .filter(|&&index| {
            (index + 1..=index + EXPLORATION_WINDOW)
                .filter(|&next| next < view.len())
                .any(|next| view.speaker(next) == Speaker::Rep && view.text(next).contains('?'))
        })
        .count();

    let ratio = explored as f64 / customer_objections.len() as f64;
    ComponentResult::applicable(
        EXPLORATION,
        EXPLORATION_WEIGHT,
        ratio_score(ratio),
        format!(
            "{explored}/{} customer objections met with a question",
            customer_objections.len()
        ),
    )
}
