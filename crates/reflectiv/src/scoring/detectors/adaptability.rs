use crate::scoring::aggregate::{count_score, ratio_score};
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::{CLARIFICATION_PHRASES, CONFUSION_CUES, PIVOT_CUES};
use crate::transcript::{Speaker, TranscriptView};

const CLARIFICATION: &str = "clarification_after_confusion";
const APPROACH_PIVOT: &str = "approach_pivot";

const CLARIFICATION_WEIGHT: f64 = 0.5;
const APPROACH_PIVOT_WEIGHT: f64 = 0.5;

const PIVOT_BASE: f64 = 1.0;
const PIVOT_STEP: f64 = 1.0;

/// How many turns after a confusion cue a clarification still counts.
const CLARIFICATION_WINDOW: usize = 2;

/// Optional metric gated on an adaptation trigger: expressed customer
/// confusion, or explicit pivot language anywhere in the transcript.
/// A conversation that never asked the rep to change course cannot
/// evidence adaptability, so the metric is not applicable without a cue.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let confusion_turns: Vec<usize> = view
        .customer_indexes()
        .iter()
        .copied()
        .filter(|&index| CONFUSION_CUES.matches(view.text(index)))
        .collect();
    let pivot_present = view.all_texts().any(|text| PIVOT_CUES.matches(text));

    if confusion_turns.is_empty() && !pivot_present {
        return MetricResult::from_components(
            MetricId::Adaptability,
            vec![
                ComponentResult::not_applicable(
                    CLARIFICATION,
                    CLARIFICATION_WEIGHT,
                    "no adaptation-triggering cues in the conversation",
                ),
                ComponentResult::not_applicable(
                    APPROACH_PIVOT,
                    APPROACH_PIVOT_WEIGHT,
                    "no adaptation-triggering cues in the conversation",
                ),
            ],
        );
    }

    let clarification = if confusion_turns.is_empty() {
        ComponentResult::not_applicable(
            CLARIFICATION,
            CLARIFICATION_WEIGHT,
            "customer never signaled confusion",
        )
    } else {
        let clarified = confusion_turns
            .iter()
            .filter(|&&index| {
                (index + 1..=index + CLARIFICATION_WINDOW)
                    .filter(|&next| next < view.len())
                    .any(|next| {
                        view.speaker(next) == Speaker::Rep
                            && CLARIFICATION_PHRASES.matches(view.text(next))
                    })
            })
            .count();
        let ratio = clarified as f64 / confusion_turns.len() as f64;
        ComponentResult::applicable(
            CLARIFICATION,
            CLARIFICATION_WEIGHT,
            ratio_score(ratio),
            format!(
                "{clarified}/{} confusion cues answered with a clarification",
                confusion_turns.len()
            ),
        )
    };

    let pivot = if pivot_present {
        let pivot_turns = PIVOT_CUES.count_matching(view.rep_texts());
        ComponentResult::applicable(
            APPROACH_PIVOT,
            APPROACH_PIVOT_WEIGHT,
            count_score(PIVOT_BASE, PIVOT_STEP, pivot_turns),
            format!("{pivot_turns} rep turn(s) announced an approach change"),
        )
    } else {
        ComponentResult::not_applicable(
            APPROACH_PIVOT,
            APPROACH_PIVOT_WEIGHT,
            "no explicit pivot language",
        )
    };

    MetricResult::from_components(MetricId::Adaptability, vec![clarification, pivot])
}
