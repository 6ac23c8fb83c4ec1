use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::transcript::TranscriptView;

const REPLY_DEPTH: &str = "reply_depth";

/// A reply averaging this many words or more reads as substantive.
const LONG_REPLY_WORDS: f64 = 12.0;
/// Below this average the customer is giving clipped, minimal answers.
const VERY_SHORT_WORDS: f64 = 4.0;

/// Engagement read purely from the customer's side: how much they say
/// and whether they ask anything back. Applicable whenever the customer
/// spoke at all.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let replies = view.customer_indexes().len();
    if replies == 0 {
        return MetricResult::from_components(
            MetricId::CustomerEngagementSignals,
            vec![ComponentResult::not_applicable(
                REPLY_DEPTH,
                1.0,
                "no customer turns",
            )],
        );
    }

    let total_words: usize = view
        .customer_texts()
        .map(|text| text.split_whitespace().count())
        .sum();
    let average_words = total_words as f64 / replies as f64;
    let asked_question = view.customer_texts().any(|text| text.contains('?'));

    let long = average_words >= LONG_REPLY_WORDS;
    let score = if long && asked_question {
        5.0
    } else if long || asked_question {
        4.0
    } else if average_words < VERY_SHORT_WORDS {
        2.0
    } else {
        3.0
    };

    let component = ComponentResult::applicable(
        REPLY_DEPTH,
        1.0,
        score,
        format!(
            "{average_words:.1} words per reply on average, customer questions: {}",
            if asked_question { "yes" } else { "no" }
        ),
    );

    MetricResult::from_components(MetricId::CustomerEngagementSignals, vec![component])
}
