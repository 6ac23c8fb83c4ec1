use crate::scoring::aggregate::ratio_score;
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::{
    CLOSED_QUESTION_PREFIXES, OPEN_QUESTION_PHRASES, OPEN_QUESTION_PREFIXES,
};
use crate::transcript::TranscriptView;

const OPEN_RATIO: &str = "open_question_ratio";

/// Open vs. closed question balance across the rep's turns.
///
/// Questions are classified per sentence: a sentence ending in `?` that
/// opens with how/what/why counts as open, one opening with a yes/no
/// auxiliary counts as closed, and open-invite phrases ("tell me about",
/// "walk me through") count as open even without a question mark. A rep
/// who asked no classifiable question has not demonstrated the behavior
/// either way, so the metric is not applicable rather than scored low.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let mut open = 0usize;
    let mut closed = 0usize;
    for text in view.rep_texts() {
        for (sentence, is_question) in split_sentences(text) {
            if OPEN_QUESTION_PHRASES.matches(sentence)
                || (is_question && OPEN_QUESTION_PREFIXES.matches_prefix(sentence))
            {
                open += 1;
            } else if is_question && CLOSED_QUESTION_PREFIXES.matches_prefix(sentence) {
                closed += 1;
            }
        }
    }

    let total = open + closed;
    if total == 0 {
        return MetricResult::from_components(
            MetricId::QuestionQuality,
            vec![ComponentResult::not_applicable(
                OPEN_RATIO,
                1.0,
                "rep asked no open or closed questions",
            )],
        );
    }

    let ratio = open as f64 / total as f64;
    MetricResult::from_components(
        MetricId::QuestionQuality,
        vec![ComponentResult::applicable(
            OPEN_RATIO,
            1.0,
            ratio_score(ratio),
            format!("{open}/{total} questions were open-ended"),
        )],
    )
}

fn split_sentences(text: &str) -> Vec<(&str, bool)> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            let sentence = text[start..index].trim();
            if !sentence.is_empty() {
                sentences.push((sentence, ch == '?'));
            }
            start = index + ch.len_utf8();
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push((tail, false));
    }
    sentences
}
