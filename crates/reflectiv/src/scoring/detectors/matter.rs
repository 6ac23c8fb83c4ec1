use crate::scoring::aggregate::count_score;
use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::scoring::patterns::VALUE_MARKERS;
use crate::transcript::TranscriptView;

const VALUE_FRAMING: &str = "value_framing";

const VALUE_BASE: f64 = 2.0;
const VALUE_STEP: f64 = 1.0;

/// Value framing: did the rep connect the pitch to what it does for the
/// customer. Value articulation is a sparse signal, so zero matches
/// means the conversation never called for it, not that it failed.
pub(crate) fn detect(view: &TranscriptView) -> MetricResult {
    let value_turns = VALUE_MARKERS.count_matching(view.rep_texts());

    let component = if value_turns == 0 {
        ComponentResult::not_applicable(VALUE_FRAMING, 1.0, "no value-framing language in rep turns")
    } else {
        ComponentResult::applicable(
            VALUE_FRAMING,
            1.0,
            count_score(VALUE_BASE, VALUE_STEP, value_turns),
            format!("{value_turns} rep turn(s) framed value for the customer"),
        )
    };

    MetricResult::from_components(MetricId::MakingItMatter, vec![component])
}
