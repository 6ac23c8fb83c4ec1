use crate::scoring::domain::{ComponentResult, MetricId, MetricResult};
use crate::transcript::Turn;

/// The representative discovery-to-commitment conversation: rep opens
/// with a discovery question, customer states a need, rep paraphrases,
/// customer raises an adherence struggle, rep responds with empathy and
/// value framing, customer agrees, rep proposes a dated follow-up.
pub(super) fn discovery_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("Today I would like to discuss your needs. What are your goals?"),
        Turn::customer("We need to improve patient outcomes and reduce costs."),
        Turn::rep("So you are saying you want to improve outcomes. Tell me more about that."),
        Turn::customer("Yes, we struggle with adherence."),
        Turn::rep(
            "I understand. Our solution can help you increase adherence so that you see better outcomes.",
        ),
        Turn::customer("That sounds good. What are the next steps?"),
        Turn::rep(
            "I will send you a proposal by Friday. You can review it and we will schedule a follow-up next week.",
        ),
        Turn::customer("Yes, that works for me."),
    ]
}

/// Friendly exchange with no objection-style language on either side.
pub(super) fn objection_free_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("How can I help you today?"),
        Turn::customer("I am interested in learning more about your product."),
        Turn::rep("Great! Let me tell you about our features."),
        Turn::customer("That sounds good."),
    ]
}

/// Customer raises a cost concern and the rep acknowledges and probes.
pub(super) fn cost_objection_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("How can I help you today?"),
        Turn::customer("I am concerned about the cost."),
        Turn::rep("I understand your concern. Can you tell me more about your budget?"),
        Turn::customer("We have limited funds."),
    ]
}

/// Customer states goals without ever voicing a concern.
pub(super) fn concern_free_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("What are your goals?"),
        Turn::customer("We want to make our reporting faster."),
        Turn::rep("So you are saying reporting speed matters most. Got it."),
        Turn::customer("Tell me about your product."),
    ]
}

/// Customer worries about implementation time; rep acknowledges it.
pub(super) fn acknowledged_concern_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("What are your thoughts?"),
        Turn::customer("I am worried about implementation time."),
        Turn::rep("I hear you. That is a valid concern."),
        Turn::customer("Yes, we are on a tight timeline."),
    ]
}

/// Customer signals confusion; rep simplifies.
pub(super) fn confusion_conversation() -> Vec<Turn> {
    vec![
        Turn::rep("Let me explain our solution in detail."),
        Turn::customer("I am confused. What do you mean?"),
        Turn::rep("Let me simplify. We help you save time."),
        Turn::customer("Oh, I see now."),
    ]
}

pub(super) fn metric(results: &[MetricResult], id: MetricId) -> &MetricResult {
    results
        .iter()
        .find(|result| result.id == id)
        .unwrap_or_else(|| panic!("metric {} missing from results", id.as_str()))
}

pub(super) fn component<'a>(result: &'a MetricResult, name: &str) -> &'a ComponentResult {
    result
        .components
        .iter()
        .find(|component| component.name == name)
        .unwrap_or_else(|| panic!("component {name} missing from {}", result.id.as_str()))
}

pub(super) fn applicable(score: f64, weight: f64) -> ComponentResult {
    ComponentResult::applicable("scored", weight, score, "scored for test")
}

pub(super) fn inapplicable(weight: f64) -> ComponentResult {
    ComponentResult::not_applicable("skipped", weight, "skipped for test")
}
