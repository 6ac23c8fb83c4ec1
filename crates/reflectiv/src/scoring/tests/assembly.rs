use super::common::*;
use crate::scoring::domain::{MetricId, NOT_APPLICABLE_COMPONENT};
use crate::scoring::score_conversation;
use crate::scoring::views::MetricResultView;
use crate::transcript::Turn;

#[test]
fn always_returns_all_eight_metrics_in_fixed_order() {
    let results = score_conversation(&discovery_conversation());

    let ids: Vec<MetricId> = results.iter().map(|result| result.id).collect();
    assert_eq!(ids, MetricId::ordered());
}

#[test]
fn empty_transcript_short_circuits_every_metric() {
    let results = score_conversation(&[]);

    assert_eq!(results.len(), 8);
    for result in &results {
        assert!(result.not_applicable);
        assert_eq!(result.overall_score, None);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].name, NOT_APPLICABLE_COMPONENT);
        assert!(!result.components[0].is_applicable());
    }
}

#[test]
fn transcript_without_rep_turns_short_circuits_every_metric() {
    let turns = vec![
        Turn::customer("Is anyone joining this call?"),
        Turn::customer("I will give it two more minutes."),
    ];
    let results = score_conversation(&turns);

    assert_eq!(results.len(), 8);
    for result in &results {
        assert!(result.not_applicable);
        assert_eq!(result.overall_score, None);
        assert!(result.components[0]
            .outcome
            .rationale()
            .contains("no rep turns"));
    }
}

#[test]
fn representative_conversation_scores_every_metric() {
    let results = score_conversation(&discovery_conversation());

    assert_eq!(results.len(), 8);

    let expectations = [
        (MetricId::QuestionQuality, Some(5.0)),
        (MetricId::ListeningResponsiveness, Some(4.0)),
        (MetricId::MakingItMatter, Some(3.0)),
        (MetricId::CustomerEngagementSignals, Some(4.0)),
        (MetricId::ObjectionNavigation, None),
        (MetricId::ConversationControlStructure, Some(2.0)),
        (MetricId::Adaptability, None),
        (MetricId::CommitmentGaining, Some(3.0)),
    ];
    for (id, expected) in expectations {
        let result = metric(&results, id);
        assert_eq!(
            result.overall_score,
            expected,
            "unexpected overall score for {}",
            id.as_str()
        );
        assert_eq!(result.not_applicable, expected.is_none());
    }
}

#[test]
fn not_applicable_metrics_never_carry_scores() {
    // Invariant check across a spread of inputs: not_applicable implies
    // no overall score and no applicable component.
    let transcripts = [
        Vec::new(),
        objection_free_conversation(),
        concern_free_conversation(),
        vec![Turn::rep("Hello?")],
    ];

    for turns in &transcripts {
        for result in score_conversation(turns) {
            if result.not_applicable {
                assert_eq!(result.overall_score, None);
                assert!(result
                    .components
                    .iter()
                    .all(|component| !component.is_applicable()));
            }
        }
    }
}

#[test]
fn views_expose_the_wire_contract() {
    let results = score_conversation(&cost_objection_conversation());
    let objection = metric(&results, MetricId::ObjectionNavigation);
    let view = MetricResultView::from(objection);

    assert_eq!(view.id, "objection_navigation");
    assert_eq!(view.metric, "Objection Navigation");
    assert!(view.optional);
    assert_eq!(view.score_formula, "weighted_average");

    let payload = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(payload["overall_score"], serde_json::json!(3.8));
    assert_eq!(payload["not_applicable"], serde_json::json!(false));
    assert!(payload["components"]
        .as_array()
        .expect("components array")
        .iter()
        .all(|component| component.get("applicable").is_some()));
}

#[test]
fn listening_formula_is_reported_as_average() {
    let results = score_conversation(&acknowledged_concern_conversation());
    let view = MetricResultView::from(metric(&results, MetricId::ListeningResponsiveness));
    assert_eq!(view.score_formula, "average");
}
