use serde::{Deserialize, Serialize};

use super::aggregate::{average_applicable, weighted_average_applicable};

/// The fixed taxonomy of behavioral capabilities, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    QuestionQuality,
    ListeningResponsiveness,
    MakingItMatter,
    CustomerEngagementSignals,
    ObjectionNavigation,
    ConversationControlStructure,
    Adaptability,
    CommitmentGaining,
}

impl MetricId {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::QuestionQuality,
            Self::ListeningResponsiveness,
            Self::MakingItMatter,
            Self::CustomerEngagementSignals,
            Self::ObjectionNavigation,
            Self::ConversationControlStructure,
            Self::Adaptability,
            Self::CommitmentGaining,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuestionQuality => "question_quality",
            Self::ListeningResponsiveness => "listening_responsiveness",
            Self::MakingItMatter => "making_it_matter",
            Self::CustomerEngagementSignals => "customer_engagement_signals",
            Self::ObjectionNavigation => "objection_navigation",
            Self::ConversationControlStructure => "conversation_control_structure",
            Self::Adaptability => "adaptability",
            Self::CommitmentGaining => "commitment_gaining",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::QuestionQuality => "Question Quality",
            Self::ListeningResponsiveness => "Listening & Responsiveness",
            Self::MakingItMatter => "Making It Matter",
            Self::CustomerEngagementSignals => "Customer Engagement Signals",
            Self::ObjectionNavigation => "Objection Navigation",
            Self::ConversationControlStructure => "Conversation Control & Structure",
            Self::Adaptability => "Adaptability",
            Self::CommitmentGaining => "Commitment Gaining",
        }
    }

    /// Optional metrics are only evaluated when their conversation-wide
    /// trigger condition is present; otherwise the whole metric is
    /// reported as not applicable.
    pub const fn optional(self) -> bool {
        matches!(self, Self::ObjectionNavigation | Self::Adaptability)
    }

    pub const fn formula(self) -> ScoreFormula {
        match self {
            Self::ObjectionNavigation | Self::Adaptability => ScoreFormula::WeightedAverage,
            _ => ScoreFormula::Average,
        }
    }
}

/// How a metric's applicable components roll up into the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFormula {
    Average,
    WeightedAverage,
}

impl ScoreFormula {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::WeightedAverage => "weighted_average",
        }
    }
}

/// Outcome of one measurable sub-behavior.
///
/// A sum type rather than a nullable-score record: an applicable
/// component always carries a score, an inapplicable one never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComponentScore {
    Applicable { score: f64, rationale: String },
    NotApplicable { rationale: String },
}

impl ComponentScore {
    pub fn score(&self) -> Option<f64> {
        match self {
            ComponentScore::Applicable { score, .. } => Some(*score),
            ComponentScore::NotApplicable { .. } => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, ComponentScore::Applicable { .. })
    }

    pub fn rationale(&self) -> &str {
        match self {
            ComponentScore::Applicable { rationale, .. }
            | ComponentScore::NotApplicable { rationale } => rationale,
        }
    }
}

/// One scored (or skipped) sub-behavior inside a metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentResult {
    pub name: &'static str,
    pub weight: f64,
    pub outcome: ComponentScore,
}

impl ComponentResult {
    pub fn applicable(
        name: &'static str,
        weight: f64,
        score: f64,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            name,
            weight,
            outcome: ComponentScore::Applicable {
                score,
                rationale: rationale.into(),
            },
        }
    }

    pub fn not_applicable(name: &'static str, weight: f64, rationale: impl Into<String>) -> Self {
        Self {
            name,
            weight,
            outcome: ComponentScore::NotApplicable {
                rationale: rationale.into(),
            },
        }
    }

    pub fn score(&self) -> Option<f64> {
        self.outcome.score()
    }

    pub fn is_applicable(&self) -> bool {
        self.outcome.is_applicable()
    }
}

/// Component name used on the "no evaluable content" fast path.
pub const NOT_APPLICABLE_COMPONENT: &str = "N/A";

/// Per-metric evaluation result. Exactly one exists per metric id in
/// every engine response, whatever the applicability outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub id: MetricId,
    pub overall_score: Option<f64>,
    pub not_applicable: bool,
    pub components: Vec<ComponentResult>,
}

impl MetricResult {
    /// Roll components up with the metric's formula. A metric with no
    /// applicable component has no overall score and reports itself as
    /// not applicable.
    pub fn from_components(id: MetricId, components: Vec<ComponentResult>) -> Self {
        let overall_score = match id.formula() {
            ScoreFormula::Average => average_applicable(&components),
            ScoreFormula::WeightedAverage => weighted_average_applicable(&components),
        };
        let not_applicable = components
            .iter()
            .all(|component| !component.is_applicable());

        Self {
            id,
            overall_score,
            not_applicable,
            components,
        }
    }

    /// Fast-path result for transcripts with nothing to evaluate.
    pub fn no_evaluable_content(id: MetricId, rationale: &str) -> Self {
        Self {
            id,
            overall_score: None,
            not_applicable: true,
            components: vec![ComponentResult::not_applicable(
                NOT_APPLICABLE_COMPONENT,
                1.0,
                rationale,
            )],
        }
    }
}
