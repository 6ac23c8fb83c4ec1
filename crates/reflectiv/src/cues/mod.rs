//! Observable-cue extraction from generated roleplay dialogue.
//!
//! Persona replies carry bracketed stage directions alongside the spoken
//! text, e.g. `[glances at the clock] Make it quick.` This module splits
//! the two apart and classifies each stage direction into one of four
//! observable-signal categories for the coaching panel. It runs beside
//! the scoring engine — neither consumes the other's output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::patterns::PhraseSet;

/// One parsed piece of a persona reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueSegment {
    Spoken(String),
    StageDirection(String),
}

/// Split dialogue text into spoken segments and bracketed stage
/// directions, preserving order. An unmatched `[` is treated as spoken
/// text rather than dropped.
pub fn parse_dialogue(text: &str) -> Vec<DialogueSegment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let Some(close_offset) = rest[open + 1..].find(']') else {
            break;
        };
        let close = open + 1 + close_offset;

        let spoken = rest[..open].trim();
        if !spoken.is_empty() {
            segments.push(DialogueSegment::Spoken(spoken.to_string()));
        }
        let direction = rest[open + 1..close].trim();
        if !direction.is_empty() {
            segments.push(DialogueSegment::StageDirection(direction.to_string()));
        }
        rest = &rest[close + 1..];
    }

    let tail = rest.trim();
    if !tail.is_empty() {
        segments.push(DialogueSegment::Spoken(tail.to_string()));
    }

    segments
}

/// Spoken text only, with stage directions removed.
pub fn spoken_text(text: &str) -> String {
    parse_dialogue(text)
        .into_iter()
        .filter_map(|segment| match segment {
            DialogueSegment::Spoken(spoken) => Some(spoken),
            DialogueSegment::StageDirection(_) => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Observable-signal categories used by the coaching panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Verbal,
    Conversational,
    Engagement,
    Contextual,
}

impl SignalCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SignalCategory::Verbal => "verbal",
            SignalCategory::Conversational => "conversational",
            SignalCategory::Engagement => "engagement",
            SignalCategory::Contextual => "contextual",
        }
    }
}

/// A classified stage direction with coaching guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSignal {
    pub category: SignalCategory,
    pub signal: String,
    pub interpretation: String,
    pub suggested_response: String,
    pub observed_at: DateTime<Utc>,
}

/// Extract and classify every stage direction in a persona reply. The
/// observation timestamp is injected by the caller so extraction stays
/// deterministic.
pub fn extract_signals(text: &str, observed_at: DateTime<Utc>) -> Vec<ExtractedSignal> {
    parse_dialogue(text)
        .into_iter()
        .filter_map(|segment| match segment {
            DialogueSegment::StageDirection(direction) => Some(classify(direction, observed_at)),
            DialogueSegment::Spoken(_) => None,
        })
        .collect()
}

const ENGAGEMENT_CUES: PhraseSet = PhraseSet::new(
    "engagement_cues",
    &[
        "leans forward",
        "lean forward",
        "nods",
        "nod",
        "smiles",
        "smile",
        "laughs",
        "picks up",
        "reaches for",
        "eye contact",
    ],
);

const CONTEXTUAL_CUES: PhraseSet = PhraseSet::new(
    "contextual_cues",
    &[
        "clock", "watch", "phone", "pager", "buzz", "nurse", "staff", "door", "enters",
    ],
);

const VERBAL_CUES: PhraseSet = PhraseSet::new(
    "verbal_cues",
    &[
        "sigh", "exhale", "pause", "hesitat", "monotone", "flat tone", "voice",
    ],
);

const CONVERSATIONAL_CUES: PhraseSet = PhraseSet::new(
    "conversational_cues",
    &["interrupt", "cuts in", "redirect", "moves on", "changes the subject"],
);

fn classify(direction: String, observed_at: DateTime<Utc>) -> ExtractedSignal {
    let lowered = direction.to_lowercase();

    let (category, interpretation, suggested_response) = if ENGAGEMENT_CUES.matches(&lowered) {
        (
            SignalCategory::Engagement,
            "Engagement shift worth registering",
            "Match the energy: build on the topic or ask a discovery question",
        )
    } else if CONVERSATIONAL_CUES.matches(&lowered) {
        (
            SignalCategory::Conversational,
            "The customer is steering the conversation",
            "Yield briefly, then bridge back to the point that matters to them",
        )
    } else if VERBAL_CUES.matches(&lowered) {
        (
            SignalCategory::Verbal,
            "Vocal delivery hints at an unspoken reaction",
            "Check in: ask what is behind the hesitation before continuing",
        )
    } else if CONTEXTUAL_CUES.matches(&lowered) {
        (
            SignalCategory::Contextual,
            "Environment is competing for the customer's attention",
            "Acknowledge the demands on their time and offer to prioritize",
        )
    } else {
        (
            SignalCategory::Contextual,
            "Observable behavior that may provide context",
            "Keep observing and adapt the approach as needed",
        )
    };

    ExtractedSignal {
        category,
        signal: direction,
        interpretation: interpretation.to_string(),
        suggested_response: suggested_response.to_string(),
        observed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn observed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 3, 14, 30, 0).single().expect("valid timestamp")
    }

    #[test]
    fn parses_spoken_text_around_stage_directions() {
        let segments =
            parse_dialogue("[glances at the clock] I have five minutes. [checks phone] Go ahead.");

        assert_eq!(
            segments,
            vec![
                DialogueSegment::StageDirection("glances at the clock".to_string()),
                DialogueSegment::Spoken("I have five minutes.".to_string()),
                DialogueSegment::StageDirection("checks phone".to_string()),
                DialogueSegment::Spoken("Go ahead.".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_bracket_is_spoken_text() {
        let segments = parse_dialogue("Costs are [unclear this quarter");
        assert_eq!(
            segments,
            vec![DialogueSegment::Spoken(
                "Costs are [unclear this quarter".to_string()
            )]
        );
    }

    #[test]
    fn plain_dialogue_is_one_spoken_segment() {
        let segments = parse_dialogue("Happy to chat.");
        assert_eq!(
            segments,
            vec![DialogueSegment::Spoken("Happy to chat.".to_string())]
        );
    }

    #[test]
    fn spoken_text_strips_directions() {
        let spoken = spoken_text("[sighs] Fine. [leans forward] Show me the data.");
        assert_eq!(spoken, "Fine. Show me the data.");
    }

    #[test]
    fn classifies_the_four_categories() {
        let cases = [
            ("leans forward in the chair", SignalCategory::Engagement),
            ("interrupts mid-sentence", SignalCategory::Conversational),
            ("long pause before answering", SignalCategory::Verbal),
            ("glances at the clock", SignalCategory::Contextual),
        ];

        for (cue, expected) in cases {
            let signals = extract_signals(&format!("[{cue}] Sure."), observed_at());
            assert_eq!(signals.len(), 1);
            assert_eq!(signals[0].category, expected, "cue: {cue}");
            assert_eq!(signals[0].signal, cue);
        }
    }

    #[test]
    fn unknown_cues_default_to_contextual() {
        let signals = extract_signals("[adjusts badge] Hello.", observed_at());
        assert_eq!(signals[0].category, SignalCategory::Contextual);
        assert!(!signals[0].suggested_response.is_empty());
    }

    #[test]
    fn timestamps_come_from_the_caller() {
        let signals = extract_signals("[nods] Agreed.", observed_at());
        assert_eq!(signals[0].observed_at, observed_at());
    }
}
