//! Lexical pattern sets used by the detectors.
//!
//! Each behavior is matched by a named, fixed list of lowercase phrases
//! so the rules stay independently testable and auditable. Matching is
//! plain substring (or prefix) containment over text the transcript
//! view has already lowercased.

/// A named list of lowercase phrase matchers.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSet {
    pub name: &'static str,
    phrases: &'static [&'static str],
}

impl PhraseSet {
    pub const fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self { name, phrases }
    }

    /// True when any phrase occurs anywhere in `text`. `text` must
    /// already be lowercase.
    pub fn matches(&self, text: &str) -> bool {
        self.phrases.iter().any(|phrase| text.contains(phrase))
    }

    /// True when `text` begins with any phrase, ignoring leading
    /// whitespace.
    pub fn matches_prefix(&self, text: &str) -> bool {
        let trimmed = text.trim_start();
        self.phrases.iter().any(|phrase| trimmed.starts_with(phrase))
    }

    /// Count of texts containing at least one phrase. A text matching
    /// several phrases still counts once.
    pub fn count_matching<'a>(&self, texts: impl Iterator<Item = &'a str>) -> usize {
        texts.filter(|text| self.matches(text)).count()
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }
}

/// Single-word open-question openers, matched at sentence start.
pub const OPEN_QUESTION_PREFIXES: PhraseSet =
    PhraseSet::new("open_question_prefixes", &["how", "what", "why"]);

/// Open-question invites that are unambiguous anywhere in a sentence.
pub const OPEN_QUESTION_PHRASES: PhraseSet = PhraseSet::new(
    "open_question_phrases",
    &[
        "tell me about",
        "tell me more",
        "walk me through",
        "help me understand",
    ],
);

/// Closed (yes/no) question openers, matched at sentence start.
pub const CLOSED_QUESTION_PREFIXES: PhraseSet = PhraseSet::new(
    "closed_question_prefixes",
    &["do you", "are you", "can you", "will you", "did you", "is there"],
);

/// Customer language signaling a worry or pain point.
pub const CONCERN_MARKERS: PhraseSet = PhraseSet::new(
    "concern_markers",
    &[
        "worried",
        "worry",
        "concern",
        "hesitant",
        "struggle",
        "struggling",
        "not sure",
        "problem",
        "too busy",
    ],
);

/// Rep phrases acknowledging what the customer just said.
pub const ACKNOWLEDGMENT_PHRASES: PhraseSet = PhraseSet::new(
    "acknowledgment_phrases",
    &[
        "i hear you",
        "i understand",
        "that makes sense",
        "i can see why",
        "you're right",
        "fair point",
        "valid concern",
        "valid point",
    ],
);

/// Rep active-listening phrasing (paraphrase and reflection openers).
pub const LISTENING_PHRASES: PhraseSet = PhraseSet::new(
    "listening_phrases",
    &[
        "i hear you",
        "it sounds like",
        "if i understand correctly",
        "if i understand you",
        "what i'm hearing",
        "so you're saying",
        "so you are saying",
        "you mentioned",
    ],
);

/// Rep value-framing markers tying the pitch to the customer's world.
pub const VALUE_MARKERS: PhraseSet = PhraseSet::new(
    "value_markers",
    &[
        "benefit",
        "help you",
        "improve",
        "solution",
        "address your",
        "specifically for",
    ],
);

/// Objection-bearing language, from either side of the conversation.
pub const OBJECTION_MARKERS: PhraseSet = PhraseSet::new(
    "objection_markers",
    &[
        "too expensive",
        "not interested",
        "no budget",
        "budget",
        "concern",
        "worried",
        "hesitant",
        "skeptical",
        "won't work",
        "can't justify",
    ],
);

/// Rep phrases that meet an objection before rebutting it.
pub const OBJECTION_HANDLING_PHRASES: PhraseSet = PhraseSet::new(
    "objection_handling_phrases",
    &[
        "i understand your concern",
        "that's a valid point",
        "that is a valid point",
        "i hear you",
        "fair point",
        "that makes sense",
        "i can see why",
    ],
);

/// Rep sequencing and agenda markers.
pub const STRUCTURE_MARKERS: PhraseSet = PhraseSet::new(
    "structure_markers",
    &[
        "next step",
        "let me",
        "let's start",
        "first",
        "then",
        "finally",
        "to summarize",
        "to recap",
        "agenda",
    ],
);

/// Customer cues that the message is not landing.
pub const CONFUSION_CUES: PhraseSet = PhraseSet::new(
    "confusion_cues",
    &[
        "confused",
        "don't understand",
        "not clear",
        "what do you mean",
        "lost me",
        "can you clarify",
    ],
);

/// Explicit pivot language announcing a change of approach.
pub const PIVOT_CUES: PhraseSet = PhraseSet::new(
    "pivot_cues",
    &[
        "let me adjust",
        "different approach",
        "another way",
        "step back",
        "change direction",
        "let me put it differently",
    ],
);

/// Rep phrases that simplify or restate after confusion.
pub const CLARIFICATION_PHRASES: PhraseSet = PhraseSet::new(
    "clarification_phrases",
    &[
        "let me simplify",
        "to put it simply",
        "simply put",
        "in other words",
        "put another way",
        "let me clarify",
    ],
);

/// Rep closing language proposing a concrete next step.
pub const COMMITMENT_PHRASES: PhraseSet = PhraseSet::new(
    "commitment_phrases",
    &[
        "next step",
        "would you like",
        "shall we",
        "can we schedule",
        "move forward",
        "follow up",
        "follow-up",
    ],
);
