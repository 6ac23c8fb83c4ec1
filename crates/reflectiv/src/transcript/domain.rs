use serde::{Deserialize, Serialize};

/// Which side of the conversation produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Rep,
    Customer,
}

impl Speaker {
    pub const fn label(self) -> &'static str {
        match self {
            Speaker::Rep => "rep",
            Speaker::Customer => "customer",
        }
    }
}

/// One utterance in conversational order. Insertion order is meaningful
/// and preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn rep(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Rep,
            text: text.into(),
        }
    }

    pub fn customer(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Customer,
            text: text.into(),
        }
    }
}

/// Speaker-partitioned view over a transcript.
///
/// Detectors match against lowercased text, so the view lowercases each
/// turn once up front and keeps positional indexes for both speakers so
/// adjacency checks (who spoke next, and what they said) stay cheap.
/// An empty transcript is a valid view, not an error.
#[derive(Debug)]
pub struct TranscriptView<'a> {
    turns: &'a [Turn],
    lowered: Vec<String>,
    rep: Vec<usize>,
    customer: Vec<usize>,
}

impl<'a> TranscriptView<'a> {
    pub fn partition(turns: &'a [Turn]) -> Self {
        let lowered = turns.iter().map(|turn| turn.text.to_lowercase()).collect();
        let mut rep = Vec::new();
        let mut customer = Vec::new();
        for (index, turn) in turns.iter().enumerate() {
            match turn.speaker {
                Speaker::Rep => rep.push(index),
                Speaker::Customer => customer.push(index),
            }
        }

        Self {
            turns,
            lowered,
            rep,
            customer,
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn speaker(&self, index: usize) -> Speaker {
        self.turns[index].speaker
    }

    /// Lowercased text of the turn at `index`.
    pub fn text(&self, index: usize) -> &str {
        &self.lowered[index]
    }

    pub fn rep_indexes(&self) -> &[usize] {
        &self.rep
    }

    pub fn customer_indexes(&self) -> &[usize] {
        &self.customer
    }

    pub fn rep_texts(&self) -> impl Iterator<Item = &str> {
        self.rep.iter().map(|&index| self.lowered[index].as_str())
    }

    pub fn customer_texts(&self) -> impl Iterator<Item = &str> {
        self.customer
            .iter()
            .map(|&index| self.lowered[index].as_str())
    }

    pub fn all_texts(&self) -> impl Iterator<Item = &str> {
        self.lowered.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_preserves_order_within_each_speaker() {
        let turns = vec![
            Turn::rep("Hi there."),
            Turn::customer("Hello."),
            Turn::rep("What brings you in?"),
            Turn::customer("Curiosity."),
        ];

        let view = TranscriptView::partition(&turns);

        assert_eq!(view.rep_indexes(), &[0, 2]);
        assert_eq!(view.customer_indexes(), &[1, 3]);
        let rep: Vec<&str> = view.rep_texts().collect();
        assert_eq!(rep, vec!["hi there.", "what brings you in?"]);
    }

    #[test]
    fn partition_accepts_empty_transcript() {
        let view = TranscriptView::partition(&[]);
        assert!(view.is_empty());
        assert!(view.rep_indexes().is_empty());
        assert!(view.customer_indexes().is_empty());
    }

    #[test]
    fn text_is_lowercased_for_matching() {
        let turns = vec![Turn::customer("I AM Worried About Cost")];
        let view = TranscriptView::partition(&turns);
        assert_eq!(view.text(0), "i am worried about cost");
    }
}
