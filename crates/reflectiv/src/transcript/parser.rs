use super::domain::{Speaker, Turn};
use serde::Deserialize;
use std::io::Read;

/// Error raised while importing a transcript export.
///
/// Malformed input is rejected outright rather than coerced or skipped;
/// scoring depends on complete, accurate accounting of every turn.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptImportError {
    #[error("failed to read transcript CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown speaker '{value}' (expected 'rep' or 'customer')")]
    UnknownSpeaker { row: usize, value: String },
    #[error("row {row}: empty turn text")]
    EmptyText { row: usize },
}

/// Read a `Speaker,Text` CSV export into conversational order.
pub fn read_transcript<R: Read>(reader: R) -> Result<Vec<Turn>, TranscriptImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut turns = Vec::new();

    for (index, record) in csv_reader.deserialize::<TranscriptRow>().enumerate() {
        let row = record?;
        // Header occupies the first line, so data rows are 1-based + 1.
        let row_number = index + 2;
        let speaker = parse_speaker(&row.speaker).ok_or_else(|| {
            TranscriptImportError::UnknownSpeaker {
                row: row_number,
                value: row.speaker.clone(),
            }
        })?;
        if row.text.trim().is_empty() {
            return Err(TranscriptImportError::EmptyText { row: row_number });
        }

        turns.push(Turn {
            speaker,
            text: row.text,
        });
    }

    Ok(turns)
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    #[serde(rename = "Speaker")]
    speaker: String,
    #[serde(rename = "Text")]
    text: String,
}

fn parse_speaker(value: &str) -> Option<Speaker> {
    match value.trim().to_ascii_lowercase().as_str() {
        "rep" => Some(Speaker::Rep),
        "customer" | "hcp" => Some(Speaker::Customer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_rows_in_conversational_order() {
        let csv = "Speaker,Text\nrep,What are your goals?\ncustomer,Fewer callbacks.\n";
        let turns = read_transcript(Cursor::new(csv)).expect("valid transcript");

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::Rep);
        assert_eq!(turns[1].text, "Fewer callbacks.");
    }

    #[test]
    fn accepts_hcp_as_customer_alias() {
        let csv = "Speaker,Text\nHCP,Make it quick.\n";
        let turns = read_transcript(Cursor::new(csv)).expect("valid transcript");
        assert_eq!(turns[0].speaker, Speaker::Customer);
    }

    #[test]
    fn rejects_unknown_speakers() {
        let csv = "Speaker,Text\nmoderator,Welcome everyone.\n";
        match read_transcript(Cursor::new(csv)) {
            Err(TranscriptImportError::UnknownSpeaker { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "moderator");
            }
            other => panic!("expected unknown speaker error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_turn_text() {
        let csv = "Speaker,Text\nrep,\n";
        assert!(matches!(
            read_transcript(Cursor::new(csv)),
            Err(TranscriptImportError::EmptyText { row: 2 })
        ));
    }

    #[test]
    fn empty_file_is_an_empty_transcript() {
        let turns = read_transcript(Cursor::new("Speaker,Text\n")).expect("header only");
        assert!(turns.is_empty());
    }
}
