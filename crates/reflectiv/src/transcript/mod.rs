//! Transcript model shared by the scoring engine, cue extraction, and the
//! roleplay session workflow.

pub mod domain;
pub mod parser;

pub use domain::{Speaker, TranscriptView, Turn};
pub use parser::{read_transcript, TranscriptImportError};
