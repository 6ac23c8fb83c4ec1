use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transcript::Turn;

/// Identifier wrapper for roleplay sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Lifecycle state of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

/// A practice conversation against a synthetic healthcare-professional
/// persona, accumulating the transcript that the engine scores at the
/// end of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleplaySession {
    pub session_id: SessionId,
    pub persona: String,
    pub specialty: String,
    pub status: SessionStatus,
    pub turns: Vec<Turn>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl RoleplaySession {
    pub fn summary_view(&self) -> SessionView {
        SessionView {
            session_id: self.session_id.clone(),
            persona: self.persona.clone(),
            specialty: self.specialty.clone(),
            status: self.status.label(),
            turn_count: self.turns.len(),
            started_at: self.started_at,
            ended_at: self.ended_at,
        }
    }
}

/// Sanitized session summary for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub persona: String,
    pub specialty: String,
    pub status: &'static str,
    pub turn_count: usize,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}
