use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{RoleplaySession, SessionId, SessionStatus};
use super::repository::{
    ScoreSnapshot, ScoreStore, ScoreStoreError, SessionStore, SessionStoreError,
    SCORE_STORAGE_KEY,
};
use crate::cues::{extract_signals, ExtractedSignal};
use crate::scoring::{score_conversation, MetricResult};
use crate::transcript::{Speaker, Turn};

/// Service composing the session store, the score hand-off, and the
/// scoring engine.
pub struct RoleplaySessionService<S, P> {
    sessions: Arc<S>,
    scores: Arc<P>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("rp-{id:06}"))
}

/// A recorded turn plus whatever observable signals it carried.
#[derive(Debug)]
pub struct TurnOutcome {
    pub session: RoleplaySession,
    pub signals: Vec<ExtractedSignal>,
}

/// End-of-session debrief: the completed session, the engine's verdict,
/// and the snapshot that was handed to the score store.
#[derive(Debug)]
pub struct SessionDebrief {
    pub session: RoleplaySession,
    pub results: Vec<MetricResult>,
    pub snapshot: ScoreSnapshot,
}

impl<S, P> RoleplaySessionService<S, P>
where
    S: SessionStore + 'static,
    P: ScoreStore + 'static,
{
    pub fn new(sessions: Arc<S>, scores: Arc<P>) -> Self {
        Self { sessions, scores }
    }

    /// Open a session against a persona. An optional opening persona
    /// line seeds the transcript and is mined for observable signals.
    pub fn start(
        &self,
        persona: impl Into<String>,
        specialty: impl Into<String>,
        opening_line: Option<String>,
        started_at: DateTime<Utc>,
    ) -> Result<TurnOutcome, RoleplayServiceError> {
        let mut turns = Vec::new();
        let mut signals = Vec::new();
        if let Some(line) = opening_line {
            signals = extract_signals(&line, started_at);
            turns.push(Turn::customer(line));
        }

        let session = RoleplaySession {
            session_id: next_session_id(),
            persona: persona.into(),
            specialty: specialty.into(),
            status: SessionStatus::Active,
            turns,
            started_at,
            ended_at: None,
        };

        let session = self.sessions.insert(session)?;
        Ok(TurnOutcome { session, signals })
    }

    /// Append one turn to an active session. Customer turns are mined
    /// for observable signals; rep turns are recorded as-is.
    pub fn record_turn(
        &self,
        session_id: &SessionId,
        speaker: Speaker,
        text: String,
        at: DateTime<Utc>,
    ) -> Result<TurnOutcome, RoleplayServiceError> {
        let mut session = self.fetch_active(session_id)?;

        let signals = match speaker {
            Speaker::Customer => extract_signals(&text, at),
            Speaker::Rep => Vec::new(),
        };
        session.turns.push(Turn { speaker, text });
        self.sessions.update(session.clone())?;

        Ok(TurnOutcome { session, signals })
    }

    /// Close a session, score the accumulated transcript, and hand the
    /// snapshot to the score store.
    pub fn end(
        &self,
        session_id: &SessionId,
        ended_at: DateTime<Utc>,
    ) -> Result<SessionDebrief, RoleplayServiceError> {
        let mut session = self.fetch_active(session_id)?;

        session.status = SessionStatus::Completed;
        session.ended_at = Some(ended_at);

        let results = score_conversation(&session.turns);
        let snapshot = ScoreSnapshot::from_results(&results, ended_at);

        self.sessions.update(session.clone())?;
        self.scores.save(SCORE_STORAGE_KEY, snapshot.clone())?;

        Ok(SessionDebrief {
            session,
            results,
            snapshot,
        })
    }

    pub fn get(&self, session_id: &SessionId) -> Result<RoleplaySession, RoleplayServiceError> {
        let session = self
            .sessions
            .fetch(session_id)?
            .ok_or(SessionStoreError::NotFound)?;
        Ok(session)
    }

    /// Latest persisted snapshot, if any session has completed yet.
    pub fn latest_scores(&self) -> Result<Option<ScoreSnapshot>, RoleplayServiceError> {
        Ok(self.scores.load(SCORE_STORAGE_KEY)?)
    }

    fn fetch_active(&self, session_id: &SessionId) -> Result<RoleplaySession, RoleplayServiceError> {
        let session = self
            .sessions
            .fetch(session_id)?
            .ok_or(SessionStoreError::NotFound)?;
        if session.status == SessionStatus::Completed {
            return Err(RoleplayServiceError::SessionClosed(
                session.session_id.0.clone(),
            ));
        }
        Ok(session)
    }
}

/// Error raised by the roleplay session service.
#[derive(Debug, thiserror::Error)]
pub enum RoleplayServiceError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),
    #[error(transparent)]
    Scores(#[from] ScoreStoreError),
    #[error("session {0} is already completed")]
    SessionClosed(String),
}
