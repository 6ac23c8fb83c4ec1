//! Roleplay session workflow: session lifecycle, score persistence, and
//! the HTTP surface that the practice UI talks to.
//!
//! The scoring engine itself stays pure; this module is the stateful
//! shell around it. Persona reply generation is out of scope — callers
//! append both speakers' turns explicitly.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{RoleplaySession, SessionId, SessionStatus, SessionView};
pub use repository::{
    ScoreSnapshot, ScoreStore, ScoreStoreError, SessionStore, SessionStoreError,
    SCORE_STORAGE_KEY,
};
pub use router::roleplay_router;
pub use service::{RoleplayServiceError, RoleplaySessionService, SessionDebrief, TurnOutcome};
