use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{RoleplaySession, SessionId};
use crate::scoring::MetricResult;

/// Storage abstraction so the session service can be exercised in
/// isolation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: RoleplaySession) -> Result<RoleplaySession, SessionStoreError>;
    fn update(&self, session: RoleplaySession) -> Result<(), SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<RoleplaySession>, SessionStoreError>;
}

/// Error enumeration for session storage failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Fixed key under which the latest roleplay scores are stored for the
/// dashboard page to pick up later.
pub const SCORE_STORAGE_KEY: &str = "reflectiv-roleplay-scores";

/// Point-in-time record of the per-metric overall scores from one
/// completed session. Metrics that were not applicable store no score,
/// which is distinct from a low one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub recorded_at: DateTime<Utc>,
    pub scores: BTreeMap<String, Option<f64>>,
}

impl ScoreSnapshot {
    pub fn from_results(results: &[MetricResult], recorded_at: DateTime<Utc>) -> Self {
        let scores = results
            .iter()
            .map(|result| (result.id.as_str().to_string(), result.overall_score))
            .collect();
        Self {
            recorded_at,
            scores,
        }
    }
}

/// Opaque key-value hand-off for produced scores; the engine itself has
/// no knowledge of this store.
pub trait ScoreStore: Send + Sync {
    fn save(&self, key: &str, snapshot: ScoreSnapshot) -> Result<(), ScoreStoreError>;
    fn load(&self, key: &str) -> Result<Option<ScoreSnapshot>, ScoreStoreError>;
}

/// Score persistence error.
#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}
