use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::roleplay::domain::{RoleplaySession, SessionId};
use crate::roleplay::repository::{
    ScoreSnapshot, ScoreStore, ScoreStoreError, SessionStore, SessionStoreError,
};
use crate::roleplay::router::roleplay_router;
use crate::roleplay::service::RoleplaySessionService;

pub(super) fn session_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 3, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service() -> (
    RoleplaySessionService<MemorySessions, MemoryScores>,
    Arc<MemorySessions>,
    Arc<MemoryScores>,
) {
    let sessions = Arc::new(MemorySessions::default());
    let scores = Arc::new(MemoryScores::default());
    let service = RoleplaySessionService::new(sessions.clone(), scores.clone());
    (service, sessions, scores)
}

pub(super) fn roleplay_router_with_service(
    service: RoleplaySessionService<MemorySessions, MemoryScores>,
) -> axum::Router {
    roleplay_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemorySessions {
    records: Arc<Mutex<HashMap<SessionId, RoleplaySession>>>,
}

impl SessionStore for MemorySessions {
    fn insert(&self, session: RoleplaySession) -> Result<RoleplaySession, SessionStoreError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        if guard.contains_key(&session.session_id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: RoleplaySession) -> Result<(), SessionStoreError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        guard.insert(session.session_id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<RoleplaySession>, SessionStoreError> {
        let guard = self.records.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryScores {
    snapshots: Arc<Mutex<HashMap<String, ScoreSnapshot>>>,
}

impl MemoryScores {
    pub(super) fn saved(&self, key: &str) -> Option<ScoreSnapshot> {
        self.snapshots
            .lock()
            .expect("score mutex poisoned")
            .get(key)
            .cloned()
    }
}

impl ScoreStore for MemoryScores {
    fn save(&self, key: &str, snapshot: ScoreSnapshot) -> Result<(), ScoreStoreError> {
        self.snapshots
            .lock()
            .expect("score mutex poisoned")
            .insert(key.to_string(), snapshot);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<ScoreSnapshot>, ScoreStoreError> {
        Ok(self.saved(key))
    }
}

pub(super) struct UnavailableSessions;

impl SessionStore for UnavailableSessions {
    fn insert(&self, _session: RoleplaySession) -> Result<RoleplaySession, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _session: RoleplaySession) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<RoleplaySession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
