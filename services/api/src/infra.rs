use metrics_exporter_prometheus::PrometheusHandle;
use reflectiv::roleplay::{
    RoleplaySession, ScoreSnapshot, ScoreStore, ScoreStoreError, SessionId, SessionStore,
    SessionStoreError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    records: Arc<Mutex<HashMap<SessionId, RoleplaySession>>>,
}

impl SessionStore for InMemorySessionStore {
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
        if guard.contains_key(&session.session_id) {
            guard.insert(session.session_id.clone(), session);
            Ok(())
        } else {
            Err(SessionStoreError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<RoleplaySession>, SessionStoreError> {
        let guard = self.records.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryScoreStore {
    snapshots: Arc<Mutex<HashMap<String, ScoreSnapshot>>>,
}

impl ScoreStore for InMemoryScoreStore {
    fn save(&self, key: &str, snapshot: ScoreSnapshot) -> Result<(), ScoreStoreError> {
        let mut guard = self.snapshots.lock().expect("score mutex poisoned");
        guard.insert(key.to_string(), snapshot);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<ScoreSnapshot>, ScoreStoreError> {
        let guard = self.snapshots.lock().expect("score mutex poisoned");
        Ok(guard.get(key).cloned())
    }
}
