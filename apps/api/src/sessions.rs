use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::wizard::{CurrentView, WizardController};

struct Session {
    controller: WizardController,
    last_active: DateTime<Utc>,
}

/// In-memory wizard sessions keyed by id.
///
/// Each controller is still single-owner: an operation runs to completion
/// while the store lock is held, so events for a session never interleave.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl_secs: u64) -> Self {
        // chrono durations are bounded by i64 milliseconds
        let secs = idle_ttl_secs.min(i64::MAX as u64 / 1000) as i64;
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl: Duration::seconds(secs),
        }
    }

    /// Starts a fresh wizard and returns its id with the first step's view.
    pub async fn create(&self) -> (Uuid, CurrentView) {
        let now = Utc::now();
        let mut sessions = self.inner.lock().await;
        let pruned = prune(&mut sessions, now, self.idle_ttl);
        if pruned > 0 {
            info!("Pruned {pruned} idle wizard sessions");
        }

        let id = Uuid::new_v4();
        let controller = WizardController::new();
        let view = controller.current_view();
        sessions.insert(
            id,
            Session {
                controller,
                last_active: now,
            },
        );
        info!(session = %id, active = sessions.len(), "Wizard session created");
        (id, view)
    }

    /// Applies `f` to the session's controller and marks the session active.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardController) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.inner.lock().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Wizard session {id} not found")))?;
        session.last_active = Utc::now();
        Ok(f(&mut session.controller))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self.inner.lock().await;
        sessions
            .remove(&id)
            .map(|_| info!(session = %id, "Wizard session discarded"))
            .ok_or_else(|| AppError::NotFound(format!("Wizard session {id} not found")))
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    #[cfg(test)]
    async fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.inner.lock().await;
        prune(&mut sessions, now, self.idle_ttl)
    }
}

fn prune(sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>, idle_ttl: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, s| now.signed_duration_since(s.last_active) <= idle_ttl);
    before - sessions.len()
}
