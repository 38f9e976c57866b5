//! Session state and the session manager.
//!
//! A session owns one transcript and one memory window, created on first
//! use and destroyed when pruned for idleness. Each session sits behind its
//! own mutex, so one submission finishes (provider call included) before
//! the next is processed for that session; distinct sessions never contend.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::chat::memory::MemoryWindow;
use crate::chat::transcript::Transcript;
use crate::persona::Persona;

/// State for one interactive conversation.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub transcript: Transcript,
    pub memory: MemoryWindow,
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// Create a session seeded with the persona's scripted greeting.
    ///
    /// The greeting is transcript-only; the memory window starts empty so
    /// the model context before the first real exchange is just the
    /// preamble.
    pub fn new(id: Uuid, persona: &Persona, max_exchanges: usize) -> Self {
        let mut transcript = Transcript::new();
        transcript.append_assistant(persona.greeting);

        Self {
            id,
            transcript,
            memory: MemoryWindow::new(max_exchanges),
            last_active_at: Utc::now(),
        }
    }

    /// Record activity for idle-pruning purposes.
    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }
}

/// Owns all live sessions, keyed by client-supplied UUID.
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>,
    persona: Persona,
    max_exchanges: usize,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new(persona: Persona, max_exchanges: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            persona,
            max_exchanges,
        }
    }

    /// Get an existing session or create a fresh one for this id.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Mutex<Session>> {
        // Fast path: check if session exists
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(&id) {
                return Arc::clone(session);
            }
        }

        // Slow path: create new session
        let mut sessions = self.sessions.write().await;
        // Double-check after acquiring write lock
        if let Some(session) = sessions.get(&id) {
            return Arc::clone(session);
        }

        let session = Arc::new(Mutex::new(Session::new(
            id,
            &self.persona,
            self.max_exchanges,
        )));
        sessions.insert(id, Arc::clone(&session));
        tracing::debug!(session_id = %id, "Created session");
        session
    }

    /// Look up a session without creating one.
    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(&id).map(Arc::clone)
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Remove sessions idle for longer than `max_idle`.
    ///
    /// Returns the number of sessions pruned. Sessions with a submission in
    /// flight hold their mutex and are skipped.
    pub async fn prune_stale(&self, max_idle: std::time::Duration) -> usize {
        let cutoff = Utc::now() - chrono::TimeDelta::seconds(max_idle.as_secs() as i64);

        let stale_ids: Vec<Uuid> = {
            let sessions = self.sessions.read().await;
            sessions
                .iter()
                .filter_map(|(id, session)| {
                    let sess = session.try_lock().ok()?;
                    (sess.last_active_at < cutoff).then_some(*id)
                })
                .collect()
        };

        if stale_ids.is_empty() {
            return 0;
        }

        let count = {
            let mut sessions = self.sessions.write().await;
            let before = sessions.len();
            for id in &stale_ids {
                sessions.remove(id);
            }
            before - sessions.len()
        };

        if count > 0 {
            tracing::info!(
                "Pruned {} stale session(s) (idle > {}s)",
                count,
                max_idle.as_secs()
            );
        }

        count
    }
}
