//! In-memory editor sessions. Each session owns one editor tree and expires
//! after a period of inactivity. Expired sessions are swept lazily on
//! access; there is no background task.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::editor::Editor;

struct Session {
    editor: Editor,
    last_touched: DateTime<Utc>,
}

/// Shared store of live editor sessions, keyed by UUID.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Creates a session with a freshly seeded editor and runs `f` against
    /// it, returning the new id alongside the closure's result.
    pub async fn create<T>(&self, f: impl FnOnce(&mut Editor) -> T) -> (Uuid, T) {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().await;
        sweep(&mut sessions, self.ttl);

        let mut session = Session {
            editor: Editor::new(),
            last_touched: Utc::now(),
        };
        let result = f(&mut session.editor);
        sessions.insert(id, session);
        (id, result)
    }

    /// Runs `f` against the session's editor, refreshing its TTL.
    /// Returns `None` for unknown or expired sessions.
    pub async fn with_editor<T>(&self, id: Uuid, f: impl FnOnce(&mut Editor) -> T) -> Option<T> {
        let mut sessions = self.inner.lock().await;
        sweep(&mut sessions, self.ttl);

        let session = sessions.get_mut(&id)?;
        session.last_touched = Utc::now();
        Some(f(&mut session.editor))
    }
}

fn sweep(sessions: &mut HashMap<Uuid, Session>, ttl: Duration) {
    let cutoff = Utc::now() - ttl;
    sessions.retain(|_, session| session.last_touched > cutoff);
}
