//! In-memory session store.
//!
//! Sessions live only as long as the process. Each session sits behind its own
//! mutex so requests for one player are serialized while different players
//! proceed in parallel; the map lock is held only long enough to find the entry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use geoquest_shared::{CharacterClass, EnemyClass, PlayerSessionView};

use crate::entities::PlayerSession;
use crate::error::{GameError, Result};

/// How often the background sweeper looks for idle sessions
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Keyed store of player sessions with idle expiry
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<PlayerSession>>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a fresh session under a new unique id
    pub fn create(
        &self,
        class: &CharacterClass,
        enemies: &[EnemyClass],
        now: Instant,
    ) -> (String, PlayerSessionView) {
        let purged = self.purge_expired(now);
        if purged > 0 {
            debug!("Purged {} idle sessions", purged);
        }

        let id = Uuid::new_v4().to_string();
        let mut session = PlayerSession::new(id.clone(), class, now);
        session.seed_kill_counts(enemies);
        let view = session.view();

        self.sessions.write().insert(id.clone(), Arc::new(Mutex::new(session)));
        info!("Player {} selected {}", id, class.id);
        (id, view)
    }

    /// Run `f` against one session with exclusive access.
    /// Idle-expired sessions are reported as not found.
    pub fn with_session<T, F>(&self, id: &str, now: Instant, f: F) -> Result<T>
    where
        F: FnOnce(&mut PlayerSession) -> Result<T>,
    {
        let entry = self
            .sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::PlayerNotFound(id.to_string()))?;

        let mut session = entry.lock();
        if self.is_expired(&session, now) {
            drop(session);
            self.sessions.write().remove(id);
            info!("Session {} expired", id);
            return Err(GameError::PlayerNotFound(id.to_string()));
        }

        session.last_activity = now;
        f(&mut session)
    }

    /// Drop every session idle longer than the TTL. Returns how many were removed.
    pub fn purge_expired(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(&session.lock(), now));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    fn is_expired(&self, session: &PlayerSession, now: Instant) -> bool {
        now.saturating_duration_since(session.last_activity) > self.ttl
    }
}

/// Spawn the background task that sweeps idle sessions
pub fn spawn_sweeper(store: Arc<SessionStore>, interval: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        info!("Session sweeper running every {:?}", interval);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired(Instant::now());
            if purged > 0 {
                info!("Swept {} idle sessions, {} remain", purged, store.len());
            }
        }
    })
}
