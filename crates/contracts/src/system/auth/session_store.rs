//! Persisted session record plus change notification for identity adapters.
//!
//! The record lives in the area selected by [`Persistence`]: the session
//! area for `Session`, the local area for `Local` and an in-process map for
//! `None`. Every change bumps a generation counter so that delayed work
//! (token expiry) can tell whether the session it was armed for is still
//! the current one.

use std::cell::Cell;

use chrono::{DateTime, Utc};

use crate::shared::observers::{ObserverId, ObserverRegistry, Subscription};
use crate::shared::storage::{KeyValueStorage, MemoryStorage};

use super::wire::StoredSession;
use super::{Identity, Persistence};

pub const SESSION_KEY: &str = "auth_session";

pub struct SessionStore<L, S> {
    local: L,
    session: S,
    memory: MemoryStorage,
    persistence: Cell<Persistence>,
    observers: ObserverRegistry<Option<Identity>>,
    generation: Cell<u64>,
}

impl<L: KeyValueStorage, S: KeyValueStorage> SessionStore<L, S> {
    /// Starts with `Local` persistence, the identity service default.
    pub fn new(local: L, session: S) -> Self {
        Self {
            local,
            session,
            memory: MemoryStorage::new(),
            persistence: Cell::new(Persistence::Local),
            observers: ObserverRegistry::new(),
            generation: Cell::new(0),
        }
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    fn area(&self, persistence: Persistence) -> &dyn KeyValueStorage {
        match persistence {
            Persistence::Session => &self.session,
            Persistence::Local => &self.local,
            Persistence::None => &self.memory,
        }
    }

    fn save_in(&self, persistence: Persistence, session: &StoredSession) {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = self.area(persistence).set(SESSION_KEY, &json) {
            log::warn!("Session not persisted: {}", e);
        }
    }

    /// Unreadable records are dropped.
    fn load_from(&self, persistence: Persistence) -> Option<StoredSession> {
        let storage = self.area(persistence);
        let raw = storage.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Discarding unreadable session record: {}", e);
                let _ = storage.remove(SESSION_KEY);
                None
            }
        }
    }

    fn clear_in(&self, persistence: Persistence) {
        let _ = self.area(persistence).remove(SESSION_KEY);
    }

    /// Switch persistence.
    ///
    /// A live session moves along, except that a durable record is never
    /// promoted into the session area: switching from `Local` to `Session`
    /// deletes it instead.
    pub fn set_persistence(&self, persistence: Persistence) {
        let previous = self.persistence.replace(persistence);
        if previous == persistence {
            return;
        }

        let carried = self.load_from(previous);
        self.clear_in(previous);
        match carried {
            Some(_) if previous == Persistence::Local && persistence == Persistence::Session => {
                log::info!("Dropped durable session record");
            }
            Some(session) => self.save_in(persistence, &session),
            None => {}
        }
    }

    /// Stored session, unless absent or expired. Expired records are removed.
    pub fn restore(&self, now: DateTime<Utc>) -> Option<StoredSession> {
        let persistence = self.persistence.get();
        let session = self.load_from(persistence)?;
        if session.is_expired(now) {
            log::info!("Stored identity session has expired");
            self.clear_in(persistence);
            return None;
        }
        Some(session)
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&Option<Identity>) + 'static,
    ) -> (ObserverId, Subscription) {
        self.observers.subscribe(callback)
    }

    /// Hand the restored session to one observer.
    ///
    /// Returns the session only if the observer was still registered and a
    /// session was present.
    pub fn deliver_current(&self, id: ObserverId, now: DateTime<Utc>) -> Option<StoredSession> {
        let session = self.restore(now);
        let identity = session.as_ref().map(|session| session.identity.clone());
        if self.observers.notify_one(id, &identity) {
            session
        } else {
            None
        }
    }

    /// Persist a new session and notify every observer. Returns the new
    /// generation.
    pub fn establish(&self, session: &StoredSession) -> u64 {
        self.save_in(self.persistence.get(), session);
        self.announce(Some(session.identity.clone()))
    }

    /// Remove the session and notify every observer.
    pub fn end(&self) {
        self.clear_in(self.persistence.get());
        self.announce(None);
    }

    /// End the session if it is still the one of `generation`.
    pub fn expire(&self, generation: u64) -> bool {
        if self.generation.get() != generation {
            return false;
        }
        log::info!("Identity session expired");
        self.end();
        true
    }

    fn announce(&self, identity: Option<Identity>) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.observers.notify(&identity);
        generation
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::shared::theme::{PreferenceStore, Theme, DEFAULT_THEME_KEY};
    use crate::testing::{identity, RecordingSink, ADMIN_EMAIL};

    type TestStore = SessionStore<MemoryStorage, MemoryStorage>;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn session(expires_in: Duration) -> StoredSession {
        StoredSession {
            identity: identity(ADMIN_EMAIL),
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: now() + expires_in,
        }
    }

    fn store() -> (TestStore, MemoryStorage, MemoryStorage) {
        let local = MemoryStorage::new();
        let tab = MemoryStorage::new();
        (SessionStore::new(local.clone(), tab.clone()), local, tab)
    }

    type Seen = Rc<RefCell<Vec<Option<Identity>>>>;

    fn recorder(store: &TestStore) -> (ObserverId, Subscription, Seen) {
        let seen: Seen = Rc::default();
        let sink = Rc::clone(&seen);
        let (id, subscription) =
            store.subscribe(move |identity| sink.borrow_mut().push(identity.clone()));
        (id, subscription, seen)
    }

    #[test]
    fn test_persistence_selects_storage_area() {
        let (store, local, tab) = store();

        store.establish(&session(Duration::hours(1)));
        assert!(local.get(SESSION_KEY).is_some());
        assert!(tab.get(SESSION_KEY).is_none());

        store.end();
        store.set_persistence(Persistence::Session);
        store.establish(&session(Duration::hours(1)));
        assert!(local.get(SESSION_KEY).is_none());
        assert!(tab.get(SESSION_KEY).is_some());

        store.end();
        store.set_persistence(Persistence::None);
        store.establish(&session(Duration::hours(1)));
        assert!(local.get(SESSION_KEY).is_none());
        assert!(tab.get(SESSION_KEY).is_none());
        assert_eq!(store.restore(now()), Some(session(Duration::hours(1))));
    }

    #[test]
    fn test_switching_persistence_carries_live_session() {
        let (store, local, tab) = store();
        store.set_persistence(Persistence::None);
        store.establish(&session(Duration::hours(1)));

        store.set_persistence(Persistence::Session);
        assert!(tab.get(SESSION_KEY).is_some());

        store.set_persistence(Persistence::Local);
        assert!(tab.get(SESSION_KEY).is_none());
        assert!(local.get(SESSION_KEY).is_some());
        assert_eq!(store.restore(now()), Some(session(Duration::hours(1))));
    }

    #[test]
    fn test_durable_record_is_not_promoted_to_session_area() {
        let (store, local, tab) = store();
        store.establish(&session(Duration::hours(1)));

        store.set_persistence(Persistence::Session);

        assert!(local.get(SESSION_KEY).is_none());
        assert!(tab.get(SESSION_KEY).is_none());
        assert_eq!(store.restore(now()), None);
    }

    #[test]
    fn test_expired_session_is_dropped_on_restore() {
        let (store, local, _) = store();
        store.establish(&session(Duration::seconds(-1)));

        assert_eq!(store.restore(now()), None);
        assert!(local.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_unreadable_record_is_dropped() {
        let (store, local, _) = store();
        local.set(SESSION_KEY, "{not json").unwrap();

        assert_eq!(store.restore(now()), None);
        assert!(local.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_initial_delivery_reaches_live_observer() {
        let (store, _, _) = store();
        store.establish(&session(Duration::hours(1)));
        let (id, _subscription, seen) = recorder(&store);

        let delivered = store.deliver_current(id, now());

        assert_eq!(delivered, Some(session(Duration::hours(1))));
        assert_eq!(*seen.borrow(), vec![Some(identity(ADMIN_EMAIL))]);
    }

    #[test]
    fn test_initial_delivery_skipped_after_release() {
        let (store, _, _) = store();
        store.establish(&session(Duration::hours(1)));
        let (id, subscription, seen) = recorder(&store);

        subscription.release();
        let delivered = store.deliver_current(id, now());

        assert_eq!(delivered, None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_initial_delivery_without_session_reports_none() {
        let (store, _, _) = store();
        let (id, _subscription, seen) = recorder(&store);

        assert_eq!(store.deliver_current(id, now()), None);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn test_expiry_only_ends_matching_generation() {
        let (store, _, _) = store();
        let (_, _subscription, seen) = recorder(&store);

        let stale = store.establish(&session(Duration::hours(1)));
        let current = store.establish(&session(Duration::hours(2)));

        assert!(!store.expire(stale));
        assert!(store.restore(now()).is_some());

        assert!(store.expire(current));
        assert_eq!(store.restore(now()), None);
        assert_eq!(seen.borrow().last(), Some(&None));
    }

    #[test]
    fn test_restart_keeps_theme_but_not_session() {
        let local = MemoryStorage::new();

        let first_run = SessionStore::new(local.clone(), MemoryStorage::new());
        first_run.set_persistence(Persistence::Session);
        first_run.establish(&session(Duration::hours(1)));
        let mut prefs = PreferenceStore::new(local.clone(), RecordingSink::default());
        prefs.load();
        prefs.set_theme(Theme::Dark);
        assert!(first_run.restore(now()).is_some());

        // New tab: fresh session area over the same local area.
        let second_run = SessionStore::new(local.clone(), MemoryStorage::new());
        second_run.set_persistence(Persistence::Session);
        let mut reloaded = PreferenceStore::new(local.clone(), RecordingSink::default());

        assert_eq!(second_run.restore(now()), None);
        assert_eq!(reloaded.load(), Theme::Dark);
        assert_eq!(local.get(DEFAULT_THEME_KEY).as_deref(), Some("dark"));
    }
}
