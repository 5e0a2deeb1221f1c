//! Session Store
//!
//! Three independent slots (`token`, `nickname`, `apiChecked`) with a
//! write-time expiry each. The [`Session`] context wraps whichever
//! [`SessionStorage`] backs them (cookies in the browser, memory in tests).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::CHECKED_EXPIRY_DAYS;

pub const TOKEN_SLOT: &str = "token";
pub const NICKNAME_SLOT: &str = "nickname";
pub const CHECKED_SLOT: &str = "apiChecked";

/// Server `exp` values above this are unix timestamps, not day counts
const EPOCH_THRESHOLD: i64 = 100_000;

/// When a written slot stops being readable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expiry {
    /// Relative to the moment of writing
    Days(f64),
    /// Absolute point in time
    At(DateTime<Utc>),
}

impl Expiry {
    /// Interpret the `exp` field of a sign-in response.
    pub fn from_server_exp(exp: i64) -> Self {
        if exp > EPOCH_THRESHOLD {
            DateTime::<Utc>::from_timestamp(exp, 0)
                .map(Expiry::At)
                .unwrap_or(Expiry::Days(CHECKED_EXPIRY_DAYS))
        } else {
            Expiry::Days(exp as f64)
        }
    }

    /// Absolute expiry. Non-positive day counts expire immediately, counts
    /// beyond the calendar range fall back to the checked-flag lifetime.
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Expiry::Days(days) if days.is_nan() || *days <= 0.0 => now,
            Expiry::Days(days) => days_after(now, *days)
                .or_else(|| days_after(now, CHECKED_EXPIRY_DAYS))
                .unwrap_or(now),
            Expiry::At(at) => *at,
        }
    }
}

fn days_after(now: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    let millis = days * 86_400_000.0;
    if millis >= i64::MAX as f64 {
        return None;
    }
    now.checked_add_signed(TimeDelta::try_milliseconds(millis as i64)?)
}

/// Backing storage for session slots
pub trait SessionStorage: Send + Sync {
    /// Stored value, or `None` when absent or expired
    fn get(&self, name: &str) -> Option<String>;

    /// Store a value and reset its expiry
    fn set(&self, name: &str, content: &str, expiry: Expiry);

    /// Delete a slot immediately
    fn remove(&self, name: &str);
}

/// In-memory storage honouring expiry on read
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, (String, DateTime<Utc>)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiry recorded for a slot (present or not yet purged)
    pub fn expiry_of(&self, name: &str) -> Option<DateTime<Utc>> {
        self.lock().get(name).map(|(_, at)| *at)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, (String, DateTime<Utc>)>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, name: &str) -> Option<String> {
        let mut slots = self.lock();
        match slots.get(name) {
            Some((_, at)) if *at <= Utc::now() => {
                slots.remove(name);
                None
            }
            Some((value, _)) => Some(value.clone()),
            None => None,
        }
    }

    fn set(&self, name: &str, content: &str, expiry: Expiry) {
        let at = expiry.expires_at(Utc::now());
        self.lock().insert(name.to_string(), (content.to_string(), at));
    }

    fn remove(&self, name: &str) {
        self.lock().remove(name);
    }
}

/// Session context passed to every flow
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Session backed by a fresh [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_SLOT)
    }

    pub fn nickname(&self) -> Option<String> {
        self.storage.get(NICKNAME_SLOT)
    }

    /// True only when `apiChecked` holds exactly `"true"`
    pub fn is_checked(&self) -> bool {
        self.storage.get(CHECKED_SLOT).as_deref() == Some("true")
    }

    pub fn mark_checked(&self) {
        self.storage
            .set(CHECKED_SLOT, "true", Expiry::Days(CHECKED_EXPIRY_DAYS));
    }

    /// Drop the checked flag, keeping token and nickname
    pub fn clear_checked(&self) {
        self.storage.remove(CHECKED_SLOT);
    }

    pub fn store_credentials(&self, token: &str, nickname: &str, expiry: Expiry) {
        self.storage.set(TOKEN_SLOT, token, expiry);
        self.storage.set(NICKNAME_SLOT, nickname, expiry);
    }

    /// Remove all three slots (explicit logout)
    pub fn clear(&self) {
        self.storage.remove(TOKEN_SLOT);
        self.storage.remove(NICKNAME_SLOT);
        self.storage.remove(CHECKED_SLOT);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .field("checked", &self.is_checked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_slots_are_independent() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());

        session.store_credentials("tok", "Amy", Expiry::Days(1.0));
        session.mark_checked();
        session.clear_checked();

        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.nickname().as_deref(), Some("Amy"));
        assert!(!session.is_checked());
    }

    #[test]
    fn test_expired_slot_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.set("token", "old", Expiry::At(Utc::now() - Duration::seconds(1)));
        assert_eq!(storage.get("token"), None);

        storage.set("token", "new", Expiry::Days(0.5));
        assert_eq!(storage.get("token").as_deref(), Some("new"));
    }

    #[test]
    fn test_checked_flag_requires_literal_true() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());
        storage.set(CHECKED_SLOT, "yes", Expiry::Days(1.0));
        assert!(!session.is_checked());

        session.mark_checked();
        assert!(session.is_checked());
        let expires = storage.expiry_of(CHECKED_SLOT).unwrap();
        assert!(expires > Utc::now() + Duration::days(2));
    }

    #[test]
    fn test_server_exp_interpretation() {
        assert_eq!(Expiry::from_server_exp(7), Expiry::Days(7.0));
        match Expiry::from_server_exp(1_900_000_000) {
            Expiry::At(at) => assert_eq!(at.timestamp(), 1_900_000_000),
            other => panic!("expected absolute expiry, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_days_do_not_panic() {
        let now = Utc::now();
        assert_eq!(Expiry::from_server_exp(-9_000_000_000_000_000_000).expires_at(now), now);
        assert_eq!(Expiry::Days(f64::NAN).expires_at(now), now);

        let huge = Expiry::Days(1e300).expires_at(now);
        assert_eq!(huge, Expiry::Days(CHECKED_EXPIRY_DAYS).expires_at(now));
    }

    #[test]
    fn test_negative_server_exp_stores_nothing_readable() {
        let session = Session::in_memory();
        session.store_credentials("tok", "Ann", Expiry::from_server_exp(-5));
        assert_eq!(session.token(), None);
        assert_eq!(session.nickname(), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let session = Session::in_memory();
        session.store_credentials("tok", "Amy", Expiry::Days(1.0));
        session.mark_checked();
        session.clear();
        assert!(session.token().is_none());
        assert!(session.nickname().is_none());
        assert!(!session.is_checked());
    }
}
