//! Session state store.
//!
//! Single writer, many readers. Every effective mutation is persisted and then
//! pushed to subscribers synchronously, before control returns to the caller.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use super::error::OnboardingError;
use super::model::{AccountTypeId, OnboardingProgress, SectorId, Stage};
use super::persisted;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to write storage: {0}")]
    Write(String),
}

/// Durable slot holding the serialized progress record.
pub trait ProgressStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ProgressStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.raw()
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&OnboardingProgress)>;

pub struct SessionStore {
    progress: OnboardingProgress,
    storage: Box<dyn ProgressStorage>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl SessionStore {
    /// Loads persisted progress; anything unreadable starts anonymous.
    pub fn open(storage: impl ProgressStorage + 'static) -> Self {
        let progress = persisted::decode(storage.load().as_deref());
        log::info!("Onboarding progress restored at stage {:?}", progress.stage());
        Self {
            progress,
            storage: Box::new(storage),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn progress(&self) -> &OnboardingProgress {
        &self.progress
    }

    pub fn stage(&self) -> Stage {
        self.progress.stage()
    }

    pub fn login(&mut self) {
        let mut next = self.progress.clone();
        next.set_authenticated();
        if self.commit(next) {
            log::info!("login");
        }
    }

    /// Requires an authenticated session.
    pub fn choose_sector(&mut self, id: SectorId) -> Result<(), OnboardingError> {
        if !self.progress.is_authenticated() {
            return Err(self.reject("choose_sector"));
        }
        let mut next = self.progress.clone();
        next.set_sector(id);
        if self.commit(next) {
            log::info!("sector selected: {:?}", self.progress.selected_sector());
        }
        Ok(())
    }

    /// Requires a selected sector.
    pub fn choose_account_type(&mut self, id: AccountTypeId) -> Result<(), OnboardingError> {
        if self.progress.selected_sector().is_none() {
            return Err(self.reject("choose_account_type"));
        }
        let mut next = self.progress.clone();
        next.set_account_type(id);
        if self.commit(next) {
            log::info!(
                "account type selected: {:?}",
                self.progress.selected_account_type()
            );
        }
        Ok(())
    }

    /// Clears all three fields in a single update.
    pub fn logout(&mut self) {
        if self.commit(OnboardingProgress::anonymous()) {
            log::info!("logout");
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&OnboardingProgress) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn reject(&self, action: &'static str) -> OnboardingError {
        let err = OnboardingError::PreconditionViolation {
            action,
            stage: self.progress.stage(),
        };
        log::error!("{}", err);
        err
    }

    /// Returns false when `next` equals the current progress.
    fn commit(&mut self, next: OnboardingProgress) -> bool {
        if next == self.progress {
            return false;
        }
        self.progress = next;
        self.persist();
        for (_, listener) in &self.listeners {
            listener(&self.progress);
        }
        true
    }

    fn persist(&self) {
        let result = persisted::encode(&self.progress)
            .map_err(|e| StorageError::Write(e.to_string()))
            .and_then(|raw| self.storage.save(&raw));
        if let Err(e) = result {
            log::warn!("Onboarding progress kept in memory only: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ReadOnlyStorage;

    impl ProgressStorage for ReadOnlyStorage {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _raw: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn onboarded_store(storage: MemoryStorage) -> SessionStore {
        let mut store = SessionStore::open(storage);
        store.login();
        store.choose_sector(SectorId::new("retail")).unwrap();
        store.choose_account_type(AccountTypeId::new("owner")).unwrap();
        store
    }

    #[test]
    fn test_full_onboarding_sequence() {
        let store = onboarded_store(MemoryStorage::new());
        assert_eq!(store.stage(), Stage::Onboarded);
    }

    #[test]
    fn test_progress_survives_reload() {
        let storage = MemoryStorage::new();
        let _ = onboarded_store(storage.clone());

        let reopened = SessionStore::open(storage);
        assert_eq!(reopened.stage(), Stage::Onboarded);
        assert_eq!(
            reopened.progress().selected_account_type(),
            Some(&AccountTypeId::new("owner"))
        );
    }

    #[test]
    fn test_corrupt_record_opens_anonymous() {
        let store = SessionStore::open(MemoryStorage::with_record("{broken"));
        assert_eq!(store.stage(), Stage::Anonymous);
    }

    #[test]
    fn test_out_of_order_actions_rejected() {
        let mut store = SessionStore::open(MemoryStorage::new());

        let err = store.choose_sector(SectorId::new("retail")).unwrap_err();
        assert_eq!(
            err,
            OnboardingError::PreconditionViolation {
                action: "choose_sector",
                stage: Stage::Anonymous,
            }
        );

        store.login();
        let err = store.choose_account_type(AccountTypeId::new("owner")).unwrap_err();
        assert!(matches!(err, OnboardingError::PreconditionViolation { .. }));
        assert_eq!(store.stage(), Stage::SectorPending);
    }

    #[test]
    fn test_logout_clears_everything_once() {
        let storage = MemoryStorage::new();
        let mut store = onboarded_store(storage.clone());

        let notified = Rc::new(RefCell::new(Vec::new()));
        let seen = notified.clone();
        store.subscribe(move |p| seen.borrow_mut().push(p.clone()));

        store.logout();
        store.logout();

        assert_eq!(store.progress(), &OnboardingProgress::anonymous());
        assert_eq!(*notified.borrow(), vec![OnboardingProgress::anonymous()]);
        assert_eq!(
            SessionStore::open(storage).progress(),
            &OnboardingProgress::anonymous()
        );
    }

    #[test]
    fn test_noop_mutations_do_not_notify() {
        let mut store = SessionStore::open(MemoryStorage::new());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.login();
        store.login();
        store.choose_sector(SectorId::new("retail")).unwrap();
        store.choose_sector(SectorId::new("retail")).unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_listener_sees_new_progress() {
        let mut store = SessionStore::open(MemoryStorage::new());
        let last = Rc::new(Cell::new(Stage::Anonymous));
        let sink = last.clone();
        store.subscribe(move |p| sink.set(p.stage()));

        store.login();
        assert_eq!(last.get(), Stage::SectorPending);
        store.choose_sector(SectorId::new("logistics")).unwrap();
        assert_eq!(last.get(), Stage::AccountTypePending);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = SessionStore::open(MemoryStorage::new());
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.login();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let mut store = SessionStore::open(ReadOnlyStorage);
        store.login();
        assert_eq!(store.stage(), Stage::SectorPending);
    }

    #[test]
    fn test_changing_sector_requires_account_type_again() {
        let mut store = onboarded_store(MemoryStorage::new());
        store.choose_sector(SectorId::new("healthcare")).unwrap();
        assert_eq!(store.stage(), Stage::AccountTypePending);
    }
}
