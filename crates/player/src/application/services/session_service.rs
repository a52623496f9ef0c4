//! Simulated login state
//!
//! Logging in only records a role name under `loggedInUser`; there is no
//! credential check. Logging out also drops the catalog store's transient
//! state so a new user starts with no selection and no open form.

use movieblog_domain::{Session, UserRole};

use crate::application::services::CatalogStore;
use crate::ports::outbound::{storage_keys, StorageProvider};

/// Service for reading and changing the logged-in user
pub struct SessionService<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SessionService<S> {
    /// Create a new SessionService with the given storage provider
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the current session from storage
    pub fn current_session(&self) -> Session {
        Session::from_stored(self.storage.load(storage_keys::LOGGED_IN_USER).as_deref())
    }

    /// Record `role` as the logged-in user
    pub fn sign_in(&self, role: UserRole) -> Session {
        self.storage.save(storage_keys::LOGGED_IN_USER, role.as_str());
        tracing::info!(role = %role, "Signed in");
        Session::logged_in(role)
    }

    /// Forget the logged-in user and reset the store's session state.
    ///
    /// The catalog itself is left alone.
    pub fn sign_out<C: StorageProvider>(&self, store: &mut CatalogStore<C>) {
        self.storage.remove(storage_keys::LOGGED_IN_USER);
        store.reset_session();
        tracing::info!("Signed out");
    }
}
