//! Durable slot for a user type chosen before sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page stages a choice here while the visitor is anonymous; the
//! reconciler consumes it after the user record arrives. The raw string is
//! stored as-is so unknown values survive untouched.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::net::types::UserType;

/// `localStorage` key holding the staged value.
pub const STORAGE_KEY: &str = "pendingUserType";

/// Get/set/clear access to the staged preference.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
    fn clear(&mut self);
}

/// Browser `localStorage` backed store. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-process store; counts writes so callers can assert on side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    value: Option<String>,
    sets: usize,
    clears: usize,
}

impl MemoryPreferences {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            ..Self::default()
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.sets += 1;
        self.value = Some(value.to_owned());
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.value = None;
    }
}

/// Record a choice made before authentication.
pub fn stage_user_type(store: &mut dyn PreferenceStore, user_type: UserType) {
    store.set(user_type.as_str());
}

/// The staged choice, if present and recognized.
pub fn staged_user_type(store: &dyn PreferenceStore) -> Option<UserType> {
    store.get().as_deref().and_then(UserType::parse)
}
