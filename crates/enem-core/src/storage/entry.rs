//! Typed persistence port.
//!
//! An [`Entry`] binds a storage key to a value type and a default. Loading
//! never fails: an absent entry, a read error or undecodable content all
//! yield the default, and the latter two are logged.

use std::marker::PhantomData;

use tracing::warn;

use super::KeyValueStore;
use crate::error::{CoreError, Result};
use crate::model::{DashboardState, Tab, Theme};

pub const STATE_KEY: &str = "enem2025_state_v1";
pub const THEME_KEY: &str = "enem2025_theme_v1";
pub const TAB_KEY: &str = "enem2025_tab_v1";

pub const STATE_ENTRY: Entry<DashboardState> = Entry::new(STATE_KEY, DashboardState::default);
pub const THEME_ENTRY: Entry<Theme> = Entry::new(THEME_KEY, Theme::default);
pub const TAB_ENTRY: Entry<Tab> = Entry::new(TAB_KEY, Tab::default);

/// Encoding of a value inside its storage entry.
pub trait StoredValue: Sized {
    fn encode(&self) -> Result<String>;

    /// `None` when `raw` cannot be decoded.
    fn decode(raw: &str) -> Option<Self>;
}

impl StoredValue for DashboardState {
    fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

impl StoredValue for Theme {
    fn encode(&self) -> Result<String> {
        Ok(self.as_str().to_string())
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(Theme::parse_lenient(raw))
    }
}

impl StoredValue for Tab {
    fn encode(&self) -> Result<String> {
        Ok(self.as_str().to_string())
    }

    fn decode(raw: &str) -> Option<Self> {
        Tab::parse(raw)
    }
}

pub struct Entry<T> {
    key: &'static str,
    default: fn() -> T,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<T> {}

impl<T: StoredValue> Entry<T> {
    pub const fn new(key: &'static str, default: fn() -> T) -> Self {
        Self {
            key,
            default,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Load the value, falling back to the default on any failure.
    pub fn load(&self, store: &dyn KeyValueStore) -> T {
        match store.get(self.key) {
            Ok(Some(raw)) => T::decode(&raw).unwrap_or_else(|| {
                warn!(key = self.key, "stored entry is malformed, using defaults");
                (self.default)()
            }),
            Ok(None) => (self.default)(),
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to read stored entry, using defaults");
                (self.default)()
            }
        }
    }

    /// # Errors
    /// Returns an error if the value cannot be encoded or written.
    pub fn save(&self, store: &dyn KeyValueStore, value: &T) -> Result<()> {
        let raw = value.encode()?;
        store.set(self.key, &raw).map_err(CoreError::from)
    }

    /// # Errors
    /// Returns an error if the entry cannot be removed.
    pub fn clear(&self, store: &dyn KeyValueStore) -> Result<()> {
        store.remove(self.key).map_err(CoreError::from)
    }
}
