//! Persisted UI preferences (theme).
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Requires a browser
//! environment; without the `hydrate` feature every browser call is a no-op
//! and `load()` returns the default.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage failures are logged and the in-memory
//! preference still applies for the current session.

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "rental_ui_preferences";

/// User-level presentation preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    pub dark_mode: bool,
}

impl UiPreferences {
    /// Stored preference, else the system colour scheme, else light.
    pub fn load() -> Self {
        read_stored().unwrap_or_else(|| Self { dark_mode: system_prefers_dark() })
    }

    /// Parse a stored JSON blob. Unknown fields are ignored, missing ones
    /// take their defaults.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                log::debug!("ignoring stored preferences: {e}");
                None
            }
        }
    }

    pub fn to_json(&self) -> Result<String, PreferenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Flip dark mode and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Value for the `data-theme` attribute.
    pub fn theme(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }

    /// Apply the theme to the document root.
    pub fn apply(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            if let Err(e) = root.set_attribute("data-theme", self.theme()) {
                log::warn!("failed to set data-theme: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("theme {} (no document)", self.theme());
        }
    }

    /// Persist to `localStorage`.
    pub fn save(&self) -> Result<(), PreferenceError> {
        let raw = self.to_json()?;
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(STORAGE_KEY, &raw)
                .map_err(|e| PreferenceError::Storage(format!("{e:?}")))?;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("preferences not persisted outside the browser: {raw}");
        }
        Ok(())
    }

    /// Persist, logging instead of returning failures.
    pub fn save_or_log(&self) {
        if let Err(e) = self.save() {
            log::warn!("preferences not saved: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, PreferenceError> {
    web_sys::window()
        .and_then(|w| w.local_storage().unwrap_or_default())
        .ok_or(PreferenceError::StorageUnavailable)
}

fn read_stored() -> Option<UiPreferences> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(storage) = storage() else {
            return None;
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => UiPreferences::from_json(&raw),
            _ => None,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        matches!(window.match_media("(prefers-color-scheme: dark)"), Ok(Some(mq)) if mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
