//! Demo state and its `localStorage` persistence.

use serde::{Deserialize, Serialize};

use crate::presets::DEFAULT_PRESET;

pub(crate) const STORAGE_KEY: &str = "ui-showcase.state.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShowcaseState {
    pub theme: String,
    pub country: Option<String>,
    pub skills: Vec<String>,
    pub framework: Option<String>,
    pub active_tab: String,
    pub email: String,
    pub newsletter: bool,
    pub terms: bool,
    pub plan: String,
    pub filters: Vec<String>,
    pub dismissed_tags: Vec<String>,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            theme: DEFAULT_PRESET.to_string(),
            country: None,
            skills: vec!["rust".to_string()],
            framework: None,
            active_tab: "overview".to_string(),
            email: String::new(),
            newsletter: true,
            terms: false,
            plan: "team".to_string(),
            filters: vec!["open".to_string()],
            dismissed_tags: Vec::new(),
        }
    }
}

impl ShowcaseState {
    pub fn toggle_filter(&mut self, filter: &str) {
        if let Some(position) = self.filters.iter().position(|active| active == filter) {
            self.filters.remove(position);
        } else {
            self.filters.push(filter.to_string());
        }
    }

    pub fn dismiss_tag(&mut self, tag: &str) {
        if !self.dismissed_tags.iter().any(|dismissed| dismissed == tag) {
            self.dismissed_tags.push(tag.to_string());
        }
    }

    pub fn email_invalid(&self) -> bool {
        let email = self.email.trim();
        if email.is_empty() {
            return false;
        }
        match email.split_once('@') {
            Some((local, domain)) => local.is_empty() || !domain.contains('.') || domain.ends_with('.'),
            None => true,
        }
    }
}

pub(crate) fn load_state() -> Option<ShowcaseState> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                leptos::logging::warn!("ui showcase state discarded: {err}");
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Writes serialized state.
///
/// # Errors
///
/// Returns an error when localStorage is unavailable or the write fails.
pub(crate) fn save_raw(raw_json: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(STORAGE_KEY, raw_json)
            .map_err(|e| format!("localStorage set_item failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = raw_json;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let state: ShowcaseState =
            serde_json::from_str(r#"{"theme":"ocean","newsletter":false}"#).expect("state parses");
        assert_eq!(state.theme, "ocean");
        assert!(!state.newsletter);
        assert_eq!(state.active_tab, "overview");
        assert_eq!(state.plan, "team");
    }

    #[test]
    fn filters_toggle_in_place() {
        let mut state = ShowcaseState::default();
        state.toggle_filter("closed");
        assert_eq!(state.filters, vec!["open".to_string(), "closed".to_string()]);
        state.toggle_filter("open");
        assert_eq!(state.filters, vec!["closed".to_string()]);
    }

    #[test]
    fn dismissing_twice_keeps_one_entry() {
        let mut state = ShowcaseState::default();
        state.dismiss_tag("design");
        state.dismiss_tag("design");
        assert_eq!(state.dismissed_tags, vec!["design".to_string()]);
    }

    #[test]
    fn email_validation_flags_obvious_mistakes() {
        let mut state = ShowcaseState::default();
        assert!(!state.email_invalid());
        for (email, invalid) in [
            ("ada@example.com", false),
            ("ada.example.com", true),
            ("@example.com", true),
            ("ada@example", true),
            ("ada@example.", true),
        ] {
            state.email = email.to_string();
            assert_eq!(state.email_invalid(), invalid, "{email}");
        }
    }
}
