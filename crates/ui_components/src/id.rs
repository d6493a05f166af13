//! Deterministic element ids for label, help-text, and ARIA associations.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::use_context;

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default)]
/// Per-tree id counter provided by [`ThemeProvider`](crate::ThemeProvider).
///
/// Clones share one counter, so every component under a provider draws from the same sequence.
pub struct IdGenerator {
    next: Rc<Cell<u64>>,
}

impl IdGenerator {
    /// Creates a generator whose first id ends in `-1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next `{prefix}-{n}` id.
    pub fn next_id(&self, prefix: &str) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("{prefix}-{n}")
    }
}

/// Resolves the DOM id for a component instance.
///
/// An explicit, non-empty id always wins. Otherwise the id comes from the nearest
/// [`IdGenerator`] context, or from a process-wide counter when no provider is mounted.
pub fn use_component_id(prefix: &str, explicit: Option<String>) -> String {
    if let Some(id) = explicit.filter(|id| !id.trim().is_empty()) {
        return id;
    }
    match use_context::<IdGenerator>() {
        Some(ids) => ids.next_id(prefix),
        None => {
            let n = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
            format!("{prefix}-g{n}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clones_share_one_sequence() {
        let ids = IdGenerator::new();
        let shared = ids.clone();
        assert_eq!(ids.next_id("input"), "input-1");
        assert_eq!(shared.next_id("checkbox"), "checkbox-2");
        assert_eq!(ids.next_id("input"), "input-3");
    }

    #[test]
    fn separate_generators_restart_at_one() {
        assert_eq!(IdGenerator::new().next_id("tabs"), "tabs-1");
        assert_eq!(IdGenerator::new().next_id("tabs"), "tabs-1");
    }
}
