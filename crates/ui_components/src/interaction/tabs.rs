//! Tab activation, roving keyboard focus, and indicator geometry for [`Tabs`](crate::Tabs).

use std::fmt;

use leptos::ViewFn;

use super::NavKey;
use crate::IconName;

#[derive(Clone)]
/// One tab definition.
pub struct TabItem {
    /// Unique id within the tab set.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Panel content rendered while the tab is active.
    pub content: Option<ViewFn>,
    /// Disabled tabs cannot be activated.
    pub disabled: bool,
    /// Badge text rendered after the label.
    pub badge: Option<String>,
    /// Optional leading icon.
    pub icon: Option<IconName>,
}

impl TabItem {
    /// Enabled tab without content.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: None,
            disabled: false,
            badge: None,
            icon: None,
        }
    }

    /// Sets the panel content.
    pub fn with_content(mut self, content: impl Into<ViewFn>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the badge text.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Sets the leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Marks the tab disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl fmt::Debug for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("content", &self.content.is_some())
            .field("disabled", &self.disabled)
            .field("badge", &self.badge)
            .field("icon", &self.icon)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload of a tab change.
pub struct TabChange {
    /// Id of the newly active tab.
    pub id: String,
    /// Position of the tab in the item list.
    pub index: usize,
    /// Label of the newly active tab.
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Internal tab-set state.
pub struct TabsState {
    /// Id of the active tab.
    pub active: Option<String>,
}

impl TabsState {
    /// Initial state: `requested` as given, otherwise the first item's id.
    pub fn initial(items: &[TabItem], requested: Option<&str>) -> Self {
        let active = requested
            .map(str::to_string)
            .or_else(|| items.first().map(|item| item.id.clone()));
        Self { active }
    }

    /// Position of the active tab.
    pub fn active_index(&self, items: &[TabItem]) -> Option<usize> {
        let active = self.active.as_deref()?;
        items.iter().position(|item| item.id == active)
    }

    /// Tab reachable with the Tab key: the active one, or the first when none matches.
    pub fn tab_stop(&self, items: &[TabItem]) -> Option<usize> {
        self.active_index(items)
            .or_else(|| (!items.is_empty()).then_some(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_tabs`].
pub enum TabsAction {
    /// Tab at this index clicked.
    Activate(usize),
    /// Key pressed while the tab at `from` has focus.
    Key {
        /// Index of the focused tab.
        from: usize,
        /// Pressed key.
        key: NavKey,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by [`reduce_tabs`].
pub enum TabsEffect {
    /// Report the newly active tab.
    Changed(TabChange),
    /// Move DOM focus to the tab at this index.
    Focus(usize),
}

/// Applies one action and returns the effects to run.
///
/// Arrow keys skip disabled tabs and wrap; activation follows focus. Landing on the tab that
/// is already active only moves focus.
pub fn reduce_tabs(state: &mut TabsState, items: &[TabItem], action: TabsAction) -> Vec<TabsEffect> {
    match action {
        TabsAction::Activate(index) => activate(state, items, index),
        TabsAction::Key { from, key } => {
            let target = match key {
                NavKey::Right => step_enabled(items, from, true),
                NavKey::Left => step_enabled(items, from, false),
                NavKey::Home => items.iter().position(|item| !item.disabled),
                NavKey::End => items.iter().rposition(|item| !item.disabled),
                _ => None,
            };
            let Some(target) = target else {
                return Vec::new();
            };
            let mut effects = if state.active_index(items) == Some(target) {
                Vec::new()
            } else {
                activate(state, items, target)
            };
            effects.push(TabsEffect::Focus(target));
            effects
        }
    }
}

fn activate(state: &mut TabsState, items: &[TabItem], index: usize) -> Vec<TabsEffect> {
    let Some(item) = items.get(index).filter(|item| !item.disabled) else {
        return Vec::new();
    };
    state.active = Some(item.id.clone());
    vec![TabsEffect::Changed(TabChange {
        id: item.id.clone(),
        index,
        label: item.label.clone(),
    })]
}

fn step_enabled(items: &[TabItem], from: usize, forward: bool) -> Option<usize> {
    let len = items.len() as isize;
    if len == 0 {
        return None;
    }
    let delta = if forward { 1 } else { -1 };
    (1..=len)
        .map(|step| (from as isize + delta * step).rem_euclid(len) as usize)
        .find(|index| !items[*index].disabled)
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Position of the underline indicator relative to the tab list.
pub struct IndicatorGeometry {
    /// Indicator width in CSS pixels.
    pub width: f64,
    /// Horizontal offset from the tab list's left edge.
    pub offset: f64,
}

impl IndicatorGeometry {
    /// Geometry from the active tab's and the list's bounding rectangles.
    pub fn measure(tab_left: f64, tab_width: f64, list_left: f64) -> Self {
        Self {
            width: tab_width,
            offset: tab_left - list_left,
        }
    }

    /// Inline style positioning the indicator.
    pub fn style(&self) -> String {
        format!(
            "width:{}px;transform:translateX({}px);",
            self.width, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items() -> Vec<TabItem> {
        vec![
            TabItem::new("overview", "Overview"),
            TabItem::new("billing", "Billing").disabled(),
            TabItem::new("team", "Team").with_badge("3"),
            TabItem::new("audit", "Audit"),
        ]
    }

    fn changed(id: &str, index: usize, label: &str) -> TabsEffect {
        TabsEffect::Changed(TabChange {
            id: id.to_string(),
            index,
            label: label.to_string(),
        })
    }

    #[test]
    fn initial_tab_is_request_or_first_item() {
        let items = items();
        assert_eq!(TabsState::initial(&items, Some("team")).active.as_deref(), Some("team"));
        assert_eq!(TabsState::initial(&items, None).active.as_deref(), Some("overview"));

        let unknown = TabsState::initial(&items, Some("nope"));
        assert_eq!(unknown.active.as_deref(), Some("nope"));
        assert_eq!(unknown.active_index(&items), None);
        assert_eq!(unknown.tab_stop(&items), Some(0));

        let first_disabled = vec![TabItem::new("a", "A").disabled(), TabItem::new("b", "B")];
        assert_eq!(TabsState::initial(&first_disabled, None).active.as_deref(), Some("a"));
        assert_eq!(TabsState::initial(&[], None).active, None);
        assert_eq!(TabsState::initial(&[], None).tab_stop(&[]), None);
    }

    #[test]
    fn keyboard_landing_on_active_tab_only_moves_focus() {
        let items = vec![TabItem::new("a", "A"), TabItem::new("b", "B").disabled()];
        let mut state = TabsState::initial(&items, None);

        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 0, key: NavKey::Right });
        assert_eq!(effects, vec![TabsEffect::Focus(0)]);
        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 0, key: NavKey::Home });
        assert_eq!(effects, vec![TabsEffect::Focus(0)]);
        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 0, key: NavKey::End });
        assert_eq!(effects, vec![TabsEffect::Focus(0)]);
        assert_eq!(state.active.as_deref(), Some("a"));
    }

    #[test]
    fn clicking_disabled_tab_is_ignored() {
        let items = items();
        let mut state = TabsState::initial(&items, None);
        assert!(reduce_tabs(&mut state, &items, TabsAction::Activate(1)).is_empty());
        assert_eq!(state.active_index(&items), Some(0));
    }

    #[test]
    fn clicking_reports_change_even_when_already_active() {
        let items = items();
        let mut state = TabsState::initial(&items, None);
        assert_eq!(
            reduce_tabs(&mut state, &items, TabsAction::Activate(2)),
            vec![changed("team", 2, "Team")]
        );
        assert_eq!(
            reduce_tabs(&mut state, &items, TabsAction::Activate(2)),
            vec![changed("team", 2, "Team")]
        );
    }

    #[test]
    fn arrow_keys_skip_disabled_tabs_and_wrap() {
        let items = items();
        let mut state = TabsState::initial(&items, None);

        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 0, key: NavKey::Right });
        assert_eq!(effects, vec![changed("team", 2, "Team"), TabsEffect::Focus(2)]);

        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 3, key: NavKey::Right });
        assert_eq!(effects, vec![changed("overview", 0, "Overview"), TabsEffect::Focus(0)]);

        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 0, key: NavKey::Left });
        assert_eq!(effects, vec![changed("audit", 3, "Audit"), TabsEffect::Focus(3)]);
    }

    #[test]
    fn home_and_end_jump_to_enabled_edges() {
        let items = vec![
            TabItem::new("a", "A").disabled(),
            TabItem::new("b", "B"),
            TabItem::new("c", "C"),
            TabItem::new("d", "D").disabled(),
        ];
        let mut state = TabsState::initial(&items, None);
        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 1, key: NavKey::End });
        assert_eq!(effects[1], TabsEffect::Focus(2));
        let effects = reduce_tabs(&mut state, &items, TabsAction::Key { from: 2, key: NavKey::Home });
        assert_eq!(effects[1], TabsEffect::Focus(1));
    }

    #[test]
    fn unrelated_keys_do_nothing() {
        let items = items();
        let mut state = TabsState::initial(&items, None);
        assert!(reduce_tabs(&mut state, &items, TabsAction::Key { from: 0, key: NavKey::Down }).is_empty());
    }

    #[test]
    fn indicator_offset_is_relative_to_list() {
        let geometry = IndicatorGeometry::measure(148.5, 96.0, 40.0);
        assert_eq!(geometry, IndicatorGeometry { width: 96.0, offset: 108.5 });
        assert_eq!(geometry.style(), "width:96px;transform:translateX(108.5px);");
    }
}
