//! Selection, filtering, and keyboard rules for [`Dropdown`](crate::Dropdown).

use super::{wrap_step, NavKey};
use crate::IconName;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One selectable entry.
pub struct DropdownOption {
    /// Value reported through change events.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Disabled options are shown but cannot be selected.
    pub disabled: bool,
    /// Optional leading icon.
    pub icon: Option<IconName>,
}

impl DropdownOption {
    /// Enabled option without an icon.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            icon: None,
        }
    }

    /// Marks the option disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attaches a leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Current selection, owned by the caller.
pub enum DropdownValue {
    /// Nothing selected.
    #[default]
    None,
    /// Single-select value.
    Single(String),
    /// Multi-select values in selection order.
    Multiple(Vec<String>),
}

impl DropdownValue {
    /// Selected values as a list, regardless of mode.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::None => Vec::new(),
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Whether `value` is part of the selection.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::None => false,
            Self::Single(selected) => selected == value,
            Self::Multiple(values) => values.iter().any(|selected| selected == value),
        }
    }
}

impl From<&str> for DropdownValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for DropdownValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Option<String>> for DropdownValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::None, Self::Single)
    }
}

impl From<Vec<String>> for DropdownValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Payload of a selection change.
pub struct DropdownChange {
    /// New selection.
    pub value: DropdownValue,
    /// Options matching the new selection, in option-list order.
    pub options: Vec<DropdownOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient menu state.
pub struct DropdownState {
    /// Whether the menu is open.
    pub open: bool,
    /// Keyboard focus as a position in the visible (filtered) list.
    pub focused: Option<usize>,
    /// Search query; empty shows every option.
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Inputs to [`reduce_dropdown`].
pub enum DropdownAction {
    /// Trigger activated.
    Toggle,
    /// Pointer pressed outside the component.
    OutsidePress,
    /// Key pressed while the menu is open.
    Key(NavKey),
    /// Option at this index of the full option list clicked.
    Select(usize),
    /// Search query edited.
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by [`reduce_dropdown`].
pub enum DropdownEffect {
    /// Report a new selection.
    Change(DropdownChange),
    /// Return focus to the trigger button.
    FocusTrigger,
    /// Suppress the browser default for the key event.
    PreventDefault,
}

#[derive(Debug, Clone, Copy)]
/// Caller-owned inputs the reducer reads but never mutates.
pub struct DropdownContext<'a> {
    /// Full option list.
    pub options: &'a [DropdownOption],
    /// Current selection.
    pub value: &'a DropdownValue,
    /// Multi-select mode.
    pub multiselect: bool,
    /// Whole control disabled.
    pub disabled: bool,
}

/// Options matching the selection, in option-list order.
pub fn selected_options<'a>(
    options: &'a [DropdownOption],
    value: &DropdownValue,
) -> Vec<&'a DropdownOption> {
    options
        .iter()
        .filter(|option| value.contains(&option.value))
        .collect()
}

/// Trigger text: the placeholder, the selected label, or an `"n selected"` summary.
pub fn display_text(
    options: &[DropdownOption],
    value: &DropdownValue,
    multiselect: bool,
    placeholder: &str,
) -> String {
    let selected = selected_options(options, value);
    match selected.as_slice() {
        [] => placeholder.to_string(),
        [only] => only.label.clone(),
        [first, ..] if !multiselect => first.label.clone(),
        many => format!("{} selected", many.len()),
    }
}

/// Indices of options whose label contains `query`, case-insensitively.
pub fn filter_options(options: &[DropdownOption], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Index into the full option list of the keyboard-focused option, if any.
pub fn focused_option(options: &[DropdownOption], state: &DropdownState) -> Option<usize> {
    let position = state.focused?;
    filter_options(options, &state.query).get(position).copied()
}

/// Applies one action to the menu state and returns the effects to run.
pub fn reduce_dropdown(
    state: &mut DropdownState,
    props: DropdownContext<'_>,
    action: DropdownAction,
) -> Vec<DropdownEffect> {
    match action {
        DropdownAction::Toggle => {
            if props.disabled {
                return Vec::new();
            }
            state.open = !state.open;
            state.focused = None;
            if !state.open {
                state.query.clear();
            }
            Vec::new()
        }
        DropdownAction::OutsidePress => {
            close(state);
            Vec::new()
        }
        DropdownAction::Search(query) => {
            state.query = query;
            state.focused = None;
            Vec::new()
        }
        DropdownAction::Select(index) => select(state, props, index),
        DropdownAction::Key(key) => {
            if !state.open {
                return Vec::new();
            }
            let visible = filter_options(props.options, &state.query);
            match key {
                NavKey::Escape => {
                    close(state);
                    vec![DropdownEffect::FocusTrigger]
                }
                NavKey::Down | NavKey::Up => {
                    state.focused = wrap_step(state.focused, visible.len(), key == NavKey::Down);
                    vec![DropdownEffect::PreventDefault]
                }
                NavKey::Home | NavKey::End if !state.query.is_empty() => Vec::new(),
                NavKey::Home | NavKey::End => {
                    state.focused = match (key, visible.len()) {
                        (_, 0) => None,
                        (NavKey::Home, _) => Some(0),
                        (_, len) => Some(len - 1),
                    };
                    vec![DropdownEffect::PreventDefault]
                }
                NavKey::Enter => {
                    let mut effects = vec![DropdownEffect::PreventDefault];
                    if let Some(index) = state.focused.and_then(|position| visible.get(position)) {
                        effects.extend(select(state, props, *index));
                    }
                    effects
                }
                NavKey::Left | NavKey::Right | NavKey::Space => Vec::new(),
            }
        }
    }
}

fn close(state: &mut DropdownState) {
    state.open = false;
    state.focused = None;
    state.query.clear();
}

fn select(state: &mut DropdownState, props: DropdownContext<'_>, index: usize) -> Vec<DropdownEffect> {
    let Some(option) = props.options.get(index) else {
        return Vec::new();
    };
    if option.disabled || props.disabled {
        return Vec::new();
    }

    if props.multiselect {
        let current = props.value.values();
        let next: Vec<String> = if current.contains(&option.value.as_str()) {
            current
                .into_iter()
                .filter(|value| *value != option.value)
                .map(str::to_string)
                .collect()
        } else {
            current
                .into_iter()
                .map(str::to_string)
                .chain(std::iter::once(option.value.clone()))
                .collect()
        };
        let value = DropdownValue::Multiple(next);
        let options = selected_options(props.options, &value)
            .into_iter()
            .cloned()
            .collect();
        return vec![DropdownEffect::Change(DropdownChange { value, options })];
    }

    close(state);
    vec![
        DropdownEffect::Change(DropdownChange {
            value: DropdownValue::Single(option.value.clone()),
            options: vec![option.clone()],
        }),
        DropdownEffect::FocusTrigger,
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruits() -> Vec<DropdownOption> {
        vec![
            DropdownOption::new("apple", "Apple"),
            DropdownOption::new("banana", "Banana").disabled(),
            DropdownOption::new("cherry", "Cherry"),
            DropdownOption::new("grape", "Grape"),
        ]
    }

    fn props<'a>(
        options: &'a [DropdownOption],
        value: &'a DropdownValue,
        multiselect: bool,
    ) -> DropdownContext<'a> {
        DropdownContext {
            options,
            value,
            multiselect,
            disabled: false,
        }
    }

    fn open_state() -> DropdownState {
        DropdownState {
            open: true,
            ..DropdownState::default()
        }
    }

    #[test]
    fn display_text_summarizes_selection() {
        let options = fruits();
        assert_eq!(display_text(&options, &DropdownValue::None, false, "Pick"), "Pick");
        assert_eq!(display_text(&options, &"cherry".into(), false, "Pick"), "Cherry");

        let one = DropdownValue::Multiple(vec!["grape".to_string()]);
        assert_eq!(display_text(&options, &one, true, "Pick"), "Grape");
        let two = DropdownValue::Multiple(vec!["grape".to_string(), "apple".to_string()]);
        assert_eq!(display_text(&options, &two, true, "Pick"), "2 selected");

        let unknown = DropdownValue::Single("kiwi".to_string());
        assert_eq!(display_text(&options, &unknown, false, "Pick"), "Pick");
    }

    #[test]
    fn toggle_is_ignored_when_disabled() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = DropdownState::default();
        let disabled = DropdownContext {
            disabled: true,
            ..props(&options, &value, false)
        };
        assert!(reduce_dropdown(&mut state, disabled, DropdownAction::Toggle).is_empty());
        assert!(!state.open);

        reduce_dropdown(&mut state, props(&options, &value, false), DropdownAction::Toggle);
        assert!(state.open);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn arrow_keys_wrap_through_the_visible_list() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = open_state();
        let p = props(&options, &value, false);

        let effects = reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Down));
        assert_eq!(effects, vec![DropdownEffect::PreventDefault]);
        assert_eq!(state.focused, Some(0));

        for _ in 0..3 {
            reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Down));
        }
        assert_eq!(state.focused, Some(3));
        reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Down));
        assert_eq!(state.focused, Some(0));
        reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Up));
        assert_eq!(state.focused, Some(3));

        let mut fresh = open_state();
        reduce_dropdown(&mut fresh, p, DropdownAction::Key(NavKey::Up));
        assert_eq!(fresh.focused, Some(3));
        reduce_dropdown(&mut fresh, p, DropdownAction::Key(NavKey::Home));
        assert_eq!(fresh.focused, Some(0));
        reduce_dropdown(&mut fresh, p, DropdownAction::Key(NavKey::End));
        assert_eq!(fresh.focused, Some(3));
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = DropdownState::default();
        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, false),
            DropdownAction::Key(NavKey::Down),
        );
        assert!(effects.is_empty());
        assert_eq!(state.focused, None);
    }

    #[test]
    fn escape_closes_and_refocuses_trigger() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = DropdownState {
            open: true,
            focused: Some(2),
            query: "ch".to_string(),
        };
        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, false),
            DropdownAction::Key(NavKey::Escape),
        );
        assert_eq!(effects, vec![DropdownEffect::FocusTrigger]);
        assert_eq!(state, DropdownState::default());
    }

    #[test]
    fn single_select_reports_option_and_closes() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = open_state();
        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, false),
            DropdownAction::Select(2),
        );
        assert_eq!(
            effects,
            vec![
                DropdownEffect::Change(DropdownChange {
                    value: DropdownValue::Single("cherry".to_string()),
                    options: vec![options[2].clone()],
                }),
                DropdownEffect::FocusTrigger,
            ]
        );
        assert!(!state.open);
    }

    #[test]
    fn disabled_option_is_not_selectable() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = open_state();
        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, false),
            DropdownAction::Select(1),
        );
        assert!(effects.is_empty());
        assert!(state.open);

        state.focused = Some(1);
        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, false),
            DropdownAction::Key(NavKey::Enter),
        );
        assert_eq!(effects, vec![DropdownEffect::PreventDefault]);
        assert!(state.open);
    }

    #[test]
    fn multiselect_toggles_and_stays_open() {
        let options = fruits();
        let value = DropdownValue::Multiple(vec!["grape".to_string()]);
        let mut state = open_state();

        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, true),
            DropdownAction::Select(0),
        );
        assert_eq!(
            effects,
            vec![DropdownEffect::Change(DropdownChange {
                value: DropdownValue::Multiple(vec!["grape".to_string(), "apple".to_string()]),
                options: vec![options[0].clone(), options[3].clone()],
            })]
        );
        assert!(state.open);

        let effects = reduce_dropdown(
            &mut state,
            props(&options, &value, true),
            DropdownAction::Select(3),
        );
        assert_eq!(
            effects,
            vec![DropdownEffect::Change(DropdownChange {
                value: DropdownValue::Multiple(Vec::new()),
                options: Vec::new(),
            })]
        );
    }

    #[test]
    fn enter_selects_the_focused_filtered_option() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = open_state();
        let p = props(&options, &value, false);

        reduce_dropdown(&mut state, p, DropdownAction::Search("RAP".to_string()));
        assert_eq!(filter_options(&options, &state.query), vec![3]);
        reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Down));
        let effects = reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Enter));
        assert_eq!(
            effects[1],
            DropdownEffect::Change(DropdownChange {
                value: DropdownValue::Single("grape".to_string()),
                options: vec![options[3].clone()],
            })
        );
        assert_eq!(state.query, "");
    }

    #[test]
    fn home_and_end_stay_with_the_search_field_while_typing() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = DropdownState {
            open: true,
            focused: Some(1),
            query: "ap".to_string(),
        };
        let p = props(&options, &value, false);

        assert!(reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::Home)).is_empty());
        assert!(reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::End)).is_empty());
        assert_eq!(state.focused, Some(1));

        reduce_dropdown(&mut state, p, DropdownAction::Search(String::new()));
        let effects = reduce_dropdown(&mut state, p, DropdownAction::Key(NavKey::End));
        assert_eq!(effects, vec![DropdownEffect::PreventDefault]);
        assert_eq!(state.focused, Some(3));
    }

    #[test]
    fn focused_option_maps_filtered_position_to_option_index() {
        let options = fruits();
        let mut state = DropdownState {
            open: true,
            focused: Some(1),
            query: String::new(),
        };
        assert_eq!(focused_option(&options, &state), Some(1));

        state.query = "e".to_string();
        assert_eq!(filter_options(&options, &state.query), vec![0, 2, 3]);
        assert_eq!(focused_option(&options, &state), Some(2));

        state.focused = Some(5);
        assert_eq!(focused_option(&options, &state), None);
        state.focused = None;
        assert_eq!(focused_option(&options, &state), None);
    }

    #[test]
    fn empty_list_keeps_focus_unset() {
        let value = DropdownValue::None;
        let mut state = open_state();
        reduce_dropdown(&mut state, props(&[], &value, false), DropdownAction::Key(NavKey::Down));
        assert_eq!(state.focused, None);
    }

    #[test]
    fn outside_press_closes_and_clears_search() {
        let options = fruits();
        let value = DropdownValue::None;
        let mut state = DropdownState {
            open: true,
            focused: Some(0),
            query: "a".to_string(),
        };
        reduce_dropdown(&mut state, props(&options, &value, false), DropdownAction::OutsidePress);
        assert_eq!(state, DropdownState::default());
    }
}
