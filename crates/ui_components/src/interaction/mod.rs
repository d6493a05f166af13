//! DOM-free interaction state machines behind the stateful components.
//!
//! Each component keeps its transient state in a plain struct and routes every input through a
//! `reduce_*` function that mutates the state and returns the side effects to perform (callbacks,
//! focus moves, timers). The Leptos layer only translates DOM events into actions and effects
//! back into DOM calls, so all selection and keyboard rules are unit tested here.

pub mod dropdown;
pub mod tabs;
pub mod tooltip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the interactive components react to.
pub enum NavKey {
    /// `ArrowUp`.
    Up,
    /// `ArrowDown`.
    Down,
    /// `ArrowLeft`.
    Left,
    /// `ArrowRight`.
    Right,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// Space bar.
    Space,
    /// `Escape`.
    Escape,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowDown" | "Down" => Some(Self::Down),
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowRight" | "Right" => Some(Self::Right),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Moves a cursor one step through `len` slots, wrapping at both ends.
///
/// With no current position, forward lands on the first slot and backward on the last.
pub(crate) fn wrap_step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(index), true) => (index + 1) % len,
        (Some(index), false) => (index as isize - 1).rem_euclid(len as isize) as usize,
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_standard_and_legacy_key_names() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Space));
        assert_eq!(NavKey::from_key("Tab"), None);
    }

    #[test]
    fn wrap_step_cycles_in_both_directions() {
        assert_eq!(wrap_step(None, 3, true), Some(0));
        assert_eq!(wrap_step(None, 3, false), Some(2));
        assert_eq!(wrap_step(Some(2), 3, true), Some(0));
        assert_eq!(wrap_step(Some(0), 3, false), Some(2));
        assert_eq!(wrap_step(Some(1), 3, false), Some(0));
        assert_eq!(wrap_step(Some(5), 0, true), None);
    }
}
