//! Component primitives and their shared styling tokens.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::{
    button_icon_slots, button_state, help_message, Button, ButtonIconSlots, ButtonLeading,
    Checkbox, Input, RadioButton,
};
pub use data_display::{
    chip_icon_size, chip_trailing_slot, Card, CardBody, CardFooter, CardHeader, Chip, ChipTrailing,
};
pub use navigation::{TabPanel, Tabs};
pub use overlays::{Dropdown, Tooltip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Filled brand action.
    Primary,
    /// Tinted secondary action.
    Secondary,
    /// Bordered action.
    Outline,
    /// Borderless action.
    Ghost,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared control sizing tokens.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    Md,
    /// Large control.
    Lg,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Icon size paired with the control size (the `iconSizes` token group).
    pub fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Sm,
            Self::Md => IconSize::Md,
            Self::Lg => IconSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text-input surface variants.
pub enum InputVariant {
    /// Bordered field.
    Outlined,
    /// Tinted field without a resting border.
    Filled,
}

impl Default for InputVariant {
    fn default() -> Self {
        Self::Outlined
    }
}

impl InputVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tab strip styles.
pub enum TabsVariant {
    /// Plain tabs with a background on the active tab.
    Standard,
    /// Rounded pill tabs.
    Pills,
    /// Tabs with a sliding underline indicator.
    Underline,
}

impl Default for TabsVariant {
    fn default() -> Self {
        Self::Underline
    }
}

impl TabsVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Pills => "pills",
            Self::Underline => "underline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tooltip bubble placement relative to its trigger.
pub enum TooltipPlacement {
    /// Above, centered.
    Top,
    /// Above, start-aligned.
    TopStart,
    /// Above, end-aligned.
    TopEnd,
    /// Below, centered.
    Bottom,
    /// Below, start-aligned.
    BottomStart,
    /// Below, end-aligned.
    BottomEnd,
    /// Left, centered.
    Left,
    /// Left, top-aligned.
    LeftStart,
    /// Left, bottom-aligned.
    LeftEnd,
    /// Right, centered.
    Right,
    /// Right, top-aligned.
    RightStart,
    /// Right, bottom-aligned.
    RightEnd,
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self::Top
    }
}

impl TooltipPlacement {
    /// Every placement.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
    ];

    /// Stable placement token, e.g. `"top-start"`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }

    /// Side of the trigger the bubble sits on.
    pub fn side(self) -> &'static str {
        self.token().split('-').next().unwrap_or("top")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Chip color variants.
pub enum ChipVariant {
    /// Brand color.
    Primary,
    /// Brand tint.
    Secondary,
    /// Positive status.
    Success,
    /// Cautionary status.
    Warning,
    /// Error status.
    Error,
    /// Informational status.
    Info,
    /// Gray.
    Neutral,
}

impl Default for ChipVariant {
    fn default() -> Self {
        Self::Neutral
    }
}

impl ChipVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card surface variants.
pub enum CardVariant {
    /// Bordered surface with a subtle shadow.
    Standard,
    /// Raised surface.
    Elevated,
    /// Border only.
    Outlined,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl CardVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card inner padding tokens.
pub enum CardPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Roomy padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl CardPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Whether a key press should activate a custom button-like element.
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("grid-span-2")), "ui-card grid-span-2");
    }

    #[test]
    fn defaults_match_documented_component_defaults() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ControlSize::default().token(), "md");
        assert_eq!(TabsVariant::default().token(), "underline");
        assert_eq!(TooltipPlacement::default().token(), "top");
        assert_eq!(ChipVariant::default().token(), "neutral");
        assert_eq!(CardVariant::default().token(), "default");
        assert_eq!(CardPadding::default().token(), "md");
    }

    #[test]
    fn placement_side_is_the_first_token_segment() {
        let sides: Vec<_> = TooltipPlacement::ALL.iter().map(|p| p.side()).collect();
        assert_eq!(
            sides,
            vec![
                "top", "top", "top", "bottom", "bottom", "bottom", "left", "left", "left",
                "right", "right", "right"
            ]
        );
    }

    #[test]
    fn enter_and_space_activate_button_like_elements() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("ArrowDown"));
    }

    #[test]
    fn control_sizes_pick_matching_icon_sizes() {
        assert_eq!(ControlSize::Sm.icon_size().px(), 16);
        assert_eq!(ControlSize::Md.icon_size().px(), 20);
        assert_eq!(ControlSize::Lg.icon_size().px(), 24);
    }
}
