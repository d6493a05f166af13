//! Spacing, radius, shadow, and icon-size tokens.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Spacing scale on a 4px base unit, plus component and page paddings.
pub struct Spacing {
    #[serde(rename = "0")]
    pub s0: &'static str,
    #[serde(rename = "1")]
    pub s1: &'static str,
    #[serde(rename = "2")]
    pub s2: &'static str,
    #[serde(rename = "3")]
    pub s3: &'static str,
    #[serde(rename = "4")]
    pub s4: &'static str,
    #[serde(rename = "5")]
    pub s5: &'static str,
    #[serde(rename = "6")]
    pub s6: &'static str,
    #[serde(rename = "7")]
    pub s7: &'static str,
    #[serde(rename = "8")]
    pub s8: &'static str,
    #[serde(rename = "10")]
    pub s10: &'static str,
    #[serde(rename = "12")]
    pub s12: &'static str,
    #[serde(rename = "16")]
    pub s16: &'static str,
    #[serde(rename = "20")]
    pub s20: &'static str,
    #[serde(rename = "24")]
    pub s24: &'static str,
    pub button_small: &'static str,
    pub button_medium: &'static str,
    pub button_large: &'static str,
    pub page_horizontal: &'static str,
    pub page_vertical: &'static str,
}

impl Spacing {
    /// Looks up a numeric scale step (`4` is 1rem). Returns `None` for steps not on the scale.
    pub const fn step(&self, step: u8) -> Option<&'static str> {
        match step {
            0 => Some(self.s0),
            1 => Some(self.s1),
            2 => Some(self.s2),
            3 => Some(self.s3),
            4 => Some(self.s4),
            5 => Some(self.s5),
            6 => Some(self.s6),
            7 => Some(self.s7),
            8 => Some(self.s8),
            10 => Some(self.s10),
            12 => Some(self.s12),
            16 => Some(self.s16),
            20 => Some(self.s20),
            24 => Some(self.s24),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Icon edge lengths paired with button sizes.
pub struct IconSizes {
    pub small: &'static str,
    pub medium: &'static str,
    pub large: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Corner radius scale plus per-component aliases.
pub struct BorderRadius {
    pub none: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub full: &'static str,
    pub button: &'static str,
    pub input: &'static str,
    pub card: &'static str,
    pub modal: &'static str,
    pub chip: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Box-shadow presets.
pub struct Shadows {
    pub none: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    #[serde(rename = "2xl")]
    pub xl2: &'static str,
    pub inner: &'static str,
}

/// Default spacing scale.
pub const SPACING: Spacing = Spacing {
    s0: "0px",
    s1: "0.25rem",
    s2: "0.5rem",
    s3: "0.75rem",
    s4: "1rem",
    s5: "1.25rem",
    s6: "1.5rem",
    s7: "1.75rem",
    s8: "2rem",
    s10: "2.5rem",
    s12: "3rem",
    s16: "4rem",
    s20: "5rem",
    s24: "6rem",
    button_small: "0.75rem",
    button_medium: "0.875rem",
    button_large: "1rem",
    page_horizontal: "3rem",
    page_vertical: "2rem",
};

/// Default icon sizes.
pub const ICON_SIZES: IconSizes = IconSizes {
    small: "1rem",
    medium: "1.25rem",
    large: "1.5rem",
};

/// Default radius scale.
pub const BORDER_RADIUS: BorderRadius = BorderRadius {
    none: "0px",
    sm: "0.25rem",
    md: "0.375rem",
    lg: "0.5rem",
    xl: "0.75rem",
    full: "9999px",
    button: "0.5rem",
    input: "0.375rem",
    card: "0.5rem",
    modal: "0.75rem",
    chip: "9999px",
    avatar: "9999px",
};

/// Default shadow presets.
pub const SHADOWS: Shadows = Shadows {
    none: "none",
    sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    base: "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    xl: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    xl2: "0 25px 50px -12px rgb(0 0 0 / 0.25)",
    inner: "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn rem_to_px(raw: &str) -> f64 {
        if let Some(px) = raw.strip_suffix("px") {
            return px.parse().unwrap_or(f64::NAN);
        }
        raw.strip_suffix("rem")
            .and_then(|rem| rem.parse::<f64>().ok())
            .map_or(f64::NAN, |rem| rem * 16.0)
    }

    #[test]
    fn numeric_steps_are_multiples_of_four_pixels() {
        for step in [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 16, 20, 24] {
            let value = SPACING.step(step).expect("step on scale");
            assert_eq!(rem_to_px(value), f64::from(step) * 4.0, "step {step}");
        }
        assert_eq!(SPACING.step(9), None);
    }

    #[test]
    fn component_radius_aliases_point_at_scale_values() {
        assert_eq!(BORDER_RADIUS.button, BORDER_RADIUS.lg);
        assert_eq!(BORDER_RADIUS.card, BORDER_RADIUS.lg);
        assert_eq!(BORDER_RADIUS.input, BORDER_RADIUS.md);
        assert_eq!(BORDER_RADIUS.modal, BORDER_RADIUS.xl);
        assert_eq!(BORDER_RADIUS.chip, BORDER_RADIUS.full);
        assert_eq!(BORDER_RADIUS.avatar, BORDER_RADIUS.full);
    }

    #[test]
    fn icon_sizes_grow_with_button_size() {
        assert!(rem_to_px(ICON_SIZES.small) < rem_to_px(ICON_SIZES.medium));
        assert!(rem_to_px(ICON_SIZES.medium) < rem_to_px(ICON_SIZES.large));
    }
}
