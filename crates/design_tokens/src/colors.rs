//! Color palette tokens.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Numbered shades of the primary brand scale.
pub enum Shade {
    /// Lightest tint.
    S50,
    /// Shade 100.
    S100,
    /// Shade 200.
    S200,
    /// Shade 300.
    S300,
    /// Shade 400.
    S400,
    /// Brand base shade.
    S500,
    /// Shade 600.
    S600,
    /// Shade 700.
    S700,
    /// Shade 800.
    S800,
    /// Darkest shade.
    S900,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// Numeric weight used in token keys (`50`, `100`, ... `900`).
    pub const fn weight(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Ten-step color scale keyed by shade weight.
pub struct ColorScale {
    #[serde(rename = "50")]
    pub s50: &'static str,
    #[serde(rename = "100")]
    pub s100: &'static str,
    #[serde(rename = "200")]
    pub s200: &'static str,
    #[serde(rename = "300")]
    pub s300: &'static str,
    #[serde(rename = "400")]
    pub s400: &'static str,
    #[serde(rename = "500")]
    pub s500: &'static str,
    #[serde(rename = "600")]
    pub s600: &'static str,
    #[serde(rename = "700")]
    pub s700: &'static str,
    #[serde(rename = "800")]
    pub s800: &'static str,
    #[serde(rename = "900")]
    pub s900: &'static str,
}

impl ColorScale {
    /// Returns the hex value for a shade.
    pub const fn shade(&self, shade: Shade) -> &'static str {
        match shade {
            Shade::S50 => self.s50,
            Shade::S100 => self.s100,
            Shade::S200 => self.s200,
            Shade::S300 => self.s300,
            Shade::S400 => self.s400,
            Shade::S500 => self.s500,
            Shade::S600 => self.s600,
            Shade::S700 => self.s700,
            Shade::S800 => self.s800,
            Shade::S900 => self.s900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Translucent tints of the primary base color.
pub struct SecondaryTints {
    /// Primary at 8% opacity.
    pub base: &'static str,
    /// Primary at 3% opacity.
    pub light: &'static str,
    /// Primary at 10% opacity.
    pub medium: &'static str,
    /// Primary at 15% opacity.
    pub dark: &'static str,
}

impl SecondaryTints {
    /// Opacity percentages applied to the primary base, in field order.
    pub const ALPHA_PERCENT: [(&'static str, u8); 4] =
        [("base", 8), ("light", 3), ("medium", 10), ("dark", 15)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Foreground text colors.
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Complete color palette.
pub struct Colors {
    pub primary: ColorScale,
    pub secondary: SecondaryTints,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: TextColors,
    pub border: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub success_light: &'static str,
    pub warning_light: &'static str,
    pub error_light: &'static str,
    pub info_light: &'static str,
    pub white: &'static str,
    pub black: &'static str,
    pub transparent: &'static str,
}

/// Default palette built around the `#4600F2` brand color.
pub const COLORS: Colors = Colors {
    primary: ColorScale {
        s50: "#f4f0ff",
        s100: "#e8deff",
        s200: "#d4c1ff",
        s300: "#b794ff",
        s400: "#9357ff",
        s500: "#4600F2",
        s600: "#4000e6",
        s700: "#3600cc",
        s800: "#2d00a6",
        s900: "#240080",
    },
    secondary: SecondaryTints {
        base: "#4600F214",
        light: "#4600F208",
        medium: "#4600F21A",
        dark: "#4600F226",
    },
    background: "#F4F5F8",
    surface: "#FFFFFF",
    text: TextColors {
        primary: "#1A1A1A",
        secondary: "#6B7280",
    },
    border: "#E5E7EB",
    success: "#22C55E",
    warning: "#FACC15",
    error: "#EF4444",
    info: "#3B82F6",
    success_light: "#dcfce7",
    warning_light: "#fef3c7",
    error_light: "#fee2e2",
    info_light: "#dbeafe",
    white: "#FFFFFF",
    black: "#000000",
    transparent: "transparent",
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::HexColor;

    #[test]
    fn brand_color_sits_at_shade_500() {
        assert_eq!(COLORS.primary.shade(Shade::S500), "#4600F2");
        assert_eq!(Shade::ALL.map(Shade::weight)[5], 500);
    }

    #[test]
    fn secondary_tints_are_primary_with_named_opacity() {
        let primary = HexColor::parse(COLORS.primary.s500).expect("brand color parses");
        let tints = [
            COLORS.secondary.base,
            COLORS.secondary.light,
            COLORS.secondary.medium,
            COLORS.secondary.dark,
        ];
        for ((_, percent), expected) in SecondaryTints::ALPHA_PERCENT.iter().zip(tints) {
            assert_eq!(primary.with_alpha_percent(*percent).to_string(), expected);
        }
    }

    #[test]
    fn every_palette_entry_except_transparent_is_valid_hex() {
        let value = serde_json::to_value(COLORS).expect("serialize colors");
        let mut stack = vec![value];
        while let Some(value) = stack.pop() {
            match value {
                serde_json::Value::Object(map) => stack.extend(map.into_iter().map(|(_, v)| v)),
                serde_json::Value::String(raw) if raw != "transparent" => {
                    assert!(HexColor::parse(&raw).is_ok(), "invalid color {raw}");
                }
                _ => {}
            }
        }
    }
}
