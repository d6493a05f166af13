//! Static design tokens for the component library.
//!
//! Tokens are immutable `const` tables grouped the same way the components consume them:
//! colors, typography, spacing, border radii, shadows, and icon sizes. The crate has no UI
//! dependency; renderers read the tables directly or apply them as CSS custom properties via
//! [`css_variables`] and [`ThemeConfig::resolve`].

#![warn(rustdoc::broken_intra_doc_links)]

mod color;
mod colors;
pub mod css;
mod spacing;
mod theme;
mod typography;

use serde::Serialize;

pub use color::{ColorParseError, HexColor};
pub use colors::{ColorScale, Colors, SecondaryTints, Shade, TextColors, COLORS};
pub use css::{css_variables, CssVariable};
pub use spacing::{
    BorderRadius, IconSizes, Shadows, Spacing, BORDER_RADIUS, ICON_SIZES, SHADOWS, SPACING,
};
pub use theme::{
    ColorOverrides, ResolvedTheme, ThemeConfig, ThemeError, TypographyOverrides, DEFAULT_PREFIX,
};
pub use typography::{
    FontFamilies, FontSizes, FontWeights, LetterSpacing, LineHeights, Typography, TYPOGRAPHY,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// The complete token tree.
pub struct DesignTokens {
    pub colors: Colors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
    pub shadows: Shadows,
    pub icon_sizes: IconSizes,
}

/// Default token tree.
pub const DESIGN_TOKENS: DesignTokens = DesignTokens {
    colors: COLORS,
    typography: TYPOGRAPHY,
    spacing: SPACING,
    border_radius: BORDER_RADIUS,
    shadows: SHADOWS,
    icon_sizes: ICON_SIZES,
};

impl DesignTokens {
    /// Serializes the token tree as pretty JSON with camelCase keys.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the tree cannot be encoded.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_export_uses_camel_case_group_names() {
        let json = DESIGN_TOKENS.to_json().expect("tokens serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("round trip");
        assert_eq!(value["colors"]["primary"]["500"], "#4600F2");
        assert_eq!(value["borderRadius"]["button"], "0.5rem");
        assert_eq!(value["iconSizes"]["medium"], "1.25rem");
        assert_eq!(value["typography"]["fontWeight"]["bold"], 700);
        assert_eq!(value["spacing"]["pageVertical"], "2rem");
    }
}
