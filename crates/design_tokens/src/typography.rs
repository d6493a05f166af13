//! Typography tokens: font stacks, sizes, weights, line heights, and tracking.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Ordered font stacks, most preferred family first.
pub struct FontFamilies {
    pub primary: &'static [&'static str],
    pub sans: &'static [&'static str],
    pub serif: &'static [&'static str],
    pub mono: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Font size scale plus the semantic aliases components reference.
pub struct FontSizes {
    pub xs: &'static str,
    pub small: &'static str,
    pub sm: &'static str,
    pub body: &'static str,
    pub subheading: &'static str,
    pub button_small: &'static str,
    pub button_medium: &'static str,
    pub button_large: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub page_heading: &'static str,
    #[serde(rename = "2xl")]
    pub xl2: &'static str,
    #[serde(rename = "3xl")]
    pub xl3: &'static str,
    #[serde(rename = "4xl")]
    pub xl4: &'static str,
    #[serde(rename = "5xl")]
    pub xl5: &'static str,
    #[serde(rename = "6xl")]
    pub xl6: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Numeric font weights.
pub struct FontWeights {
    pub thin: u16,
    pub extralight: u16,
    pub light: u16,
    pub normal: u16,
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
    pub extrabold: u16,
    pub black: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Unitless line-height multipliers.
pub struct LineHeights {
    pub none: f64,
    pub tight: f64,
    pub snug: f64,
    pub page_heading: f64,
    pub normal: f64,
    pub subheading: f64,
    pub relaxed: f64,
    pub loose: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Letter-spacing presets in `em`.
pub struct LetterSpacing {
    pub tighter: &'static str,
    pub tight: &'static str,
    pub normal: &'static str,
    pub wide: &'static str,
    pub wider: &'static str,
    pub widest: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Complete typography token group.
pub struct Typography {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
    pub letter_spacing: LetterSpacing,
}

/// Default typography built on the Inter family.
pub const TYPOGRAPHY: Typography = Typography {
    font_family: FontFamilies {
        primary: &["Inter", "sans-serif"],
        sans: &[
            "Inter",
            "system-ui",
            "-apple-system",
            "BlinkMacSystemFont",
            "Segoe UI",
            "Roboto",
            "sans-serif",
        ],
        serif: &["Georgia", "Cambria", "Times New Roman", "Times", "serif"],
        mono: &[
            "Menlo",
            "Monaco",
            "Consolas",
            "Liberation Mono",
            "Courier New",
            "monospace",
        ],
    },
    font_size: FontSizes {
        xs: "0.75rem",
        small: "0.75rem",
        sm: "0.875rem",
        body: "0.875rem",
        subheading: "0.875rem",
        button_small: "0.75rem",
        button_medium: "0.875rem",
        button_large: "1rem",
        base: "1rem",
        lg: "1.125rem",
        xl: "1.25rem",
        page_heading: "1.25rem",
        xl2: "1.5rem",
        xl3: "1.875rem",
        xl4: "2.25rem",
        xl5: "3rem",
        xl6: "3.75rem",
    },
    font_weight: FontWeights {
        thin: 100,
        extralight: 200,
        light: 300,
        normal: 400,
        regular: 400,
        medium: 500,
        semibold: 600,
        bold: 700,
        extrabold: 800,
        black: 900,
    },
    line_height: LineHeights {
        none: 1.0,
        tight: 1.25,
        snug: 1.375,
        page_heading: 1.4,
        normal: 1.5,
        subheading: 1.5,
        relaxed: 1.625,
        loose: 2.0,
    },
    letter_spacing: LetterSpacing {
        tighter: "-0.05em",
        tight: "-0.025em",
        normal: "0em",
        wide: "0.025em",
        wider: "0.05em",
        widest: "0.1em",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_aliases_match_their_scale_steps() {
        let size = TYPOGRAPHY.font_size;
        assert_eq!(size.small, size.xs);
        assert_eq!(size.body, size.sm);
        assert_eq!(size.subheading, size.sm);
        assert_eq!(size.page_heading, size.xl);
        assert_eq!(size.button_large, size.base);
        assert_eq!(TYPOGRAPHY.font_weight.regular, TYPOGRAPHY.font_weight.normal);
        assert_eq!(TYPOGRAPHY.line_height.subheading, TYPOGRAPHY.line_height.normal);
    }

    #[test]
    fn weights_ascend_in_hundreds() {
        let weights = TYPOGRAPHY.font_weight;
        let ordered = [
            weights.thin,
            weights.extralight,
            weights.light,
            weights.normal,
            weights.medium,
            weights.semibold,
            weights.bold,
            weights.extrabold,
            weights.black,
        ];
        for (index, weight) in ordered.iter().enumerate() {
            assert_eq!(*weight, (index as u16 + 1) * 100);
        }
    }

    #[test]
    fn every_stack_ends_with_a_generic_family() {
        let families = TYPOGRAPHY.font_family;
        for stack in [families.primary, families.sans, families.serif, families.mono] {
            let last = stack.last().copied().unwrap_or_default();
            assert!(matches!(last, "sans-serif" | "serif" | "monospace"), "{stack:?}");
        }
    }
}
