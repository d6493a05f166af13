//! CSS custom-property export for token trees.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `--name: value` custom property.
pub struct CssVariable {
    /// Full property name including the leading `--`.
    pub name: String,
    /// Rendered CSS value.
    pub value: String,
}

impl CssVariable {
    /// Renders the declaration without a trailing semicolon.
    pub fn declaration(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

/// Builds the custom-property name for a token path, e.g. `["colors", "primary", "500"]`.
pub fn variable_name<S: AsRef<str>>(prefix: &str, path: &[S]) -> String {
    let mut name = format!("--{prefix}");
    for segment in path {
        name.push('-');
        name.push_str(&kebab_case(segment.as_ref()));
    }
    name
}

/// Flattens any serializable token tree into custom properties in declaration order.
///
/// # Errors
///
/// Returns the serializer error when `tokens` cannot be represented as JSON.
pub fn css_variables<T: Serialize>(tokens: &T, prefix: &str) -> serde_json::Result<Vec<CssVariable>> {
    let tree = serde_json::to_value(tokens)?;
    let mut out = Vec::new();
    let mut path = Vec::new();
    flatten(&tree, prefix, &mut path, &mut out);
    Ok(out)
}

/// Joins variables into a single inline `style` attribute value.
pub fn inline_style(variables: &[CssVariable]) -> String {
    variables
        .iter()
        .map(|variable| format!("{};", variable.declaration()))
        .collect::<Vec<_>>()
        .join("")
}

/// Renders variables as a stylesheet rule for `selector`.
pub fn stylesheet(selector: &str, variables: &[CssVariable]) -> String {
    let mut css = format!("{selector} {{\n");
    for variable in variables {
        css.push_str("  ");
        css.push_str(&variable.declaration());
        css.push_str(";\n");
    }
    css.push_str("}\n");
    css
}

fn flatten<'a>(value: &'a Value, prefix: &str, path: &mut Vec<&'a str>, out: &mut Vec<CssVariable>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.as_str());
                flatten(child, prefix, path, out);
                path.pop();
            }
        }
        leaf => {
            if let Some(rendered) = render_leaf(leaf) {
                out.push(CssVariable {
                    name: variable_name(prefix, path.as_slice()),
                    value: rendered,
                });
            }
        }
    }
}

fn render_leaf(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(match (number.as_u64(), number.as_f64()) {
            (Some(int), _) => int.to_string(),
            (None, Some(float)) if float.fract() == 0.0 => format!("{float:.0}"),
            _ => number.to_string(),
        }),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(font_family_name)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Object(_) => None,
    }
}

/// Quotes font family names that contain whitespace.
pub fn font_family_name(name: &str) -> String {
    if name.contains(char::is_whitespace) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

/// Converts `camelCase` keys to `kebab-case`; digits and existing dashes are preserved.
pub fn kebab_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    for (index, ch) in raw.char_indices() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DESIGN_TOKENS;

    fn lookup<'a>(variables: &'a [CssVariable], name: &str) -> Option<&'a str> {
        variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value.as_str())
    }

    #[test]
    fn kebab_cases_camel_keys() {
        assert_eq!(kebab_case("successLight"), "success-light");
        assert_eq!(kebab_case("buttonSmall"), "button-small");
        assert_eq!(kebab_case("2xl"), "2xl");
        assert_eq!(kebab_case("page_heading"), "page-heading");
    }

    #[test]
    fn flattens_nested_token_groups() {
        let variables = css_variables(&DESIGN_TOKENS, "ds").expect("tokens serialize");
        assert_eq!(lookup(&variables, "--ds-colors-primary-500"), Some("#4600F2"));
        assert_eq!(lookup(&variables, "--ds-colors-text-secondary"), Some("#6B7280"));
        assert_eq!(lookup(&variables, "--ds-spacing-page-horizontal"), Some("3rem"));
        assert_eq!(lookup(&variables, "--ds-border-radius-chip"), Some("9999px"));
        assert_eq!(lookup(&variables, "--ds-icon-sizes-large"), Some("1.5rem"));
        assert_eq!(lookup(&variables, "--ds-shadows-2xl"), Some("0 25px 50px -12px rgb(0 0 0 / 0.25)"));
    }

    #[test]
    fn renders_numbers_without_trailing_zero() {
        let variables = css_variables(&DESIGN_TOKENS, "ds").expect("tokens serialize");
        assert_eq!(lookup(&variables, "--ds-typography-font-weight-semibold"), Some("600"));
        assert_eq!(lookup(&variables, "--ds-typography-line-height-none"), Some("1"));
        assert_eq!(lookup(&variables, "--ds-typography-line-height-page-heading"), Some("1.4"));
    }

    #[test]
    fn quotes_multi_word_font_families() {
        let variables = css_variables(&DESIGN_TOKENS, "ds").expect("tokens serialize");
        assert_eq!(
            lookup(&variables, "--ds-typography-font-family-serif"),
            Some("Georgia, Cambria, \"Times New Roman\", Times, serif")
        );
    }

    #[test]
    fn keeps_declaration_order() {
        let variables = css_variables(&DESIGN_TOKENS, "ds").expect("tokens serialize");
        let first = variables.first().map(|variable| variable.name.as_str());
        assert_eq!(first, Some("--ds-colors-primary-50"));
    }

    #[test]
    fn renders_inline_style_and_stylesheet() {
        let variables = vec![CssVariable {
            name: "--x-a".to_string(),
            value: "1px".to_string(),
        }];
        assert_eq!(inline_style(&variables), "--x-a: 1px;");
        assert_eq!(stylesheet(":root", &variables), ":root {\n  --x-a: 1px;\n}\n");
    }
}
