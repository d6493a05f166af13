//! Live token tables read from the active theme.

use design_tokens::{css::kebab_case, ResolvedTheme};
use leptos::*;
use ui_components::use_theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenPreview {
    Swatch,
    Length,
    Radius,
    Shadow,
    FontSize,
    None,
}

impl TokenPreview {
    fn style(self, variable: &str) -> Option<String> {
        match self {
            Self::Swatch => Some(format!("background:var({variable});")),
            Self::Length => Some(format!("width:var({variable});")),
            Self::Radius => Some(format!("border-radius:var({variable});")),
            Self::Shadow => Some(format!("box-shadow:var({variable});")),
            Self::FontSize => Some(format!("font-size:var({variable});")),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenRow {
    pub label: String,
    pub variable: String,
    pub value: String,
}

/// Variables under a token group such as `["colors"]` or `["typography", "fontSize"]`.
pub(crate) fn group_rows(theme: &ResolvedTheme, group: &[&str]) -> Vec<TokenRow> {
    let mut prefix = format!("--{}", theme.prefix);
    for segment in group {
        prefix.push('-');
        prefix.push_str(&kebab_case(segment));
    }
    prefix.push('-');

    theme
        .variables
        .iter()
        .filter_map(|variable| {
            let label = variable.name.strip_prefix(&prefix)?;
            Some(TokenRow {
                label: label.to_string(),
                variable: variable.name.clone(),
                value: variable.value.clone(),
            })
        })
        .collect()
}

#[component]
pub(crate) fn TokenTable(
    title: &'static str,
    group: &'static [&'static str],
    preview: TokenPreview,
) -> impl IntoView {
    let theme = use_theme();
    let rows = move || {
        let Some(context) = theme else {
            return Vec::new();
        };
        context.theme.with(|theme| group_rows(theme, group))
    };

    view! {
        <section class="showcase-token-table" data-token-group=group.join(".")>
            <h4>{title}</h4>
            <ul>
                {move || {
                    rows()
                        .into_iter()
                        .map(|row| {
                            view! {
                                <li>
                                    {preview
                                        .style(&row.variable)
                                        .map(|style| view! { <span class="showcase-token-preview" style=style></span> })}
                                    <code>{row.label}</code>
                                    <span class="showcase-token-value">{row.value}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_are_scoped_to_the_requested_group() {
        let theme = ResolvedTheme::default();
        let rows = group_rows(&theme, &["borderRadius"]);
        assert_eq!(rows.first().map(|row| row.label.as_str()), Some("none"));
        assert!(rows.iter().all(|row| row.variable.starts_with("--ds-border-radius-")));

        let font_sizes = group_rows(&theme, &["typography", "fontSize"]);
        assert!(font_sizes.iter().any(|row| row.label == "base" && row.value == "1rem"));
    }

    #[test]
    fn previews_reference_the_variable() {
        assert_eq!(
            TokenPreview::Swatch.style("--ds-colors-surface"),
            Some("background:var(--ds-colors-surface);".to_string())
        );
        assert_eq!(TokenPreview::None.style("--ds-x"), None);
    }
}
