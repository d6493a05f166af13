use super::*;

/// Icon size inside a chip: `Xs` (14px) for small chips, `Sm` (16px) for medium, `Md` (20px)
/// for large.
pub fn chip_icon_size(size: ControlSize) -> IconSize {
    match size {
        ControlSize::Sm => IconSize::Xs,
        ControlSize::Md => IconSize::Sm,
        ControlSize::Lg => IconSize::Md,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content after a chip's label.
pub enum ChipTrailing {
    /// Nothing.
    Empty,
    /// Caller-provided icon.
    Icon(IconName),
    /// Remove button.
    Dismiss,
}

/// Trailing slot of a chip: a dismissible chip shows the remove button instead of its right icon.
pub fn chip_trailing_slot(dismissible: bool, right_icon: Option<IconName>) -> ChipTrailing {
    match (dismissible, right_icon) {
        (true, _) => ChipTrailing::Dismiss,
        (false, Some(icon)) => ChipTrailing::Icon(icon),
        (false, None) => ChipTrailing::Empty,
    }
}

#[component]
/// Content container with surface variants and padding tokens.
///
/// An interactive card behaves as a button for pointer and keyboard (Enter, Space).
pub fn Card(
    #[prop(default = CardVariant::Standard)] variant: CardVariant,
    #[prop(default = CardPadding::Md)] padding: CardPadding,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let activate = move || {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(());
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            role=interactive.then_some("button")
            tabindex=interactive.then_some(0)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
            data-ui-interactive=bool_token(interactive)
            on:click=move |_| activate()
            on:keydown=move |ev| {
                if interactive && is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Card heading row with optional subtitle and trailing action.
pub fn CardHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] action: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-card-header", layout_class) data-ui-slot="header">
            <div data-ui-slot="header-content">
                {title.map(|title| view! { <h3 data-ui-slot="title">{title}</h3> })}
                {subtitle.map(|subtitle| view! { <p data-ui-slot="subtitle">{subtitle}</p> })}
                {children.map(|children| children())}
            </div>
            {action.map(|action| view! { <div data-ui-slot="action">{action.run()}</div> })}
        </div>
    }
}

#[component]
/// Main card content region.
pub fn CardBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-card-body", layout_class) data-ui-slot="body">
            {children()}
        </div>
    }
}

#[component]
/// Card action row.
pub fn CardFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-card-footer", layout_class) data-ui-slot="footer">
            {children()}
        </div>
    }
}

#[component]
/// Compact label for tags, filters, and statuses.
///
/// A chip is clickable when `clickable` is set or `on_click` is supplied; it then behaves as a
/// button for pointer and keyboard (Enter, Space). A dismissible chip renders a remove button
/// in place of its right icon.
pub fn Chip(
    #[prop(default = ChipVariant::Neutral)] variant: ChipVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] clickable: bool,
    #[prop(optional)] dismissible: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional, into)] dismiss_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let interactive = clickable || on_click.is_some();
    let icon_size = chip_icon_size(size);
    let dismiss_label = dismiss_label.unwrap_or_else(|| "Remove".to_string());
    let activate = move || {
        if !interactive || disabled.get_untracked() {
            return;
        }
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(());
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-chip", layout_class)
            role=interactive.then_some("button")
            tabindex=move || (interactive && !disabled.get()).then_some(0)
            aria-disabled=move || (interactive && disabled.get()).then_some("true")
            aria-pressed=move || (interactive && selected.get()).then_some("true")
            data-ui-primitive="true"
            data-ui-kind="chip"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-interactive=bool_token(interactive)
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| activate()
            on:keydown=move |ev| {
                if interactive && is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {left_icon
                .map(|icon| {
                    view! {
                        <span data-ui-slot="icon-left">
                            <Icon icon size=icon_size />
                        </span>
                    }
                })}
            <span data-ui-slot="label">{children()}</span>
            {match chip_trailing_slot(dismissible, right_icon) {
                ChipTrailing::Empty => ().into_view(),
                ChipTrailing::Icon(icon) => {
                    view! {
                        <span data-ui-slot="icon-right">
                            <Icon icon size=icon_size />
                        </span>
                    }
                        .into_view()
                }
                ChipTrailing::Dismiss => {
                    view! {
                        <button
                            type="button"
                            data-ui-slot="dismiss"
                            aria-label=dismiss_label
                            disabled=move || disabled.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                if disabled.get_untracked() {
                                    return;
                                }
                                if let Some(on_dismiss) = on_dismiss.as_ref() {
                                    on_dismiss.call(());
                                }
                            }
                            on:keydown=move |ev| ev.stop_propagation()
                        >
                            <Icon icon=IconName::Close size=icon_size />
                        </button>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chip_icons_are_one_step_below_control_icons() {
        assert_eq!(chip_icon_size(ControlSize::Sm).px(), 14);
        assert_eq!(chip_icon_size(ControlSize::Md).px(), 16);
        assert_eq!(chip_icon_size(ControlSize::Lg).px(), 20);
    }

    #[test]
    fn dismiss_button_only_on_dismissible_chips() {
        assert_eq!(chip_trailing_slot(false, None), ChipTrailing::Empty);
        assert_eq!(
            chip_trailing_slot(false, Some(IconName::ExpandMore)),
            ChipTrailing::Icon(IconName::ExpandMore)
        );
        assert_eq!(chip_trailing_slot(true, None), ChipTrailing::Dismiss);
    }

    #[test]
    fn dismissible_chip_hides_its_right_icon() {
        assert_eq!(chip_trailing_slot(true, Some(IconName::ExpandMore)), ChipTrailing::Dismiss);
    }
}
