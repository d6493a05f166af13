use super::*;
use crate::id::use_component_id;

/// Text shown under a field and whether it renders in the error tone.
///
/// An error message is shown only while `error` is set; otherwise the helper text is shown.
/// Returns `None` when neither applies.
pub fn help_message(
    error: bool,
    error_message: Option<&str>,
    helper_text: Option<&str>,
) -> Option<(String, bool)> {
    match (error, error_message, helper_text) {
        (true, Some(message), _) if !message.is_empty() => Some((message.to_string(), true)),
        (_, _, Some(helper)) if !helper.is_empty() => Some((helper.to_string(), error)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content of the slot before a button's text.
pub enum ButtonLeading {
    /// Busy spinner.
    Spinner,
    /// Caller-provided icon.
    Icon(IconName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon slots rendered around a button's text.
pub struct ButtonIconSlots {
    /// Slot before the text.
    pub leading: Option<ButtonLeading>,
    /// Slot after the text.
    pub trailing: Option<IconName>,
}

/// Icon slots for a button: loading swaps the left icon for a spinner and drops the right icon.
pub fn button_icon_slots(
    loading: bool,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
) -> ButtonIconSlots {
    if loading {
        return ButtonIconSlots {
            leading: Some(ButtonLeading::Spinner),
            trailing: None,
        };
    }
    ButtonIconSlots {
        leading: left_icon.map(ButtonLeading::Icon),
        trailing: right_icon,
    }
}

/// `data-ui-state` token for a button. Loading outranks disabled.
pub fn button_state(loading: bool, disabled: bool) -> &'static str {
    if loading {
        "loading"
    } else if disabled {
        "disabled"
    } else {
        "idle"
    }
}

#[component]
/// Action button with variant, size, loading, and icon slots.
///
/// While `loading` is set the button is disabled, shows a spinner in place of the left icon,
/// and hides the right icon.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let blocked = Signal::derive(move || disabled.get() || loading.get());
    let icon_size = size.icon_size();
    let slots = create_memo(move |_| button_icon_slots(loading.get(), left_icon, right_icon));

    view! {
        <button
            type=button_type
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            title=title
            aria-busy=move || bool_token(loading.get())
            disabled=move || blocked.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-full-width=bool_token(full_width)
            data-ui-state=move || button_state(loading.get(), disabled.get())
            on:click=move |ev| {
                if blocked.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || match slots.get().leading {
                Some(ButtonLeading::Spinner) => {
                    view! {
                        <span data-ui-slot="spinner" aria-hidden="true">
                            <svg viewBox="0 0 24 24" fill="none" width="1em" height="1em">
                                <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25" />
                                <path fill="currentColor" opacity="0.75" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
                            </svg>
                        </span>
                    }
                        .into_view()
                }
                Some(ButtonLeading::Icon(icon)) => {
                    view! {
                        <span data-ui-slot="icon-left">
                            <Icon icon size=icon_size />
                        </span>
                    }
                        .into_view()
                }
                None => ().into_view(),
            }}
            {children.map(|children| view! { <span data-ui-slot="text">{children()}</span> })}
            {move || {
                slots
                    .get()
                    .trailing
                    .map(|icon| {
                        view! {
                            <span data-ui-slot="icon-right">
                                <Icon icon size=icon_size />
                            </span>
                        }
                    })
            }}
        </button>
    }
}

#[component]
/// Labeled text input with icons, helper text, and error state.
pub fn Input(
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = InputVariant::Outlined)] variant: InputVariant,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional)] start_icon: Option<IconName>,
    #[prop(optional)] end_icon: Option<IconName>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let input_id = use_component_id("input", id);
    let help_id = format!("{input_id}-help");
    let help = Signal::derive(move || {
        help_message(error.get(), error_message.as_deref(), helper_text.as_deref())
    });
    let icon_size = size.icon_size();
    let described_by = {
        let help_id = help_id.clone();
        move || help.with(Option::is_some).then(|| help_id.clone())
    };

    view! {
        <div
            class=merge_layout_class("ui-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-size=size.token()
            data-ui-variant=variant.token()
            data-ui-full-width=bool_token(full_width)
            data-ui-invalid=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label
                .map(|label| {
                    view! {
                        <label for=input_id.clone() data-ui-slot="label">
                            {label}
                            {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
                        </label>
                    }
                })}
            <div
                data-ui-slot="control"
                data-ui-start-icon=bool_token(start_icon.is_some())
                data-ui-end-icon=bool_token(end_icon.is_some())
            >
                {start_icon
                    .map(|icon| {
                        view! {
                            <span data-ui-slot="icon-start">
                                <Icon icon size=icon_size />
                            </span>
                        }
                    })}
                <input
                    id=input_id.clone()
                    node_ref=node_ref
                    type=input_type
                    name=name
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    aria-invalid=move || bool_token(error.get())
                    aria-describedby=described_by
                    data-ui-slot="field"
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(event_target_value(&ev));
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                />
                {end_icon
                    .map(|icon| {
                        view! {
                            <span data-ui-slot="icon-end">
                                <Icon icon size=icon_size />
                            </span>
                        }
                    })}
            </div>
            {move || {
                help.get()
                    .map(|(text, is_error)| {
                        view! {
                            <div
                                id=help_id.clone()
                                data-ui-slot="help"
                                data-ui-tone=if is_error { "danger" } else { "secondary" }
                                role=is_error.then_some("alert")
                            >
                                {text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
/// Checkbox with an optional label.
pub fn Checkbox(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let checkbox_id = use_component_id("checkbox", id);

    view! {
        <div
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-invalid=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span data-ui-slot="control">
                <input
                    type="checkbox"
                    id=checkbox_id.clone()
                    name=name
                    aria-label=aria_label
                    aria-invalid=move || bool_token(error.get())
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        if disabled.get_untracked() {
                            return;
                        }
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(event_target_checked(&ev));
                        }
                    }
                />
                <span data-ui-slot="indicator" aria-hidden="true">
                    <Show when=move || checked.get() fallback=|| ()>
                        <Icon icon=IconName::Check size=IconSize::Xs />
                    </Show>
                </span>
            </span>
            {label
                .map(|label| {
                    view! {
                        <label for=checkbox_id.clone() data-ui-slot="label">
                            {label}
                        </label>
                    }
                })}
        </div>
    }
}

#[component]
/// Radio button reporting its `value` when chosen.
pub fn RadioButton(
    #[prop(into)] value: String,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let radio_id = use_component_id("radio", id);
    let reported = value.clone();

    view! {
        <div
            class=merge_layout_class("ui-radio", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-invalid=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span data-ui-slot="control">
                <input
                    type="radio"
                    id=radio_id.clone()
                    name=name
                    value=value
                    aria-invalid=move || bool_token(error.get())
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        if disabled.get_untracked() || !event_target_checked(&ev) {
                            return;
                        }
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(reported.clone());
                        }
                    }
                />
                <span data-ui-slot="indicator" aria-hidden="true"></span>
            </span>
            {label
                .map(|label| {
                    view! {
                        <label for=radio_id.clone() data-ui-slot="label">
                            {label}
                        </label>
                    }
                })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{button_icon_slots, button_state, help_message, ButtonIconSlots, ButtonLeading};
    use crate::IconName;

    #[test]
    fn error_message_wins_only_while_in_error() {
        assert_eq!(
            help_message(true, Some("Required"), Some("Your email")),
            Some(("Required".to_string(), true))
        );
        assert_eq!(
            help_message(false, Some("Required"), Some("Your email")),
            Some(("Your email".to_string(), false))
        );
    }

    #[test]
    fn helper_text_keeps_error_tone_without_message() {
        assert_eq!(
            help_message(true, None, Some("Your email")),
            Some(("Your email".to_string(), true))
        );
    }

    #[test]
    fn loading_button_shows_spinner_and_hides_side_icons() {
        assert_eq!(
            button_icon_slots(true, Some(IconName::Download), Some(IconName::ChevronRight)),
            ButtonIconSlots {
                leading: Some(ButtonLeading::Spinner),
                trailing: None,
            }
        );
        assert_eq!(button_state(true, false), "loading");
        assert_eq!(button_state(true, true), "loading");
    }

    #[test]
    fn idle_button_keeps_its_icons() {
        assert_eq!(
            button_icon_slots(false, Some(IconName::Download), Some(IconName::ChevronRight)),
            ButtonIconSlots {
                leading: Some(ButtonLeading::Icon(IconName::Download)),
                trailing: Some(IconName::ChevronRight),
            }
        );
        assert_eq!(
            button_icon_slots(false, None, None),
            ButtonIconSlots {
                leading: None,
                trailing: None,
            }
        );
        assert_eq!(button_state(false, true), "disabled");
        assert_eq!(button_state(false, false), "idle");
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(help_message(false, Some("Required"), None), None);
        assert_eq!(help_message(true, Some(""), None), None);
        assert_eq!(help_message(false, None, None), None);
    }
}
