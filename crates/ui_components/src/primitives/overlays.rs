use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::dom::event_within;
use crate::id::use_component_id;
use crate::interaction::dropdown::{
    display_text, filter_options, focused_option, reduce_dropdown, selected_options,
    DropdownAction, DropdownChange, DropdownContext, DropdownEffect, DropdownOption,
    DropdownState, DropdownValue,
};
use crate::interaction::tooltip::{reduce_tooltip, TooltipAction, TooltipEffect, TooltipState};
use crate::interaction::NavKey;

#[component]
/// Select menu supporting single and multiple selection, search, and keyboard navigation.
///
/// The selection is owned by the caller: `value` is read on every render and changes are
/// reported through `on_change`. Pressing outside the component or `Escape` closes the menu.
pub fn Dropdown(
    #[prop(into)] options: MaybeSignal<Vec<DropdownOption>>,
    #[prop(optional, into)] value: MaybeSignal<DropdownValue>,
    #[prop(optional)] multiselect: bool,
    #[prop(optional)] searchable: bool,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<DropdownChange>>,
) -> impl IntoView {
    let options = Signal::derive(move || options.get());
    let value = Signal::derive(move || value.get());
    let placeholder = placeholder.unwrap_or_else(|| "Select an option".to_string());
    let state = create_rw_signal(DropdownState::default());
    let anchor_ref = create_node_ref::<html::Div>();
    let trigger_ref = create_node_ref::<html::Button>();
    let search_ref = create_node_ref::<html::Input>();

    let trigger_id = use_component_id("dropdown", id);
    let listbox_id = store_value(format!("{trigger_id}-listbox"));
    let option_id = move |index: usize| format!("{}-option-{index}", listbox_id.get_value());
    let help_id = format!("{trigger_id}-help");
    let help = Signal::derive(move || {
        help_message(error.get(), error_message.as_deref(), helper_text.as_deref())
    });

    let described_by = {
        let help_id = help_id.clone();
        move || help.with(Option::is_some).then(|| help_id.clone())
    };

    let dispatch = move |action: DropdownAction| -> bool {
        let effects = options.with_untracked(|options| {
            value.with_untracked(|value| {
                let mut next = state.get_untracked();
                let effects = reduce_dropdown(
                    &mut next,
                    DropdownContext {
                        options,
                        value,
                        multiselect,
                        disabled: disabled.get_untracked(),
                    },
                    action,
                );
                if next != state.get_untracked() {
                    state.set(next);
                }
                effects
            })
        });

        let mut prevent_default = false;
        for effect in effects {
            match effect {
                DropdownEffect::Change(change) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(change);
                    }
                }
                DropdownEffect::FocusTrigger => {
                    if let Some(trigger) = trigger_ref.get_untracked() {
                        let _ = trigger.focus();
                    }
                }
                DropdownEffect::PreventDefault => prevent_default = true,
            }
        }
        prevent_default
    };

    let outside_press_listener = window_event_listener(ev::mousedown, move |ev| {
        if !state.with_untracked(|state| state.open) {
            return;
        }
        let Some(anchor) = anchor_ref.get_untracked() else {
            return;
        };
        if !event_within(&ev, &anchor) {
            dispatch(DropdownAction::OutsidePress);
        }
    });
    on_cleanup(move || outside_press_listener.remove());

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || !state.with_untracked(|state| state.open) {
            return;
        }
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if dispatch(DropdownAction::Key(key)) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || key_listener.remove());

    create_effect(move |_| {
        if let Some(input) = search_ref.get() {
            let _ = input.focus();
        }
    });

    let active_descendant = move || {
        options
            .with(|options| state.with(|state| focused_option(options, state)))
            .map(option_id)
    };

    let trigger_text = move || {
        options.with(|options| {
            value.with(|value| display_text(options, value, multiselect, &placeholder))
        })
    };
    let has_selection = move || {
        options.with(|options| value.with(|value| !selected_options(options, value).is_empty()))
    };
    let trigger_icon = move || {
        if multiselect {
            return None;
        }
        options.with(|options| {
            value.with(|value| selected_options(options, value).first().and_then(|option| option.icon))
        })
    };

    let option_rows = move || {
        let visible = options.with(|options| {
            state.with(|state| filter_options(options, &state.query))
        });
        if options.with(Vec::is_empty) {
            return view! { <div data-ui-slot="empty">"No options available"</div> }.into_view();
        }
        if visible.is_empty() {
            return view! { <div data-ui-slot="empty">"No matching options"</div> }.into_view();
        }
        let focused = state.with(|state| state.focused);
        visible
            .into_iter()
            .enumerate()
            .filter_map(|(position, index)| {
                let option = options.with(|options| options.get(index).cloned())?;
                let selected = value.with(|value| value.contains(&option.value));
                let is_focused = focused == Some(position);
                Some(view! {
                    <button
                        type="button"
                        role="option"
                        id=option_id(index)
                        aria-selected=bool_token(selected)
                        disabled=option.disabled
                        data-ui-slot="option"
                        data-ui-selected=bool_token(selected)
                        data-ui-focused=bool_token(is_focused)
                        data-ui-disabled=bool_token(option.disabled)
                        on:click=move |_| {
                            dispatch(DropdownAction::Select(index));
                        }
                    >
                        {option
                            .icon
                            .map(|icon| {
                                view! {
                                    <span data-ui-slot="option-icon">
                                        <Icon icon size=IconSize::Sm />
                                    </span>
                                }
                            })}
                        <span data-ui-slot="option-text">{option.label}</span>
                        {selected
                            .then(|| {
                                view! {
                                    <span data-ui-slot="option-check">
                                        <Icon icon=IconName::Check size=IconSize::Sm />
                                    </span>
                                }
                            })}
                    </button>
                })
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-dropdown", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-size=size.token()
            data-ui-full-width=bool_token(full_width)
            data-ui-state=move || if state.with(|state| state.open) { "open" } else { "closed" }
            data-ui-invalid=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label
                .map(|label| {
                    view! {
                        <label for=trigger_id.clone() data-ui-slot="label">
                            {label}
                        </label>
                    }
                })}
            <div node_ref=anchor_ref data-ui-slot="anchor">
                <button
                    type="button"
                    id=trigger_id.clone()
                    node_ref=trigger_ref
                    data-ui-slot="trigger"
                    aria-haspopup="listbox"
                    aria-expanded=move || bool_token(state.with(|state| state.open))
                    aria-controls=listbox_id.get_value()
                    aria-invalid=move || bool_token(error.get())
                    aria-describedby=described_by
                    disabled=move || disabled.get()
                    on:click=move |_| {
                        dispatch(DropdownAction::Toggle);
                    }
                >
                    <span data-ui-slot="trigger-content">
                        {move || {
                            trigger_icon()
                                .map(|icon| {
                                    view! {
                                        <span data-ui-slot="trigger-icon">
                                            <Icon icon size=size.icon_size() />
                                        </span>
                                    }
                                })
                        }}
                        <span data-ui-slot="trigger-text" data-ui-placeholder=move || bool_token(!has_selection())>
                            {trigger_text}
                        </span>
                    </span>
                    <span data-ui-slot="trigger-arrow" aria-hidden="true">
                        <Icon icon=IconName::ExpandMore size=IconSize::Sm />
                    </span>
                </button>
                <Show when=move || state.with(|state| state.open) fallback=|| ()>
                    <div
                        data-ui-slot="menu"
                        role="listbox"
                        id=listbox_id.get_value()
                        aria-multiselectable=bool_token(multiselect)
                        aria-activedescendant=active_descendant
                    >
                        {searchable
                            .then(|| {
                                view! {
                                    <div data-ui-slot="search">
                                        <Icon icon=IconName::Search size=IconSize::Sm />
                                        <input
                                            type="text"
                                            placeholder="Search..."
                                            aria-label="Search options"
                                            node_ref=search_ref
                                            prop:value=move || state.with(|state| state.query.clone())
                                            on:input=move |ev| {
                                                dispatch(DropdownAction::Search(event_target_value(&ev)));
                                            }
                                        />
                                    </div>
                                }
                            })}
                        <div data-ui-slot="options">{option_rows}</div>
                    </div>
                </Show>
            </div>
            {move || {
                help.get()
                    .map(|(text, is_error)| {
                        view! {
                            <div
                                id=help_id.clone()
                                data-ui-slot="help"
                                data-ui-tone=if is_error { "danger" } else { "secondary" }
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
/// Hover and focus tooltip around arbitrary trigger content.
///
/// The bubble appears after `delay` milliseconds (immediately for zero) and hides as soon as
/// the pointer leaves or focus moves out. A disabled tooltip never shows.
pub fn Tooltip(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(default = TooltipPlacement::Top)] placement: TooltipPlacement,
    #[prop(default = 200)] delay: u32,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let content = Signal::derive(move || content.get());
    let state = create_rw_signal(TooltipState::default());
    let pending = store_value(None::<(u64, TimeoutHandle)>);
    let tooltip_id = store_value(use_component_id("tooltip", None));

    let cancel_pending = move || {
        if let Some((_, handle)) = pending.try_get_value().flatten() {
            handle.clear();
        }
        let _ = pending.try_set_value(None);
    };

    let run = move |action: TooltipAction| {
        let mut next = state.get_untracked();
        let effects = reduce_tooltip(&mut next, action);
        state.set(next);
        for effect in effects {
            match effect {
                TooltipEffect::CancelTimer => cancel_pending(),
                TooltipEffect::Schedule { generation, delay } => {
                    let fire = move || {
                        state.update(|state| {
                            reduce_tooltip(state, TooltipAction::TimerElapsed { generation });
                        });
                        pending.update_value(|slot| {
                            if slot.is_some_and(|(scheduled, _)| scheduled == generation) {
                                *slot = None;
                            }
                        });
                    };
                    match set_timeout_with_handle(fire, delay) {
                        Ok(handle) => pending.set_value(Some((generation, handle))),
                        Err(err) => {
                            logging::warn!("tooltip timer unavailable, showing immediately: {err:?}");
                            state.update(|state| {
                                reduce_tooltip(state, TooltipAction::TimerElapsed { generation });
                            });
                        }
                    }
                }
            }
        }
    };
    let show = move || {
        run(TooltipAction::Show {
            delay_ms: delay,
            disabled: disabled.get_untracked(),
        })
    };
    let hide = move || run(TooltipAction::Hide);
    on_cleanup(cancel_pending);

    let visible = Signal::derive(move || state.with(TooltipState::is_visible) && !disabled.get());

    view! {
        <div
            class=merge_layout_class("ui-tooltip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip"
            data-ui-placement=placement.token()
            data-ui-state=move || if visible.get() { "visible" } else { "hidden" }
        >
            <div
                data-ui-slot="trigger"
                aria-describedby=move || visible.get().then(|| tooltip_id.get_value())
                on:mouseenter=move |_| show()
                on:mouseleave=move |_| hide()
                on:focusin=move |_| show()
                on:focusout=move |_| hide()
            >
                {children()}
            </div>
            <Show when=move || visible.get() fallback=|| ()>
                <div
                    role="tooltip"
                    id=tooltip_id.get_value()
                    data-ui-slot="bubble"
                    data-ui-placement=placement.token()
                    data-ui-side=placement.side()
                >
                    <div data-ui-slot="content">{move || content.get()}</div>
                    <div data-ui-slot="arrow" aria-hidden="true"></div>
                </div>
            </Show>
        </div>
    }
}
