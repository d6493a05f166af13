use super::*;
use crate::dom::{focus_element_by_id, horizontal_bounds};
use crate::id::use_component_id;
use crate::interaction::tabs::{
    reduce_tabs, IndicatorGeometry, TabChange, TabItem, TabsAction, TabsEffect, TabsState,
};
use crate::interaction::NavKey;

fn tab_dom_id(tabs_id: &str, item_id: &str) -> String {
    format!("{tabs_id}-tab-{item_id}")
}

fn panel_dom_id(tabs_id: &str, item_id: &str) -> String {
    format!("{tabs_id}-panel-{item_id}")
}

#[component]
/// Tab strip with keyboard navigation and an optional content panel.
///
/// Arrow keys move between enabled tabs and activate them; Home and End jump to the first and
/// last enabled tab. With the underline variant, an indicator slides under the active tab.
pub fn Tabs(
    #[prop(into)] items: Vec<TabItem>,
    #[prop(optional, into)] active_tab: Option<String>,
    #[prop(default = TabsVariant::Underline)] variant: TabsVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] full_width: bool,
    #[prop(default = true)] show_content: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<TabChange>>,
) -> impl IntoView {
    let state = create_rw_signal(TabsState::initial(&items, active_tab.as_deref()));
    let items = store_value(items);
    let tabs_id = store_value(use_component_id("tabs", id));
    let indicator = create_rw_signal(None::<IndicatorGeometry>);
    let list_ref = create_node_ref::<html::Div>();

    let dispatch = move |action: TabsAction| -> bool {
        let effects = items.with_value(|items| {
            let mut next = state.get_untracked();
            let effects = reduce_tabs(&mut next, items, action);
            state.set(next);
            effects
        });
        let handled = !effects.is_empty();
        for effect in effects {
            match effect {
                TabsEffect::Changed(change) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(change);
                    }
                }
                TabsEffect::Focus(index) => {
                    let item_id = items.with_value(|items| items.get(index).map(|item| item.id.clone()));
                    if let Some(item_id) = item_id {
                        focus_element_by_id(&tab_dom_id(&tabs_id.get_value(), &item_id));
                    }
                }
            }
        }
        handled
    };

    let measure = move || {
        if variant != TabsVariant::Underline {
            return;
        }
        let Some(active) = state.with_untracked(|state| state.active.clone()) else {
            indicator.set(None);
            return;
        };
        let Some(list) = list_ref.get_untracked() else {
            return;
        };
        let tab_bounds = horizontal_bounds(&tab_dom_id(&tabs_id.get_value(), &active));
        let list_left = list.get_bounding_client_rect().left();
        indicator.set(tab_bounds.map(|(left, width)| IndicatorGeometry::measure(left, width, list_left)));
    };

    create_effect(move |_| {
        state.with(|state| state.active.clone());
        if list_ref.get().is_some() {
            request_animation_frame(measure);
        }
    });
    let resize_listener = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize_listener.remove());

    let tab_buttons = items.with_value(|item_list| {
        item_list
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let tabs_id = tabs_id.get_value();
                let item_id = item.id.clone();
                let is_active = Signal::derive({
                    let item_id = item_id.clone();
                    move || state.with(|state| state.active.as_deref() == Some(item_id.as_str()))
                });
                let is_tab_stop = move || {
                    items.with_value(|items| state.with(|state| state.tab_stop(items))) == Some(index)
                };
                let disabled = item.disabled;
                view! {
                    <button
                        type="button"
                        role="tab"
                        id=tab_dom_id(&tabs_id, &item_id)
                        aria-selected=move || bool_token(is_active.get())
                        aria-controls=panel_dom_id(&tabs_id, &item_id)
                        tabindex=move || if is_tab_stop() { 0 } else { -1 }
                        disabled=disabled
                        class="ui-tab"
                        data-ui-primitive="true"
                        data-ui-kind="tab"
                        data-ui-variant=variant.token()
                        data-ui-size=size.token()
                        data-ui-full-width=bool_token(full_width)
                        data-ui-selected=move || bool_token(is_active.get())
                        data-ui-disabled=bool_token(disabled)
                        on:click=move |_| {
                            dispatch(TabsAction::Activate(index));
                        }
                        on:keydown=move |ev| {
                            let Some(key) = NavKey::from_key(&ev.key()) else {
                                return;
                            };
                            if dispatch(TabsAction::Key { from: index, key }) {
                                ev.prevent_default();
                            }
                        }
                    >
                        {item
                            .icon
                            .map(|icon| {
                                view! {
                                    <span data-ui-slot="icon">
                                        <Icon icon size=size.icon_size() />
                                    </span>
                                }
                            })}
                        <span data-ui-slot="label">{item.label.clone()}</span>
                        {item
                            .badge
                            .clone()
                            .map(|badge| view! { <span data-ui-slot="badge">{format!("({badge})")}</span> })}
                    </button>
                }
            })
            .collect_view()
    });

    let panel = move || {
        if !show_content {
            return None;
        }
        let active = state.with(|state| state.active.clone())?;
        let content = items.with_value(|items| {
            items
                .iter()
                .find(|item| item.id == active)
                .and_then(|item| item.content.clone())
        })?;
        let tabs_id = tabs_id.get_value();
        Some(view! {
            <div
                role="tabpanel"
                id=panel_dom_id(&tabs_id, &active)
                aria-labelledby=tab_dom_id(&tabs_id, &active)
                tabindex="0"
                data-ui-slot="panel"
            >
                {content.run()}
            </div>
        })
    };

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-full-width=bool_token(full_width)
        >
            <div
                node_ref=list_ref
                role="tablist"
                aria-label=aria_label
                aria-orientation="horizontal"
                data-ui-slot="list"
            >
                {tab_buttons}
                {(variant == TabsVariant::Underline)
                    .then(|| {
                        view! {
                            <div
                                data-ui-slot="indicator"
                                aria-hidden="true"
                                style=move || indicator.get().map(|geometry| geometry.style())
                            ></div>
                        }
                    })}
            </div>
            {panel}
        </div>
    }
}

#[component]
/// Standalone panel rendered only while `active`.
pub fn TabPanel(
    #[prop(into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] labelled_by: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let id = store_value(id);
    let labelled_by = store_value(labelled_by);
    let class = merge_layout_class("ui-tab-panel", layout_class);

    view! {
        <Show when=move || active.get() fallback=|| ()>
            <div
                class=class.clone()
                role="tabpanel"
                id=id.get_value()
                aria-labelledby=labelled_by.get_value()
                tabindex="0"
                data-ui-primitive="true"
                data-ui-kind="tab-panel"
            >
                {children()}
            </div>
        </Show>
    }
}
