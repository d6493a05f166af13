//! Browser showcase for the component library.
//!
//! Renders every component family and the live token tables inside a
//! [`ThemeProvider`], with a theme switcher fed by the bundled TOML presets.
//! Demo selections persist to `localStorage` between visits.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod presets;
mod state;
mod tokens;

use std::time::Duration;

use leptos::*;
use ui_components::prelude::*;

use crate::presets::{preset_config, PRESETS};
use crate::state::{load_state, save_raw, ShowcaseState};
use crate::tokens::{TokenPreview, TokenTable};

const COUNTRIES: [(&str, &str); 5] = [
    ("us", "United States"),
    ("ca", "Canada"),
    ("de", "Germany"),
    ("jp", "Japan"),
    ("br", "Brazil"),
];

const SKILLS: [(&str, &str); 5] = [
    ("rust", "Rust"),
    ("typescript", "TypeScript"),
    ("go", "Go"),
    ("python", "Python"),
    ("zig", "Zig"),
];

const PLANS: [(&str, &str); 3] = [
    ("starter", "Starter"),
    ("team", "Team"),
    ("enterprise", "Enterprise"),
];

const FILTERS: [(&str, &str); 4] = [
    ("open", "Open"),
    ("closed", "Closed"),
    ("mine", "Assigned to me"),
    ("stale", "Stale"),
];

const TAGS: [&str; 4] = ["design", "frontend", "accessibility", "tokens"];

fn options(pairs: &[(&str, &str)]) -> Vec<DropdownOption> {
    pairs
        .iter()
        .map(|(value, label)| DropdownOption::new(*value, *label))
        .collect()
}

fn single_value(change: DropdownChange) -> Option<String> {
    match change.value {
        DropdownValue::Single(value) => Some(value),
        _ => None,
    }
}

#[component]
/// Showcase root: theme switcher plus one section per component family.
pub fn ShowcaseApp() -> impl IntoView {
    let state = create_rw_signal(load_state().unwrap_or_default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        if let Err(err) = save_raw(&serialized) {
            logging::warn!("ui showcase persist failed: {err}");
        }
        last_saved.set(Some(serialized));
    });

    let theme_id = create_memo(move |_| state.with(|state| state.theme.clone()));
    let theme_config = create_memo(move |_| preset_config(&theme_id.get()));
    let theme_options: Vec<DropdownOption> = PRESETS
        .iter()
        .map(|preset| DropdownOption::new(preset.id, preset.label))
        .collect();

    view! {
        <ThemeProvider config=Signal::from(theme_config) layout_class="showcase-root">
            <header class="showcase-header">
                <div>
                    <h1>"Component Library"</h1>
                    <p>"Design tokens, icons, and interactive components."</p>
                </div>
                <Dropdown
                    label="Theme"
                    options=theme_options
                    value=Signal::derive(move || DropdownValue::from(theme_id.get()))
                    size=ControlSize::Sm
                    on_change=Callback::new(move |change: DropdownChange| {
                        if let Some(theme) = single_value(change) {
                            state.update(|state| state.theme = theme);
                        }
                    })
                />
            </header>
            <main class="showcase-sections">
                <ButtonSection />
                <InputSection state />
                <SelectionSection state />
                <DropdownSection state />
                <TabsSection state />
                <TooltipSection />
                <ChipSection state />
                <CardSection />
                <IconSection />
                <TokenSection />
            </main>
        </ThemeProvider>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Card variant=CardVariant::Outlined padding=CardPadding::Lg layout_class="showcase-section">
            <CardHeader title=title />
            <CardBody>{children()}</CardBody>
        </Card>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    let saving = create_rw_signal(false);
    let variants = [
        (ButtonVariant::Primary, "Primary"),
        (ButtonVariant::Secondary, "Secondary"),
        (ButtonVariant::Outline, "Outline"),
        (ButtonVariant::Ghost, "Ghost"),
        (ButtonVariant::Danger, "Danger"),
    ];

    view! {
        <Section title="Buttons">
            <div class="showcase-row">
                {variants
                    .into_iter()
                    .map(|(variant, label)| view! { <Button variant>{label}</Button> })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                <Button size=ControlSize::Sm>"Small"</Button>
                <Button size=ControlSize::Md>"Medium"</Button>
                <Button size=ControlSize::Lg>"Large"</Button>
            </div>
            <div class="showcase-row">
                <Button left_icon=IconName::Add>"Create"</Button>
                <Button variant=ButtonVariant::Outline right_icon=IconName::Download>"Export"</Button>
                <Button variant=ButtonVariant::Ghost left_icon=IconName::Refresh aria_label="Refresh" />
                <Button disabled=true>"Disabled"</Button>
                <Button
                    left_icon=IconName::Upload
                    loading=saving
                    on_click=Callback::new(move |_| {
                        saving.set(true);
                        set_timeout(move || saving.set(false), Duration::from_millis(1500));
                    })
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
            <Button full_width=true variant=ButtonVariant::Secondary>"Full width"</Button>
        </Section>
    }
}

#[component]
fn InputSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    view! {
        <Section title="Inputs">
            <div class="showcase-grid">
                <Input
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    start_icon=IconName::Email
                    required=true
                    value=Signal::derive(move || state.with(|state| state.email.clone()))
                    error=Signal::derive(move || state.with(ShowcaseState::email_invalid))
                    helper_text="We only use this for account notices."
                    error_message="Enter a valid email address."
                    on_input=Callback::new(move |email: String| state.update(|state| state.email = email))
                />
                <Input
                    label="Search"
                    variant=InputVariant::Filled
                    placeholder="Search components"
                    start_icon=IconName::Search
                />
                <Input
                    label="Password"
                    input_type="password"
                    end_icon=IconName::VisibilityOff
                    helper_text="At least 12 characters."
                    size=ControlSize::Lg
                />
                <Input label="Disabled" value="Read only" disabled=true size=ControlSize::Sm />
            </div>
        </Section>
    }
}

#[component]
fn SelectionSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    view! {
        <Section title="Checkboxes and radio buttons">
            <div class="showcase-grid">
                <div class="showcase-stack">
                    <Checkbox
                        label="Send me product updates"
                        checked=Signal::derive(move || state.with(|state| state.newsletter))
                        on_change=Callback::new(move |checked| state.update(|state| state.newsletter = checked))
                    />
                    <Checkbox
                        label="I accept the terms"
                        checked=Signal::derive(move || state.with(|state| state.terms))
                        error=Signal::derive(move || state.with(|state| !state.terms))
                        on_change=Callback::new(move |checked| state.update(|state| state.terms = checked))
                    />
                    <Checkbox label="Disabled option" disabled=true checked=true size=ControlSize::Sm />
                </div>
                <div class="showcase-stack" role="radiogroup" aria-label="Plan">
                    {PLANS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <RadioButton
                                    name="plan"
                                    value=value
                                    label=label
                                    checked=Signal::derive(move || state.with(|state| state.plan == value))
                                    on_change=Callback::new(move |plan: String| state.update(|state| state.plan = plan))
                                />
                            }
                        })
                        .collect_view()}
                    <RadioButton name="plan" value="legacy" label="Legacy (unavailable)" disabled=true />
                </div>
            </div>
        </Section>
    }
}

#[component]
fn DropdownSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let frameworks = vec![
        DropdownOption::new("leptos", "Leptos").with_icon(IconName::Dashboard),
        DropdownOption::new("yew", "Yew").with_icon(IconName::Analytics),
        DropdownOption::new("dioxus", "Dioxus").with_icon(IconName::Folder),
        DropdownOption::new("sycamore", "Sycamore").disabled(),
    ];

    view! {
        <Section title="Dropdowns">
            <div class="showcase-grid">
                <Dropdown
                    label="Country"
                    placeholder="Choose a country"
                    options=options(&COUNTRIES)
                    value=Signal::derive(move || state.with(|state| DropdownValue::from(state.country.clone())))
                    helper_text="Used for tax calculation."
                    on_change=Callback::new(move |change: DropdownChange| {
                        state.update(|state| state.country = single_value(change));
                    })
                />
                <Dropdown
                    label="Skills"
                    placeholder="Pick your skills"
                    multiselect=true
                    searchable=true
                    options=options(&SKILLS)
                    value=Signal::derive(move || state.with(|state| DropdownValue::Multiple(state.skills.clone())))
                    on_change=Callback::new(move |change: DropdownChange| {
                        let skills = change.value.values().into_iter().map(str::to_string).collect();
                        state.update(|state| state.skills = skills);
                    })
                />
                <Dropdown
                    label="Framework"
                    options=frameworks
                    value=Signal::derive(move || state.with(|state| DropdownValue::from(state.framework.clone())))
                    error=Signal::derive(move || state.with(|state| state.framework.is_none()))
                    error_message="Pick a framework to continue."
                    on_change=Callback::new(move |change: DropdownChange| {
                        state.update(|state| state.framework = single_value(change));
                    })
                />
                <Dropdown label="Empty" options={Vec::<DropdownOption>::new()} placeholder="Nothing to pick" size=ControlSize::Sm />
                <Dropdown label="Disabled" options=options(&COUNTRIES) value=DropdownValue::from("ca") disabled=true size=ControlSize::Lg />
            </div>
        </Section>
    }
}

#[component]
fn TabsSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let items = vec![
        TabItem::new("overview", "Overview")
            .with_icon(IconName::Home)
            .with_content(|| view! { <p>"Project summary and recent activity."</p> }),
        TabItem::new("analytics", "Analytics")
            .with_icon(IconName::Analytics)
            .with_badge("3")
            .with_content(|| view! { <p>"Traffic, conversions, and retention charts."</p> }),
        TabItem::new("files", "Files")
            .with_icon(IconName::Folder)
            .with_content(|| view! { <p>"Shared documents and exports."</p> }),
        TabItem::new("archived", "Archived").disabled(),
    ];
    let plain = vec![
        TabItem::new("day", "Day"),
        TabItem::new("week", "Week"),
        TabItem::new("month", "Month"),
    ];
    let compare = create_rw_signal("before".to_string());

    view! {
        <Section title="Tabs">
            <Tabs
                items
                aria_label="Project sections"
                active_tab=state.with_untracked(|state| state.active_tab.clone())
                on_change=Callback::new(move |change: TabChange| state.update(|state| state.active_tab = change.id))
            />
            <Tabs items=plain.clone() variant=TabsVariant::Pills size=ControlSize::Sm show_content=false aria_label="Range" />
            <Tabs items=plain variant=TabsVariant::Standard full_width=true show_content=false aria_label="Range" />
            <div class="showcase-row">
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| compare.set("before".to_string()))>
                    "Before"
                </Button>
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| compare.set("after".to_string()))>
                    "After"
                </Button>
            </div>
            <TabPanel active=Signal::derive(move || compare.get() == "before")>
                <p>"Standalone panel: before."</p>
            </TabPanel>
            <TabPanel active=Signal::derive(move || compare.get() == "after")>
                <p>"Standalone panel: after."</p>
            </TabPanel>
        </Section>
    }
}

#[component]
fn TooltipSection() -> impl IntoView {
    view! {
        <Section title="Tooltips">
            <div class="showcase-tooltip-grid">
                {TooltipPlacement::ALL
                    .into_iter()
                    .map(|placement| {
                        view! {
                            <Tooltip content=placement.token() placement>
                                <Button variant=ButtonVariant::Outline size=ControlSize::Sm>
                                    {placement.token()}
                                </Button>
                            </Tooltip>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                <Tooltip content="Shown without delay" delay=0>
                    <Button variant=ButtonVariant::Ghost>"Instant"</Button>
                </Tooltip>
                <Tooltip content="Never shown" disabled=true>
                    <Button variant=ButtonVariant::Ghost>"Disabled tooltip"</Button>
                </Tooltip>
            </div>
        </Section>
    }
}

#[component]
fn ChipSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let variants = [
        (ChipVariant::Primary, "Primary"),
        (ChipVariant::Secondary, "Secondary"),
        (ChipVariant::Success, "Success"),
        (ChipVariant::Warning, "Warning"),
        (ChipVariant::Error, "Error"),
        (ChipVariant::Info, "Info"),
        (ChipVariant::Neutral, "Neutral"),
    ];

    view! {
        <Section title="Chips">
            <div class="showcase-row">
                {variants
                    .into_iter()
                    .map(|(variant, label)| view! { <Chip variant>{label}</Chip> })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                <Chip size=ControlSize::Sm left_icon=IconName::Check variant=ChipVariant::Success>"Small"</Chip>
                <Chip size=ControlSize::Lg right_icon=IconName::ChevronRight>"Large"</Chip>
                <Chip disabled=true dismissible=true>"Disabled"</Chip>
            </div>
            <div class="showcase-row" role="group" aria-label="Filters">
                {FILTERS
                    .into_iter()
                    .map(|(id, label)| {
                        view! {
                            <Chip
                                variant=ChipVariant::Primary
                                selected=Signal::derive(move || state.with(|state| state.filters.iter().any(|f| f == id)))
                                on_click=Callback::new(move |()| state.update(|state| state.toggle_filter(id)))
                            >
                                {label}
                            </Chip>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                {move || {
                    TAGS.into_iter()
                        .filter(|tag| state.with(|state| !state.dismissed_tags.iter().any(|d| d == tag)))
                        .map(|tag| {
                            view! {
                                <Chip
                                    dismissible=true
                                    variant=ChipVariant::Info
                                    on_dismiss=Callback::new(move |()| state.update(|state| state.dismiss_tag(tag)))
                                >
                                    {tag}
                                </Chip>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || state.with(|state| !state.dismissed_tags.is_empty()) fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ControlSize::Sm
                        left_icon=IconName::Refresh
                        on_click=Callback::new(move |_| state.update(|state| state.dismissed_tags.clear()))
                    >
                        "Restore tags"
                    </Button>
                </Show>
            </div>
        </Section>
    }
}

#[component]
fn CardSection() -> impl IntoView {
    let opened = create_rw_signal(0u32);

    view! {
        <Section title="Cards">
            <div class="showcase-grid">
                <Card>
                    <CardHeader title="Default" subtitle="Border and subtle shadow" />
                    <CardBody>"Cards group related content."</CardBody>
                </Card>
                <Card variant=CardVariant::Elevated padding=CardPadding::Lg>
                    <CardHeader
                        title="Elevated"
                        subtitle="Raised surface"
                        action=|| view! { <Button variant=ButtonVariant::Ghost size=ControlSize::Sm left_icon=IconName::MoreVert aria_label="More" /> }
                    />
                    <CardBody>"Use for content that floats above the page."</CardBody>
                    <CardFooter>
                        <Button size=ControlSize::Sm>"Open"</Button>
                    </CardFooter>
                </Card>
                <Card variant=CardVariant::Outlined padding=CardPadding::Sm>
                    <CardBody>"Outlined, compact padding."</CardBody>
                </Card>
                <Card
                    interactive=true
                    aria_label="Open report"
                    on_click=Callback::new(move |_| opened.update(|count| *count += 1))
                >
                    <CardHeader title="Interactive" />
                    <CardBody>{move || format!("Opened {} times", opened.get())}</CardBody>
                </Card>
            </div>
        </Section>
    }
}

#[component]
fn IconSection() -> impl IntoView {
    view! {
        <Section title="Icons">
            <ul class="showcase-icon-grid">
                {IconName::ALL
                    .into_iter()
                    .map(|icon| {
                        view! {
                            <li>
                                <Icon icon size=IconSize::Lg />
                                <code>{icon.token()}</code>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Section>
    }
}

#[component]
fn TokenSection() -> impl IntoView {
    view! {
        <Section title="Design tokens">
            <TokenTable title="Colors" group=&["colors"] preview=TokenPreview::Swatch />
            <TokenTable title="Font sizes" group=&["typography", "fontSize"] preview=TokenPreview::FontSize />
            <TokenTable title="Font weights" group=&["typography", "fontWeight"] preview=TokenPreview::None />
            <TokenTable title="Font families" group=&["typography", "fontFamily"] preview=TokenPreview::None />
            <TokenTable title="Spacing" group=&["spacing"] preview=TokenPreview::Length />
            <TokenTable title="Border radius" group=&["borderRadius"] preview=TokenPreview::Radius />
            <TokenTable title="Shadows" group=&["shadows"] preview=TokenPreview::Shadow />
            <TokenTable title="Icon sizes" group=&["iconSizes"] preview=TokenPreview::Length />
        </Section>
    }
}

/// Mounts the showcase into `document.body`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}
