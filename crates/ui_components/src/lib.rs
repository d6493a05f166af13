//! Leptos component library built on the `design_tokens` crate.
//!
//! Components share one DOM contract: every root carries `data-ui-primitive="true"` and a
//! `data-ui-kind`, with variants, sizes, and states exposed as `data-ui-*` attributes for
//! the stylesheet. Interaction rules live in [`interaction`] as plain reducers so they can be
//! tested without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dom;
mod icon;
mod id;
pub mod interaction;
mod primitives;
mod theme;

pub use icon::{Icon, IconName, IconSize};
pub use id::{use_component_id, IdGenerator};
pub use interaction::dropdown::{DropdownChange, DropdownOption, DropdownValue};
pub use interaction::tabs::{TabChange, TabItem};
pub use primitives::{
    button_icon_slots, button_state, chip_icon_size, chip_trailing_slot, help_message, Button,
    ButtonIconSlots, ButtonLeading, ButtonVariant, Card, CardBody, CardFooter, CardHeader,
    CardPadding, CardVariant, Checkbox, Chip, ChipTrailing, ChipVariant, ControlSize, Dropdown,
    Input, InputVariant, RadioButton, TabPanel, Tabs, TabsVariant, Tooltip, TooltipPlacement,
};
pub use theme::{resolve_theme, use_theme, ThemeContext, ThemeProvider};

/// Convenience imports for applications composing the component set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, Card, CardBody, CardFooter, CardHeader, CardPadding, CardVariant,
        Checkbox, Chip, ChipVariant, ControlSize, Dropdown, DropdownChange, DropdownOption,
        DropdownValue, Icon, IconName, IconSize, Input, InputVariant, RadioButton, TabChange,
        TabItem, TabPanel, Tabs, TabsVariant, ThemeProvider, Tooltip, TooltipPlacement,
    };
}
