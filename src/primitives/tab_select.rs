//! TabSelect Primitive - Horizontal tab strip.
//!
//! Same interaction contract as select: callbacks get the reported index and
//! the tab at that index in the current list, or no tab when out of range.

use std::fmt;
use std::rc::Rc;

use crate::engine::{TabSelectOption, TabSelectOptions, TabSelectRenderable, TabSelectStyle};

use super::types::{Common, TabSelectCallback, notify_option};
use super::Element;

/// Properties of a tab select element.
#[derive(Clone, Default)]
pub struct TabSelectProps {
    pub common: Common<TabSelectStyle, dyn TabSelectRenderable>,

    /// Request keyboard focus.
    pub focused: Option<bool>,

    /// Fired when the highlighted tab moves.
    pub on_change: Option<TabSelectCallback>,

    /// Fired when a tab is chosen.
    pub on_select: Option<TabSelectCallback>,
}

common_builders!(TabSelectProps, TabSelectStyle, dyn TabSelectRenderable);

impl TabSelectProps {
    /// A tab select over `options`, set as a direct property.
    pub fn new(options: Vec<TabSelectOption>) -> Self {
        let mut props = Self::default();
        props.common.base.options = Some(options);
        props
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = Some(focused);
        self
    }

    pub fn on_change(
        mut self,
        callback: impl Fn(i32, Option<&TabSelectOption>) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn on_select(
        mut self,
        callback: impl Fn(i32, Option<&TabSelectOption>) + 'static,
    ) -> Self {
        self.on_select = Some(Rc::new(callback));
        self
    }

    pub fn options(&self, defaults: &TabSelectStyle) -> TabSelectOptions {
        self.common.resolve(defaults).into_options()
    }

    /// The list the renderer shows: the direct list, else the style's list,
    /// else the one in `defaults`, else empty. Callback indices are looked
    /// up here.
    pub fn current_options<'a>(&'a self, defaults: &'a TabSelectStyle) -> &'a [TabSelectOption] {
        self.common
            .base
            .options
            .as_deref()
            .or_else(|| self.common.style.as_ref().and_then(|s| s.options.as_deref()))
            .or(defaults.options.as_deref())
            .unwrap_or_default()
    }

    /// Report a highlight move. Returns whether `on_change` was registered.
    pub fn emit_change(&self, index: i32, defaults: &TabSelectStyle) -> bool {
        notify_option(self.on_change.as_ref(), self.current_options(defaults), index)
    }

    /// Report a choice. Returns whether `on_select` was registered.
    pub fn emit_select(&self, index: i32, defaults: &TabSelectStyle) -> bool {
        notify_option(self.on_select.as_ref(), self.current_options(defaults), index)
    }
}

impl fmt::Debug for TabSelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabSelectProps")
            .field("common", &self.common)
            .field("focused", &self.focused)
            .field("on_change", &self.on_change.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Create a tab select element.
pub fn tab_select(props: TabSelectProps) -> Element {
    Element::TabSelect(props)
}
