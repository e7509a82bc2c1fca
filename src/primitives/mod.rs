//! TUI Primitives - Author-facing element property records.
//!
//! This module provides one props record per element kind:
//! - [`text`] - Text display; content from children
//! - [`box_primitive`] - Container with borders, background and a title slot
//! - [`group`] - Layout-only container
//! - [`input`] - Single-line text input
//! - [`select`] - Vertical option list
//! - [`tab_select`] - Horizontal tab strip
//!
//! # Architecture
//!
//! Every record embeds a [`Common`] block (key, ref, direct properties,
//! style overlay) whose property shape is the kind's author projection.
//! Beside it sit only what cannot be a property: children, the box title,
//! focus, and callbacks.
//!
//! ```text
//! <Kind>Props ──options(defaults)──► <Kind>Options ──delta(previous)──► renderable.apply
//! ```
//!
//! [`Element`] is the closed union of the six records, and [`NativeOptions`]
//! the union of their resolved options.

#[macro_use]
mod types;
mod box_primitive;
mod group;
mod input;
mod select;
mod tab_select;
mod text;

pub use box_primitive::{BoxProps, box_primitive};
pub use group::{GroupProps, group};
pub use input::{InputProps, input};
pub use select::{SelectProps, select};
pub use tab_select::{TabSelectProps, tab_select};
pub use text::{TextProps, text};
pub use types::*;

use crate::children::normalize_nodes;
use crate::config::EngineDefaults;
use crate::engine::{
    BoxOptions, GroupOptions, InputOptions, SelectOptions, TabSelectOptions, TextOptions,
};
use crate::error::{Error, Result};
use crate::identity::Key;
use crate::layout::LayoutStyle;
use crate::types::ElementKind;

// =============================================================================
// Element
// =============================================================================

/// An element of any kind.
#[derive(Debug, Clone)]
pub enum Element {
    Text(TextProps),
    Box(BoxProps),
    Group(GroupProps),
    Input(InputProps),
    Select(SelectProps),
    TabSelect(TabSelectProps),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Box(_) => ElementKind::Box,
            Element::Group(_) => ElementKind::Group,
            Element::Input(_) => ElementKind::Input,
            Element::Select(_) => ElementKind::Select,
            Element::TabSelect(_) => ElementKind::TabSelect,
        }
    }

    /// Reconciliation key, if set.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Element::Text(p) => p.common.key.as_ref(),
            Element::Box(p) => p.common.key.as_ref(),
            Element::Group(p) => p.common.key.as_ref(),
            Element::Input(p) => p.common.key.as_ref(),
            Element::Select(p) => p.common.key.as_ref(),
            Element::TabSelect(p) => p.common.key.as_ref(),
        }
    }

    /// Nested elements in layout order. Empty for kinds without element
    /// children.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Box(p) => normalize_nodes(&p.children),
            Element::Group(p) => normalize_nodes(&p.children),
            _ => &[],
        }
    }

    /// Requested focus. Always `None` for non-interactive kinds.
    pub fn focused(&self) -> Option<bool> {
        match self {
            Element::Input(p) => p.focused,
            Element::Select(p) => p.focused,
            Element::TabSelect(p) => p.focused,
            _ => None,
        }
    }

    /// Resolve against the renderer defaults for this element's kind.
    pub fn options(&self, defaults: &EngineDefaults) -> NativeOptions {
        match self {
            Element::Text(p) => NativeOptions::Text(p.options(&defaults.text)),
            Element::Box(p) => NativeOptions::Box(p.options(&defaults.box_)),
            Element::Group(p) => NativeOptions::Group(p.options(&defaults.group)),
            Element::Input(p) => NativeOptions::Input(p.options(&defaults.input)),
            Element::Select(p) => NativeOptions::Select(p.options(&defaults.select)),
            Element::TabSelect(p) => NativeOptions::TabSelect(p.options(&defaults.tab_select)),
        }
    }

    /// The update to forward when `previous` is replaced by `self`.
    ///
    /// Fails when the kinds differ; such an element has to be recreated.
    pub fn delta(&self, previous: &Element, defaults: &EngineDefaults) -> Result<NativeOptions> {
        self.options(defaults).delta(&previous.options(defaults))
    }
}

impl From<TextProps> for Element {
    fn from(props: TextProps) -> Self {
        Element::Text(props)
    }
}

impl From<BoxProps> for Element {
    fn from(props: BoxProps) -> Self {
        Element::Box(props)
    }
}

impl From<GroupProps> for Element {
    fn from(props: GroupProps) -> Self {
        Element::Group(props)
    }
}

impl From<InputProps> for Element {
    fn from(props: InputProps) -> Self {
        Element::Input(props)
    }
}

impl From<SelectProps> for Element {
    fn from(props: SelectProps) -> Self {
        Element::Select(props)
    }
}

impl From<TabSelectProps> for Element {
    fn from(props: TabSelectProps) -> Self {
        Element::TabSelect(props)
    }
}

// =============================================================================
// Native options
// =============================================================================

/// Resolved native options of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeOptions {
    Text(TextOptions),
    Box(BoxOptions),
    Group(GroupOptions),
    Input(InputOptions),
    Select(SelectOptions),
    TabSelect(TabSelectOptions),
}

impl NativeOptions {
    pub fn kind(&self) -> ElementKind {
        match self {
            NativeOptions::Text(_) => TextOptions::KIND,
            NativeOptions::Box(_) => BoxOptions::KIND,
            NativeOptions::Group(_) => GroupOptions::KIND,
            NativeOptions::Input(_) => InputOptions::KIND,
            NativeOptions::Select(_) => SelectOptions::KIND,
            NativeOptions::TabSelect(_) => TabSelectOptions::KIND,
        }
    }

    /// Fields that changed since `previous`.
    pub fn delta(&self, previous: &NativeOptions) -> Result<NativeOptions> {
        let delta = match (self, previous) {
            (NativeOptions::Text(next), NativeOptions::Text(prev)) => {
                NativeOptions::Text(next.delta(prev))
            }
            (NativeOptions::Box(next), NativeOptions::Box(prev)) => {
                NativeOptions::Box(next.delta(prev))
            }
            (NativeOptions::Group(next), NativeOptions::Group(prev)) => {
                NativeOptions::Group(next.delta(prev))
            }
            (NativeOptions::Input(next), NativeOptions::Input(prev)) => {
                NativeOptions::Input(next.delta(prev))
            }
            (NativeOptions::Select(next), NativeOptions::Select(prev)) => {
                NativeOptions::Select(next.delta(prev))
            }
            (NativeOptions::TabSelect(next), NativeOptions::TabSelect(prev)) => {
                NativeOptions::TabSelect(next.delta(prev))
            }
            _ => {
                return Err(Error::KindMismatch {
                    previous: previous.kind(),
                    next: self.kind(),
                });
            }
        };
        Ok(delta)
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        match self {
            NativeOptions::Text(o) => o.is_empty(),
            NativeOptions::Box(o) => o.is_empty(),
            NativeOptions::Group(o) => o.is_empty(),
            NativeOptions::Input(o) => o.is_empty(),
            NativeOptions::Select(o) => o.is_empty(),
            NativeOptions::TabSelect(o) => o.is_empty(),
        }
    }

    /// The layout subset, for the layout bridge.
    pub fn layout(&self) -> LayoutStyle {
        match self {
            NativeOptions::Text(o) => o.project().layout(),
            NativeOptions::Box(o) => o.project().layout(),
            NativeOptions::Group(o) => o.project().layout(),
            NativeOptions::Input(o) => o.project().layout(),
            NativeOptions::Select(o) => o.project().layout(),
            NativeOptions::TabSelect(o) => o.project().layout(),
        }
    }
}
