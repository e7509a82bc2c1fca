//! Group Primitive - Layout-only container.
//!
//! A group carries the shared renderable block and nothing else: no border,
//! no background, no title.

use crate::children::normalize_nodes;
use crate::engine::{GroupOptions, GroupRenderable, GroupStyle};

use super::types::Common;
use super::Element;

/// Properties of a group element.
#[derive(Debug, Clone, Default)]
pub struct GroupProps {
    pub common: Common<GroupStyle, dyn GroupRenderable>,

    /// Nested elements, in layout order.
    pub children: Vec<Element>,
}

common_builders!(GroupProps, GroupStyle, dyn GroupRenderable);

impl GroupProps {
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    pub fn options(&self, defaults: &GroupStyle) -> GroupOptions {
        self.common.resolve(defaults).into_options()
    }

    pub fn children(&self) -> &[Element] {
        normalize_nodes(&self.children)
    }
}

/// Create a group element.
pub fn group(props: GroupProps) -> Element {
    Element::Group(props)
}
