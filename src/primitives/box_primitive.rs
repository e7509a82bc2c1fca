//! Box Primitive - Container with flexbox layout, borders, and background.
//!
//! Children are nested elements laid out in the order given. The border
//! title is not a style property: it has its own slot on [`BoxProps`] and is
//! excluded from both the direct properties and the style overlay.
//!
//! # Example
//!
//! ```
//! use spark_props::primitives::{BoxProps, TextProps, text};
//! use spark_props::engine::BoxStyle;
//! use spark_props::merge::Overlay;
//! use spark_props::types::{BorderStyle, Dimension};
//!
//! let panel = BoxProps::new(vec![text(TextProps::new("inside"))])
//!     .with_title("Panel")
//!     .with_base(BoxStyle {
//!         width: Some(Dimension::Cells(40)),
//!         border_style: Some(BorderStyle::Rounded),
//!         ..Default::default()
//!     });
//!
//! let options = panel.options(&BoxStyle::native_defaults());
//! assert_eq!(options.title.as_deref(), Some("Panel"));
//! assert_eq!(options.border_style, Some(BorderStyle::Rounded));
//! ```

use crate::children::normalize_nodes;
use crate::engine::{BoxOptions, BoxRenderable, BoxStyle};

use super::types::Common;
use super::Element;

// =============================================================================
// Box Props
// =============================================================================

/// Properties of a box element.
#[derive(Debug, Clone, Default)]
pub struct BoxProps {
    pub common: Common<BoxStyle, dyn BoxRenderable>,

    /// Border title. Unset resolves to an empty title.
    pub title: Option<String>,

    /// Nested elements, in layout order.
    pub children: Vec<Element>,
}

common_builders!(BoxProps, BoxStyle, dyn BoxRenderable);

impl BoxProps {
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Resolved native options: merged style plus the title slot.
    pub fn options(&self, defaults: &BoxStyle) -> BoxOptions {
        let mut options = self.common.resolve(defaults).into_options();
        options.title = Some(self.title.clone().unwrap_or_default());
        options
    }

    /// Children in layout order.
    pub fn children(&self) -> &[Element] {
        normalize_nodes(&self.children)
    }
}

/// Create a box element.
pub fn box_primitive(props: BoxProps) -> Element {
    Element::Box(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Key;
    use crate::merge::Overlay;
    use crate::primitives::{TextProps, text};
    use crate::types::{Dimension, Rgba};

    #[test]
    fn test_box_creation() {
        let options = BoxProps::default().options(&BoxStyle::native_defaults());
        assert_eq!(options.title.as_deref(), Some(""));
        assert_eq!(options.border, Some(true));
        assert_eq!(options.flex_direction, Some(crate::types::FlexDirection::Column));
        assert_eq!(options.buffered, None);
    }

    #[test]
    fn test_box_with_children() {
        let children: Vec<Element> = ["A", "B", "C"]
            .into_iter()
            .map(|key| text(TextProps::new(key).with_key(key)))
            .collect();
        let panel = BoxProps::new(children);

        let keys: Vec<Key> = panel
            .children()
            .iter()
            .filter_map(|child| child.key().cloned())
            .collect();
        assert_eq!(keys, vec![Key::from("A"), Key::from("B"), Key::from("C")]);
    }

    #[test]
    fn test_box_style_overlay() {
        let shared = BoxStyle {
            border_color: Some(Rgba::BLUE),
            width: Some(Dimension::Percent(50.0)),
            ..Default::default()
        };
        let panel = BoxProps::default()
            .with_title("Logs")
            .with_base(BoxStyle {
                border_color: Some(Rgba::RED),
                ..Default::default()
            })
            .with_style(shared.clone());

        let options = panel.options(&BoxStyle::native_defaults());
        assert_eq!(options.border_color, Some(Rgba::RED));
        assert_eq!(options.width, Some(Dimension::Percent(50.0)));
        assert_eq!(options.title.as_deref(), Some("Logs"));

        // The shared overlay is left as it was.
        assert_eq!(shared.border_color, Some(Rgba::BLUE));
    }

    #[test]
    fn test_box_title_change_is_forwarded() {
        let defaults = BoxStyle::native_defaults();
        let before = BoxProps::default().with_title("one").options(&defaults);
        let after = BoxProps::default().with_title("two").options(&defaults);

        let delta = after.delta(&before);
        assert_eq!(delta.title.as_deref(), Some("two"));
        assert_eq!(delta.border, None);
    }
}
