//! Text Primitive - Display text with styling and wrapping.
//!
//! Content comes only from children. `content` is not a property and cannot
//! be styled; the compiler rejects both.
//!
//! # Example
//!
//! ```
//! use spark_props::primitives::TextProps;
//! use spark_props::engine::TextStyle;
//! use spark_props::merge::Overlay;
//! use spark_props::text_children;
//! use spark_props::types::Rgba;
//!
//! let props = TextProps::new(text_children!["Count: ", 42])
//!     .with_base(TextStyle { fg: Some(Rgba::GREEN), ..Default::default() });
//!
//! let options = props.options(&TextStyle::native_defaults());
//! assert_eq!(options.content.unwrap().plain_text(), "Count: 42");
//! assert_eq!(options.fg, Some(Rgba::GREEN));
//! ```

use crate::children::{TextChildren, normalize_text};
use crate::engine::{TextOptions, TextRenderable, TextStyle};

use super::types::Common;
use super::Element;

// =============================================================================
// Text Props
// =============================================================================

/// Properties of a text element.
#[derive(Debug, Clone, Default)]
pub struct TextProps {
    pub common: Common<TextStyle, dyn TextRenderable>,

    /// The only source of the element's content.
    pub children: TextChildren,
}

common_builders!(TextProps, TextStyle, dyn TextRenderable);

impl TextProps {
    pub fn new(children: impl Into<TextChildren>) -> Self {
        Self {
            common: Common::default(),
            children: children.into(),
        }
    }

    /// Resolved native options: merged style plus content from children.
    pub fn options(&self, defaults: &TextStyle) -> TextOptions {
        let mut options = self.common.resolve(defaults).into_options();
        options.content = Some(normalize_text(&self.children));
        options
    }
}

/// Create a text element.
pub fn text(props: TextProps) -> Element {
    Element::Text(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{StyledText, TextChunk};
    use crate::merge::Overlay;
    use crate::text_children;
    use crate::types::{Attr, Rgba, TextWrap};

    #[test]
    fn test_text_content_from_children() {
        let props = TextProps::new(text_children!["a", None::<&str>, 1, "b"]);
        let options = props.options(&TextStyle::native_defaults());
        assert_eq!(options.content, Some(StyledText::from(TextChunk::plain("a1b"))));
        assert_eq!(options.buffered, None);
    }

    #[test]
    fn test_text_without_children_has_empty_content() {
        let options = TextProps::default().options(&TextStyle::native_defaults());
        assert_eq!(options.content, Some(StyledText::default()));
        assert_eq!(options.fg, Some(Rgba::WHITE));
    }

    #[test]
    fn test_text_direct_beats_style() {
        let props = TextProps::new("hi")
            .with_base(TextStyle {
                fg: Some(Rgba::RED),
                ..Default::default()
            })
            .with_style(TextStyle {
                fg: Some(Rgba::BLUE),
                wrap: Some(TextWrap::Truncate),
                attributes: Some(Attr::BOLD),
                ..Default::default()
            });

        let options = props.options(&TextStyle::native_defaults());
        assert_eq!(options.fg, Some(Rgba::RED));
        assert_eq!(options.wrap, Some(TextWrap::Truncate));
        assert_eq!(options.attributes, Some(Attr::BOLD));
        assert_eq!(options.bg, Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_text_element_kind() {
        let element = text(TextProps::new("x").with_key(1));
        assert_eq!(element.kind(), crate::types::ElementKind::Text);
        assert_eq!(element.key(), Some(&crate::identity::Key::Int(1)));
        assert!(element.children().is_empty());
    }
}
