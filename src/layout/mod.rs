//! Layout bridge.
//!
//! Every element kind shares the same renderable layout block. This module
//! pulls that block out of a resolved option record and converts it into the
//! flexbox style the engine lays out with ([Taffy](https://github.com/DioxusLabs/taffy)).
//!
//! Layout computation itself belongs to the engine; nothing here builds a
//! tree or measures text.
//!
//! # Example
//!
//! ```
//! use spark_props::engine::BoxStyle;
//! use spark_props::merge::Overlay;
//! use spark_props::types::Dimension;
//!
//! let direct = BoxStyle { width: Some(Dimension::Cells(40)), padding: Some(1), ..Default::default() };
//! let resolved = BoxStyle::merge(&direct, None, &BoxStyle::native_defaults());
//! let style = resolved.layout().to_taffy();
//! assert_eq!(style.size.width, taffy::Dimension::Length(40.0));
//! ```

mod taffy_bridge;

use crate::types::{
    AlignItems, AlignSelf, Dimension, FlexDirection, FlexWrap, JustifyContent, Overflow, Position,
};

/// The layout subset of a kind's options.
///
/// Unset fields take the flexbox initial value when converted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutStyle {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<Dimension>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_wrap: Option<FlexWrap>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub align_self: Option<AlignSelf>,
    pub position: Option<Position>,
    pub top: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub left: Option<Dimension>,
    pub margin: Option<u16>,
    pub margin_top: Option<u16>,
    pub margin_right: Option<u16>,
    pub margin_bottom: Option<u16>,
    pub margin_left: Option<u16>,
    pub padding: Option<u16>,
    pub padding_top: Option<u16>,
    pub padding_right: Option<u16>,
    pub padding_bottom: Option<u16>,
    pub padding_left: Option<u16>,
    pub overflow: Option<Overflow>,
    pub visible: Option<bool>,
}

/// Per-side spacing after shorthand expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl LayoutStyle {
    /// Margin per side: an explicit side wins, otherwise the shorthand, otherwise 0.
    pub fn margin_sides(&self) -> Sides {
        let all = self.margin.unwrap_or(0);
        Sides {
            top: self.margin_top.unwrap_or(all),
            right: self.margin_right.unwrap_or(all),
            bottom: self.margin_bottom.unwrap_or(all),
            left: self.margin_left.unwrap_or(all),
        }
    }

    /// Padding per side: an explicit side wins, otherwise the shorthand, otherwise 0.
    pub fn padding_sides(&self) -> Sides {
        let all = self.padding.unwrap_or(0);
        Sides {
            top: self.padding_top.unwrap_or(all),
            right: self.padding_right.unwrap_or(all),
            bottom: self.padding_bottom.unwrap_or(all),
            left: self.padding_left.unwrap_or(all),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_expansion() {
        let layout = LayoutStyle {
            margin: Some(2),
            margin_left: Some(5),
            padding_top: Some(1),
            ..Default::default()
        };

        assert_eq!(
            layout.margin_sides(),
            Sides { top: 2, right: 2, bottom: 2, left: 5 }
        );
        assert_eq!(
            layout.padding_sides(),
            Sides { top: 1, right: 0, bottom: 0, left: 0 }
        );
    }
}
