//! Taffy Bridge - Converts the layout subset of resolved options into a
//! Taffy style.

use taffy::{
    AlignItems as TaffyAlignItems, AlignSelf as TaffyAlignSelf, Dimension as TaffyDimension,
    Display, FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto,
    Overflow as TaffyOverflow, Position as TaffyPosition, Rect, Size, Style,
};

use crate::types::{
    AlignItems, AlignSelf, Dimension, FlexDirection, FlexWrap, JustifyContent, Overflow, Position,
};

use super::LayoutStyle;

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_lpa(dim: Dimension) -> LengthPercentageAuto {
    match dim {
        Dimension::Auto => LengthPercentageAuto::Auto,
        Dimension::Cells(n) => LengthPercentageAuto::Length(n as f32),
        Dimension::Percent(p) => LengthPercentageAuto::Percent(p / 100.0),
    }
}

fn dimension(value: Option<Dimension>) -> TaffyDimension {
    to_taffy_dimension(value.unwrap_or_default())
}

fn inset(value: Option<Dimension>) -> LengthPercentageAuto {
    to_taffy_lpa(value.unwrap_or_default())
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
        FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    })
}

fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
        AlignItems::Baseline => TaffyAlignItems::Baseline,
    })
}

fn to_taffy_align_self(align: AlignSelf) -> Option<TaffyAlignSelf> {
    match align {
        AlignSelf::Auto => None, // inherit from parent
        AlignSelf::Stretch => Some(TaffyAlignSelf::Stretch),
        AlignSelf::FlexStart => Some(TaffyAlignSelf::FlexStart),
        AlignSelf::Center => Some(TaffyAlignSelf::Center),
        AlignSelf::FlexEnd => Some(TaffyAlignSelf::FlexEnd),
        AlignSelf::Baseline => Some(TaffyAlignSelf::Baseline),
    }
}

fn to_taffy_overflow(overflow: Overflow) -> TaffyOverflow {
    match overflow {
        Overflow::Visible => TaffyOverflow::Visible,
        Overflow::Hidden => TaffyOverflow::Clip,
        Overflow::Scroll => TaffyOverflow::Scroll,
    }
}

fn to_taffy_position(position: Position) -> TaffyPosition {
    match position {
        Position::Relative => TaffyPosition::Relative,
        Position::Absolute => TaffyPosition::Absolute,
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

impl LayoutStyle {
    /// Build the Taffy style for this layout block.
    pub fn to_taffy(&self) -> Style {
        let margin = self.margin_sides();
        let padding = self.padding_sides();
        let overflow = to_taffy_overflow(self.overflow.unwrap_or_default());

        Style {
            display: if self.visible.unwrap_or(true) {
                Display::Flex
            } else {
                Display::None
            },
            position: to_taffy_position(self.position.unwrap_or_default()),
            inset: Rect {
                top: inset(self.top),
                right: inset(self.right),
                bottom: inset(self.bottom),
                left: inset(self.left),
            },

            // Flex container properties
            flex_direction: to_taffy_flex_direction(self.flex_direction.unwrap_or_default()),
            flex_wrap: to_taffy_flex_wrap(self.flex_wrap.unwrap_or_default()),
            justify_content: to_taffy_justify_content(self.justify_content.unwrap_or_default()),
            align_items: to_taffy_align_items(self.align_items.unwrap_or_default()),

            // Flex item properties
            flex_grow: self.flex_grow.unwrap_or(0.0),
            flex_shrink: self.flex_shrink.unwrap_or(1.0),
            flex_basis: dimension(self.flex_basis),
            align_self: to_taffy_align_self(self.align_self.unwrap_or_default()),

            // Dimensions
            size: Size {
                width: dimension(self.width),
                height: dimension(self.height),
            },
            min_size: Size {
                width: dimension(self.min_width),
                height: dimension(self.min_height),
            },
            max_size: Size {
                width: dimension(self.max_width),
                height: dimension(self.max_height),
            },

            margin: Rect {
                top: LengthPercentageAuto::Length(margin.top as f32),
                right: LengthPercentageAuto::Length(margin.right as f32),
                bottom: LengthPercentageAuto::Length(margin.bottom as f32),
                left: LengthPercentageAuto::Length(margin.left as f32),
            },

            // Padding uses LengthPercentage, not LengthPercentageAuto
            padding: Rect {
                top: LengthPercentage::Length(padding.top as f32),
                right: LengthPercentage::Length(padding.right as f32),
                bottom: LengthPercentage::Length(padding.bottom as f32),
                left: LengthPercentage::Length(padding.left as f32),
            },

            overflow: taffy::Point {
                x: overflow,
                y: overflow,
            },

            ..Default::default()
        }
    }
}
