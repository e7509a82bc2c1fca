//! `native_options!` - declares one element kind's native option shape.
//!
//! A single declaration produces:
//!
//! - `$options`: the renderer's native schema. Every field optional; the shared
//!   renderable block and the internal `buffered` flag are injected.
//! - `$style`: the author projection. Native fields minus `structural` fields
//!   and `buffered`, all optional. Used both for direct properties and for the
//!   `style` overlay.
//!
//! Fields listed under `structural` reach the renderer only through a
//! dedicated slot on the author record (children, title), never as a plain
//! property or through style.

macro_rules! native_options {
    (
        @build
        $(#[$meta:meta])*
        $kind:ident => $options:ident, $style:ident;
        structural { $( $(#[$smeta:meta])* $sfield:ident : $sty:ty, )* }
        styleable { $( $(#[$pmeta:meta])* $pfield:ident : $pty:ty $(= $pdefault:expr)?, )* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $options {
            $( $(#[$smeta])* pub $sfield: Option<$sty>, )*
            $( $(#[$pmeta])* pub $pfield: Option<$pty>, )*
            /// Renderer-internal double buffering. Not author-settable.
            pub buffered: Option<bool>,
        }

        impl $options {
            /// Element kind this shape belongs to.
            pub const KIND: $crate::types::ElementKind = $crate::types::ElementKind::$kind;

            /// Every native field name, in declaration order.
            pub const FIELDS: &'static [&'static str] =
                &[$(stringify!($sfield),)* $(stringify!($pfield),)* "buffered"];

            /// Fields removed from the author projection and from style.
            pub const EXCLUDED: &'static [&'static str] = &[$(stringify!($sfield),)* "buffered"];

            /// The author-settable part of these options.
            pub fn project(&self) -> $style {
                $style {
                    $( $pfield: self.$pfield.clone(), )*
                }
            }

            /// Fields that changed since `previous`, for forwarding on update.
            pub fn delta(&self, previous: &Self) -> Self {
                Self {
                    $( $sfield: $crate::merge::changed(&self.$sfield, &previous.$sfield), )*
                    $( $pfield: $crate::merge::changed(&self.$pfield, &previous.$pfield), )*
                    buffered: $crate::merge::changed(&self.buffered, &previous.buffered),
                }
            }

            /// True when no field is set.
            pub fn is_empty(&self) -> bool {
                *self == Self::default()
            }
        }

        #[doc = concat!("Author projection of [`", stringify!($options), "`].")]
        ///
        /// Serves as the element's direct properties and as its `style` overlay.
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $style {
            $(
                $(#[$pmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $pfield: Option<$pty>,
            )*
        }

        impl $crate::merge::Overlay for $style {
            const FIELDS: &'static [&'static str] = &[$(stringify!($pfield),)*];

            fn native_defaults() -> Self {
                Self {
                    $( $pfield: native_options!(@default $($pdefault)?), )*
                }
            }

            fn merge(direct: &Self, style: Option<&Self>, defaults: &Self) -> Self {
                Self {
                    $(
                        $pfield: $crate::merge::resolve(
                            direct.$pfield.as_ref(),
                            style.and_then(|s| s.$pfield.as_ref()),
                            defaults.$pfield.as_ref(),
                        ),
                    )*
                }
            }

            fn diff(&self, previous: &Self) -> Self {
                Self {
                    $( $pfield: $crate::merge::changed(&self.$pfield, &previous.$pfield), )*
                }
            }

            fn complete(mut self) -> Self {
                let layout = self.layout();
                let (margin, padding) = (layout.margin_sides(), layout.padding_sides());
                self.margin_top = Some(margin.top);
                self.margin_right = Some(margin.right);
                self.margin_bottom = Some(margin.bottom);
                self.margin_left = Some(margin.left);
                self.padding_top = Some(padding.top);
                self.padding_right = Some(padding.right);
                self.padding_bottom = Some(padding.bottom);
                self.padding_left = Some(padding.left);
                self
            }

            fn set_fields(&self) -> Vec<&'static str> {
                let mut fields = Vec::new();
                $(
                    if self.$pfield.is_some() {
                        fields.push(stringify!($pfield));
                    }
                )*
                fields
            }
        }

        impl $style {
            /// Lift into the native shape. Structural fields and `buffered` stay unset.
            pub fn into_options(self) -> $options {
                $options {
                    $( $pfield: self.$pfield, )*
                    ..Default::default()
                }
            }

            /// The layout subset, for the layout bridge.
            pub fn layout(&self) -> $crate::layout::LayoutStyle {
                $crate::layout::LayoutStyle {
                    width: self.width,
                    height: self.height,
                    min_width: self.min_width,
                    min_height: self.min_height,
                    max_width: self.max_width,
                    max_height: self.max_height,
                    flex_grow: self.flex_grow,
                    flex_shrink: self.flex_shrink,
                    flex_basis: self.flex_basis,
                    flex_direction: self.flex_direction,
                    flex_wrap: self.flex_wrap,
                    justify_content: self.justify_content,
                    align_items: self.align_items,
                    align_self: self.align_self,
                    position: self.position,
                    top: self.top,
                    right: self.right,
                    bottom: self.bottom,
                    left: self.left,
                    margin: self.margin,
                    margin_top: self.margin_top,
                    margin_right: self.margin_right,
                    margin_bottom: self.margin_bottom,
                    margin_left: self.margin_left,
                    padding: self.padding,
                    padding_top: self.padding_top,
                    padding_right: self.padding_right,
                    padding_bottom: self.padding_bottom,
                    padding_left: self.padding_left,
                    overflow: self.overflow,
                    visible: self.visible,
                }
            }
        }
    };

    (@default) => { None };
    (@default $default:expr) => { Some($default) };

    (
        $(#[$meta:meta])*
        $kind:ident => $options:ident, $style:ident;
        structural { $($structural:tt)* }
        styleable { $($styleable:tt)* }
    ) => {
        native_options! {
            @build
            $(#[$meta])*
            $kind => $options, $style;
            structural { $($structural)* }
            styleable {
                // Dimensions
                /// Width.
                width: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Height.
                height: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Minimum width.
                min_width: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Minimum height.
                min_height: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Maximum width.
                max_width: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Maximum height.
                max_height: $crate::types::Dimension = $crate::types::Dimension::Auto,

                // Flex item
                /// Flex grow factor.
                flex_grow: f32 = 0.0,
                /// Flex shrink factor.
                flex_shrink: f32 = 1.0,
                /// Flex basis.
                flex_basis: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Align self override.
                align_self: $crate::types::AlignSelf = $crate::types::AlignSelf::Auto,

                // Flex container
                /// Main axis direction for children.
                flex_direction: $crate::types::FlexDirection = $crate::types::FlexDirection::Column,
                /// Wrapping of children.
                flex_wrap: $crate::types::FlexWrap = $crate::types::FlexWrap::NoWrap,
                /// Main axis alignment of children.
                justify_content: $crate::types::JustifyContent = $crate::types::JustifyContent::FlexStart,
                /// Cross axis alignment of children.
                align_items: $crate::types::AlignItems = $crate::types::AlignItems::Stretch,

                // Position
                /// Relative or absolute positioning.
                position: $crate::types::Position = $crate::types::Position::Relative,
                /// Top inset.
                top: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Right inset.
                right: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Bottom inset.
                bottom: $crate::types::Dimension = $crate::types::Dimension::Auto,
                /// Left inset.
                left: $crate::types::Dimension = $crate::types::Dimension::Auto,

                // Spacing. Per-side values fall back to the shorthand.
                /// Margin (all sides).
                margin: u16 = 0,
                /// Margin top.
                margin_top: u16,
                /// Margin right.
                margin_right: u16,
                /// Margin bottom.
                margin_bottom: u16,
                /// Margin left.
                margin_left: u16,
                /// Padding (all sides).
                padding: u16 = 0,
                /// Padding top.
                padding_top: u16,
                /// Padding right.
                padding_right: u16,
                /// Padding bottom.
                padding_bottom: u16,
                /// Padding left.
                padding_left: u16,

                // Visibility and stacking
                /// Overflow behavior.
                overflow: $crate::types::Overflow = $crate::types::Overflow::Visible,
                /// Whether the renderable is drawn and laid out.
                visible: bool = true,
                /// Stacking order among siblings.
                z_index: i32 = 0,

                $($styleable)*
            }
        }
    };
}
