//! # spark-props
//!
//! Declarative property contracts for SparkTUI renderables.
//!
//! Each element kind (text, box, group, input, select, tab select) accepts
//! a props record derived from the renderer's own native option shape. The
//! derivation removes structural fields (text content, box title) and
//! renderer-internal fields, so a property the renderer owns through another
//! channel cannot be set directly or through a style.
//!
//! ## Architecture
//!
//! ```text
//! native options ──► author projection ──┬─ direct props ─┐
//!                                        └─ style ────────┼─► merge ──► native options
//!                            EngineDefaults ──────────────┘      + children / title
//! ```
//!
//! Every option field resolves `direct → style → default`: the first source
//! holding a value wins.
//!
//! ```
//! use spark_props::config::EngineDefaults;
//! use spark_props::engine::TextStyle;
//! use spark_props::primitives::{NativeOptions, TextProps, text};
//! use spark_props::types::Rgba;
//!
//! let shared = TextStyle { fg: Some(Rgba::BLUE), ..Default::default() };
//! let element = text(
//!     TextProps::new("hi")
//!         .with_base(TextStyle { fg: Some(Rgba::RED), ..Default::default() })
//!         .with_style(shared),
//! );
//!
//! let NativeOptions::Text(options) = element.options(&EngineDefaults::default()) else {
//!     unreachable!()
//! };
//! assert_eq!(options.fg, Some(Rgba::RED));
//! ```
//!
//! Text content is not a property:
//!
//! ```compile_fail
//! use spark_props::engine::TextStyle;
//!
//! let style = TextStyle { content: None, ..Default::default() };
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Shared value types (Rgba, Dimension, Attr, flex enums)
//! - [`engine`] - Native option shapes and renderable traits
//! - [`merge`] - Three-source style overlay
//! - [`children`] - Children normalization
//! - [`identity`] - Keys and ref handles
//! - [`primitives`] - Per-kind props records and the element union
//! - [`layout`] - Bridge to Taffy layout styles
//! - [`config`] - Renderer defaults, loadable from TOML

pub mod children;
pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod layout;
pub mod merge;
pub mod primitives;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use children::{Scalar, TextChild, TextChildren, normalize_text};
pub use config::EngineDefaults;
pub use engine::{
    BoxOptions, BoxStyle, GroupOptions, GroupStyle, InputOptions, InputStyle, Renderable,
    SelectOption, SelectOptions, SelectStyle, StyledText, TabSelectOption, TabSelectOptions,
    TabSelectStyle, TextChunk, TextOptions, TextStyle,
};
pub use error::{Error, Result};
pub use identity::{Key, Ref};
pub use layout::LayoutStyle;
pub use merge::Overlay;
pub use primitives::{
    BoxProps, Element, GroupProps, InputProps, NativeOptions, SelectProps, TabSelectProps,
    TextProps, box_primitive, group, input, option_at, select, tab_select, text,
};
