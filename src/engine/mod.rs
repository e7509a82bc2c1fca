//! Engine boundary - what the binding layer consumes from the renderer.
//!
//! The rendering engine owns two things per element kind:
//!
//! - a native option shape (`TextOptions`, `BoxOptions`, ...), declared here
//!   with `native_options!` so that the author projection and the style
//!   overlay are derived from the same field list
//! - a renderable instance type, seen by this crate only through the traits
//!   below, which are the payload types of ref handles
//!
//! # Architecture
//!
//! ```text
//! native options ── minus EXCLUDED ──► <Kind>Style ──┬─► direct props (base)
//!                                                    └─► style overlay
//! ```
//!
//! Excluded fields are the kind's structural fields (text `content`, box
//! `title`) and the renderer-internal `buffered` flag.

#[macro_use]
mod macros;
mod options;
mod styled_text;

pub use options::*;
pub use styled_text::*;

use crate::types::ElementKind;

// =============================================================================
// Renderables
// =============================================================================

/// Behaviour shared by every renderable instance.
pub trait Renderable {
    /// Engine-assigned identifier.
    fn id(&self) -> &str;

    /// Kind of element this renderable was created for.
    fn kind(&self) -> ElementKind;
}

/// The text renderable.
pub trait TextRenderable: Renderable {
    /// Apply an update delta. Unset fields are left unchanged.
    fn apply(&self, delta: &TextOptions);
}

/// The box renderable.
pub trait BoxRenderable: Renderable {
    fn apply(&self, delta: &BoxOptions);
}

/// The group renderable.
pub trait GroupRenderable: Renderable {
    fn apply(&self, delta: &GroupOptions);
}

/// The input renderable.
pub trait InputRenderable: Renderable {
    fn apply(&self, delta: &InputOptions);

    /// Give or take keyboard focus.
    fn set_focused(&self, _focused: bool) {}
}

/// The select renderable.
pub trait SelectRenderable: Renderable {
    fn apply(&self, delta: &SelectOptions);

    fn set_focused(&self, _focused: bool) {}
}

/// The tab select renderable.
pub trait TabSelectRenderable: Renderable {
    fn apply(&self, delta: &TabSelectOptions);

    fn set_focused(&self, _focused: bool) {}
}
