//! Primitive types - the shared prop record and callback types.

use std::fmt;
use std::rc::Rc;

use crate::engine::{SelectOption, TabSelectOption};
use crate::identity::{Key, Ref};
use crate::merge::Overlay;

// =============================================================================
// Callback Types
// =============================================================================

/// Input value callback. Receives the current value.
pub type InputCallback = Rc<dyn Fn(&str)>;

/// Option list callback: the index and the option at that index, if any.
///
/// The option is `None` whenever the index is negative or past the end of
/// the current list.
pub type OptionCallback<T> = Rc<dyn Fn(i32, Option<&T>)>;

/// Select change/select callback.
pub type SelectCallback = OptionCallback<SelectOption>;

/// Tab select change/select callback.
pub type TabSelectCallback = OptionCallback<TabSelectOption>;

/// The option at `index`, or `None` when the index is out of range.
///
/// ```
/// use spark_props::primitives::option_at;
///
/// let options = ["a", "b"];
/// assert_eq!(option_at(&options, 1), Some(&"b"));
/// assert_eq!(option_at(&options, 2), None);
/// assert_eq!(option_at(&options, -1), None);
/// ```
pub fn option_at<T>(options: &[T], index: i32) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| options.get(i))
}

/// Invoke an option list callback with the option looked up in `options`.
///
/// Returns whether a callback was registered.
pub(crate) fn notify_option<T>(
    callback: Option<&OptionCallback<T>>,
    options: &[T],
    index: i32,
) -> bool {
    let Some(callback) = callback else {
        return false;
    };
    let option = option_at(options, index);
    if option.is_none() {
        tracing::debug!(index, len = options.len(), "option index out of range");
    }
    callback(index, option);
    true
}

// =============================================================================
// Common Props
// =============================================================================

/// Fields every element kind shares.
///
/// `S` is the kind's author projection (e.g. [`TextStyle`](crate::engine::TextStyle)),
/// used for both the direct properties and the style overlay. `R` is the
/// renderable payload the ref handle observes.
pub struct Common<S, R: ?Sized> {
    /// Reconciliation key, unique among siblings.
    pub key: Option<Key>,

    /// Handle populated with the created renderable.
    pub node_ref: Option<Ref<R>>,

    /// Direct properties. Win over `style`.
    pub base: S,

    /// Style overlay, layered beneath `base`.
    pub style: Option<S>,
}

impl<S: Overlay, R: ?Sized> Common<S, R> {
    /// Direct properties only.
    pub fn new(base: S) -> Self {
        Self {
            key: None,
            node_ref: None,
            base,
            style: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_ref(mut self, node_ref: &Ref<R>) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    pub fn with_style(mut self, style: S) -> Self {
        self.style = Some(style);
        self
    }

    /// Merge direct properties over style over `defaults`, then expand
    /// per-side spacing from the shorthands.
    pub fn resolve(&self, defaults: &S) -> S {
        S::merge(&self.base, self.style.as_ref(), defaults).complete()
    }
}

impl<S: Default, R: ?Sized> Default for Common<S, R> {
    fn default() -> Self {
        Self {
            key: None,
            node_ref: None,
            base: S::default(),
            style: None,
        }
    }
}

impl<S: Clone, R: ?Sized> Clone for Common<S, R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            node_ref: self.node_ref.clone(),
            base: self.base.clone(),
            style: self.style.clone(),
        }
    }
}

impl<S: fmt::Debug, R: ?Sized> fmt::Debug for Common<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Common")
            .field("key", &self.key)
            .field("node_ref", &self.node_ref)
            .field("base", &self.base)
            .field("style", &self.style)
            .finish()
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Chainable setters for the `common` record of a props struct.
macro_rules! common_builders {
    ($props:ident, $style:ty, $renderable:ty) => {
        impl $props {
            /// Set the reconciliation key.
            pub fn with_key(mut self, key: impl Into<$crate::identity::Key>) -> Self {
                self.common.key = Some(key.into());
                self
            }

            /// Share a ref handle with the element.
            pub fn with_ref(mut self, node_ref: &$crate::identity::Ref<$renderable>) -> Self {
                self.common.node_ref = Some(node_ref.clone());
                self
            }

            /// Replace the direct properties.
            pub fn with_base(mut self, base: $style) -> Self {
                self.common.base = base;
                self
            }

            /// Set the style overlay.
            pub fn with_style(mut self, style: $style) -> Self {
                self.common.style = Some(style);
                self
            }
        }
    };
}
