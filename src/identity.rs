//! Identity attachment: reconciliation keys and ref handles.
//!
//! Every element kind carries both through its [`Common`](crate::primitives::Common)
//! record. Neither is interpreted here: key uniqueness among siblings is the
//! reconciler's business, and so is deciding when a ref is attached or
//! detached. This module only fixes their shapes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::engine::Renderable;
use crate::error::{Error, Result};

// =============================================================================
// Key
// =============================================================================

/// Stable reconciliation key. Scope of uniqueness is one sibling list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value.into())
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Str(value.to_string()),
        }
    }
}

// =============================================================================
// Ref
// =============================================================================

/// A slot observing the renderable created for an element.
///
/// Clones share the slot. The reconciler attaches the instance after creation
/// and detaches it on destruction; between those points the slot is
/// write-once.
///
/// ```
/// use std::rc::Rc;
/// use spark_props::engine::{Renderable, GroupOptions, GroupRenderable};
/// use spark_props::identity::Ref;
/// use spark_props::types::ElementKind;
///
/// struct Node;
/// impl Renderable for Node {
///     fn id(&self) -> &str { "node-1" }
///     fn kind(&self) -> ElementKind { ElementKind::Group }
/// }
/// impl GroupRenderable for Node {
///     fn apply(&self, _delta: &GroupOptions) {}
/// }
///
/// let handle: Ref<dyn GroupRenderable> = Ref::new();
/// handle.attach(Rc::new(Node)).unwrap();
/// assert_eq!(handle.current().map(|n| n.id().to_string()), Some("node-1".into()));
/// handle.detach();
/// assert!(handle.current().is_none());
/// ```
pub struct Ref<R: ?Sized> {
    slot: Rc<RefCell<Option<Rc<R>>>>,
}

impl<R: ?Sized> Ref<R> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// The attached renderable, if any.
    pub fn current(&self) -> Option<Rc<R>> {
        self.slot.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Clear the slot, returning the renderable it held.
    pub fn detach(&self) -> Option<Rc<R>> {
        let previous = self.slot.borrow_mut().take();
        if previous.is_some() {
            tracing::trace!("ref detached");
        }
        previous
    }

    /// Whether two handles share one slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<R: Renderable + ?Sized> Ref<R> {
    /// Populate the slot with a newly created renderable.
    ///
    /// Fails if the slot already observes a renderable; detach it first.
    pub fn attach(&self, instance: Rc<R>) -> Result<()> {
        let mut slot = self.slot.borrow_mut();
        if let Some(existing) = slot.as_ref() {
            return Err(Error::RefAlreadyAttached {
                id: existing.id().to_string(),
            });
        }
        tracing::trace!(id = instance.id(), kind = %instance.kind(), "ref attached");
        *slot = Some(instance);
        Ok(())
    }
}

impl<R: ?Sized> Clone for Ref<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<R: ?Sized> Default for Ref<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> fmt::Debug for Ref<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ref")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{TextOptions, TextRenderable};
    use crate::types::ElementKind;

    struct FakeText(&'static str);

    impl Renderable for FakeText {
        fn id(&self) -> &str {
            self.0
        }

        fn kind(&self) -> ElementKind {
            ElementKind::Text
        }
    }

    impl TextRenderable for FakeText {
        fn apply(&self, _delta: &TextOptions) {}
    }

    #[test]
    fn test_key_conversions_and_order() {
        assert_eq!(Key::from("a"), Key::Str("a".into()));
        assert_eq!(Key::from(3), Key::Int(3));
        assert_eq!(Key::from(7usize).to_string(), "7");
        assert!(Key::Int(1) < Key::Int(2));
    }

    #[test]
    fn test_ref_is_write_once_until_detached() {
        let handle: Ref<dyn TextRenderable> = Ref::new();
        assert!(!handle.is_attached());

        handle.attach(Rc::new(FakeText("first"))).unwrap();
        let err = handle.attach(Rc::new(FakeText("second"))).unwrap_err();
        assert!(matches!(err, Error::RefAlreadyAttached { ref id } if id == "first"));

        let detached = handle.detach().unwrap();
        assert_eq!(detached.id(), "first");
        assert!(handle.detach().is_none());

        handle.attach(Rc::new(FakeText("second"))).unwrap();
        assert_eq!(handle.current().unwrap().id(), "second");
    }

    #[test]
    fn test_ref_clones_share_the_slot() {
        let handle: Ref<dyn TextRenderable> = Ref::new();
        let observer = handle.clone();
        assert!(handle.ptr_eq(&observer));

        handle.attach(Rc::new(FakeText("t"))).unwrap();
        assert!(observer.is_attached());
        assert!(!Ref::<dyn TextRenderable>::new().ptr_eq(&handle));
    }
}
