//! Style overlay merging.
//!
//! Every option field resolves from three ordered sources:
//!
//! ```text
//! direct property  →  style overlay  →  renderer default
//! ```
//!
//! The first source that holds a value wins. Merging is a pure function of
//! its inputs, so a style record can be shared between any number of
//! elements without one element's state leaking into another.

/// Resolve a single field from its three sources.
///
/// ```
/// use spark_props::merge::resolve;
///
/// assert_eq!(resolve(Some(&"red"), Some(&"blue"), Some(&"white")), Some("red"));
/// assert_eq!(resolve(None, Some(&"blue"), Some(&"white")), Some("blue"));
/// assert_eq!(resolve(None, None, Some(&"white")), Some("white"));
/// assert_eq!(resolve::<&str>(None, None, None), None);
/// ```
#[inline]
pub fn resolve<T: Clone>(direct: Option<&T>, style: Option<&T>, default: Option<&T>) -> Option<T> {
    direct.or(style).or(default).cloned()
}

/// The value to forward for a field on update: the new value if it differs
/// from the previous one, `None` if unchanged.
///
/// A field going from set to unset also yields `None`. Deltas are computed
/// between merged and [completed](Overlay::complete) records, which set
/// every field that has a native default or a shorthand.
#[inline]
pub fn changed<T: Clone + PartialEq>(next: &Option<T>, previous: &Option<T>) -> Option<T> {
    if next != previous { next.clone() } else { None }
}

/// A partial, field-wise mergeable option record.
///
/// Implemented by every style shape generated in [`crate::engine`]. The same
/// shape serves as the author's direct properties and as the style overlay,
/// because both are the kind's native options minus the same exclusions.
pub trait Overlay: Clone + Default + PartialEq {
    /// Field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// The renderer's native defaults. Fields the renderer derives from other
    /// fields (per-side spacing) stay unset.
    fn native_defaults() -> Self;

    /// Resolve every field from `direct`, then `style`, then `defaults`.
    fn merge(direct: &Self, style: Option<&Self>, defaults: &Self) -> Self;

    /// Fields of `self` that differ from `previous`.
    fn diff(&self, previous: &Self) -> Self;

    /// Names of the fields that hold a value.
    fn set_fields(&self) -> Vec<&'static str>;

    /// Fill the fields the renderer derives from other fields: each unset
    /// per-side margin and padding takes its shorthand, else 0.
    ///
    /// Applied to a merged record so that every spacing field is set and an
    /// update delta can never see one go from set to unset.
    fn complete(self) -> Self;

    /// Layer `self` over `under`: fields set here win.
    fn overlay(&self, under: &Self) -> Self {
        Self::merge(self, None, under)
    }

    /// True when no field is set.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
