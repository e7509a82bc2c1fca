//! Select Primitive - Vertical option list.
//!
//! Callbacks receive the index the renderer reports together with the
//! option at that index in the element's current list. Indices outside the
//! list (negative, or past the end after the list shrank) are passed through
//! with no option rather than a stale one.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use spark_props::engine::{SelectOption, SelectStyle};
//! use spark_props::merge::Overlay;
//! use spark_props::primitives::SelectProps;
//!
//! let picked = Rc::new(Cell::new(None));
//! let sink = picked.clone();
//!
//! let props = SelectProps::new(vec![
//!     SelectOption::new("Red", "warm"),
//!     SelectOption::new("Blue", "cool"),
//! ])
//! .on_select(move |index, option| sink.set(option.map(|_| index)));
//!
//! let defaults = SelectStyle::native_defaults();
//! props.emit_select(1, &defaults);
//! assert_eq!(picked.get(), Some(1));
//! props.emit_select(5, &defaults);
//! assert_eq!(picked.get(), None);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::engine::{SelectOption, SelectOptions, SelectRenderable, SelectStyle};

use super::types::{Common, SelectCallback, notify_option};
use super::Element;

// =============================================================================
// Select Props
// =============================================================================

/// Properties of a select element.
#[derive(Clone, Default)]
pub struct SelectProps {
    pub common: Common<SelectStyle, dyn SelectRenderable>,

    /// Request keyboard focus.
    pub focused: Option<bool>,

    /// Fired when the highlighted entry moves.
    pub on_change: Option<SelectCallback>,

    /// Fired when an entry is chosen.
    pub on_select: Option<SelectCallback>,
}

common_builders!(SelectProps, SelectStyle, dyn SelectRenderable);

impl SelectProps {
    /// A select over `options`, set as a direct property.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let mut props = Self::default();
        props.common.base.options = Some(options);
        props
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = Some(focused);
        self
    }

    pub fn on_change(mut self, callback: impl Fn(i32, Option<&SelectOption>) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn on_select(mut self, callback: impl Fn(i32, Option<&SelectOption>) + 'static) -> Self {
        self.on_select = Some(Rc::new(callback));
        self
    }

    pub fn options(&self, defaults: &SelectStyle) -> SelectOptions {
        self.common.resolve(defaults).into_options()
    }

    /// The list the renderer shows: the direct list, else the style's list,
    /// else the one in `defaults`, else empty. Callback indices are looked
    /// up here.
    pub fn current_options<'a>(&'a self, defaults: &'a SelectStyle) -> &'a [SelectOption] {
        self.common
            .base
            .options
            .as_deref()
            .or_else(|| self.common.style.as_ref().and_then(|s| s.options.as_deref()))
            .or(defaults.options.as_deref())
            .unwrap_or_default()
    }

    /// Report a highlight move. Returns whether `on_change` was registered.
    pub fn emit_change(&self, index: i32, defaults: &SelectStyle) -> bool {
        notify_option(self.on_change.as_ref(), self.current_options(defaults), index)
    }

    /// Report a choice. Returns whether `on_select` was registered.
    pub fn emit_select(&self, index: i32, defaults: &SelectStyle) -> bool {
        notify_option(self.on_select.as_ref(), self.current_options(defaults), index)
    }
}

impl fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("common", &self.common)
            .field("focused", &self.focused)
            .field("on_change", &self.on_change.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Create a select element.
pub fn select(props: SelectProps) -> Element {
    Element::Select(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Overlay;
    use crate::types::Rgba;
    use std::cell::RefCell;

    fn colors() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Red", "warm"),
            SelectOption::new("Green", "calm").with_value("g"),
            SelectOption::new("Blue", "cool"),
        ]
    }

    fn recorder() -> (Rc<RefCell<Vec<(i32, Option<String>)>>>, impl Fn(i32, Option<&SelectOption>)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let callback = move |index: i32, option: Option<&SelectOption>| {
            sink.borrow_mut().push((index, option.map(|o| o.name.clone())));
        };
        (seen, callback)
    }

    #[test]
    fn test_select_change_reports_current_option() {
        let (seen, callback) = recorder();
        let defaults = SelectStyle::native_defaults();
        let props = SelectProps::new(colors()).on_change(callback);

        assert!(props.emit_change(1, &defaults));
        assert!(props.emit_change(-1, &defaults));
        assert!(props.emit_change(3, &defaults));
        assert_eq!(
            *seen.borrow(),
            vec![(1, Some("Green".to_string())), (-1, None), (3, None)]
        );
    }

    #[test]
    fn test_select_shrunk_list_is_not_stale() {
        let (seen, callback) = recorder();
        let defaults = SelectStyle::native_defaults();
        let mut props = SelectProps::new(colors()).on_change(callback);
        props.common.base.options = Some(colors()[..2].to_vec());

        props.emit_change(2, &defaults);
        assert_eq!(*seen.borrow(), vec![(2, None)]);
    }

    #[test]
    fn test_select_options_from_style() {
        let (seen, callback) = recorder();
        let defaults = SelectStyle::native_defaults();
        let props = SelectProps::default()
            .with_style(SelectStyle {
                options: Some(colors()),
                ..Default::default()
            })
            .on_select(callback);

        assert_eq!(props.current_options(&defaults).len(), 3);
        props.emit_select(2, &defaults);
        assert_eq!(*seen.borrow(), vec![(2, Some("Blue".to_string()))]);
        assert!(!props.emit_change(0, &defaults));
    }

    #[test]
    fn test_select_resolved_options() {
        let props = SelectProps::new(colors()).with_base(SelectStyle {
            options: Some(colors()),
            selected_index: Some(2),
            ..Default::default()
        });
        let options = props.options(&SelectStyle::native_defaults());
        assert_eq!(options.selected_index, Some(2));
        assert_eq!(options.selected_text_color, Some(Rgba::YELLOW));
        assert_eq!(options.options.map(|o| o.len()), Some(3));
        assert_eq!(options.fast_scroll_step, Some(5));
    }

    #[test]
    fn test_select_options_from_defaults() {
        let (seen, callback) = recorder();
        let defaults = SelectStyle {
            options: Some(colors()),
            ..SelectStyle::native_defaults()
        };
        let props = SelectProps::default().on_select(callback);

        assert_eq!(props.options(&defaults).options.map(|o| o.len()), Some(3));
        props.emit_select(0, &defaults);
        assert_eq!(*seen.borrow(), vec![(0, Some("Red".to_string()))]);

        // A style list replaces the configured one.
        let styled = props.with_style(SelectStyle {
            options: Some(colors()[2..].to_vec()),
            ..Default::default()
        });
        assert_eq!(styled.current_options(&defaults).len(), 1);
    }

    #[test]
    fn test_select_without_options_is_empty() {
        let (seen, callback) = recorder();
        let defaults = SelectStyle::native_defaults();
        let props = SelectProps::default().on_select(callback);
        assert!(props.current_options(&defaults).is_empty());
        props.emit_select(0, &defaults);
        assert_eq!(*seen.borrow(), vec![(0, None)]);
    }
}
