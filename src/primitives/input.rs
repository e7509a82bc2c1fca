//! Input Primitive - Single-line text input.
//!
//! The value, placeholder and colors are ordinary styleable properties.
//! Focus and the three value callbacks live beside them on [`InputProps`];
//! they never reach the native options.
//!
//! When each callback fires is the renderer's decision. Conventionally
//! `on_input` reports every edit, `on_change` a committed value and
//! `on_submit` the enter key.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use spark_props::primitives::InputProps;
//!
//! let submitted = Rc::new(RefCell::new(String::new()));
//! let sink = submitted.clone();
//!
//! let props = InputProps::default()
//!     .with_focus(true)
//!     .on_submit(move |value| *sink.borrow_mut() = value.to_string());
//!
//! assert!(props.emit_submit("hello"));
//! assert_eq!(*submitted.borrow(), "hello");
//! ```

use std::fmt;
use std::rc::Rc;

use crate::engine::{InputOptions, InputRenderable, InputStyle};

use super::types::{Common, InputCallback};
use super::Element;

// =============================================================================
// Input Props
// =============================================================================

/// Properties of an input element.
#[derive(Clone, Default)]
pub struct InputProps {
    pub common: Common<InputStyle, dyn InputRenderable>,

    /// Request keyboard focus.
    pub focused: Option<bool>,

    /// Fired as the value is edited.
    pub on_input: Option<InputCallback>,

    /// Fired when the value is committed.
    pub on_change: Option<InputCallback>,

    /// Fired on submit (enter).
    pub on_submit: Option<InputCallback>,
}

common_builders!(InputProps, InputStyle, dyn InputRenderable);

impl InputProps {
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = Some(focused);
        self
    }

    pub fn on_input(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_input = Some(Rc::new(callback));
        self
    }

    pub fn on_change(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn on_submit(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_submit = Some(Rc::new(callback));
        self
    }

    pub fn options(&self, defaults: &InputStyle) -> InputOptions {
        self.common.resolve(defaults).into_options()
    }

    /// Invoke `on_input`. Returns whether it was registered.
    pub fn emit_input(&self, value: &str) -> bool {
        emit(self.on_input.as_ref(), value)
    }

    /// Invoke `on_change`. Returns whether it was registered.
    pub fn emit_change(&self, value: &str) -> bool {
        emit(self.on_change.as_ref(), value)
    }

    /// Invoke `on_submit`. Returns whether it was registered.
    pub fn emit_submit(&self, value: &str) -> bool {
        emit(self.on_submit.as_ref(), value)
    }
}

fn emit(callback: Option<&InputCallback>, value: &str) -> bool {
    match callback {
        Some(callback) => {
            callback(value);
            true
        }
        None => false,
    }
}

impl fmt::Debug for InputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProps")
            .field("common", &self.common)
            .field("focused", &self.focused)
            .field("on_input", &self.on_input.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

/// Create an input element.
pub fn input(props: InputProps) -> Element {
    Element::Input(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Overlay;
    use crate::types::Rgba;
    use std::cell::RefCell;

    #[test]
    fn test_input_defaults() {
        let options = InputProps::default().options(&InputStyle::native_defaults());
        assert_eq!(options.value.as_deref(), Some(""));
        assert_eq!(options.max_length, Some(1000));
        assert_eq!(options.placeholder_color, Some(Rgba::GRAY));
        assert_eq!(options.focused_background_color, Some(Rgba::from_rgb_int(0x1a1a1a)));
    }

    #[test]
    fn test_input_value_from_style() {
        let props = InputProps::default().with_style(InputStyle {
            value: Some("preset".into()),
            placeholder: Some("Name".into()),
            ..Default::default()
        });
        let options = props.options(&InputStyle::native_defaults());
        assert_eq!(options.value.as_deref(), Some("preset"));
        assert_eq!(options.placeholder.as_deref(), Some("Name"));
    }

    #[test]
    fn test_input_callbacks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let props = InputProps::default()
            .on_input(move |v| a.borrow_mut().push(format!("input:{v}")))
            .on_change(move |v| b.borrow_mut().push(format!("change:{v}")));

        assert!(props.emit_input("h"));
        assert!(props.emit_change("hi"));
        assert!(!props.emit_submit("hi"));
        assert_eq!(*log.borrow(), vec!["input:h", "change:hi"]);
    }

    #[test]
    fn test_input_focus_stays_outside_options() {
        let element = input(InputProps::default().with_focus(true));
        assert_eq!(element.focused(), Some(true));
        assert!(!InputStyle::FIELDS.contains(&"focused"));
    }

    #[test]
    fn test_input_debug_hides_callbacks() {
        let props = InputProps::default().on_submit(|_| {});
        let debug = format!("{props:?}");
        assert!(debug.contains("on_submit: true"));
        assert!(debug.contains("on_input: false"));
    }
}
