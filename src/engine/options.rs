//! Native option shapes, one per element kind.

use serde::{Deserialize, Serialize};

use crate::types::{Attr, BorderStyle, Rgba, TextAlign, TextWrap};

use super::styled_text::StyledText;

// =============================================================================
// Option list entries
// =============================================================================

/// One entry of a select list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// One tab of a tab select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSelectOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TabSelectOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// =============================================================================
// Text
// =============================================================================

native_options! {
    /// Native options of the text renderable.
    Text => TextOptions, TextStyle;
    structural {
        /// Text content. Supplied through the element's children.
        content: StyledText,
    }
    styleable {
        /// Foreground color.
        fg: Rgba = Rgba::WHITE,
        /// Background color.
        bg: Rgba = Rgba::TRANSPARENT,
        /// Background of selected text.
        selection_bg: Rgba = Rgba::TERMINAL_DEFAULT,
        /// Foreground of selected text.
        selection_fg: Rgba = Rgba::TERMINAL_DEFAULT,
        /// Whether the text can be selected with the mouse.
        selectable: bool = true,
        /// Text attributes (bold, italic, ...).
        attributes: Attr = Attr::empty(),
        /// Wrap mode.
        wrap: TextWrap = TextWrap::Wrap,
        /// Horizontal alignment.
        text_align: TextAlign = TextAlign::Left,
    }
}

// =============================================================================
// Box
// =============================================================================

native_options! {
    /// Native options of the box renderable.
    Box => BoxOptions, BoxStyle;
    structural {
        /// Title drawn into the top border. Supplied through the box's title slot.
        title: String,
    }
    styleable {
        /// Title alignment within the top border.
        title_alignment: TextAlign = TextAlign::Left,
        /// Fill color.
        background_color: Rgba = Rgba::TRANSPARENT,
        /// Whether a border is drawn.
        border: bool = true,
        /// Border line style.
        border_style: BorderStyle = BorderStyle::Single,
        /// Border color.
        border_color: Rgba = Rgba::WHITE,
        /// Border color while a descendant holds focus.
        focused_border_color: Rgba = Rgba::CYAN,
        /// Whether the interior is filled with the background color.
        should_fill: bool = true,
    }
}

// =============================================================================
// Group
// =============================================================================

native_options! {
    /// Native options of the group renderable: the shared renderable block only.
    Group => GroupOptions, GroupStyle;
    structural {}
    styleable {}
}

// =============================================================================
// Input
// =============================================================================

native_options! {
    /// Native options of the single-line input renderable.
    Input => InputOptions, InputStyle;
    structural {}
    styleable {
        /// Current value.
        value: String = String::new(),
        /// Placeholder shown while the value is empty.
        placeholder: String = String::new(),
        /// Maximum value length in characters.
        max_length: usize = 1000,
        /// Text color.
        text_color: Rgba = Rgba::WHITE,
        /// Background color.
        background_color: Rgba = Rgba::TRANSPARENT,
        /// Text color while focused.
        focused_text_color: Rgba = Rgba::WHITE,
        /// Background color while focused.
        focused_background_color: Rgba = Rgba::from_rgb_int(0x1a1a1a),
        /// Placeholder color.
        placeholder_color: Rgba = Rgba::GRAY,
        /// Cursor color.
        cursor_color: Rgba = Rgba::WHITE,
    }
}

// =============================================================================
// Select
// =============================================================================

native_options! {
    /// Native options of the vertical select renderable.
    Select => SelectOptions, SelectStyle;
    structural {}
    styleable {
        /// Entries, in display order.
        options: Vec<SelectOption> = Vec::new(),
        /// Highlighted entry.
        selected_index: i32 = 0,
        /// Text color.
        text_color: Rgba = Rgba::WHITE,
        /// Background color.
        background_color: Rgba = Rgba::TRANSPARENT,
        /// Text color while focused.
        focused_text_color: Rgba = Rgba::WHITE,
        /// Background color while focused.
        focused_background_color: Rgba = Rgba::from_rgb_int(0x1a1a1a),
        /// Text color of the highlighted entry.
        selected_text_color: Rgba = Rgba::YELLOW,
        /// Background color of the highlighted entry.
        selected_background_color: Rgba = Rgba::from_rgb_int(0x334455),
        /// Description color.
        description_color: Rgba = Rgba::GRAY,
        /// Description color of the highlighted entry.
        selected_description_color: Rgba = Rgba::from_rgb_int(0xcccccc),
        /// Whether descriptions are drawn under names.
        show_description: bool = true,
        /// Whether a scroll indicator is drawn.
        show_scroll_indicator: bool = false,
        /// Whether moving past either end wraps around.
        wrap_selection: bool = false,
        /// Blank rows between entries.
        item_spacing: u16 = 0,
        /// Entries skipped per fast-scroll step.
        fast_scroll_step: u16 = 5,
    }
}

// =============================================================================
// TabSelect
// =============================================================================

native_options! {
    /// Native options of the horizontal tab select renderable.
    TabSelect => TabSelectOptions, TabSelectStyle;
    structural {}
    styleable {
        /// Tabs, in display order.
        options: Vec<TabSelectOption> = Vec::new(),
        /// Highlighted tab.
        selected_index: i32 = 0,
        /// Width of each tab in cells.
        tab_width: u16 = 20,
        /// Text color.
        text_color: Rgba = Rgba::WHITE,
        /// Background color.
        background_color: Rgba = Rgba::TRANSPARENT,
        /// Text color while focused.
        focused_text_color: Rgba = Rgba::WHITE,
        /// Background color while focused.
        focused_background_color: Rgba = Rgba::from_rgb_int(0x1a1a1a),
        /// Text color of the highlighted tab.
        selected_text_color: Rgba = Rgba::YELLOW,
        /// Background color of the highlighted tab.
        selected_background_color: Rgba = Rgba::from_rgb_int(0x334455),
        /// Description color of the highlighted tab.
        selected_description_color: Rgba = Rgba::from_rgb_int(0xcccccc),
        /// Whether the highlighted tab's description is drawn.
        show_description: bool = true,
        /// Whether the highlighted tab is underlined.
        show_underline: bool = true,
        /// Whether scroll arrows are drawn when tabs overflow.
        show_scroll_arrows: bool = true,
        /// Whether moving past either end wraps around.
        wrap_selection: bool = false,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Overlay;

    fn projection<'a>(fields: &[&'a str], excluded: &[&str]) -> Vec<&'a str> {
        fields
            .iter()
            .copied()
            .filter(|field| !excluded.contains(field))
            .collect()
    }

    #[test]
    fn test_style_is_native_minus_exclusions() {
        assert_eq!(
            TextStyle::FIELDS,
            projection(TextOptions::FIELDS, TextOptions::EXCLUDED).as_slice()
        );
        assert_eq!(
            BoxStyle::FIELDS,
            projection(BoxOptions::FIELDS, BoxOptions::EXCLUDED).as_slice()
        );
        assert_eq!(
            GroupStyle::FIELDS,
            projection(GroupOptions::FIELDS, GroupOptions::EXCLUDED).as_slice()
        );
        assert_eq!(
            InputStyle::FIELDS,
            projection(InputOptions::FIELDS, InputOptions::EXCLUDED).as_slice()
        );
        assert_eq!(
            SelectStyle::FIELDS,
            projection(SelectOptions::FIELDS, SelectOptions::EXCLUDED).as_slice()
        );
        assert_eq!(
            TabSelectStyle::FIELDS,
            projection(TabSelectOptions::FIELDS, TabSelectOptions::EXCLUDED).as_slice()
        );
    }

    #[test]
    fn test_exclusion_sets() {
        assert_eq!(TextOptions::EXCLUDED, &["content", "buffered"]);
        assert_eq!(BoxOptions::EXCLUDED, &["title", "buffered"]);
        assert_eq!(GroupOptions::EXCLUDED, &["buffered"]);
        assert_eq!(InputOptions::EXCLUDED, &["buffered"]);
        assert!(!TextStyle::FIELDS.contains(&"content"));
        assert!(!BoxStyle::FIELDS.contains(&"title"));
        assert!(!SelectStyle::FIELDS.contains(&"buffered"));
    }

    #[test]
    fn test_project_drops_excluded_fields() {
        let options = TextOptions {
            content: Some(StyledText::default()),
            fg: Some(Rgba::RED),
            buffered: Some(true),
            ..Default::default()
        };
        let style = options.project();
        assert_eq!(style.fg, Some(Rgba::RED));
        assert_eq!(style.set_fields(), vec!["fg"]);

        let lifted = style.into_options();
        assert_eq!(lifted.content, None);
        assert_eq!(lifted.buffered, None);
        assert_eq!(lifted.fg, Some(Rgba::RED));
    }

    #[test]
    fn test_native_defaults_leave_per_side_spacing_unset() {
        let defaults = BoxStyle::native_defaults();
        assert_eq!(defaults.margin, Some(0));
        assert_eq!(defaults.margin_top, None);
        assert_eq!(defaults.padding_left, None);
        assert_eq!(defaults.border, Some(true));
        assert_eq!(defaults.visible, Some(true));
    }

    #[test]
    fn test_complete_expands_spacing_shorthands() {
        let merged = BoxStyle::merge(
            &BoxStyle {
                margin: Some(2),
                margin_left: Some(7),
                ..Default::default()
            },
            None,
            &BoxStyle::native_defaults(),
        );
        let complete = merged.complete();
        assert_eq!(complete.margin_top, Some(2));
        assert_eq!(complete.margin_left, Some(7));
        assert_eq!(complete.padding_bottom, Some(0));

        let bare = GroupStyle::default().complete();
        assert_eq!(bare.margin_right, Some(0));
        assert_eq!(bare.margin, None);
    }

    #[test]
    fn test_delta_reports_changed_fields_only() {
        let previous = SelectOptions {
            selected_index: Some(0),
            text_color: Some(Rgba::WHITE),
            ..Default::default()
        };
        let next = SelectOptions {
            selected_index: Some(2),
            text_color: Some(Rgba::WHITE),
            ..Default::default()
        };

        let delta = next.delta(&previous);
        assert_eq!(delta.selected_index, Some(2));
        assert_eq!(delta.text_color, None);
        assert!(next.delta(&next).is_empty());
    }

    #[test]
    fn test_style_rejects_unknown_and_excluded_keys() {
        let ok: TextStyle = toml::from_str("fg = \"red\"\nwidth = \"50%\"").unwrap();
        assert_eq!(ok.fg, Some(Rgba::RED));
        assert_eq!(ok.width, Some(crate::types::Dimension::Percent(50.0)));

        assert!(toml::from_str::<TextStyle>("content = \"hi\"").is_err());
        assert!(toml::from_str::<BoxStyle>("title = \"hi\"").is_err());
        assert!(toml::from_str::<GroupStyle>("buffered = true").is_err());
    }
}
