//! Core value types for spark-props.
//!
//! These are the value types that appear inside native option shapes.
//! They are owned by the rendering engine's schema; the binding layer only
//! moves them around, merges them and compares them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Element Kind
// =============================================================================

/// The closed set of element kinds the binding layer knows about.
///
/// Each kind has exactly one native option shape and one author property shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ElementKind {
    Text = 0,
    Box = 1,
    Group = 2,
    Input = 3,
    Select = 4,
    TabSelect = 5,
}

impl ElementKind {
    /// All kinds, in declaration order.
    pub const ALL: [ElementKind; 6] = [
        Self::Text,
        Self::Box,
        Self::Group,
        Self::Input,
        Self::Select,
        Self::TabSelect,
    ];

    /// Tag name used by the view layer (`<text>`, `<box>`, ...).
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Box => "box",
            Self::Group => "group",
            Self::Input => "input",
            Self::Select => "select",
            Self::TabSelect => "tab-select",
        }
    }

    /// Whether elements of this kind accept user interaction callbacks.
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Input | Self::Select | Self::TabSelect)
    }

    /// Whether elements of this kind nest other elements as children.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Box | Self::Group)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r < 0
    }

    /// Check if fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Create from a packed `0xRRGGBB` integer.
    ///
    /// ```
    /// use spark_props::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_rgb_int(0x282a36), Rgba::rgb(40, 42, 54));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_props::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#ff0000"), Some(Rgba::rgb(255, 0, 0)));
    /// assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::rgb(255, 255, 255)));
    /// assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 128)));
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Look up one of the basic named colors.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            "gray" | "grey" => Self::GRAY,
            _ => return None,
        };
        Some(color)
    }

    /// Parse any supported color format.
    ///
    /// Supports hex, basic color names, `transparent`, and `default`
    /// (terminal default).
    ///
    /// ```
    /// use spark_props::types::Rgba;
    ///
    /// assert_eq!(Rgba::parse("red"), Some(Rgba::RED));
    /// assert_eq!(Rgba::parse("transparent"), Some(Rgba::TRANSPARENT));
    /// assert!(Rgba::parse("default").unwrap().is_terminal_default());
    /// assert!(Rgba::parse("not-a-color").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lower = input.to_lowercase();
        match lower.as_str() {
            "transparent" => return Some(Self::TRANSPARENT),
            "default" | "inherit" | "initial" | "currentcolor" => {
                return Some(Self::TERMINAL_DEFAULT);
            }
            _ => {}
        }

        if let Some(named) = Self::from_name(&lower) {
            return Some(named);
        }

        if input.starts_with('#') || input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(input);
        }

        None
    }

    /// Format as `#rrggbbaa`, or the keyword for the two special values.
    pub fn to_hex(&self) -> String {
        if self.is_terminal_default() {
            return "default".to_string();
        }
        if *self == Self::TRANSPARENT {
            return "transparent".to_string();
        }
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r as u8, self.g as u8, self.b as u8, self.a as u8
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgba::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid color `{raw}`")))
    }
}

// =============================================================================
// Dimension - Supports absolute and percentage values
// =============================================================================

/// A dimension value that can be absolute (cells) or percentage.
///
/// In configuration files a dimension is written as a number of cells (`40`),
/// a percentage string (`"50%"`) or `"auto"`.
///
/// ```
/// use spark_props::types::Dimension;
///
/// let width = Dimension::Cells(50);
/// let height = Dimension::Percent(100.0);
/// assert_eq!(Dimension::from(0u16), Dimension::Auto);
/// # let _ = (width, height);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "DimensionRepr", into = "DimensionRepr")]
pub enum Dimension {
    /// Auto-size based on content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 {
            Self::Auto
        } else {
            Self::Cells(value)
        }
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        if value <= 0 {
            Self::Auto
        } else {
            Self::Cells(value.min(u16::MAX as i32) as u16)
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Cells(u16),
    Text(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = String;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        match repr {
            DimensionRepr::Cells(n) => Ok(Dimension::Cells(n)),
            DimensionRepr::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("auto") {
                    return Ok(Dimension::Auto);
                }
                match text.strip_suffix('%') {
                    Some(pct) => pct
                        .trim()
                        .parse::<f32>()
                        .map(Dimension::Percent)
                        .map_err(|_| format!("invalid percentage `{text}`")),
                    None => Err(format!("invalid dimension `{text}`")),
                }
            }
        }
    }
}

impl From<Dimension> for DimensionRepr {
    fn from(dim: Dimension) -> Self {
        match dim {
            Dimension::Auto => DimensionRepr::Text("auto".to_string()),
            Dimension::Cells(n) => DimensionRepr::Cells(n),
            Dimension::Percent(p) => DimensionRepr::Text(format!("{p}%")),
        }
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Attr: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border line style for boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Heavy,
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

/// Align self (item override for align items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

/// Overflow behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

/// Position type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

/// Horizontal text alignment (also used for box titles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextWrap {
    #[default]
    Wrap,
    NoWrap,
    Truncate,
}

// =============================================================================
// Tests
// =============================================================================
