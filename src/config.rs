//! Renderer defaults per element kind.
//!
//! The lowest layer of every merge. Built-in values match the renderer's
//! native defaults; a TOML file may override any styleable field:
//!
//! ```toml
//! [text]
//! fg = "#e0e0e0"
//!
//! [box]
//! border_style = "rounded"
//! padding = 1
//!
//! [select]
//! selected_text_color = "cyan"
//! ```
//!
//! Keys are the style field names. Structural and internal fields
//! (`content`, `title`, `buffered`) are not accepted, nor is anything unknown.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{BoxStyle, GroupStyle, InputStyle, SelectStyle, TabSelectStyle, TextStyle};
use crate::error::{Error, Result};
use crate::merge::Overlay;

/// Defaults for every element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineDefaults {
    pub text: TextStyle,
    #[serde(rename = "box")]
    pub box_: BoxStyle,
    pub group: GroupStyle,
    pub input: InputStyle,
    pub select: SelectStyle,
    pub tab_select: TabSelectStyle,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            text: TextStyle::native_defaults(),
            box_: BoxStyle::native_defaults(),
            group: GroupStyle::native_defaults(),
            input: InputStyle::native_defaults(),
            select: SelectStyle::native_defaults(),
            tab_select: TabSelectStyle::native_defaults(),
        }
    }
}

impl EngineDefaults {
    /// Parse overrides and layer them over the native defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let overrides: EngineDefaults = toml::from_str(source)?;
        Ok(overrides.over_native())
    }

    /// Read and parse a defaults file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let defaults = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded engine defaults");
        Ok(defaults)
    }

    /// A section present in the file deserializes as a partial record, so
    /// every section is completed from the native defaults.
    fn over_native(self) -> Self {
        let native = Self::default();
        Self {
            text: self.text.overlay(&native.text),
            box_: self.box_.overlay(&native.box_),
            group: self.group.overlay(&native.group),
            input: self.input.overlay(&native.input),
            select: self.select.overlay(&native.select),
            tab_select: self.tab_select.overlay(&native.tab_select),
        }
    }
}
