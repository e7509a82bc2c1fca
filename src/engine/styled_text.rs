//! Rich text values understood by the text renderable.

use crate::types::{Attr, Rgba};

/// A run of text with optional styling.
///
/// Unset colors and attributes inherit from the owning text element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextChunk {
    pub text: String,
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attributes: Option<Attr>,
}

impl TextChunk {
    /// An unstyled chunk.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Rgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add text attributes.
    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attributes = Some(self.attributes.unwrap_or_default() | attrs);
        self
    }

    /// True when the chunk carries no styling of its own.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_none()
    }
}

/// Pre-built rich text: an ordered list of chunks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    pub chunks: Vec<TextChunk>,
}

impl StyledText {
    pub fn new(chunks: Vec<TextChunk>) -> Self {
        Self { chunks }
    }

    /// The text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.chunks.iter().map(|chunk| chunk.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(|chunk| chunk.text.is_empty())
    }
}

impl From<TextChunk> for StyledText {
    fn from(chunk: TextChunk) -> Self {
        Self { chunks: vec![chunk] }
    }
}

impl FromIterator<TextChunk> for StyledText {
    fn from_iter<I: IntoIterator<Item = TextChunk>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}
