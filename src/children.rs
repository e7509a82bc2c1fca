//! Children normalization.
//!
//! Text children are an explicit sum type rather than "anything renderable":
//!
//! ```text
//! TextChildren = Empty | Single(TextChild) | Sequence([TextChild])
//! TextChild    = Empty | Scalar(Scalar) | Styled(StyledText) | Chunk(TextChunk)
//! ```
//!
//! A sequence cannot contain another sequence, so flattening is exactly one
//! level deep by construction. [`normalize_text`] is total over these types.
//!
//! Container children (box, group) are nested elements whose order is layout
//! order; [`normalize_nodes`] hands them through untouched.

use std::fmt;

use crate::engine::{StyledText, TextChunk};
use crate::primitives::Element;

// =============================================================================
// Scalars
// =============================================================================

/// A primitive value rendered as its literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    /// Accepted for `cond && value` patterns; never rendered.
    Bool(bool),
}

impl Scalar {
    /// Literal text, or `None` for values that render nothing.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Scalar::Str(s) => Some(s.clone()),
            Scalar::Int(n) => Some(n.to_string()),
            Scalar::Float(f) => Some(FloatText(*f).to_string()),
            Scalar::Bool(_) => None,
        }
    }
}

/// Number formatting in the view layer's convention: `1` not `1.0`,
/// `Infinity` not `inf`, `0` for negative zero, and exponent notation
/// (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
struct FloatText(f64);

impl fmt::Display for FloatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let magnitude = value.abs();
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            f.write_str("0")
        } else if magnitude >= 1e21 {
            // LowerExp omits the sign of a positive exponent
            let exp = format!("{value:e}");
            f.write_str(&exp.replacen('e', "e+", 1))
        } else if magnitude < 1e-6 {
            write!(f, "{value:e}")
        } else {
            // f64's Display already drops a trailing ".0"
            write!(f, "{value}")
        }
    }
}

// =============================================================================
// Text children
// =============================================================================

/// One text child.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TextChild {
    /// Null or undefined: ignored.
    #[default]
    Empty,
    Scalar(Scalar),
    /// Pre-built rich text; its chunk boundaries are kept.
    Styled(StyledText),
    /// A single styled fragment.
    Chunk(TextChunk),
}

/// The children of a text element.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TextChildren {
    #[default]
    Empty,
    Single(TextChild),
    Sequence(Vec<TextChild>),
}

impl From<&str> for TextChild {
    fn from(value: &str) -> Self {
        TextChild::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<String> for TextChild {
    fn from(value: String) -> Self {
        TextChild::Scalar(Scalar::Str(value))
    }
}

impl From<i64> for TextChild {
    fn from(value: i64) -> Self {
        TextChild::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for TextChild {
    fn from(value: i32) -> Self {
        TextChild::Scalar(Scalar::Int(value.into()))
    }
}

impl From<usize> for TextChild {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => TextChild::Scalar(Scalar::Int(n)),
            Err(_) => TextChild::Scalar(Scalar::Float(value as f64)),
        }
    }
}

impl From<f64> for TextChild {
    fn from(value: f64) -> Self {
        TextChild::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for TextChild {
    fn from(value: bool) -> Self {
        TextChild::Scalar(Scalar::Bool(value))
    }
}

impl From<StyledText> for TextChild {
    fn from(value: StyledText) -> Self {
        TextChild::Styled(value)
    }
}

impl From<TextChunk> for TextChild {
    fn from(value: TextChunk) -> Self {
        TextChild::Chunk(value)
    }
}

impl<T: Into<TextChild>> From<Option<T>> for TextChild {
    fn from(value: Option<T>) -> Self {
        value.map_or(TextChild::Empty, Into::into)
    }
}

macro_rules! single_child_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TextChildren {
                fn from(value: $ty) -> Self {
                    TextChildren::Single(value.into())
                }
            }
        )*
    };
}

single_child_from!(&str, String, i64, i32, usize, f64, bool, StyledText, TextChunk, TextChild);

impl<T: Into<TextChild>> From<Option<T>> for TextChildren {
    fn from(value: Option<T>) -> Self {
        TextChildren::Single(value.into())
    }
}

impl FromIterator<TextChild> for TextChildren {
    fn from_iter<I: IntoIterator<Item = TextChild>>(iter: I) -> Self {
        TextChildren::Sequence(iter.into_iter().collect())
    }
}

/// Build a [`TextChildren::Sequence`] from mixed values.
///
/// ```
/// use spark_props::text_children;
/// use spark_props::children::normalize_text;
///
/// let children = text_children!["a", None::<&str>, 1, "b"];
/// assert_eq!(normalize_text(&children).plain_text(), "a1b");
/// ```
#[macro_export]
macro_rules! text_children {
    ($($child:expr),* $(,)?) => {
        $crate::children::TextChildren::Sequence(vec![
            $($crate::children::TextChild::from($child)),*
        ])
    };
}

// =============================================================================
// Normalization
// =============================================================================

/// Accumulates chunks, merging adjacent scalar text into one plain chunk.
#[derive(Default)]
struct ChunkBuilder {
    chunks: Vec<TextChunk>,
    pending: Option<String>,
    ignored: usize,
}

impl ChunkBuilder {
    fn push(&mut self, child: &TextChild) {
        match child {
            TextChild::Empty => self.ignored += 1,
            TextChild::Scalar(scalar) => match scalar.to_text() {
                Some(text) => self.pending.get_or_insert_with(String::new).push_str(&text),
                None => self.ignored += 1,
            },
            TextChild::Styled(styled) => {
                self.flush();
                self.chunks.extend(styled.chunks.iter().cloned());
            }
            TextChild::Chunk(chunk) => {
                self.flush();
                self.chunks.push(chunk.clone());
            }
        }
    }

    fn flush(&mut self) {
        if let Some(text) = self.pending.take() {
            self.chunks.push(TextChunk::plain(text));
        }
    }

    fn finish(mut self) -> StyledText {
        self.flush();
        if self.ignored > 0 {
            tracing::trace!(ignored = self.ignored, "dropped empty text children");
        }
        StyledText::new(self.chunks)
    }
}

/// Normalize text children into the content the text renderable draws.
///
/// - null/empty entries and booleans are dropped
/// - scalars become their literal text
/// - adjacent scalars concatenate into one plain chunk
/// - styled text and chunks keep their boundaries
///
/// No children, or only ignored ones, yields empty content.
pub fn normalize_text(children: &TextChildren) -> StyledText {
    let mut builder = ChunkBuilder::default();
    match children {
        TextChildren::Empty => {}
        TextChildren::Single(child) => builder.push(child),
        TextChildren::Sequence(items) => items.iter().for_each(|child| builder.push(child)),
    }
    builder.finish()
}

/// Container children are already in layout order.
#[inline]
pub fn normalize_nodes(children: &[Element]) -> &[Element] {
    children
}

// =============================================================================
// Tests
// =============================================================================
