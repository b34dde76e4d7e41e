use serde::{Deserialize, Serialize};
use std::fmt;

// @module: Caption data shapes

// @const: Defaults used when layout parameters are not supplied
pub const DEFAULT_MAX_WIDTH: f64 = 800.0;
pub const DEFAULT_FONT_SIZE: f64 = 80.0;
pub const DEFAULT_FONT_FAMILY: &str = "Bangers-Regular";

/// Paragraph a word belongs to, as numbered or named by the transcript source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParagraphIndex {
    Number(i64),
    Name(String),
}

impl Default for ParagraphIndex {
    fn default() -> Self {
        ParagraphIndex::Name(String::new())
    }
}

impl fmt::Display for ParagraphIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Name(s) => write!(f, "{}", s),
        }
    }
}

// @struct: Word with absolute timing from a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TimedWordRecord")]
pub struct TimedWord {
    // @field: Word text
    pub text: String,

    // @field: Start in seconds
    pub start: f64,

    // @field: End in seconds
    pub end: f64,

    // @field: Optional paragraph identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_index: Option<ParagraphIndex>,
}

/// Transcript entry as sent over the wire.
///
/// Sources name the text either `word` or `text`, sometimes both. A non-empty
/// `word` wins, then `text`, then the empty string.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedWordRecord {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    text: Option<String>,
    start: f64,
    end: f64,
    #[serde(default)]
    paragraph_index: Option<ParagraphIndex>,
}

impl From<TimedWordRecord> for TimedWord {
    fn from(record: TimedWordRecord) -> Self {
        let text = record
            .word
            .filter(|w| !w.is_empty())
            .or(record.text)
            .unwrap_or_default();
        Self {
            text,
            start: record.start,
            end: record.end,
            paragraph_index: record.paragraph_index,
        }
    }
}

impl TimedWord {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            paragraph_index: None,
        }
    }

    pub fn with_paragraph(mut self, index: ParagraphIndex) -> Self {
        self.paragraph_index = Some(index);
        self
    }
}

/// A word placed inside a caption line.
///
/// `from` and `to` are milliseconds relative to the start of the line's
/// first word, while the source words are timed in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionWord {
    pub text: String,

    // @field: Relative start in ms (always 0 for the first word)
    #[serde(rename = "from")]
    pub relative_start_ms: f64,

    // @field: Relative end in ms
    #[serde(rename = "to")]
    pub relative_end_ms: f64,

    // @field: First or last word of the line
    #[serde(rename = "isKeyWord")]
    pub is_edge_word: bool,

    pub paragraph_index: ParagraphIndex,
}

/// A group of words that fits within the width budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionLine {
    pub text: String,

    // @field: Measured width in px
    #[serde(rename = "width")]
    pub pixel_width: f64,

    // @field: Measured line height in px
    #[serde(rename = "height")]
    pub pixel_height: f64,

    // @field: First word start, seconds
    #[serde(rename = "from")]
    pub start: f64,

    // @field: Last word end, seconds
    #[serde(rename = "to")]
    pub end: f64,

    pub words: Vec<CaptionWord>,
}

impl CaptionLine {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Width budget and font used for measuring caption lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionLayout {
    #[serde(default = "default_max_width")]
    pub max_width: f64,

    #[serde(default = "default_font_size")]
    pub font_size: f64,

    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl CaptionLayout {
    pub fn new(max_width: f64, font_size: f64, font_family: impl Into<String>) -> Self {
        Self {
            max_width,
            font_size,
            font_family: font_family.into(),
        }
    }

    /// Font shorthand understood by measuring surfaces: `"<size>px <family>"`
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

impl Default for CaptionLayout {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            font_size: default_font_size(),
            font_family: default_font_family(),
        }
    }
}

fn default_max_width() -> f64 {
    DEFAULT_MAX_WIDTH
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}
