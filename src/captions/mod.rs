/*!
 * Caption layout.
 *
 * - `models`: timed words in, caption lines out
 * - `measure`: text measurement surfaces
 * - `packer`: greedy width-based grouping of words into lines
 * - `fetch`: loading caption payloads over HTTP
 * - `export`: SRT rendering of packed lines
 */

pub mod export;
pub mod fetch;
pub mod measure;
pub mod models;
pub mod packer;

pub use fetch::{words_from_payload, CaptionFetcher};
pub use measure::{
    HeuristicSurface, HeuristicSurfaceProvider, MeasureSurface, SurfaceProvider, TextMetrics,
};
pub use models::{CaptionLayout, CaptionLine, CaptionWord, ParagraphIndex, TimedWord};
pub use packer::pack_words;
