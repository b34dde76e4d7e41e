/*!
 * Greedy caption line packing.
 *
 * Words are appended to the current line until the measured width of the
 * line would exceed the budget, at which point the line is closed and the
 * word starts a new one. Every input word ends up in exactly one line.
 */

use log::{debug, warn};

use crate::captions::measure::{MeasureSurface, SurfaceProvider};
use crate::captions::models::{CaptionLayout, CaptionLine, CaptionWord, TimedWord};

/// Glyph sample whose ink box gives the line height
pub const HEIGHT_SAMPLE: &str = "AaFfLMZpPqQ";

const MS_PER_SECOND: f64 = 1000.0;

/// Group `words` into caption lines no wider than `layout.max_width`.
///
/// A word that is wider than the budget on its own still gets a line of its
/// own. Returns an empty list for empty input or when no measuring surface
/// is available.
pub fn pack_words(
    words: &[TimedWord],
    layout: &CaptionLayout,
    surfaces: &dyn SurfaceProvider,
) -> Vec<CaptionLine> {
    if words.is_empty() {
        return Vec::new();
    }

    let Some(mut surface) = surfaces.acquire() else {
        warn!("No text measuring surface available, skipping caption layout");
        return Vec::new();
    };
    surface.set_font(&layout.font());

    let mut lines = Vec::new();
    let mut pending = Pending::default();

    for word in words {
        let test_text = if pending.text.is_empty() {
            word.text.clone()
        } else {
            format!("{} {}", pending.text, word.text)
        };
        let test_width = surface.measure_text(&test_text).width;

        if test_width > layout.max_width && !pending.words.is_empty() {
            lines.push(pending.finish(&*surface, layout.font_size));
            pending = Pending {
                words: vec![word],
                width: surface.measure_text(&word.text).width,
                text: word.text.clone(),
            };
        } else {
            pending.words.push(word);
            pending.text = test_text;
            pending.width = test_width;
        }
    }

    if !pending.words.is_empty() {
        lines.push(pending.finish(&*surface, layout.font_size));
    }

    debug!("Packed {} words into {} caption lines", words.len(), lines.len());
    lines
}

/// Words collected for the line under construction
#[derive(Default)]
struct Pending<'w> {
    words: Vec<&'w TimedWord>,
    text: String,
    width: f64,
}

impl Pending<'_> {
    fn finish(self, surface: &dyn MeasureSurface, font_size: f64) -> CaptionLine {
        let first = self.words[0];
        let last = self.words[self.words.len() - 1];
        let last_idx = self.words.len() - 1;

        let words = self
            .words
            .iter()
            .enumerate()
            .map(|(idx, w)| CaptionWord {
                text: w.text.clone(),
                // Overlapping, out-of-order input can make this negative; kept as is
                relative_start_ms: if idx == 0 {
                    0.0
                } else {
                    (w.start - first.start) * MS_PER_SECOND
                },
                relative_end_ms: (w.end - first.start) * MS_PER_SECOND,
                is_edge_word: idx == 0 || idx == last_idx,
                paragraph_index: w.paragraph_index.clone().unwrap_or_default(),
            })
            .collect();

        CaptionLine {
            text: self.text,
            pixel_width: self.width,
            pixel_height: line_height(surface, font_size),
            start: first.start,
            end: last.end,
            words,
        }
    }
}

fn line_height(surface: &dyn MeasureSurface, font_size: f64) -> f64 {
    let height = surface.measure_text(HEIGHT_SAMPLE).height();
    if height.is_finite() && height != 0.0 {
        height
    } else {
        font_size
    }
}
