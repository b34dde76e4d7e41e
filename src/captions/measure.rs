/*!
 * Text measurement surfaces.
 *
 * Caption packing asks a surface for rendered text widths. Real front ends
 * plug in their canvas or font rasterizer; `HeuristicSurface` provides a
 * glyph-class width model for headless use.
 */

/// Result of measuring a string under the current font
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    pub actual_bounding_box_ascent: f64,
    pub actual_bounding_box_descent: f64,
}

impl TextMetrics {
    /// Ink height of the measured text
    pub fn height(&self) -> f64 {
        self.actual_bounding_box_ascent + self.actual_bounding_box_descent
    }
}

/// A stateful drawing context able to measure text
pub trait MeasureSurface {
    /// Set the active font, e.g. `"80px Bangers-Regular"`
    fn set_font(&mut self, font: &str);

    fn measure_text(&self, text: &str) -> TextMetrics;
}

/// Hands out measuring surfaces. `None` means no surface is available.
pub trait SurfaceProvider {
    fn acquire(&self) -> Option<Box<dyn MeasureSurface>>;
}

impl<F> SurfaceProvider for F
where
    F: Fn() -> Option<Box<dyn MeasureSurface>>,
{
    fn acquire(&self) -> Option<Box<dyn MeasureSurface>> {
        self()
    }
}

/// Provider of `HeuristicSurface`s
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSurfaceProvider;

impl SurfaceProvider for HeuristicSurfaceProvider {
    fn acquire(&self) -> Option<Box<dyn MeasureSurface>> {
        Some(Box::new(HeuristicSurface::default()))
    }
}

/// Approximates glyph widths per character class, scaled by font size.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicSurface {
    size_px: f64,
    family: String,
}

impl Default for HeuristicSurface {
    fn default() -> Self {
        // Canvas default font
        Self {
            size_px: 10.0,
            family: "sans-serif".to_string(),
        }
    }
}

impl HeuristicSurface {
    pub fn size_px(&self) -> f64 {
        self.size_px
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    fn is_monospace(&self) -> bool {
        let family = self.family.to_ascii_lowercase();
        family.contains("mono") || family.contains("courier")
    }
}

impl MeasureSurface for HeuristicSurface {
    /// Accepts `"<size>px <family>"`; anything unparseable keeps the old font
    fn set_font(&mut self, font: &str) {
        let font = font.trim();
        let Some((size, family)) = font.split_once(' ') else {
            return;
        };
        let Some(size) = size.strip_suffix("px").and_then(|s| s.parse::<f64>().ok()) else {
            return;
        };
        if size > 0.0 && !family.trim().is_empty() {
            self.size_px = size;
            self.family = family.trim().to_string();
        }
    }

    fn measure_text(&self, text: &str) -> TextMetrics {
        let monospace = self.is_monospace();
        let em: f64 = text
            .chars()
            .map(|c| if monospace { 0.6 } else { glyph_em_width(c) })
            .sum();

        let has_ascender = text
            .chars()
            .any(|c| c.is_uppercase() || c.is_ascii_digit() || "bdfhklt".contains(c));
        let has_lowercase = text.chars().any(|c| c.is_lowercase());
        let has_descender = text.chars().any(|c| "gjpqy".contains(c));

        let ascent = if has_ascender {
            0.72
        } else if has_lowercase {
            0.52
        } else {
            0.0
        };
        let descent = if has_descender { 0.21 } else { 0.0 };

        TextMetrics {
            width: em * self.size_px,
            actual_bounding_box_ascent: ascent * self.size_px,
            actual_bounding_box_descent: descent * self.size_px,
        }
    }
}

fn glyph_em_width(c: char) -> f64 {
    match c {
        ' ' => 0.28,
        'i' | 'j' | 'l' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.26,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' => 0.36,
        'm' | 'w' => 0.82,
        'M' | 'W' => 0.9,
        '0'..='9' => 0.56,
        c if c.is_ascii_uppercase() => 0.66,
        c if c.is_ascii_lowercase() => 0.52,
        c if c.is_ascii_punctuation() => 0.45,
        // CJK and other wide scripts
        c if (c as u32) >= 0x2E80 => 1.0,
        _ => 0.56,
    }
}
