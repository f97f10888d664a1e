//! Text measurement.
//!
//! The view never shapes text itself. It asks a `TextMeasure` for the
//! advance of its text and for the font metrics of the paint.

use unicode_width::UnicodeWidthStr;
use xframe_layout::FontMetrics;

// Metrics of a 14px monospace face.
pub const CHAR_WIDTH: f32 = 8.4;
pub const ASCENT: f32 = -14.0;
pub const DESCENT: f32 = 4.0;

/// Measures text the way the platform paint would.
pub trait TextMeasure {
    /// Advance width of `text` on a single line.
    fn measure_text(&self, text: &str) -> f32;

    fn font_metrics(&self) -> FontMetrics;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_text(&self, text: &str) -> f32 {
        (**self).measure_text(text)
    }

    fn font_metrics(&self) -> FontMetrics {
        (**self).font_metrics()
    }
}

/// Fixed-advance measurement.
///
/// Width is the display column count times the advance, so wide (CJK)
/// characters take two cells and combining marks take none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub metrics: FontMetrics,
}

impl MonospaceMeasure {
    pub fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            metrics: FontMetrics::new(ascent, descent),
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(CHAR_WIDTH, ASCENT, DESCENT)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text(&self, text: &str) -> f32 {
        text.width() as f32 * self.advance
    }

    fn font_metrics(&self) -> FontMetrics {
        self.metrics
    }
}
