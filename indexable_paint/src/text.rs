// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Measured extent of a single line of text.
///
/// Vertical values are relative to the baseline with `y` growing downwards,
/// so `ascent` is normally negative and `descent` positive.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the run.
    pub width: f64,
    /// Distance from the baseline to the top of the line (negative).
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line (positive).
    pub descent: f64,
    /// Extra spacing recommended between lines.
    pub leading: f64,
}

impl TextMetrics {
    /// Height of one line: `descent - ascent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.descent - self.ascent + self.leading
    }

    /// Height of the glyph box without leading: `descent - ascent`.
    #[must_use]
    pub fn glyph_height(&self) -> f64 {
        self.descent - self.ascent
    }
}

/// Text measurement capability supplied by the host's text stack.
pub trait TextMeasurer {
    /// Measure `text` rendered at font size `size`.
    fn measure(&self, text: &str, size: f64) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, size: f64) -> TextMetrics {
        (**self).measure(text, size)
    }
}

/// A measurer for fixed-advance fonts.
///
/// Every character advances by `advance * size`; line metrics are fixed
/// fractions of `size`. Useful for headless hosts, terminals, and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance per character, as a fraction of the font size.
    pub advance: f64,
    /// Ascent as a fraction of the font size (positive; reported negated).
    pub ascent: f64,
    /// Descent as a fraction of the font size.
    pub descent: f64,
    /// Leading as a fraction of the font size.
    pub leading: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            ascent: 0.8,
            descent: 0.2,
            leading: 0.0,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, size: f64) -> TextMetrics {
        let chars = text.chars().count() as f64;
        TextMetrics {
            width: chars * self.advance * size,
            ascent: -self.ascent * size,
            descent: self.descent * size,
            leading: self.leading * size,
        }
    }
}
