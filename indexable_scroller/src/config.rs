// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration of the index bar and its preview bubble.

use kurbo::Vec2;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use peniko::Color;

use indexable_paint::BoxShadow;

const BACKGROUND_ALPHA: u8 = 0x20;
const TOUCHED_BACKGROUND_ALPHA: u8 = 0x60;

/// Appearance and spacing of an index bar.
///
/// Lengths are in logical pixels. Use [`IndexBarConfig::for_density`] to get
/// the defaults for a given display density; [`Default`] assumes a density of
/// one.
///
/// Changing `padding`, `gap`, or `text_size` changes the bar's geometry, so
/// a new config must go through
/// [`IndexScroller::set_config`](crate::IndexScroller::set_config).
#[derive(Clone, Debug, PartialEq)]
pub struct IndexBarConfig {
    /// Color of the section glyphs.
    pub text_color: Color,
    /// Bar background while idle.
    pub background_color: Color,
    /// Bar background while a drag that started on the bar is held.
    pub touched_background_color: Color,
    /// Horizontal space on each side of the widest glyph.
    pub padding: f64,
    /// Vertical space between consecutive glyph slots.
    pub gap: f64,
    /// Font size of the section glyphs.
    pub text_size: f64,
    /// Corner radius of the bar background.
    pub bar_corner_radius: f64,
    /// Font size of the preview bubble label.
    pub preview_text_size: f64,
    /// Corner radius of the preview bubble.
    pub preview_corner_radius: f64,
    /// Fill of the preview bubble.
    pub preview_color: Color,
    /// Color of the preview bubble label.
    pub preview_text_color: Color,
    /// Shadow under the preview bubble.
    pub preview_shadow: Option<BoxShadow>,
}

impl IndexBarConfig {
    /// Default configuration for a display with the given density (pixels per
    /// dp) and font scale (pixels per sp).
    ///
    /// Padding and gap are rounded to whole pixels; the glyph text size is
    /// truncated to whole pixels.
    #[must_use]
    pub fn for_density(density: f64, scaled_density: f64) -> Self {
        Self {
            text_color: Color::BLACK,
            background_color: with_alpha_byte(Color::BLACK, BACKGROUND_ALPHA),
            touched_background_color: with_alpha_byte(Color::BLACK, TOUCHED_BACKGROUND_ALPHA),
            padding: (10.0 * density).round(),
            gap: (3.0 * density).round(),
            text_size: (12.0 * scaled_density).trunc(),
            bar_corner_radius: 20.0,
            preview_text_size: 50.0 * scaled_density,
            preview_corner_radius: 5.0 * density,
            preview_color: Color::from_rgba8(0, 0, 0, 96),
            preview_text_color: Color::WHITE,
            preview_shadow: Some(BoxShadow {
                blur_radius: 3.0,
                offset: Vec2::ZERO,
                color: Color::from_rgba8(0, 0, 0, 64),
            }),
        }
    }

    /// Derives both bar backgrounds from one base color, keeping its RGB and
    /// replacing its alpha.
    #[must_use]
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.background_color = with_alpha_byte(color, BACKGROUND_ALPHA);
        self.touched_background_color = with_alpha_byte(color, TOUCHED_BACKGROUND_ALPHA);
        self
    }

    /// Sets the glyph color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the horizontal padding around the widest glyph.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the vertical gap between glyph slots.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the glyph font size.
    #[must_use]
    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size;
        self
    }
}

impl Default for IndexBarConfig {
    fn default() -> Self {
        Self::for_density(1.0, 1.0)
    }
}

fn with_alpha_byte(color: Color, alpha: u8) -> Color {
    color.with_alpha(f32::from(alpha) / 255.0)
}
