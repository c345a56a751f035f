// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label fonts and text measurement.
//!
//! Cross lines never shape text. Fonts are carried through to the renderer untouched, and the
//! only place text size matters is when reserving chart padding for labels that sit outside the
//! plot. That goes through the [`TextMeasurer`] trait so callers can plug in a real shaping
//! backend; [`HeuristicTextMeasurer`] is good enough for demos and tests.

extern crate alloc;

use alloc::sync::Arc;

/// Font family of a label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    #[default]
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name for CSS-style font declarations.
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weight (`400` normal, `700` bold).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// CSS-style font style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
}

/// Font settings of a cross-line label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFont {
    /// Font size in scene units.
    pub size: f64,
    /// Font family.
    pub family: FontFamily,
    /// Font weight.
    pub weight: FontWeight,
    /// Font style.
    pub style: FontStyle,
}

impl LabelFont {
    /// A sans-serif font of the given size.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new(14.0)
    }
}

/// Measured metrics for one line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Advance width.
    pub advance_width: f64,
    /// Distance from the baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Measures single-line label text.
pub trait TextMeasurer {
    /// Measures `text` as a single line set in `font`.
    fn measure(&self, text: &str, font: &LabelFont) -> TextMetrics;
}

/// Heuristic measurer: ~0.6em average advance, 0.8em ascent, 0.2em descent.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * font.size * text.chars().count() as f64,
            ascent: 0.8 * font.size,
            descent: 0.2 * font.size,
        }
    }
}
