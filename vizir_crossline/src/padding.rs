// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart padding reserved for labels that sit outside the plot.

/// Extra room, per side, that a chart should reserve around its plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartPadding {
    /// Room above the plot.
    pub top: f64,
    /// Room right of the plot.
    pub right: f64,
    /// Room below the plot.
    pub bottom: f64,
    /// Room left of the plot.
    pub left: f64,
}

impl ChartPadding {
    /// No padding on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Per-side maximum of `self` and `other`.
    ///
    /// Cross lines on the same chart each report what they need; the chart reserves the largest.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    /// Returns `true` if no side needs room.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
