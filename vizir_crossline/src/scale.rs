// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales that cross lines can be bound to.
//!
//! A cross line only needs two things from its axis scale: a way to convert a domain value into
//! a pixel coordinate along the axis, and the band width (if the scale is banded) so markers can
//! be centered on a category. That contract is the [`Scale`] trait; the concrete scales below cover
//! the common axis types.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps domain values of type `D` to pixel coordinates along an axis.
pub trait Scale<D> {
    /// Converts a domain value into a coordinate in range space.
    ///
    /// Values the scale cannot place (unknown categories, non-positive values on a log scale)
    /// convert to `NaN`.
    fn convert(&self, value: &D) -> f64;

    /// Returns the pixel width of one band, for banded (categorical) scales.
    fn bandwidth(&self) -> Option<f64> {
        None
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

impl Scale<f64> for ScaleLinear {
    fn convert(&self, value: &f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (*value - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base. Invalid bases (non-finite, non-positive, or `1`) fall back to `10`.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    fn log(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }
}

impl Scale<f64> for ScaleLog {
    fn convert(&self, value: &f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if *value <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return f64::NAN;
        }
        let (l0, l1) = (self.log(d0), self.log(d1));
        if l1 == l0 {
            return r0;
        }
        let t = (self.log(*value) - l0) / (l1 - l0);
        r0 + t * (r1 - r0)
    }
}

/// A time scale over numeric timestamps (seconds, milliseconds, ...).
///
/// Time is modeled as a plain `f64`, so this is a linear mapping with its own name to keep
/// call sites self-describing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }
}

impl Scale<f64> for ScaleTime {
    fn convert(&self, value: &f64) -> f64 {
        self.inner.convert(value)
    }
}

/// A discrete band scale for categorical axes.
///
/// Domain values are category indices. [`Scale::convert`] returns the start of the band, and
/// [`Scale::bandwidth`] reports the band width so cross lines can center on the category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as f64;
        let (r0, r1) = self.range;
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 {
            0.0
        } else {
            (r1 - r0).abs() / denom
        }
    }
}

impl Scale<usize> for ScaleBand {
    fn convert(&self, value: &usize) -> f64 {
        if *value >= self.count {
            return f64::NAN;
        }
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        r0.min(r1) + bw * self.padding_outer + step * *value as f64
    }

    fn bandwidth(&self) -> Option<f64> {
        Some(self.band_width())
    }
}

/// A discrete point scale: a band scale whose bands have no width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a new point scale with half a step of outer padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.5,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    fn step(&self) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        let denom = (self.count - 1) as f64 + 2.0 * self.padding;
        if denom == 0.0 {
            0.0
        } else {
            (r1 - r0).abs() / denom
        }
    }
}

impl Scale<usize> for ScalePoint {
    fn convert(&self, value: &usize) -> f64 {
        if *value >= self.count {
            return f64::NAN;
        }
        let (r0, r1) = self.range;
        let step = self.step();
        r0.min(r1) + self.padding * step + step * *value as f64
    }
}
