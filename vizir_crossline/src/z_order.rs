// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for cross-line nodes.
//!
//! Cross lines are annotations and sit above every series layer. Renderers should sort by
//! `(z_index, insertion order)` for a deterministic tie-break.

/// Stroked series marks (lines, rules); cross lines stack relative to this band.
pub const SERIES_STROKE: i32 = 10;

/// Filled region of a range cross line.
pub const CROSS_LINE_RANGE: i32 = SERIES_STROKE + 15;
/// Boundary strokes of a cross line.
pub const CROSS_LINE_STROKE: i32 = SERIES_STROKE + 20;
/// Cross-line label.
pub const CROSS_LINE_LABEL: i32 = SERIES_STROKE + 25;
