// SPDX-License-Identifier: MPL-2.0
//! Width breakpoints and the size classes they select.
//!
//! Bands are closed on their upper bound: a width of exactly
//! [`SMALL_MAX_WIDTH`] is still small, and exactly [`MEDIUM_MAX_WIDTH`]
//! is still medium.

use std::fmt;

/// Largest width (inclusive) classified as [`SizeClass::Small`].
pub const SMALL_MAX_WIDTH: f32 = 600.0;

/// Largest width (inclusive) classified as [`SizeClass::Medium`].
pub const MEDIUM_MAX_WIDTH: f32 = 800.0;

/// Discrete layout band derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Returns the `(rows, columns)` shape of the grid for this class.
    ///
    /// Every shape holds exactly eight cells.
    #[must_use]
    pub fn grid_shape(self) -> (usize, usize) {
        match self {
            SizeClass::Small => (8, 1),
            SizeClass::Medium => (4, 2),
            SizeClass::Large => (2, 4),
        }
    }

    /// Number of grid rows for this class.
    #[must_use]
    pub fn rows(self) -> usize {
        self.grid_shape().0
    }

    /// Number of grid columns for this class.
    #[must_use]
    pub fn columns(self) -> usize {
        self.grid_shape().1
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        };
        f.write_str(name)
    }
}

/// Maps a viewport width to its size class.
///
/// Total over `f32`: negative widths and NaN fall into [`SizeClass::Small`]
/// because they never compare greater than the small breakpoint.
#[must_use]
pub fn classify(width: f32) -> SizeClass {
    if width > MEDIUM_MAX_WIDTH {
        SizeClass::Large
    } else if width > SMALL_MAX_WIDTH {
        SizeClass::Medium
    } else {
        SizeClass::Small
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_up_to_600_are_small() {
        for width in [0.0, 1.0, 320.0, 599.9, 600.0] {
            assert_eq!(classify(width), SizeClass::Small, "width {width}");
        }
    }

    #[test]
    fn widths_between_600_and_800_are_medium() {
        for width in [600.1, 601.0, 700.0, 799.9, 800.0] {
            assert_eq!(classify(width), SizeClass::Medium, "width {width}");
        }
    }

    #[test]
    fn widths_above_800_are_large() {
        for width in [800.1, 801.0, 1280.0, 3840.0] {
            assert_eq!(classify(width), SizeClass::Large, "width {width}");
        }
    }

    #[test]
    fn degenerate_widths_are_small() {
        assert_eq!(classify(-10.0), SizeClass::Small);
        assert_eq!(classify(f32::NAN), SizeClass::Small);
        assert_eq!(classify(f32::INFINITY), SizeClass::Large);
    }

    #[test]
    fn every_shape_holds_eight_cells() {
        for class in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
            let (rows, columns) = class.grid_shape();
            assert_eq!(rows * columns, 8, "{class}");
        }
    }

    #[test]
    fn shapes_match_breakpoint_layouts() {
        assert_eq!(SizeClass::Small.grid_shape(), (8, 1));
        assert_eq!(SizeClass::Medium.grid_shape(), (4, 2));
        assert_eq!(SizeClass::Large.grid_shape(), (2, 4));
    }
}
