use std::ops::Range;

use derive_more::Display;
use misc::*;

pub type GridResult<T> = Result<T, GridError>;

/// Components are in `x, y[, z]` order
pub type Coord = ArrayVec<i64, 3>;

/// Extents are in `width, height[, depth]` order
pub type Dims = ArrayVec<usize, 3>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Coordinate {coord:?} is out of range for grid of dimensions {dims:?}")]
    OutOfRange { coord: Coord, dims: Dims },

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("{axis} position {pos} is outside of {valid:?}")]
    Position {
        axis: Axis,
        pos: usize,
        valid: Range<usize>,
    },

    #[error("{axis} extent {extent} is negative")]
    NegativeExtent { axis: Axis, extent: i64 },

    #[error("Expected {expected} elements but got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("Can't parse point from {0:?}")]
    Point(String),
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    #[display(fmt = "column")]
    Column,
    #[display(fmt = "row")]
    Row,
    #[display(fmt = "depth")]
    Depth,
}

slog_value_display!(Axis);

impl GridError {
    pub(crate) fn out_of_range<const N: usize>(coord: [i64; N], dims: [usize; N]) -> Self {
        GridError::OutOfRange {
            coord: coord.into_iter().collect(),
            dims: dims.into_iter().collect(),
        }
    }

    /// `pos` must be in `0..limit`
    pub(crate) fn check_position(axis: Axis, pos: usize, limit: usize) -> GridResult<()> {
        if pos < limit {
            Ok(())
        } else {
            Err(InvalidArgument::Position {
                axis,
                pos,
                valid: 0..limit,
            }
            .into())
        }
    }

    pub(crate) fn check_length(expected: usize, actual: usize) -> GridResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(InvalidArgument::Length { expected, actual }.into())
        }
    }
}
