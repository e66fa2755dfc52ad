//! Dense, resizable 2D and 3D grids backed by a single flat buffer.
//!
//! Both grids support whole-column/row (and for [Grid3D], depth slice) insertion and removal,
//! bounds checked element access, and coordinate adapters so that arrays, tuples and [Point2i]s
//! can all be used as positions.

mod coord;
mod error;
mod grid2d;
mod grid3d;
mod layout;
#[cfg(feature = "point")]
mod point;
mod slice;

pub use coord::{coords2, coords3, GridCoord2, GridCoord3, GridSize2, GridSize3};
pub use error::{Axis, Coord, Dims, GridError, GridResult, InvalidArgument};
pub use grid2d::Grid2D;
pub use grid3d::Grid3D;
#[cfg(feature = "point")]
pub use point::Point2i;
pub use slice::{Slice, SliceMut};
