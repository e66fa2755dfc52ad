use std::convert::TryFrom;

use misc::sized_iter::SizedIterator;
use misc::*;

use crate::error::GridResult;
#[cfg(feature = "point")]
use crate::error::{Axis, InvalidArgument};
#[cfg(feature = "point")]
use crate::point::Point2i;

/// Anything usable as an `(x, y)` position in a [Grid2D](crate::Grid2D). Components are widened to
/// signed so that negative positions (e.g. from a [Point2i]) are reported rather than wrapped.
pub trait GridCoord2: Copy {
    fn xy(self) -> [i64; 2];
}

/// Anything usable as an `(x, y, z)` position in a [Grid3D](crate::Grid3D)
pub trait GridCoord3: Copy {
    fn xyz(self) -> [i64; 3];
}

/// Anything usable as a `(width, height)` pair
pub trait GridSize2: Copy {
    fn extents(self) -> GridResult<[usize; 2]>;
}

/// Anything usable as a `(width, height, depth)` triple
pub trait GridSize3: Copy {
    fn extents(self) -> GridResult<[usize; 3]>;
}

#[inline]
fn widen(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(feature = "point")]
fn narrow(axis: Axis, n: i64) -> GridResult<usize> {
    usize::try_from(n).map_err(|_| InvalidArgument::NegativeExtent { axis, extent: n }.into())
}

impl GridCoord2 for [usize; 2] {
    fn xy(self) -> [i64; 2] {
        let [x, y] = self;
        [widen(x), widen(y)]
    }
}

impl GridCoord2 for (usize, usize) {
    fn xy(self) -> [i64; 2] {
        [widen(self.0), widen(self.1)]
    }
}

#[cfg(feature = "point")]
impl GridCoord2 for Point2i {
    fn xy(self) -> [i64; 2] {
        [i64::from(self.x), i64::from(self.y)]
    }
}

impl GridCoord3 for [usize; 3] {
    fn xyz(self) -> [i64; 3] {
        let [x, y, z] = self;
        [widen(x), widen(y), widen(z)]
    }
}

impl GridCoord3 for (usize, usize, usize) {
    fn xyz(self) -> [i64; 3] {
        [widen(self.0), widen(self.1), widen(self.2)]
    }
}

impl GridSize2 for [usize; 2] {
    fn extents(self) -> GridResult<[usize; 2]> {
        Ok(self)
    }
}

impl GridSize2 for (usize, usize) {
    fn extents(self) -> GridResult<[usize; 2]> {
        Ok([self.0, self.1])
    }
}

#[cfg(feature = "point")]
impl GridSize2 for Point2i {
    fn extents(self) -> GridResult<[usize; 2]> {
        Ok([
            narrow(Axis::Column, i64::from(self.x))?,
            narrow(Axis::Row, i64::from(self.y))?,
        ])
    }
}

impl GridSize3 for [usize; 3] {
    fn extents(self) -> GridResult<[usize; 3]> {
        Ok(self)
    }
}

impl GridSize3 for (usize, usize, usize) {
    fn extents(self) -> GridResult<[usize; 3]> {
        Ok([self.0, self.1, self.2])
    }
}

/// Every `[x, y]` in storage order, i.e. y-major. Doesn't borrow the grid, so the grid can be
/// mutated while iterating.
pub fn coords2(
    width: usize,
    height: usize,
) -> impl ExactSizeIterator<Item = [usize; 2]> + Clone {
    let iter = (0..height)
        .cartesian_product(0..width)
        .map(|(y, x)| [x, y]);
    SizedIterator::new(iter, width * height)
}

/// Every `[x, y, z]` in storage order: depth slices, then rows, then columns
pub fn coords3(
    width: usize,
    height: usize,
    depth: usize,
) -> impl ExactSizeIterator<Item = [usize; 3]> + Clone {
    let iter = (0..depth)
        .cartesian_product(0..height)
        .cartesian_product(0..width)
        .map(|((z, y), x)| [x, y, z]);
    SizedIterator::new(iter, width * height * depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "point")]
    use crate::error::GridError;

    #[test]
    fn storage_order() {
        let coords = coords2(3, 2).collect_vec();
        assert_eq!(
            coords,
            vec![[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [2, 1]]
        );

        let coords = coords3(2, 2, 2);
        assert_eq!(coords.len(), 8);
        let coords = coords.collect_vec();
        assert_eq!(coords[1], [1, 0, 0]);
        assert_eq!(coords[2], [0, 1, 0]);
        assert_eq!(coords[4], [0, 0, 1]);
        assert_eq!(coords[7], [1, 1, 1]);
    }

    #[test]
    fn empty_extent_yields_nothing() {
        assert_eq!(coords2(0, 5).len(), 0);
        assert_eq!(coords2(0, 5).count(), 0);
        assert_eq!(coords3(4, 0, 2).count(), 0);
    }

    #[cfg(feature = "point")]
    #[test]
    fn point_adapters() {
        assert_eq!(Point2i::new(-1, 4).xy(), [-1, 4]);
        assert_eq!(Point2i::new(5, 3).extents(), Ok([5, 3]));

        let err = Point2i::new(3, -2).extents().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidArgument(InvalidArgument::NegativeExtent {
                axis: Axis::Row,
                extent: -2
            })
        );
    }

    #[test]
    fn tuples_and_arrays_agree() {
        assert_eq!((4, 7).xy(), [4, 7].xy());
        assert_eq!((1, 2, 3).xyz(), [1, 2, 3]);
        assert_eq!((2, 5).extents(), Ok([2, 5]));
    }
}
