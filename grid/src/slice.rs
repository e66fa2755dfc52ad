use std::ops::{Index, IndexMut};

use misc::*;

use crate::error::{GridError, GridResult};

/// Read-only view of one depth slice of a [Grid3D](crate::Grid3D), indexed like a 2D grid:
/// `slice[y][x]` or `slice.at(y, x)`.
#[derive(Debug, Copy, Clone)]
pub struct Slice<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    z: usize,
}

/// Mutable view of one depth slice of a [Grid3D](crate::Grid3D)
#[derive(Debug)]
pub struct SliceMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
    z: usize,
}

macro_rules! slice_common {
    ($ty:ident) => {
        impl<'a, T> $ty<'a, T> {
            pub fn width(&self) -> usize {
                self.width
            }

            pub fn height(&self) -> usize {
                self.height
            }

            /// Depth of this slice in its grid
            pub fn z(&self) -> usize {
                self.z
            }

            pub fn as_slice(&self) -> &[T] {
                &*self.data
            }

            pub fn at(&self, y: usize, x: usize) -> GridResult<&T> {
                if x < self.width && y < self.height {
                    Ok(&self.data[x + y * self.width])
                } else {
                    Err(self.out_of_range(x, y))
                }
            }

            pub fn row(&self, y: usize) -> GridResult<&[T]> {
                if y < self.height {
                    Ok(&self.data[y * self.width..(y + 1) * self.width])
                } else {
                    Err(self.out_of_range(0, y))
                }
            }

            pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
                let w = self.width;
                (0..self.height).map(move |y| &self.data[y * w..(y + 1) * w])
            }

            fn out_of_range(&self, x: usize, y: usize) -> GridError {
                GridError::out_of_range([x as i64, y as i64], [self.width, self.height])
            }
        }

        /// Row `y`. Panics if out of range.
        impl<'a, T> Index<usize> for $ty<'a, T> {
            type Output = [T];

            fn index(&self, y: usize) -> &Self::Output {
                match self.row(y) {
                    Ok(row) => row,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

slice_common!(Slice);
slice_common!(SliceMut);

impl<'a, T> Slice<'a, T> {
    pub(crate) fn new(data: &'a [T], width: usize, height: usize, z: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
            z,
        }
    }
}

impl<'a, T> SliceMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], width: usize, height: usize, z: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
            z,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn at_mut(&mut self, y: usize, x: usize) -> GridResult<&mut T> {
        if x < self.width && y < self.height {
            Ok(&mut self.data[x + y * self.width])
        } else {
            Err(self.out_of_range(x, y))
        }
    }

    pub fn row_mut(&mut self, y: usize) -> GridResult<&mut [T]> {
        if y < self.height {
            let w = self.width;
            Ok(&mut self.data[y * w..(y + 1) * w])
        } else {
            Err(self.out_of_range(0, y))
        }
    }

    /// Sets every cell in the slice
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}

impl<'a, T> IndexMut<usize> for SliceMut<'a, T> {
    fn index_mut(&mut self, y: usize) -> &mut Self::Output {
        match self.row_mut(y) {
            Ok(row) => row,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Same layout as a [Grid2D](crate::Grid2D): one row per line
impl<T: Display> Display for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_cells() {
        let data = [1, 2, 3, 4, 5, 6];
        let slice = Slice::new(&data, 3, 2, 4);

        assert_eq!(slice.z(), 4);
        assert_eq!(slice[1], [4, 5, 6]);
        assert_eq!(slice[0][2], 3);
        assert_eq!(*slice.at(1, 0).unwrap(), 4);
        assert_eq!(slice.rows().count(), 2);

        let err = slice.at(0, 3).unwrap_err();
        assert_eq!(err, GridError::out_of_range([3, 0], [3, 2]));
        assert!(slice.row(2).is_err());
    }

    #[test]
    #[should_panic]
    fn row_index_out_of_range_panics() {
        let data = [0u8; 4];
        let slice = Slice::new(&data, 2, 2, 0);
        let _ = &slice[2];
    }

    #[test]
    fn mutate() {
        let mut data = vec![0; 6];
        {
            let mut slice = SliceMut::new(&mut data, 2, 3, 0);
            slice[2][0] = 7;
            *slice.at_mut(0, 1).unwrap() = 8;
            assert!(slice.at_mut(3, 0).is_err());
            assert_eq!(slice.as_slice(), &[0, 8, 0, 0, 7, 0]);
        }
        assert_eq!(data, [0, 8, 0, 0, 7, 0]);

        SliceMut::new(&mut data, 3, 2, 1).fill(1);
        assert_eq!(data, [1; 6]);
    }
}
