use std::iter::repeat_with;
use std::ops::{Index, IndexMut};

use misc::*;

use crate::coord::{coords2, GridCoord2, GridSize2};
use crate::error::{Axis, GridError, GridResult};
use crate::layout;
#[cfg(feature = "point")]
use crate::point::Point2i;

/// Dense 2D array, accessed with `at(y, x)`. Rows are stored contiguously one after the other in a
/// single buffer, so the element at `(x, y)` lives at `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid2D<T> {
    /// `[x + y * width]`
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Default for Grid2D<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl<T: Default> Grid2D<T> {
    pub fn new(width: usize, height: usize) -> Self {
        let data = repeat_with(T::default).take(width * height).collect();
        Self {
            data,
            width,
            height,
        }
    }

    /// Inserted elements are `T::default()`
    pub fn resize_default(&mut self, width: usize, height: usize)
    where
        T: Clone,
    {
        self.resize(width, height, T::default())
    }
}

impl<T: Clone> Grid2D<T> {
    pub fn filled(width: usize, height: usize, init: T) -> Self {
        Self {
            data: vec![init; width * height],
            width,
            height,
        }
    }

    /// Fails if either extent is negative
    pub fn with_size(size: impl GridSize2, init: T) -> GridResult<Self> {
        let [width, height] = size.extents()?;
        Ok(Self::filled(width, height, init))
    }

    /// Inserts a column of `init` so that it becomes column `pos`, shifting the columns at and
    /// after `pos` to the right. `pos == width` appends.
    pub fn insert_column(&mut self, pos: usize, init: T) -> GridResult<()> {
        GridError::check_position(Axis::Column, pos, self.width + 1)?;
        self.insert_columns(pos, 1, &init);
        Ok(())
    }

    /// Inserts a row of `init` so that it becomes row `pos`. `pos == height` appends.
    pub fn insert_row(&mut self, pos: usize, init: T) -> GridResult<()> {
        GridError::check_position(Axis::Row, pos, self.height + 1)?;
        self.insert_rows(pos, 1, &init);
        Ok(())
    }

    pub fn push_back_column(&mut self, init: T) {
        self.insert_columns(self.width, 1, &init);
    }

    pub fn push_back_row(&mut self, init: T) {
        self.insert_rows(self.height, 1, &init);
    }

    pub fn push_back_columns(&mut self, n: usize, init: T) {
        self.insert_columns(self.width, n, &init);
    }

    pub fn push_back_rows(&mut self, n: usize, init: T) {
        self.insert_rows(self.height, n, &init);
    }

    /// Adjusts the width first, then the height, by adding or dropping columns/rows at the back.
    /// New cells are `init`.
    pub fn resize(&mut self, width: usize, height: usize, init: T) {
        debug!("resizing grid"; "from" => ?self.size(), "to" => ?(width, height));

        if width < self.width {
            self.remove_columns(width, self.width - width);
        } else if width > self.width {
            self.insert_columns(self.width, width - self.width, &init);
        }

        if height < self.height {
            self.remove_rows(height, self.height - height);
        } else if height > self.height {
            self.insert_rows(self.height, height - self.height, &init);
        }
    }

    /// [resize](Self::resize) to a size that may be negative, e.g. a [Point2i]
    pub fn resize_to(&mut self, size: impl GridSize2, init: T) -> GridResult<()> {
        let [width, height] = size.extents()?;
        self.resize(width, height, init);
        Ok(())
    }

    fn insert_columns(&mut self, pos: usize, count: usize, init: &T) {
        layout::insert_columns(&mut self.data, self.width, self.height, pos, count, init);
        self.width += count;
        trace!("inserted columns"; "pos" => pos, "count" => count, "width" => self.width);
    }

    fn insert_rows(&mut self, pos: usize, count: usize, init: &T) {
        layout::insert_block(&mut self.data, pos * self.width, count * self.width, init);
        self.height += count;
        trace!("inserted rows"; "pos" => pos, "count" => count, "height" => self.height);
    }
}

impl<T> Grid2D<T> {
    /// `data` is in row-major order and must hold exactly `width * height` elements
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> GridResult<Self> {
        GridError::check_length(width * height, data.len())?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Unchecked, only meaningful for in-range coordinates
    #[inline]
    pub fn flatten_coords(&self, [x, y]: [usize; 2]) -> usize {
        x + y * self.width
    }

    pub fn unflatten_index(&self, index: usize) -> [usize; 2] {
        [index % self.width, index / self.width]
    }

    fn checked_index(&self, [x, y]: [i64; 2]) -> GridResult<usize> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => Ok(self.flatten_coords([x, y])),
            _ => Err(GridError::out_of_range([x, y], [self.width, self.height])),
        }
    }

    pub fn at(&self, y: usize, x: usize) -> GridResult<&T> {
        self.at_pos([x, y])
    }

    pub fn at_mut(&mut self, y: usize, x: usize) -> GridResult<&mut T> {
        self.at_pos_mut([x, y])
    }

    /// Note the position is `(x, y)`, unlike [at](Self::at)
    pub fn at_pos(&self, pos: impl GridCoord2) -> GridResult<&T> {
        let idx = self.checked_index(pos.xy())?;
        Ok(&self.data[idx])
    }

    pub fn at_pos_mut(&mut self, pos: impl GridCoord2) -> GridResult<&mut T> {
        let idx = self.checked_index(pos.xy())?;
        Ok(&mut self.data[idx])
    }

    pub fn row(&self, y: usize) -> GridResult<&[T]> {
        if y < self.height {
            Ok(&self.data[y * self.width..(y + 1) * self.width])
        } else {
            Err(GridError::out_of_range([0, y as i64], [self.width, self.height]))
        }
    }

    pub fn row_mut(&mut self, y: usize) -> GridResult<&mut [T]> {
        if y < self.height {
            let w = self.width;
            Ok(&mut self.data[y * w..(y + 1) * w])
        } else {
            Err(GridError::out_of_range([0, y as i64], [self.width, self.height]))
        }
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let w = self.width;
        (0..self.height).map(move |y| &self.data[y * w..(y + 1) * w])
    }

    pub fn contains(&self, y: usize, x: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn contains_pos(&self, pos: impl GridCoord2) -> bool {
        self.checked_index(pos.xy()).is_ok()
    }

    /// Removes column `pos`, shifting the later columns left
    pub fn remove_column(&mut self, pos: usize) -> GridResult<()> {
        GridError::check_position(Axis::Column, pos, self.width)?;
        self.remove_columns(pos, 1);
        Ok(())
    }

    pub fn remove_row(&mut self, pos: usize) -> GridResult<()> {
        GridError::check_position(Axis::Row, pos, self.height)?;
        self.remove_rows(pos, 1);
        Ok(())
    }

    /// Fails on a grid with no columns
    pub fn pop_back_column(&mut self) -> GridResult<()> {
        self.pop_back_columns(1)
    }

    /// Fails on a grid with no rows
    pub fn pop_back_row(&mut self) -> GridResult<()> {
        self.pop_back_rows(1)
    }

    /// Fails without removing anything if there are fewer than `n` columns
    pub fn pop_back_columns(&mut self, n: usize) -> GridResult<()> {
        if n == 0 {
            return Ok(());
        }

        GridError::check_position(Axis::Column, n - 1, self.width)?;
        self.remove_columns(self.width - n, n);
        Ok(())
    }

    pub fn pop_back_rows(&mut self, n: usize) -> GridResult<()> {
        if n == 0 {
            return Ok(());
        }

        GridError::check_position(Axis::Row, n - 1, self.height)?;
        self.remove_rows(self.height - n, n);
        Ok(())
    }

    fn remove_columns(&mut self, pos: usize, count: usize) {
        layout::remove_columns(&mut self.data, self.width, pos..pos + count);
        self.width -= count;
        trace!("removed columns"; "pos" => pos, "count" => count, "width" => self.width);
    }

    fn remove_rows(&mut self, pos: usize, count: usize) {
        let w = self.width;
        self.data.drain(pos * w..(pos + count) * w);
        self.height -= count;
        trace!("removed rows"; "pos" => pos, "count" => count, "height" => self.height);
    }

    /// Makes room for a `width * height` grid without changing the current dimensions
    pub fn reserve(&mut self, width: usize, height: usize) {
        let additional = (width * height).saturating_sub(self.data.len());
        self.data.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.width = 0;
        self.height = 0;
    }

    pub fn front(&self) -> GridResult<&T> {
        self.at_pos([0, 0])
    }

    pub fn front_mut(&mut self) -> GridResult<&mut T> {
        self.at_pos_mut([0, 0])
    }

    pub fn back(&self) -> GridResult<&T> {
        let idx = self.checked_index(self.last_coord())?;
        Ok(&self.data[idx])
    }

    pub fn back_mut(&mut self) -> GridResult<&mut T> {
        let idx = self.checked_index(self.last_coord())?;
        Ok(&mut self.data[idx])
    }

    /// Negative on an empty grid, so the lookup fails
    fn last_coord(&self) -> [i64; 2] {
        [self.width as i64 - 1, self.height as i64 - 1]
    }

    /// Calls `f(y, x)` for every cell, row by row
    pub fn foreach(&self, mut f: impl FnMut(usize, usize)) {
        self.coords().for_each(|[x, y]| f(y, x))
    }

    /// Calls `f(y, x, cell)` for every cell, row by row
    pub fn foreach_mut(&mut self, mut f: impl FnMut(usize, usize, &mut T)) {
        let w = self.width;
        self.data
            .iter_mut()
            .enumerate()
            .for_each(|(i, cell)| f(i / w, i % w, cell))
    }

    /// Every `[x, y]` in storage order. Doesn't borrow the grid.
    pub fn coords(&self) -> impl ExactSizeIterator<Item = [usize; 2]> + Clone {
        coords2(self.width, self.height)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut T> + '_ {
        self.data.iter_mut()
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = ([usize; 2], &T)> + '_ {
        self.coords().zip(self.data.iter())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Display> Grid2D<T> {
    /// Writes the grid to stdout, one row per line
    pub fn print(&self) {
        print!("{}", self);
    }

    pub fn print_size(&self) {
        println!("(width:{} height:{})", self.width, self.height);
    }
}

/// One row per line, cells separated by a space
impl<T: Display> Display for Grid2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}

/// Row `y`, so `grid[y][x]` works. Panics if `y` is out of range.
impl<T> Index<usize> for Grid2D<T> {
    type Output = [T];

    fn index(&self, y: usize) -> &Self::Output {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        &self.data[y * self.width..(y + 1) * self.width]
    }
}

impl<T> IndexMut<usize> for Grid2D<T> {
    fn index_mut(&mut self, y: usize) -> &mut Self::Output {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let w = self.width;
        &mut self.data[y * w..(y + 1) * w]
    }
}

/// `[x, y]`. Panics if out of range.
impl<T> Index<[usize; 2]> for Grid2D<T> {
    type Output = T;

    fn index(&self, pos: [usize; 2]) -> &Self::Output {
        match self.at_pos(pos) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<[usize; 2]> for Grid2D<T> {
    fn index_mut(&mut self, pos: [usize; 2]) -> &mut Self::Output {
        match self.at_pos_mut(pos) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(feature = "point")]
impl<T> Index<Point2i> for Grid2D<T> {
    type Output = T;

    fn index(&self, pos: Point2i) -> &Self::Output {
        match self.at_pos(pos) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(feature = "point")]
impl<T> IndexMut<Point2i> for Grid2D<T> {
    fn index_mut(&mut self, pos: Point2i) -> &mut Self::Output {
        match self.at_pos_mut(pos) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> AsRef<[T]> for Grid2D<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}
