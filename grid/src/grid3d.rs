use std::iter::repeat_with;
use std::ops::{Index, IndexMut};

use misc::*;

use crate::coord::{coords3, GridCoord3, GridSize3};
use crate::error::{Axis, GridError, GridResult};
use crate::layout;
use crate::slice::{Slice, SliceMut};

/// Dense 3D array, accessed with `at(z, y, x)`.
///
/// The buffer is a sequence of depth slices, each of which is a sequence of rows, so the element at
/// `(x, y, z)` lives at `x + y * width + z * width * height`. Depth edits touch one contiguous
/// block; row and column edits have to visit every slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid3D<T> {
    /// `[x + width * (y + height * z)]`
    data: Vec<T>,
    width: usize,
    height: usize,
    depth: usize,
}

impl<T> Default for Grid3D<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
            depth: 0,
        }
    }
}

impl<T: Default> Grid3D<T> {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        let data = repeat_with(T::default)
            .take(width * height * depth)
            .collect();
        Self {
            data,
            width,
            height,
            depth,
        }
    }

    pub fn resize_default(&mut self, width: usize, height: usize, depth: usize)
    where
        T: Clone,
    {
        self.resize(width, height, depth, T::default())
    }
}

impl<T: Clone> Grid3D<T> {
    pub fn filled(width: usize, height: usize, depth: usize, init: T) -> Self {
        Self {
            data: vec![init; width * height * depth],
            width,
            height,
            depth,
        }
    }

    pub fn with_size(size: impl GridSize3, init: T) -> GridResult<Self> {
        let [width, height, depth] = size.extents()?;
        Ok(Self::filled(width, height, depth, init))
    }

    /// Inserts `init` into every row of every slice so that it becomes column `pos`
    pub fn insert_column(&mut self, pos: usize, init: T) -> GridResult<()> {
        GridError::check_position(Axis::Column, pos, self.width + 1)?;
        self.insert_columns(pos, 1, &init);
        Ok(())
    }

    /// Inserts a row of `init` into every slice so that it becomes row `pos` in each
    pub fn insert_row(&mut self, pos: usize, init: T) -> GridResult<()> {
        GridError::check_position(Axis::Row, pos, self.height + 1)?;
        self.insert_rows(pos, 1, &init);
        Ok(())
    }

    /// Inserts a whole slice of `init` so that it becomes slice `pos`
    pub fn insert_depth(&mut self, pos: usize, init: T) -> GridResult<()> {
        GridError::check_position(Axis::Depth, pos, self.depth + 1)?;
        self.insert_depths(pos, 1, &init);
        Ok(())
    }

    pub fn push_back_column(&mut self, init: T) {
        self.insert_columns(self.width, 1, &init);
    }

    pub fn push_back_row(&mut self, init: T) {
        self.insert_rows(self.height, 1, &init);
    }

    pub fn push_back_depth(&mut self, init: T) {
        self.insert_depths(self.depth, 1, &init);
    }

    pub fn push_back_columns(&mut self, n: usize, init: T) {
        self.insert_columns(self.width, n, &init);
    }

    pub fn push_back_rows(&mut self, n: usize, init: T) {
        self.insert_rows(self.height, n, &init);
    }

    pub fn push_back_depths(&mut self, n: usize, init: T) {
        self.insert_depths(self.depth, n, &init);
    }

    /// Adjusts width, then height, then depth, each by adding or dropping at the back
    pub fn resize(&mut self, width: usize, height: usize, depth: usize, init: T) {
        debug!("resizing grid"; "from" => ?self.size(), "to" => ?(width, height, depth));

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

        if depth < self.depth {
            self.remove_depths(depth, self.depth - depth);
        } else if depth > self.depth {
            self.insert_depths(self.depth, depth - self.depth, &init);
        }
    }

    pub fn resize_to(&mut self, size: impl GridSize3, init: T) -> GridResult<()> {
        let [width, height, depth] = size.extents()?;
        self.resize(width, height, depth, init);
        Ok(())
    }

    fn insert_columns(&mut self, pos: usize, count: usize, init: &T) {
        let rows = self.height * self.depth;
        layout::insert_columns(&mut self.data, self.width, rows, pos, count, init);
        self.width += count;
        trace!("inserted columns"; "pos" => pos, "count" => count, "width" => self.width);
    }

    fn insert_rows(&mut self, pos: usize, count: usize, init: &T) {
        let w = self.width;
        // slices before z have already grown, so their offsets use the new height
        let grown_slice = w * (self.height + count);
        for z in 0..self.depth {
            layout::insert_block(&mut self.data, z * grown_slice + pos * w, count * w, init);
        }
        self.height += count;
        trace!("inserted rows"; "pos" => pos, "count" => count, "height" => self.height);
    }

    fn insert_depths(&mut self, pos: usize, count: usize, init: &T) {
        let slice = self.slice_len();
        layout::insert_block(&mut self.data, pos * slice, count * slice, init);
        self.depth += count;
        trace!("inserted depth slices"; "pos" => pos, "count" => count, "depth" => self.depth);
    }
}

impl<T> Grid3D<T> {
    /// `data` must hold exactly `width * height * depth` elements, slice by slice
    pub fn from_vec(width: usize, height: usize, depth: usize, data: Vec<T>) -> GridResult<Self> {
        GridError::check_length(width * height * depth, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            depth,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `(width, height, depth)`
    pub fn size(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    pub fn dimensions(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements in one depth slice
    #[inline]
    pub fn slice_len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn flatten_coords(&self, [x, y, z]: [usize; 3]) -> usize {
        x + self.width * (y + self.height * z)
    }

    pub fn unflatten_index(&self, index: usize) -> [usize; 3] {
        let [w, h, _] = self.dimensions();
        [index % w, (index / w) % h, index / (w * h)]
    }

    fn checked_index(&self, [x, y, z]: [i64; 3]) -> GridResult<usize> {
        match (usize::try_from(x), usize::try_from(y), usize::try_from(z)) {
            (Ok(x), Ok(y), Ok(z)) if self.contains(z, y, x) => Ok(self.flatten_coords([x, y, z])),
            _ => Err(GridError::out_of_range([x, y, z], self.dimensions())),
        }
    }

    pub fn at(&self, z: usize, y: usize, x: usize) -> GridResult<&T> {
        self.at_pos([x, y, z])
    }

    pub fn at_mut(&mut self, z: usize, y: usize, x: usize) -> GridResult<&mut T> {
        self.at_pos_mut([x, y, z])
    }

    /// Note the position is `(x, y, z)`, unlike [at](Self::at)
    pub fn at_pos(&self, pos: impl GridCoord3) -> GridResult<&T> {
        let idx = self.checked_index(pos.xyz())?;
        Ok(&self.data[idx])
    }

    pub fn at_pos_mut(&mut self, pos: impl GridCoord3) -> GridResult<&mut T> {
        let idx = self.checked_index(pos.xyz())?;
        Ok(&mut self.data[idx])
    }

    /// Depth slice `z`, indexable as `slice[y][x]`
    pub fn slice(&self, z: usize) -> GridResult<Slice<T>> {
        let range = self.slice_range(z)?;
        Ok(Slice::new(&self.data[range], self.width, self.height, z))
    }

    pub fn slice_mut(&mut self, z: usize) -> GridResult<SliceMut<T>> {
        let range = self.slice_range(z)?;
        let (w, h) = (self.width, self.height);
        Ok(SliceMut::new(&mut self.data[range], w, h, z))
    }

    pub fn slices(&self) -> impl ExactSizeIterator<Item = Slice<T>> + '_ {
        let len = self.slice_len();
        (0..self.depth).map(move |z| {
            Slice::new(
                &self.data[z * len..(z + 1) * len],
                self.width,
                self.height,
                z,
            )
        })
    }

    fn slice_range(&self, z: usize) -> GridResult<std::ops::Range<usize>> {
        if z < self.depth {
            let len = self.slice_len();
            Ok(z * len..(z + 1) * len)
        } else {
            Err(GridError::out_of_range([0, 0, z as i64], self.dimensions()))
        }
    }

    pub fn contains(&self, z: usize, y: usize, x: usize) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    pub fn contains_pos(&self, pos: impl GridCoord3) -> bool {
        self.checked_index(pos.xyz()).is_ok()
    }

    /// Removes column `pos` from every row of every slice
    pub fn remove_column(&mut self, pos: usize) -> GridResult<()> {
        GridError::check_position(Axis::Column, pos, self.width)?;
        self.remove_columns(pos, 1);
        Ok(())
    }

    /// Removes row `pos` from every slice, keeping the order of the remaining rows
    pub fn remove_row(&mut self, pos: usize) -> GridResult<()> {
        GridError::check_position(Axis::Row, pos, self.height)?;
        self.remove_rows(pos, 1);
        Ok(())
    }

    pub fn remove_depth(&mut self, pos: usize) -> GridResult<()> {
        GridError::check_position(Axis::Depth, pos, self.depth)?;
        self.remove_depths(pos, 1);
        Ok(())
    }

    pub fn pop_back_column(&mut self) -> GridResult<()> {
        self.pop_back_columns(1)
    }

    pub fn pop_back_row(&mut self) -> GridResult<()> {
        self.pop_back_rows(1)
    }

    pub fn pop_back_depth(&mut self) -> GridResult<()> {
        self.pop_back_depths(1)
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

    pub fn pop_back_depths(&mut self, n: usize) -> GridResult<()> {
        if n == 0 {
            return Ok(());
        }

        GridError::check_position(Axis::Depth, n - 1, self.depth)?;
        self.remove_depths(self.depth - n, n);
        Ok(())
    }

    fn remove_columns(&mut self, pos: usize, count: usize) {
        layout::remove_columns(&mut self.data, self.width, pos..pos + count);
        self.width -= count;
        trace!("removed columns"; "pos" => pos, "count" => count, "width" => self.width);
    }

    fn remove_rows(&mut self, pos: usize, count: usize) {
        layout::remove_rows_in_slices(&mut self.data, self.width, self.height, pos..pos + count);
        self.height -= count;
        trace!("removed rows"; "pos" => pos, "count" => count, "height" => self.height);
    }

    fn remove_depths(&mut self, pos: usize, count: usize) {
        let slice = self.slice_len();
        self.data.drain(pos * slice..(pos + count) * slice);
        self.depth -= count;
        trace!("removed depth slices"; "pos" => pos, "count" => count, "depth" => self.depth);
    }

    /// Makes room for a `width * height * depth` grid without changing the current dimensions
    pub fn reserve(&mut self, width: usize, height: usize, depth: usize) {
        let additional = (width * height * depth).saturating_sub(self.data.len());
        self.data.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.width = 0;
        self.height = 0;
        self.depth = 0;
    }

    pub fn front(&self) -> GridResult<&T> {
        self.at_pos([0, 0, 0])
    }

    pub fn front_mut(&mut self) -> GridResult<&mut T> {
        self.at_pos_mut([0, 0, 0])
    }

    pub fn back(&self) -> GridResult<&T> {
        let idx = self.checked_index(self.last_coord())?;
        Ok(&self.data[idx])
    }

    pub fn back_mut(&mut self) -> GridResult<&mut T> {
        let idx = self.checked_index(self.last_coord())?;
        Ok(&mut self.data[idx])
    }

    fn last_coord(&self) -> [i64; 3] {
        [
            self.width as i64 - 1,
            self.height as i64 - 1,
            self.depth as i64 - 1,
        ]
    }

    /// Calls `f(z, y, x)` for every cell, slice by slice then row by row
    pub fn foreach(&self, mut f: impl FnMut(usize, usize, usize)) {
        self.coords().for_each(|[x, y, z]| f(z, y, x))
    }

    pub fn foreach_mut(&mut self, mut f: impl FnMut(usize, usize, usize, &mut T)) {
        let [w, h, _] = self.dimensions();
        self.data.iter_mut().enumerate().for_each(|(i, cell)| {
            let (z, rem) = (i / (w * h), i % (w * h));
            f(z, rem / w, rem % w, cell)
        })
    }

    /// Every `[x, y, z]` in storage order. Doesn't borrow the grid.
    pub fn coords(&self) -> impl ExactSizeIterator<Item = [usize; 3]> + Clone {
        coords3(self.width, self.height, self.depth)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut T> + '_ {
        self.data.iter_mut()
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = ([usize; 3], &T)> + '_ {
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

impl<T: Display> Grid3D<T> {
    /// Writes the grid to stdout, see the [Display] impl for the layout
    pub fn print(&self) {
        print!("{}", self);
    }

    pub fn print_size(&self) {
        println!(
            "(width:{} height:{} depth:{})",
            self.width, self.height, self.depth
        );
    }
}

/// One line per row index. Each line holds that row from every depth slice in turn, bracketed and
/// separated by a space, e.g. `[1 2] [5 6]`.
impl<T: Display> Display for Grid3D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let w = self.width;
        for y in 0..self.height {
            let rows = self.slices().map(|slice| {
                let row = &slice.as_slice()[y * w..(y + 1) * w];
                format!("[{}]", row.iter().format(" "))
            });
            writeln!(f, "{}", rows.format(" "))?;
        }
        Ok(())
    }
}

/// `[x, y, z]`. Panics if out of range.
impl<T> Index<[usize; 3]> for Grid3D<T> {
    type Output = T;

    fn index(&self, pos: [usize; 3]) -> &Self::Output {
        match self.at_pos(pos) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<[usize; 3]> for Grid3D<T> {
    fn index_mut(&mut self, pos: [usize; 3]) -> &mut Self::Output {
        match self.at_pos_mut(pos) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> AsRef<[T]> for Grid3D<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}
