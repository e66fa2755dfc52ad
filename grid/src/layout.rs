//! Structural edits on a flat buffer holding consecutive rows of equal `width`. A 3D grid is just
//! `height * depth` such rows, so column edits are shared between both grids.

use std::iter::repeat;
use std::ops::Range;

/// Inserts `count` copies of `init` into every one of `rows` rows, so that the first new element
/// in each row lands at column `pos`. Elements are moved into a buffer sized for the new stride in
/// a single pass.
pub(crate) fn insert_columns<T: Clone>(
    data: &mut Vec<T>,
    width: usize,
    rows: usize,
    pos: usize,
    count: usize,
    init: &T,
) {
    debug_assert!(pos <= width);
    debug_assert_eq!(data.len(), width * rows);

    let mut old = std::mem::take(data).into_iter();
    let mut new = Vec::with_capacity((width + count) * rows);
    for _ in 0..rows {
        new.extend(old.by_ref().take(pos));
        new.extend(repeat(init).take(count).cloned());
        new.extend(old.by_ref().take(width - pos));
    }

    debug_assert!(old.next().is_none());
    *data = new;
}

/// Drops every element whose column lies in `columns`, across every row
pub(crate) fn remove_columns<T>(data: &mut Vec<T>, width: usize, columns: Range<usize>) {
    if columns.is_empty() {
        return;
    }

    let mut index = 0;
    data.retain(|_| {
        let keep = !columns.contains(&(index % width));
        index += 1;
        keep
    });
}

/// Drops every element whose row within its `height`-row slice lies in `rows`
pub(crate) fn remove_rows_in_slices<T>(
    data: &mut Vec<T>,
    width: usize,
    height: usize,
    rows: Range<usize>,
) {
    if rows.is_empty() {
        return;
    }

    let mut index = 0;
    data.retain(|_| {
        let keep = !rows.contains(&((index / width) % height));
        index += 1;
        keep
    });
}

/// Inserts `len` copies of `init` as one contiguous block starting at `at`
pub(crate) fn insert_block<T: Clone>(data: &mut Vec<T>, at: usize, len: usize, init: &T) {
    debug_assert!(at <= data.len());
    data.splice(at..at, repeat(init).take(len).cloned());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_columns_into_rows() {
        // 3 rows of width 2
        let mut data = vec![0, 1, 10, 11, 20, 21];
        insert_columns(&mut data, 2, 3, 1, 1, &9);
        assert_eq!(data, vec![0, 9, 1, 10, 9, 11, 20, 9, 21]);

        insert_columns(&mut data, 3, 3, 0, 2, &7);
        assert_eq!(
            data,
            vec![7, 7, 0, 9, 1, 7, 7, 10, 9, 11, 7, 7, 20, 9, 21]
        );
    }

    #[test]
    fn insert_columns_into_zero_width() {
        let mut data: Vec<u8> = vec![];
        insert_columns(&mut data, 0, 4, 0, 1, &3);
        assert_eq!(data, vec![3; 4]);
    }

    #[test]
    fn remove_columns_from_rows() {
        let mut data = vec![0, 1, 2, 10, 11, 12];
        remove_columns(&mut data, 3, 1..2);
        assert_eq!(data, vec![0, 2, 10, 12]);

        remove_columns(&mut data, 2, 0..2);
        assert!(data.is_empty());
    }

    #[test]
    fn remove_rows_from_each_slice() {
        // width 1, height 3, depth 2
        let mut data = vec![0, 1, 2, 10, 11, 12];
        remove_rows_in_slices(&mut data, 1, 3, 0..1);
        assert_eq!(data, vec![1, 2, 11, 12]);
    }

    #[test]
    fn block_insert() {
        let mut data = vec![1, 2, 3];
        insert_block(&mut data, 1, 2, &0);
        assert_eq!(data, vec![1, 0, 0, 2, 3]);
        insert_block(&mut data, 5, 1, &4);
        assert_eq!(data, vec![1, 0, 0, 2, 3, 4]);
    }
}
