use crate::cells::Cartesian2DCoordinate;
use crate::units::{Height, Width};

/// Row-major walk over every coordinate of a grid, starting at `(0, 0)`.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    row_length: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(width: Width, height: Height) -> CellIter {
        CellIter {
            row_length: width.0,
            current_cell_number: 0,
            cells_count: width.0 * height.0,
        }
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let x = self.current_cell_number % self.row_length;
            let y = self.current_cell_number / self.row_length;
            self.current_cell_number += 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Walk over the rows of a grid, southmost (`y == 0`) first. Reverse it for a north-up view.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    row_length: usize,
    front: usize,
    back: usize,
}

impl RowIter {
    pub(crate) fn new(width: Width, height: Height) -> RowIter {
        RowIter {
            row_length: width.0,
            front: 0,
            back: height.0,
        }
    }

    fn row(&self, y: usize) -> Vec<Cartesian2DCoordinate> {
        (0..self.row_length)
            .map(|x| Cartesian2DCoordinate::new(x as u32, y as u32))
            .collect()
    }
}

impl ExactSizeIterator for RowIter {} // default impl using size_hint()
impl Iterator for RowIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let row = self.row(self.front);
            self.front += 1;
            Some(row)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for RowIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.row(self.back))
        } else {
            None
        }
    }
}
