use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for sub-region requests and top-level subdivision entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("empty region: rows {r0}..{r1}, cols {c0}..{c1}")]
    EmptyRegion { r0: usize, r1: usize, c0: usize, c1: usize },
    #[error("region rows {r0}..{r1}, cols {c0}..{c1} exceeds {rows}x{cols} extent")]
    OutOfBounds {
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
        rows: usize,
        cols: usize,
    },
}

/// A 2D scalar field storing values as f32, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major cell values.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Create a new Grid filled with the given value.
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Create a zero-filled Grid.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, 0.0)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    /// Mutable view spanning the whole grid.
    pub fn view_mut(&mut self) -> GridView<'_> {
        let stride = self.width;
        GridView {
            rows: self.height,
            cols: self.width,
            stride,
            row0: 0,
            col0: 0,
            data: &mut self.data,
        }
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}

/// A non-owning rectangular alias over a [`Grid`]'s storage.
///
/// Local indices run 0..rows, 0..cols and are translated onto the parent
/// buffer through the view's origin. A view never copies: writes through it
/// land in the backing grid and are visible to any other view over the same
/// cells. Overlapping views are obtained one at a time by reborrowing
/// (`sub_region` takes `&mut self`), which is exactly the sequential-descent
/// pattern the subdivision engine needs.
#[derive(Debug)]
pub struct GridView<'a> {
    data: &'a mut [f32],
    /// Parent row stride (the owning grid's width).
    stride: usize,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl GridView<'_> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the last row, the explicit stand-in for "from end" addressing.
    #[inline]
    pub fn last_row(&self) -> usize {
        self.rows - 1
    }

    #[inline]
    pub fn last_col(&self) -> usize {
        self.cols - 1
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[(self.row0 + row) * self.stride + self.col0 + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[(self.row0 + row) * self.stride + self.col0 + col] = val;
    }

    /// Reborrow the half-open local rectangle [r0, r1) x [c0, c1) as a
    /// narrower view over the same backing cells.
    pub fn sub_region(
        &mut self,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> Result<GridView<'_>, GridError> {
        if r1 <= r0 || c1 <= c0 {
            return Err(GridError::EmptyRegion { r0, r1, c0, c1 });
        }
        if r1 > self.rows || c1 > self.cols {
            return Err(GridError::OutOfBounds {
                r0,
                r1,
                c0,
                c1,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(GridView {
            data: &mut *self.data,
            stride: self.stride,
            row0: self.row0 + r0,
            col0: self.col0 + c0,
            rows: r1 - r0,
            cols: c1 - c0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_is_zero_filled() {
        let g = Grid::zeros(3, 2);
        assert_eq!(g.data, vec![0.0; 6]);
        assert_eq!(g.width, 3);
        assert_eq!(g.height, 2);
    }

    #[test]
    fn view_spans_whole_grid() {
        let mut g = Grid::zeros(5, 4);
        let v = g.view_mut();
        assert_eq!(v.rows(), 4);
        assert_eq!(v.cols(), 5);
        assert_eq!(v.last_row(), 3);
        assert_eq!(v.last_col(), 4);
    }

    #[test]
    fn sub_region_translates_local_indices() {
        let mut g = Grid::zeros(5, 4);
        let mut v = g.view_mut();
        let mut sub = v.sub_region(1, 3, 2, 5).unwrap();
        assert_eq!(sub.rows(), 2);
        assert_eq!(sub.cols(), 3);
        sub.set(0, 0, 7.0);
        sub.set(1, 2, 9.0);
        assert_eq!(g.get(1, 2), 7.0);
        assert_eq!(g.get(2, 4), 9.0);
    }

    #[test]
    fn overlapping_sub_regions_alias_the_same_cells() {
        let mut g = Grid::zeros(4, 4);
        let mut v = g.view_mut();
        {
            let mut left = v.sub_region(0, 3, 0, 3).unwrap();
            left.set(2, 2, 5.0);
        }
        let right = v.sub_region(2, 4, 2, 4).unwrap();
        // (2, 2) of the parent is (0, 0) of the second view.
        assert_eq!(right.get(0, 0), 5.0);
    }

    #[test]
    fn nested_sub_regions_compose_offsets() {
        let mut g = Grid::zeros(6, 6);
        let mut v = g.view_mut();
        let mut a = v.sub_region(1, 5, 1, 5).unwrap();
        let mut b = a.sub_region(2, 4, 2, 4).unwrap();
        b.set(0, 1, 3.0);
        assert_eq!(g.get(3, 4), 3.0);
    }

    #[test]
    fn sub_region_rejects_empty_rectangles() {
        let mut g = Grid::zeros(4, 4);
        let mut v = g.view_mut();
        let err = v.sub_region(2, 2, 0, 4).unwrap_err();
        assert_eq!(err, GridError::EmptyRegion { r0: 2, r1: 2, c0: 0, c1: 4 });
        assert!(matches!(
            v.sub_region(0, 4, 3, 1),
            Err(GridError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn sub_region_rejects_out_of_bounds() {
        let mut g = Grid::zeros(4, 3);
        let mut v = g.view_mut();
        assert!(matches!(
            v.sub_region(0, 4, 0, 4),
            Err(GridError::OutOfBounds { .. })
        ));
        // Bounds are relative to the view, not the grid.
        let mut sub = v.sub_region(1, 3, 1, 4).unwrap();
        assert!(matches!(
            sub.sub_region(0, 3, 0, 1),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn min_max_fold_over_all_cells() {
        let mut g = Grid::zeros(3, 3);
        g.set(0, 2, -2.5);
        g.set(2, 1, 4.0);
        assert_eq!(g.min_value(), -2.5);
        assert_eq!(g.max_value(), 4.0);
    }
}
