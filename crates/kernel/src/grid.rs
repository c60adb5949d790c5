use hexworld_common::CellCoord;
use serde::{Deserialize, Serialize};

/// Row-major rectangular grid of tiles.
///
/// A grid with zero rows or zero columns is empty; every accessor handles it
/// without touching storage. `cells.len() == rows * cols` always holds,
/// including for grids read back through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TileGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of a `TileGrid`.
#[derive(Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for TileGrid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        Self::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

/// Errors from building a grid out of existing cell data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid {rows}x{cols} needs {expected} cells, got {actual}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid {rows}x{cols} is too large to address")]
    TooLarge { rows: usize, cols: usize },
}

impl<T: Clone> TileGrid<T> {
    /// Create a grid with every cell set to `fill`.
    ///
    /// A size whose cell count overflows `usize` yields an empty 0x0 grid.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        match rows.checked_mul(cols) {
            Some(len) => Self {
                rows,
                cols,
                cells: vec![fill; len],
            },
            None => Self::overflowed(rows, cols),
        }
    }
}

impl<T> TileGrid<T> {
    /// Wrap existing row-major cells, checking they fill the grid exactly.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                rows,
                cols,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid by evaluating `f` for every cell in row-major order.
    ///
    /// A size whose cell count overflows `usize` yields an empty 0x0 grid
    /// without calling `f`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(CellCoord) -> T) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            return Self::overflowed(rows, cols);
        };
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(CellCoord::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: CellCoord) -> Option<&T> {
        self.offset(coord).map(|i| &self.cells[i])
    }

    /// Overwrite a cell. Returns false if the coordinate is outside the grid.
    pub fn set(&mut self, coord: CellCoord, value: T) -> bool {
        match self.offset(coord) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// One row as a slice, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (CellCoord::new(i / cols, i % cols), v))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TileGrid<U> {
        TileGrid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }

    fn overflowed(rows: usize, cols: usize) -> Self {
        tracing::warn!(rows, cols, "grid size overflows; using an empty grid");
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    fn offset(&self, coord: CellCoord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }
}

/// In-grid hex neighbours of `coord` on an offset layout where odd rows are
/// shifted right.
///
/// Every cell checks its four orthogonal neighbours. Odd rows add the two
/// diagonals on the right (`col + 1`), even rows the two on the left
/// (`col - 1`). Off-grid candidates are dropped, never wrapped.
pub fn hex_neighbors(coord: CellCoord, rows: usize, cols: usize) -> Vec<CellCoord> {
    let i = coord.row as isize;
    let j = coord.col as isize;
    let diag = if coord.is_odd_row() { 1 } else { -1 };
    let candidates = [
        (i + 1, j),
        (i - 1, j),
        (i, j + 1),
        (i, j - 1),
        (i - 1, j + diag),
        (i + 1, j + diag),
    ];

    candidates
        .into_iter()
        .filter(|&(r, c)| r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols)
        .map(|(r, c)| CellCoord::new(r as usize, c as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_has_requested_shape() {
        let grid = TileGrid::new(3, 4, 0u8);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn zero_sized_grids_are_empty() {
        for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
            let grid = TileGrid::new(rows, cols, 1u8);
            assert!(grid.is_empty());
            assert_eq!(grid.iter().count(), 0);
            assert!(grid.get(CellCoord::new(0, 0)).is_none());
        }
    }

    #[test]
    fn row_zero_of_zero_width_grid_is_empty_slice() {
        let grid = TileGrid::new(2, 0, 1u8);
        assert_eq!(grid.row(0), Some(&[][..]));
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn from_fn_visits_row_major() {
        let grid = TileGrid::from_fn(2, 3, |c| c.row * 10 + c.col);
        assert_eq!(grid.row(0), Some(&[0, 1, 2][..]));
        assert_eq!(grid.row(1), Some(&[10, 11, 12][..]));
        let order: Vec<CellCoord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(order[3], CellCoord::new(1, 0));
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut grid = TileGrid::new(2, 2, 0u8);
        assert!(grid.set(CellCoord::new(1, 1), 7));
        assert_eq!(grid.get(CellCoord::new(1, 1)), Some(&7));
        assert!(!grid.set(CellCoord::new(2, 0), 7));
    }

    #[test]
    fn map_preserves_shape() {
        let grid = TileGrid::from_fn(2, 2, |c| c.col);
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.rows(), 2);
        assert_eq!(doubled.get(CellCoord::new(0, 1)), Some(&2));
    }

    #[test]
    fn overflowing_size_gives_empty_grid() {
        let grid = TileGrid::new(usize::MAX, 2, 0u8);
        assert!(grid.is_empty());
        assert_eq!((grid.rows(), grid.cols()), (0, 0));

        let mut calls = 0;
        let grid = TileGrid::from_fn(2, usize::MAX, |_| {
            calls += 1;
            0u8
        });
        assert!(grid.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn from_cells_checks_cell_count() {
        assert!(TileGrid::from_cells(2, 2, vec![1u8, 2, 3, 4]).is_ok());
        let err = TileGrid::from_cells(2, 3, vec![1u8]).unwrap_err();
        assert_eq!(
            err,
            GridError::CellCount {
                rows: 2,
                cols: 3,
                expected: 6,
                actual: 1
            }
        );
        assert!(matches!(
            TileGrid::from_cells(usize::MAX, 2, Vec::<u8>::new()),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn deserialize_rejects_short_cell_list() {
        let result = serde_json::from_str::<TileGrid<u8>>(r#"{"rows":2,"cols":3,"cells":[1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_cells_in_zero_width_grid() {
        let result = serde_json::from_str::<TileGrid<u8>>(r#"{"rows":1,"cols":0,"cells":[1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip_keeps_grid() {
        let grid = TileGrid::from_fn(2, 3, |c| (c.row * 3 + c.col) as u8);
        let json = serde_json::to_string(&grid).unwrap();
        let back: TileGrid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert_eq!(back.row(1), Some(&[3, 4, 5][..]));
    }

    #[test]
    fn even_row_corner_skips_off_grid_diagonals() {
        // (0,0) would check (-1,-1) and (1,-1); both are off-grid.
        let n = hex_neighbors(CellCoord::new(0, 0), 3, 3);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&CellCoord::new(1, 0)));
        assert!(n.contains(&CellCoord::new(0, 1)));
    }

    #[test]
    fn odd_row_edge_checks_right_diagonals() {
        let n = hex_neighbors(CellCoord::new(1, 0), 3, 3);
        assert!(n.contains(&CellCoord::new(0, 1)));
        assert!(n.contains(&CellCoord::new(2, 1)));
        assert_eq!(n.len(), 5);
    }

    #[test]
    fn interior_cells_have_six_neighbors() {
        let even = hex_neighbors(CellCoord::new(2, 2), 5, 5);
        assert_eq!(even.len(), 6);
        assert!(even.contains(&CellCoord::new(1, 1)));
        assert!(even.contains(&CellCoord::new(3, 1)));
        assert!(!even.contains(&CellCoord::new(1, 3)));

        let odd = hex_neighbors(CellCoord::new(1, 2), 5, 5);
        assert_eq!(odd.len(), 6);
        assert!(odd.contains(&CellCoord::new(0, 3)));
        assert!(odd.contains(&CellCoord::new(2, 3)));
        assert!(!odd.contains(&CellCoord::new(0, 1)));
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert!(hex_neighbors(CellCoord::new(0, 0), 1, 1).is_empty());
    }
}
