use glam::Vec3;
use hexworld_common::CellCoord;

/// Projection from offset hex coordinates to world space.
///
/// Tiles in a row are `column_spacing` apart; odd rows are pushed right by
/// `odd_row_offset`; rows are `row_spacing` apart along +Z. All tiles sit on
/// the y = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    pub column_spacing: f32,
    pub odd_row_offset: f32,
    pub row_spacing: f32,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            column_spacing: 2.0,
            odd_row_offset: 1.0,
            // sqrt(3) rounded: vertical distance between unit hex rows.
            row_spacing: 1.732,
        }
    }
}

impl HexLayout {
    /// World position of a tile centre.
    pub fn cell_to_world(&self, coord: CellCoord) -> Vec3 {
        let shift = if coord.is_odd_row() {
            self.odd_row_offset
        } else {
            0.0
        };
        Vec3::new(
            self.column_spacing * coord.col as f32 + shift,
            0.0,
            self.row_spacing * coord.row as f32,
        )
    }

    /// Min and max tile centres of a `rows` x `cols` grid, or `None` if empty.
    pub fn world_bounds(&self, rows: usize, cols: usize) -> Option<(Vec3, Vec3)> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        // Extremes lie on the first and last column of the first two rows
        // and the last row.
        for row in [0, 1.min(rows - 1), rows - 1] {
            for col in [0, cols - 1] {
                let p = self.cell_to_world(CellCoord::new(row, col));
                min = min.min(p);
                max = max.max(p);
            }
        }
        Some((min, max))
    }
}
