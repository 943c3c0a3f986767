//! Pieces module - polyomino shapes and offered pieces
//!
//! A [`Shape`] is a grid of rows, each row a run of filled/empty cells. Rows
//! may have different lengths; the bounding box width is the longest row.
//! Offsets of the filled cells and their extent are computed once at
//! construction so placement checks never rescan the grid.
//!
//! The standard template table lives here too. Templates are grouped into
//! weight classes by [`crate::catalog`].

use block_grid_types::{Color, PieceId, BOARD_SIZE};

use crate::error::ShapeError;

/// Offset of a filled cell relative to the shape's top-left corner (row, col)
pub type CellOffset = (u8, u8);

/// Immutable polyomino pattern.
///
/// `Clone` produces a fully independent copy; shapes never share storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
    width: usize,
    /// Filled cells in row-major order
    offsets: Vec<CellOffset>,
    /// (min_row, max_row, min_col, max_col) over filled cells
    extent: (u8, u8, u8, u8),
}

impl Shape {
    /// Build a shape from boolean rows.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::NoRows);
        }

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height > BOARD_SIZE as usize || width > BOARD_SIZE as usize {
            return Err(ShapeError::TooLarge { height, width });
        }

        // Both dimensions are at most BOARD_SIZE, so every offset fits in u8.
        let offsets: Vec<CellOffset> = rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, set)| **set)
                    .filter_map(move |(j, _)| {
                        Some((u8::try_from(i).ok()?, u8::try_from(j).ok()?))
                    })
            })
            .collect();

        if offsets.is_empty() {
            return Err(ShapeError::NoFilledCells);
        }

        let mut extent = (u8::MAX, 0, u8::MAX, 0);
        for &(i, j) in &offsets {
            extent.0 = extent.0.min(i);
            extent.1 = extent.1.max(i);
            extent.2 = extent.2.min(j);
            extent.3 = extent.3.max(j);
        }

        Ok(Self {
            rows,
            width,
            offsets,
            extent,
        })
    }

    /// Build a shape from 0/1 rows, e.g. `&[&[1, 1, 1], &[0, 1, 0]]`.
    pub fn from_bits(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let mut out = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => {
                        return Err(ShapeError::InvalidCell {
                            row: i,
                            col: j,
                            value,
                        })
                    }
                }
            }
            out.push(cells);
        }
        Self::new(out)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.width
    }

    /// The raw rows
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Whether cell (i, j) is filled. Out-of-range cells are empty.
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        self.rows
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Filled cells, row-major
    pub fn offsets(&self) -> &[CellOffset] {
        &self.offsets
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Tight extent of the filled cells: (min_row, max_row, min_col, max_col)
    pub fn extent(&self) -> (u8, u8, u8, u8) {
        self.extent
    }

    /// Rows as 0/1 values, for serialization and display
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&set| u8::from(set)).collect())
            .collect()
    }
}

/// A piece in the current offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub shape: Shape,
    pub color: Color,
}

impl Piece {
    pub fn new(id: PieceId, shape: Shape, color: Color) -> Self {
        Self { id, shape, color }
    }
}

/// Standard template table.
///
/// Index order matters: weight classes in [`crate::catalog`] refer to these
/// positions.
pub const STANDARD_TEMPLATES: [&[&[u8]]; 19] = [
    // small
    &[&[1]],
    &[&[1, 1]],
    &[&[1], &[1]],
    // medium
    &[&[1, 1], &[1, 1]],
    &[&[1, 1, 1]],
    &[&[1], &[1], &[1]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    // large
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
    &[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]],
    &[&[1, 1, 1], &[0, 0, 1], &[0, 0, 1]],
    &[&[1, 0, 0], &[1, 1, 1], &[1, 0, 0]],
    &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[1, 1, 1, 1], &[1, 0, 0, 0]],
    &[&[1, 1], &[1, 1], &[1, 1]],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_dimensions() {
        let t = Shape::from_bits(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
        assert_eq!(t.height(), 2);
        assert_eq!(t.width(), 3);
        assert_eq!(t.cell_count(), 4);
        assert_eq!(t.offsets(), &[(0, 0), (0, 1), (0, 2), (1, 1)]);
        assert_eq!(t.extent(), (0, 1, 0, 2));
    }

    #[test]
    fn test_ragged_rows_use_longest_row() {
        let s = Shape::new(vec![vec![true], vec![true, true, true]]).unwrap();
        assert_eq!(s.width(), 3);
        assert!(!s.is_set(0, 2));
        assert!(s.is_set(1, 2));
    }

    #[test]
    fn test_extent_ignores_empty_border() {
        let s = Shape::from_bits(&[&[0, 0, 0], &[0, 1, 0]]).unwrap();
        assert_eq!(s.extent(), (1, 1, 1, 1));
    }

    #[test]
    fn test_oversized_shapes_rejected() {
        // A filled cell at row 256 must not wrap back onto the board
        let mut rows = vec![vec![false]; 256];
        rows.push(vec![true]);
        assert_eq!(
            Shape::new(rows),
            Err(ShapeError::TooLarge {
                height: 257,
                width: 1
            })
        );

        let wide = vec![vec![true; 11]];
        assert_eq!(
            Shape::new(wide),
            Err(ShapeError::TooLarge {
                height: 1,
                width: 11
            })
        );

        let full = Shape::new(vec![vec![true; 10]; 10]).unwrap();
        assert_eq!(full.extent(), (0, 9, 0, 9));
        assert_eq!(full.cell_count(), 100);
    }

    #[test]
    fn test_malformed_shapes_rejected() {
        assert_eq!(Shape::new(vec![]), Err(ShapeError::NoRows));
        assert_eq!(
            Shape::from_bits(&[&[0, 0], &[0]]),
            Err(ShapeError::NoFilledCells)
        );
        assert_eq!(
            Shape::from_bits(&[&[1, 2]]),
            Err(ShapeError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Shape::from_bits(&[&[1, 1]]).unwrap();
        let mut copy = original.clone();
        copy.rows[0][0] = false;
        assert!(original.is_set(0, 0));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_standard_templates_are_valid() {
        let templates: Vec<Shape> = STANDARD_TEMPLATES
            .iter()
            .map(|rows| Shape::from_bits(rows).unwrap())
            .collect();
        assert_eq!(templates.len(), 19);
        assert_eq!(templates[0].cell_count(), 1);
        // plus
        assert_eq!(templates[16].cell_count(), 5);
        // 2x3 rectangle
        assert_eq!(templates[18].height(), 3);
        assert_eq!(templates[18].width(), 2);
    }
}
