use std::fmt;

use crate::types::{Direction, Pos, CELLS, SIZE};

/// Tile value; 0 is an empty cell, anything else is a power of two >= 2.
pub type Tile = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // rows[r][c]
    cells: [[Tile; SIZE]; SIZE],
    // Maintained on every mutation, never recomputed.
    empty: u8,
}

impl Default for Board {
    #[allow(clippy::cast_possible_truncation)] // CELLS == 16
    fn default() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
            empty: CELLS as u8,
        }
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows. The empty count is derived once here.
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Self {
        debug_assert!(
            rows.iter().flatten().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
            "tiles must be 0 or a power of two >= 2"
        );
        let mut board = Self {
            cells: rows,
            empty: 0,
        };
        board.empty = board.count_empty_cells();
        board
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Tile {
        self.cells[pos.row][pos.col]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == 0
    }

    #[inline]
    pub fn rows(&self) -> [[Tile; SIZE]; SIZE] {
        self.cells
    }

    #[inline]
    pub fn row(&self, r: usize) -> [Tile; SIZE] {
        self.cells[r]
    }

    /// The tracked number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> u8 {
        self.empty
    }

    /// Count empty cells by scanning the grid. Should always agree with
    /// `empty_count`.
    #[allow(clippy::cast_possible_truncation)] // at most CELLS
    pub fn count_empty_cells(&self) -> u8 {
        self.cells.iter().flatten().filter(|&&v| v == 0).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..CELLS)
            .map(Pos::from_index)
            .filter(move |&p| self.is_empty(p))
    }

    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// True if two orthogonally adjacent cells hold the same value.
    ///
    /// Only meaningful as a move check on a full board; empty cells count as
    /// equal to each other.
    pub fn has_adjacent_pair(&self) -> bool {
        (0..CELLS).map(Pos::from_index).any(|p| {
            // Right and Down cover every pair exactly once.
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter_map(|dir| p.step(dir))
                .any(|q| self.get(p) == self.get(q))
        })
    }

    /// Put `value` on an empty cell.
    pub(crate) fn place(&mut self, pos: Pos, value: Tile) {
        debug_assert!(self.is_empty(pos), "place on occupied cell {pos}");
        debug_assert!(value >= 2 && value.is_power_of_two());
        self.cells[pos.row][pos.col] = value;
        self.empty -= 1;
    }

    /// Double the tile at `into` and empty `from`. Returns the doubled value.
    pub(crate) fn merge(&mut self, into: Pos, from: Pos) -> Tile {
        debug_assert_eq!(self.get(into), self.get(from));
        debug_assert!(!self.is_empty(into));
        let value = self.get(into) * 2;
        self.cells[into.row][into.col] = value;
        self.cells[from.row][from.col] = 0;
        self.empty += 1;
        value
    }

    /// Move the tile at `from` onto the empty cell `to`.
    pub(crate) fn shift(&mut self, from: Pos, to: Pos) {
        debug_assert!(self.is_empty(to));
        self.cells[to.row][to.col] = self.get(from);
        self.cells[from.row][from.col] = 0;
    }
}

#[inline]
fn format_val(v: Tile) -> String {
    if v == 0 {
        format!("{:^6}", ".")
    } else {
        format!("{v:^6}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "{}", "-".repeat(SIZE * 7 - 1))?;
            }
            let line: Vec<String> = row.iter().map(|&v| format_val(v)).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
