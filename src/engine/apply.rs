use log::trace;

use crate::board::{Board, Tile};
use crate::types::{Direction, Pos, CELLS};

/// What a tile finds when it looks at a cell further from the target edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Nothing there; keep looking.
    Inert,
    /// Equal non-empty values; the far tile folds into the near one.
    Merge,
    /// Different non-empty values; nothing beyond can reach the near tile.
    Block,
}

/// Classify a (near, far) pair of cell values. Pure; no mutation.
#[inline]
pub fn contact(near: Tile, far: Tile) -> Contact {
    if near == 0 || far == 0 {
        Contact::Inert
    } else if near == far {
        Contact::Merge
    } else {
        Contact::Block
    }
}

/// Outcome of one directional move on a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSummary {
    pub merges: u32,
    /// Sum of the values produced by merges; this is what the score gains.
    pub points: u64,
    /// Single-cell slide steps taken.
    pub slides: u32,
}

impl MoveSummary {
    #[inline]
    pub fn changed(&self) -> bool {
        self.merges > 0 || self.slides > 0
    }
}

/// Cell visiting order for `dir`: row-major for Up/Left, reversed for Down/Right.
pub fn scan_order(dir: Direction) -> [Pos; CELLS] {
    let mut order: [Pos; CELLS] = std::array::from_fn(Pos::from_index);
    if dir.scans_backward() {
        order.reverse();
    }
    order
}

/// Look away from the target edge for the first occupied cell and merge with
/// it if it holds the same value. Returns the points produced (0 if no merge).
fn merge_from(board: &mut Board, source: Pos, dir: Direction) -> Tile {
    let away = dir.opposite();
    let mut cursor = source.step(away);
    while let Some(far) = cursor {
        match contact(board.get(source), board.get(far)) {
            Contact::Inert => cursor = far.step(away),
            Contact::Block => return 0,
            Contact::Merge => {
                let before = board.get(source);
                let value = board.merge(source, far);
                trace!("merge {far} into {source}: {before} + {before} -> {value}");
                return value;
            }
        }
    }
    0
}

/// Slide the tile at `source` toward the target edge until the next cell is
/// occupied or the edge is reached. Returns the number of single-cell steps.
fn slide_from(board: &mut Board, source: Pos, dir: Direction) -> u32 {
    let mut at = source;
    let mut steps = 0;
    while let Some(next) = at.step(dir) {
        if !board.is_empty(next) {
            break;
        }
        board.shift(at, next);
        trace!("slide {at} -> {next}");
        at = next;
        steps += 1;
    }
    steps
}

/// Slide and merge every tile on `board` toward the `dir` edge.
///
/// Tiles nearer the edge are settled first. Each non-empty tile first folds in
/// the nearest equal tile behind it (at most one per move), then slides as far
/// as it can. A tile produced by a merge is never merged again in the same
/// move because every cell it could meet has already been settled.
pub fn apply_move(board: &mut Board, dir: Direction) -> MoveSummary {
    let mut summary = MoveSummary::default();
    for source in scan_order(dir) {
        if board.is_empty(source) {
            continue;
        }
        trace!("try moving tile {source}");

        let gained = merge_from(board, source, dir);
        if gained > 0 {
            summary.merges += 1;
            summary.points += u64::from(gained);
        }
        summary.slides += slide_from(board, source, dir);
    }
    summary
}
