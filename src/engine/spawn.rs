use log::trace;
use rand::Rng;

use crate::board::{Board, Tile};
use crate::types::Pos;

/// Value of every newly spawned tile.
pub const SPAWN_VALUE: Tile = 2;

/// Place a `SPAWN_VALUE` tile on an empty cell chosen uniformly at random.
///
/// Draws `k` in `[0, empty_count)` and fills the `k`-th empty cell in
/// row-major order. A full board is left untouched and yields `None`.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Pos> {
    let empty = usize::from(board.empty_count());
    if empty == 0 {
        return None;
    }
    let skip = rng.gen_range(0..empty);
    let pos = board.empty_cells().nth(skip)?;
    board.place(pos, SPAWN_VALUE);
    trace!("next tile {pos} (skipped {skip} of {empty} empty)");
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng_for_seed;

    #[test]
    fn full_board_is_a_noop() {
        let mut b = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = b.clone();
        let mut rng = rng_for_seed(7);
        assert_eq!(spawn_tile(&mut b, &mut rng), None);
        assert_eq!(b, before);
    }

    #[test]
    fn single_hole_is_always_chosen() {
        let mut b = Board::from_rows([[2, 4, 2, 4], [4, 2, 0, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut rng = rng_for_seed(99);
        assert_eq!(spawn_tile(&mut b, &mut rng), Some(Pos::new(1, 2)));
        assert_eq!(b.get(Pos::new(1, 2)), SPAWN_VALUE);
        assert!(b.is_full());
    }
}
