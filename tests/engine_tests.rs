use grid2048::{rng_for_seed, Board, Direction, GameRng, GameState};

fn state_with(rows: [[u32; 4]; 4]) -> GameState<GameRng> {
    GameState::with_board(Board::from_rows(rows), rng_for_seed(1))
}

fn single_row(row: [u32; 4]) -> GameState<GameRng> {
    state_with([row, [0; 4], [0; 4], [0; 4]])
}

#[test]
fn merge_once_per_tile() {
    let mut s = single_row([2, 2, 2, 2]);
    s.apply_move(Direction::Left);
    assert_eq!(s.board().row(0), [4, 4, 0, 0]);
    assert_eq!(s.score(), 8, "two merges of 4, not a cascade");
}

#[test]
fn slide_only_keeps_score() {
    let mut s = single_row([0, 0, 2, 4]);
    let summary = s.apply_move(Direction::Left);
    assert_eq!(s.board().row(0), [2, 4, 0, 0]);
    assert_eq!(s.score(), 0);
    assert_eq!(summary.merges, 0);
}

#[test]
fn mismatched_tile_blocks() {
    let mut s = single_row([2, 4, 2, 0]);
    s.apply_move(Direction::Left);
    assert_eq!(s.board().row(0), [2, 4, 2, 0]);
    assert_eq!(s.score(), 0);
}

#[test]
fn right_and_left_are_mirrors() {
    let mut r = single_row([2, 2, 0, 0]);
    r.apply_move(Direction::Right);
    assert_eq!(r.board().row(0), [0, 0, 0, 4]);

    let mut l = single_row([0, 0, 2, 2]);
    l.apply_move(Direction::Left);
    assert_eq!(l.board().row(0), [4, 0, 0, 0]);

    assert_eq!(r.score(), 4);
    assert_eq!(l.score(), 4);
}

#[test]
fn merge_across_gap() {
    let mut s = single_row([2, 0, 0, 2]);
    s.apply_move(Direction::Left);
    assert_eq!(s.board().row(0), [4, 0, 0, 0]);
}

#[test]
fn merged_tile_does_not_merge_again() {
    // 2+2 makes a 4 that must not absorb the 4 already on its left.
    let mut s = single_row([4, 2, 2, 0]);
    s.apply_move(Direction::Left);
    assert_eq!(s.board().row(0), [4, 4, 0, 0]);
    assert_eq!(s.score(), 4);

    let mut s = single_row([0, 4, 2, 2]);
    s.apply_move(Direction::Right);
    assert_eq!(s.board().row(0), [0, 0, 4, 4]);
}

#[test]
fn pair_nearest_the_edge_merges_first() {
    let mut s = single_row([2, 2, 2, 0]);
    s.apply_move(Direction::Left);
    assert_eq!(s.board().row(0), [4, 2, 0, 0]);

    let mut s = single_row([2, 2, 2, 0]);
    s.apply_move(Direction::Right);
    assert_eq!(s.board().row(0), [0, 0, 2, 4]);
}

#[test]
fn vertical_moves_work_on_columns() {
    let mut s = state_with([[2, 0, 0, 0], [2, 0, 0, 8], [4, 0, 0, 0], [4, 0, 0, 8]]);
    s.apply_move(Direction::Up);
    assert_eq!(s.grid(), [[4, 0, 0, 16], [8, 0, 0, 0], [0; 4], [0; 4]]);
    assert_eq!(s.score(), 4 + 8 + 16);

    s.apply_move(Direction::Down);
    assert_eq!(s.grid(), [[0; 4], [0; 4], [4, 0, 0, 0], [8, 0, 0, 16]]);
    assert_eq!(s.score(), 28, "4 and 8 are different, nothing merges");
}

#[test]
fn rows_move_independently() {
    let mut s = state_with([[2, 2, 4, 4], [0, 0, 0, 2], [8, 0, 8, 0], [16, 8, 4, 2]]);
    s.apply_move(Direction::Left);
    assert_eq!(
        s.grid(),
        [[4, 8, 0, 0], [2, 0, 0, 0], [16, 0, 0, 0], [16, 8, 4, 2]]
    );
    assert_eq!(s.score(), 4 + 8 + 16);
    assert_eq!(s.empty_count(), 8);
}

#[test]
fn noop_move_still_counts() {
    let mut s = single_row([2, 4, 8, 16]);
    let before = s.grid();
    let summary = s.apply_move(Direction::Left);
    assert!(!summary.changed());
    assert_eq!(s.grid(), before);
    assert_eq!(s.moves(), 1);

    s.apply_move(Direction::Up);
    assert_eq!(s.moves(), 2);
    assert_eq!(s.grid(), before);
}

#[test]
fn empty_count_follows_merges() {
    let mut s = single_row([2, 2, 2, 2]);
    assert_eq!(s.empty_count(), 12);
    s.apply_move(Direction::Left);
    assert_eq!(s.empty_count(), 14);
    assert_eq!(s.empty_count(), s.board().count_empty_cells());
}

#[test]
fn step_moves_then_spawns() {
    let mut s = single_row([2, 2, 0, 0]);
    let report = s.step(Direction::Left);
    assert_eq!(report.summary.merges, 1);
    assert!(report.spawned.is_some());
    assert!(!report.game_over);
    assert_eq!(s.empty_count(), 14);
    assert_eq!(s.moves(), 1);
}
