use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::board::{Board, Tile};
use crate::engine::apply::{apply_move, MoveSummary};
use crate::engine::spawn::spawn_tile;
use crate::rng::{rng_for_seed, rng_from_clock, GameRng};
use crate::types::{Direction, Pos, SIZE};

/// One game session: grid, score, move count and the spawn source.
///
/// Reset wholesale by `reset`; nothing else clears it.
#[derive(Debug, Clone)]
pub struct GameState<R = GameRng> {
    board: Board,
    score: u64,
    moves: u64,
    rng: R,
}

/// Everything a driver needs after one input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub summary: MoveSummary,
    pub spawned: Option<Pos>,
    pub game_over: bool,
}

/// Read-only view of a session for rendering or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub grid: [[Tile; SIZE]; SIZE],
    pub score: u64,
    pub moves: u64,
    pub empty: u8,
    pub highest: Tile,
    pub game_over: bool,
}

impl GameState<GameRng> {
    /// New game with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(rng_for_seed(seed))
    }

    /// New game seeded from the clock.
    pub fn from_clock() -> Self {
        Self::new(rng_from_clock())
    }
}

impl<R: Rng> GameState<R> {
    /// New game: empty grid, then two spawned tiles.
    pub fn new(rng: R) -> Self {
        let mut s = Self::with_board(Board::new(), rng);
        s.reset();
        s
    }

    /// Session around a prepared board, with zero score and moves. No tiles
    /// are spawned.
    #[inline]
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            score: 0,
            moves: 0,
            rng,
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.spawn_tile();
        self.spawn_tile();
    }

    /// Slide and merge toward `dir`. Counts as a move even when nothing changes.
    pub fn apply_move(&mut self, dir: Direction) -> MoveSummary {
        self.moves += 1;
        let summary = apply_move(&mut self.board, dir);
        self.score += summary.points;
        debug!(
            "move #{} {dir}: {} merges, +{} points, score {}",
            self.moves, summary.merges, summary.points, self.score
        );
        summary
    }

    #[inline]
    pub fn spawn_tile(&mut self) -> Option<Pos> {
        spawn_tile(&mut self.board, &mut self.rng)
    }

    /// Full grid with no orthogonally adjacent equal pair.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_pair()
    }

    /// One input cycle: move, spawn, then check for game over.
    pub fn step(&mut self, dir: Direction) -> TurnReport {
        let summary = self.apply_move(dir);
        let spawned = self.spawn_tile();
        TurnReport {
            summary,
            spawned,
            game_over: self.is_game_over(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn grid(&self) -> [[Tile; SIZE]; SIZE] {
        self.board.rows()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    #[inline]
    pub fn empty_count(&self) -> u8 {
        self.board.empty_count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid(),
            score: self.score,
            moves: self.moves,
            empty: self.empty_count(),
            highest: self.board.highest_tile(),
            game_over: self.is_game_over(),
        }
    }
}

/// Free-function form of `GameState::is_game_over`.
#[inline]
pub fn is_game_over<R: Rng>(state: &GameState<R>) -> bool {
    state.is_game_over()
}
