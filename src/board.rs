//! Board state and move execution.
//!
//! This module provides the rules engine:
//! - An NxN grid of points, each empty or holding one player's stone
//! - Stone placement with capture of surrounded opponent groups
//! - Suicide rejection, evaluated after captures are resolved
//! - Turn alternation and pass bookkeeping
//!
//! Groups are never stored. Whenever a liberty question is asked the group
//! is rediscovered by an iterative flood fill over the grid.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::constants::{DELTA, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, MAX_BOARD_SIZE};
use crate::status::{GameStatus, PassStreak};

/// A player, identified by stone color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    fn glyph(self) -> char {
        match self {
            Stone::Black => GLYPH_BLACK,
            Stone::White => GLYPH_WHITE,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Reason a placement was rejected. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: isize, col: isize },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
    /// The placed stone's group would have no liberties after captures.
    #[error("playing at ({row}, {col}) would be suicide")]
    Suicide { row: usize, col: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),
}

/// A game in progress: grid contents, the player to move, and the pass streak.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
    turn: Stone,
    streak: PassStreak,
}

impl Board {
    /// Create an empty `size`x`size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            turn: Stone::Black,
            streak: PassStreak::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The player whose move is next.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.streak.status()
    }

    /// Passes since the last accepted placement.
    pub fn consecutive_passes(&self) -> u8 {
        self.streak.count()
    }

    pub fn is_game_over(&self) -> bool {
        self.status() == GameStatus::Over
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Contents of a point. Off-board points read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Stone> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// Grid contents, one slice per row from the top.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Stone>]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of stones of one color on the board.
    pub fn stone_count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(stone)).count()
    }

    fn point(&self, row: isize, col: isize) -> Option<Point> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// True if `(row, col)` is on the board and empty.
    pub fn is_legal_coordinate(&self, row: isize, col: isize) -> bool {
        self.point(row, col)
            .is_some_and(|(r, c)| self.get(r, c).is_none())
    }

    /// On-board orthogonal neighbors of a point.
    fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.size && c < self.size).then_some((r, c))
        })
    }

    /// Place a stone for the player to move.
    ///
    /// Opponent groups left without liberties are captured first; only then
    /// is the placed stone's own group checked, so filling an opponent's last
    /// liberty is legal even when the new stone had no liberty of its own.
    /// On success the pass streak is cleared and the turn passes.
    pub fn place_stone(&mut self, row: isize, col: isize) -> Result<(), MoveError> {
        let Some(pt) = self.point(row, col) else {
            debug!(row, col, "move rejected: off the board");
            return Err(MoveError::OutOfBounds { row, col });
        };
        let (r, c) = pt;
        if self.get(r, c).is_some() {
            debug!(row = r, col = c, "move rejected: occupied");
            return Err(MoveError::Occupied { row: r, col: c });
        }

        let color = self.turn;
        let opp = color.opponent();
        let i = self.idx(r, c);
        self.cells[i] = Some(color);

        let mut captured: Vec<Point> = Vec::new();
        let adjacent: Vec<Point> = self.neighbors(pt).collect();
        for n in adjacent {
            // A group touching the stone on two sides is removed on the first visit
            if self.get(n.0, n.1) != Some(opp) || self.has_liberty(n) {
                continue;
            }
            let start = captured.len();
            let group_size = self.collect_group(n, &mut captured);
            for &(gr, gc) in &captured[start..] {
                let gi = self.idx(gr, gc);
                self.cells[gi] = None;
            }
            debug!(%opp, row = n.0, col = n.1, group_size, "group captured");
        }

        if !self.has_liberty(pt) {
            self.cells[i] = None; // undo suicidal move
            debug!(row = r, col = c, "move rejected: suicide");
            return Err(MoveError::Suicide { row: r, col: c });
        }

        self.streak.reset();
        self.turn = opp;
        debug!(%color, row = r, col = c, captures = captured.len(), "stone placed");
        Ok(())
    }

    /// Pass the turn without placing a stone.
    pub fn pass(&mut self) {
        let mover = self.turn;
        let before = self.streak.status();
        let after = self.streak.record_pass();
        self.turn = mover.opponent();
        debug!(%mover, passes = self.streak.count(), "pass");
        if before == GameStatus::InProgress && after == GameStatus::Over {
            info!("game over: both players passed");
        }
    }

    /// Whether the group containing `start` touches at least one empty point.
    ///
    /// Stops at the first liberty found. Returns false for an empty start point.
    fn has_liberty(&self, start: Point) -> bool {
        let Some(color) = self.get(start.0, start.1) else {
            return false;
        };
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];

        while let Some(pt) = stack.pop() {
            let i = self.idx(pt.0, pt.1);
            if visited[i] {
                continue;
            }
            visited[i] = true;

            for n in self.neighbors(pt) {
                match self.get(n.0, n.1) {
                    None => return true,
                    Some(c) if c == color && !visited[self.idx(n.0, n.1)] => stack.push(n),
                    _ => {}
                }
            }
        }
        false
    }

    /// Collect all stones in the group containing `start`.
    ///
    /// Appends every member to `out` and returns the group size.
    fn collect_group(&self, start: Point, out: &mut Vec<Point>) -> usize {
        let Some(color) = self.get(start.0, start.1) else {
            return 0;
        };
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        let mut count = 0;

        while let Some(pt) = stack.pop() {
            let i = self.idx(pt.0, pt.1);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            out.push(pt);
            count += 1;

            for n in self.neighbors(pt) {
                if self.get(n.0, n.1) == Some(color) && !visited[self.idx(n.0, n.1)] {
                    stack.push(n);
                }
            }
        }
        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{col:2}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows().enumerate() {
            write!(f, "{row:2}")?;
            for &cell in cells {
                let ch = cell.map_or(GLYPH_EMPTY, Stone::glyph);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "\nCurrent turn: {}", self.turn)
    }
}
