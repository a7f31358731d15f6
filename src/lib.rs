//! Go-Rules: the rules engine for the board game Go.
//!
//! This crate provides stone placement, capture of surrounded groups,
//! suicide rejection, and the pass bookkeeping that ends a game, on a
//! square board of any size up to [`constants::MAX_BOARD_SIZE`].
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and render glyphs
//! - [`board`] - Core game logic (board state, moves, captures)
//! - [`status`] - Pass streak and game termination
//! - [`console`] - Line-oriented interactive play
//!
//! ## Example
//!
//! ```
//! use go_rules::board::{Board, Stone};
//!
//! let mut board = Board::new(5).unwrap();
//! board.place_stone(2, 2).unwrap();
//! assert_eq!(board.get(2, 2), Some(Stone::Black));
//! assert_eq!(board.turn(), Stone::White);
//!
//! board.pass();
//! board.pass();
//! assert!(board.is_game_over());
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod status;
