//! Board geometry limits, game-end threshold, and render glyphs.
//!
//! # Default Board Size
//!
//! The size used when none is given on the command line is controlled by
//! Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```
//!
//! The engine itself accepts any size in `1..=MAX_BOARD_SIZE` at construction.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) for new games.
#[cfg(feature = "board9x9")]
pub const DEFAULT_BOARD_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_BOARD_SIZE: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Largest board the engine will construct.
pub const MAX_BOARD_SIZE: usize = 25;

/// Orthogonal neighbor offsets as (row, col) deltas.
/// Order: North, East, South, West
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

// =============================================================================
// Game End
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u8 = 2;

// =============================================================================
// Render Glyphs
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = '●';

/// White stone.
pub const GLYPH_WHITE: char = '○';

/// Empty point.
pub const GLYPH_EMPTY: char = '+';
