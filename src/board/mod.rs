//! Mailbox chessboard with attack and check detection.
//!
//! The board is an 8x8 grid of optional pieces. Row 0 is rank 8 (Black's
//! home rank), so square (0, 0) prints as "a8" and (7, 7) as "h1".
//!
//! The attack engine answers, for any square, which enemy pieces currently
//! threaten it. Enumeration is lazy: [`Board::is_square_attacked`] stops at
//! the first attacker found, which is what check detection needs.
//!
//! # Example
//! ```
//! use chessboard::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! // f7 is only defended by Black at the start, never attacked by White.
//! assert!(!board.is_square_attacked(Square(1, 5), Color::White));
//! assert!(!board.is_in_check(Color::White));
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod moves;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use state::Board;
pub use types::{Axis, Color, Direction, Piece, PieceKind, Square};
