//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chessboard::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, Direction, FenError, MoveError, Piece, PieceKind, Square,
    SquareError,
};
