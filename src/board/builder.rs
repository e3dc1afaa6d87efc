//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN
//! strings.
//!
//! # Example
//! ```
//! use chessboard::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(4, 3), Color::White, PieceKind::Queen)
//!     .build();
//! ```

use super::types::{Color, PieceKind, Square};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Add a piece. A later piece on the same square replaces an earlier
    /// one.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.push((square, color, kind));
        self
    }

    /// Build the board. Pieces start with a zero move counter.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, kind) in self.pieces {
            board.set_piece(square, color, kind);
        }
        board
    }
}
