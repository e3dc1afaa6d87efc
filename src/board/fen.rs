//! FEN piece-placement parsing and serialization.
//!
//! Only the placement field is handled; side to move, castling rights, and
//! clocks belong to the game-loop layer. A full FEN string is accepted and
//! everything after the first field is ignored.

use super::error::FenError;
use super::types::{Color, PieceKind, Square};
use super::Board;

impl Board {
    /// Parse a board from the placement field of a FEN string.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let mut board = Board::empty();
        let mut ranks = 0;
        for (row, rank_str) in placement.split('/').enumerate() {
            ranks += 1;
            if row >= 8 {
                return Err(FenError::TooManyRanks { ranks: row + 1 });
            }
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: row,
                            files: col + 1,
                        });
                    }
                    // FEN lists rank 8 first, which is row 0 here.
                    board.set_piece(Square(row, col), color, kind);
                    col += 1;
                }
            }
        }
        if ranks < 8 {
            return Err(FenError::TooFewRanks { ranks });
        }
        Ok(board)
    }

    /// Serialize the piece placement to a FEN field.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            if row > 0 {
                fen.push('/');
            }
            let mut empty_run = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push(char::from_digit(empty_run, 10).unwrap());
                            empty_run = 0;
                        }
                        fen.push(piece.kind().to_fen_char(piece.color()));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push(char::from_digit(empty_run, 10).unwrap());
            }
        }
        fen
    }
}
