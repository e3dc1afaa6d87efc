//! Move validation and execution.
//!
//! Each piece kind encodes its own movement geometry. Pawn double-steps,
//! en passant, castling, and promotion belong to the game-loop layer and
//! are not handled here.

use super::error::MoveError;
use super::types::{Piece, PieceKind, Square};
use super::Board;

impl Board {
    /// Validate and perform a move from `from` to `to`.
    ///
    /// On success the piece is relocated via [`place`](Board::place) and
    /// any captured piece is returned by value with its captured flag set;
    /// its point value is `piece.value()`. On failure the board is left
    /// untouched.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let piece = *self.piece_at(from).ok_or(MoveError::EmptySquare { square: from })?;

        self.validate_geometry(&piece, from, to)?;

        if let Some(occupant) = self.piece_at(to) {
            if occupant.color() == piece.color() {
                return Err(MoveError::FriendlyCapture { square: to });
            }
        }

        #[cfg(feature = "logging")]
        log::trace!("move {piece} {from} -> {to}");

        let mut captured = self.take_piece(to);
        if let Some(ref mut victim) = captured {
            victim.mark_captured();
        }
        self.place(from, to.row() as isize, to.col() as isize);
        Ok(captured)
    }

    fn validate_geometry(&self, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
        let illegal = || MoveError::IllegalGeometry {
            kind: piece.kind(),
            from,
            to,
        };
        let blocked = || MoveError::PathBlocked { from, to };

        let dr = to.row() as isize - from.row() as isize;
        let dc = to.col() as isize - from.col() as isize;
        if dr == 0 && dc == 0 {
            return Err(illegal());
        }

        match piece.kind() {
            PieceKind::Pawn => {
                if dr != piece.color().pawn_row_delta() {
                    return Err(illegal());
                }
                match dc {
                    // straight ahead: destination must be empty
                    0 if self.is_empty_square(to) => Ok(()),
                    // diagonal: only as a capture
                    -1 | 1 if !self.is_empty_square(to) => Ok(()),
                    _ => Err(illegal()),
                }
            }
            PieceKind::Knight => {
                if matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)) {
                    Ok(())
                } else {
                    Err(illegal())
                }
            }
            PieceKind::Bishop => {
                if dr.abs() != dc.abs() {
                    return Err(illegal());
                }
                if self.is_blocked_path(from, to) {
                    return Err(blocked());
                }
                Ok(())
            }
            PieceKind::Rook => {
                if dr != 0 && dc != 0 {
                    return Err(illegal());
                }
                if self.is_blocked_path(from, to) {
                    return Err(blocked());
                }
                Ok(())
            }
            PieceKind::Queen => {
                if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
                    return Err(illegal());
                }
                if self.is_blocked_path(from, to) {
                    return Err(blocked());
                }
                Ok(())
            }
            PieceKind::King => {
                if dr.abs() <= 1 && dc.abs() <= 1 {
                    Ok(())
                } else {
                    Err(illegal())
                }
            }
        }
    }
}
