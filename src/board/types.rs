//! Core board types.

mod direction;
mod piece;
mod square;

pub use direction::{Axis, Direction};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
