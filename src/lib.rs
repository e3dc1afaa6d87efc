pub mod board;

pub use board::{Board, BoardBuilder, Color, Direction, Piece, PieceKind, Square};
