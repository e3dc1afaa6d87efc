//! Error types for board operations.

use std::fmt;

use super::types::{PieceKind, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid file-rank notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty FEN string
    Empty,
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Too many ranks in the placement field
    TooManyRanks { ranks: usize },
    /// Too few ranks in the placement field
    TooFewRanks { ranks: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyRanks { ranks } => {
                write!(f, "FEN placement has {ranks} ranks, expected 8")
            }
            FenError::TooFewRanks { ranks } => {
                write!(f, "FEN placement has {ranks} ranks, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for rejected moves. The board is untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the origin square
    EmptySquare { square: Square },
    /// The destination does not fit the piece's movement geometry
    IllegalGeometry {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
    /// A piece stands between origin and destination
    PathBlocked { from: Square, to: Square },
    /// The destination holds a piece of the same color
    FriendlyCapture { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::IllegalGeometry { kind, from, to } => {
                write!(f, "{} cannot move from {from} to {to}", kind.name())
            }
            MoveError::PathBlocked { from, to } => {
                write!(f, "Path from {from} to {to} is blocked")
            }
            MoveError::FriendlyCapture { square } => {
                write!(f, "Own piece on {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
