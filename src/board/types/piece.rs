//! Piece, piece-kind, and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Square;

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn advance direction as a row delta.
    ///
    /// Row 0 is rank 8, so White pawns advance toward smaller rows.
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_row_delta(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// One-letter suffix used in piece display codes ("Nw", "Qb")
    #[inline]
    #[must_use]
    pub(crate) const fn suffix(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece kinds. The set is fixed and closed for standard chess.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// One-letter display code (uppercase, English notation)
    #[inline]
    #[must_use]
    pub const fn short_name(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Full English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Standard material point value (the king scores nothing; it is never
    /// captured).
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Unicode glyph for the given color
    #[must_use]
    pub const fn icon(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::King) => '\u{265A}',
        }
    }

    /// Parse a piece kind from a letter (either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert to a FEN character, uppercase for White
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.short_name();
        if color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}

/// A piece on the board.
///
/// The board cell holding the piece is the authoritative placement; the
/// `square` field is a cached mirror that [`Board::place`] keeps in sync.
///
/// [`Board::place`]: super::super::Board::place
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    times_moved: u32,
    captured: bool,
}

impl Piece {
    #[must_use]
    pub(crate) const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            times_moved: 0,
            captured: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The square this piece currently occupies
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// How many times this piece has been relocated since construction
    #[inline]
    #[must_use]
    pub const fn times_moved(&self) -> u32 {
        self.times_moved
    }

    /// Whether this piece has been captured and removed from play
    #[inline]
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// Material point value, fixed per kind
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    /// Unicode glyph for this piece
    #[inline]
    #[must_use]
    pub const fn icon(&self) -> char {
        self.kind.icon(self.color)
    }

    /// Current location in file-rank notation, e.g. "e4"
    #[must_use]
    pub fn algebraic_loc(&self) -> String {
        self.square.to_string()
    }

    pub(crate) fn relocate(&mut self, square: Square) {
        self.square = square;
        self.times_moved += 1;
    }

    pub(crate) fn mark_captured(&mut self) {
        self.captured = true;
    }
}

impl fmt::Display for Piece {
    /// Short display code: piece letter plus color suffix, e.g. "Nw"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.short_name(), self.color.suffix())
    }
}
