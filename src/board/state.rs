use super::types::{Color, Piece, PieceKind, Square};

/// An 8x8 mailbox board. Ground truth for occupancy.
///
/// Each cell holds at most one piece, and a piece's cached square always
/// matches the cell holding it. [`Board::place`] is the only operation that
/// relocates a piece, and it maintains both sides of that invariant in one
/// step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, col), Color::Black, kind);
            board.set_piece(Square(1, col), Color::Black, PieceKind::Pawn);
            board.set_piece(Square(6, col), Color::White, PieceKind::Pawn);
            board.set_piece(Square(7, col), Color::White, kind);
        }
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row()][square.col()].as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square.row()][square.col()].is_none()
    }

    /// Put a freshly constructed piece on a square. Construction-time only:
    /// the move counter starts at zero and any previous occupant is
    /// discarded.
    pub(crate) fn set_piece(&mut self, square: Square, color: Color, kind: PieceKind) {
        self.squares[square.row()][square.col()] = Some(Piece::new(kind, color, square));
    }

    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    /// Relocate the piece on `from` to `(row, col)`.
    ///
    /// Clears the old cell, updates the piece's cached square, writes the
    /// new cell, and increments the piece's move counter, all as a single
    /// step. A silent no-op when either coordinate is out of bounds or
    /// `from` is empty. Any occupant of the destination is discarded;
    /// callers that care about captures go through
    /// [`try_move`](Board::try_move).
    pub fn place(&mut self, from: Square, row: isize, col: isize) {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return;
        }
        let to = Square(row as usize, col as usize);
        let Some(mut piece) = self.take_piece(from) else {
            return;
        };
        #[cfg(feature = "logging")]
        log::trace!("place {piece} {from} -> {to}");
        piece.relocate(to);
        self.squares[to.row()][to.col()] = Some(piece);
    }

    /// Iterate over all pieces on the board, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().filter_map(Option::as_ref)
    }

    /// The square of `color`'s king, if present.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.color() == color && p.kind() == PieceKind::King)
            .map(|p| p.square())
    }

    /// Whether `color`'s king is currently attacked. False when the board
    /// has no king of that color.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
