//! Attack detection.
//!
//! Four threat geometries feed one query: knight jumps, pawn diagonal
//! captures, sliding rays (bishop/rook/queen), and king adjacency.
//! [`Board::attackers`] unifies them as a lazy iterator, so the existence
//! test used for check detection stops at the first attacker while the full
//! enumeration walks every geometry.

use once_cell::sync::Lazy;

use super::types::{Axis, Color, Direction, Piece, PieceKind, Square};
use super::Board;

/// Squares a knight could attack each target square from.
static KNIGHT_SOURCES: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    let deltas = [
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (2, -1),
        (2, 1),
        (1, -2),
        (1, 2),
    ];
    std::array::from_fn(|idx| {
        let target = Square(idx / 8, idx % 8);
        deltas
            .iter()
            .filter_map(|&(dr, dc)| target.offset(dr, dc))
            .collect()
    })
});

/// Squares a pawn of the given color could capture into each target square
/// from, indexed `[color][square]`. Pawns attack diagonally forward, so the
/// source squares sit diagonally behind the target relative to the pawn's
/// advance direction.
static PAWN_SOURCES: Lazy<[[Vec<Square>; 64]; 2]> = Lazy::new(|| {
    Color::BOTH.map(|color| {
        let behind = -color.pawn_row_delta();
        std::array::from_fn(|idx| {
            let target = Square(idx / 8, idx % 8);
            [-1, 1]
                .iter()
                .filter_map(|&dc| target.offset(behind, dc))
                .collect()
        })
    })
});

impl Board {
    /// Whether any piece stands strictly between `origin` and
    /// `destination`.
    ///
    /// Only meaningful when the endpoints are colinear along a rank, file,
    /// or diagonal; sliding-move validation calls this after checking
    /// geometry. The occupant of `destination` itself is the caller's
    /// concern. Non-colinear endpoints walk the signum path and never
    /// fault, but the result means nothing for legality.
    #[must_use]
    pub fn is_blocked_path(&self, origin: Square, destination: Square) -> bool {
        let dr = destination.row() as isize - origin.row() as isize;
        let dc = destination.col() as isize - origin.col() as isize;
        let steps = dr.abs().max(dc.abs());
        let (step_r, step_c) = (dr.signum(), dc.signum());

        let mut sq = origin;
        for _ in 1..steps {
            sq = match sq.offset(step_r, step_c) {
                Some(next) => next,
                None => return false,
            };
            if !self.is_empty_square(sq) {
                return true;
            }
        }
        false
    }

    /// The first piece encountered stepping outward from `origin` in
    /// `direction`, or `None` if the ray exits the board unoccupied.
    #[must_use]
    pub fn find_nearest_piece(&self, origin: Square, direction: Direction) -> Option<&Piece> {
        let mut sq = origin.offset(direction.dr, direction.dc)?;
        loop {
            if let Some(piece) = self.piece_at(sq) {
                return Some(piece);
            }
            sq = sq.offset(direction.dr, direction.dc)?;
        }
    }

    /// Lazily enumerate every piece of color `by` attacking `target`.
    ///
    /// Knight sources are visited first, then the two pawn capture sources,
    /// then the 8 compass directions in row-major order. Taking only the
    /// first element gives the short-circuit existence test; collecting
    /// gives the full attacker list.
    pub fn attackers(&self, target: Square, by: Color) -> impl Iterator<Item = &Piece> {
        let idx = target.as_index();

        let knights = KNIGHT_SOURCES[idx]
            .iter()
            .filter_map(move |&sq| self.piece_at(sq))
            .filter(move |p| p.color() == by && p.kind() == PieceKind::Knight);

        let pawns = PAWN_SOURCES[by.index()][idx]
            .iter()
            .filter_map(move |&sq| self.piece_at(sq))
            .filter(move |p| p.color() == by && p.kind() == PieceKind::Pawn);

        let rays = Direction::ALL.into_iter().filter_map(move |dir| {
            let found = self.find_nearest_piece(target, dir)?;
            if found.color() != by {
                return None;
            }
            let qualifies = match found.kind() {
                PieceKind::Queen => true,
                PieceKind::Bishop => dir.axis() == Axis::Diagonal,
                PieceKind::Rook => dir.axis() == Axis::Orthogonal,
                // The ray search returns the nearest piece at any range;
                // a king only attacks the adjacent square.
                PieceKind::King => found.square().chebyshev(target) <= 1,
                PieceKind::Pawn | PieceKind::Knight => false,
            };
            qualifies.then_some(found)
        });

        knights.chain(pawns).chain(rays)
    }

    /// Every piece of color `by` attacking `target`, in enumeration order.
    #[must_use]
    pub fn find_attacking_pieces(&self, target: Square, by: Color) -> Vec<&Piece> {
        self.attackers(target, by).collect()
    }

    /// Whether any piece of color `by` attacks `target`. Stops at the
    /// first attacker found; this is the check-detection primitive.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.attackers(target, by).next().is_some()
    }
}
