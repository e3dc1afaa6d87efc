use std::fmt;

use super::types::Square;
use super::Board;

impl fmt::Display for Board {
    /// Grid of short display codes, rank 8 at the top:
    ///
    /// ```text
    /// 8 Rb Nb Bb Qb Kb Bb Nb Rb
    /// ...
    /// 1 Rw Nw Bw Qw Kw Bw Nw Rw
    ///    a  b  c  d  e  f  g  h
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{}", 8 - row)?;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " ..")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..8 {
            write!(f, "  {}", (b'a' + col) as char)?;
        }
        Ok(())
    }
}
