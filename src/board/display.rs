use std::fmt;

use super::Board;

impl fmt::Display for Board {
    /// Text grid for debugging: file letters across the top, ranks 8 down
    /// to 1, piece codes such as `wK`, and `..` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    A  B  C  D  E  F  G  H")?;
        writeln!(f, "    -----------------------")?;
        for rank in 0..8 {
            write!(f, "{} | ", 8 - rank)?;
            for file in 0..8 {
                match self.piece_at_coords(file, rank) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ".. ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_grid() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    A  B  C  D  E  F  G  H");
        assert_eq!(lines[2], "8 | bR bN bB bQ bK bB bN bR ");
        assert_eq!(lines[3], "7 | bP bP bP bP bP bP bP bP ");
        assert_eq!(lines[5], "5 | .. .. .. .. .. .. .. .. ");
        assert_eq!(lines[8], "2 | wP wP wP wP wP wP wP wP ");
        assert_eq!(lines[9], "1 | wR wN wB wQ wK wB wN wR ");
        assert!(text.ends_with("\n\n"));
    }
}
