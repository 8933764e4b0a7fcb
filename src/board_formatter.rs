use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Pos, BOARD_SIZE};
use crate::state::State;

/// Renders a state either as a coordinate list or as a 3x3 board.
///
/// On the board rows are x and columns are y. Each knight shows its index,
/// `*` marks a square with more than one knight and `.` an empty one.
pub struct BoardFormatter<'a> {
    state: &'a State,
    format: Format,
}

impl<'a> BoardFormatter<'a> {
    pub fn new(state: &'a State, format: Format) -> Self {
        Self { state, format }
    }

    fn write_board(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let pos = Pos::new(x, y);
                let mut knights = self.state.iter().enumerate().filter(|&(_, &p)| p == pos);
                let c = match (knights.next(), knights.next()) {
                    (None, _) => '.',
                    (Some((i, _)), None) => (b'0' + i as u8) as char,
                    (Some(_), Some(_)) => '*',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Coords => write!(f, "{}", self.state),
            Format::Board => self.write_board(f),
        }
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_coords() {
        let state = State::initial();
        assert_eq!(
            BoardFormatter::new(&state, Format::Coords).to_string(),
            "[[0, 0], [0, 2], [2, 0], [2, 2]]"
        );
    }

    #[test]
    fn formatting_board() {
        let state = State::new([Pos::new(1, 2), Pos::new(0, 0), Pos::new(2, 1), Pos::new(2, 1)]);
        let expected = r"
1..
..0
.*.
"
        .trim_start_matches('\n');
        let formatter = BoardFormatter::new(&state, Format::Board);
        assert_eq!(formatter.to_string(), expected);
        assert_eq!(format!("{:?}", formatter), expected);
    }
}
