use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Add;

/// The board is always 3x3.
pub const BOARD_SIZE: i8 = 3;

/// Number of knights, tokens are told apart by their index.
pub const TOKENS: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Pos { x, y }
    }

    pub fn on_board(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Absolute difference on both axes.
    pub fn displacement(self, other: Pos) -> (i8, i8) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dir {
    pub dx: i8,
    pub dy: i8,
}

impl Dir {
    const fn new(dx: i8, dy: i8) -> Self {
        Dir { dx, dy }
    }
}

// the order matters - it decides which of several equally long solutions is found
pub const KNIGHT_JUMPS: [Dir; 8] = [
    Dir::new(2, -1),
    Dir::new(2, 1),
    Dir::new(-2, -1),
    Dir::new(-2, 1),
    Dir::new(1, 2),
    Dir::new(-1, 2),
    Dir::new(1, -2),
    Dir::new(-1, -2),
];

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos::new(self.x + dir.dx, self.y + dir.dy)
    }
}
