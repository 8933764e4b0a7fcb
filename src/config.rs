use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `[[x, y], ...]`
    Coords,
    Board,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Coords => write!(f, "coords"),
            Format::Board => write!(f, "board"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coords" => Ok(Format::Coords),
            "board" => Ok(Format::Board),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}
