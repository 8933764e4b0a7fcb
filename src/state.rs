use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::data::{Pos, TOKENS};

/// Positions of all knights, indexed by token.
///
/// Equality is element-wise so two states where knights swapped places are different.
/// It's `Copy` (8 bytes) - expanding always produces new values, nothing is shared.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    tokens: [Pos; TOKENS],
}

impl State {
    pub const fn new(tokens: [Pos; TOKENS]) -> Self {
        State { tokens }
    }

    /// Knights in the four corners.
    pub const fn initial() -> Self {
        State::new([Pos::new(0, 0), Pos::new(0, 2), Pos::new(2, 0), Pos::new(2, 2)])
    }

    pub fn with_token(self, index: usize, pos: Pos) -> Self {
        let mut tokens = self.tokens;
        tokens[index] = pos;
        State { tokens }
    }

    pub fn tokens(&self) -> &[Pos; TOKENS] {
        &self.tokens
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Pos> {
        self.tokens.iter()
    }
}

impl Index<usize> for State {
    type Output = Pos;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Pos;
    type IntoIter = ::std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pos)?;
        }
        write!(f, "]")
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_state() {
        assert_eq!(
            State::initial().to_string(),
            "[[0, 0], [0, 2], [2, 0], [2, 2]]"
        );
    }

    #[test]
    fn equality_is_index_sensitive() {
        let a = State::initial();
        let b = State::new([Pos::new(0, 2), Pos::new(0, 0), Pos::new(2, 0), Pos::new(2, 2)]);
        assert_ne!(a, b);
        assert_eq!(a, State::initial());
    }

    #[test]
    fn with_token_returns_new_value() {
        let initial = State::initial();
        let moved = initial.with_token(1, Pos::new(1, 0));

        assert_eq!(initial[1], Pos::new(0, 2));
        assert_eq!(moved[1], Pos::new(1, 0));
        for i in [0, 2, 3].iter() {
            assert_eq!(initial[*i], moved[*i]);
        }
    }

    #[test]
    fn iterating() {
        let state = State::initial();
        let mut v = Vec::new();
        for &pos in &state {
            v.push(pos);
        }
        v.extend(state.iter().cloned());
        assert_eq!(v.len(), 8);
        assert_eq!(&v[..4], &state.tokens()[..]);
        assert_eq!(&v[4..], &state.tokens()[..]);
    }
}
