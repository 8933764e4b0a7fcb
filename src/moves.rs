use crate::data::{Pos, KNIGHT_JUMPS};

/// All 8 knight jumps from `pos`, including ones that leave the board.
pub fn candidate_offsets(pos: Pos) -> [Pos; 8] {
    let mut ret = [pos; 8];
    for (cand, &dir) in ret.iter_mut().zip(KNIGHT_JUMPS.iter()) {
        *cand = pos + dir;
    }
    ret
}

/// A move is legal if it's knight-shaped and lands on the board.
///
/// Occupancy is deliberately not checked - knights can share a square.
/// Adding that check would change solution costs.
pub fn is_legal_move(from: Pos, to: Pos) -> bool {
    if !to.on_board() {
        return false;
    }
    match from.displacement(to) {
        (2, 1) | (1, 2) => true,
        _ => false,
    }
}
