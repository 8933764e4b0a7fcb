use crate::data::TOKENS;
use crate::moves::{candidate_offsets, is_legal_move};
use crate::state::State;

/// Every state reachable by moving exactly one knight once.
///
/// Ordered by token index, then by jump order. Doesn't deduplicate.
pub fn expand(state: &State) -> Vec<State> {
    let mut new_states = Vec::with_capacity(TOKENS * 2);

    for i in 0..TOKENS {
        let from = state[i];
        for &to in candidate_offsets(from).iter() {
            if is_legal_move(from, to) {
                new_states.push(state.with_token(i, to));
            }
        }
    }

    new_states
}
