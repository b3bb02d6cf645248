//! Evolution engine: advances the ring by one generation.

use super::rule::{NeighborhoodRule, StateMix};
use super::state::{State, WORDS};

/// Computes the generation that follows `state`.
///
/// Every new word is derived from the untouched previous generation, so no
/// cell ever sees an already-updated neighbor. Word `i` borrows its edge
/// neighbors from words `i - 1` and `i + 1` (mod 4).
pub fn step<R: NeighborhoodRule, M: StateMix>(state: &State) -> State {
    let old = state.words();
    let mut new = [0u64; WORDS];
    for (i, slot) in new.iter_mut().enumerate() {
        let prev = old[(i + WORDS - 1) % WORDS];
        let next = old[(i + 1) % WORDS];
        let evolved = R::evolve_word(prev, old[i], next);
        *slot = M::diffuse(i, evolved, old[i]);
    }
    State::from_words(new)
}
