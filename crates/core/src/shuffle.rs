//! Uniform shuffling of answer lists.
//!
//! Sorting with a comparator that returns a random sign does not produce a
//! uniform permutation, so this module always goes through Fisher-Yates
//! (`SliceRandom::shuffle`).

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a shuffled copy of `items` using the thread-local RNG.
///
/// The input slice is left untouched.
#[must_use]
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut rand::rng())
}

/// Returns a shuffled copy of `items` drawing randomness from `rng`.
pub fn shuffled_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
