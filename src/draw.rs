//! Random winner selection.
//!
//! The draw shuffles the full participant list and takes the leading entries
//! as winners, so every participant has the same chance of landing in any
//! position. The generator is supplied by the caller: production draws use a
//! freshly seeded `thread_rng()`, tests inject a fixed-seed `StdRng`.

use rand::Rng;

use crate::error::RaffleError;

/// Shuffle `items` in place with a Fisher-Yates pass.
///
/// Each position `i` swaps with an index drawn uniformly from `i..len`, which
/// gives all permutations of `items` equal probability. Empty and
/// single-element slices are left unchanged.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    if items.is_empty() {
        return;
    }
    for i in 0..items.len() - 1 {
        let j = rng.gen_range(i..items.len());
        items.swap(i, j);
    }
}

/// Draw `count` winners from `pool`.
///
/// The pool is consumed: it is shuffled in full and truncated to the winner
/// prefix, so winners come back in selection order (index 0 was drawn first).
///
/// Returns `InvalidWinnerCount` when `count` is zero and
/// `InsufficientParticipants` when `count` exceeds the pool size. Callers
/// validate the same preconditions before printing any diagnostics; the
/// checks here are defensive.
pub fn draw_winners<R: Rng>(
    rng: &mut R,
    mut pool: Vec<String>,
    count: usize,
) -> Result<Vec<String>, RaffleError> {
    if count == 0 {
        return Err(RaffleError::InvalidWinnerCount);
    }
    if count > pool.len() {
        return Err(RaffleError::InsufficientParticipants {
            requested: count,
            available: pool.len(),
        });
    }
    shuffle(rng, &mut pool);
    pool.truncate(count);
    Ok(pool)
}
