//! Fog of war: randomized perturbation of partially observed quantities.

use rand::{Rng, RngCore};

use crate::model::queue::Queue;

/// Inclusive band a perturbed reading of `amount` falls into.
///
/// `(0, 0)` for a zero amount: nothing to obscure.
pub fn bounds(amount: u64, accuracy: f64) -> (u64, u64) {
    if amount == 0 {
        return (0, 0);
    }
    let q = amount as f64;
    let low = (q * accuracy).round() as u64;
    let high = (q / accuracy).round() as u64;
    (low, high.max(low))
}

/// One perturbed reading of `amount`, uniform over [`bounds`].
///
/// Zero is reported exactly and consumes no randomness.
pub fn obscure(amount: u64, accuracy: f64, rng: &mut dyn RngCore) -> u64 {
    if amount == 0 {
        return 0;
    }
    let (low, high) = bounds(amount, accuracy);
    rng.random_range(low..=high)
}

/// Perturb every bucket of a queue independently, in key then hour order.
pub fn obscure_queue<K: Ord + Clone>(
    queue: &Queue<K>,
    accuracy: f64,
    rng: &mut dyn RngCore,
) -> Queue<K> {
    queue
        .iter()
        .map(|(key, buckets)| {
            let obscured = buckets
                .iter()
                .map(|(&hour, &amount)| (hour, obscure(amount, accuracy, rng)))
                .collect();
            (key.clone(), obscured)
        })
        .collect()
}
