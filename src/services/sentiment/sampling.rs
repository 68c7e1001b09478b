// Sampling
// Uniform draws without replacement for display samples

use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `min(k, items.len())` distinct items uniformly at random.
/// Returned order is unspecified.
pub fn sample_without_replacement<T, R>(items: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if k == 0 || items.is_empty() {
        return Vec::new();
    }
    items.choose_multiple(rng, k.min(items.len())).cloned().collect()
}
