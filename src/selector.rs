//! Weighted random choice biased towards strong candidates.
//!
//! Candidates are sorted by weight, heaviest first, and a threshold is drawn
//! from `[0, 0.6 × total]`. Walking down the sorted list and subtracting each
//! weight, the first candidate that brings the threshold to zero or below
//! wins. Because the threshold never reaches past 60% of the total mass, the
//! light tail is picked less often than its share of the weight would
//! suggest. That bias is wanted: strong matches dominate while weaker ones
//! still come up now and then.

use rand::Rng;

/// Upper bound of the threshold draw, as a fraction of the total weight.
pub const THRESHOLD_CAP: f64 = 0.6;

/// Picks one item from `(weight, item)` pairs.
///
/// Equal weights keep their input order. Zero-weight items are only returned
/// when every weight is zero.
///
/// # Panics
///
/// Panics if `candidates` is empty. Callers fall back before asking.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use segue::selector::choose;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let pick = choose(vec![(50.0, "B"), (30.0, "C")], &mut rng);
/// assert!(pick == "B" || pick == "C");
/// ```
pub fn choose<T, R: Rng + ?Sized>(mut candidates: Vec<(f64, T)>, rng: &mut R) -> T {
    assert!(
        !candidates.is_empty(),
        "weighted choice needs at least one candidate"
    );

    candidates.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    let total: f64 = candidates.iter().map(|(weight, _)| weight).sum();
    let mut threshold = rng.gen_range(0.0..=THRESHOLD_CAP) * total;

    let mut last = None;
    for (weight, item) in candidates {
        threshold -= weight;
        if threshold <= 0.0 {
            return item;
        }
        last = Some(item);
    }
    // Only reachable with non-finite weights.
    last.expect("candidates is not empty")
}
