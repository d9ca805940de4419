//! Slice-level kernels behind the [`VectorULong`](super::VectorULong)
//! operators.
//!
//! Working on plain slices keeps the rules testable for inputs a vector can
//! never hold, such as the empty sequence.

/// Element at `index`, or 0 past the end (zero-padding broadcast).
#[inline]
pub fn lane(values: &[u64], index: usize) -> u64 {
    values.get(index).copied().unwrap_or(0)
}

/// Combine two sequences lane by lane over `max(lhs.len(), rhs.len())`
/// lanes, padding the shorter one with zeros.
pub fn zip_padded<F>(lhs: &[u64], rhs: &[u64], mut f: F) -> Vec<u64>
where
    F: FnMut(u64, u64) -> u64,
{
    let len = lhs.len().max(rhs.len());
    (0..len).map(|i| f(lane(lhs, i), lane(rhs, i))).collect()
}

/// Fallible variant of [`zip_padded`]; stops at the first failing lane.
pub fn try_zip_padded<F, E>(lhs: &[u64], rhs: &[u64], mut f: F) -> Result<Vec<u64>, E>
where
    F: FnMut(u64, u64) -> Result<u64, E>,
{
    let len = lhs.len().max(rhs.len());
    (0..len).map(|i| f(lane(lhs, i), lane(rhs, i))).collect()
}

/// True iff the sequence is non-empty and holds no zero.
pub fn is_truthy(values: &[u64]) -> bool {
    !values.is_empty() && values.iter().all(|&v| v != 0)
}

/// Every shared lane must be strictly greater. Past the shared prefix the
/// longer side wins; two equal-length sequences are only "greater" when
/// they are non-empty.
pub fn greater_than(lhs: &[u64], rhs: &[u64]) -> bool {
    let shared = lhs.len().min(rhs.len());
    if lhs[..shared].iter().zip(&rhs[..shared]).any(|(a, b)| a <= b) {
        return false;
    }
    lhs.len() > rhs.len() || (lhs.len() == rhs.len() && shared > 0)
}

/// Every shared lane must be greater or equal, and `lhs` must be at least
/// as long as `rhs`.
pub fn greater_or_equal(lhs: &[u64], rhs: &[u64]) -> bool {
    let shared = lhs.len().min(rhs.len());
    if lhs[..shared].iter().zip(&rhs[..shared]).any(|(a, b)| a < b) {
        return false;
    }
    lhs.len() >= rhs.len()
}

/// Defined as the negation of [`greater_or_equal`], not computed on its own.
/// The resulting relation is not a total order: for `[1, 5]` and `[2]`
/// neither side is greater, yet both are "less than" the other.
pub fn less_than(lhs: &[u64], rhs: &[u64]) -> bool {
    !greater_or_equal(lhs, rhs)
}

/// Defined as the negation of [`greater_than`].
pub fn less_or_equal(lhs: &[u64], rhs: &[u64]) -> bool {
    !greater_than(lhs, rhs)
}
