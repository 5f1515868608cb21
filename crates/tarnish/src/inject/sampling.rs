//! Deterministic random selection over row indices.

/// Select `count` distinct elements from `pool`, without replacement.
///
/// Runs a partial Fisher-Yates pass over a copy of the pool, so the result
/// depends only on the generator state and the pool order. `count` larger
/// than the pool is clamped to the pool size.
pub fn sample_without_replacement(
    rng: &mut fastrand::Rng,
    pool: &[usize],
    count: usize,
) -> Vec<usize> {
    let mut pool = pool.to_vec();
    let count = count.min(pool.len());

    for i in 0..count {
        let j = rng.usize(i..pool.len());
        pool.swap(i, j);
    }

    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_distinct_and_from_pool() {
        let pool: Vec<usize> = (10..60).collect();
        let mut rng = fastrand::Rng::with_seed(1);

        let picked = sample_without_replacement(&mut rng, &pool, 20);

        assert_eq!(picked.len(), 20);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(picked.iter().all(|i| pool.contains(i)));
    }

    #[test]
    fn test_sample_clamps_to_pool_size() {
        let pool = vec![1, 2, 3];
        let mut rng = fastrand::Rng::with_seed(1);

        let picked = sample_without_replacement(&mut rng, &pool, 100);

        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_sample_is_deterministic() {
        let pool: Vec<usize> = (0..500).collect();

        let a = sample_without_replacement(&mut fastrand::Rng::with_seed(7), &pool, 50);
        let b = sample_without_replacement(&mut fastrand::Rng::with_seed(7), &pool, 50);
        let c = sample_without_replacement(&mut fastrand::Rng::with_seed(8), &pool, 50);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(sample_without_replacement(&mut rng, &[], 10).is_empty());
    }
}
