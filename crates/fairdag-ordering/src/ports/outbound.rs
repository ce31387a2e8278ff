//! Outbound Ports (Driven Ports / SPI)

/// Source of randomness for strong-edge sampling.
///
/// The DAG builder never touches a global RNG; every random choice flows
/// through this port so runs are reproducible under test.
pub trait RandomSource: Send {
    /// Uniform index in `[0, bound)`. `bound == 0` returns 0.
    fn next_index(&mut self, bound: usize) -> usize;

    /// `k` distinct indices drawn uniformly from `[0, n)` without
    /// replacement, via partial Fisher-Yates over the index range.
    fn sample_distinct(&mut self, n: usize, k: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..n).collect();
        let k = k.min(n);
        for i in 0..k {
            let j = i + self.next_index(n - i);
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}
