//! Seeded random stream for texture generation.
//!
//! Every output run owns one stream. Two runs never share one, so the
//! order in which runs execute cannot change what either of them draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;

/// A deterministic pseudo-random stream.
///
/// # Example
/// ```
/// use hexcut::rng::SeedStream;
///
/// let mut stream = SeedStream::new(12345);
/// let value = stream.next_f64(); // Returns value in [0, 1)
/// ```
#[derive(Clone, Debug)]
pub struct SeedStream {
    inner: StdRng,
}

impl SeedStream {
    /// Create a new stream. The same seed always yields the same sequence.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { inner: StdRng::seed_from_u64(seed) }
    }

    /// Get a random f64 in the range [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Get a random f64 in the range [min, max).
    #[inline]
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Get a random index in the range [0, len).
    #[inline]
    pub fn next_index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    /// Two different indices in [0, len), uniformly among ordered pairs.
    pub fn next_distinct_pair(&mut self, len: usize) -> (usize, usize) {
        debug_assert!(len >= 2);
        let first = self.next_index(len);
        let mut second = self.next_index(len - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }

    /// Draw one value from an arbitrary distribution.
    #[inline]
    pub fn sample<D: Distribution<f64>>(&mut self, distribution: &D) -> f64 {
        distribution.sample(&mut self.inner)
    }
}
