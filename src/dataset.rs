//! The in-memory sample population shared by every accumulation strategy.

use rand::Rng;

use crate::numeric::Fixed;
use crate::sampler::UniformFixed;

/// An ordered, fixed-length population of samples.
///
/// Built once, then read once per accumulation strategy. Samples are owned
/// exclusively by the dataset and never mutated after construction, so the
/// strategies all observe the identical population. The full population is
/// materialized because the count-based strategies need the total length up
/// front and a second pass over the same values.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Fixed>,
}

impl Dataset {
    /// Draw `count` samples in sequence and retain them in draw order.
    ///
    /// Generation order is deterministic given the generator state, so the
    /// same seed and count always build the same dataset. Memory is reserved
    /// up front; exhausting it aborts the process, which is the intended
    /// behavior for a population that must be held whole.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn build<R: Rng + ?Sized>(sampler: &UniformFixed, rng: &mut R, count: usize) -> Dataset {
        assert!(count > 0, "dataset sample count must be positive");
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(sampler.sample(rng));
        }
        Dataset { samples }
    }

    /// Wrap an existing sequence of samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn from_samples(samples: Vec<Fixed>) -> Dataset {
        assert!(!samples.is_empty(), "dataset must contain at least one sample");
        Dataset { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty. Always false for a built dataset; this
    /// exists to keep `len` honest.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Fixed> {
        self.samples.get(index).copied()
    }

    /// Iterate over the samples in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fixed> {
        self.samples.iter()
    }

    /// The samples as a slice, in draw order.
    pub fn as_slice(&self) -> &[Fixed] {
        &self.samples
    }
}
