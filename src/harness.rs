//! Campaign orchestration: wiring the sampler, dataset and strategies
//! together and timing each strategy.

use std::time::{Duration, Instant};

use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::Config;
use crate::constants::{SEED_STREAM, SEED_WORDS};
use crate::dataset::Dataset;
use crate::numeric::NumericResult;
use crate::result::Triple;
use crate::sampler::{seeded_rng, UniformFixed};
use crate::statistics::accumulate::{self, AlgorithmKind};
use crate::statistics::drift::{self, DriftReport};

/// One strategy's result together with its identity and wall time.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmReport {
    /// Which strategy produced the result.
    pub kind: AlgorithmKind,
    /// The three-track result.
    pub result: Triple,
    /// Wall time spent inside the strategy.
    pub elapsed: Duration,
}

/// Entry point for a comparison campaign.
///
/// The harness owns the configuration and hands out the pieces in the order
/// the driver wants them: the drift demonstration, a freshly built dataset,
/// then each accumulation strategy against that dataset.
#[derive(Debug, Clone)]
pub struct Harness {
    config: Config,
}

impl Harness {
    /// Create a harness over a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics when the configuration is internally inconsistent; the
    /// configuration is compiled in, so this is a programming error.
    pub fn new(config: Config) -> Harness {
        if let Err(violation) = config.validate() {
            panic!("invalid configuration: {violation}");
        }
        Harness { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A fresh deterministic bit source at the campaign seed.
    pub fn rng(&self) -> ChaCha20Rng {
        seeded_rng(SEED_WORDS, SEED_STREAM)
    }

    /// The uniform sampler over the configured range.
    pub fn sampler(&self) -> UniformFixed {
        UniformFixed::new(
            self.config.range_lower,
            self.config.range_upper,
            self.config.sample_scale,
        )
    }

    /// Draw the configured number of samples into memory.
    pub fn build_dataset(&self) -> Dataset {
        let started = Instant::now();
        let dataset = Dataset::build(&self.sampler(), &mut self.rng(), self.config.sample_count);
        debug!(
            samples = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset materialized"
        );
        dataset
    }

    /// Run the drift demonstration.
    pub fn drift(&self) -> NumericResult<DriftReport> {
        drift::run(&self.config)
    }

    /// Run one accumulation strategy against a dataset, timing it.
    pub fn accumulate(
        &self,
        kind: AlgorithmKind,
        dataset: &Dataset,
    ) -> NumericResult<AlgorithmReport> {
        let started = Instant::now();
        let result = accumulate::run(kind, dataset, self.config.fractional_digits)?;
        let elapsed = started.elapsed();
        debug!(kind = ?kind, elapsed_ms = elapsed.as_millis() as u64, "strategy finished");
        Ok(AlgorithmReport {
            kind,
            result,
            elapsed,
        })
    }
}
