//! Random samplers for leaf and canopy traits.
//!
//! Two distributions cover every trait in the catalog: a bounded uniform
//! sampler and a normal sampler with optional truncation. Both are seeded
//! with a fixed constant by default so that repeated runs draw identical
//! sequences; pass a custom seed with [`UniformSampler::with_seed`] /
//! [`NormalSampler::with_seed`], or opt out of reproducibility entirely
//! with `unseeded()`.
//!
//! A sampler owns its generator state and advances it on every draw.
//! Instances are cheap to construct and are not synchronized: for
//! concurrent sampling, construct one sampler per thread rather than
//! sharing a single instance.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

pub mod error;
pub use error::SamplerError;

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 2017;

/// Retry budget for truncated-normal draws. The reference rejection loop
/// is unbounded; a near-zero stdv with bounds far from the mean would
/// spin forever, so draws give up with [`SamplerError::Exhausted`] once
/// the budget is spent.
pub const MAX_DRAW_ATTEMPTS: usize = 10_000;

/// Common capability of all trait samplers: draw one value.
pub trait Sampler {
    fn sample(&mut self) -> Result<f64, SamplerError>;
}

/// Uniform random sample generator over `[min, max)`.
#[derive(Debug, Clone)]
pub struct UniformSampler {
    min: f64,
    max: f64,
    rng: ChaCha8Rng,
}

impl UniformSampler {
    /// Create a uniform sampler over `[min, max)`, seeded with
    /// [`DEFAULT_SEED`].
    pub fn new(min: f64, max: f64) -> Result<Self, SamplerError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SamplerError::InvalidBounds { min, max });
        }

        Ok(Self {
            min,
            max,
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
        })
    }

    /// Reseed the sampler for a custom reproducible sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Reseed the sampler from OS entropy (non-reproducible).
    pub fn unseeded(mut self) -> Self {
        self.rng = ChaCha8Rng::from_entropy();
        self
    }

    /// Draw a uniform sample from the min/max range.
    pub fn sample(&mut self) -> f64 {
        // Degenerate range: gen_range panics on an empty interval.
        if self.min == self.max {
            return self.min;
        }

        self.rng.gen_range(self.min..self.max)
    }
}

impl Sampler for UniformSampler {
    fn sample(&mut self) -> Result<f64, SamplerError> {
        Ok(UniformSampler::sample(self))
    }
}

/// Normally distributed random sample generator with optional truncation.
#[derive(Debug, Clone)]
pub struct NormalSampler {
    mean: f64,
    stdv: f64,
    min: Option<f64>,
    max: Option<f64>,
    dist: Normal<f64>,
    rng: ChaCha8Rng,
}

impl NormalSampler {
    /// Create an unbounded normal sampler, seeded with [`DEFAULT_SEED`].
    pub fn new(mean: f64, stdv: f64) -> Result<Self, SamplerError> {
        Self::truncated(mean, stdv, None, None)
    }

    /// Create a normal sampler truncated to `[min, max]`.
    pub fn bounded(mean: f64, stdv: f64, min: f64, max: f64) -> Result<Self, SamplerError> {
        Self::truncated(mean, stdv, Some(min), Some(max))
    }

    /// Create a normal sampler with any combination of bounds. Draws
    /// outside the bounds are rejected and redrawn, up to
    /// [`MAX_DRAW_ATTEMPTS`] times per sample.
    pub fn truncated(
        mean: f64,
        stdv: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, SamplerError> {
        if !mean.is_finite() {
            return Err(SamplerError::NonFinite {
                name: "mean",
                value: mean,
            });
        }
        if !stdv.is_finite() || stdv < 0.0 {
            return Err(SamplerError::InvalidStdv(stdv));
        }
        if let Some(lo) = min {
            if !lo.is_finite() {
                return Err(SamplerError::NonFinite {
                    name: "min",
                    value: lo,
                });
            }
        }
        if let Some(hi) = max {
            if !hi.is_finite() {
                return Err(SamplerError::NonFinite {
                    name: "max",
                    value: hi,
                });
            }
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(SamplerError::InvalidBounds { min: lo, max: hi });
            }
        }

        let dist = Normal::new(mean, stdv).map_err(|_| SamplerError::InvalidStdv(stdv))?;

        Ok(Self {
            mean,
            stdv,
            min,
            max,
            dist,
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
        })
    }

    /// Reseed the sampler for a custom reproducible sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Reseed the sampler from OS entropy (non-reproducible).
    pub fn unseeded(mut self) -> Self {
        self.rng = ChaCha8Rng::from_entropy();
        self
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdv(&self) -> f64 {
        self.stdv
    }

    /// Draw a sample, redrawing until it lands within the bounds.
    pub fn sample(&mut self) -> Result<f64, SamplerError> {
        if self.min.is_none() && self.max.is_none() {
            return Ok(self.dist.sample(&mut self.rng));
        }

        for _ in 0..MAX_DRAW_ATTEMPTS {
            let rnd = self.dist.sample(&mut self.rng);
            if self.in_bounds(rnd) {
                return Ok(rnd);
            }
        }

        Err(SamplerError::Exhausted {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }

    fn in_bounds(&self, value: f64) -> bool {
        if let Some(lo) = self.min {
            if value < lo {
                return false;
            }
        }
        if let Some(hi) = self.max {
            if value > hi {
                return false;
            }
        }
        true
    }
}

impl Sampler for NormalSampler {
    fn sample(&mut self) -> Result<f64, SamplerError> {
        NormalSampler::sample(self)
    }
}
