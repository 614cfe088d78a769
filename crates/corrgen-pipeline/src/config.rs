//! Generation request configuration.

use serde::{Deserialize, Serialize};

use corrgen_core::{Bounds, Col, Mat, Real};

use crate::GenerateError;

/// Tunables shared by every generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Bounding interval applied to every coordinate.
    pub bounds: Bounds,
    /// Jitter magnitude as a percentage of the bounding-box diagonal.
    pub jitter_pct: Real,
    /// Seed for the per-request random stream.
    pub seed: u64,
    /// Rejection-sampling budget per requested point.
    pub max_attempts_per_point: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            jitter_pct: 0.1,
            seed: 210_571,
            max_attempts_per_point: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Nominal jitter standard deviation at dimensionality `dim`,
    /// `jitter_pct/100` of the bounding-box diagonal.
    pub fn jitter_std(&self, dim: usize) -> Real {
        self.jitter_pct / 100.0 * self.bounds.diagonal(dim)
    }

    pub(crate) fn validate(&self) -> Result<(), GenerateError> {
        if !self.bounds.is_valid() {
            return Err(GenerateError::InvalidConfig {
                reason: format!(
                    "bounds [{}, {}] are empty or not finite",
                    self.bounds.min, self.bounds.max
                ),
            });
        }
        if !self.jitter_pct.is_finite() || self.jitter_pct < 0.0 {
            return Err(GenerateError::InvalidConfig {
                reason: format!("jitter percentage {} must be finite and non-negative", self.jitter_pct),
            });
        }
        if self.max_attempts_per_point == 0 {
            return Err(GenerateError::InvalidConfig {
                reason: "max_attempts_per_point must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// One correlation-cluster request: the base point, the spanning
/// directions, and how many points to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationInput {
    /// Base point of the affine subspace, length R.
    pub point: Col,
    /// Columns span the subspace, R×k with k < R.
    pub basis: Mat,
    /// Number of points to generate.
    pub num_points: usize,
    /// Perturb points off the subspace before the bounding check.
    #[serde(default)]
    pub jitter: bool,
}
