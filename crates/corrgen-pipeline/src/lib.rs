//! End-to-end synthetic correlation-cluster generation.
//!
//! [`generate_correlation`] turns one [`CorrelationInput`] and a
//! [`GeneratorConfig`] into a [`GeneratorResult`]: it validates the
//! request, derives the algebraic description of the target subspace,
//! draws the points by bounded rejection sampling (optionally perturbed
//! off the subspace by Gaussian jitter), and measures the realized noise.
//! [`write_dataset`] serializes a result to a line-oriented text sink.

mod config;
mod diagnostics;
mod generator;
mod output;

pub use config::*;
pub use diagnostics::*;
pub use generator::*;
pub use output::*;

use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use corrgen_core::{Col, Real};
use corrgen_linear::{derive_dependency, Dependency, DeriveError};

/// Errors from the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },
    #[error(transparent)]
    Derive(#[from] DeriveError),
    #[error("generated only {accepted} of {requested} points in {attempts} attempts; the subspace may barely intersect the bounds")]
    Unreachable { accepted: usize, requested: usize, attempts: usize },
}

/// Jitter actually applied to a generated cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterInfo {
    /// Configured percentage of the bounding-box diagonal.
    pub percent: Real,
    /// Nominal standard deviation per normal direction.
    pub std_dev: Real,
}

/// A generated cluster: the points, the algebraic description of the
/// subspace they were drawn from, and the realized noise level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorResult {
    pub points: Vec<Col>,
    pub dependency: Dependency,
    /// Jitter summary, present when the request enabled jitter.
    pub jitter: Option<JitterInfo>,
    /// Measured RMS orthogonal distance of the points to the subspace.
    pub std_dev: Real,
}

/// Generates one correlation cluster.
///
/// The subspace dependency is derived once per request; the points are
/// then drawn from a random stream seeded with `config.seed`, so equal
/// requests produce equal results.
pub fn generate_correlation(
    input: &CorrelationInput,
    config: &GeneratorConfig,
) -> Result<GeneratorResult, GenerateError> {
    config.validate()?;
    let dependency = derive_dependency(&input.point, &input.basis, &config.bounds)?;

    let jitter = input.jitter.then(|| JitterInfo {
        percent: config.jitter_pct,
        std_dev: config.jitter_std(input.point.len()),
    });

    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_attempts = config.max_attempts_per_point.saturating_mul(input.num_points);
    let points = sample_points(
        &input.point,
        &dependency.basis,
        &dependency.normals,
        input.num_points,
        jitter.map(|j| j.std_dev),
        &config.bounds,
        max_attempts,
        &mut rng,
    )?;

    let std_dev = standard_deviation(&points, &input.point, &dependency.basis);
    info!("generated {} points, measured standard deviation {std_dev}", points.len());

    Ok(GeneratorResult { points, dependency, jitter, std_dev })
}
