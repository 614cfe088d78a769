//! Synthetic correlation-cluster benchmark data with ground-truth equations.
//!
//! Generates points on (or, with jitter, near) a low-dimensional linear
//! subspace inside a bounding hypercube, together with the system of
//! linear equations that exactly characterizes the subspace. The labeled
//! point lists serve as ground truth for evaluating subspace and
//! correlation clustering algorithms.
//!
//! The workspace is layered:
//! - [`core`]: matrix kernel, bounds, scalar aliases,
//! - [`linear`]: elimination solvers and the subspace dependency deriver,
//! - [`pipeline`]: configuration, point generation, diagnostics, output.
//!
//! # Example
//!
//! ```
//! use corrgen::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::default();
//! let input = CorrelationInput {
//!     point: Col::from_column_slice(&[0.5, 0.5, 0.5]),
//!     basis: Mat::from_column_slice(3, 1, &[1.0, -0.5, 1.0]),
//!     num_points: 100,
//!     jitter: false,
//! };
//! let result = generate_correlation(&input, &config)?;
//! assert_eq!(result.dependency.normals.ncols(), 2);
//!
//! let mut sink = Vec::new();
//! write_dataset(&mut sink, &result, Some("g1"))?;
//! # Ok(())
//! # }
//! ```

/// Numeric substrate: matrix aliases, bounds, linear-algebra kernel.
pub mod core {
    pub use corrgen_core::*;
}

/// Elimination solvers and subspace dependency derivation.
pub mod linear {
    pub use corrgen_linear::*;
}

/// Generation pipeline: config, sampling, diagnostics, output.
pub mod pipeline {
    pub use corrgen_pipeline::*;
}

/// The types and entry points most callers need.
pub mod prelude {
    pub use corrgen_core::{Bounds, Col, Mat, Real};
    pub use corrgen_linear::{derive_dependency, Dependency};
    pub use corrgen_pipeline::{
        generate_correlation, write_dataset, CorrelationInput, GeneratorConfig, GeneratorResult,
    };
}
