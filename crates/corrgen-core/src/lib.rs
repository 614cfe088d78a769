//! Numeric substrate for the correlation-cluster generator workspace.
//!
//! This crate provides the shared building blocks the higher layers are
//! written against:
//! - scalar and dense matrix aliases over nalgebra,
//! - the bounding interval applied per coordinate,
//! - a small linear-algebra kernel for subspace handling (column
//!   concatenation and normalization, independence tests, projections,
//!   Gram-Schmidt orthonormalization).
//!
//! Matrix arithmetic, norms, transposition, and element access come
//! directly from nalgebra; only the operations with subspace-specific
//! contracts live here.

mod bounds;
mod linalg;
mod types;

pub use bounds::*;
pub use linalg::*;
pub use types::*;
