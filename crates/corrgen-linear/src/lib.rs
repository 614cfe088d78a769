//! Linear-system reduction and subspace dependency derivation.
//!
//! Two elimination strategies over the augmented matrix `[A | b]` (partial
//! pivoting Gauss-Jordan as the canonical reduction, full-pivot search as a
//! redundant cross-check), plus the derivation of the algebraic description
//! of an affine subspace: its orthonormal basis, the orthogonal complement,
//! and the reduced equation system every point of the subspace satisfies.

mod dependency;
mod elimination;

pub use dependency::*;
pub use elimination::*;
