//! Derivation of the algebraic description of a target subspace.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use corrgen_core::{
    append_column, append_columns, gram_schmidt, is_linearly_independent, standard_basis, Bounds,
    Col, LinalgError, Mat, Real,
};

use crate::elimination::{gauss_jordan, SolveError};

/// Algebraic description of an affine subspace: an orthonormal basis, an
/// orthonormal basis of the orthogonal complement, and the reduced linear
/// system every point of the subspace satisfies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    /// Orthonormal basis of the subspace, one column per direction (R×k).
    pub basis: Mat,
    /// Orthonormal basis of the orthogonal complement (R×(R−k)).
    pub normals: Mat,
    /// Reduced augmented system `[A | b]`, shape (R−k)×(R+1); each row is
    /// one linear constraint `a·x = b` on the coordinates.
    pub equations: Mat,
}

impl Dependency {
    /// True when `x` satisfies every equation row within `tol`.
    pub fn is_satisfied_by(&self, x: &Col, tol: Real) -> bool {
        satisfies(&self.equations, x, tol)
    }
}

/// Errors from [`derive_dependency`].
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("point has dimension {point_dim} but basis has {basis_rows} rows")]
    DimensionMismatch { point_dim: usize, basis_rows: usize },
    #[error("basis has no columns")]
    EmptyBasis,
    #[error("basis has {cols} columns in {rows} dimensions; a proper subspace needs fewer columns than rows")]
    NotAProperSubspace { rows: usize, cols: usize },
    #[error("point coordinate {index} = {value} lies outside [{min}, {max}]")]
    PointOutOfBounds { index: usize, value: Real, min: Real, max: Real },
    #[error(transparent)]
    Degenerate(#[from] LinalgError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Derives the [`Dependency`] of the subspace through `point` spanned by
/// the columns of `basis`, restricted to `bounds`.
///
/// The basis columns are orthonormalized in given order, completed to a
/// full-space basis with standard basis vectors, and the orthogonal
/// complement is read off the completed orthonormal basis. Each complement
/// direction `n` then contributes the constraint `n·x = n·point`, and the
/// stacked system is reduced to canonical form.
pub fn derive_dependency(point: &Col, basis: &Mat, bounds: &Bounds) -> Result<Dependency, DeriveError> {
    let dim = basis.nrows();
    if point.len() != dim {
        return Err(DeriveError::DimensionMismatch {
            point_dim: point.len(),
            basis_rows: dim,
        });
    }
    if basis.ncols() == 0 {
        return Err(DeriveError::EmptyBasis);
    }
    if basis.ncols() >= dim {
        return Err(DeriveError::NotAProperSubspace { rows: dim, cols: basis.ncols() });
    }
    for (index, &value) in point.iter().enumerate() {
        if !bounds.contains(value) {
            return Err(DeriveError::PointOutOfBounds {
                index,
                value,
                min: bounds.min,
                max: bounds.max,
            });
        }
    }

    let ortho = gram_schmidt(basis)?;
    let completion = complete_basis(&ortho)?;
    let full = gram_schmidt(&append_columns(&ortho, &completion)?)?;
    let normals = full.columns(ortho.ncols(), dim - ortho.ncols()).into_owned();

    let coeffs = normals.transpose();
    let rhs = &coeffs * point;
    let equations = gauss_jordan(&coeffs, &rhs)?;
    debug!(
        "derived {} normal directions for a {}-dimensional subspace in {} dimensions",
        normals.ncols(),
        ortho.ncols(),
        dim
    );

    #[cfg(debug_assertions)]
    cross_check(&coeffs, &rhs, point, &ortho, &equations)?;

    Ok(Dependency { basis: ortho, normals, equations })
}

/// Completes the orthonormal `basis` to a full-space basis by greedily
/// appending standard basis vectors in ascending index order (first
/// independent candidate wins; the tie-break is part of the contract).
///
/// Returns only the accepted standard vectors, R×(R−k).
pub fn complete_basis(basis: &Mat) -> Result<Mat, DeriveError> {
    let dim = basis.nrows();
    let missing = dim - basis.ncols();
    let mut work = basis.clone();
    let mut accepted = Vec::with_capacity(missing);
    for i in 0..dim {
        if accepted.len() == missing {
            break;
        }
        let e = standard_basis(dim, i);
        if is_linearly_independent(&work, &e)? {
            work = append_column(&work, &e)?;
            accepted.push(e);
        }
    }
    // a rank-k basis always completes with exactly dim−k standard vectors
    debug_assert_eq!(accepted.len(), missing);
    Ok(Mat::from_columns(&accepted))
}

fn satisfies(system: &Mat, x: &Col, tol: Real) -> bool {
    let cols = system.ncols() - 1;
    (0..system.nrows()).all(|r| {
        let lhs: Real = (0..cols).map(|c| system[(r, c)] * x[c]).sum();
        (lhs - system[(r, cols)]).abs() <= tol
    })
}

/// Re-solves the system by full-pivot search and verifies both reductions
/// on generators of the subspace. Only compiled into debug builds.
#[cfg(debug_assertions)]
fn cross_check(
    coeffs: &Mat,
    rhs: &Col,
    point: &Col,
    ortho: &Mat,
    canonical: &Mat,
) -> Result<(), DeriveError> {
    use crate::elimination::total_pivot;

    let alternate = total_pivot(coeffs, rhs)?;
    let mut generators = vec![point.clone()];
    for dir in ortho.column_iter() {
        generators.push(point + dir);
    }
    for g in &generators {
        debug_assert!(
            satisfies(canonical, g, 1e-9),
            "canonical reduction violated on the subspace"
        );
        debug_assert!(
            satisfies(&alternate, g, 1e-9),
            "full-pivot reduction disagrees with the canonical one"
        );
    }
    Ok(())
}
