//! Dense linear-algebra kernel for subspace handling.
//!
//! Free functions over [`Mat`]/[`Col`]: column concatenation and
//! normalization, linear-independence tests, orthogonal projection and
//! distance to a span, and classical Gram-Schmidt orthonormalization.
//! Pure functions return new values; the only in-place mutator is
//! [`normalize_columns`]. Dimension preconditions that depend on caller
//! data are reported as [`LinalgError`]; plain element indexing keeps
//! nalgebra's panicking contract.

use thiserror::Error;

use crate::{Col, Mat, Real};

/// Relative threshold below which a residual counts as linearly dependent.
pub const INDEPENDENCE_EPS: Real = 1e-10;

/// Errors from the matrix kernel.
#[derive(Debug, Error)]
pub enum LinalgError {
    #[error("dimension mismatch: left operand has {left_rows} rows, right operand has {right_rows}")]
    DimensionMismatch { left_rows: usize, right_rows: usize },
    #[error("column {col} has zero norm and cannot be normalized")]
    ZeroNormColumn { col: usize },
    #[error("column {col} is linearly dependent on the preceding columns")]
    DependentColumn { col: usize },
}

/// Horizontal concatenation `[a | b]`.
pub fn append_columns(a: &Mat, b: &Mat) -> Result<Mat, LinalgError> {
    if a.nrows() != b.nrows() {
        return Err(LinalgError::DimensionMismatch {
            left_rows: a.nrows(),
            right_rows: b.nrows(),
        });
    }
    let mut out = Mat::zeros(a.nrows(), a.ncols() + b.ncols());
    out.view_mut((0, 0), a.shape()).copy_from(a);
    out.view_mut((0, a.ncols()), b.shape()).copy_from(b);
    Ok(out)
}

/// Horizontal concatenation `[a | v]` of a matrix and one column.
pub fn append_column(a: &Mat, v: &Col) -> Result<Mat, LinalgError> {
    if a.nrows() != v.len() {
        return Err(LinalgError::DimensionMismatch {
            left_rows: a.nrows(),
            right_rows: v.len(),
        });
    }
    let mut out = Mat::zeros(a.nrows(), a.ncols() + 1);
    out.view_mut((0, 0), a.shape()).copy_from(a);
    out.set_column(a.ncols(), v);
    Ok(out)
}

/// The `i`-th standard basis vector of dimension `dim`.
pub fn standard_basis(dim: usize, i: usize) -> Col {
    let mut e = Col::zeros(dim);
    e[i] = 1.0;
    e
}

/// Divides each column by its Euclidean norm, in place.
pub fn normalize_columns(m: &mut Mat) -> Result<(), LinalgError> {
    for col in 0..m.ncols() {
        let norm = m.column(col).norm();
        if norm == 0.0 {
            return Err(LinalgError::ZeroNormColumn { col });
        }
        m.column_mut(col).unscale_mut(norm);
    }
    Ok(())
}

/// Orthogonal projection of `v` onto the column space of `basis`.
///
/// Assumes, without re-verifying, that the columns of `basis` are
/// orthonormal.
pub fn project_onto_span(basis: &Mat, v: &Col) -> Col {
    basis * (basis.transpose() * v)
}

/// Euclidean distance from `p` to the affine subspace through `origin`
/// spanned by the orthonormal columns of `basis`.
pub fn distance_to_span(p: &Col, origin: &Col, basis: &Mat) -> Real {
    let centered = p - origin;
    (&centered - project_onto_span(basis, &centered)).norm()
}

/// Classical Gram-Schmidt orthonormalization of the columns of `m`.
///
/// Columns are processed in given order and keep that order in the result;
/// there is no pivoting, since the order of the supplied directions is
/// caller intent. A zero column or a column lying in the span of its
/// predecessors fails with [`LinalgError`].
pub fn gram_schmidt(m: &Mat) -> Result<Mat, LinalgError> {
    let mut v = m.clone();
    for i in 0..v.ncols() {
        let u_i = m.column(i).into_owned();
        if u_i.norm() == 0.0 {
            return Err(LinalgError::ZeroNormColumn { col: i });
        }
        let mut v_i = u_i.clone();
        for j in 0..i {
            let v_j = v.column(j).into_owned();
            let scale = u_i.dot(&v_j) / v_j.dot(&v_j);
            v_i -= &v_j * scale;
        }
        if v_i.norm() <= INDEPENDENCE_EPS * u_i.norm() {
            return Err(LinalgError::DependentColumn { col: i });
        }
        v.set_column(i, &v_i);
    }
    normalize_columns(&mut v)?;
    Ok(v)
}

/// Tests whether `candidate` lies outside the column span of `basis`.
///
/// Neither input is mutated. The columns of `basis` must themselves be
/// linearly independent.
pub fn is_linearly_independent(basis: &Mat, candidate: &Col) -> Result<bool, LinalgError> {
    if basis.nrows() != candidate.len() {
        return Err(LinalgError::DimensionMismatch {
            left_rows: basis.nrows(),
            right_rows: candidate.len(),
        });
    }
    let q = gram_schmidt(basis)?;
    let residual = candidate - project_onto_span(&q, candidate);
    Ok(residual.norm() > INDEPENDENCE_EPS * candidate.norm().max(1.0))
}
