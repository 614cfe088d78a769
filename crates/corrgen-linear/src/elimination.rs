//! Gaussian elimination over the augmented matrix `[A | b]`.

use thiserror::Error;

use corrgen_core::{Col, Mat, Real};

/// Pivot magnitudes at or below this threshold count as zero.
pub const PIVOT_EPS: Real = 1e-10;

/// Errors from the elimination routines.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("coefficient matrix has {rows} rows but right-hand side has {rhs_len}")]
    ShapeMismatch { rows: usize, rhs_len: usize },
    #[error("system is singular: {pivots} pivots found for {rows} equations")]
    Singular { pivots: usize, rows: usize },
    #[error("system is inconsistent: row {row} reduces to 0 = {rhs}")]
    Inconsistent { row: usize, rhs: Real },
}

fn augmented(a: &Mat, b: &Col) -> Mat {
    let mut aug = Mat::zeros(a.nrows(), a.ncols() + 1);
    aug.view_mut((0, 0), a.shape()).copy_from(a);
    aug.set_column(a.ncols(), b);
    aug
}

/// Reduces `[a | b]` to reduced row-echelon form with partial pivoting.
///
/// The result has unit pivots and zeros above and below each pivot; for a
/// square well-posed system it is `[I | x]` and the solution reads off the
/// trailing column. Fails with [`SolveError::Singular`] when fewer pivots
/// than rows exist and with [`SolveError::Inconsistent`] when a zeroed row
/// keeps a non-zero right-hand side.
pub fn gauss_jordan(a: &Mat, b: &Col) -> Result<Mat, SolveError> {
    if a.nrows() != b.len() {
        return Err(SolveError::ShapeMismatch { rows: a.nrows(), rhs_len: b.len() });
    }
    let (rows, cols) = a.shape();
    let mut aug = augmented(a, b);
    let mut pivot_row = 0;
    for col in 0..cols {
        if pivot_row == rows {
            break;
        }
        let mut best = pivot_row;
        for r in pivot_row + 1..rows {
            if aug[(r, col)].abs() > aug[(best, col)].abs() {
                best = r;
            }
        }
        if aug[(best, col)].abs() <= PIVOT_EPS {
            continue;
        }
        aug.swap_rows(pivot_row, best);
        let pivot = aug[(pivot_row, col)];
        for j in col..=cols {
            aug[(pivot_row, j)] /= pivot;
        }
        eliminate_column(&mut aug, pivot_row, col);
        pivot_row += 1;
    }
    if pivot_row < rows {
        return Err(leftover_rows_error(&aug, pivot_row));
    }
    Ok(aug)
}

/// Reduces `[a | b]` by full-pivot elimination.
///
/// At each step the largest-magnitude entry of the remaining coefficient
/// submatrix becomes the pivot, swapping rows and columns as needed; the
/// column permutation is tracked and undone afterwards, so the reduced
/// system is reported in the original column order with rows ordered by
/// pivot column. Failure modes match [`gauss_jordan`].
pub fn total_pivot(a: &Mat, b: &Col) -> Result<Mat, SolveError> {
    if a.nrows() != b.len() {
        return Err(SolveError::ShapeMismatch { rows: a.nrows(), rhs_len: b.len() });
    }
    let (rows, cols) = a.shape();
    let mut aug = augmented(a, b);
    let mut col_of: Vec<usize> = (0..cols).collect();
    let mut rank = 0;
    for step in 0..rows.min(cols) {
        let (mut pr, mut pc) = (step, step);
        for r in step..rows {
            for c in step..cols {
                if aug[(r, c)].abs() > aug[(pr, pc)].abs() {
                    pr = r;
                    pc = c;
                }
            }
        }
        if aug[(pr, pc)].abs() <= PIVOT_EPS {
            break;
        }
        aug.swap_rows(step, pr);
        if pc != step {
            aug.swap_columns(step, pc);
            col_of.swap(step, pc);
        }
        let pivot = aug[(step, step)];
        for j in step..=cols {
            aug[(step, j)] /= pivot;
        }
        eliminate_column(&mut aug, step, step);
        rank += 1;
    }
    if rank < rows {
        return Err(leftover_rows_error(&aug, rank));
    }

    // undo the column permutation; order rows by their pivot's original column
    let mut row_order: Vec<usize> = (0..rows).collect();
    row_order.sort_by_key(|&r| col_of[r]);
    let mut out = Mat::zeros(rows, cols + 1);
    for (out_r, &src_r) in row_order.iter().enumerate() {
        for j in 0..cols {
            out[(out_r, col_of[j])] = aug[(src_r, j)];
        }
        out[(out_r, cols)] = aug[(src_r, cols)];
    }
    Ok(out)
}

/// Zeroes column `col` in every row except `pivot_row` (whose pivot is
/// already scaled to one).
fn eliminate_column(aug: &mut Mat, pivot_row: usize, col: usize) {
    let (rows, width) = aug.shape();
    for r in 0..rows {
        if r == pivot_row {
            continue;
        }
        let factor = aug[(r, col)];
        if factor != 0.0 {
            for j in col..width {
                aug[(r, j)] -= factor * aug[(pivot_row, j)];
            }
        }
    }
}

/// Rows below `rank` carry no pivot; their coefficients are all below the
/// pivot threshold, so the system is inconsistent if any right-hand side
/// survives and rank-deficient otherwise.
fn leftover_rows_error(aug: &Mat, rank: usize) -> SolveError {
    let rows = aug.nrows();
    let rhs_col = aug.ncols() - 1;
    for r in rank..rows {
        if aug[(r, rhs_col)].abs() > PIVOT_EPS {
            return SolveError::Inconsistent { row: r, rhs: aug[(r, rhs_col)] };
        }
    }
    SolveError::Singular { pivots: rank, rows }
}
