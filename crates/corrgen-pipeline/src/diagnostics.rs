//! Empirical noise diagnostics for generated clusters.

use corrgen_core::{distance_to_span, Col, Mat, Real};

/// Root-mean-square orthogonal distance of `points` to the affine subspace
/// through `point` spanned by the orthonormal columns of `basis`.
pub fn standard_deviation(points: &[Col], point: &Col, basis: &Mat) -> Real {
    if points.is_empty() {
        return 0.0;
    }
    let sum_sq: Real = points
        .iter()
        .map(|p| {
            let d = distance_to_span(p, point, basis);
            d * d
        })
        .sum();
    (sum_sq / points.len() as Real).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_zero_deviation() {
        let point = Col::zeros(3);
        let basis = Mat::identity(3, 1);
        assert_eq!(standard_deviation(&[], &point, &basis), 0.0);
    }

    #[test]
    fn points_on_the_subspace_have_zero_deviation() {
        let point = Col::from_element(3, 0.5);
        let basis = Mat::from_column_slice(3, 1, &[1.0, 0.0, 0.0]);
        let points: Vec<Col> = (0..10)
            .map(|i| &point + &basis.column(0) * (i as Real * 0.01))
            .collect();
        assert!(standard_deviation(&points, &point, &basis) < 1e-12);
    }

    #[test]
    fn uniform_offset_is_recovered_exactly() {
        let point = Col::from_element(3, 0.5);
        let basis = Mat::from_column_slice(3, 1, &[1.0, 0.0, 0.0]);
        let offset = Col::from_column_slice(&[0.0, 0.03, 0.0]);
        let points: Vec<Col> = (0..5).map(|_| &point + &offset).collect();
        assert!((standard_deviation(&points, &point, &basis) - 0.03).abs() < 1e-12);
    }
}
