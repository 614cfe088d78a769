//! Rejection-sampled point generation on and near the subspace.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use corrgen_core::{distance_to_span, Bounds, Col, Mat, Real};

use crate::GenerateError;

/// Draws one candidate on the subspace: the base point plus a uniform
/// [0,1) combination of the basis columns, each with an independent random
/// sign flip.
pub fn draw_on_subspace<R: Rng>(point: &Col, basis: &Mat, rng: &mut R) -> Col {
    let mut candidate = point.clone();
    for dir in basis.column_iter() {
        let mut lambda: Real = rng.random();
        if rng.random::<bool>() {
            lambda = -lambda;
        }
        candidate += dir * lambda;
    }
    candidate
}

/// Displaces `point` by an independent Gaussian sample of standard
/// deviation `std_dev` along each unit-length normal direction.
pub fn jitter_point<R: Rng>(
    point: &Col,
    normals: &Mat,
    std_dev: Real,
    rng: &mut R,
) -> Result<Col, GenerateError> {
    let gauss = Normal::new(0.0, std_dev).map_err(|e| GenerateError::InvalidConfig {
        reason: format!("jitter standard deviation {std_dev}: {e}"),
    })?;
    let mut jittered = point.clone();
    for dir in normals.column_iter() {
        jittered += dir * gauss.sample(rng);
    }
    Ok(jittered)
}

/// Generates `count` points on (or, with `jitter_std`, near) the subspace
/// through `point` spanned by the orthonormal columns of `basis`,
/// discarding candidates that leave `bounds`.
///
/// Fails with [`GenerateError::Unreachable`] once `max_attempts` candidates
/// have been drawn without filling the request.
#[allow(clippy::too_many_arguments)]
pub fn sample_points<R: Rng>(
    point: &Col,
    basis: &Mat,
    normals: &Mat,
    count: usize,
    jitter_std: Option<Real>,
    bounds: &Bounds,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Col>, GenerateError> {
    let mut points = Vec::with_capacity(count);
    let mut attempts = 0;
    while points.len() < count {
        if attempts == max_attempts {
            return Err(GenerateError::Unreachable {
                accepted: points.len(),
                requested: count,
                attempts,
            });
        }
        attempts += 1;
        let mut candidate = draw_on_subspace(point, basis, rng);
        debug_assert!(distance_to_span(&candidate, point, basis) < 1e-9);
        if let Some(std_dev) = jitter_std {
            candidate = jitter_point(&candidate, normals, std_dev, rng)?;
        }
        if bounds.contains_point(&candidate) {
            points.push(candidate);
        }
    }
    Ok(points)
}

/// Builds an R×k spanning basis whose top k×k block is the identity and
/// whose remaining entries are small random integers. Handy for sweep-style
/// datasets across dimensionalities.
pub fn random_correlation_basis<R: Rng>(dim: usize, corr_dim: usize, rng: &mut R) -> Mat {
    let mut basis = Mat::zeros(dim, corr_dim);
    for c in 0..corr_dim {
        basis[(c, c)] = 1.0;
        for r in corr_dim..dim {
            basis[(r, c)] = rng.random_range(0..10) as Real;
        }
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn unit_basis() -> (Col, Mat) {
        let point = Col::from_element(3, 0.5);
        let basis = Mat::from_column_slice(3, 1, &[1.0, 0.0, 0.0]);
        (point, basis)
    }

    #[test]
    fn draws_stay_on_the_subspace() {
        let (point, basis) = unit_basis();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = draw_on_subspace(&point, &basis, &mut rng);
            assert!(distance_to_span(&c, &point, &basis) < 1e-12);
        }
    }

    #[test]
    fn draws_are_deterministic_for_a_fixed_seed() {
        let (point, basis) = unit_basis();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(draw_on_subspace(&point, &basis, &mut a), draw_on_subspace(&point, &basis, &mut b));
        }
    }

    #[test]
    fn sign_flips_cover_both_directions() {
        let (point, basis) = unit_basis();
        let mut rng = StdRng::seed_from_u64(1);
        let mut lower = false;
        let mut higher = false;
        for _ in 0..200 {
            let c = draw_on_subspace(&point, &basis, &mut rng);
            lower |= c[0] < point[0];
            higher |= c[0] > point[0];
        }
        assert!(lower && higher);
    }

    #[test]
    fn jitter_moves_points_off_the_subspace() {
        let (point, basis) = unit_basis();
        let normals = Mat::from_column_slice(3, 2, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(3);
        let jittered = jitter_point(&point, &normals, 0.1, &mut rng).unwrap();
        assert!(distance_to_span(&jittered, &point, &basis) > 0.0);
        // jitter acts only along the normals
        assert_eq!(jittered[0], point[0]);
    }

    #[test]
    fn zero_jitter_is_a_no_op() {
        let (point, _) = unit_basis();
        let normals = Mat::identity(3, 2);
        let mut rng = StdRng::seed_from_u64(3);
        let jittered = jitter_point(&point, &normals, 0.0, &mut rng).unwrap();
        assert_eq!(jittered, point);
    }

    #[test]
    fn sampled_points_respect_the_bounds() {
        let (point, basis) = unit_basis();
        let normals = Mat::from_column_slice(3, 2, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let bounds = Bounds::default();
        let mut rng = StdRng::seed_from_u64(5);
        let points =
            sample_points(&point, &basis, &normals, 500, None, &bounds, 500 * 100, &mut rng).unwrap();
        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|p| bounds.contains_point(p)));
    }

    #[test]
    fn exhausted_attempt_budget_fails() {
        // base point near a corner: roughly half of the draws leave the box
        let point = Col::from_column_slice(&[0.9, 0.9, 0.9]);
        let basis = Mat::from_column_slice(3, 1, &[1.0, 0.0, 0.0]);
        let normals = Mat::from_column_slice(3, 2, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(9);
        let err = sample_points(
            &point,
            &basis,
            &normals,
            100,
            None,
            &Bounds::default(),
            100,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::Unreachable { requested: 100, attempts: 100, .. }));
    }

    #[test]
    fn correlation_basis_has_identity_block() {
        let mut rng = StdRng::seed_from_u64(11);
        let basis = random_correlation_basis(5, 2, &mut rng);
        assert_eq!(basis.shape(), (5, 2));
        for c in 0..2 {
            for r in 0..2 {
                let id = if r == c { 1.0 } else { 0.0 };
                assert_eq!(basis[(r, c)], id);
            }
            for r in 2..5 {
                let v = basis[(r, c)];
                assert!((0.0..10.0).contains(&v) && v.fract() == 0.0);
            }
        }
    }
}
