//! End-to-end scenarios for the correlation-cluster generator.

use corrgen_core::{append_columns, Bounds, Col, Mat, Real};
use corrgen_pipeline::{generate_correlation, CorrelationInput, GeneratorConfig};

fn assert_orthonormal(m: &Mat, tol: Real) {
    for i in 0..m.ncols() {
        assert!((m.column(i).norm() - 1.0).abs() < tol, "column {i} is not unit length");
        for j in 0..i {
            let dot = m.column(i).dot(&m.column(j));
            assert!(dot.abs() < tol, "columns {i} and {j} are not orthogonal: {dot}");
        }
    }
}

fn line_input(num_points: usize, jitter: bool) -> CorrelationInput {
    CorrelationInput {
        point: Col::from_element(3, 0.5),
        basis: Mat::from_column_slice(3, 1, &[1.0, -0.5, 1.0]),
        num_points,
        jitter,
    }
}

#[test]
fn line_cluster_without_jitter_sits_exactly_on_the_line() {
    let config = GeneratorConfig::default();
    let result = generate_correlation(&line_input(1000, false), &config).unwrap();

    assert_eq!(result.points.len(), 1000);
    assert_eq!(result.dependency.normals.ncols(), 2);
    assert_eq!(result.dependency.equations.nrows(), 2);

    let full = append_columns(&result.dependency.basis, &result.dependency.normals).unwrap();
    assert_orthonormal(&full, 1e-9);

    assert!(result.std_dev < 1e-9, "deviation {} for noiseless points", result.std_dev);
    for p in &result.points {
        assert!(config.bounds.contains_point(p));
        assert!(result.dependency.is_satisfied_by(p, 1e-9));
    }
}

#[test]
fn measured_deviation_tracks_the_configured_jitter() {
    let config = GeneratorConfig { jitter_pct: 1.0, ..Default::default() };
    let result = generate_correlation(&line_input(1000, true), &config).unwrap();

    let nominal = config.jitter_std(3);
    assert!((nominal - 0.01 * 3.0f64.sqrt()).abs() < 1e-15);

    // jitter acts along both normal directions, so the RMS distance
    // estimates nominal * sqrt(2); dividing it out recovers the nominal
    // level from the sample
    let normal_dims = result.dependency.normals.ncols() as Real;
    let per_direction = result.std_dev / normal_dims.sqrt();
    let relative = (per_direction - nominal).abs() / nominal;
    assert!(relative < 0.1, "per-direction deviation {per_direction} vs nominal {nominal}");

    for p in &result.points {
        assert!(config.bounds.contains_point(p));
    }
}

#[test]
fn plane_cluster_in_five_dimensions() {
    let point = Col::from_element(5, 0.5);
    let basis = Mat::from_column_slice(
        5,
        2,
        &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
    );
    let input = CorrelationInput { point, basis, num_points: 200, jitter: false };
    let config = GeneratorConfig::default();
    let result = generate_correlation(&input, &config).unwrap();

    assert_eq!(result.dependency.basis.ncols(), 2);
    assert_eq!(result.dependency.normals.ncols(), 3);
    assert_eq!(result.dependency.equations.shape(), (3, 6));
    let full = append_columns(&result.dependency.basis, &result.dependency.normals).unwrap();
    assert_orthonormal(&full, 1e-9);
    for p in &result.points {
        assert!(result.dependency.is_satisfied_by(p, 1e-9));
    }
}

#[test]
fn custom_bounds_are_respected() {
    let bounds = Bounds { min: -2.0, max: 2.0 };
    let config = GeneratorConfig { bounds, ..Default::default() };
    let input = CorrelationInput {
        point: bounds.centroid(3),
        basis: Mat::from_column_slice(3, 1, &[1.0, 1.0, 0.0]),
        num_points: 300,
        jitter: true,
    };
    let result = generate_correlation(&input, &config).unwrap();
    assert_eq!(result.points.len(), 300);
    for p in &result.points {
        assert!(bounds.contains_point(p));
    }
}

#[test]
fn barely_reachable_configuration_fails_with_context() {
    // base point near a corner: about half of the draws leave the box, so
    // a budget of one attempt per point cannot fill the request
    let config = GeneratorConfig { max_attempts_per_point: 1, ..Default::default() };
    let input = CorrelationInput {
        point: Col::from_element(3, 0.99),
        basis: Mat::from_column_slice(3, 1, &[1.0, 1.0, 1.0]),
        num_points: 200,
        jitter: false,
    };
    let err = generate_correlation(&input, &config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("200"), "missing request size in: {message}");
}
