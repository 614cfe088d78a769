use nalgebra::{DMatrix, DVector};

/// Scalar type used throughout.
pub type Real = f64;

/// Dense, dynamically sized matrix.
pub type Mat = DMatrix<Real>;

/// Dense column vector; points and directions are columns.
pub type Col = DVector<Real>;
