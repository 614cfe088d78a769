use serde::{Deserialize, Serialize};

use crate::{Col, Real};

/// Closed interval `[min, max]` applied to every coordinate, i.e. the
/// bounding hypercube the generated data must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Real,
    pub max: Real,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl Bounds {
    /// Interval width `max - min`.
    pub fn width(&self) -> Real {
        self.max - self.min
    }

    /// True when `value` lies inside the interval.
    pub fn contains(&self, value: Real) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when every coordinate of `point` lies inside the interval.
    pub fn contains_point(&self, point: &Col) -> bool {
        point.iter().all(|&v| self.contains(v))
    }

    /// Center of the hypercube at dimensionality `dim`.
    pub fn centroid(&self, dim: usize) -> Col {
        Col::from_element(dim, 0.5 * (self.min + self.max))
    }

    /// Diagonal length of the hypercube at dimensionality `dim`.
    pub fn diagonal(&self, dim: usize) -> Real {
        self.width() * (dim as Real).sqrt()
    }

    /// True when the interval is non-empty and both ends are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}
