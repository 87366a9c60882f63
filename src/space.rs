use serde::{Deserialize, Serialize};

use crate::error::SwarmError;

/// The bounded region a swarm searches, constructed once and never mutated.
///
/// Bounds are an ordered list of `(min, max)` pairs, one per dimension group
/// of the position vector, and a single maximum velocity applied uniformly to
/// every degree of freedom. Position vectors longer than the bound list must
/// have a length divisible by it; that check happens when particles are
/// built, since only then is a concrete vector available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    bounds: Vec<(f64, f64)>,
    max_velocity: f64,
}

impl SearchSpace {
    /// Builds a search space from bound pairs and a velocity limit.
    ///
    /// Fails with [`SwarmError::Configuration`] if no bound pairs are given
    /// or the velocity limit is not a positive finite number.
    pub fn new(bounds: Vec<(f64, f64)>, max_velocity: f64) -> Result<Self, SwarmError> {
        if bounds.is_empty() {
            return Err(SwarmError::Configuration(
                "at least one bound pair is required".to_string(),
            ));
        }
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return Err(SwarmError::Configuration(format!(
                "maximum velocity must be a positive finite number, got {max_velocity}"
            )));
        }
        Ok(SearchSpace {
            bounds,
            max_velocity,
        })
    }

    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_space() {
        let space = SearchSpace::new(vec![(-3.0, 3.0), (-2.0, 2.0)], 0.5).unwrap();
        assert_eq!(space.bounds(), &[(-3.0, 3.0), (-2.0, 2.0)]);
        assert_eq!(space.max_velocity(), 0.5);
    }

    #[test]
    fn rejects_empty_bounds() {
        let result = SearchSpace::new(Vec::new(), 0.5);
        assert!(matches!(result, Err(SwarmError::Configuration(_))));
    }

    #[test]
    fn rejects_bad_velocity_limits() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = SearchSpace::new(vec![(-1.0, 1.0)], bad);
            assert!(matches!(result, Err(SwarmError::Configuration(_))));
        }
    }
}
