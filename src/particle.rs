use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SwarmError;
use crate::space::SearchSpace;

/// One candidate solution: a position, the velocity moving it, and the best
/// location it has ever visited.
///
/// Particles hold no reference back to their swarm. Shared read state (the
/// search space, the cognition weights, the current global best) and the
/// shared random stream are passed in by the swarm on every call, so draw
/// order across the population stays a property of the run loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    index: usize,
    position: Vec<f64>,
    velocity: Vec<f64>,
    value: f64,
    best_value: f64,
    best_position: Vec<f64>,
}

impl Particle {
    /// Creates a particle with a randomized position and velocity and
    /// evaluates it once to seed its personal best.
    ///
    /// Position elements are drawn first, then velocity elements, all from
    /// the shared stream. Fails with [`SwarmError::StructureMismatch`] before
    /// any draw or evaluation if the template length is not divisible by the
    /// number of bound pairs.
    pub(crate) fn new<F>(
        index: usize,
        template: &[f64],
        space: &SearchSpace,
        rng: &mut StdRng,
        objective: &F,
    ) -> Result<Self, SwarmError>
    where
        F: Fn(&[f64]) -> f64,
    {
        let bounds = space.bounds();
        if template.len() % bounds.len() != 0 {
            return Err(SwarmError::StructureMismatch {
                position_len: template.len(),
                bounds_len: bounds.len(),
            });
        }

        let mut position = template.to_vec();

        // The bound index is meant to walk the bound pairs as the vector
        // cycles through its dimension groups, but it has never advanced
        // past the first pair: every element draws from bounds[0], and
        // seeded trajectories depend on that.
        // TODO: advance the index per element once cycling through multiple
        // bound pairs is confirmed as the intended behavior.
        let degree = 0;
        for p in 0..position.len() {
            let (lo, hi) = bounds[degree];
            position[p] = lo + rng.random::<f64>() * (hi - lo);
        }

        let max_velocity = space.max_velocity();
        let velocity: Vec<f64> = (0..position.len())
            .map(|_| rng.random::<f64>() * 2.0 * max_velocity - max_velocity)
            .collect();

        let best_position = position.clone();
        let value = objective(&position);

        Ok(Particle {
            index,
            position,
            velocity,
            value,
            best_value: value,
            best_position,
        })
    }

    /// Advances the particle by one iteration and returns its new objective
    /// value.
    ///
    /// For every element the velocity is rebuilt from the constricted blend
    /// of its previous value, the pull toward the personal best, and the
    /// pull toward the global best, then clamped to the velocity limit. The
    /// personal uniform draw happens strictly before the social one. Moves
    /// that leave the search region wrap to the opposite bound.
    pub(crate) fn step<F>(
        &mut self,
        space: &SearchSpace,
        rho1: f64,
        rho2: f64,
        k: f64,
        global_best: &[f64],
        rng: &mut StdRng,
        objective: &F,
    ) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        let bounds = space.bounds();
        let max_velocity = space.max_velocity();
        let degree = 0; // pinned to the first bound pair, see `new`

        for p in 0..self.position.len() {
            let r1 = rng.random::<f64>();
            let r2 = rng.random::<f64>();

            self.velocity[p] = k
                * (self.velocity[p]
                    + rho1 * r1 * (self.best_position[p] - self.position[p])
                    + rho2 * r2 * (global_best[p] - self.position[p]));
            self.velocity[p] = self.velocity[p].clamp(-max_velocity, max_velocity);

            self.position[p] += self.velocity[p];

            let (lo, hi) = bounds[degree];
            self.position[p] = wrap_position(self.position[p], lo, hi);
        }

        self.value = objective(&self.position);

        if self.value < self.best_value {
            self.best_value = self.value;
            self.best_position = self.position.clone();
        }

        self.value
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// The objective value at the current position.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The lowest objective value this particle has ever seen.
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }
}

/// Wrap-around boundary handling: a position past one bound teleports to the
/// opposite bound. Never clamps or reflects.
fn wrap_position(position: f64, lower: f64, upper: f64) -> f64 {
    if position < lower {
        upper
    } else if position > upper {
        lower
    } else {
        position
    }
}
