use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SwarmError;
use crate::observer::SwarmObserver;
use crate::particle::Particle;
use crate::space::SearchSpace;

/// The population of particles plus the shared state that drives them: one
/// random stream, the cognition weights, the constriction coefficient, and
/// the best position any particle has ever visited.
///
/// The swarm minimizes; callers wanting a maximum negate their objective.
/// Everything runs on one thread and one random stream, so a fixed seed set
/// through [`Swarm::set_rng_seed`] before [`Swarm::run`] reproduces an entire
/// trajectory draw for draw.
pub struct Swarm<F>
where
    F: Fn(&[f64]) -> f64,
{
    template: Vec<f64>,
    space: SearchSpace,
    objective: F,
    rho1: f64,
    rho2: f64,
    rho: f64,
    k: f64,
    rng: StdRng,
    particles: Vec<Particle>,
    global_best_value: f64,
    global_best_position: Vec<f64>,
    history: Vec<f64>,
    observer: Option<Box<dyn SwarmObserver>>,
}

impl<F> Swarm<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Creates a swarm over `space` whose particles mirror the structure of
    /// `template` (only its length matters; the values are overwritten at
    /// initialization).
    ///
    /// The cognition weights default to `rho1 = 2`, `rho2 = 2`, giving a
    /// constriction coefficient of 2 from the derivation below. The random
    /// stream starts from OS entropy until reseeded.
    pub fn new(template: Vec<f64>, space: SearchSpace, objective: F) -> Self {
        let rho1 = 2.0;
        let rho2 = 2.0;
        let rho = rho1 + rho2;
        let k = constriction_coefficient(rho);

        Swarm {
            template,
            space,
            objective,
            rho1,
            rho2,
            rho,
            k,
            rng: StdRng::from_os_rng(),
            particles: Vec::new(),
            global_best_value: f64::INFINITY,
            global_best_position: Vec::new(),
            history: Vec::new(),
            observer: None,
        }
    }

    /// Overwrites the cognition weights.
    ///
    /// No validation is performed and neither `rho` nor the constriction
    /// coefficient is re-derived; callers using constriction are responsible
    /// for keeping the weights summing to 4.
    pub fn set_rho_values(&mut self, rho1: f64, rho2: f64) {
        self.rho1 = rho1;
        self.rho2 = rho2;
    }

    /// Disables constriction by forcing the coefficient to 1. Passing `true`
    /// leaves the current coefficient as it is.
    pub fn set_constriction(&mut self, use_constriction: bool) {
        if !use_constriction {
            self.k = 1.0;
        }
    }

    /// Reseeds the shared random stream.
    ///
    /// Call before [`Swarm::run`] for reproducible trials; reseeding later
    /// does not rewind decisions already drawn from the old stream.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Installs a narration sink for construction and new-best events.
    pub fn set_observer(&mut self, observer: Box<dyn SwarmObserver>) {
        self.observer = Some(observer);
    }

    /// Builds a fresh population of `particle_count` particles, then runs
    /// `iterations` rounds of "every particle steps, then the swarm rescans
    /// for a better best". Returns a copy of the best position found.
    ///
    /// Particles step in ordinal order; with one shared random stream the
    /// order is part of the reproducibility contract. Each round's steps see
    /// the global best of the previous round; the rescan only runs after the
    /// whole round has stepped. The global best survives repeated calls on
    /// the same swarm, the particle set does not.
    pub fn run(
        &mut self,
        iterations: u64,
        particle_count: usize,
    ) -> Result<Vec<f64>, SwarmError> {
        self.particles.clear();
        self.history.clear();
        self.make_particles(particle_count)?;
        self.history.push(self.global_best_value);

        for _ in 0..iterations {
            for index in 0..self.particles.len() {
                self.particles[index].step(
                    &self.space,
                    self.rho1,
                    self.rho2,
                    self.k,
                    &self.global_best_position,
                    &mut self.rng,
                    &self.objective,
                );
            }

            for index in 0..self.particles.len() {
                if self.particles[index].value() < self.global_best_value {
                    self.global_best_value = self.particles[index].value();
                    self.global_best_position = self.particles[index].position().to_vec();
                    if let Some(observer) = self.observer.as_deref_mut() {
                        observer.global_best_updated(&self.particles[index]);
                    }
                }
            }

            self.history.push(self.global_best_value);
        }

        Ok(self.global_best_position.clone())
    }

    fn make_particles(&mut self, particle_count: usize) -> Result<(), SwarmError> {
        for index in 0..particle_count {
            let particle = Particle::new(
                index,
                &self.template,
                &self.space,
                &mut self.rng,
                &self.objective,
            )?;

            if let Some(observer) = self.observer.as_deref_mut() {
                observer.particle_initialized(&particle);
            }

            if particle.value() < self.global_best_value {
                self.global_best_value = particle.value();
                self.global_best_position = particle.position().to_vec();
                if let Some(observer) = self.observer.as_deref_mut() {
                    observer.global_best_updated(&particle);
                }
            }

            self.particles.push(particle);
        }
        Ok(())
    }

    /// A copy of the best position any particle has ever visited.
    pub fn global_best_position(&self) -> Vec<f64> {
        self.global_best_position.clone()
    }

    /// The lowest objective value any particle has ever produced.
    pub fn global_best_value(&self) -> f64 {
        self.global_best_value
    }

    /// A copy of the search boundaries.
    pub fn boundaries(&self) -> Vec<(f64, f64)> {
        self.space.bounds().to_vec()
    }

    /// The global best value recorded after the initial population scan and
    /// after every iteration of the last [`Swarm::run`] call.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rho1(&self) -> f64 {
        self.rho1
    }

    pub fn rho2(&self) -> f64 {
        self.rho2
    }

    /// The weight sum the constriction coefficient was derived from.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// The constriction coefficient applied to every velocity update.
    pub fn k(&self) -> f64 {
        self.k
    }
}

/// `K = |2 - rho - sqrt(rho^2 - 4*rho)|`, the damping factor on the velocity
/// blend. The absolute value keeps the expression defined for the default
/// weights (`rho = 4` makes the square root exactly zero, giving `K = 2`);
/// the formula is kept in this exact form.
fn constriction_coefficient(rho: f64) -> f64 {
    (2.0 - rho - (rho * rho - 4.0 * rho).sqrt()).abs()
}
