//! Particle Swarm Optimization over bounded continuous search spaces.
//!
//! A swarm of candidate solutions minimizes a caller-supplied objective
//! function. Each particle blends its previous velocity with pulls toward
//! its own best position and the swarm's best position, damped by a
//! constriction coefficient, clamped to a velocity limit, and wrapped to the
//! opposite bound when it leaves the search region. One shared random stream
//! drives the entire population, so a single seed reproduces a whole run.
//!
//! # Example
//!
//! ```
//! use particle_swarm::{functions, SearchSpace, Swarm};
//!
//! let space = SearchSpace::new(vec![(-5.0, 5.0)], 0.1).unwrap();
//! let mut swarm = Swarm::new(vec![0.0, 0.0], space, functions::sphere);
//! swarm.set_rng_seed(42);
//!
//! let best = swarm.run(500, 10).unwrap();
//! assert_eq!(best.len(), 2);
//! assert!(swarm.global_best_value() < functions::sphere(&[5.0, 5.0]));
//! ```

pub mod error;
pub mod functions;
pub mod observer;
pub mod particle;
pub mod space;
pub mod swarm;

pub use error::SwarmError;
pub use observer::{ConsoleReporter, SwarmObserver};
pub use particle::Particle;
pub use space::SearchSpace;
pub use swarm::Swarm;
