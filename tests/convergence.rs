use std::cell::Cell;
use std::rc::Rc;

use particle_swarm::{functions, Particle, SearchSpace, Swarm, SwarmError, SwarmObserver};

fn camelback_space() -> SearchSpace {
    SearchSpace::new(vec![(-3.0, 3.0), (-2.0, 2.0)], 0.0001).unwrap()
}

#[test]
fn seeded_camelback_run_reaches_a_global_minimum() {
    let mut swarm = Swarm::new(
        vec![0.0, 0.0],
        camelback_space(),
        functions::six_hump_camelback,
    );
    swarm.set_rng_seed(3611);

    let best = swarm.run(100_000, 10).unwrap();

    // The camelback has two symmetric global minima with the same value;
    // the seeded trajectory settles in one of them.
    assert!((swarm.global_best_value() - (-1.031628)).abs() < 1e-2);
    let to_right = (best[0] - 0.0898).hypot(best[1] + 0.7126);
    let to_left = (best[0] + 0.0898).hypot(best[1] - 0.7126);
    assert!(
        to_right.min(to_left) < 5e-2,
        "best position {:?} is not near a global minimum",
        best
    );
}

#[test]
fn identical_seeds_reproduce_the_same_trajectory() {
    let run = || {
        let space = SearchSpace::new(vec![(-5.12, 5.12)], 0.1).unwrap();
        let mut swarm = Swarm::new(vec![0.0, 0.0], space, functions::rastrigin);
        swarm.set_rng_seed(1234);
        let best = swarm.run(500, 12).unwrap();
        (best, swarm.global_best_value(), swarm.history().to_vec())
    };

    let (best_a, value_a, history_a) = run();
    let (best_b, value_b, history_b) = run();

    assert_eq!(best_a, best_b);
    assert_eq!(value_a, value_b);
    assert_eq!(history_a, history_b);
}

#[test]
fn global_best_history_never_increases() {
    let space = SearchSpace::new(vec![(-5.0, 5.0)], 0.2).unwrap();
    let mut swarm = Swarm::new(vec![0.0, 0.0, 0.0], space, functions::sphere);
    swarm.set_rng_seed(42);
    swarm.run(300, 8).unwrap();

    for window in swarm.history().windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn best_value_invariants_hold_after_a_run() {
    let space = SearchSpace::new(vec![(-5.0, 5.0)], 0.2).unwrap();
    let mut swarm = Swarm::new(vec![0.0, 0.0], space, functions::sphere);
    swarm.set_rng_seed(8);
    swarm.run(250, 10).unwrap();

    let mut min_personal_best = f64::INFINITY;
    for particle in swarm.particles() {
        assert!(particle.best_value() <= particle.value());
        min_personal_best = min_personal_best.min(particle.best_value());
    }
    assert!(swarm.global_best_value() <= min_personal_best);
}

#[test]
fn velocities_stay_within_the_limit() {
    let space = SearchSpace::new(vec![(-5.0, 5.0)], 0.05).unwrap();
    let mut swarm = Swarm::new(vec![0.0, 0.0], space, functions::sphere);
    swarm.set_rng_seed(17);
    swarm.run(100, 6).unwrap();

    for particle in swarm.particles() {
        for &v in particle.velocity() {
            assert!(v.abs() <= 0.05);
        }
    }
}

#[test]
fn every_element_stays_inside_the_first_bound_pair() {
    // Two bound pairs, but positions are initialized and wrapped against
    // the first pair only, so both elements stay within (-3, 3).
    let mut swarm = Swarm::new(
        vec![0.0, 0.0],
        camelback_space(),
        functions::six_hump_camelback,
    );
    swarm.set_rng_seed(23);
    swarm.run(500, 10).unwrap();

    for particle in swarm.particles() {
        for &x in particle.position() {
            assert!((-3.0..=3.0).contains(&x));
        }
    }
}

#[test]
fn structure_mismatch_aborts_before_any_evaluation() {
    let evaluations = Rc::new(Cell::new(0usize));
    let seen = evaluations.clone();
    let objective = move |x: &[f64]| {
        seen.set(seen.get() + 1);
        functions::sphere(x)
    };

    let space = SearchSpace::new(vec![(-3.0, 3.0), (-2.0, 2.0)], 0.1).unwrap();
    let mut swarm = Swarm::new(vec![0.0, 0.0, 0.0], space, objective);
    swarm.set_rng_seed(1);

    let result = swarm.run(10, 5);

    assert!(matches!(
        result,
        Err(SwarmError::StructureMismatch {
            position_len: 3,
            bounds_len: 2,
        })
    ));
    assert_eq!(evaluations.get(), 0);
    assert_eq!(swarm.global_best_value(), f64::INFINITY);
}

#[test]
fn observer_sees_construction_and_new_best_events() {
    #[derive(Default)]
    struct CountingObserver {
        initialized: Rc<Cell<usize>>,
        improvements: Rc<Cell<usize>>,
    }

    impl SwarmObserver for CountingObserver {
        fn particle_initialized(&mut self, _particle: &Particle) {
            self.initialized.set(self.initialized.get() + 1);
        }

        fn global_best_updated(&mut self, _particle: &Particle) {
            self.improvements.set(self.improvements.get() + 1);
        }
    }

    let initialized = Rc::new(Cell::new(0));
    let improvements = Rc::new(Cell::new(0));

    let space = SearchSpace::new(vec![(-5.0, 5.0)], 0.1).unwrap();
    let mut swarm = Swarm::new(vec![0.0, 0.0], space, functions::sphere);
    swarm.set_rng_seed(3);
    swarm.set_observer(Box::new(CountingObserver {
        initialized: initialized.clone(),
        improvements: improvements.clone(),
    }));
    swarm.run(50, 7).unwrap();

    assert_eq!(initialized.get(), 7);
    // The first particle always improves on the initial infinity.
    assert!(improvements.get() >= 1);
}
