use crate::particle::Particle;

/// Narration sink for swarm progress.
///
/// The swarm notifies an installed observer when a particle finishes its
/// randomized construction and when the global best improves. Both hooks
/// default to doing nothing; the optimization never depends on an observer
/// for correctness.
pub trait SwarmObserver {
    /// A particle finished construction and its first self-evaluation.
    fn particle_initialized(&mut self, _particle: &Particle) {}

    /// The swarm adopted a strictly better objective value from `particle`.
    fn global_best_updated(&mut self, _particle: &Particle) {}
}

/// Prints construction feedback and every new best to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl SwarmObserver for ConsoleReporter {
    fn particle_initialized(&mut self, particle: &Particle) {
        println!(
            "{} ( {} ) < {} > = {}",
            particle.index(),
            format_vector(particle.position()),
            format_vector(particle.velocity()),
            particle.value(),
        );
    }

    fn global_best_updated(&mut self, particle: &Particle) {
        println!(
            "new best: {} ( {} ) = {}",
            particle.index(),
            format_vector(particle.position()),
            particle.value(),
        );
    }
}

fn format_vector(values: &[f64]) -> String {
    values
        .iter()
        .map(|&x| format!("{:.6}", x))
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_vectors_with_fixed_precision() {
        assert_eq!(format_vector(&[1.0, -0.5]), "1.000000 -0.500000");
        assert_eq!(format_vector(&[]), "");
    }
}
