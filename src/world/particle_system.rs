use crate::{
    common::PhysicsConfig,
    forces,
    objects::Particle,
};

/// Hookean link between two particles of a [`ParticleSystem`], by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub rest_length: f64,
}

/// Force-only particle simulation: weight, drag, springs and optional mutual gravitation.
/// Particles never collide.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    pub springs: Vec<Spring>,
    /// Apply pairwise gravitational attraction between all particles.
    pub mutual_gravitation: bool,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_particle(&mut self, particle: Particle) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    /// Connects particles `a` and `b`. Panics if either index is out of range.
    pub fn add_spring(&mut self, a: usize, b: usize, rest_length: f64) {
        assert!(
            a < self.particles.len() && b < self.particles.len(),
            "Spring endpoint out of bounds"
        );
        self.springs.push(Spring { a, b, rest_length });
    }

    /// Accumulates every force for this step, then integrates each particle.
    pub fn step(&mut self, dt: f64, config: &PhysicsConfig) {
        if !(dt > 0.0) {
            return;
        }

        for particle in self.particles.iter_mut() {
            let weight = forces::weight_force(particle, config.gravity);
            particle.add_force(weight);
            if config.drag_coefficient > 0.0 {
                let drag = forces::drag_force(particle, config.drag_coefficient);
                particle.add_force(drag);
            }
        }

        for spring in &self.springs {
            let force = forces::spring_force(
                &self.particles[spring.a],
                &self.particles[spring.b],
                spring.rest_length,
                config.spring_constant,
            );
            self.particles[spring.a].add_force(force);
            self.particles[spring.b].add_force(-force);
        }

        if self.mutual_gravitation {
            let n = self.particles.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    let force = forces::gravitational_force(
                        &self.particles[i],
                        &self.particles[j],
                        config.gravitational_constant,
                    );
                    self.particles[i].add_force(force);
                    self.particles[j].add_force(-force);
                }
            }
        }

        for particle in self.particles.iter_mut() {
            particle.integrate(dt);
        }
    }
}
