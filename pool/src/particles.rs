use crate::actor_pool::{ActorPool, Transient};
use crate::config::EmitterConfig;
use crate::error::{PoolError, PoolResult};
use common::shapes::Vector2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vector2,
    pub vel: Vector2,
    /// Ticks left before the particle is removed.
    pub lifetime: i32,
}

impl Particle {
    pub fn new(pos: Vector2, vel: Vector2, lifetime: i32) -> Self {
        Self { pos, vel, lifetime }
    }
}

impl Transient for Particle {
    fn advance(&mut self) {
        self.pos += self.vel;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    fn decayed(&self) -> bool {
        self.lifetime <= 0
    }
}

/// Spawns particles from a fixed point with randomized lifetime and speed.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    pub pos: Vector2,
    config: EmitterConfig,
    particles: ActorPool<Particle>,
}

impl ParticleEmitter {
    pub fn new(pos: Vector2, config: EmitterConfig) -> Self {
        let particles = ActorPool::new(config.capacity);
        Self {
            pos,
            config,
            particles,
        }
    }

    /// Appends one particle moving along `dir` (normalized here).
    pub fn emit<R: Rng>(&mut self, dir: Vector2, rng: &mut R) -> PoolResult<()> {
        let dir = dir.try_norm().ok_or(PoolError::ZeroDirection)?;
        let lifetime = self.config.sample_lifetime(rng);
        let speed = self.config.sample_speed(rng);
        self.particles
            .push(Particle::new(self.pos, dir * speed, lifetime))
    }

    /// Advances every particle; returns how many decayed this tick.
    pub fn update(&mut self) -> usize {
        self.particles.update()
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }
}
