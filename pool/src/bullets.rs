//! Bullets with a post-lifetime fade.
//!
//! A bullet is `Alive` while `lifetime > 0`. When the lifetime runs out it
//! enters `Decaying`: its velocity is halved once and it keeps drifting for
//! `decay_time` more ticks so the renderer can fade it out. It is removed as
//! soon as `lifetime <= -decay_time`.

use crate::actor_pool::{ActorPool, Transient};
use crate::config::BulletConfig;
use crate::error::{PoolError, PoolResult};
use common::shapes::Vector2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletState {
    Alive,
    Decaying,
    Decayed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vector2,
    pub vel: Vector2,
    pub lifetime: i32,
    decay_time: i32,
}

impl Bullet {
    pub fn new(pos: Vector2, vel: Vector2, lifetime: i32, decay_time: i32) -> Self {
        Self {
            pos,
            vel,
            lifetime,
            decay_time: decay_time.max(0),
        }
    }

    pub fn state(&self) -> BulletState {
        if self.lifetime > 0 {
            BulletState::Alive
        } else if self.lifetime > -self.decay_time {
            BulletState::Decaying
        } else {
            BulletState::Decayed
        }
    }

    /// 0.0 while alive, rising to 1.0 at the end of the decay window.
    pub fn decay_progress(&self) -> f64 {
        match self.state() {
            BulletState::Alive => 0.0,
            BulletState::Decaying => -(self.lifetime as f64) / self.decay_time as f64,
            BulletState::Decayed => 1.0,
        }
    }

    pub fn decay_time(&self) -> i32 {
        self.decay_time
    }
}

impl Transient for Bullet {
    fn advance(&mut self) {
        self.pos += self.vel;
        let was_alive = self.lifetime > 0;
        self.lifetime = self.lifetime.saturating_sub(1);
        if was_alive && self.lifetime <= 0 {
            self.vel *= 0.5;
        }
    }

    fn decayed(&self) -> bool {
        self.state() == BulletState::Decayed
    }
}

#[derive(Debug, Clone)]
pub struct BulletManager {
    /// Muzzle position new bullets spawn at.
    pub pos: Vector2,
    config: BulletConfig,
    bullets: ActorPool<Bullet>,
}

impl BulletManager {
    pub fn new(pos: Vector2, config: BulletConfig) -> Self {
        let bullets = ActorPool::new(config.capacity);
        Self {
            pos,
            config,
            bullets,
        }
    }

    pub fn shoot<R: Rng>(&mut self, dir: Vector2, rng: &mut R) -> PoolResult<()> {
        let dir = dir.try_norm().ok_or(PoolError::ZeroDirection)?;
        let lifetime = self.config.sample_lifetime(rng);
        let speed = self.config.sample_speed(rng);
        self.bullets.push(Bullet::new(
            self.pos,
            dir * speed,
            lifetime,
            self.config.decay_time,
        ))
    }

    pub fn update(&mut self) -> usize {
        self.bullets.update()
    }

    pub fn bullets(&self) -> &[Bullet] {
        self.bullets.as_slice()
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn config(&self) -> &BulletConfig {
        &self.config
    }
}
