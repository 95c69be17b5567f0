use collisions::{slide_with_buffer, Obstacles};
use common::shapes::{Rect, Vector2};
use common::task::Task;
use log::trace;
use pool::{BulletManager, ParticleEmitter, PoolResult};
use rand::Rng;

use crate::config::PlayerConfig;

// Sprite-relative anchor offsets for the trail and the muzzle.
const TRAIL_INSET_LEFT: f64 = 10.0;
const TRAIL_INSET_RIGHT: f64 = 4.0;
const TRAIL_RISE: f64 = 4.0;
const MUZZLE_OFFSET: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    pub fn from_x(x: f64) -> Option<Self> {
        if x < 0.0 {
            Some(Facing::Left)
        } else if x > 0.0 {
            Some(Facing::Right)
        } else {
            None
        }
    }

    pub fn unit(self) -> Vector2 {
        match self {
            Facing::Left => Vector2::new(-1.0, 0.0),
            Facing::Right => Vector2::new(1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    rect: Rect,
    speed: f64,
    facing: Facing,
    trail: ParticleEmitter,
    pub emit_task: Task,
    bullets: BulletManager,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        let mut player = Player {
            rect: Rect::new(config.spawn, config.size),
            speed: config.speed,
            facing: Facing::default(),
            trail: ParticleEmitter::new(config.spawn, config.trail.clone()),
            emit_task: Task::new(config.emit_interval),
            bullets: BulletManager::new(config.spawn, config.bullets.clone()),
        };
        player.anchor();
        player
    }

    /// Moves along `intent` at the player's speed, sliding along walls.
    /// Returns false when `intent` has no direction.
    pub fn move_by<O: Obstacles + ?Sized>(
        &mut self,
        intent: Vector2,
        walls: &O,
        buffer: &mut Vec<Rect>,
    ) -> bool {
        let Some(dir) = intent.try_norm() else {
            return false;
        };
        self.rect = slide_with_buffer(self.rect, dir * self.speed, walls, buffer);
        if let Some(facing) = Facing::from_x(intent.x) {
            self.facing = facing;
        }
        self.anchor();
        true
    }

    /// Advances the emit task and drops a trail particle when it fires.
    pub fn tick_trail<R: Rng>(&mut self, rng: &mut R) {
        if !self.emit_task.update() {
            return;
        }
        // particles drift away from the facing direction and upwards
        let dir = Vector2::new(-self.facing.unit().x, -(rng.gen::<f64>() / 2.0) - 0.5);
        if let Err(err) = self.trail.emit(dir, rng) {
            trace!("trail particle dropped: {}", err);
        }
    }

    pub fn shoot<R: Rng>(&mut self, rng: &mut R) -> PoolResult<()> {
        self.bullets.shoot(self.facing.unit(), rng)
    }

    /// Advances the trail and bullet pools by one tick.
    pub fn update(&mut self) {
        self.trail.update();
        self.bullets.update();
    }

    fn anchor(&mut self) {
        let Rect { pos, extents } = self.rect;
        let (trail_x, muzzle_x) = match self.facing {
            Facing::Left => (pos.x + extents.x - TRAIL_INSET_LEFT, pos.x - MUZZLE_OFFSET),
            Facing::Right => (pos.x + TRAIL_INSET_RIGHT, pos.x + extents.x),
        };
        self.trail.pos = Vector2::new(trail_x, pos.y + extents.y - TRAIL_RISE);
        self.bullets.pos = Vector2::new(muzzle_x, pos.y);
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn trail(&self) -> &ParticleEmitter {
        &self.trail
    }

    pub fn bullets(&self) -> &BulletManager {
        &self.bullets
    }
}
