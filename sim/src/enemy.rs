use collisions::{slide_with_buffer, Obstacles};
use common::shapes::{CircleCollider, Rect, Vector2};

use crate::config::EnemyConfig;
use crate::player::Facing;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub collider: CircleCollider,
    pub speed: f64,
    facing: Facing,
}

impl Enemy {
    pub fn new(center: Vector2, config: &EnemyConfig) -> Self {
        Enemy {
            collider: CircleCollider::new(center, config.radius),
            speed: config.speed,
            facing: Facing::default(),
        }
    }

    /// Steps toward `target`, sliding the bounding box along walls. The
    /// center never goes below zero on either axis.
    pub fn chase<O: Obstacles + ?Sized>(
        &mut self,
        target: Vector2,
        walls: &O,
        buffer: &mut Vec<Rect>,
    ) -> bool {
        let diff = target - self.collider.pos;
        let Some(dir) = diff.try_norm() else {
            return false;
        };

        let moved = slide_with_buffer(self.collider.bounding_rect(), dir * self.speed, walls, buffer);
        let mut center = moved.center();
        center.x = center.x.max(0.0);
        center.y = center.y.max(0.0);
        self.collider.pos = center;

        if let Some(facing) = Facing::from_x(diff.x) {
            self.facing = facing;
        }
        true
    }

    pub fn pos(&self) -> Vector2 {
        self.collider.pos
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }
}
