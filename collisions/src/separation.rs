//! Symmetric circle-vs-circle push-apart, used for crowd separation.

use common::shapes::{CircleCollider, Vector2};
use log::trace;
use nalgebra::Isometry2;
use parry2d_f64::query;
use parry2d_f64::shape::Ball;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleContact {
    /// Unit vector from the first circle's center towards the second's.
    pub normal: Vector2,
    /// How far the circles overlap; zero when they just touch.
    pub penetration: f64,
}

/// Contact between two touching or overlapping circles, `None` when they are
/// apart or their centers coincide (no usable normal).
pub fn circle_contact(a: &CircleCollider, b: &CircleCollider) -> Option<CircleContact> {
    if a.pos.distance(b.pos) <= 0.0 {
        return None;
    }

    let position_a = Isometry2::translation(a.pos.x, a.pos.y);
    let position_b = Isometry2::translation(b.pos.x, b.pos.y);
    let contact = query::contact(
        &position_a,
        &Ball::new(a.r),
        &position_b,
        &Ball::new(b.r),
        0.0,
    )
    .ok()
    .flatten()?;

    Some(CircleContact {
        normal: Vector2::new(contact.normal1.x, contact.normal1.y),
        penetration: (-contact.dist).max(0.0),
    })
}

/// Pushes both circles apart by half the overlap each, along the line through
/// their centers. Returns false (and moves nothing) when they do not overlap or
/// share a center.
pub fn push_apart(a: &mut CircleCollider, b: &mut CircleCollider) -> bool {
    let Some(contact) = circle_contact(a, b) else {
        if a.pos == b.pos {
            trace!("coincident circles at ({}, {}) left in place", a.pos.x, a.pos.y);
        }
        return false;
    };
    if contact.penetration <= 0.0 {
        return false;
    }

    let separation = contact.normal * (contact.penetration / 2.0);
    a.pos -= separation;
    b.pos += separation;
    true
}
