//! Axis-separated rect-vs-rect resolution.
//!
//! The move is applied along X first, corrected against every obstacle it now
//! overlaps, then the same is done along Y with the corrected rect. A mover
//! hitting a wall diagonally keeps the unblocked component and slides along it.
//! Obstacles are assumed not to overlap each other; when several are hit on
//! one axis they are processed in query order and the last snap wins.

use common::shapes::{Rect, Vector2};
use quadtree::QuadTree;

/// Anything that can list the obstacle rects overlapping an area.
pub trait Obstacles {
    fn obstacles_into(&self, area: &Rect, obstacles: &mut Vec<Rect>);
}

impl Obstacles for [Rect] {
    fn obstacles_into(&self, area: &Rect, obstacles: &mut Vec<Rect>) {
        obstacles.extend(self.iter().filter(|rect| rect.intersects(area)));
    }
}

impl Obstacles for Vec<Rect> {
    fn obstacles_into(&self, area: &Rect, obstacles: &mut Vec<Rect>) {
        self.as_slice().obstacles_into(area, obstacles);
    }
}

impl Obstacles for QuadTree {
    fn obstacles_into(&self, area: &Rect, obstacles: &mut Vec<Rect>) {
        self.visit(area, |entity| obstacles.push(entity.rect));
    }
}

pub fn slide<O: Obstacles + ?Sized>(mover: Rect, movement: Vector2, obstacles: &O) -> Rect {
    let mut buffer = Vec::new();
    slide_with_buffer(mover, movement, obstacles, &mut buffer)
}

/// Same as [`slide`], reusing `buffer` for the broad-phase results.
pub fn slide_with_buffer<O: Obstacles + ?Sized>(
    mut mover: Rect,
    movement: Vector2,
    obstacles: &O,
    buffer: &mut Vec<Rect>,
) -> Rect {
    mover.pos.x += movement.x;
    if movement.x != 0.0 {
        buffer.clear();
        obstacles.obstacles_into(&mover, buffer);
        for obstacle in buffer.iter() {
            resolve_x(&mut mover, movement.x, obstacle);
        }
    }

    mover.pos.y += movement.y;
    if movement.y != 0.0 {
        buffer.clear();
        obstacles.obstacles_into(&mover, buffer);
        for obstacle in buffer.iter() {
            resolve_y(&mut mover, movement.y, obstacle);
        }
    }

    mover
}

/// Snaps `mover` to the near X edge of `obstacle` if they overlap.
/// Returns whether the mover was corrected.
pub fn resolve_x(mover: &mut Rect, movement_x: f64, obstacle: &Rect) -> bool {
    resolve_axis(mover, movement_x, obstacle, Axis::X)
}

/// Snaps `mover` to the near Y edge of `obstacle` if they overlap.
/// Returns whether the mover was corrected.
pub fn resolve_y(mover: &mut Rect, movement_y: f64, obstacle: &Rect) -> bool {
    resolve_axis(mover, movement_y, obstacle, Axis::Y)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn resolve_axis(mover: &mut Rect, movement: f64, obstacle: &Rect, axis: Axis) -> bool {
    if movement == 0.0 || !mover.intersects(obstacle) {
        return false;
    }
    let (pos, size, near, far) = match axis {
        Axis::X => (&mut mover.pos.x, mover.extents.x, obstacle.left(), obstacle.right()),
        Axis::Y => (&mut mover.pos.y, mover.extents.y, obstacle.top(), obstacle.bottom()),
    };
    *pos = if movement > 0.0 {
        snap_before(near, size)
    } else {
        far
    };
    true
}

// Start coordinate of a span of `size` ending exactly at `edge`. `edge - size`
// can round so that the span still pokes past `edge`, which would read as an
// overlap on the next axis. Each step moves `pos` by at least one ulp of its
// own magnitude so the loop always makes progress.
fn snap_before(edge: f64, size: f64) -> f64 {
    let mut pos = edge - size;
    while pos + size > edge {
        let excess = (pos + size - edge)
            .max(f64::EPSILON * edge.abs().max(1.0))
            .max(f64::EPSILON * pos.abs());
        pos -= excess;
    }
    pos
}
