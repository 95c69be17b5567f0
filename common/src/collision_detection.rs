use crate::shapes::{CircleCollider, Rect};

// Check that Rect inner is fully contained in Rect outer (closed interval)
pub fn rectangle_contains_rectangle(outer: &Rect, inner: &Rect) -> bool {
    outer.left() <= inner.left()
        && inner.right() <= outer.right()
        && outer.top() <= inner.top()
        && inner.bottom() <= outer.bottom()
}

// Touching edges are not an overlap
pub fn rectangle_rectangle(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

pub fn circle_circle(a: &CircleCollider, b: &CircleCollider) -> bool {
    let dx = a.pos.x - b.pos.x;
    let dy = a.pos.y - b.pos.y;
    let distance_sq = dx * dx + dy * dy;
    let collision_distance = a.r + b.r;
    distance_sq < collision_distance * collision_distance
}
