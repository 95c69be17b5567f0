use crate::collision_detection;
use rand::Rng;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    pub fn mag_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn mag(self) -> f64 {
        self.mag_sq().sqrt()
    }

    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).mag()
    }

    /// Unit vector in the same direction, or `None` when the magnitude is zero
    /// or not finite.
    pub fn try_norm(self) -> Option<Self> {
        let mag = self.mag();
        if mag > 0.0 && mag.is_finite() {
            Some(Self {
                x: self.x / mag,
                y: self.y / mag,
            })
        } else {
            None
        }
    }

    /// Like [`Vector2::try_norm`] but degenerate vectors map to `ZERO`.
    pub fn norm(self) -> Self {
        self.try_norm().unwrap_or(Self::ZERO)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, o: Vector2) -> Vector2 {
        Vector2::new(self.x + o.x, self.y + o.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, o: Vector2) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, o: Vector2) -> Vector2 {
        Vector2::new(self.x - o.x, self.y - o.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, o: Vector2) {
        self.x -= o.x;
        self.y -= o.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, s: f64) -> Vector2 {
        self.scale(s)
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// Axis-aligned box. `pos` is the top-left corner, `extents` the width and height.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub pos: Vector2,
    pub extents: Vector2,
}

impl Rect {
    pub const fn new(pos: Vector2, extents: Vector2) -> Self {
        Self { pos, extents }
    }

    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            extents: Vector2::new(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.extents.x
    }

    pub fn height(&self) -> f64 {
        self.extents.y
    }

    pub fn left(&self) -> f64 {
        self.pos.x
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.extents.x
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.extents.y
    }

    pub fn center(&self) -> Vector2 {
        self.pos + self.extents * 0.5
    }

    pub fn translated(&self, offset: Vector2) -> Rect {
        Rect::new(self.pos + offset, self.extents)
    }

    /// Finite position and finite, non-negative extents.
    pub fn is_valid(&self) -> bool {
        self.pos.is_finite()
            && self.extents.is_finite()
            && self.extents.x >= 0.0
            && self.extents.y >= 0.0
    }

    /// Open-interval overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        collision_detection::rectangle_rectangle(self, other)
    }

    /// Closed-interval containment of `other` inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        collision_detection::rectangle_contains_rectangle(self, other)
    }

    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    pub fn get_random_point_inside<R: Rng>(&self, margin: Vector2, rng: &mut R) -> Vector2 {
        Vector2::new(
            safe_rand_f64(rng, self.left(), self.right() - margin.x),
            safe_rand_f64(rng, self.top(), self.bottom() - margin.y),
        )
    }
}

// Collapses to `min` instead of panicking on an empty range.
fn safe_rand_f64<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CircleCollider {
    pub pos: Vector2,
    pub r: f64,
}

impl CircleCollider {
    pub const fn new(pos: Vector2, r: f64) -> Self {
        Self { pos, r }
    }

    pub fn collides(&self, other: &CircleCollider) -> bool {
        collision_detection::circle_circle(self, other)
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_xywh(
            self.pos.x - self.r,
            self.pos.y - self.r,
            self.r * 2.0,
            self.r * 2.0,
        )
    }
}
