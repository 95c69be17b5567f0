pub mod separation;
pub mod sliding;

pub use separation::{circle_contact, push_apart, CircleContact};
pub use sliding::{resolve_x, resolve_y, slide, slide_with_buffer, Obstacles};
