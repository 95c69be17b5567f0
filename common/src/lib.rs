pub mod collision_detection;
pub mod shapes;
pub mod task;

pub use shapes::{CircleCollider, Rect, Vector2};
pub use task::{ScheduledTask, Task};
