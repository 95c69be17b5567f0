pub mod dynamic;
pub mod error;
pub mod quadtree;

pub use dynamic::DynamicQuadTree;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, Entity, NodeView, QuadTree};
