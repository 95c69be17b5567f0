pub mod config;
pub mod error;
pub mod spatial_grid;

pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use spatial_grid::SpatialGrid;
