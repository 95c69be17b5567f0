pub mod config;
pub mod enemy;
pub mod error;
pub mod player;
pub mod world;

pub use config::{AmbientEmitterConfig, EnemyConfig, PlayerConfig, WorldConfig};
pub use enemy::Enemy;
pub use error::{SimError, SimResult};
pub use player::{Facing, Player};
pub use world::{TickInput, World};
