pub mod actor_pool;
pub mod bullets;
pub mod config;
pub mod error;
pub mod particles;

pub use actor_pool::{ActorPool, Transient};
pub use bullets::{Bullet, BulletManager, BulletState};
pub use config::{BulletConfig, EmitterConfig};
pub use error::{PoolError, PoolResult};
pub use particles::{Particle, ParticleEmitter};
