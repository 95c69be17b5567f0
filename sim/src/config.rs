use common::shapes::{Rect, Vector2};
use grid::GridConfig;
use pool::{BulletConfig, EmitterConfig};

#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub bounds: Rect,
    pub quadtree: quadtree::Config,
    /// Walls inserted as-is before the random ones.
    pub walls: Vec<Rect>,
    pub random_walls: usize,
    /// Upper bound for the width and height of a random wall.
    pub max_wall_size: f64,
    pub enemy_count: usize,
    pub grid: GridConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub emitters: Vec<AmbientEmitterConfig>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            bounds: Rect::from_xywh(0.0, 0.0, 960.0, 600.0),
            quadtree: quadtree::Config::default(),
            walls: Vec::new(),
            random_walls: 50,
            max_wall_size: 80.0,
            enemy_count: 100,
            grid: GridConfig::default(),
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            emitters: vec![
                AmbientEmitterConfig::new(Vector2::new(100.0, 150.0), 90, 120, 0.3, 0.5),
                AmbientEmitterConfig::new(Vector2::new(200.0, 200.0), 60, 90, 0.6, 0.8),
                AmbientEmitterConfig::new(Vector2::new(300.0, 150.0), 120, 150, 0.2, 0.4),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Top-left corner of the hitbox at spawn.
    pub spawn: Vector2,
    pub size: Vector2,
    pub speed: f64,
    /// Ticks of movement between two trail particles.
    pub emit_interval: u32,
    pub trail: EmitterConfig,
    pub bullets: BulletConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            spawn: Vector2::new(100.0, 100.0),
            size: Vector2::new(32.0, 32.0),
            speed: 1.25,
            emit_interval: 1,
            trail: EmitterConfig::default(),
            bullets: BulletConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnemyConfig {
    pub radius: f64,
    pub speed: f64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        EnemyConfig {
            radius: 16.0,
            speed: 0.33,
        }
    }
}

/// A fixed emitter that sprays one particle per tick.
#[derive(Debug, Clone)]
pub struct AmbientEmitterConfig {
    pub pos: Vector2,
    pub emitter: EmitterConfig,
}

impl AmbientEmitterConfig {
    pub fn new(
        pos: Vector2,
        lifetime_min: i32,
        lifetime_max: i32,
        speed_min: f64,
        speed_max: f64,
    ) -> Self {
        AmbientEmitterConfig {
            pos,
            emitter: EmitterConfig {
                lifetime_min,
                lifetime_max,
                speed_min,
                speed_max,
                ..EmitterConfig::default()
            },
        }
    }
}
