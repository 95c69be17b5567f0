//! Per-tick world context.
//!
//! `World` owns the wall quadtree (built once), the enemy grid (rebuilt every
//! tick), the movers and the ambient emitters, and hands them to each other
//! explicitly. An external stepper calls [`World::tick`] at a fixed rate;
//! renderers and debug overlays only read through the accessors.

use collisions::push_apart;
use common::shapes::{Rect, Vector2};
use grid::SpatialGrid;
use log::{debug, info, trace};
use pool::ParticleEmitter;
use quadtree::{Entity, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::WorldConfig;
use crate::enemy::Enemy;
use crate::error::SimResult;
use crate::player::Player;

/// Input sampled by the stepper for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub movement: Vector2,
    pub shoot: bool,
}

pub struct World {
    walls: QuadTree,
    enemy_grid: SpatialGrid<usize>,
    player: Player,
    enemies: Vec<Enemy>,
    emitters: Vec<ParticleEmitter>,
    rng: StdRng,
    tick_count: u64,
    wall_buffer: Vec<Rect>,
    nearby: Vec<usize>,
}

impl World {
    pub fn new(config: WorldConfig, seed: u64) -> SimResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let player = Player::new(&config.player);
        let walls = build_walls(&config, player.rect(), &mut rng)?;

        let spawn_margin = Vector2::new(config.enemy.radius, config.enemy.radius) * 2.0;
        let enemies: Vec<Enemy> = (0..config.enemy_count)
            .map(|_| {
                let corner = config.bounds.get_random_point_inside(spawn_margin, &mut rng);
                Enemy::new(corner + spawn_margin * 0.5, &config.enemy)
            })
            .collect();

        let mut enemy_grid = SpatialGrid::new(config.grid.clone())?;
        enemy_grid.rebuild(enemies.iter().map(Enemy::pos).enumerate());

        let emitters = config
            .emitters
            .iter()
            .map(|ambient| ParticleEmitter::new(ambient.pos, ambient.emitter.clone()))
            .collect();

        info!(
            "world built: {} walls, {} enemies, {} quadtree nodes",
            walls.len(),
            enemies.len(),
            walls.node_count()
        );

        Ok(World {
            walls,
            enemy_grid,
            player,
            enemies,
            emitters,
            rng,
            tick_count: 0,
            wall_buffer: Vec::new(),
            nearby: Vec::new(),
        })
    }

    /// Advances the world by one tick: movers, then the grid, then the pools.
    pub fn tick(&mut self, input: &TickInput) {
        if self
            .player
            .move_by(input.movement, &self.walls, &mut self.wall_buffer)
        {
            self.player.tick_trail(&mut self.rng);
        }
        if input.shoot {
            if let Err(err) = self.player.shoot(&mut self.rng) {
                trace!("shot dropped: {}", err);
            }
        }

        let target = self.player.rect().center();
        for i in 0..self.enemies.len() {
            self.enemies[i].chase(target, &self.walls, &mut self.wall_buffer);

            self.enemy_grid
                .nearby_into(self.enemies[i].pos(), &mut self.nearby);
            for &j in &self.nearby {
                if let Some((a, b)) = pair_mut(&mut self.enemies, i, j) {
                    push_apart(&mut a.collider, &mut b.collider);
                }
            }
        }

        self.enemy_grid
            .rebuild(self.enemies.iter().map(Enemy::pos).enumerate());

        self.player.update();
        for emitter in &mut self.emitters {
            let dir = Vector2::new(
                (self.rng.gen::<f64>() - 0.5) * 2.0,
                -(self.rng.gen::<f64>() / 2.0) - 0.5,
            );
            if let Err(err) = emitter.emit(dir, &mut self.rng) {
                trace!("ambient particle dropped: {}", err);
            }
            emitter.update();
        }

        self.tick_count += 1;
    }

    pub fn walls(&self) -> &QuadTree {
        &self.walls
    }

    pub fn enemy_grid(&self) -> &SpatialGrid<usize> {
        &self.enemy_grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn emitters(&self) -> &[ParticleEmitter] {
        &self.emitters
    }

    pub fn query_walls(&self, area: &Rect) -> Vec<Entity> {
        self.walls.query(area)
    }

    /// Indices of enemies registered in the grid cells around `pos` as of
    /// the last rebuild.
    pub fn nearby_enemies(&self, pos: Vector2) -> Vec<usize> {
        self.enemy_grid.get_nearby(pos)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

fn build_walls(config: &WorldConfig, spawn: Rect, rng: &mut StdRng) -> SimResult<QuadTree> {
    let mut walls = QuadTree::new_with_config(config.bounds, config.quadtree.clone())?;
    let mut next_id = 0u32;
    let mut add = |walls: &mut QuadTree, rect: Rect| {
        let id = next_id;
        next_id += 1;
        if rect.intersects(&spawn) {
            debug!("wall {} skipped: overlaps the player spawn", id);
            return;
        }
        if let Err(err) = walls.try_insert(Entity::new(id, rect)) {
            debug!("wall {} dropped: {}", id, err);
        }
    };

    for &rect in &config.walls {
        add(&mut walls, rect);
    }

    let max_size = config.max_wall_size.max(0.0);
    let margin = Vector2::new(20.0, 20.0);
    for _ in 0..config.random_walls {
        let pos = config.bounds.get_random_point_inside(margin, rng);
        let extents = Vector2::new(rng.gen::<f64>() * max_size, rng.gen::<f64>() * max_size);
        add(&mut walls, Rect::new(pos, extents));
    }
    Ok(walls)
}

fn pair_mut(enemies: &mut [Enemy], i: usize, j: usize) -> Option<(&mut Enemy, &mut Enemy)> {
    if i == j || i.max(j) >= enemies.len() {
        return None;
    }
    if i < j {
        let (head, tail) = enemies.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = enemies.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
