use common::shapes::{Rect, Vector2};
use grid::GridConfig;
use sim::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn empty_config() -> WorldConfig {
    WorldConfig {
        random_walls: 0,
        enemy_count: 0,
        emitters: Vec::new(),
        ..WorldConfig::default()
    }
}

fn assert_player_clear(world: &World) {
    let rect = world.player().rect();
    assert!(
        world.query_walls(&rect).is_empty(),
        "player {:?} overlaps a wall after tick {}",
        rect,
        world.tick_count()
    );
}

#[test]
fn test_default_world() {
    let world = World::new(WorldConfig::default(), 42).unwrap();
    assert!(world.walls().len() <= 50);
    assert!(!world.walls().is_empty());
    assert_eq!(world.enemies().len(), 100);
    assert_eq!(world.enemy_grid().len(), 100);
    assert_eq!(world.emitters().len(), 3);
    assert_eq!(world.tick_count(), 0);

    let bounds = Rect::from_xywh(0.0, 0.0, 960.0, 600.0);
    for enemy in world.enemies() {
        assert!(bounds.contains(&enemy.collider.bounding_rect()));
    }
    assert_player_clear(&world);
}

#[test]
fn test_same_seed_same_world() {
    let mut a = World::new(WorldConfig::default(), 7).unwrap();
    let mut b = World::new(WorldConfig::default(), 7).unwrap();
    let input = TickInput {
        movement: Vector2::new(1.0, 0.5),
        shoot: true,
    };
    for _ in 0..60 {
        a.tick(&input);
        b.tick(&input);
    }
    assert_eq!(a.player().rect(), b.player().rect());
    assert_eq!(a.enemies(), b.enemies());
    assert_eq!(a.player().bullets().len(), b.player().bullets().len());
}

#[test]
fn test_tick_keeps_player_out_of_walls() {
    let config = WorldConfig {
        walls: vec![
            Rect::from_xywh(200.0, 90.0, 40.0, 60.0),
            Rect::from_xywh(0.0, 300.0, 500.0, 20.0),
        ],
        ..empty_config()
    };
    let mut world = World::new(config, 1).unwrap();
    assert_eq!(world.walls().len(), 2);

    let right = TickInput {
        movement: Vector2::new(1.0, 0.0),
        shoot: false,
    };
    for _ in 0..100 {
        world.tick(&right);
        assert_player_clear(&world);
    }
    assert!(approx(world.player().rect().right(), 200.0));
    assert_eq!(world.player().facing(), Facing::Right);

    // slide down along the wall face, then past it
    let diagonal = TickInput {
        movement: Vector2::new(1.0, 1.0),
        shoot: false,
    };
    for _ in 0..120 {
        world.tick(&diagonal);
        assert_player_clear(&world);
    }
    let rect = world.player().rect();
    assert!(rect.top() >= 150.0);
    assert!(rect.left() > 168.0);

    // straight down onto the floor wall
    let down = TickInput {
        movement: Vector2::new(0.0, 1.0),
        shoot: false,
    };
    for _ in 0..200 {
        world.tick(&down);
        assert_player_clear(&world);
    }
    assert!(approx(world.player().rect().bottom(), 300.0));
}

#[test]
fn test_zero_movement_keeps_player_still() {
    let mut world = World::new(empty_config(), 3).unwrap();
    let start = world.player().rect();
    for _ in 0..10 {
        world.tick(&TickInput::default());
    }
    assert_eq!(world.player().rect(), start);
    assert!(world.player().trail().is_empty());
    assert_eq!(world.tick_count(), 10);
}

#[test]
fn test_trail_follows_movement() {
    let mut world = World::new(empty_config(), 3).unwrap();
    let input = TickInput {
        movement: Vector2::new(-1.0, 0.0),
        shoot: false,
    };
    for _ in 0..5 {
        world.tick(&input);
    }
    let player = world.player();
    assert_eq!(player.trail().len(), 5);
    // left-facing trail sits near the right edge of the hitbox
    let rect = player.rect();
    assert!(approx(player.trail().pos.x, rect.right() - 10.0));
    assert!(approx(player.trail().pos.y, rect.bottom() - 4.0));
    for particle in player.trail().particles() {
        assert!(particle.vel.x > 0.0);
        assert!(particle.vel.y < 0.0);
    }
}

#[test]
fn test_shoot_along_facing() {
    let mut world = World::new(empty_config(), 5).unwrap();
    world.tick(&TickInput {
        movement: Vector2::ZERO,
        shoot: true,
    });
    let bullets = world.player().bullets();
    assert_eq!(bullets.len(), 1);
    assert!(bullets.bullets()[0].vel.x < 0.0);

    world.tick(&TickInput {
        movement: Vector2::new(1.0, 0.0),
        shoot: true,
    });
    let player = world.player();
    assert_eq!(player.bullets().len(), 2);
    assert!(player.bullets().bullets()[1].vel.x > 0.0);
    assert!(approx(player.bullets().pos.x, player.rect().right()));
}

#[test]
fn test_enemy_steps_toward_player() {
    let config = WorldConfig {
        enemy_count: 1,
        ..empty_config()
    };
    let mut world = World::new(config, 11).unwrap();
    let target = world.player().rect().center();
    let before = world.enemies()[0].pos().distance(target);
    assert!(before > 1.0);

    world.tick(&TickInput::default());
    let after = world.enemies()[0].pos().distance(target);
    assert!(approx(before - after, world.enemies()[0].speed));
}

#[test]
fn test_enemies_stay_valid_over_time() {
    let mut world = World::new(WorldConfig::default(), 99).unwrap();
    let input = TickInput {
        movement: Vector2::new(0.0, 1.0),
        shoot: false,
    };
    for _ in 0..300 {
        world.tick(&input);
    }
    for enemy in world.enemies() {
        let pos = enemy.pos();
        assert!(pos.is_finite());
        assert!(pos.x >= 0.0 && pos.y >= 0.0);
    }
    let in_grid = world
        .enemies()
        .iter()
        .filter(|enemy| world.enemy_grid().cell_index(enemy.pos()).is_some())
        .count();
    assert_eq!(world.enemy_grid().len(), in_grid);

    let first = world.enemies()[0].pos();
    assert!(world.nearby_enemies(first).contains(&0));
}

#[test]
fn test_ambient_emitters_emit_every_tick() {
    let mut world = World::new(
        WorldConfig {
            random_walls: 0,
            enemy_count: 0,
            ..WorldConfig::default()
        },
        2,
    )
    .unwrap();
    for _ in 0..20 {
        world.tick(&TickInput::default());
    }
    for emitter in world.emitters() {
        assert_eq!(emitter.len(), 20);
    }
}

#[test]
fn test_rejected_walls_are_dropped() {
    let config = WorldConfig {
        walls: vec![
            Rect::from_xywh(400.0, 400.0, 20.0, 20.0),
            Rect::from_xywh(950.0, 10.0, 40.0, 40.0),
            // overlaps the player spawn
            Rect::from_xywh(90.0, 90.0, 20.0, 20.0),
        ],
        ..empty_config()
    };
    let world = World::new(config, 4).unwrap();
    assert_eq!(world.walls().len(), 1);
    assert_eq!(world.query_walls(&Rect::from_xywh(0.0, 0.0, 960.0, 600.0))[0].id, 0);
}

#[test]
fn test_invalid_config() {
    let config = WorldConfig {
        grid: GridConfig {
            width: 4,
            height: 4,
            cell_size: 0.0,
        },
        ..empty_config()
    };
    assert!(matches!(World::new(config, 0), Err(SimError::Grid(_))));

    let config = WorldConfig {
        bounds: Rect::from_xywh(0.0, 0.0, -5.0, 10.0),
        ..empty_config()
    };
    assert!(matches!(World::new(config, 0), Err(SimError::Walls(_))));
}
