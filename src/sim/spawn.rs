//! Entity factories
//!
//! Randomized attributes are drawn from the injected [`RandomSource`] so
//! spawns are reproducible under a seed or a scripted sequence.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Bullet, Direction, Enemy, Particle, Player, PowerUp, PowerUpKind};
use crate::config::GameConfig;
use crate::consts::*;

/// A new enemy somewhere above the canvas, speed scaled by level
pub fn spawn_enemy(level: u32, config: &GameConfig, rng: &mut impl RandomSource) -> Enemy {
    let x = rng.next_f32() * (config.canvas_width - ENEMY_WIDTH).max(0.0);
    let y = -(rng.next_f32() * ENEMY_SPAWN_BAND) - ENEMY_SPAWN_MARGIN;
    Enemy {
        pos: Vec2::new(x, y),
        size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
        speed: config.enemy_speed(level),
        color: ENEMY_COLOR,
    }
}

/// Replace the enemy list with the opening wave (`5 + level` enemies)
pub fn spawn_wave(
    enemies: &mut Vec<Enemy>,
    level: u32,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) {
    enemies.clear();
    let count = BASE_ENEMY_COUNT + level as usize;
    enemies.extend((0..count).map(|_| spawn_enemy(level, config, rng)));
    log::debug!("Spawned opening wave of {count} enemies");
}

/// Bullet centered on the player's nose, heading up
pub fn spawn_player_bullet(player: &Player) -> Bullet {
    Bullet {
        pos: Vec2::new(player.center().x - BULLET_WIDTH / 2.0, player.pos.y),
        size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
        speed: PLAYER_BULLET_SPEED,
        direction: Direction::Up,
    }
}

/// Bullet leaving the enemy's bottom edge, heading down
pub fn spawn_enemy_bullet(enemy: &Enemy) -> Bullet {
    Bullet {
        pos: Vec2::new(
            enemy.center().x - BULLET_WIDTH / 2.0,
            enemy.pos.y + enemy.size.y,
        ),
        size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
        speed: ENEMY_BULLET_SPEED,
        direction: Direction::Down,
    }
}

/// Power-up of a uniformly chosen kind centered at `pos`
pub fn spawn_power_up(pos: Vec2, rng: &mut impl RandomSource) -> PowerUp {
    let kind = if rng.next_f32() < 0.5 {
        PowerUpKind::Speed
    } else {
        PowerUpKind::Life
    };
    PowerUp {
        pos,
        radius: POWER_UP_RADIUS,
        speed: POWER_UP_SPEED,
        kind,
        color: kind.color(),
    }
}

/// Where each particle of a burst starts
#[derive(Clone, Copy)]
enum Origin {
    Point(Vec2),
    /// Uniformly over `[0, w) × [0, h)`
    Scatter(Vec2),
}

/// Shared particle recipe
struct Burst {
    count: usize,
    spread: f32,
    size: (f32, f32),
    life: i32,
    color: u32,
}

impl Burst {
    fn emit(&self, particles: &mut Vec<Particle>, origin: Origin, rng: &mut impl RandomSource) {
        particles.reserve(self.count);
        for _ in 0..self.count {
            let pos = match origin {
                Origin::Point(at) => at,
                Origin::Scatter(area) => {
                    let x = rng.next_f32() * area.x;
                    Vec2::new(x, rng.next_f32() * area.y)
                }
            };
            let vel = Vec2::new(rng.spread(self.spread), rng.spread(self.spread));
            let size = rng.range(self.size.0, self.size.1);
            particles.push(Particle {
                pos,
                vel,
                size,
                color: self.color,
                life: self.life,
            });
        }
    }
}

/// Amber burst where a ship blew up
pub fn spawn_explosion(particles: &mut Vec<Particle>, at: Vec2, rng: &mut impl RandomSource) {
    Burst {
        count: EXPLOSION_PARTICLES,
        spread: EXPLOSION_SPREAD,
        size: EXPLOSION_SIZE,
        life: EXPLOSION_LIFE,
        color: EXPLOSION_COLOR,
    }
    .emit(particles, Origin::Point(at), rng);
}

/// Burst in the power-up's color where it was collected
pub fn spawn_collect_effect(
    particles: &mut Vec<Particle>,
    at: Vec2,
    kind: PowerUpKind,
    rng: &mut impl RandomSource,
) {
    Burst {
        count: COLLECT_PARTICLES,
        spread: COLLECT_SPREAD,
        size: COLLECT_SIZE,
        life: COLLECT_LIFE,
        color: kind.color(),
    }
    .emit(particles, Origin::Point(at), rng);
}

/// Cyan sparkle scattered over the whole canvas
pub fn spawn_level_up_effect(
    particles: &mut Vec<Particle>,
    canvas: Vec2,
    rng: &mut impl RandomSource,
) {
    Burst {
        count: LEVEL_UP_PARTICLES,
        spread: LEVEL_UP_SPREAD,
        size: LEVEL_UP_SIZE,
        life: LEVEL_UP_LIFE,
        color: LEVEL_UP_COLOR,
    }
    .emit(particles, Origin::Scatter(canvas), rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_enemy_spawns_above_canvas() {
        let config = GameConfig::default();
        let mut rng = SeededRandom::new(7);
        for level in 1..5 {
            let enemy = spawn_enemy(level, &config, &mut rng);
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x < config.canvas_width - ENEMY_WIDTH);
            assert!(enemy.pos.y < 0.0);
            assert_eq!(enemy.size, Vec2::new(40.0, 40.0));
            assert!((enemy.speed - (1.0 + level as f32 * 0.2)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scripted_enemy_position() {
        let config = GameConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.5, 0.0]);
        let enemy = spawn_enemy(1, &config, &mut rng);
        assert_eq!(enemy.pos, Vec2::new(380.0, -50.0));
    }

    #[test]
    fn test_wave_replaces_enemies() {
        let config = GameConfig::default();
        let mut rng = SeededRandom::new(1);
        let mut enemies = vec![spawn_enemy(1, &config, &mut rng); 20];
        spawn_wave(&mut enemies, 1, &config, &mut rng);
        assert_eq!(enemies.len(), 6);
        spawn_wave(&mut enemies, 3, &config, &mut rng);
        assert_eq!(enemies.len(), 8);
    }

    #[test]
    fn test_bullet_origins() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let bullet = spawn_player_bullet(&player);
        assert_eq!(bullet.center().x, player.center().x);
        assert_eq!(bullet.pos.y, player.pos.y);
        assert_eq!(bullet.direction, Direction::Up);
        assert_eq!(bullet.speed, 10.0);

        let enemy = Enemy {
            pos: Vec2::new(100.0, 50.0),
            size: Vec2::new(40.0, 40.0),
            speed: 1.2,
            color: ENEMY_COLOR,
        };
        let mut bullet = spawn_enemy_bullet(&enemy);
        assert_eq!(bullet.center().x, 120.0);
        assert_eq!(bullet.pos.y, 90.0);
        bullet.step();
        assert_eq!(bullet.pos.y, 95.0);
    }

    #[test]
    fn test_power_up_kind_choice() {
        let at = Vec2::new(10.0, 20.0);
        let speed = spawn_power_up(at, &mut ScriptedRandom::constant(0.1));
        assert_eq!(speed.kind, PowerUpKind::Speed);
        assert_eq!(speed.color, 0xffff00);
        assert_eq!(speed.radius, 10.0);
        let life = spawn_power_up(at, &mut ScriptedRandom::constant(0.7));
        assert_eq!(life.kind, PowerUpKind::Life);
        assert_eq!(life.pos, at);
    }

    #[test]
    fn test_particle_bursts() {
        let mut rng = SeededRandom::new(3);
        let mut particles = Vec::new();

        spawn_explosion(&mut particles, Vec2::new(5.0, 5.0), &mut rng);
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert_eq!(p.life, 30);
            assert_eq!(p.color, 0xffaa00);
            assert!(p.vel.x.abs() <= 4.0 && p.vel.y.abs() <= 4.0);
            assert!((2.0..6.0).contains(&p.size));
        }

        particles.clear();
        spawn_collect_effect(&mut particles, Vec2::ZERO, PowerUpKind::Life, &mut rng);
        assert_eq!(particles.len(), 20);
        assert!(particles.iter().all(|p| p.life == 50 && p.color == 0xff00ff));
        assert!(particles.iter().all(|p| p.vel.x.abs() <= 2.0 && p.vel.y.abs() <= 2.0));

        particles.clear();
        spawn_level_up_effect(&mut particles, Vec2::new(800.0, 600.0), &mut rng);
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert_eq!(p.life, 60);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!((2.0..7.0).contains(&p.size));
        }
    }
}
