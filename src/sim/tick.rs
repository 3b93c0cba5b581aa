//! Per-frame simulation step
//!
//! Advances every entity list once, resolves collisions and applies scoring,
//! life loss and level progression. Sub-steps run in a fixed order so the same
//! random draws always produce the same frame.

use glam::Vec2;

use super::collision::collides;
use super::rng::RandomSource;
use super::spawn::{
    spawn_collect_effect, spawn_enemy, spawn_enemy_bullet, spawn_explosion, spawn_level_up_effect,
    spawn_player_bullet, spawn_power_up,
};
use super::state::{GameEvent, GamePhase, GameState, PowerUpKind};
use crate::config::GameConfig;
use crate::consts::{BASE_ENEMY_COUNT, ENEMY_KILL_SCORE};

/// Input intents sampled once per frame (device independent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire held (subject to the cooldown)
    pub fire: bool,
}

/// Advance a running game by one frame
///
/// `dt_ms` only feeds the simulation clock (fire cooldown); movement is per
/// tick. Does nothing unless the phase is [`GamePhase::Running`]. If the last
/// life is lost mid-step the step stops right there.
pub fn advance(
    state: &mut GameState,
    input: &TickInput,
    dt_ms: f64,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) {
    if halted(state) {
        return;
    }
    state.time_ms += dt_ms.max(0.0);

    move_player(state, input, config);
    fire(state, input);
    update_player_bullets(state, config, rng);

    update_enemies(state, config, rng);
    if halted(state) {
        return;
    }
    update_enemy_bullets(state, config, rng);
    if halted(state) {
        return;
    }

    update_power_ups(state, config, rng);
    update_particles(state);
    replenish_enemies(state, config, rng);
    check_level_up(state, config, rng);
}

#[inline]
fn halted(state: &GameState) -> bool {
    state.phase != GamePhase::Running
}

fn move_player(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    let player = &mut state.player;
    player.moving_left = input.move_left;
    player.moving_right = input.move_right;

    let mut dx = 0.0;
    if input.move_left {
        dx -= player.speed;
    }
    if input.move_right {
        dx += player.speed;
    }
    let max_x = player.max_x(config);
    player.pos.x = (player.pos.x + dx).clamp(0.0, max_x);
}

fn fire(state: &mut GameState, input: &TickInput) {
    if input.fire && state.player.can_fire(state.time_ms) {
        state.player_bullets.push(spawn_player_bullet(&state.player));
        state.player.last_shot_ms = Some(state.time_ms);
        state.events.push(GameEvent::PlayerShot);
    }
}

fn update_player_bullets(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) {
    let bullets = std::mem::take(&mut state.player_bullets);
    let mut destroyed = vec![false; state.enemies.len()];
    let mut survivors = Vec::with_capacity(bullets.len());

    for mut bullet in bullets {
        bullet.step();
        if bullet.pos.y < 0.0 {
            continue;
        }

        // First live enemy in list order takes the hit
        let hit = (0..state.enemies.len())
            .find(|&i| !destroyed[i] && collides(&bullet, &state.enemies[i]));
        let Some(index) = hit else {
            survivors.push(bullet);
            continue;
        };

        destroyed[index] = true;
        let enemy = &state.enemies[index];
        let center = enemy.center();
        let drop_at = Vec2::new(center.x, enemy.pos.y);

        spawn_explosion(&mut state.particles, center, rng);
        state.score += ENEMY_KILL_SCORE;
        state.events.push(GameEvent::EnemyDestroyed { pos: center });

        if rng.chance(config.power_up_drop_chance) {
            let power_up = spawn_power_up(drop_at, rng);
            state.events.push(GameEvent::PowerUpDropped {
                kind: power_up.kind,
            });
            state.power_ups.push(power_up);
        }
    }

    state.player_bullets = survivors;
    let mut flags = destroyed.into_iter();
    state.enemies.retain(|_| !flags.next().unwrap_or(false));
}

fn update_enemies(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) {
    let fire_chance = config.enemy_fire_chance(state.level);
    let enemies = std::mem::take(&mut state.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());
    let mut pending = enemies.into_iter();

    while let Some(mut enemy) = pending.next() {
        enemy.pos.y += enemy.speed;
        if enemy.pos.y > config.canvas_height {
            continue;
        }

        if rng.chance(fire_chance) {
            state.enemy_bullets.push(spawn_enemy_bullet(&enemy));
            state.events.push(GameEvent::EnemyFired);
        }

        if collides(&state.player, &enemy) {
            if lose_life(state, config, rng) {
                survivors.extend(pending.by_ref());
                break;
            }
            continue;
        }

        survivors.push(enemy);
    }

    state.enemies = survivors;
}

fn update_enemy_bullets(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) {
    let bullets = std::mem::take(&mut state.enemy_bullets);
    let mut survivors = Vec::with_capacity(bullets.len());
    let mut pending = bullets.into_iter();

    while let Some(mut bullet) = pending.next() {
        bullet.step();
        if bullet.pos.y > config.canvas_height {
            continue;
        }

        if collides(&state.player, &bullet) {
            if lose_life(state, config, rng) {
                survivors.extend(pending.by_ref());
                break;
            }
            continue;
        }

        survivors.push(bullet);
    }

    state.enemy_bullets = survivors;
}

fn update_power_ups(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) {
    let power_ups = std::mem::take(&mut state.power_ups);
    let mut survivors = Vec::with_capacity(power_ups.len());

    for mut power_up in power_ups {
        power_up.pos.y += power_up.speed;
        if power_up.pos.y > config.canvas_height {
            continue;
        }

        if collides(&state.player, &power_up) {
            apply_power_up(state, power_up.kind, config, rng);
            continue;
        }

        survivors.push(power_up);
    }

    state.power_ups = survivors;
}

fn update_particles(state: &mut GameState) {
    state.particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life -= 1;
        p.life > 0
    });
}

fn replenish_enemies(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) {
    if state.enemies.len() < BASE_ENEMY_COUNT + 2 * state.level as usize {
        let enemy = spawn_enemy(state.level, config, rng);
        state.enemies.push(enemy);
    }
}

fn check_level_up(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) {
    if state.score < config.level_threshold(state.level) {
        return;
    }

    state.level += 1;
    state.player.speed =
        (state.player.speed + config.player_speed_step).min(config.player_max_speed);
    spawn_level_up_effect(
        &mut state.particles,
        Vec2::new(config.canvas_width, config.canvas_height),
        rng,
    );
    state.events.push(GameEvent::LevelUp { level: state.level });
    log::info!("Level {} reached at score {}", state.level, state.score);
}

/// Explosion, life loss and recentering; returns true if that was the last life
fn lose_life(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomSource) -> bool {
    spawn_explosion(&mut state.particles, state.player.center(), rng);
    state.lives = state.lives.saturating_sub(1);
    state.player.recenter(config);
    state.events.push(GameEvent::PlayerHit {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.game_over();
        true
    } else {
        false
    }
}

fn apply_power_up(
    state: &mut GameState,
    kind: PowerUpKind,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) {
    match kind {
        PowerUpKind::Speed => {
            let player = &mut state.player;
            player.fire_cooldown_ms = (player.fire_cooldown_ms - config.fire_cooldown_step_ms)
                .max(config.min_fire_cooldown_ms);
        }
        PowerUpKind::Life => state.lives += 1,
    }

    let at = Vec2::new(state.player.center().x, state.player.pos.y);
    spawn_collect_effect(&mut state.particles, at, kind, rng);
    state.events.push(GameEvent::PowerUpCollected { kind });
    log::debug!("Collected {:?} power-up", kind);
}
