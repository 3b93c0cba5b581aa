//! Scene building: game state to a triangle list in canvas pixels
//!
//! Draw order (back to front): stars, player, enemies, player bullets, enemy
//! bullets, power-ups, particles, phase overlay. Text (HUD, captions) lives
//! in the page, not on the canvas.

use glam::Vec2;

use super::shapes::{ROUND_SEGMENTS, circle, ellipse, rect, triangle};
use super::vertex::{Vertex, colors, hex_to_rgba};
use crate::config::GameConfig;
use crate::sim::state::{Bullet, Enemy, GamePhase, GameState, Player, PowerUp, PowerUpKind};

/// Background star count
pub const STAR_COUNT: u32 = 100;

/// Visual half-extents of a bullet (hitbox is 6×16)
const BULLET_RADII: Vec2 = Vec2::new(3.0, 8.0);

/// Build every vertex for one frame
pub fn build_scene(state: &GameState, config: &GameConfig) -> Vec<Vertex> {
    let canvas = Vec2::new(config.canvas_width, config.canvas_height);
    let mut out = Vec::with_capacity(4096);

    stars(&mut out, canvas);

    if state.phase != GamePhase::Idle {
        player(&mut out, &state.player);
        for enemy in &state.enemies {
            self::enemy(&mut out, enemy);
        }
        for bullet in &state.player_bullets {
            self::bullet(&mut out, bullet, colors::PLAYER_BULLET);
        }
        for bullet in &state.enemy_bullets {
            self::bullet(&mut out, bullet, colors::ENEMY_BULLET);
        }
        for power_up in &state.power_ups {
            self::power_up(&mut out, power_up);
        }
        for p in &state.particles {
            let alpha = (p.life as f32 / 100.0).clamp(0.0, 1.0);
            circle(&mut out, p.pos, p.size, hex_to_rgba(p.color, alpha), ROUND_SEGMENTS);
        }
    }

    overlay(&mut out, state.phase, canvas);
    out
}

/// Deterministic star field (same positions every frame)
fn stars(out: &mut Vec<Vertex>, canvas: Vec2) {
    if canvas.x <= 0.0 || canvas.y <= 0.0 {
        return;
    }
    for i in 0..STAR_COUNT {
        let pos = Vec2::new((i as f32 * 7.9) % canvas.x, (i as f32 * 5.3) % canvas.y);
        let size = (i % 3) as f32 * 0.5 + 0.5;
        circle(out, pos, size, colors::STAR, 8);
    }
}

/// Upward-pointing hull, cockpit, engine glow
fn player(out: &mut Vec<Vertex>, player: &Player) {
    let Vec2 { x, y } = player.pos;
    let Vec2 { x: w, y: h } = player.size;
    let cx = x + w / 2.0;

    triangle(
        out,
        Vec2::new(cx, y),
        Vec2::new(x + w, y + h),
        Vec2::new(x, y + h),
        hex_to_rgba(colors::PLAYER, 1.0),
    );
    rect(
        out,
        Vec2::new(cx - 10.0, y + 10.0),
        Vec2::new(20.0, 20.0),
        hex_to_rgba(colors::COCKPIT, 1.0),
    );
    ellipse(
        out,
        Vec2::new(cx, y + h + 5.0),
        Vec2::new(10.0, 5.0),
        hex_to_rgba(colors::ENGINE_GLOW, 1.0),
        ROUND_SEGMENTS,
    );
}

/// Downward-pointing hull with a detail stripe
fn enemy(out: &mut Vec<Vertex>, enemy: &Enemy) {
    let Vec2 { x, y } = enemy.pos;
    let Vec2 { x: w, y: h } = enemy.size;
    let color = hex_to_rgba(enemy.color, 1.0);

    triangle(
        out,
        Vec2::new(x + w / 2.0, y + h),
        Vec2::new(x + w, y),
        Vec2::new(x, y),
        color,
    );
    rect(
        out,
        Vec2::new(x + w / 2.0 - 8.0, y + 15.0),
        Vec2::new(16.0, 10.0),
        color,
    );
}

fn bullet(out: &mut Vec<Vertex>, bullet: &Bullet, color: u32) {
    ellipse(
        out,
        bullet.center(),
        BULLET_RADII,
        hex_to_rgba(color, 1.0),
        ROUND_SEGMENTS,
    );
}

/// Colored disc with a white mark (bolt for speed, dot for life)
fn power_up(out: &mut Vec<Vertex>, power_up: &PowerUp) {
    let c = power_up.pos;
    let r = power_up.radius;
    circle(out, c, r, hex_to_rgba(power_up.color, 1.0), 16);

    let mark = colors::POWER_UP_MARK;
    match power_up.kind {
        PowerUpKind::Speed => {
            triangle(
                out,
                c + Vec2::new(0.2 * r, -0.6 * r),
                c + Vec2::new(-0.4 * r, 0.1 * r),
                c + Vec2::new(0.05 * r, 0.1 * r),
                mark,
            );
            triangle(
                out,
                c + Vec2::new(-0.05 * r, -0.1 * r),
                c + Vec2::new(0.4 * r, -0.1 * r),
                c + Vec2::new(-0.2 * r, 0.6 * r),
                mark,
            );
        }
        PowerUpKind::Life => circle(out, c, 0.4 * r, mark, ROUND_SEGMENTS),
    }
}

/// Full-canvas tint plus an icon, depending on the phase
fn overlay(out: &mut Vec<Vertex>, phase: GamePhase, canvas: Vec2) {
    let center = canvas / 2.0;
    match phase {
        GamePhase::Running => {}
        GamePhase::Paused => {
            rect(out, Vec2::ZERO, canvas, colors::PAUSE_OVERLAY);
            // Pause bars
            let bar = Vec2::new(12.0, 48.0);
            rect(out, center + Vec2::new(-20.0, -24.0), bar, colors::OVERLAY_ICON);
            rect(out, center + Vec2::new(8.0, -24.0), bar, colors::OVERLAY_ICON);
        }
        GamePhase::Idle => {
            rect(out, Vec2::ZERO, canvas, colors::IDLE_OVERLAY);
            // Play arrow
            triangle(
                out,
                center + Vec2::new(-18.0, -24.0),
                center + Vec2::new(26.0, 0.0),
                center + Vec2::new(-18.0, 24.0),
                colors::OVERLAY_ICON,
            );
        }
        GamePhase::GameOver => rect(out, Vec2::ZERO, canvas, colors::GAME_OVER_OVERLAY),
    }
}
