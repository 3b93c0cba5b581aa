//! Scripted pilot for headless runs

use crate::config::GameConfig;
use crate::sim::{GameState, TickInput};

/// Vertical distance at which an incoming enemy bullet is dodged
const DODGE_RANGE: f32 = 150.0;

/// Pick this frame's input: dodge close enemy fire, otherwise line up under
/// the lowest enemy. Always holds fire.
pub fn autopilot(state: &GameState, config: &GameConfig) -> TickInput {
    let player = &state.player;
    let center = player.center().x;
    let left = player.pos.x;
    let right = player.pos.x + player.size.x;

    let threat = state.enemy_bullets.iter().find(|b| {
        let x = b.center().x;
        let above = player.pos.y - b.pos.y;
        x > left - 10.0 && x < right + 10.0 && (0.0..DODGE_RANGE).contains(&above)
    });

    let target_x = match threat {
        // Head for whichever side has more room
        Some(_) if center > config.canvas_width / 2.0 => Some(0.0),
        Some(_) => Some(config.canvas_width),
        None => state
            .enemies
            .iter()
            .filter(|e| e.pos.y + e.size.y > 0.0)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.center().x),
    };

    let (move_left, move_right) = match target_x {
        Some(x) if x < center - player.speed => (true, false),
        Some(x) if x > center + player.speed => (false, true),
        _ => (false, false),
    };

    TickInput {
        move_left,
        move_right,
        fire: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ENEMY_COLOR;
    use crate::sim::state::{Bullet, Direction, Enemy};
    use glam::Vec2;

    fn enemy(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 40.0),
            speed: 1.2,
            color: ENEMY_COLOR,
        }
    }

    #[test]
    fn test_chases_lowest_visible_enemy() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.enemies.push(enemy(700.0, 50.0));
        state.enemies.push(enemy(20.0, 200.0));
        state.enemies.push(enemy(700.0, -300.0));

        let input = autopilot(&state, &config);
        assert!(input.move_left && !input.move_right && input.fire);
    }

    #[test]
    fn test_holds_position_when_aligned() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.enemies.push(enemy(380.0, 100.0));
        let input = autopilot(&state, &config);
        assert!(!input.move_left && !input.move_right);
    }

    #[test]
    fn test_dodges_incoming_fire() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.player.pos.x = 100.0;
        state.enemy_bullets.push(Bullet {
            pos: Vec2::new(122.0, 450.0),
            size: Vec2::new(6.0, 16.0),
            speed: 5.0,
            direction: Direction::Down,
        });
        let input = autopilot(&state, &config);
        assert!(input.move_right);
    }
}
