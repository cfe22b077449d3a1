//! Per-frame simulation and input resolution
//!
//! Time is always supplied by the caller as monotonic seconds; nothing here
//! reads a clock.

use glam::Vec2;
use rand::Rng;

use super::state::{GamePhase, GameSession, SessionConfig};

/// Advance the session to `now`: spawn, grow, and expire circles
pub fn update<R: Rng>(state: &mut GameSession<R>, now: f64) {
    if state.phase != GamePhase::Running {
        return;
    }

    let diff = (now - state.last_update_time).min(state.config.max_tick_secs);
    let scale = SessionConfig::level_scale(state.level);

    state.spawn_residue += diff * state.config.base_spawn_rate * scale;
    let num_spawn = state.spawn_residue.floor().max(0.0);
    state.spawn_residue -= num_spawn;

    // Circles spawned this tick start at radius 0, so grow first
    let radius_inc = (diff * state.config.base_radius_rate * scale) as f32;
    for circle in &mut state.circles {
        circle.set_radius(circle.radius() + radius_inc);
    }

    let max_area = state.config.max_circle_area;
    let before = state.circles.len();
    state.circles.retain(|c| f64::from(c.area()) <= max_area);
    let overflowed = (before - state.circles.len()) as u32;

    if overflowed > 0 {
        state.show_lost_life = true;
        state.lives = state.lives.saturating_sub(overflowed);
        log::debug!("{} circle(s) overflowed, {} lives left", overflowed, state.lives);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::debug!("Game over at level {} with score {:.0}", state.level, state.score);
        }
    }

    if state.phase == GamePhase::Running {
        for _ in 0..num_spawn as u64 {
            state.spawn_circle();
        }
    }

    state.last_update_time = now;
}

/// Resolve a tap at a normalized point. Returns the score awarded, if any.
///
/// Only the first circle hit (in spawn order) is popped, even when circles
/// overlap.
pub fn handle_tap<R: Rng>(state: &mut GameSession<R>, point: Vec2, aspect: f32) -> Option<f64> {
    if state.phase != GamePhase::Running {
        return None;
    }

    let idx = state.circles.iter().position(|c| c.contains(point, aspect))?;
    let circle = state.circles.remove(idx);

    let points = ((state.config.max_circle_area - f64::from(circle.area()))
        * 10.0
        * f64::from(state.level))
    .max(0.0);
    state.score += points;
    state.popped += 1;

    if state.popped >= state.config.circles_per_level {
        state.level += 1;
        state.popped = 0;
        log::debug!("Level up: {}", state.level);
    }

    Some(points)
}

/// Pause/unpause, or start a new run from the title and game-over screens
pub fn toggle_pause<R: Rng>(state: &mut GameSession<R>, now: f64) {
    match state.phase {
        GamePhase::NotStarted | GamePhase::GameOver => state.reset(now),
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            state.last_update_time = now;
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            // Don't credit paused time to spawn/growth
            state.last_update_time = now;
        }
    }
}

impl<R: Rng> GameSession<R> {
    pub fn update(&mut self, now: f64) {
        update(self, now);
    }

    pub fn handle_tap(&mut self, point: Vec2, aspect: f32) -> Option<f64> {
        handle_tap(self, point, aspect)
    }

    pub fn toggle_pause(&mut self, now: f64) {
        toggle_pause(self, now);
    }
}
