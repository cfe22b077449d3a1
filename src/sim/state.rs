//! Session state and rules configuration
//!
//! Everything a single play session owns lives here and is reset together.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::circle::Circle;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first start
    NotStarted,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Out of lives
    GameOver,
}

/// Game rules. Defaults match the classic tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// A circle whose area exceeds this costs a life
    pub max_circle_area: f64,
    /// Pops needed to advance one level
    pub circles_per_level: u32,
    /// Circles spawned per second at level 0 scaling
    pub base_spawn_rate: f64,
    /// Radius growth per second at level 0 scaling
    pub base_radius_rate: f64,
    /// Lives at the start of a run
    pub starting_lives: u32,
    /// Longest time step a single tick simulates, in seconds. Gaps beyond
    /// this (a suspended host, a stalled frame) are dropped.
    pub max_tick_secs: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_circle_area: 0.5,
            circles_per_level: 20,
            base_spawn_rate: 1.0,
            base_radius_rate: 0.1,
            starting_lives: 5,
            max_tick_secs: 1.0,
        }
    }
}

impl SessionConfig {
    /// Difficulty multiplier applied to both spawn and growth rates
    #[inline]
    pub fn level_scale(level: u32) -> f64 {
        1.0 + f64::from(level) / 5.0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession<R = Pcg32> {
    pub config: SessionConfig,
    pub phase: GamePhase,
    /// Live circles in spawn order
    pub circles: Vec<Circle>,
    pub level: u32,
    pub score: f64,
    /// Pops since the last level-up
    pub popped: u32,
    pub lives: u32,
    /// Fractional circles carried between ticks
    pub spawn_residue: f64,
    /// Timestamp (seconds) of the last simulated tick
    pub last_update_time: f64,
    /// Set when a life is lost, cleared by the next rendered frame
    pub show_lost_life: bool,
    pub(crate) rng: R,
}

impl GameSession<Pcg32> {
    /// Create a session on the title screen with a seeded PCG generator
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R> GameSession<R> {
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Pops still needed to reach the next level
    pub fn remaining_circles(&self) -> u32 {
        self.config.circles_per_level.saturating_sub(self.popped)
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session on the title screen with any random source
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        let lives = config.starting_lives;
        Self {
            config,
            phase: GamePhase::NotStarted,
            circles: Vec::new(),
            level: 1,
            score: 0.0,
            popped: 0,
            lives,
            spawn_residue: 0.0,
            last_update_time: 0.0,
            show_lost_life: false,
            rng,
        }
    }

    /// Clear the board and start a fresh run at `now`
    pub fn reset(&mut self, now: f64) {
        self.circles.clear();
        self.level = 1;
        self.score = 0.0;
        self.popped = 0;
        self.lives = self.config.starting_lives;
        self.spawn_residue = 0.0;
        self.show_lost_life = false;
        self.last_update_time = now;
        // A run with no lives is over before it starts
        self.phase = if self.lives == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Running
        };
    }

    /// Spawn one circle at a random position with a random color
    pub(crate) fn spawn_circle(&mut self) {
        let x: f32 = self.rng.random();
        let y: f32 = self.rng.random();
        let color = [self.rng.random(), self.rng.random(), self.rng.random()];
        self.circles.push(Circle::new(Vec2::new(x, y), 0.0, color));
    }
}
