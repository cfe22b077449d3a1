//! Host-facing game object
//!
//! Wraps a [`GameSession`] with the host services it needs and translates
//! raw window events (pixel taps, keys, frame ticks) into session calls.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::platform::{Host, Key};
use crate::renderer::{DrawCommand, build_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameSession};

/// Game instance holding all state
pub struct Game<H: Host, R = Pcg32> {
    pub host: H,
    pub session: GameSession<R>,
    pub settings: Settings,
    // Track phase for transition logging
    last_phase: GamePhase,
}

impl<H: Host> Game<H> {
    /// Create a game on the title screen. Uses the settings seed if set.
    pub fn new(host: H, settings: Settings, fallback_seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        log::info!("Game initialized with seed: {}", seed);
        let session = GameSession::new(settings.session.clone(), seed);
        Self::with_session(host, settings, session)
    }
}

impl<H: Host, R: Rng> Game<H, R> {
    pub fn with_session(host: H, settings: Settings, session: GameSession<R>) -> Self {
        let last_phase = session.phase;
        Self {
            host,
            session,
            settings,
            last_phase,
        }
    }

    /// Window width / height, guarded against a zero-height window
    fn aspect(&self) -> f32 {
        let size = self.host.window_size();
        size.x / size.y.max(1.0)
    }

    /// Handle a tap or click at a pixel position
    pub fn on_tap(&mut self, pixel: Vec2) {
        let size = self.host.window_size();
        if self.settings.pause_button.contains(pixel, size.x) {
            self.on_pause_key();
            return;
        }
        if !self.session.is_running() {
            return;
        }

        let point = pixel / size.max(Vec2::ONE);
        if let Some(points) = self.session.handle_tap(point, self.aspect()) {
            log::trace!("Popped circle for {:.2} points", points);
        }
    }

    /// Space bar or pause button: start, restart, or toggle pause
    pub fn on_pause_key(&mut self) {
        let now = self.host.current_time();
        self.session.toggle_pause(now);
        self.track_phase();
    }

    pub fn on_fullscreen_toggle_key(&mut self) {
        self.host.toggle_fullscreen();
    }

    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::Space => self.on_pause_key(),
            Key::F11 => self.on_fullscreen_toggle_key(),
            Key::Other => {}
        }
    }

    /// Advance the simulation to the host's current time
    pub fn on_tick(&mut self) {
        let now = self.host.current_time();
        self.session.update(now);
        self.track_phase();
    }

    /// Draw list for the current frame
    pub fn render(&mut self) -> Vec<DrawCommand> {
        let size = self.host.window_size();
        build_frame(&mut self.session, size, &self.settings)
    }

    fn track_phase(&mut self) {
        let phase = self.session.phase;
        if phase == self.last_phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
        if phase == GamePhase::GameOver {
            log::info!(
                "Run ended: {} points at level {}",
                self.session.score as u64,
                self.session.level
            );
        }
        self.last_phase = phase;
    }
}
