//! Platform abstraction layer
//!
//! The game core is driven by a host (window + event loop) that supplies:
//! - Monotonic time
//! - Window size, for hit testing and denormalizing draw commands
//! - Fullscreen toggling, which the core never handles itself

use glam::Vec2;

/// Services the host provides to the game
pub trait Host {
    /// Monotonic elapsed time in seconds
    fn current_time(&self) -> f64;

    /// Window size in pixels (width, height)
    fn window_size(&self) -> Vec2;

    /// Flip between windowed and fullscreen
    fn toggle_fullscreen(&mut self);
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    F11,
    Other,
}
