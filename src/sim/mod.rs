//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay pure:
//! - Caller-supplied timestamps only
//! - Seeded/injected RNG only
//! - Circles kept in spawn order
//! - No rendering or platform dependencies

pub mod circle;
pub mod state;
pub mod tick;

pub use circle::{Circle, Color};
pub use state::{GamePhase, GameSession, SessionConfig};
pub use tick::{handle_tap, toggle_pause, update};
