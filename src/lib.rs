//! Circle Touch - tap the circles before they grow too big
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, growth, scoring, lives)
//! - `renderer`: Frame building into host-agnostic draw commands
//! - `platform`: Host abstraction (clock, window, fullscreen)
//! - `game`: Event adapter between a host and the simulation

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;
