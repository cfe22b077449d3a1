//! Frame building
//!
//! The core never touches a graphics API. Each frame becomes a list of
//! [`DrawCommand`]s in window pixels that the host replays with its own
//! filled-shape and text primitives.

pub mod commands;
pub mod frame;

pub use commands::{Anchor, DrawCommand, TextLine};
pub use frame::build_frame;

/// Colors for game elements
pub mod colors {
    use crate::sim::Color;

    pub const BACKGROUND: Color = [0.1, 0.1, 0.1];
    pub const TEXT: Color = [1.0, 1.0, 1.0];
    pub const WARNING: Color = [1.0, 0.0, 0.0];
    pub const LOST_LIFE: Color = [1.0, 0.5, 0.5];
    pub const PAUSE_GLYPH: Color = [0.5, 0.5, 0.5];
}
