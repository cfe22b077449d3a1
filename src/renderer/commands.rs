//! Draw command types handed to the host

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Color;

/// Window corner a piece of text is positioned against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One line of a centered overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
}

impl TextLine {
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

/// A single drawing primitive, in window pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole window
    Clear { color: Color },
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FilledRect { min: Vec2, max: Vec2, color: Color },
    FilledTriangle { points: [Vec2; 3], color: Color },
    /// Single-line text. `inset` is measured inward from the anchor corner,
    /// so the host needs the rendered text size to place it.
    Text {
        text: String,
        anchor: Anchor,
        inset: Vec2,
        color: Color,
        size: f32,
    },
    /// Block of lines centered in the window, each line centered
    Overlay { lines: Vec<TextLine>, color: Color },
}

impl DrawCommand {
    /// Text content, if this command renders any
    pub fn text(&self) -> Option<String> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            DrawCommand::Overlay { lines, .. } => Some(
                lines
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => None,
        }
    }
}
