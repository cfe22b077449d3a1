//! Turns session state into one frame of draw commands

use glam::Vec2;

use super::colors;
use super::commands::{Anchor, DrawCommand, TextLine};
use crate::settings::Settings;
use crate::sim::{Color, GamePhase, GameSession};

/// Inset of HUD text from the window corners, in pixels
const HUD_INSET: Vec2 = Vec2::new(10.0, 10.0);

/// Build the draw list for the current frame.
///
/// Consumes the one-frame lost-life flash: the flag is cleared whether or
/// not it was drawn.
pub fn build_frame<R>(
    state: &mut GameSession<R>,
    window: Vec2,
    settings: &Settings,
) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(state.circles.len() + 12);

    cmds.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    for circle in &state.circles {
        let pos = circle.position();
        cmds.push(DrawCommand::FilledCircle {
            center: pos * window,
            radius: circle.radius() * window.x,
            color: circle.color(),
        });
    }

    push_hud(&mut cmds, state, settings);

    if state.show_lost_life {
        cmds.push(DrawCommand::FilledRect {
            min: Vec2::ZERO,
            max: window,
            color: colors::LOST_LIFE,
        });
    }
    state.show_lost_life = false;

    push_pause_glyph(&mut cmds, state.phase, window, settings);
    push_overlay(&mut cmds, state, settings);

    cmds
}

fn hud_text(text: String, anchor: Anchor, color: Color, size: f32) -> DrawCommand {
    DrawCommand::Text {
        text,
        anchor,
        inset: HUD_INSET,
        color,
        size,
    }
}

fn push_hud<R>(cmds: &mut Vec<DrawCommand>, state: &GameSession<R>, settings: &Settings) {
    let size = settings.hud_font_size;
    let remaining = state.remaining_circles();
    let lives_color = if state.lives <= 1 {
        colors::WARNING
    } else {
        colors::TEXT
    };

    cmds.push(hud_text(
        format!("Level: {}", state.level),
        Anchor::TopLeft,
        colors::TEXT,
        size,
    ));
    cmds.push(hud_text(
        format!("Score: {}", state.score as i64),
        Anchor::TopRight,
        colors::TEXT,
        size,
    ));
    cmds.push(hud_text(
        format!("Remaining Circles: {}", remaining),
        Anchor::BottomLeft,
        colors::TEXT,
        size,
    ));
    cmds.push(hud_text(
        format!("Lives: {}", state.lives),
        Anchor::BottomRight,
        lives_color,
        size,
    ));
}

/// Play triangle when the game is waiting for input, pause bars otherwise
fn push_pause_glyph(
    cmds: &mut Vec<DrawCommand>,
    phase: GamePhase,
    window: Vec2,
    settings: &Settings,
) {
    let button = &settings.pause_button;
    let cx = window.x / 2.0;
    let half_w = button.width / 2.0;
    let sixth_w = button.width / 6.0;
    let top = button.y;
    let bottom = button.y + button.height;

    if phase == GamePhase::Running {
        cmds.push(DrawCommand::FilledRect {
            min: Vec2::new(cx - half_w, top),
            max: Vec2::new(cx - sixth_w, bottom),
            color: colors::PAUSE_GLYPH,
        });
        cmds.push(DrawCommand::FilledRect {
            min: Vec2::new(cx + sixth_w, top),
            max: Vec2::new(cx + half_w, bottom),
            color: colors::PAUSE_GLYPH,
        });
    } else {
        cmds.push(DrawCommand::FilledTriangle {
            points: [
                Vec2::new(cx - half_w, top),
                Vec2::new(cx + half_w, top + button.height / 2.0),
                Vec2::new(cx - half_w, bottom),
            ],
            color: colors::PAUSE_GLYPH,
        });
    }
}

fn push_overlay<R>(cmds: &mut Vec<DrawCommand>, state: &GameSession<R>, settings: &Settings) {
    let title = settings.title_font_size;
    let small = settings.hud_font_size;

    let (lines, color) = match state.phase {
        GamePhase::Running => return,
        GamePhase::Paused => (
            vec![
                TextLine::new("Paused", title),
                TextLine::new("Spacebar to continue", small),
            ],
            colors::TEXT,
        ),
        GamePhase::GameOver => (
            vec![
                TextLine::new("Game Over", title),
                TextLine::new(
                    format!("Score: {}", state.score as i64),
                    settings.score_font_size,
                ),
                TextLine::new("Spacebar to restart", small),
            ],
            colors::WARNING,
        ),
        GamePhase::NotStarted => (
            vec![
                TextLine::new("Circle Touch", title),
                TextLine::new("Spacebar to start", small),
            ],
            colors::TEXT,
        ),
    };

    cmds.push(DrawCommand::Overlay { lines, color });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Circle, SessionConfig};

    const WINDOW: Vec2 = Vec2::new(800.0, 600.0);

    fn running() -> GameSession {
        let mut state = GameSession::new(SessionConfig::default(), 1);
        state.reset(0.0);
        state
    }

    fn texts(cmds: &[DrawCommand]) -> Vec<String> {
        cmds.iter().filter_map(DrawCommand::text).collect()
    }

    #[test]
    fn test_circles_are_denormalized() {
        let mut state = running();
        state
            .circles
            .push(Circle::new(Vec2::new(0.25, 0.5), 0.1, [0.2, 0.4, 0.6]));

        let cmds = build_frame(&mut state, WINDOW, &Settings::default());

        assert_eq!(cmds[0], DrawCommand::Clear { color: colors::BACKGROUND });
        match &cmds[1] {
            DrawCommand::FilledCircle {
                center,
                radius,
                color,
            } => {
                assert_eq!(*center, Vec2::new(200.0, 300.0));
                assert!((radius - 80.0).abs() < 1e-4);
                assert_eq!(*color, [0.2, 0.4, 0.6]);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_hud_text() {
        let mut state = running();
        state.level = 3;
        state.score = 123.9;
        state.popped = 5;
        state.lives = 4;

        let cmds = build_frame(&mut state, WINDOW, &Settings::default());
        let texts = texts(&cmds);

        assert!(texts.contains(&"Level: 3".to_string()));
        assert!(texts.contains(&"Score: 123".to_string()));
        assert!(texts.contains(&"Remaining Circles: 15".to_string()));
        assert!(texts.contains(&"Lives: 4".to_string()));
    }

    #[test]
    fn test_lives_turn_red_on_last_life() {
        let mut state = running();
        state.lives = 1;
        let cmds = build_frame(&mut state, WINDOW, &Settings::default());
        let lives = cmds.iter().find_map(|c| match c {
            DrawCommand::Text {
                text,
                color,
                anchor,
                ..
            } if text.starts_with("Lives") => Some((*color, *anchor)),
            _ => None,
        });
        assert_eq!(lives, Some((colors::WARNING, Anchor::BottomRight)));
    }

    #[test]
    fn test_lost_life_flash_lasts_one_frame() {
        let mut state = running();
        state.show_lost_life = true;
        let flash = DrawCommand::FilledRect {
            min: Vec2::ZERO,
            max: WINDOW,
            color: colors::LOST_LIFE,
        };

        let first = build_frame(&mut state, WINDOW, &Settings::default());
        assert!(first.contains(&flash));
        assert!(!state.show_lost_life);

        let second = build_frame(&mut state, WINDOW, &Settings::default());
        assert!(!second.contains(&flash));
    }

    #[test]
    fn test_pause_glyph_matches_phase() {
        let mut state = running();
        let cmds = build_frame(&mut state, WINDOW, &Settings::default());
        let bars: Vec<_> = cmds
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::FilledRect { color, .. } if *color == colors::PAUSE_GLYPH)
            })
            .collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(
            bars[0],
            &DrawCommand::FilledRect {
                min: Vec2::new(370.0, 20.0),
                max: Vec2::new(390.0, 80.0),
                color: colors::PAUSE_GLYPH,
            }
        );

        state.phase = GamePhase::Paused;
        let cmds = build_frame(&mut state, WINDOW, &Settings::default());
        assert!(cmds.contains(&DrawCommand::FilledTriangle {
            points: [
                Vec2::new(370.0, 20.0),
                Vec2::new(430.0, 50.0),
                Vec2::new(370.0, 80.0),
            ],
            color: colors::PAUSE_GLYPH,
        }));
    }

    #[test]
    fn test_overlays() {
        let mut state = GameSession::new(SessionConfig::default(), 1);
        let title = texts(&build_frame(&mut state, WINDOW, &Settings::default()));
        assert!(title.contains(&"Circle Touch\nSpacebar to start".to_string()));

        state.reset(0.0);
        let running = texts(&build_frame(&mut state, WINDOW, &Settings::default()));
        assert!(running.iter().all(|t| !t.contains("Spacebar")));

        state.phase = GamePhase::Paused;
        let paused = texts(&build_frame(&mut state, WINDOW, &Settings::default()));
        assert!(paused.contains(&"Paused\nSpacebar to continue".to_string()));

        state.phase = GamePhase::GameOver;
        state.score = 88.6;
        let cmds = build_frame(&mut state, WINDOW, &Settings::default());
        let overlay = cmds.last();
        assert_eq!(
            overlay,
            Some(&DrawCommand::Overlay {
                lines: vec![
                    TextLine::new("Game Over", 60.0),
                    TextLine::new("Score: 88", 48.0),
                    TextLine::new("Spacebar to restart", 24.0),
                ],
                color: colors::WARNING,
            })
        );
    }
}
