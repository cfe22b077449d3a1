//! Circle Touch entry point
//!
//! Native builds have no window yet: this runs a headless demo session with a
//! simulated clock and an autoplayer, logging what a real host would draw.
//!
//! Usage: `circle-touch [settings.json]`
//!
//! A settings path that does not exist yet gets a default settings file.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use circle_touch::platform::{Host, Key};
use circle_touch::renderer::DrawCommand;
use circle_touch::sim::GamePhase;
use circle_touch::{Game, Settings};

/// Frame rate of the simulated host
const FRAME_DT: f64 = 1.0 / 60.0;
/// Longest demo run, in simulated seconds
const MAX_DEMO_SECS: f64 = 300.0;
/// Autoplayer reaction time between taps
const TAP_INTERVAL: f64 = 0.9;

/// Host with a fixed window and a clock advanced by the demo loop
struct HeadlessHost {
    time: f64,
    size: Vec2,
    fullscreen: bool,
}

impl Host for HeadlessHost {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn window_size(&self) -> Vec2 {
        self.size
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        log::info!("Fullscreen: {}", self.fullscreen);
    }
}

fn main() {
    env_logger::init();
    log::info!("Circle Touch (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) if path.exists() => Settings::load_from(&path),
        Some(path) => {
            let settings = Settings::default();
            settings.save_to(&path);
            settings
        }
        None => Settings::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let host = HeadlessHost {
        time: 0.0,
        size: Vec2::new(1024.0, 768.0),
        fullscreen: false,
    };
    let mut game = Game::new(host, settings, seed);

    game.on_key(Key::Space);
    run_demo(&mut game);

    log::info!(
        "Demo finished at {:.1}s: level {}, score {}, lives {}",
        game.host.time,
        game.session.level,
        game.session.score as u64,
        game.session.lives
    );
    let overlay = game.render().last().and_then(DrawCommand::text);
    if let Some(text) = overlay {
        log::info!("Final screen:\n{}", text);
    }
}

/// Play until game over or the time limit, tapping the biggest circle
fn run_demo(game: &mut Game<HeadlessHost>) {
    let mut next_tap = TAP_INTERVAL;
    let mut frames = 0u64;
    let mut flashes = 0u32;

    while game.host.time < MAX_DEMO_SECS && game.session.phase != GamePhase::GameOver {
        game.host.time += FRAME_DT;
        game.on_tick();

        if game.host.time >= next_tap {
            next_tap += TAP_INTERVAL;
            let target = game
                .session
                .circles
                .iter()
                .max_by(|a, b| a.radius().total_cmp(&b.radius()))
                .map(|c| c.position() * game.host.size)
                .filter(|p| !game.settings.pause_button.contains(*p, game.host.size.x));
            if let Some(pixel) = target {
                game.on_tap(pixel);
            }
        }

        let frame = game.render();
        frames += 1;
        let window = game.host.size;
        let flashed = frame.iter().any(|c| {
            matches!(c, DrawCommand::FilledRect { min, max, .. } if *min == Vec2::ZERO && *max == window)
        });
        if flashed {
            flashes += 1;
        }
        if frames % 600 == 0 {
            log::debug!(
                "t={:.0}s circles={} level={} score={}",
                game.host.time,
                game.session.circles.len(),
                game.session.level,
                game.session.score as u64
            );
        }
    }

    log::info!("Rendered {} frames, {} lost-life flashes", frames, flashes);
}
