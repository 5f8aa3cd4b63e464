//! Strider entry point
//!
//! Headless demo: loads settings, walks the entity through a short
//! scripted stroll, and logs where everything ended up. A windowed build
//! would swap [`ScriptedInput`]/[`NullFeed`] for an event-queue input
//! source and a real renderer.

use std::path::Path;
use std::time::Duration;

use strider::platform::ScriptedInput;
use strider::render::NullFeed;
use strider::runner::GameLoop;
use strider::settings::Settings;
use strider::sim::TickInput;

fn held(move_left: bool, move_right: bool) -> TickInput {
    TickInput {
        move_left,
        move_right,
        quit: false,
    }
}

fn main() {
    env_logger::init();
    log::info!("Strider starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    // Walk right for two seconds, back left for one, stand for half.
    let script = ScriptedInput::new(vec![
        (Duration::from_secs(2), held(false, true)),
        (Duration::from_secs(1), held(true, false)),
        (Duration::from_millis(500), held(false, false)),
    ]);

    let mut game = GameLoop::new(settings, script, NullFeed::default());
    game.run();

    let kin = game.state.kinematics;
    log::info!(
        "Finished at position {:.1} (velocity {:.1}), scroll offset {}",
        kin.position,
        kin.velocity,
        game.state.camera.scroll_offset
    );
}
