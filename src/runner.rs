//! The game loop
//!
//! One tick: sample input → advance the sim → compose a frame → present.
//! Quit is observed once per tick at the top, so there is never in-flight
//! work to roll back. Timing comes from `Instant`, which is monotonic and
//! cannot wrap the way a fixed-width millisecond counter can.

use std::time::{Duration, Instant};

use crate::platform::InputSource;
use crate::render::{RenderFeed, compose};
use crate::settings::Settings;
use crate::sim::{WorldState, tick};

/// How often the average frame rate is logged
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Owns the simulation state and drives it from an input source into a
/// render feed until quit is requested.
pub struct GameLoop<I: InputSource, R: RenderFeed> {
    pub state: WorldState,
    settings: Settings,
    input: I,
    feed: R,
}

impl<I: InputSource, R: RenderFeed> GameLoop<I, R> {
    pub fn new(settings: Settings, input: I, feed: R) -> Self {
        Self {
            state: WorldState::new(&settings),
            settings,
            input,
            feed,
        }
    }

    /// Run until the input source requests quit.
    pub fn run(&mut self) {
        let started = Instant::now();
        let mut last_tick = started;
        let mut fps_window = started;
        let mut frame_count: u64 = 0;

        loop {
            let now = started.elapsed();
            let input = self.input.sample(now);
            if input.quit {
                log::info!("Quit requested, stopping after {} ticks", self.state.time_ticks);
                break;
            }

            let dt = last_tick.elapsed().as_secs_f64();
            last_tick = Instant::now();

            tick(&mut self.state, &input, dt, now, &self.settings);

            let frame = compose(&self.state, &self.settings);
            self.feed.present(&frame);

            frame_count += 1;
            let window = fps_window.elapsed();
            if window > FPS_LOG_INTERVAL {
                log::info!(
                    "Average FPS: {:.1}",
                    frame_count as f64 / window.as_secs_f64()
                );
                fps_window = Instant::now();
                frame_count = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScriptedInput;
    use crate::render::NullFeed;
    use crate::sim::TickInput;

    #[test]
    fn test_loop_exits_on_quit() {
        let script = ScriptedInput::new(vec![(
            Duration::from_millis(30),
            TickInput {
                move_right: true,
                ..Default::default()
            },
        )]);
        let mut game = GameLoop::new(Settings::default(), script, NullFeed::default());

        game.run();

        assert!(game.state.time_ticks > 0);
        assert!(game.state.kinematics.position > 270.0);
    }

    #[test]
    fn test_loop_presents_one_frame_per_tick() {
        let script = ScriptedInput::new(vec![(Duration::from_millis(10), TickInput::default())]);
        let mut game = GameLoop::new(Settings::default(), script, NullFeed::default());

        game.run();

        assert_eq!(game.feed.frames, game.state.time_ticks);
    }
}
