//! Platform abstraction layer
//!
//! The sim never polls events itself; it consumes a [`TickInput`] someone
//! else sampled. A windowed build implements [`InputSource`] over its
//! event queue; tests and the demo binary use [`ScriptedInput`].

use std::time::Duration;

use crate::sim::TickInput;

/// Per-tick input sampling, implemented by the windowing layer.
/// `now` is monotonic loop time since start.
pub trait InputSource {
    fn sample(&mut self, now: Duration) -> TickInput;
}

/// Deterministic input script: a sequence of inputs each held for a
/// span of loop time, then quit.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    steps: Vec<(Duration, TickInput)>,
}

impl ScriptedInput {
    pub fn new(steps: Vec<(Duration, TickInput)>) -> Self {
        Self { steps }
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self, now: Duration) -> TickInput {
        let mut deadline = Duration::ZERO;
        for (hold, input) in &self.steps {
            deadline += *hold;
            if now < deadline {
                return *input;
            }
        }
        TickInput {
            quit: true,
            ..Default::default()
        }
    }
}
