use rl::{EpisodeObserver, Frame, Step};
use tracing::{debug, info};

/// Logs a progress line every `every` steps and on episode end.
pub struct LogObserver {
    every: u32,
}

impl LogObserver {
    #[must_use]
    pub fn new(every: u32) -> Self {
        Self { every }
    }
}

impl EpisodeObserver for LogObserver {
    fn on_reset(&mut self, frame: &Frame<'_>) {
        let p = frame.vehicle.position();
        debug!(gates = frame.gates.len(), "Episode start at ({:.1}, {:.1})", p.x, p.y);
    }

    fn on_step(&mut self, frame: &Frame<'_>, step: &Step) {
        if self.every != 0 && frame.step_count % self.every == 0 {
            info!(
                "Step {}: reward {:.2}, points {}, speed {:.2}",
                frame.step_count,
                step.reward,
                step.info.total_points,
                frame.vehicle.forward_speed()
            );
        }
        if step.terminated {
            info!("Step {}: left the track", frame.step_count);
        }
    }
}
