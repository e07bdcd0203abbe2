//! Playback controller driving a universe from an external frame loop.

use crate::universe::Universe;
use life_core::{ControllerConfig, Error, Result};
use tracing::{debug, info, instrument};

/// Owns a universe together with the play/pause and speed state a
/// rendering loop needs.
///
/// A driver calls [`frame`](Controller::frame) once per displayed frame and
/// then reads [`universe`](Controller::universe) to draw.
#[derive(Debug, Clone)]
pub struct Controller {
    universe: Universe,
    running: bool,
    steps_per_frame: u32,
    log_interval: u64,
    frames: u64,
}

impl Controller {
    pub fn new(universe: Universe, config: ControllerConfig) -> Result<Self> {
        validate_steps_per_frame(config.steps_per_frame)?;
        Ok(Self {
            universe,
            running: config.start_running,
            steps_per_frame: config.steps_per_frame,
            log_interval: config.log_interval,
            frames: 0,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    pub fn into_universe(self) -> Universe {
        self.universe
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        !self.running
    }

    pub fn play(&mut self) {
        if !self.running {
            self.running = true;
            info!(generation = self.universe.generation(), "Playback started");
        }
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            info!(generation = self.universe.generation(), "Playback paused");
        }
    }

    /// Switch between running and paused, returning the new running state
    pub fn toggle_play(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.play();
        }
        self.running
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) -> Result<()> {
        validate_steps_per_frame(steps)?;
        debug!(steps, "Steps per frame changed");
        self.steps_per_frame = steps;
        Ok(())
    }

    /// Frames processed so far, paused ones included
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Process one frame, returning the number of generations advanced
    /// (zero while paused).
    pub fn frame(&mut self) -> u32 {
        self.frames += 1;
        if !self.running {
            return 0;
        }

        for _ in 0..self.steps_per_frame {
            self.advance();
        }
        self.steps_per_frame
    }

    /// Advance exactly one generation whether or not playback is running
    pub fn step_once(&mut self) {
        self.advance();
    }

    /// Process `frames` frames, returning the total generations advanced
    #[instrument(skip(self), fields(steps_per_frame = self.steps_per_frame))]
    pub fn run_frames(&mut self, frames: u64) -> u64 {
        let mut advanced = 0;
        for _ in 0..frames {
            advanced += u64::from(self.frame());
        }
        debug!(
            advanced,
            generation = self.universe.generation(),
            "Finished frame batch"
        );
        advanced
    }

    fn advance(&mut self) {
        self.universe.step();

        let generation = self.universe.generation();
        if self.log_interval > 0 && generation % self.log_interval == 0 {
            let live_cells = self.universe.live_count();
            info!(
                generation,
                live_cells,
                "Generation {}: {} cells alive", generation, live_cells
            );
        }
    }
}

fn validate_steps_per_frame(steps: u32) -> Result<()> {
    if steps == 0 {
        return Err(Error::InvalidConfig(
            "steps_per_frame must be at least 1".to_string(),
        ));
    }
    Ok(())
}
