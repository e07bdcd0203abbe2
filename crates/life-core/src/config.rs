//! Configuration types for the universe and its controller.

use serde::{Deserialize, Serialize};

/// Probability used by `randomize` when the caller has no preference
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// How a universe is populated when it is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum InitialPattern {
    /// Every cell dead
    Empty,
    /// Cell `i` alive iff `i % 2 == 0 || i % 7 == 0`
    #[default]
    Alternating,
    /// Each cell alive with `probability`, drawn from a ChaCha8 stream seeded with `seed`
    Random { probability: f64, seed: u64 },
}

/// Universe configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Initial population
    pub initial: InitialPattern,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            initial: InitialPattern::default(),
        }
    }
}

/// Playback configuration for a controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Generations advanced per frame while running (at least 1)
    pub steps_per_frame: u32,
    /// Whether the controller starts in the running state
    pub start_running: bool,
    /// Emit a progress log every this many generations (0 disables)
    pub log_interval: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: 1,
            start_running: true,
            log_interval: 1000,
        }
    }
}
