//! Toroidal Game-of-Life engine.
//!
//! This module implements the fixed-size wrapping grid, the pattern library
//! used to seed it, and a controller for frame-driven playback.

pub mod controller;
pub mod patterns;
pub mod snapshot;
pub mod universe;
pub mod view;

pub use controller::Controller;
pub use patterns::Pattern;
pub use snapshot::UniverseSnapshot;
pub use universe::{next_state, Universe};
pub use view::CellView;
