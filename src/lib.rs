//! Stick Span - a stick-bridging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phase state machine, platforms, landing)
//! - `engine`: Frame-driven wrapper owning state, config, RNG, and timing
//! - `config`: Data-driven game tuning
//!
//! Rendering and input devices are external collaborators: they read
//! [`sim::GameState`] every frame and feed back exactly three commands
//! (start-stretch, end-stretch, reset) through [`engine::Engine`].

pub mod config;
pub mod engine;
pub mod sim;

pub use config::Config;
pub use engine::Engine;

/// Fixed world constants (everything tunable lives in [`Config`])
pub mod consts {
    /// The first platform is always the same and is never regenerated
    pub const FIRST_PLATFORM_X: f32 = 50.0;
    pub const FIRST_PLATFORM_WIDTH: f32 = 50.0;

    /// Platforms generated ahead of the first one at reset
    pub const INITIAL_PLATFORM_COUNT: usize = 4;

    /// Screen x where a landed platform's far edge comes to rest after the
    /// camera catches up. Equals the first platform's far edge, so every
    /// round starts with the stick anchor at the same on-screen spot.
    pub const ANCHOR_SCREEN_X: f32 = 100.0;

    /// Stick pose at which the landing check fires (flat across the gap)
    pub const STICK_FLAT_DEG: f32 = 90.0;
    /// Stick pose after toppling past a miss
    pub const STICK_TOPPLED_DEG: f32 = 180.0;

    /// How far below the platform band the hero falls before game over
    pub const FALL_OUT_MARGIN: f32 = 100.0;
}
