//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time arrives as explicit elapsed-ms deltas, never read from a clock
//! - Randomness arrives through an injected `Rng`
//! - No rendering or platform dependencies

pub mod platform;
pub mod state;
pub mod tick;

pub use platform::{generate_platform, landing_platform};
pub use state::{GameState, Hero, Phase, Platform, Stick};
pub use tick::advance;
