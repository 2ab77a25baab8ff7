//! Game state and core simulation types
//!
//! Everything the rendering collaborator reads each frame lives here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::platform::generate_platform;
use crate::Config;
use crate::consts::*;

/// Current phase of gameplay
///
/// `Waiting → Stretching → Turning → Walking → {Transitioning | Falling}`;
/// `Transitioning` loops back to `Waiting`, `Falling` ends in `GameOver`,
/// which only a reset command leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Idle between rounds, waiting for the start-stretch command
    Waiting,
    /// Stick grows while the player holds
    Stretching,
    /// Stick rotates down toward the gap
    Turning,
    /// Hero walks out along the stick
    Walking,
    /// Camera scrolls the landed platform into position
    Transitioning,
    /// Hero walked past the stick tip and is falling
    Falling,
    /// Run ended; only `reset` leaves this state
    GameOver,
}

/// A horizontal ledge at the top of the platform band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub width: f32,
}

impl Platform {
    /// World x of the platform's far (right) edge
    pub fn far_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// The bridging stick, anchored at its base
///
/// `rotation_deg` runs from 0 (upright, the growing pose) through 90 (flat
/// across the gap, the landing pose) to 180 (toppled past a miss).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    /// World x of the anchored base
    pub x: f32,
    pub length: f32,
    pub rotation_deg: f32,
}

impl Stick {
    /// A fresh invisible stick: zero length, upright
    pub fn new(x: f32) -> Self {
        Self {
            x,
            length: 0.0,
            rotation_deg: 0.0,
        }
    }

    /// World x the tip reaches once the stick lies flat
    pub fn tip_x(&self) -> f32 {
        self.x + self.length
    }

    /// Tip position under the current rotation, relative to the platform
    /// top (y grows downward, so an upright stick has negative y)
    pub fn tip(&self) -> Vec2 {
        let r = self.rotation_deg.to_radians();
        Vec2::new(self.x + self.length * r.sin(), -self.length * r.cos())
    }
}

/// The hero. `pos.x` is the world position, `pos.y` the fall offset below
/// the platform top (0 = standing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub pos: Vec2,
}

/// Complete game state, rebuilt wholesale on reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Camera shift; non-decreasing, grows only while `Transitioning`
    pub scene_offset: f32,
    /// Successful landings this run
    pub score: u32,
    /// Ordered by x, strictly increasing, never removed
    pub platforms: Vec<Platform>,
    /// The one stick that participates in physics
    pub stick: Stick,
    /// Spent sticks, kept only so the presentation layer can draw them
    pub retired_sticks: Vec<Stick>,
    pub hero: Hero,
}

impl GameState {
    /// Build the lifecycle-start state: the fixed first platform plus
    /// four generated ones, a zero-length stick anchored at the first
    /// platform's far edge, and the hero standing next to it.
    pub fn new<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let mut platforms = vec![Platform {
            x: FIRST_PLATFORM_X,
            width: FIRST_PLATFORM_WIDTH,
        }];
        for _ in 0..INITIAL_PLATFORM_COUNT {
            generate_platform(&mut platforms, config, rng);
        }

        let anchor = platforms[0].far_edge();

        Self {
            phase: Phase::Waiting,
            scene_offset: 0.0,
            score: 0,
            platforms,
            stick: Stick::new(anchor),
            retired_sticks: Vec::new(),
            hero: Hero {
                pos: Vec2::new(anchor - config.hero_width, 0.0),
            },
        }
    }

    /// Retire the active stick to the presentation log and anchor a fresh
    /// zero-length one at `anchor_x`
    pub fn spawn_stick(&mut self, anchor_x: f32) {
        let spent = std::mem::replace(&mut self.stick, Stick::new(anchor_x));
        self.retired_sticks.push(spent);
    }

    /// Every stick for drawing, oldest first, active stick last
    pub fn sticks(&self) -> impl Iterator<Item = &Stick> {
        self.retired_sticks.iter().chain(std::iter::once(&self.stick))
    }
}
