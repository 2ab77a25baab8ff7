//! Frame-driven engine wrapper
//!
//! Owns the game state, the tuning config, the seeded RNG, and the
//! frame-timing baseline. An external scheduler calls [`Engine::frame`]
//! once per display refresh with a monotonically increasing timestamp;
//! input collaborators call the three command methods, which gate on the
//! current phase and otherwise do nothing.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Config;
use crate::sim::{GameState, Phase, advance};

/// One game instance: state plus everything needed to step it
pub struct Engine {
    config: Config,
    state: GameState,
    rng: Pcg32,
    /// Previous frame's timestamp; `None` means the next frame only
    /// establishes the baseline and mutates nothing
    last_timestamp: Option<f64>,
}

impl Engine {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&config, &mut rng);
        log::info!("new game, seed {seed}");
        Self {
            config,
            state,
            rng,
            last_timestamp: None,
        }
    }

    /// Read-only state for the rendering collaborator
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Begin stretching. Valid only while `Waiting`; also resets the
    /// timing baseline so the first frame of the new round carries no
    /// stale elapsed time.
    pub fn start_stretch(&mut self) {
        if self.state.phase == Phase::Waiting {
            self.state.phase = Phase::Stretching;
            self.last_timestamp = None;
        }
    }

    /// Release the stick. Valid only while `Stretching`.
    pub fn end_stretch(&mut self) {
        if self.state.phase == Phase::Stretching {
            self.state.phase = Phase::Turning;
        }
    }

    /// Rebuild the whole game at lifecycle-start values. Valid in any
    /// phase; the scheduler should request a fresh first frame after it.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config, &mut self.rng);
        self.last_timestamp = None;
        log::info!("reset");
    }

    /// Step the simulation to `timestamp_ms`.
    ///
    /// The first call after a baseline reset records the timestamp and
    /// returns without mutating state. Elapsed time is uncapped unless
    /// [`Config::max_frame_ms`] is set, so a long stall between frames
    /// produces one large jump.
    pub fn frame(&mut self, timestamp_ms: f64) {
        let Some(last) = self.last_timestamp else {
            self.last_timestamp = Some(timestamp_ms);
            return;
        };

        let mut elapsed_ms = (timestamp_ms - last) as f32;
        if let Some(cap) = self.config.max_frame_ms {
            elapsed_ms = elapsed_ms.min(cap);
        }

        advance(&mut self.state, &self.config, elapsed_ms, &mut self.rng);
        self.last_timestamp = Some(timestamp_ms);
    }

    /// Whether the machine is in a self-advancing phase. False in
    /// `Waiting` (nothing moves until start-stretch) and `GameOver`
    /// (nothing moves until reset), where the scheduler should stop
    /// requesting frames.
    pub fn needs_frame(&self) -> bool {
        !matches!(self.state.phase, Phase::Waiting | Phase::GameOver)
    }
}
