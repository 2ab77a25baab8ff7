//! Per-frame simulation step
//!
//! `advance` is the whole state machine: it mutates exactly one phase's
//! model per call and decides the phase transitions. Frame timing lives in
//! [`crate::engine::Engine`]; tests feed synthetic deltas directly.

use rand::Rng;

use super::platform::{generate_platform, landing_platform};
use super::state::{GameState, Phase};
use crate::Config;
use crate::consts::*;

/// Advance the simulation by one frame's elapsed time.
///
/// Clamps are applied before every phase-exit check, so rotation is never
/// observed past 90 during `Turning` and positions never overshoot their
/// bound. `Waiting` and `GameOver` ignore time entirely.
pub fn advance<R: Rng>(state: &mut GameState, config: &Config, elapsed_ms: f32, rng: &mut R) {
    match state.phase {
        Phase::Waiting | Phase::GameOver => {}

        Phase::Stretching => {
            // No upper bound; overlong sticks simply miss everything
            state.stick.length += elapsed_ms / config.stretching_rate;
        }

        Phase::Turning => {
            state.stick.rotation_deg += elapsed_ms / config.turning_rate;

            if state.stick.rotation_deg >= STICK_FLAT_DEG {
                state.stick.rotation_deg = STICK_FLAT_DEG;

                // The stick geometry is final now; resolve the landing once
                if landing_platform(&state.platforms, &state.stick).is_some() {
                    state.score += 1;
                    log::info!(
                        "landed at {:.1}, score {}",
                        state.stick.tip_x(),
                        state.score
                    );
                    generate_platform(&mut state.platforms, config, rng);
                } else {
                    log::info!("missed, tip at {:.1}", state.stick.tip_x());
                }

                state.phase = Phase::Walking;
            }
        }

        Phase::Walking => {
            state.hero.pos.x += elapsed_ms / config.walking_rate;

            // Geometry is fixed, so re-resolving every tick is stable
            match landing_platform(&state.platforms, &state.stick) {
                Some(platform) => {
                    let max_x = platform.far_edge() - config.hero_width;
                    if state.hero.pos.x > max_x {
                        state.hero.pos.x = max_x;
                        state.phase = Phase::Transitioning;
                    }
                }
                None => {
                    // Walk to the stick's tip and off the end
                    let max_x = state.stick.tip_x();
                    if state.hero.pos.x > max_x {
                        state.hero.pos.x = max_x;
                        state.phase = Phase::Falling;
                    }
                }
            }
        }

        Phase::Transitioning => {
            state.scene_offset += elapsed_ms / config.transitioning_rate;

            // Non-null here: this phase is only entered after a landing
            let far_edge = landing_platform(&state.platforms, &state.stick)
                .map(|p| p.far_edge());
            if let Some(far_edge) = far_edge {
                if far_edge - state.scene_offset < ANCHOR_SCREEN_X {
                    state.spawn_stick(far_edge);
                    state.phase = Phase::Waiting;
                    log::debug!("round complete, next anchor at {far_edge:.1}");
                }
            }
        }

        Phase::Falling => {
            state.hero.pos.y += elapsed_ms / config.falling_rate;

            // Cosmetic topple past the miss
            if state.stick.rotation_deg < STICK_TOPPLED_DEG {
                state.stick.rotation_deg = (state.stick.rotation_deg
                    + elapsed_ms / config.turning_rate)
                    .min(STICK_TOPPLED_DEG);
            }

            if state.hero.pos.y > config.platform_height + FALL_OUT_MARGIN {
                state.phase = Phase::GameOver;
                log::info!("game over, score {}", state.score);
            }
        }
    }
}
