//! Stick Span entry point
//!
//! Headless autoplay demo: a perfect-aim bot plays on synthetic 60 Hz
//! frames so the whole state machine can be watched from the logs. Seed,
//! round count, and config path come from the environment.

use std::time::{SystemTime, UNIX_EPOCH};

use stick_span::sim::Phase;
use stick_span::{Config, Engine};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn main() {
    env_logger::init();

    let config_path =
        std::env::var("STICK_SPAN_CONFIG").unwrap_or_else(|_| "stick-span.json".into());
    let config = Config::load_or_default(&config_path);

    let seed: u64 = env_parse("STICK_SPAN_SEED").unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let rounds: u32 = env_parse("STICK_SPAN_ROUNDS").unwrap_or(10);

    log::info!("Stick Span (headless) starting: seed {seed}, {rounds} rounds");

    let mut engine = Engine::new(config, seed);
    let mut now = 0.0_f64;

    for round in 1..=rounds {
        // Aim for the center of the first platform past the anchor
        let target_length = {
            let state = engine.state();
            let anchor = state.stick.x;
            state
                .platforms
                .iter()
                .find(|p| p.x > anchor)
                .map(|p| p.x + p.width / 2.0 - anchor)
        };
        let Some(target_length) = target_length else {
            break; // generation always keeps a platform ahead
        };

        engine.start_stretch();
        while engine.state().stick.length < target_length {
            now += FRAME_MS;
            engine.frame(now);
        }
        engine.end_stretch();

        // Run the round out: turn, walk, scroll back to Waiting
        while engine.needs_frame() {
            now += FRAME_MS;
            engine.frame(now);
        }

        println!("round {round}: score {}", engine.state().score);
        if engine.state().phase == Phase::GameOver {
            break;
        }
    }

    println!("final score: {}", engine.state().score);
}
