//! Platform generation and landing resolution

use rand::Rng;

use super::state::{Platform, Stick};
use crate::Config;

/// Append one platform after the furthest existing edge.
///
/// Gap and width are drawn uniformly from the configured half-open ranges,
/// so the sequence stays strictly ordered and non-overlapping. Total: the
/// draws are bounded and there is no failure mode.
pub fn generate_platform<R: Rng>(platforms: &mut Vec<Platform>, config: &Config, rng: &mut R) {
    let furthest_x = platforms.last().map_or(0.0, Platform::far_edge);

    let gap = rng.random_range(config.min_gap..config.max_gap);
    let width = rng.random_range(config.min_width..config.max_width);

    let platform = Platform {
        x: furthest_x + gap,
        width,
    };
    log::debug!(
        "generated platform at {:.1} width {:.1} (gap {:.1})",
        platform.x,
        platform.width,
        gap
    );
    platforms.push(platform);
}

/// The platform the stick's tip reaches, if any.
///
/// The tip must land strictly inside the open interval `(x, x + width)`;
/// a tip exactly on either edge is a miss.
pub fn landing_platform<'a>(platforms: &'a [Platform], stick: &Stick) -> Option<&'a Platform> {
    let tip_x = stick.tip_x();
    platforms
        .iter()
        .find(|p| p.x < tip_x && tip_x < p.far_edge())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn stick_reaching(tip_x: f32) -> Stick {
        Stick {
            x: 100.0,
            length: tip_x - 100.0,
            rotation_deg: 90.0,
        }
    }

    #[test]
    fn test_generated_platforms_stay_in_bounds() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut platforms = vec![Platform { x: 50.0, width: 50.0 }];

        for _ in 0..200 {
            generate_platform(&mut platforms, &config, &mut rng);
        }

        for pair in platforms.windows(2) {
            let gap = pair[1].x - pair[0].far_edge();
            assert!(gap >= config.min_gap && gap < config.max_gap);
            assert!(pair[1].width >= config.min_width && pair[1].width < config.max_width);
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn test_landing_inside_hits() {
        let platforms = [
            Platform { x: 50.0, width: 50.0 },
            Platform { x: 150.0, width: 60.0 },
        ];

        let hit = landing_platform(&platforms, &stick_reaching(180.0));
        assert_eq!(hit.map(|p| p.x), Some(150.0));
    }

    #[test]
    fn test_landing_in_gap_misses() {
        let platforms = [
            Platform { x: 50.0, width: 50.0 },
            Platform { x: 150.0, width: 60.0 },
        ];

        assert!(landing_platform(&platforms, &stick_reaching(120.0)).is_none());
    }

    #[test]
    fn test_landing_on_edges_misses() {
        let platforms = [Platform { x: 150.0, width: 60.0 }];

        // Exactly on the near edge
        assert!(landing_platform(&platforms, &stick_reaching(150.0)).is_none());
        // Exactly on the far edge
        assert!(landing_platform(&platforms, &stick_reaching(210.0)).is_none());
        // Just inside either edge
        assert!(landing_platform(&platforms, &stick_reaching(150.001)).is_some());
        assert!(landing_platform(&platforms, &stick_reaching(209.999)).is_some());
    }

    #[test]
    fn test_landing_returns_first_match_in_order() {
        // Overlap can't happen in generated sequences, but the resolver
        // contract is first-in-order regardless
        let platforms = [
            Platform { x: 100.0, width: 100.0 },
            Platform { x: 150.0, width: 100.0 },
        ];

        let hit = landing_platform(&platforms, &stick_reaching(160.0));
        assert_eq!(hit.map(|p| p.x), Some(100.0));
    }

    #[test]
    fn test_zero_length_stick_misses_everything() {
        let platforms = [Platform { x: 50.0, width: 50.0 }];
        let stick = Stick::new(100.0);
        // Tip sits exactly on the anchor platform's far edge: a miss
        assert!(landing_platform(&platforms, &stick).is_none());
    }
}
