//! Property-based tests for zone generation and resolution
//!
//! Invariants that must hold for every seed, viewport and click:
//! - Generation: exact per-tier counts, radii in range, circles inside the viewport
//! - Resolution: rarest covering tier wins, uncovered points are common
//! - Containment: the rim of a zone is inside, just past it is outside

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use loot_drop::sim::{RarityTier, Viewport, Zone, ZoneSet, generate, resolve};
use loot_drop::GameConfig;

const ZONE_TIERS: [RarityTier; 5] = RarityTier::PRIORITY;

fn tier_strategy() -> impl Strategy<Value = RarityTier> {
    prop::sample::select(ZONE_TIERS.to_vec())
}

fn zone_strategy() -> impl Strategy<Value = Zone> {
    (0.0f32..1000.0, 0.0f32..1000.0, 1.0f32..200.0, tier_strategy())
        .prop_map(|(x, y, r, tier)| Zone::new(Vec2::new(x, y), r, tier))
}

fn zone_set(zones: Vec<Zone>) -> ZoneSet {
    ZoneSet::from_zones(1, Viewport::new(1000.0, 1000.0).unwrap(), zones)
}

// ============================================================
// Generation Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_generated_zones_fit_viewport(
        seed in any::<u64>(),
        width in 120.0f32..4000.0,
        height in 120.0f32..4000.0,
    ) {
        let config = GameConfig::default();
        let viewport = Viewport::new(width, height).unwrap();
        let mut rng = Pcg32::seed_from_u64(seed);
        let set = generate(1, viewport, &config.rarities, &mut rng);

        for zone in set.zones() {
            let cfg = config.rarities.iter().find(|c| c.tier == zone.tier).unwrap();
            prop_assert!(zone.radius >= cfg.min_radius && zone.radius <= cfg.max_radius,
                "radius {} outside {}..={}", zone.radius, cfg.min_radius, cfg.max_radius);
            prop_assert!(viewport.contains_circle(zone.center, zone.radius),
                "{:?} escapes {}x{}", zone, width, height);
        }
    }

    #[test]
    fn prop_generated_tier_counts_are_exact(seed in any::<u64>(), counts in prop::collection::vec(0u32..30, 5)) {
        let mut config = GameConfig::default();
        for (cfg, count) in config.rarities.iter_mut().zip(&counts) {
            cfg.count = *count;
        }
        let viewport = Viewport::new(1920.0, 1080.0).unwrap();
        let set = generate(1, viewport, &config.rarities, &mut Pcg32::seed_from_u64(seed));

        prop_assert_eq!(set.len(), counts.iter().sum::<u32>() as usize);
        for cfg in &config.rarities {
            prop_assert_eq!(set.count_of(cfg.tier), cfg.count as usize);
        }
    }

    #[test]
    fn prop_tiny_viewports_never_escape(
        seed in any::<u64>(),
        width in 1.0f32..150.0,
        height in 1.0f32..150.0,
    ) {
        let config = GameConfig::default();
        let viewport = Viewport::new(width, height).unwrap();
        let set = generate(1, viewport, &config.rarities, &mut Pcg32::seed_from_u64(seed));

        prop_assert_eq!(set.len(), config.zone_count());
        for zone in set.zones() {
            prop_assert!(zone.radius <= width.min(height) / 2.0);
            prop_assert!(viewport.contains_circle(zone.center, zone.radius));
        }
    }
}

// ============================================================
// Resolution Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_rarest_covering_tier_wins(
        zones in prop::collection::vec(zone_strategy(), 0..40),
        px in 0.0f32..1000.0,
        py in 0.0f32..1000.0,
    ) {
        let point = Vec2::new(px, py);
        let expected = zones
            .iter()
            .filter(|z| z.contains(point))
            .map(|z| z.tier)
            .max()
            .unwrap_or(RarityTier::Common);
        prop_assert_eq!(resolve(point, &zone_set(zones)), expected);
    }

    #[test]
    fn prop_resolution_ignores_zone_order(
        zones in prop::collection::vec(zone_strategy(), 1..30),
        px in 0.0f32..1000.0,
        py in 0.0f32..1000.0,
    ) {
        let point = Vec2::new(px, py);
        let mut reversed = zones.clone();
        reversed.reverse();
        prop_assert_eq!(resolve(point, &zone_set(zones)), resolve(point, &zone_set(reversed)));
    }

    #[test]
    fn prop_uncovered_point_is_common(
        zones in prop::collection::vec(zone_strategy(), 0..40),
    ) {
        // Every generated zone sits inside x < 1200, so this point is clear
        let point = Vec2::new(5000.0, 5000.0);
        prop_assert_eq!(resolve(point, &zone_set(zones)), RarityTier::Common);
    }

    #[test]
    fn prop_rim_is_inside_and_beyond_is_outside(
        r in 1u32..100,
        tier in tier_strategy(),
        axis in 0usize..4,
    ) {
        // Whole-pixel radii keep the rim point exactly representable
        let r = r as f32;
        let center = Vec2::new(500.0, 500.0);
        let dir = [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y][axis];
        let set = zone_set(vec![Zone::new(center, r, tier)]);

        prop_assert_eq!(resolve(center + dir * r, &set), tier);
        prop_assert_eq!(resolve(center + dir * (r + 0.01), &set), RarityTier::Common);
    }
}

#[test]
fn uncommon_and_rare_overlap_resolves_rare() {
    let set = zone_set(vec![
        Zone::new(Vec2::new(100.0, 100.0), 50.0, RarityTier::Uncommon),
        Zone::new(Vec2::new(130.0, 100.0), 50.0, RarityTier::Rare),
    ]);
    assert_eq!(resolve(Vec2::new(115.0, 100.0), &set), RarityTier::Rare);
}

#[test]
fn new_round_replaces_previous_zones() {
    use loot_drop::{Screen, Session};

    let config = GameConfig {
        back_target: loot_drop::BackTarget::Game,
        ..Default::default()
    };
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut rng = Pcg32::seed_from_u64(77);
    let mut session = Session::new(&config);
    while !session.loading_complete() {
        session.tick_loading().unwrap();
    }
    session.finish_loading().unwrap();

    let first = session.start(viewport, &config.rarities, &mut rng).unwrap().clone();
    session.click(Vec2::new(1.0, 1.0)).unwrap();
    session.back_to_game(viewport, &config.rarities, &mut rng).unwrap();
    assert_eq!(session.screen(), Screen::Game);

    let current = session.zones().unwrap().clone();
    assert_eq!(current.round, first.round + 1);
    // A point inside a round-one unknown zone resolves against round two only
    let point = first.of_tier(RarityTier::Unknown).next().unwrap().center;
    assert_eq!(session.click(point).unwrap(), current.resolve(point));
}
