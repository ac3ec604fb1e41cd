//! Rarity zones: random placement and hit resolution
//!
//! Zones are circles scattered over the play surface with no collision
//! avoidance. Overlaps are settled at resolve time by tier priority, so
//! placement order never matters.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rarity::RarityTier;
use crate::config::RarityConfig;

/// Slack for float rounding when checking sampled circles against the edges
const EDGE_EPSILON: f32 = 1e-3;

/// Play surface size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns `None` unless both sides are finite and positive
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Largest radius whose circle still fits inside the viewport
    #[inline]
    pub fn max_fit_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }

    /// Whether a circle lies fully inside `[0, W] x [0, H]`
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= -EDGE_EPSILON
            && center.x + radius <= self.width + EDGE_EPSILON
            && center.y - radius >= -EDGE_EPSILON
            && center.y + radius <= self.height + EDGE_EPSILON
    }
}

/// A circular region mapped to a tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub center: Vec2,
    pub radius: f32,
    pub tier: RarityTier,
}

impl Zone {
    pub fn new(center: Vec2, radius: f32, tier: RarityTier) -> Self {
        Self {
            center,
            radius,
            tier,
        }
    }

    /// Closed disc test: a point exactly on the rim is inside
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// All zones of one round, grouped by tier in config order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet {
    /// Round that produced this set
    pub round: u64,
    pub viewport: Viewport,
    zones: Vec<Zone>,
}

impl ZoneSet {
    pub fn from_zones(round: u64, viewport: Viewport, zones: Vec<Zone>) -> Self {
        Self {
            round,
            viewport,
            zones,
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn of_tier(&self, tier: RarityTier) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(move |z| z.tier == tier)
    }

    pub fn count_of(&self, tier: RarityTier) -> usize {
        self.of_tier(tier).count()
    }

    /// Map a point to a tier, see [`resolve`]
    pub fn resolve(&self, point: Vec2) -> RarityTier {
        resolve(point, self)
    }
}

/// Build a fresh zone set for `viewport`
///
/// Each config emits exactly `count` zones. The radius is uniform in
/// `[min_radius, max_radius]`, clamped to half the shorter viewport side so
/// the centre range `[r, W - r] x [r, H - r]` is never inverted.
pub fn generate<R: Rng + ?Sized>(
    round: u64,
    viewport: Viewport,
    configs: &[RarityConfig],
    rng: &mut R,
) -> ZoneSet {
    let total = configs.iter().map(|c| c.count as usize).sum();
    let mut zones = Vec::with_capacity(total);
    let fit = viewport.max_fit_radius();

    for cfg in configs {
        for _ in 0..cfg.count {
            let sampled = if cfg.min_radius < cfg.max_radius {
                rng.random_range(cfg.min_radius..=cfg.max_radius)
            } else {
                cfg.min_radius
            };
            let radius = sampled.min(fit);
            if radius < sampled {
                log::debug!(
                    "{} zone radius {:.1} clamped to {:.1} for {}x{} viewport",
                    cfg.tier,
                    sampled,
                    radius,
                    viewport.width,
                    viewport.height
                );
            }
            let x = sample_axis(rng, radius, viewport.width);
            let y = sample_axis(rng, radius, viewport.height);
            zones.push(Zone::new(Vec2::new(x, y), radius, cfg.tier));
        }
    }

    log::debug!(
        "Round {}: generated {} zones for {}x{}",
        round,
        zones.len(),
        viewport.width,
        viewport.height
    );

    ZoneSet::from_zones(round, viewport, zones)
}

/// Uniform coordinate in `[radius, extent - radius]`
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, radius: f32, extent: f32) -> f32 {
    let lo = radius;
    let hi = extent - radius;
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        extent / 2.0
    }
}

/// Map a point to the rarest tier whose zone contains it
///
/// Tiers are scanned in [`RarityTier::PRIORITY`] order, so among overlapping
/// zones the rarest wins regardless of size or placement order. A point
/// outside every zone is `Common`.
pub fn resolve(point: Vec2, zones: &ZoneSet) -> RarityTier {
    RarityTier::PRIORITY
        .into_iter()
        .find(|&tier| zones.of_tier(tier).any(|z| z.contains(point)))
        .unwrap_or(RarityTier::Common)
}
