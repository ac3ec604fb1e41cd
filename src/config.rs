//! Game configuration
//!
//! Compiled-in defaults reproduce the shipped game; the native calibration
//! tool can load an alternative table from JSON. Nothing is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::rarity::{RarityTier, Rgba};

/// Problems found while loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{tier}: radius range {min}..{max} is invalid")]
    InvalidRadius { tier: RarityTier, min: f32, max: f32 },

    #[error("common is the fallback tier and cannot own zones")]
    CommonZone,

    #[error("loading step must be between 1 and 100 percent, got {0}")]
    InvalidLoadingStep(u32),

    #[error("dev trigger must be 1..={cap} characters, got {len}")]
    InvalidTrigger { len: usize, cap: usize },
}

/// Zone parameters for one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityConfig {
    #[serde(rename = "name")]
    pub tier: RarityTier,
    /// Zones generated per round
    pub count: u32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Overlay color in dev mode
    pub debug_color: Rgba,
}

impl RarityConfig {
    pub fn new(tier: RarityTier, count: u32, debug_color: Rgba) -> Self {
        Self {
            tier,
            count,
            min_radius: ZONE_MIN_RADIUS,
            max_radius: ZONE_MAX_RADIUS,
            debug_color,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tier == RarityTier::Common {
            return Err(ConfigError::CommonZone);
        }
        let finite = self.min_radius.is_finite() && self.max_radius.is_finite();
        if !finite || self.min_radius < 0.0 || self.min_radius > self.max_radius {
            return Err(ConfigError::InvalidRadius {
                tier: self.tier,
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }
}

/// Where the "back" button leads from the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackTarget {
    /// Return to the welcome screen; zones regenerate on the next start
    #[default]
    Main,
    /// Jump straight into a fresh round
    Game,
}

/// Loading bar timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingConfig {
    pub step_pct: u32,
    pub tick_ms: u32,
    pub settle_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            step_pct: LOADING_STEP_PCT,
            tick_ms: LOADING_TICK_MS,
            settle_ms: LOADING_SETTLE_MS,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Zone table (order only affects generation order, not priority)
    pub rarities: Vec<RarityConfig>,
    pub loading: LoadingConfig,
    pub key_buffer_cap: usize,
    pub dev_trigger: String,
    pub back_target: BackTarget,
    /// Ambient track volume (0.0 - 1.0)
    pub background_volume: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rarities: vec![
                RarityConfig::new(RarityTier::Unknown, 5, Rgba::new(255, 0, 0, 0.3)),
                RarityConfig::new(RarityTier::Godly, 8, Rgba::new(255, 192, 203, 0.3)),
                RarityConfig::new(RarityTier::Legendary, 10, Rgba::new(255, 215, 0, 0.3)),
                RarityConfig::new(RarityTier::Rare, 12, Rgba::new(30, 144, 255, 0.3)),
                RarityConfig::new(RarityTier::Uncommon, 20, Rgba::new(0, 255, 127, 0.3)),
            ],
            loading: LoadingConfig::default(),
            key_buffer_cap: KEY_BUFFER_CAP,
            dev_trigger: DEV_TRIGGER.to_string(),
            back_target: BackTarget::default(),
            background_volume: BACKGROUND_VOLUME,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for rarity in &self.rarities {
            rarity.validate()?;
        }
        if self.loading.step_pct == 0 || self.loading.step_pct > 100 {
            return Err(ConfigError::InvalidLoadingStep(self.loading.step_pct));
        }
        let len = self.dev_trigger.chars().count();
        if len == 0 || len > self.key_buffer_cap {
            return Err(ConfigError::InvalidTrigger {
                len,
                cap: self.key_buffer_cap,
            });
        }
        Ok(())
    }

    /// Total zones per round
    pub fn zone_count(&self) -> usize {
        self.rarities.iter().map(|r| r.count as usize).sum()
    }

    /// Debug color for a tier (first matching entry)
    pub fn debug_color(&self, tier: RarityTier) -> Option<Rgba> {
        self.rarities
            .iter()
            .find(|r| r.tier == tier)
            .map(|r| r.debug_color)
    }
}
