//! Loot Drop - click a canvas, reveal a rarity
//!
//! Core modules:
//! - `sim`: Zone generation, hit resolution and the screen state machine
//! - `presenter`: Result themes and audio cue selection
//! - `controller`: Event-driven glue between the session and its collaborators
//! - `audio`: Named audio cues (HTML audio elements on web)
//! - `renderer`: Debug overlay drawing (Canvas 2D on web)
//! - `platform`: Screen panel visibility (DOM on web)
//! - `config`: Data-driven rarity table and timing

pub mod audio;
pub mod config;
pub mod controller;
pub mod platform;
pub mod presenter;
pub mod renderer;
pub mod sim;

pub use config::{BackTarget, ConfigError, GameConfig, RarityConfig};
pub use controller::LootController;
pub use sim::{RarityTier, Screen, Session, TransitionError, Viewport, Zone, ZoneSet};

/// Game configuration constants
pub mod consts {
    /// Loading bar advance per timer tick (percent)
    pub const LOADING_STEP_PCT: u32 = 2;
    /// Loading bar timer interval
    pub const LOADING_TICK_MS: u32 = 20;
    /// Pause after the bar fills before the main screen appears
    pub const LOADING_SETTLE_MS: u32 = 300;

    /// Keystrokes kept for the dev-mode trigger
    pub const KEY_BUFFER_CAP: usize = 10;
    /// Typing this toggles the debug zone overlay
    pub const DEV_TRIGGER: &str = "devm";

    /// Default zone radius range (pixels)
    pub const ZONE_MIN_RADIUS: f32 = 30.0;
    pub const ZONE_MAX_RADIUS: f32 = 60.0;

    /// Ambient track volume (0.0 - 1.0)
    pub const BACKGROUND_VOLUME: f64 = 0.2;

    /// Period of the cycling hue animation on the unknown result
    pub const HUE_CYCLE_SECS: f32 = 5.0;
}
