//! Session state and the screen state machine
//!
//! `Loading -> Main -> Game -> Result -> Main | Game`. Every entry into
//! `Game` builds a new zone set; the previous round's zones are dropped.

use std::fmt;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::keys::KeyBuffer;
use super::loading::LoadingBar;
use super::rarity::RarityTier;
use super::zone::{Viewport, ZoneSet, generate};
use crate::config::{GameConfig, RarityConfig};

/// Which panel is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Progress bar, advances on its own
    Loading,
    /// Welcome screen waiting for "start"
    Main,
    /// Full-screen click surface
    Game,
    /// Reveal of the last drop
    Result,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Loading, Screen::Main, Screen::Game, Screen::Result];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Loading => "loading",
            Screen::Main => "main",
            Screen::Game => "game",
            Screen::Result => "result",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User or timer input that drives a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadingTick,
    LoadingDone,
    Start,
    Click,
    Back,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::LoadingTick => "loading tick",
            Action::LoadingDone => "loading done",
            Action::Start => "start",
            Action::Click => "click",
            Action::Back => "back",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{action} is not accepted on the {screen} screen")]
    Rejected { action: Action, screen: Screen },

    #[error("loading is only {0}% complete")]
    LoadingIncomplete(u32),

    #[error("no usable viewport for a new round")]
    NoViewport,
}

/// Everything one player session tracks between events
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    loading: LoadingBar,
    /// Zones of the current round (only while a round is live)
    zones: Option<ZoneSet>,
    /// Rounds started so far
    round: u64,
    dev_mode: bool,
    keys: KeyBuffer,
    last_result: Option<RarityTier>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            screen: Screen::Loading,
            loading: LoadingBar::new(config.loading.step_pct),
            zones: None,
            round: 0,
            dev_mode: false,
            keys: KeyBuffer::new(&config.dev_trigger, config.key_buffer_cap),
            last_result: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn zones(&self) -> Option<&ZoneSet> {
        self.zones.as_ref()
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn last_result(&self) -> Option<RarityTier> {
        self.last_result
    }

    pub fn loading_percent(&self) -> u32 {
        self.loading.percent()
    }

    /// Debug zones are drawn only in dev mode on the game screen
    pub fn overlay_visible(&self) -> bool {
        self.dev_mode && self.screen == Screen::Game && self.zones.is_some()
    }

    fn expect(&self, screen: Screen, action: Action) -> Result<(), TransitionError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(TransitionError::Rejected {
                action,
                screen: self.screen,
            })
        }
    }

    /// Advance the loading bar by one timer tick
    pub fn tick_loading(&mut self) -> Result<u32, TransitionError> {
        self.expect(Screen::Loading, Action::LoadingTick)?;
        Ok(self.loading.tick())
    }

    pub fn loading_complete(&self) -> bool {
        self.loading.is_complete()
    }

    /// `Loading -> Main` once the bar is full
    pub fn finish_loading(&mut self) -> Result<(), TransitionError> {
        self.expect(Screen::Loading, Action::LoadingDone)?;
        if !self.loading.is_complete() {
            return Err(TransitionError::LoadingIncomplete(self.loading.percent()));
        }
        self.screen = Screen::Main;
        Ok(())
    }

    /// `Main -> Game` with a freshly generated zone set
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        configs: &[RarityConfig],
        rng: &mut R,
    ) -> Result<&ZoneSet, TransitionError> {
        self.expect(Screen::Main, Action::Start)?;
        Ok(self.begin_round(viewport, configs, rng))
    }

    fn begin_round<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        configs: &[RarityConfig],
        rng: &mut R,
    ) -> &ZoneSet {
        self.round += 1;
        self.screen = Screen::Game;
        self.last_result = None;
        self.zones.insert(generate(self.round, viewport, configs, rng))
    }

    /// `Game -> Result`: resolve the click against this round's zones
    pub fn click(&mut self, point: Vec2) -> Result<RarityTier, TransitionError> {
        self.expect(Screen::Game, Action::Click)?;
        let tier = match &self.zones {
            Some(zones) => zones.resolve(point),
            None => RarityTier::Common,
        };
        self.last_result = Some(tier);
        self.screen = Screen::Result;
        Ok(tier)
    }

    /// `Result -> Main`; the round's zones are discarded
    pub fn back_to_main(&mut self) -> Result<(), TransitionError> {
        self.expect(Screen::Result, Action::Back)?;
        self.zones = None;
        self.screen = Screen::Main;
        Ok(())
    }

    /// `Result -> Game` with a new round
    pub fn back_to_game<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        configs: &[RarityConfig],
        rng: &mut R,
    ) -> Result<&ZoneSet, TransitionError> {
        self.expect(Screen::Result, Action::Back)?;
        Ok(self.begin_round(viewport, configs, rng))
    }

    /// Feed a keystroke; returns the new dev-mode flag when it flips
    pub fn press_key(&mut self, key: &str) -> Option<bool> {
        if self.keys.push(key) {
            self.dev_mode = !self.dev_mode;
            Some(self.dev_mode)
        } else {
            None
        }
    }
}
