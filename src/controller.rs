//! Event-driven controller
//!
//! Owns the session plus the three collaborators and exposes one method per
//! input event. Every method runs to completion inside a single callback.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioCues;
use crate::config::{BackTarget, GameConfig};
use crate::platform::ScreenPanels;
use crate::presenter;
use crate::renderer::{RenderSurface, draw_debug_zones};
use crate::sim::{RarityTier, Screen, Session, TransitionError, Viewport};

pub struct LootController<S, A, P> {
    session: Session,
    config: GameConfig,
    rng: Pcg32,
    surface: S,
    audio: A,
    panels: P,
}

impl<S, A, P> LootController<S, A, P>
where
    S: RenderSurface,
    A: AudioCues,
    P: ScreenPanels,
{
    /// Enter the loading screen with an empty bar
    pub fn new(config: GameConfig, seed: u64, surface: S, audio: A, mut panels: P) -> Self {
        panels.set_loading_progress(0);
        panels.show(Screen::Loading);
        log::info!("Loot drop session created with seed: {}", seed);
        Self {
            session: Session::new(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            surface,
            audio,
            panels,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn panels(&self) -> &P {
        &self.panels
    }

    /// Loading timer callback; returns true once the bar is full
    pub fn loading_tick(&mut self) -> Result<bool, TransitionError> {
        let pct = self.session.tick_loading()?;
        self.panels.set_loading_progress(pct);
        Ok(self.session.loading_complete())
    }

    /// Settle timer callback after the bar fills
    pub fn finish_loading(&mut self) -> Result<(), TransitionError> {
        self.session.finish_loading()?;
        self.panels.show(Screen::Main);
        log::info!("Loading complete");
        Ok(())
    }

    /// "Start" pressed on the main screen
    pub fn start(&mut self, viewport: Viewport) -> Result<(), TransitionError> {
        self.session
            .start(viewport, &self.config.rarities, &mut self.rng)?;
        self.enter_game(viewport);
        Ok(())
    }

    fn enter_game(&mut self, viewport: Viewport) {
        self.surface.resize(viewport.width, viewport.height);
        self.surface.clear();
        self.panels.show(Screen::Game);
        self.refresh_overlay();
        log::info!(
            "Round {} started ({}x{})",
            self.session.round(),
            viewport.width,
            viewport.height
        );
    }

    /// Click on the play surface, in surface-relative pixels
    pub fn click(&mut self, point: Vec2) -> Result<RarityTier, TransitionError> {
        let tier = self.session.click(point)?;
        self.surface.clear();
        presenter::present(tier, &mut self.audio, &mut self.panels);
        Ok(tier)
    }

    /// "Back" pressed on the result screen
    ///
    /// Audio stops and any cycling backdrop is cleared. Where it lands is
    /// `config.back_target`. A viewport is only needed when that is `Game`;
    /// without one the result screen stays up.
    pub fn back(&mut self, viewport: Option<Viewport>) -> Result<Screen, TransitionError> {
        match self.config.back_target {
            BackTarget::Main => {
                self.session.back_to_main()?;
                self.leave_result();
                self.panels.show(Screen::Main);
            }
            BackTarget::Game => {
                let viewport = viewport.ok_or(TransitionError::NoViewport)?;
                self.session
                    .back_to_game(viewport, &self.config.rarities, &mut self.rng)?;
                self.leave_result();
                self.enter_game(viewport);
            }
        }
        Ok(self.session.screen())
    }

    fn leave_result(&mut self) {
        presenter::silence(&mut self.audio);
        self.panels.clear_animation();
    }

    /// Raw key press; toggles the debug overlay on the trigger sequence
    pub fn key(&mut self, key: &str) {
        if let Some(on) = self.session.press_key(key) {
            log::info!("Dev mode: {}", on);
            self.refresh_overlay();
        }
    }

    fn refresh_overlay(&mut self) {
        match self.session.zones() {
            Some(zones) if self.session.overlay_visible() => {
                draw_debug_zones(&mut self.surface, zones, &self.config);
            }
            _ => self.surface.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioCue;
    use crate::presenter::ResultTheme;
    use crate::sim::Rgba;

    #[derive(Default)]
    struct Canvas {
        size: (f32, f32),
        circles: usize,
    }

    impl RenderSurface for Canvas {
        fn resize(&mut self, width: f32, height: f32) {
            self.size = (width, height);
            self.circles = 0;
        }
        fn clear(&mut self) {
            self.circles = 0;
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
            self.circles += 1;
        }
    }

    #[derive(Default)]
    struct Speakers {
        playing: Vec<AudioCue>,
    }

    impl AudioCues for Speakers {
        fn play(&mut self, cue: AudioCue) {
            if !self.playing.contains(&cue) {
                self.playing.push(cue);
            }
        }
        fn pause(&mut self, cue: AudioCue) {
            self.playing.retain(|c| *c != cue);
        }
        fn rewind(&mut self, _cue: AudioCue) {}
    }

    #[derive(Default)]
    struct Panels {
        visible: Option<Screen>,
        progress: u32,
        theme: Option<ResultTheme>,
        animated: bool,
    }

    impl ScreenPanels for Panels {
        fn show(&mut self, screen: Screen) {
            self.visible = Some(screen);
        }
        fn set_loading_progress(&mut self, pct: u32) {
            self.progress = pct;
        }
        fn apply_theme(&mut self, theme: &ResultTheme) {
            self.animated = theme.backdrop.is_animated();
            self.theme = Some(theme.clone());
        }
        fn clear_animation(&mut self) {
            self.animated = false;
        }
    }

    type TestController = LootController<Canvas, Speakers, Panels>;

    fn viewport() -> Viewport {
        Viewport::new(1024.0, 768.0).unwrap()
    }

    fn controller(config: GameConfig) -> TestController {
        LootController::new(
            config,
            1234,
            Canvas::default(),
            Speakers::default(),
            Panels::default(),
        )
    }

    fn on_main(config: GameConfig) -> TestController {
        let mut c = controller(config);
        while !c.loading_tick().unwrap() {}
        c.finish_loading().unwrap();
        c
    }

    /// A click point guaranteed to land in a zone of `tier`
    fn center_of(c: &TestController, tier: RarityTier) -> Vec2 {
        c.session()
            .zones()
            .and_then(|z| z.of_tier(tier).next())
            .map(|z| z.center)
            .unwrap()
    }

    #[test]
    fn test_loading_progress_reaches_main() {
        let mut c = controller(GameConfig::default());
        assert_eq!(c.panels().visible, Some(Screen::Loading));
        assert!(!c.loading_tick().unwrap());
        assert_eq!(c.panels().progress, 2);
        assert!(c.finish_loading().is_err());

        while !c.loading_tick().unwrap() {}
        assert_eq!(c.panels().progress, 100);
        c.finish_loading().unwrap();
        assert_eq!(c.panels().visible, Some(Screen::Main));
        assert!(c.loading_tick().is_err());
    }

    #[test]
    fn test_start_sizes_surface_and_shows_game() {
        let mut c = on_main(GameConfig::default());
        c.start(viewport()).unwrap();
        assert_eq!(c.surface().size, (1024.0, 768.0));
        assert_eq!(c.panels().visible, Some(Screen::Game));
        assert_eq!(c.surface().circles, 0);
    }

    #[test]
    fn test_click_presents_result() {
        let mut c = on_main(GameConfig::default());
        c.start(viewport()).unwrap();
        let point = center_of(&c, RarityTier::Unknown);
        assert_eq!(c.click(point).unwrap(), RarityTier::Unknown);

        assert_eq!(c.panels().visible, Some(Screen::Result));
        let theme = c.panels().theme.as_ref().unwrap();
        assert_eq!(theme.label, "???");
        assert!(c.panels().animated);
        assert_eq!(c.audio().playing, vec![AudioCue::Unknown, AudioCue::Background]);
    }

    #[test]
    fn test_click_outside_game_is_rejected() {
        let mut c = on_main(GameConfig::default());
        assert!(c.click(Vec2::new(5.0, 5.0)).is_err());
        assert_eq!(c.panels().visible, Some(Screen::Main));
        assert!(c.audio().playing.is_empty());
    }

    #[test]
    fn test_back_to_main_stops_audio_and_animation() {
        let mut c = on_main(GameConfig::default());
        c.start(viewport()).unwrap();
        let point = center_of(&c, RarityTier::Unknown);
        c.click(point).unwrap();

        assert_eq!(c.back(Some(viewport())).unwrap(), Screen::Main);
        assert_eq!(c.panels().visible, Some(Screen::Main));
        assert!(c.audio().playing.is_empty());
        assert!(!c.panels().animated);
        assert!(c.session().zones().is_none());
    }

    #[test]
    fn test_back_to_game_starts_new_round() {
        let config = GameConfig {
            back_target: BackTarget::Game,
            ..Default::default()
        };
        let mut c = on_main(config);
        c.start(viewport()).unwrap();
        let old = c.session().zones().cloned().unwrap();
        let point = center_of(&c, RarityTier::Rare);
        c.click(point).unwrap();

        assert_eq!(c.back(Some(viewport())).unwrap(), Screen::Game);
        assert_eq!(c.panels().visible, Some(Screen::Game));
        assert_eq!(c.session().round(), 2);
        let new = c.session().zones().unwrap();
        assert_eq!(new.round, 2);
        assert_ne!(old.zones(), new.zones());
        assert!(c.audio().playing.is_empty());
    }

    #[test]
    fn test_dev_overlay_follows_game_screen() {
        let mut c = on_main(GameConfig::default());
        for key in ["d", "e", "v", "m"] {
            c.key(key);
        }
        // Toggled on the main screen: nothing to draw yet
        assert!(c.session().dev_mode());
        assert_eq!(c.surface().circles, 0);

        c.start(viewport()).unwrap();
        assert_eq!(c.surface().circles, c.config().zone_count());

        for key in ["d", "e", "v", "m"] {
            c.key(key);
        }
        assert!(!c.session().dev_mode());
        assert_eq!(c.surface().circles, 0);

        for key in ["d", "e", "v", "m"] {
            c.key(key);
        }
        assert_eq!(c.surface().circles, c.config().zone_count());
    }

    #[test]
    fn test_overlay_has_no_effect_on_result() {
        let mut plain = on_main(GameConfig::default());
        let mut debug = on_main(GameConfig::default());
        for key in ["d", "e", "v", "m"] {
            debug.key(key);
        }
        plain.start(viewport()).unwrap();
        debug.start(viewport()).unwrap();
        assert_eq!(plain.session().zones(), debug.session().zones());

        let point = Vec2::new(512.0, 384.0);
        assert_eq!(plain.click(point).unwrap(), debug.click(point).unwrap());
    }

    #[test]
    fn test_back_to_main_needs_no_viewport() {
        let mut c = on_main(GameConfig::default());
        c.start(viewport()).unwrap();
        c.click(Vec2::new(5.0, 5.0)).unwrap();

        assert_eq!(c.back(None).unwrap(), Screen::Main);
        assert_eq!(c.panels().visible, Some(Screen::Main));
    }

    #[test]
    fn test_back_to_game_without_viewport_stays_on_result() {
        let config = GameConfig {
            back_target: BackTarget::Game,
            ..Default::default()
        };
        let mut c = on_main(config);
        c.start(viewport()).unwrap();
        let point = center_of(&c, RarityTier::Godly);
        c.click(point).unwrap();

        assert_eq!(c.back(None), Err(TransitionError::NoViewport));
        assert_eq!(c.session().screen(), Screen::Result);
        assert_eq!(c.panels().visible, Some(Screen::Result));
        assert_eq!(c.session().round(), 1);
        assert!(c.audio().playing.contains(&AudioCue::Godly));
    }
}
