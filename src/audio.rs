//! Audio cues
//!
//! One clip per result tier plus a looping background track. Exclusivity
//! between cues is decided by the presenter; implementations only play,
//! pause and rewind what they are told to.

use crate::sim::RarityTier;

/// Named audio handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Godly,
    Unknown,
    /// Looping ambience under rare-and-up results
    Background,
}

impl AudioCue {
    pub const ALL: [AudioCue; 7] = [
        AudioCue::Common,
        AudioCue::Uncommon,
        AudioCue::Rare,
        AudioCue::Legendary,
        AudioCue::Godly,
        AudioCue::Unknown,
        AudioCue::Background,
    ];

    /// Result stingers (everything except the background loop)
    pub const STINGERS: [AudioCue; 6] = [
        AudioCue::Common,
        AudioCue::Uncommon,
        AudioCue::Rare,
        AudioCue::Legendary,
        AudioCue::Godly,
        AudioCue::Unknown,
    ];

    pub fn for_tier(tier: RarityTier) -> Self {
        match tier {
            RarityTier::Common => AudioCue::Common,
            RarityTier::Uncommon => AudioCue::Uncommon,
            RarityTier::Rare => AudioCue::Rare,
            RarityTier::Legendary => AudioCue::Legendary,
            RarityTier::Godly => AudioCue::Godly,
            RarityTier::Unknown => AudioCue::Unknown,
        }
    }

    /// Clip file served next to the page
    pub fn file_name(&self) -> &'static str {
        match self {
            AudioCue::Common => "common.mp3",
            AudioCue::Uncommon => "uncommon.mp3",
            AudioCue::Rare => "rare.mp3",
            AudioCue::Legendary => "legendary.mp3",
            AudioCue::Godly => "godly.mp3",
            AudioCue::Unknown => "unknown.mp3",
            // Spelling matches the shipped asset
            AudioCue::Background => "backround.mp3",
        }
    }

    pub fn is_looping(&self) -> bool {
        *self == AudioCue::Background
    }
}

/// Audio collaborator driven by the presenter
pub trait AudioCues {
    /// Start playback (fire-and-forget)
    fn play(&mut self, cue: AudioCue);
    fn pause(&mut self, cue: AudioCue);
    /// Seek back to the start without changing play state
    fn rewind(&mut self, cue: AudioCue);
}

/// Wait for a clip to start, logging a rejected start; true once playing
///
/// Browsers reject the start asynchronously when autoplay is blocked or the
/// clip fails to load.
pub async fn watch_playback<T, E: std::fmt::Debug>(
    cue: AudioCue,
    started: impl Future<Output = Result<T, E>>,
) -> bool {
    match started.await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Failed to play {:?}: {:?}", cue, e);
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;

    use super::{AudioCue, AudioCues, watch_playback};

    /// `HtmlAudioElement` per cue
    pub struct WebAudio {
        clips: Vec<(AudioCue, HtmlAudioElement)>,
    }

    impl WebAudio {
        /// Create one element per cue; cues whose element fails are silent
        pub fn new(background_volume: f64) -> Self {
            let clips = AudioCue::ALL
                .into_iter()
                .filter_map(|cue| match HtmlAudioElement::new_with_src(cue.file_name()) {
                    Ok(el) => {
                        if cue.is_looping() {
                            el.set_loop(true);
                            el.set_volume(background_volume.clamp(0.0, 1.0));
                        }
                        Some((cue, el))
                    }
                    Err(e) => {
                        log::warn!("Failed to create audio for {:?}: {:?}", cue, e);
                        None
                    }
                })
                .collect();
            Self { clips }
        }

        fn clip(&self, cue: AudioCue) -> Option<&HtmlAudioElement> {
            self.clips.iter().find(|(c, _)| *c == cue).map(|(_, el)| el)
        }
    }

    impl AudioCues for WebAudio {
        fn play(&mut self, cue: AudioCue) {
            let Some(el) = self.clip(cue) else { return };
            match el.play() {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    watch_playback(cue, JsFuture::from(promise)).await;
                }),
                Err(e) => log::warn!("Failed to play {:?}: {:?}", cue, e),
            }
        }

        fn pause(&mut self, cue: AudioCue) {
            if let Some(el) = self.clip(cue) {
                let _ = el.pause();
            }
        }

        fn rewind(&mut self, cue: AudioCue) {
            if let Some(el) = self.clip(cue) {
                el.set_current_time(0.0);
            }
        }
    }
}
