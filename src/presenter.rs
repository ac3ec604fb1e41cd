//! Result presentation
//!
//! Turns a resolved tier into a look (backdrop + label) and a sound, then
//! hands both to the collaborators.

use crate::audio::{AudioCue, AudioCues};
use crate::consts::HUE_CYCLE_SECS;
use crate::platform::ScreenPanels;
use crate::sim::{RarityTier, Screen};

/// Colors of the cycling backdrop, left to right
const SPECTRUM: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "indigo", "violet"];

/// Result screen background
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    /// Static two-stop left-to-right gradient
    Gradient {
        from: &'static str,
        to: &'static str,
    },
    /// Multi-stop gradient with a looping hue rotation
    Cycling {
        colors: &'static [&'static str],
        period_secs: f32,
    },
}

impl Backdrop {
    /// CSS `background` value
    pub fn css_background(&self) -> String {
        let stops = match self {
            Backdrop::Gradient { from, to } => format!("{from},{to}"),
            Backdrop::Cycling { colors, .. } => colors.join(", "),
        };
        format!("linear-gradient(to right, {stops})")
    }

    /// CSS `animation` value; empty clears any running animation
    pub fn css_animation(&self) -> String {
        match self {
            Backdrop::Gradient { .. } => String::new(),
            Backdrop::Cycling { period_secs, .. } => {
                format!("hue {period_secs}s infinite linear")
            }
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Backdrop::Cycling { .. })
    }
}

/// Everything the result panel needs to render an outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTheme {
    pub tier: RarityTier,
    pub label: &'static str,
    pub backdrop: Backdrop,
}

pub fn theme_for(tier: RarityTier) -> ResultTheme {
    let backdrop = match tier {
        RarityTier::Common => Backdrop::Gradient {
            from: "#777",
            to: "#aaa",
        },
        RarityTier::Uncommon => Backdrop::Gradient {
            from: "#4CAF50",
            to: "#8BC34A",
        },
        RarityTier::Rare => Backdrop::Gradient {
            from: "#2196F3",
            to: "#64B5F6",
        },
        RarityTier::Legendary => Backdrop::Gradient {
            from: "#FFD700",
            to: "#FFECB3",
        },
        RarityTier::Godly => Backdrop::Gradient {
            from: "#E91E63",
            to: "#F48FB1",
        },
        RarityTier::Unknown => Backdrop::Cycling {
            colors: &SPECTRUM,
            period_secs: HUE_CYCLE_SECS,
        },
    };
    ResultTheme {
        tier,
        label: tier.label(),
        backdrop,
    }
}

/// Play the tier's stinger exclusively, with ambience for rare and up
///
/// Every stinger is paused and every cue rewound before the new one starts.
pub fn play_cue<A: AudioCues + ?Sized>(audio: &mut A, tier: RarityTier) {
    for cue in AudioCue::STINGERS {
        audio.pause(cue);
    }
    for cue in AudioCue::ALL {
        audio.rewind(cue);
    }
    audio.play(AudioCue::for_tier(tier));
    if tier.has_ambient() {
        audio.play(AudioCue::Background);
    } else {
        audio.pause(AudioCue::Background);
    }
}

/// Stop everything that might still be playing
pub fn silence<A: AudioCues + ?Sized>(audio: &mut A) {
    for cue in AudioCue::ALL {
        audio.pause(cue);
    }
}

/// Show the result screen for `tier`
pub fn present<A, P>(tier: RarityTier, audio: &mut A, panels: &mut P) -> ResultTheme
where
    A: AudioCues + ?Sized,
    P: ScreenPanels + ?Sized,
{
    let theme = theme_for(tier);
    panels.apply_theme(&theme);
    play_cue(audio, tier);
    panels.show(Screen::Result);
    log::info!("Drop: {}", tier);
    theme
}
