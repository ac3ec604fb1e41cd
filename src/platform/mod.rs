//! Platform abstraction layer
//!
//! The four screens are mutually exclusive panels. The game only asks for
//! "show X"; layout and styling belong to the page.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPanels;

use crate::presenter::ResultTheme;
use crate::sim::Screen;

/// Screen visibility collaborator
pub trait ScreenPanels {
    /// Show `screen` and hide the other three
    fn show(&mut self, screen: Screen);
    /// Loading bar fill (0 - 100)
    fn set_loading_progress(&mut self, pct: u32);
    /// Backdrop and label of the result panel
    fn apply_theme(&mut self, theme: &ResultTheme);
    /// Stop any cycling backdrop animation
    fn clear_animation(&mut self);
}
