//! Debug overlay rendering
//!
//! Zones are invisible during play. In dev mode each one is painted as a
//! translucent disc in its tier's debug color; this never affects resolution.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::config::GameConfig;
use crate::sim::{Rgba, ZoneSet};

/// Overlay color for tiers missing from the config table
const FALLBACK_COLOR: Rgba = Rgba::new(255, 255, 255, 0.3);

/// 2D drawing target sized to the viewport
pub trait RenderSurface {
    /// Match the backing store to the viewport (also clears it)
    fn resize(&mut self, width: f32, height: f32);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Clear the surface and paint every zone of the round
pub fn draw_debug_zones<S: RenderSurface + ?Sized>(
    surface: &mut S,
    zones: &ZoneSet,
    config: &GameConfig,
) {
    surface.clear();
    for zone in zones.zones() {
        let color = config.debug_color(zone.tier).unwrap_or(FALLBACK_COLOR);
        surface.fill_circle(zone.center, zone.radius, color);
    }
}
