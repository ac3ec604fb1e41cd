//! Game rules
//!
//! Pure logic with no browser dependencies:
//! - Zone placement draws only from the injected RNG
//! - Resolution is a deterministic function of the zone set and the point
//! - Screen transitions are explicit and reject out-of-place input

pub mod keys;
pub mod loading;
pub mod rarity;
pub mod state;
pub mod zone;

pub use keys::KeyBuffer;
pub use loading::LoadingBar;
pub use rarity::{RarityTier, Rgba};
pub use state::{Action, Screen, Session, TransitionError};
pub use zone::{Viewport, Zone, ZoneSet, generate, resolve};
