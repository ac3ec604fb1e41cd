//! Rarity tiers and their debug colors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome categories, declared least rare first so `Ord` follows rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    /// Fallback when no zone is hit; never has zones of its own
    Common,
    Uncommon,
    Rare,
    Legendary,
    Godly,
    Unknown,
}

impl RarityTier {
    /// Every tier, least rare first
    pub const ALL: [RarityTier; 6] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::Legendary,
        RarityTier::Godly,
        RarityTier::Unknown,
    ];

    /// Zone-bearing tiers in resolution order (rarest first)
    pub const PRIORITY: [RarityTier; 5] = [
        RarityTier::Unknown,
        RarityTier::Godly,
        RarityTier::Legendary,
        RarityTier::Rare,
        RarityTier::Uncommon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RarityTier::Common => "common",
            RarityTier::Uncommon => "uncommon",
            RarityTier::Rare => "rare",
            RarityTier::Legendary => "legendary",
            RarityTier::Godly => "godly",
            RarityTier::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "common" => Some(RarityTier::Common),
            "uncommon" => Some(RarityTier::Uncommon),
            "rare" => Some(RarityTier::Rare),
            "legendary" => Some(RarityTier::Legendary),
            "godly" => Some(RarityTier::Godly),
            "unknown" => Some(RarityTier::Unknown),
            _ => None,
        }
    }

    /// Text shown on the result screen (unknown stays masked)
    pub fn label(&self) -> &'static str {
        match self {
            RarityTier::Unknown => "???",
            other => other.as_str(),
        }
    }

    /// Whether the looping background track accompanies this result
    pub fn has_ambient(&self) -> bool {
        matches!(
            self,
            RarityTier::Rare | RarityTier::Legendary | RarityTier::Godly | RarityTier::Unknown
        )
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translucent color used by the debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity (0.0 - 1.0)
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_rarity() {
        assert!(RarityTier::Unknown > RarityTier::Godly);
        assert!(RarityTier::Godly > RarityTier::Legendary);
        assert!(RarityTier::Legendary > RarityTier::Rare);
        assert!(RarityTier::Rare > RarityTier::Uncommon);
        assert!(RarityTier::Uncommon > RarityTier::Common);
        assert_eq!(RarityTier::ALL.iter().max(), Some(&RarityTier::Unknown));
    }

    #[test]
    fn test_priority_is_rarest_first_without_common() {
        let mut sorted = RarityTier::PRIORITY;
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, RarityTier::PRIORITY);
        assert!(!RarityTier::PRIORITY.contains(&RarityTier::Common));
    }

    #[test]
    fn test_name_round_trip() {
        for tier in RarityTier::ALL {
            assert_eq!(RarityTier::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(RarityTier::from_str(" GODLY "), Some(RarityTier::Godly));
        assert_eq!(RarityTier::from_str("mythic"), None);
    }

    #[test]
    fn test_unknown_label_is_masked() {
        assert_eq!(RarityTier::Unknown.label(), "???");
        assert_eq!(RarityTier::Rare.label(), "rare");
    }

    #[test]
    fn test_ambient_tiers() {
        assert!(!RarityTier::Common.has_ambient());
        assert!(!RarityTier::Uncommon.has_ambient());
        assert!(RarityTier::Rare.has_ambient());
        assert!(RarityTier::Unknown.has_ambient());
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::new(255, 0, 0, 0.3).to_css(), "rgba(255,0,0,0.3)");
    }
}
