//! Enemy records and the tags a spawn can carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::format_bounty;

/// Display text used when an enemy has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Hull class of an enemy, used for iconography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipType {
    /// Frigate hull.
    Frigate,
    /// Elite frigate hull.
    EliteFrigate,
    /// Cruiser hull.
    Cruiser,
    /// Elite cruiser hull.
    EliteCruiser,
    /// Battlecruiser hull.
    Battlecruiser,
    /// Destroyer hull.
    Destroyer,
    /// Hauler or transport.
    Industrial,
    /// Stationary gun or missile battery.
    Sentry,
    /// Deployable or station structure.
    Structure,
}

impl ShipType {
    /// All ship types in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Frigate,
        Self::EliteFrigate,
        Self::Cruiser,
        Self::EliteCruiser,
        Self::Battlecruiser,
        Self::Destroyer,
        Self::Industrial,
        Self::Sentry,
        Self::Structure,
    ];

    /// Get the display label for this ship type.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Frigate => "Frigate",
            Self::EliteFrigate => "Elite Frigate",
            Self::Cruiser => "Cruiser",
            Self::EliteCruiser => "Elite Cruiser",
            Self::Battlecruiser => "Battlecruiser",
            Self::Destroyer => "Destroyer",
            Self::Industrial => "Industrial",
            Self::Sentry => "Sentry",
            Self::Structure => "Structure",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Electronic warfare applied by a spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ewar {
    /// Reduces turret tracking and optimal range.
    TrackingDisruption,
    /// Breaks target locks.
    TargetJamming,
    /// Stasis webifier, reduces velocity.
    Web,
}

impl Ewar {
    /// Get the display label for this effect.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TrackingDisruption => "Tracking Disruption",
            Self::TargetJamming => "Target Jamming",
            Self::Web => "Web",
        }
    }
}

impl fmt::Display for Ewar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Warp disruption applied by a spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarpDisruption {
    /// Prevents warping out while locked.
    WarpDisrupt,
}

impl WarpDisruption {
    /// Get the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WarpDisrupt => "Warp Disrupt",
        }
    }
}

impl fmt::Display for WarpDisruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single enemy ship or structure.
///
/// Created once when a roster is built and shared by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enemy {
    /// Hull class.
    pub ship_type: ShipType,

    /// In-game name, e.g. "Pithi Invader".
    pub display_name: String,

    /// Bounty in ISK. Zero means the bounty is unknown.
    #[serde(default)]
    pub bounty: u64,
}

impl Enemy {
    /// Create a new enemy record.
    #[must_use]
    pub fn new(ship_type: ShipType, display_name: impl Into<String>, bounty: u64) -> Self {
        Self {
            ship_type,
            display_name: display_name.into(),
            bounty,
        }
    }

    /// Name for display, falling back to [`UNKNOWN_NAME`] when blank.
    #[must_use]
    pub fn name_or_unknown(&self) -> &str {
        if self.display_name.trim().is_empty() {
            UNKNOWN_NAME
        } else {
            &self.display_name
        }
    }

    /// Check whether the bounty is the "unknown" sentinel.
    #[must_use]
    pub fn has_unknown_bounty(&self) -> bool {
        self.bounty == 0
    }

    /// Bounty formatted with thousands separators.
    #[must_use]
    pub fn display_bounty(&self) -> String {
        format_bounty(self.bounty)
    }
}

/// Symbolic name of a roster entry.
///
/// Mission data references enemies through these ids, so a typo in literal
/// data fails to compile and a typo in a RON file fails to parse.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnemyId {
    // Frigates
    AngelViper,
    AngelWebifier,
    GistiiImpaler,
    GuristasKyoukan,
    GuristasWebifier,
    MercenaryFighter,
    PithiInfiltrator,
    PithiInvader,
    PithiPlunderer,
    PithiWrecker,
    Thief,
    Raider,
    Sunder,

    // Cruisers
    GistumBreaker,
    GistumCenturion,
    GistumCrusher,
    GistumDefeater,
    GistumLiquidator,
    GistumMarauder,
    GistumPhalanx,
    GistumPredator,
    MercenaryCorporal,
    MercenaryLieutenant,
    MercenaryCommander,
    PithumAscriber,
    PithumInferno,
    PithumMortifier,
    PithumNullifier,
    PithumSilencer,
    Blackbird,
    Moa,
    Caracal,
    Bomber,

    // Elite cruisers
    Rook,
    Cerberus,

    // Battlecruisers
    GistatisLegionnaire,
    GistatisPrimus,
    GistatisTribuni,
    PithatisAssaulter,
    PithatisEnforcer,
    PithatisExecutor,
    Ferox,

    // Destroyers
    GistiorDefiler,
    GistiorHaunter,
    GistiorSeizer,
    PithiorRenegade,
    PithiorTerrorist,

    // Industrials
    GuristasPersonnelTransport,
    PersonnelTransport,
    MercenaryMiner,
    MercenaryEliteFighter,

    // Sentries
    AngelLightMissileBattery,
    HeavyMissileBattery,
    StatisTower,
    TowerSentryAngelII,

    // Structures
    AuxPowerArray,
    RepairStation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_or_unknown() {
        let named = Enemy::new(ShipType::Frigate, "Pithi Invader", 4_875);
        assert_eq!(named.name_or_unknown(), "Pithi Invader");

        let blank = Enemy::new(ShipType::Frigate, "  ", 0);
        assert_eq!(blank.name_or_unknown(), UNKNOWN_NAME);
    }

    #[test]
    fn test_unknown_bounty_sentinel() {
        let thief = Enemy::new(ShipType::Frigate, "Thief", 0);
        assert!(thief.has_unknown_bounty());
        assert_eq!(thief.display_bounty(), "0");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ShipType::EliteCruiser.to_string(), "Elite Cruiser");
        assert_eq!(Ewar::TargetJamming.to_string(), "Target Jamming");
        assert_eq!(WarpDisruption::WarpDisrupt.to_string(), "Warp Disrupt");
    }
}
