//! Spawn groups: how many of which enemies appear, and what they do.

use std::sync::Arc;

use serde::Serialize;

use crate::enemy::{Enemy, Ewar, ShipType, WarpDisruption, UNKNOWN_NAME};
use crate::error::{CatalogError, Result};

/// Separator between alternatives in display strings.
pub const ALTERNATIVE_SEPARATOR: &str = " / ";

/// One spawn entry inside a [`Group`](crate::mission::Group).
///
/// Several enemies in one spawn are interchangeable skins of the same ship;
/// the first one is canonical. Once built, a spawn is never mutated: the
/// `with_*` methods consume the value and return the tagged copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PocketEnemy {
    count_from: u32,
    count_to: u32,
    enemies: Vec<Arc<Enemy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ewar: Option<Ewar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wd: Option<WarpDisruption>,
    loot: bool,
    trigger: bool,
}

impl PocketEnemy {
    /// Create an untagged spawn.
    ///
    /// # Errors
    ///
    /// Returns an error if `count_from > count_to` or `enemies` is empty.
    pub fn new(count_from: u32, count_to: u32, enemies: Vec<Arc<Enemy>>) -> Result<Self> {
        if count_from > count_to {
            return Err(CatalogError::InvalidCountRange {
                from: count_from,
                to: count_to,
            });
        }
        if enemies.is_empty() {
            return Err(CatalogError::EmptySpawn);
        }
        Ok(Self {
            count_from,
            count_to,
            enemies,
            ewar: None,
            wd: None,
            loot: false,
            trigger: false,
        })
    }

    /// Tag the spawn with an electronic warfare effect.
    pub fn with_ewar(mut self, ewar: Ewar) -> Self {
        self.ewar = Some(ewar);
        self
    }

    /// Tag the spawn as warp disrupting.
    pub fn with_wd(mut self, wd: WarpDisruption) -> Self {
        self.wd = Some(wd);
        self
    }

    /// Mark the spawn as dropping loot.
    pub fn with_loot(mut self) -> Self {
        self.loot = true;
        self
    }

    /// Mark the spawn as triggering the next wave.
    pub fn with_trigger(mut self) -> Self {
        self.trigger = true;
        self
    }

    /// Lower bound of the ship count.
    #[must_use]
    pub fn count_from(&self) -> u32 {
        self.count_from
    }

    /// Upper bound of the ship count.
    #[must_use]
    pub fn count_to(&self) -> u32 {
        self.count_to
    }

    /// Referenced enemies, canonical first. Never empty.
    #[must_use]
    pub fn enemies(&self) -> &[Arc<Enemy>] {
        &self.enemies
    }

    /// Canonical enemy of the spawn.
    #[must_use]
    pub fn canonical(&self) -> &Enemy {
        &self.enemies[0]
    }

    /// Electronic warfare effect, if any.
    #[must_use]
    pub fn ewar(&self) -> Option<Ewar> {
        self.ewar
    }

    /// Warp disruption, if any.
    #[must_use]
    pub fn wd(&self) -> Option<WarpDisruption> {
        self.wd
    }

    /// Whether the spawn drops a lootable wreck or container.
    #[must_use]
    pub fn loot(&self) -> bool {
        self.loot
    }

    /// Whether destroying the spawn triggers the next wave.
    #[must_use]
    pub fn trigger(&self) -> bool {
        self.trigger
    }

    /// Names of all skins, e.g. `"Pithi Invader / Wrecker"`.
    ///
    /// The faction prefix is the canonical name up to its first space. It is
    /// stripped, as a plain substring, from the first place it occurs in every
    /// alternative; alternatives that do not contain it are shown in full.
    #[must_use]
    pub fn display_names(&self) -> String {
        let mut names = self.enemies.iter().map(|enemy| enemy.name_or_unknown());
        let Some(canonical) = names.next() else {
            return UNKNOWN_NAME.to_string();
        };

        let faction = canonical.split(' ').next().unwrap_or_default();
        let mut parts = vec![canonical.to_string()];
        parts.extend(names.map(|name| {
            if faction.is_empty() {
                name.to_string()
            } else {
                name.replacen(faction, "", 1).trim_start().to_string()
            }
        }));
        parts.join(ALTERNATIVE_SEPARATOR)
    }

    /// Bounties of all skins, thousands-grouped, e.g. `"7.500 / 7.875"`.
    #[must_use]
    pub fn display_bounty(&self) -> String {
        self.enemies
            .iter()
            .map(|enemy| enemy.display_bounty())
            .collect::<Vec<_>>()
            .join(ALTERNATIVE_SEPARATOR)
    }

    /// Ship count, `"4"` for a fixed count or `"5 - 6"` for a range.
    #[must_use]
    pub fn display_count(&self) -> String {
        if self.count_from == self.count_to {
            self.count_from.to_string()
        } else {
            format!("{} - {}", self.count_from, self.count_to)
        }
    }

    /// Hull class of the canonical enemy.
    #[must_use]
    pub fn primary_ship_type(&self) -> ShipType {
        self.canonical().ship_type
    }

    /// Lowest and highest bounty among the skins.
    #[must_use]
    pub fn bounty_bounds(&self) -> (u64, u64) {
        let bounties = self.enemies.iter().map(|enemy| enemy.bounty);
        let min = bounties.clone().min().unwrap_or_default();
        let max = bounties.max().unwrap_or_default();
        (min, max)
    }

    /// Total bounty range for the whole spawn.
    ///
    /// Lower bound assumes the minimum count of the cheapest skin, upper
    /// bound the maximum count of the most valuable skin.
    #[must_use]
    pub fn bounty_range(&self) -> (u64, u64) {
        let (min, max) = self.bounty_bounds();
        (
            min.saturating_mul(u64::from(self.count_from)),
            max.saturating_mul(u64::from(self.count_to)),
        )
    }

    /// Check whether any skin has an unknown bounty.
    #[must_use]
    pub fn has_unknown_bounty(&self) -> bool {
        self.enemies.iter().any(|enemy| enemy.has_unknown_bounty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(ship_type: ShipType, name: &str, bounty: u64) -> Arc<Enemy> {
        Arc::new(Enemy::new(ship_type, name, bounty))
    }

    fn pithi_pair() -> PocketEnemy {
        PocketEnemy::new(
            4,
            4,
            vec![
                enemy(ShipType::Frigate, "Pithi Invader", 4_875),
                enemy(ShipType::Frigate, "Pithi Wrecker", 7_875),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = PocketEnemy::new(6, 5, vec![enemy(ShipType::Frigate, "Thief", 0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCountRange { from: 6, to: 5 }));
    }

    #[test]
    fn test_new_rejects_empty_spawn() {
        let err = PocketEnemy::new(1, 1, Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySpawn));
    }

    #[test]
    fn test_display_names_single() {
        let spawn = PocketEnemy::new(1, 1, vec![enemy(ShipType::Frigate, "Thief", 0)]).unwrap();
        assert_eq!(spawn.display_names(), "Thief");
    }

    #[test]
    fn test_display_names_strips_faction_prefix() {
        assert_eq!(pithi_pair().display_names(), "Pithi Invader / Wrecker");
    }

    #[test]
    fn test_display_names_three_skins() {
        let spawn = PocketEnemy::new(
            1,
            1,
            vec![
                enemy(ShipType::Battlecruiser, "Pithatis Enforcer", 135_000),
                enemy(ShipType::Battlecruiser, "Pithatis Executor", 131_250),
                enemy(ShipType::Battlecruiser, "Pithatis Assaulter", 138_750),
            ],
        )
        .unwrap();
        assert_eq!(spawn.display_names(), "Pithatis Enforcer / Executor / Assaulter");
    }

    #[test]
    fn test_display_names_prefix_missing_left_intact() {
        let spawn = PocketEnemy::new(
            4,
            4,
            vec![
                enemy(ShipType::Cruiser, "Mercenary Commander", 85_000),
                enemy(ShipType::Cruiser, "Blackbird", 0),
            ],
        )
        .unwrap();
        assert_eq!(spawn.display_names(), "Mercenary Commander / Blackbird");
    }

    #[test]
    fn test_display_names_substring_match_is_textual() {
        // "Pithi" also occurs inside "Pithior"; only the literal text is removed.
        let spawn = PocketEnemy::new(
            1,
            1,
            vec![
                enemy(ShipType::Frigate, "Pithi Invader", 4_875),
                enemy(ShipType::Destroyer, "Pithior Renegade", 12_375),
            ],
        )
        .unwrap();
        assert_eq!(spawn.display_names(), "Pithi Invader / or Renegade");
    }

    #[test]
    fn test_display_names_blank_name_is_unknown() {
        let spawn = PocketEnemy::new(1, 1, vec![enemy(ShipType::Sentry, "", 0)]).unwrap();
        assert_eq!(spawn.display_names(), "Unknown");
    }

    #[test]
    fn test_display_bounty() {
        let single = PocketEnemy::new(1, 1, vec![enemy(ShipType::Frigate, "Angel Viper", 30_000)]).unwrap();
        assert_eq!(single.display_bounty(), "30.000");
        assert_eq!(single.display_bounty(), single.display_bounty());
        assert_eq!(pithi_pair().display_bounty(), "4.875 / 7.875");
    }

    #[test]
    fn test_display_count() {
        assert_eq!(pithi_pair().display_count(), "4");
        let range = PocketEnemy::new(5, 6, vec![enemy(ShipType::Frigate, "Pithi Invader", 4_875)]).unwrap();
        assert_eq!(range.display_count(), "5 - 6");
    }

    #[test]
    fn test_primary_ship_type_uses_canonical() {
        let spawn = PocketEnemy::new(
            2,
            2,
            vec![
                enemy(ShipType::Industrial, "Personnel Transport", 0),
                enemy(ShipType::Frigate, "Thief", 0),
            ],
        )
        .unwrap();
        assert_eq!(spawn.primary_ship_type(), ShipType::Industrial);
    }

    #[test]
    fn test_tags() {
        let spawn = pithi_pair()
            .with_ewar(Ewar::TargetJamming)
            .with_wd(WarpDisruption::WarpDisrupt)
            .with_trigger();
        assert_eq!(spawn.ewar(), Some(Ewar::TargetJamming));
        assert_eq!(spawn.wd(), Some(WarpDisruption::WarpDisrupt));
        assert!(spawn.trigger());
        assert!(!spawn.loot());
    }

    #[test]
    fn test_bounty_range() {
        let spawn = PocketEnemy::new(
            5,
            6,
            vec![
                enemy(ShipType::Frigate, "Pithi Invader", 4_875),
                enemy(ShipType::Frigate, "Pithi Wrecker", 7_875),
            ],
        )
        .unwrap();
        assert_eq!(spawn.bounty_bounds(), (4_875, 7_875));
        assert_eq!(spawn.bounty_range(), (5 * 4_875, 6 * 7_875));
    }
}
