//! Frozen mission trees: Mission → Pocket → Group → [`PocketEnemy`].
//!
//! Values of these types are produced by resolving drafts (see
//! [`crate::draft`]) and expose read-only accessors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::links::{eve_survival_link, eve_uni_link, mission_key};
use crate::spawn::PocketEnemy;

/// Damage type dealt or resisted by mission enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Damage {
    /// Electromagnetic.
    #[serde(rename = "EM")]
    Em,
    /// Thermal.
    Thermal,
    /// Kinetic.
    Kinetic,
    /// Explosive.
    Explosion,
}

impl Damage {
    /// Get the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Em => "EM",
            Self::Thermal => "Thermal",
            Self::Kinetic => "Kinetic",
            Self::Explosion => "Explosion",
        }
    }
}

impl fmt::Display for Damage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mission level (agent level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Level 1.
    #[serde(rename = "LEVEL_1")]
    Level1,
    /// Level 2.
    #[serde(rename = "LEVEL_2")]
    Level2,
    /// Level 3.
    #[serde(rename = "LEVEL_3")]
    Level3,
    /// Level 4.
    #[serde(rename = "LEVEL_4")]
    Level4,
    /// Level 5.
    #[serde(rename = "LEVEL_5")]
    Level5,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Level1,
        Self::Level2,
        Self::Level3,
        Self::Level4,
        Self::Level5,
    ];

    /// Canonical string form, `LEVEL_1` .. `LEVEL_5`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Level1 => "LEVEL_1",
            Self::Level2 => "LEVEL_2",
            Self::Level3 => "LEVEL_3",
            Self::Level4 => "LEVEL_4",
            Self::Level5 => "LEVEL_5",
        }
    }

    /// Numeric level.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
            Self::Level4 => 4,
            Self::Level5 => 5,
        }
    }

    /// Level from its number, `None` outside 1..=5.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            4 => Some(Self::Level4),
            5 => Some(Self::Level5),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mission category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionType {
    /// Mining mission.
    Mining,
    /// Combat mission.
    Security,
}

impl MissionType {
    /// Canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mining => "MINING",
            Self::Security => "SECURITY",
        }
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One wave inside a pocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    name: String,
    note: String,
    enemies: Vec<PocketEnemy>,
}

impl Group {
    /// Create a group from already built spawns.
    #[must_use]
    pub fn new(name: impl Into<String>, note: impl Into<String>, enemies: Vec<PocketEnemy>) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            enemies,
        }
    }

    /// Group name, e.g. "Group 1" or "Reinforcement 2".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawn distance and aggro notes.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Spawns in this group.
    #[must_use]
    pub fn enemies(&self) -> &[PocketEnemy] {
        &self.enemies
    }
}

/// One location of a mission the player warps into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pocket {
    name: String,
    note: String,
    groups: Vec<Group>,
}

impl Pocket {
    /// Create a pocket from already built groups.
    #[must_use]
    pub fn new(name: impl Into<String>, note: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            groups,
        }
    }

    /// Pocket name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text notes for the pocket.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Waves in this pocket.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All spawns of all groups, in order.
    pub fn spawns(&self) -> impl Iterator<Item = &PocketEnemy> {
        self.groups.iter().flat_map(|group| group.enemies.iter())
    }
}

/// The parts of a mission shown in a briefing panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissionBriefing<'a> {
    /// Free-text notes.
    pub info: &'a str,
    /// Shortcut strategy.
    pub blitz: &'a str,
    /// Pocket breakdown.
    pub pockets: &'a [Pocket],
}

/// A fully resolved mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    name: String,
    level: Level,
    #[serde(rename = "type")]
    mission_type: MissionType,
    damage_dealt: Vec<Damage>,
    damage_resisted: Vec<Damage>,
    blitz: String,
    info: String,
    key: String,
    eve_uni_link: String,
    eve_survival_link: String,
    pockets: Vec<Pocket>,
}

impl Mission {
    /// Create a mission, deriving its key and links from name and level.
    ///
    /// Damage lists keep their first-seen order and drop repeats.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        level: Level,
        mission_type: MissionType,
        damage_dealt: &[Damage],
        damage_resisted: &[Damage],
        blitz: impl Into<String>,
        info: impl Into<String>,
        pockets: Vec<Pocket>,
    ) -> Self {
        let name = name.into();
        Self {
            key: mission_key(&name),
            eve_uni_link: eve_uni_link(&name, level),
            eve_survival_link: eve_survival_link(&name, level),
            name,
            level,
            mission_type,
            damage_dealt: dedup_damage(damage_dealt),
            damage_resisted: dedup_damage(damage_resisted),
            blitz: blitz.into(),
            info: info.into(),
            pockets,
        }
    }

    /// Mission name as shown in game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mission level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Mission category.
    #[must_use]
    pub fn mission_type(&self) -> MissionType {
        self.mission_type
    }

    /// Damage types the enemies deal.
    #[must_use]
    pub fn damage_dealt(&self) -> &[Damage] {
        &self.damage_dealt
    }

    /// Damage types the enemies resist.
    #[must_use]
    pub fn damage_resisted(&self) -> &[Damage] {
        &self.damage_resisted
    }

    /// Shortcut strategy.
    #[must_use]
    pub fn blitz(&self) -> &str {
        &self.blitz
    }

    /// Free-text notes.
    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Stable identifier derived from the name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// EVE University wiki page.
    #[must_use]
    pub fn eve_uni_link(&self) -> &str {
        &self.eve_uni_link
    }

    /// EVE Survival wiki page.
    #[must_use]
    pub fn eve_survival_link(&self) -> &str {
        &self.eve_survival_link
    }

    /// Pockets in warp order.
    #[must_use]
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Info, blitz and pockets bundled for a briefing view.
    #[must_use]
    pub fn briefing(&self) -> MissionBriefing<'_> {
        MissionBriefing {
            info: &self.info,
            blitz: &self.blitz,
            pockets: &self.pockets,
        }
    }

    /// All spawns of the mission, in pocket and group order.
    pub fn spawns(&self) -> impl Iterator<Item = &PocketEnemy> {
        self.pockets.iter().flat_map(Pocket::spawns)
    }

    /// Number of spawn entries across all pockets.
    #[must_use]
    pub fn spawn_count(&self) -> usize {
        self.spawns().count()
    }

    /// Fewest and most ships the mission can spawn, saturating at `u32::MAX`.
    #[must_use]
    pub fn ship_count_range(&self) -> (u32, u32) {
        self.spawns().fold((0, 0), |(from, to), spawn| {
            (
                from.saturating_add(spawn.count_from()),
                to.saturating_add(spawn.count_to()),
            )
        })
    }

    /// Summed bounty range of every spawn, in ISK.
    ///
    /// Unknown bounties count as zero.
    #[must_use]
    pub fn total_bounty_range(&self) -> (u64, u64) {
        self.spawns().fold((0, 0), |(low, high), spawn| {
            let (from, to) = spawn.bounty_range();
            (low.saturating_add(from), high.saturating_add(to))
        })
    }

    /// Check whether any spawn triggers a follow-up wave.
    #[must_use]
    pub fn has_trigger(&self) -> bool {
        self.spawns().any(PocketEnemy::trigger)
    }
}

fn dedup_damage(damage: &[Damage]) -> Vec<Damage> {
    let mut unique = Vec::with_capacity(damage.len());
    for kind in damage {
        if !unique.contains(kind) {
            unique.push(*kind);
        }
    }
    unique
}
