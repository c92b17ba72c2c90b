//! Construction-only mission definitions.
//!
//! Drafts reference enemies by [`EnemyId`] and are plain serde data, so the
//! same types describe both the built-in missions and RON mission files.
//! Every builder method consumes the draft and returns the updated value;
//! [`MissionDraft::resolve`] validates a draft against a roster and freezes
//! it into a [`Mission`].
//!
//! # Example RON
//!
//! ```ron
//! MissionFile(
//!     missions: [
//!         MissionDraft(
//!             name: "Seek and Destroy (Guristas Pirates)",
//!             level: LEVEL_3,
//!             mission_type: SECURITY,
//!             damage_dealt: [Kinetic, Thermal],
//!             blitz: "Kill Group 2",
//!             pockets: [
//!                 PocketDraft(
//!                     name: "Pocket 1",
//!                     groups: [
//!                         GroupDraft(
//!                             name: "Group 2",
//!                             note: "100-110km",
//!                             spawns: [
//!                                 SpawnDraft(count_from: 1, count_to: 1, enemies: [PithatisAssaulter]),
//!                             ],
//!                         ),
//!                     ],
//!                 ),
//!             ],
//!         ),
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::enemy::{EnemyId, Ewar, WarpDisruption};
use crate::error::{CatalogError, Result};
use crate::mission::{Damage, Group, Level, Mission, MissionType, Pocket};
use crate::roster::EnemyCatalog;
use crate::spawn::PocketEnemy;

/// Spawn definition referencing enemies by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnDraft {
    /// Lower bound of the ship count.
    pub count_from: u32,
    /// Upper bound of the ship count.
    pub count_to: u32,
    /// Interchangeable skins, canonical first.
    pub enemies: Vec<EnemyId>,
    /// Electronic warfare effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ewar: Option<Ewar>,
    /// Warp disruption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wd: Option<WarpDisruption>,
    /// Drops loot.
    #[serde(default, skip_serializing_if = "is_false")]
    pub loot: bool,
    /// Triggers the next wave.
    #[serde(default, skip_serializing_if = "is_false")]
    pub trigger: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl SpawnDraft {
    /// Create an untagged spawn draft.
    #[must_use]
    pub fn new(count_from: u32, count_to: u32, enemies: &[EnemyId]) -> Self {
        Self {
            count_from,
            count_to,
            enemies: enemies.to_vec(),
            ewar: None,
            wd: None,
            loot: false,
            trigger: false,
        }
    }

    /// Set the electronic warfare effect.
    pub fn set_ewar(mut self, ewar: Ewar) -> Self {
        self.ewar = Some(ewar);
        self
    }

    /// Set the warp disruption.
    pub fn set_wd(mut self, wd: WarpDisruption) -> Self {
        self.wd = Some(wd);
        self
    }

    /// Mark as dropping loot.
    pub fn set_loot(mut self) -> Self {
        self.loot = true;
        self
    }

    /// Mark as triggering the next wave.
    pub fn set_trigger(mut self) -> Self {
        self.trigger = true;
        self
    }

    /// Resolve enemy ids and freeze into a [`PocketEnemy`].
    ///
    /// # Errors
    ///
    /// Returns an error if the count range is inverted, the enemy list is
    /// empty, or an id is missing from `roster`.
    pub fn resolve(&self, roster: &EnemyCatalog) -> Result<PocketEnemy> {
        let enemies = self
            .enemies
            .iter()
            .map(|id| roster.require(*id))
            .collect::<Result<Vec<_>>>()?;

        let mut spawn = PocketEnemy::new(self.count_from, self.count_to, enemies)?;
        if let Some(ewar) = self.ewar {
            spawn = spawn.with_ewar(ewar);
        }
        if let Some(wd) = self.wd {
            spawn = spawn.with_wd(wd);
        }
        if self.loot {
            spawn = spawn.with_loot();
        }
        if self.trigger {
            spawn = spawn.with_trigger();
        }
        Ok(spawn)
    }
}

/// Wave definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDraft {
    /// Group name.
    pub name: String,
    /// Distance and aggro notes.
    #[serde(default)]
    pub note: String,
    /// Spawns in the wave.
    #[serde(default)]
    pub spawns: Vec<SpawnDraft>,
}

impl GroupDraft {
    /// Create a group draft.
    #[must_use]
    pub fn new(name: impl Into<String>, note: impl Into<String>, spawns: Vec<SpawnDraft>) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            spawns,
        }
    }
}

/// Pocket definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketDraft {
    /// Pocket name.
    pub name: String,
    /// Free-text notes.
    #[serde(default)]
    pub note: String,
    /// Waves in the pocket.
    #[serde(default)]
    pub groups: Vec<GroupDraft>,
}

impl PocketDraft {
    /// Create a pocket draft.
    #[must_use]
    pub fn new(name: impl Into<String>, note: impl Into<String>, groups: Vec<GroupDraft>) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            groups,
        }
    }
}

/// Mission definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionDraft {
    /// Mission name.
    pub name: String,
    /// Mission level.
    pub level: Level,
    /// Mission category.
    pub mission_type: MissionType,
    /// Damage types dealt.
    #[serde(default)]
    pub damage_dealt: Vec<Damage>,
    /// Damage types resisted.
    #[serde(default)]
    pub damage_resisted: Vec<Damage>,
    /// Shortcut strategy.
    #[serde(default)]
    pub blitz: String,
    /// Free-text notes.
    #[serde(default)]
    pub info: String,
    /// Pockets in warp order.
    #[serde(default)]
    pub pockets: Vec<PocketDraft>,
}

impl MissionDraft {
    /// Start a mission draft with empty notes and no pockets.
    #[must_use]
    pub fn new(name: impl Into<String>, level: Level, mission_type: MissionType) -> Self {
        Self {
            name: name.into(),
            level,
            mission_type,
            damage_dealt: Vec::new(),
            damage_resisted: Vec::new(),
            blitz: String::new(),
            info: String::new(),
            pockets: Vec::new(),
        }
    }

    /// Set the damage types dealt.
    pub fn set_damage_dealt(mut self, damage: &[Damage]) -> Self {
        self.damage_dealt = damage.to_vec();
        self
    }

    /// Set the damage types resisted.
    pub fn set_damage_resisted(mut self, damage: &[Damage]) -> Self {
        self.damage_resisted = damage.to_vec();
        self
    }

    /// Set the shortcut strategy.
    pub fn set_blitz_note(mut self, blitz: impl Into<String>) -> Self {
        self.blitz = blitz.into();
        self
    }

    /// Set the free-text notes.
    pub fn set_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Set the pockets.
    pub fn set_pockets(mut self, pockets: Vec<PocketDraft>) -> Self {
        self.pockets = pockets;
        self
    }

    /// Resolve every spawn against `roster` and freeze the mission.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InMission`] naming the pocket, group and spawn
    /// that failed.
    pub fn resolve(&self, roster: &EnemyCatalog) -> Result<Mission> {
        let pockets = self
            .pockets
            .iter()
            .map(|pocket| self.resolve_pocket(pocket, roster))
            .collect::<Result<Vec<_>>>()?;

        Ok(Mission::new(
            self.name.clone(),
            self.level,
            self.mission_type,
            &self.damage_dealt,
            &self.damage_resisted,
            self.blitz.clone(),
            self.info.clone(),
            pockets,
        ))
    }

    fn resolve_pocket(&self, pocket: &PocketDraft, roster: &EnemyCatalog) -> Result<Pocket> {
        let mut groups = Vec::with_capacity(pocket.groups.len());
        for group in &pocket.groups {
            let mut spawns = Vec::with_capacity(group.spawns.len());
            for (index, spawn) in group.spawns.iter().enumerate() {
                let resolved = spawn.resolve(roster).map_err(|e| {
                    e.in_mission(
                        &self.name,
                        format!("{} / {} / spawn #{}", pocket.name, group.name, index + 1),
                    )
                })?;
                spawns.push(resolved);
            }
            groups.push(Group::new(group.name.clone(), group.note.clone(), spawns));
        }
        Ok(Pocket::new(pocket.name.clone(), pocket.note.clone(), groups))
    }

    /// Key the resolved mission will have.
    #[must_use]
    pub fn key(&self) -> String {
        crate::links::mission_key(&self.name)
    }
}

/// Top-level layout of a mission RON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionFile {
    /// Missions in file order.
    pub missions: Vec<MissionDraft>,
}

impl MissionFile {
    /// Parse a mission file from RON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DataParseError`] tagged with `origin`.
    pub fn from_ron_str(source: &str, origin: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| CatalogError::DataParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Write the file as pretty RON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SerializeError`] if serialization fails.
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| CatalogError::SerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyId as E;

    fn create_test_draft() -> MissionDraft {
        MissionDraft::new("Seek and Destroy (Guristas Pirates)", Level::Level3, MissionType::Security)
            .set_blitz_note("Kill Group 2")
            .set_damage_dealt(&[Damage::Kinetic, Damage::Thermal])
            .set_damage_resisted(&[Damage::Kinetic, Damage::Thermal])
            .set_pockets(vec![PocketDraft::new(
                "Pocket 1",
                "",
                vec![GroupDraft::new(
                    "Group 2",
                    "100-110km",
                    vec![
                        SpawnDraft::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker]),
                        SpawnDraft::new(1, 1, &[E::PithatisAssaulter]).set_trigger(),
                    ],
                )],
            )])
    }

    #[test]
    fn test_resolve_mission() {
        let roster = EnemyCatalog::standard();
        let mission = create_test_draft().resolve(&roster).unwrap();

        assert_eq!(mission.key(), "SEEK_AND_DESTROY_GURISTAS_PIRATES");
        assert_eq!(mission.blitz(), "Kill Group 2");
        let spawns: Vec<_> = mission.spawns().collect();
        assert_eq!(spawns.len(), 2);
        assert_eq!(spawns[0].display_names(), "Pithi Plunderer / Wrecker");
        assert!(spawns[1].trigger());
    }

    #[test]
    fn test_draft_key_matches_resolved_key() {
        let draft = create_test_draft();
        let mission = draft.resolve(&EnemyCatalog::standard()).unwrap();
        assert_eq!(draft.key(), mission.key());
    }

    #[test]
    fn test_resolve_reports_location() {
        let mut draft = create_test_draft();
        draft.pockets[0].groups[0].spawns[1].count_from = 3;

        let err = draft.resolve(&EnemyCatalog::standard()).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            CatalogError::InvalidCountRange { from: 3, to: 1 }
        ));
        assert!(err.to_string().contains("Pocket 1 / Group 2 / spawn #2"));
    }

    #[test]
    fn test_resolve_unknown_enemy() {
        let err = create_test_draft().resolve(&EnemyCatalog::new()).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            CatalogError::UnknownEnemy(E::PithiPlunderer)
        ));
    }

    #[test]
    fn test_resolve_empty_spawn() {
        let mut draft = create_test_draft();
        draft.pockets[0].groups[0].spawns[0].enemies.clear();

        let err = draft.resolve(&EnemyCatalog::standard()).unwrap_err();
        assert!(matches!(err.root_cause(), CatalogError::EmptySpawn));
    }

    #[test]
    fn test_spawn_flags_carried_over() {
        let roster = EnemyCatalog::standard();
        let spawn = SpawnDraft::new(3, 3, &[E::GuristasKyoukan, E::GuristasWebifier])
            .set_ewar(Ewar::TargetJamming)
            .set_wd(WarpDisruption::WarpDisrupt)
            .set_loot()
            .resolve(&roster)
            .unwrap();
        assert_eq!(spawn.ewar(), Some(Ewar::TargetJamming));
        assert_eq!(spawn.wd(), Some(WarpDisruption::WarpDisrupt));
        assert!(spawn.loot());
        assert!(!spawn.trigger());
    }

    #[test]
    fn test_mission_file_from_ron() {
        let source = r#"
            MissionFile(
                missions: [
                    MissionDraft(
                        name: "Stop the Thief (Guristas Pirates)",
                        level: LEVEL_3,
                        mission_type: SECURITY,
                        damage_dealt: [Kinetic, Thermal],
                        pockets: [
                            PocketDraft(
                                name: "Pocket 1",
                                groups: [
                                    GroupDraft(
                                        name: "Group 1",
                                        note: "20-30km - auto aggro",
                                        spawns: [
                                            SpawnDraft(count_from: 1, count_to: 1, enemies: [Thief], loot: true),
                                            SpawnDraft(count_from: 5, count_to: 5, enemies: [MercenaryCommander]),
                                        ],
                                    ),
                                ],
                            ),
                        ],
                    ),
                ],
            )
        "#;
        let file = MissionFile::from_ron_str(source, "inline").unwrap();
        assert_eq!(file.missions.len(), 1);

        let mission = file.missions[0].resolve(&EnemyCatalog::standard()).unwrap();
        assert_eq!(mission.level(), Level::Level3);
        assert_eq!(mission.damage_resisted(), &[] as &[Damage]);
        assert!(mission.pockets()[0].groups()[0].enemies()[0].loot());
    }

    #[test]
    fn test_mission_file_written_ron_parses_back() {
        let file = MissionFile {
            missions: vec![create_test_draft()],
        };
        let text = file.to_ron_string().unwrap();
        assert_eq!(MissionFile::from_ron_str(&text, "written").unwrap(), file);
    }
}
