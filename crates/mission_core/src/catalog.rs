//! The mission catalog: every resolved mission, indexed by key.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::data::missions::standard_missions;
use crate::draft::{MissionDraft, MissionFile};
use crate::error::{CatalogError, Result};
use crate::mission::{Level, Mission, MissionType};
use crate::roster::EnemyCatalog;

/// Read-only collection of resolved missions.
///
/// Missions keep the order they were added in; keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionCatalog {
    missions: Vec<Mission>,
    by_key: BTreeMap<String, usize>,
}

impl Serialize for MissionCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.missions.serialize(serializer)
    }
}

impl MissionCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missions: Vec::new(),
            by_key: BTreeMap::new(),
        }
    }

    /// Build the built-in missions against `roster`.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in spawn references an enemy `roster`
    /// lacks.
    pub fn standard(roster: &EnemyCatalog) -> Result<Self> {
        Self::from_drafts(roster, standard_missions())
    }

    /// Resolve drafts against `roster`.
    ///
    /// # Errors
    ///
    /// Returns an error if any draft fails to resolve or two drafts share a
    /// key.
    pub fn from_drafts(
        roster: &EnemyCatalog,
        drafts: impl IntoIterator<Item = MissionDraft>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for draft in drafts {
            catalog.push(draft.resolve(roster)?)?;
        }
        tracing::debug!("Built mission catalog with {} missions", catalog.len());
        Ok(catalog)
    }

    /// Parse a RON mission file and resolve it against `roster`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or resolved.
    pub fn from_ron_str(roster: &EnemyCatalog, source: &str, origin: &str) -> Result<Self> {
        let file = MissionFile::from_ron_str(source, origin)?;
        let catalog = Self::from_drafts(roster, file.missions)?;
        tracing::info!("Loaded {} missions from {}", catalog.len(), origin);
        Ok(catalog)
    }

    /// Load a RON mission file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or resolved.
    pub fn load_ron_file(roster: &EnemyCatalog, path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        Self::from_ron_str(roster, &contents, &path_str)
    }

    /// Append every mission of `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if a key of `other` is already present.
    pub fn merge(mut self, other: MissionCatalog) -> Result<Self> {
        for mission in other.missions {
            self.push(mission)?;
        }
        Ok(self)
    }

    fn push(&mut self, mission: Mission) -> Result<()> {
        if self.by_key.contains_key(mission.key()) {
            return Err(CatalogError::DuplicateMissionKey(mission.key().to_string()));
        }
        self.by_key.insert(mission.key().to_string(), self.missions.len());
        self.missions.push(mission);
        Ok(())
    }

    /// All missions in insertion order.
    #[must_use]
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Iterate missions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter()
    }

    /// Get a mission by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Mission> {
        self.by_key.get(key).map(|&index| &self.missions[index])
    }

    /// Missions of a given level.
    pub fn by_level(&self, level: Level) -> impl Iterator<Item = &Mission> {
        self.missions.iter().filter(move |m| m.level() == level)
    }

    /// Missions of a given category.
    pub fn by_type(&self, mission_type: MissionType) -> impl Iterator<Item = &Mission> {
        self.missions
            .iter()
            .filter(move |m| m.mission_type() == mission_type)
    }

    /// Get the number of missions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Check the content for authoring slips that do not block loading.
    ///
    /// Reports:
    /// - Missions without pockets
    /// - Groups without spawns
    /// - Group names repeated inside one pocket
    /// - Spawns whose bounty is unknown (once per enemy per mission)
    ///
    /// Returns a list of warnings.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for mission in &self.missions {
            if mission.pockets().is_empty() {
                warnings.push(format!("Mission '{}' has no pockets", mission.key()));
            }

            let mut unknown_bounties = HashSet::new();
            for pocket in mission.pockets() {
                let mut group_names = HashSet::new();
                for group in pocket.groups() {
                    if !group_names.insert(group.name()) {
                        warnings.push(format!(
                            "Mission '{}' pocket '{}' repeats group name '{}'",
                            mission.key(),
                            pocket.name(),
                            group.name()
                        ));
                    }
                    if group.enemies().is_empty() {
                        warnings.push(format!(
                            "Mission '{}' pocket '{}' group '{}' has no spawns",
                            mission.key(),
                            pocket.name(),
                            group.name()
                        ));
                    }
                    for spawn in group.enemies() {
                        for enemy in spawn.enemies() {
                            if enemy.has_unknown_bounty()
                                && unknown_bounties.insert(enemy.display_name.as_str())
                            {
                                warnings.push(format!(
                                    "Mission '{}' uses '{}' with unknown bounty",
                                    mission.key(),
                                    enemy.name_or_unknown()
                                ));
                            }
                        }
                    }
                }
            }
        }

        for warning in &warnings {
            tracing::debug!("{warning}");
        }
        warnings
    }

    /// Serialize the resolved catalog as pretty RON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SerializeError`] if serialization fails.
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| CatalogError::SerializeError(e.to_string()))
    }

    /// Serialize the resolved catalog as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SerializeError`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::SerializeError(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a MissionCatalog {
    type Item = &'a Mission;
    type IntoIter = std::slice::Iter<'a, Mission>;

    fn into_iter(self) -> Self::IntoIter {
        self.missions.iter()
    }
}
