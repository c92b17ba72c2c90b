//! Enemy roster: the symbolic name → [`Enemy`] registry missions resolve against.
//!
//! A roster is an explicit value passed to whatever builds missions. There is
//! no global registry, so tests can build independent rosters side by side.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::enemies::STANDARD_ROSTER;
use crate::enemy::{Enemy, EnemyId, ShipType};
use crate::error::{CatalogError, Result};

/// One roster entry in serialized form.
///
/// # Example RON
///
/// ```ron
/// EnemyEntry(
///     id: PithiInvader,
///     ship_type: Frigate,
///     display_name: "Pithi Invader",
///     bounty: 4875,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyEntry {
    /// Symbolic name.
    pub id: EnemyId,
    /// Hull class.
    pub ship_type: ShipType,
    /// In-game name.
    pub display_name: String,
    /// Bounty in ISK, zero when unknown.
    #[serde(default)]
    pub bounty: u64,
}

impl EnemyEntry {
    fn into_enemy(self) -> (EnemyId, Enemy) {
        (
            self.id,
            Enemy::new(self.ship_type, self.display_name, self.bounty),
        )
    }
}

/// Top-level layout of a roster RON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    /// Entries in file order.
    pub enemies: Vec<EnemyEntry>,
}

/// Registry of enemies keyed by [`EnemyId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnemyCatalog {
    enemies: BTreeMap<EnemyId, Arc<Enemy>>,
}

impl EnemyCatalog {
    /// Create a new empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enemies: BTreeMap::new(),
        }
    }

    /// Build the standard roster shipped with the crate.
    #[must_use]
    pub fn standard() -> Self {
        let enemies: BTreeMap<_, _> = STANDARD_ROSTER
            .iter()
            .map(|&(id, ship_type, name, bounty)| (id, Arc::new(Enemy::new(ship_type, name, bounty))))
            .collect();
        tracing::debug!("Built standard enemy roster with {} entries", enemies.len());
        Self { enemies }
    }

    /// Build a roster from serialized entries.
    ///
    /// # Errors
    ///
    /// Returns an error if an id appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = EnemyEntry>) -> Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            let (id, enemy) = entry.into_enemy();
            catalog.insert(id, enemy)?;
        }
        Ok(catalog)
    }

    /// Parse a roster from RON text.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or an id appears twice.
    pub fn from_ron_str(source: &str, origin: &str) -> Result<Self> {
        let file: RosterFile = ron::from_str(source).map_err(|e| CatalogError::DataParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_entries(file.enemies)?;
        tracing::info!("Loaded {} enemies from {}", catalog.len(), origin);
        Ok(catalog)
    }

    /// Load a roster RON file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_ron_file(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        Self::from_ron_str(&contents, &path_str)
    }

    /// Register an enemy.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already registered.
    pub fn insert(&mut self, id: EnemyId, enemy: Enemy) -> Result<()> {
        if self.enemies.contains_key(&id) {
            return Err(CatalogError::DuplicateEnemy(id));
        }
        self.enemies.insert(id, Arc::new(enemy));
        Ok(())
    }

    /// Replace (or add) an entry, returning the previous record.
    pub fn replace(&mut self, id: EnemyId, enemy: Enemy) -> Option<Arc<Enemy>> {
        self.enemies.insert(id, Arc::new(enemy))
    }

    /// Apply every entry of `overrides` on top of this roster.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &EnemyCatalog) -> Self {
        for (id, enemy) in &overrides.enemies {
            if let Some(previous) = self.enemies.insert(*id, Arc::clone(enemy)) {
                tracing::debug!(
                    "Roster override {:?}: '{}' ({}) -> '{}' ({})",
                    id,
                    previous.display_name,
                    previous.bounty,
                    enemy.display_name,
                    enemy.bounty
                );
            }
        }
        self
    }

    /// Get an enemy by id.
    #[must_use]
    pub fn get(&self, id: EnemyId) -> Option<&Arc<Enemy>> {
        self.enemies.get(&id)
    }

    /// Get a shared handle to an enemy.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownEnemy`] if the id is not registered.
    pub fn require(&self, id: EnemyId) -> Result<Arc<Enemy>> {
        self.enemies
            .get(&id)
            .cloned()
            .ok_or(CatalogError::UnknownEnemy(id))
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: EnemyId) -> bool {
        self.enemies.contains_key(&id)
    }

    /// Iterate all entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EnemyId, &Arc<Enemy>)> {
        self.enemies.iter().map(|(id, enemy)| (*id, enemy))
    }

    /// Iterate entries of a single hull class.
    pub fn by_ship_type(&self, ship_type: ShipType) -> impl Iterator<Item = (EnemyId, &Arc<Enemy>)> {
        self.iter()
            .filter(move |(_, enemy)| enemy.ship_type == ship_type)
    }

    /// Get the number of registered enemies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Serializable snapshot of the roster in id order.
    #[must_use]
    pub fn entries(&self) -> Vec<EnemyEntry> {
        self.iter()
            .map(|(id, enemy)| EnemyEntry {
                id,
                ship_type: enemy.ship_type,
                display_name: enemy.display_name.clone(),
                bounty: enemy.bounty,
            })
            .collect()
    }
}
