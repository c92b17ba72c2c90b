//! # Mission Core
//!
//! Mission encounter catalog for level 1-5 agent missions.
//!
//! This crate contains **only** catalog data and pure derivations:
//! - No rendering
//! - No network access
//! - No global state (rosters are passed explicitly)
//!
//! Built catalogs are immutable, deterministic and `Send + Sync`.
//!
//! ## Crate Structure
//!
//! - [`enemy`] - Enemy records, hull classes and spawn tags
//! - [`roster`] - [`EnemyCatalog`](roster::EnemyCatalog), the enemy registry
//! - [`spawn`] - [`PocketEnemy`](spawn::PocketEnemy) and its display derivations
//! - [`mission`] - Frozen Mission → Pocket → Group trees
//! - [`draft`] - Construction-only definitions, also the RON file format
//! - [`catalog`] - [`MissionCatalog`](catalog::MissionCatalog)
//! - [`links`] - Mission keys and wiki links
//! - [`format`] - Bounty number formatting
//! - [`data`] - Built-in roster and missions
//!
//! ## Example
//!
//! ```
//! use mission_core::prelude::*;
//!
//! let roster = EnemyCatalog::standard();
//! let catalog = MissionCatalog::standard(&roster).unwrap();
//! let mission = catalog.get("SEEK_AND_DESTROY_GURISTAS_PIRATES").unwrap();
//! let spawn = &mission.pockets()[0].groups()[0].enemies()[0];
//! assert_eq!(spawn.display_names(), "Pithi Wrecker / Plunderer");
//! assert_eq!(spawn.display_count(), "4");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod data;
pub mod draft;
pub mod enemy;
pub mod error;
pub mod format;
pub mod links;
pub mod mission;
pub mod roster;
pub mod spawn;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::MissionCatalog;
    pub use crate::draft::{GroupDraft, MissionDraft, MissionFile, PocketDraft, SpawnDraft};
    pub use crate::enemy::{Enemy, EnemyId, Ewar, ShipType, WarpDisruption};
    pub use crate::error::{CatalogError, Result};
    pub use crate::mission::{Damage, Group, Level, Mission, MissionBriefing, MissionType, Pocket};
    pub use crate::roster::{EnemyCatalog, EnemyEntry, RosterFile};
    pub use crate::spawn::PocketEnemy;
}
