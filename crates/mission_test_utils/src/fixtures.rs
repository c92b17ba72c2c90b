//! Test fixtures and helpers.
//!
//! Small rosters and mission drafts for consistent testing.

use std::sync::Arc;

use mission_core::prelude::*;

/// Create a shared enemy record.
#[must_use]
pub fn enemy(ship_type: ShipType, name: &str, bounty: u64) -> Arc<Enemy> {
    Arc::new(Enemy::new(ship_type, name, bounty))
}

/// Roster with just the Pithi frigates and one battlecruiser.
///
/// # Panics
///
/// Panics if the fixture data contains duplicates.
#[must_use]
pub fn pithi_roster() -> EnemyCatalog {
    EnemyCatalog::from_entries([
        entry(EnemyId::PithiInvader, ShipType::Frigate, "Pithi Invader", 4_875),
        entry(EnemyId::PithiWrecker, ShipType::Frigate, "Pithi Wrecker", 7_875),
        entry(EnemyId::PithiPlunderer, ShipType::Frigate, "Pithi Plunderer", 7_500),
        entry(EnemyId::PithatisAssaulter, ShipType::Battlecruiser, "Pithatis Assaulter", 138_750),
    ])
    .expect("fixture roster has unique ids")
}

/// Create a roster entry.
#[must_use]
pub fn entry(id: EnemyId, ship_type: ShipType, name: &str, bounty: u64) -> EnemyEntry {
    EnemyEntry {
        id,
        ship_type,
        display_name: name.to_string(),
        bounty,
    }
}

/// Single-pocket mission resolvable against [`pithi_roster`].
#[must_use]
pub fn pithi_mission(name: &str, level: Level) -> MissionDraft {
    MissionDraft::new(name, level, MissionType::Security)
        .set_blitz_note("Kill the battlecruiser")
        .set_damage_dealt(&[Damage::Kinetic, Damage::Thermal])
        .set_damage_resisted(&[Damage::Kinetic, Damage::Thermal])
        .set_pockets(vec![PocketDraft::new(
            "Pocket 1",
            "No aggro on warp in",
            vec![
                GroupDraft::new(
                    "Group 1",
                    "30-40km",
                    vec![SpawnDraft::new(4, 5, &[EnemyId::PithiInvader, EnemyId::PithiWrecker])
                        .set_ewar(Ewar::TargetJamming)
                        .set_trigger()],
                ),
                GroupDraft::new(
                    "Group 2",
                    "70km",
                    vec![SpawnDraft::new(1, 1, &[EnemyId::PithatisAssaulter]).set_loot()],
                ),
            ],
        )])
}

/// RON text of a mission file holding one [`pithi_mission`].
///
/// # Panics
///
/// Panics if the draft cannot be serialized.
#[must_use]
pub fn pithi_mission_ron(name: &str) -> String {
    MissionFile {
        missions: vec![pithi_mission(name, Level::Level2)],
    }
    .to_ron_string()
    .expect("fixture mission serializes")
}
