//! Tests against the built-in roster and missions.
//!
//! Verifies the derivations end to end on real content, and that the
//! catalog is rebuilt identically every time.

use mission_core::prelude::*;
use mission_test_utils::determinism::verify_determinism;
use mission_test_utils::fixtures::{pithi_mission, pithi_mission_ron, pithi_roster};

fn standard() -> MissionCatalog {
    MissionCatalog::standard(&EnemyCatalog::standard()).expect("standard catalog builds")
}

// ==========================================================================
// Construction
// ==========================================================================

#[test]
fn test_standard_roster_size() {
    assert_eq!(EnemyCatalog::standard().len(), 57);
}

#[test]
fn test_standard_catalog_resolves_every_spawn() {
    let catalog = standard();
    for mission in &catalog {
        for spawn in mission.spawns() {
            assert!(!spawn.enemies().is_empty(), "{}", mission.key());
            assert!(spawn.count_from() <= spawn.count_to(), "{}", mission.key());
        }
    }
}

#[test]
fn test_standard_keys_unique_and_indexed() {
    let catalog = standard();
    for mission in &catalog {
        let found = catalog.get(mission.key()).expect("mission indexed by key");
        assert_eq!(found.name(), mission.name());
    }
}

#[test]
fn test_construction_is_deterministic() {
    verify_determinism(3, standard).assert_deterministic();
    verify_determinism(3, || EnemyCatalog::standard().entries()).assert_deterministic();
}

#[test]
fn test_independent_builds_are_equal() {
    assert_eq!(standard(), standard());
}

#[test]
fn test_catalog_shared_across_threads() {
    let catalog = std::sync::Arc::new(standard());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || catalog.iter().map(Mission::spawn_count).sum::<usize>())
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
}

// ==========================================================================
// Derived mission fields
// ==========================================================================

#[test]
fn test_unauthorized_military_presence_key() {
    let catalog = standard();
    let mission = catalog
        .get("UNAUTHORIZED_MILITARY_PRESENCE_GURISTAS_PIRATES")
        .expect("mission present");
    assert_eq!(mission.name(), "Unauthorized Military Presence (Guristas Pirates)");
}

#[test]
fn test_retribution_links() {
    let catalog = standard();
    let mission = catalog.get("RETRIBUTION_GURISTAS_PIRATES").unwrap();
    assert!(mission
        .eve_uni_link()
        .ends_with("Retribution_(Guristas_Pirates)_(Level_3)"));
    assert_eq!(
        mission.eve_survival_link(),
        "https://eve-survival.org/wikka.php?wakka=Retribution3gu"
    );
}

#[test]
fn test_link_quirks_preserved() {
    let catalog = standard();

    let cut_throat = catalog.get("CUT-THROAT_COMPETITION").unwrap();
    assert_eq!(
        cut_throat.eve_survival_link(),
        "https://eve-survival.org/wikka.php?wakka=CutThroatCompetition3"
    );

    let break_will = catalog.get("BREAK_THEIR_WILL_GURISTA_PIRATES").unwrap();
    assert_eq!(
        break_will.eve_survival_link(),
        "https://eve-survival.org/wikka.php?wakka=BreakTheirWill(GuristaPirates)3"
    );
    assert_eq!(
        break_will.eve_uni_link(),
        "https://wiki.eveuniversity.org/Break_Their_Will_(Gurista_Pirates)_(Level_3)"
    );
}

#[test]
fn test_mad_scientist_damage_profile() {
    let catalog = standard();
    let mission = catalog.get("NEW_FRONTIERS_-_MAD_SCIENTIST").unwrap();
    assert_eq!(
        mission.damage_dealt(),
        &[Damage::Explosion, Damage::Kinetic, Damage::Thermal]
    );
    assert_eq!(mission.damage_resisted(), &[Damage::Em, Damage::Thermal]);
}

// ==========================================================================
// Spawn derivations on real content
// ==========================================================================

#[test]
fn test_retribution_group_four() {
    let catalog = standard();
    let mission = catalog.get("RETRIBUTION_GURISTAS_PIRATES").unwrap();
    let group = &mission.pockets()[0].groups()[3];
    assert_eq!(group.name(), "Group 4");

    let guristas = &group.enemies()[0];
    assert_eq!(guristas.display_names(), "Guristas Kyoukan / Webifier");
    assert_eq!(guristas.display_bounty(), "30.000 / 25.000");
    assert_eq!(guristas.display_count(), "3");
    assert_eq!(guristas.ewar(), Some(Ewar::TargetJamming));
    assert_eq!(guristas.wd(), Some(WarpDisruption::WarpDisrupt));
    assert_eq!(guristas.primary_ship_type(), ShipType::Frigate);

    let enforcer = &group.enemies()[1];
    assert_eq!(enforcer.display_names(), "Pithatis Enforcer");
    assert_eq!(enforcer.display_bounty(), "135.000");
    assert_eq!(enforcer.primary_ship_type(), ShipType::Battlecruiser);
}

#[test]
fn test_smuggler_interception_ranges_and_flags() {
    let catalog = standard();
    let mission = catalog.get("SMUGGLER_INTERCEPTION_GURISTAS_PIRATES").unwrap();
    assert_eq!(mission.pockets().len(), 3);
    assert!(mission.pockets()[0].groups().is_empty());

    let range_spawn = &mission.pockets()[1].groups()[1].enemies()[0];
    assert_eq!(range_spawn.display_count(), "5 - 6");
    assert_eq!(
        range_spawn.display_names(),
        "Pithi Plunderer / Infiltrator / Invader"
    );

    let transport = &mission.pockets()[2].groups()[0].enemies()[0];
    assert!(transport.loot());
    assert_eq!(transport.display_bounty(), "0");
    assert_eq!(transport.primary_ship_type(), ShipType::Industrial);
}

#[test]
fn test_break_their_will_mixed_factions() {
    let catalog = standard();
    let mission = catalog.get("BREAK_THEIR_WILL_GURISTA_PIRATES").unwrap();
    let mercenaries = &mission.pockets()[0].groups()[1].enemies()[1];
    assert_eq!(
        mercenaries.display_names(),
        "Mercenary Commander / Lieutenant / Corporal"
    );
    assert_eq!(mercenaries.display_bounty(), "85.000 / 90.000 / 110.000");

    let tower = &mission.pockets()[0].groups()[0].enemies()[2];
    assert_eq!(tower.ewar(), Some(Ewar::Web));
    assert_eq!(tower.primary_ship_type(), ShipType::Sentry);
}

#[test]
fn test_validate_reports_known_authoring_slips() {
    let warnings = standard().validate();
    assert!(warnings
        .iter()
        .any(|w| w.contains("CUT-THROAT_COMPETITION") && w.contains("repeats group name 'Wave 3'")));
    assert!(warnings
        .iter()
        .any(|w| w.contains("STOP_THE_THIEF_GURISTAS_PIRATES") && w.contains("'Thief' with unknown bounty")));
}

// ==========================================================================
// Injected rosters and file loading
// ==========================================================================

#[test]
fn test_standard_missions_need_full_roster() {
    let err = MissionCatalog::standard(&pithi_roster()).unwrap_err();
    assert!(matches!(err.root_cause(), CatalogError::UnknownEnemy(_)));
}

#[test]
fn test_independent_rosters_do_not_interfere() {
    let mut cheap = pithi_roster();
    cheap.replace(
        EnemyId::PithatisAssaulter,
        Enemy::new(ShipType::Battlecruiser, "Pithatis Assaulter", 1),
    );
    let rich = pithi_roster();

    let draft = pithi_mission("Pithi Sweep", Level::Level2);
    let cheap_mission = draft.resolve(&cheap).unwrap();
    let rich_mission = draft.resolve(&rich).unwrap();

    assert_eq!(cheap_mission.pockets()[0].groups()[1].enemies()[0].display_bounty(), "1");
    assert_eq!(rich_mission.pockets()[0].groups()[1].enemies()[0].display_bounty(), "138.750");
}

#[test]
fn test_ron_mission_file_merges_into_standard() {
    let roster = EnemyCatalog::standard();
    let extra = MissionCatalog::from_ron_str(&roster, &pithi_mission_ron("Pithi Sweep"), "fixture").unwrap();
    let merged = standard().merge(extra).unwrap();

    assert_eq!(merged.len(), 10);
    let sweep = merged.get("PITHI_SWEEP").unwrap();
    assert_eq!(sweep.level(), Level::Level2);
    assert_eq!(sweep.ship_count_range(), (5, 6));
    assert_eq!(sweep.pockets()[0].groups()[0].enemies()[0].display_names(), "Pithi Invader / Wrecker");
}

#[test]
fn test_standard_drafts_survive_ron() {
    let file = MissionFile {
        missions: mission_core::data::missions::standard_missions(),
    };
    let text = file.to_ron_string().unwrap();
    let roster = EnemyCatalog::standard();
    assert_eq!(MissionCatalog::from_ron_str(&roster, &text, "export").unwrap(), standard());
}
