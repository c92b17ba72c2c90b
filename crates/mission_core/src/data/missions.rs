//! Standard mission definitions.

use crate::draft::{GroupDraft as G, MissionDraft, PocketDraft as P, SpawnDraft as S};
use crate::enemy::EnemyId as E;
use crate::enemy::{Ewar, WarpDisruption};
use crate::mission::Damage::{Em, Explosion, Kinetic, Thermal};
use crate::mission::{Level, MissionType};

const JAM: Ewar = Ewar::TargetJamming;

/// Every built-in mission, in display order.
#[must_use]
pub fn standard_missions() -> Vec<MissionDraft> {
    vec![
        unauthorized_military_presence(),
        seek_and_destroy(),
        stop_the_thief(),
        retribution(),
        smuggler_interception(),
        break_their_will(),
        cut_throat_competition(),
        new_frontiers_raw_materials(),
        new_frontiers_mad_scientist(),
    ]
}

fn unauthorized_military_presence() -> MissionDraft {
    MissionDraft::new(
        "Unauthorized Military Presence (Guristas Pirates)",
        Level::Level3,
        MissionType::Security,
    )
    .set_blitz_note("Kill Group 3, 3b, 4, loot Transport wreck")
    .set_damage_dealt(&[Kinetic, Thermal])
    .set_damage_resisted(&[Kinetic, Thermal])
    .set_info("The goods are in the Warehouse which is a lootable container")
    .set_pockets(vec![
        P::new(
            "Pocket 1",
            "Will aggro when approaching warpgate",
            vec![G::new(
                "Group 1",
                "20-30km - aggro on approach to gate",
                vec![S::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker]).set_ewar(JAM)],
            )],
        ),
        P::new(
            "Pocket 2",
            "No aggro on warp in",
            vec![
                G::new(
                    "Group 1",
                    "30-40km",
                    vec![
                        S::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker])
                            .set_ewar(JAM)
                            .set_trigger(),
                        S::new(4, 4, &[E::PithumSilencer, E::PithumInferno]),
                    ],
                ),
                G::new(
                    "Group 2",
                    "70-80km",
                    vec![
                        S::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker]).set_ewar(JAM),
                        S::new(1, 1, &[E::PithumSilencer, E::PithumInferno]).set_trigger(),
                    ],
                ),
                G::new(
                    "Group 3",
                    "90km",
                    vec![
                        S::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker])
                            .set_ewar(JAM)
                            .set_trigger(),
                        S::new(1, 1, &[E::GuristasPersonnelTransport]).set_trigger(),
                    ],
                ),
                G::new(
                    "Group 1 Reinforcement",
                    "90km",
                    vec![
                        S::new(1, 1, &[E::PithiPlunderer, E::PithiWrecker]),
                        S::new(1, 1, &[E::PithumInferno]).set_ewar(JAM),
                    ],
                ),
                G::new(
                    "Group 2 Reinforcement",
                    "90km",
                    vec![S::new(3, 3, &[E::PithumInferno]).set_ewar(JAM)],
                ),
                G::new(
                    "Group 3 Reinforcement",
                    "70-80km",
                    vec![S::new(3, 3, &[E::PithumSilencer, E::PithumAscriber])],
                ),
            ],
        ),
    ])
}

fn seek_and_destroy() -> MissionDraft {
    MissionDraft::new("Seek and Destroy (Guristas Pirates)", Level::Level3, MissionType::Security)
        .set_blitz_note("Kill Group 2")
        .set_damage_dealt(&[Kinetic, Thermal])
        .set_damage_resisted(&[Kinetic, Thermal])
        .set_pockets(vec![P::new(
            "Pocket 1",
            "",
            vec![
                G::new(
                    "Group 1",
                    "40-50km - auto-aggro",
                    vec![
                        S::new(4, 4, &[E::PithiWrecker, E::PithiPlunderer]),
                        S::new(2, 2, &[E::PithumMortifier, E::PithumInferno]),
                    ],
                ),
                G::new(
                    "Group 2",
                    "100-110km",
                    vec![
                        S::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker]),
                        S::new(1, 1, &[E::PithatisAssaulter]),
                    ],
                ),
            ],
        )])
}

fn stop_the_thief() -> MissionDraft {
    MissionDraft::new("Stop the Thief (Guristas Pirates)", Level::Level3, MissionType::Security)
        .set_damage_dealt(&[Kinetic, Thermal])
        .set_damage_resisted(&[Kinetic, Thermal])
        .set_blitz_note("Kill the Thief, report shows up in cargo")
        .set_pockets(vec![P::new(
            "Pocket 1",
            "",
            vec![G::new(
                "Group 1",
                "20-30km - auto aggro",
                vec![
                    S::new(1, 1, &[E::Thief]),
                    S::new(5, 5, &[E::MercenaryCommander]),
                ],
            )],
        )])
}

fn retribution() -> MissionDraft {
    MissionDraft::new("Retribution (Guristas Pirates)", Level::Level3, MissionType::Security)
        .set_blitz_note("Destroy outpost")
        .set_damage_dealt(&[Kinetic, Thermal])
        .set_damage_resisted(&[Kinetic, Thermal])
        .set_info("The small armory drops ammo")
        .set_pockets(vec![P::new(
            "Pocket 1",
            "No aggro on warp in",
            vec![
                G::new(
                    "Group 1",
                    "25-30km - Closest Rock formation",
                    vec![S::new(4, 4, &[E::PithumAscriber, E::PithumSilencer]).set_ewar(JAM)],
                ),
                G::new(
                    "Group 2",
                    "30-40km - Slave Worker Facility",
                    vec![S::new(5, 5, &[E::PithumAscriber, E::PithumSilencer])],
                ),
                G::new(
                    "Group 3",
                    "35-40km - Spaceshuttle Wreck",
                    vec![S::new(3, 3, &[E::PithumInferno, E::PithumMortifier])],
                ),
                G::new(
                    "Group 4",
                    "65-75km - Furthest Rocket Formation",
                    vec![
                        S::new(3, 3, &[E::GuristasKyoukan, E::GuristasWebifier])
                            .set_ewar(JAM)
                            .set_wd(WarpDisruption::WarpDisrupt),
                        S::new(1, 1, &[E::PithatisEnforcer]),
                    ],
                ),
            ],
        )])
}

fn smuggler_interception() -> MissionDraft {
    MissionDraft::new(
        "Smuggler Interception (Guristas Pirates)",
        Level::Level3,
        MissionType::Security,
    )
    .set_damage_dealt(&[Kinetic])
    .set_damage_resisted(&[Kinetic, Thermal])
    .set_pockets(vec![
        P::new("Pocket 1", "No NPC, warp gate only", vec![]),
        P::new(
            "Pocket 2",
            "",
            vec![
                G::new(
                    "Group 1",
                    "40-45km - no-auto-aggro",
                    vec![S::new(4, 4, &[E::PithiWrecker, E::PithiPlunderer])],
                ),
                G::new(
                    "Group 2",
                    "30-35km - no-auto-aggro",
                    vec![
                        S::new(5, 6, &[E::PithiPlunderer, E::PithiInfiltrator, E::PithiInvader]),
                        S::new(1, 1, &[E::PithumMortifier, E::PithumInferno]).set_trigger(),
                    ],
                ),
                G::new(
                    "Reinforcement 1",
                    "40-45km - no-auto-aggro",
                    vec![S::new(3, 3, &[E::PithumSilencer, E::PithumAscriber]).set_trigger()],
                ),
                G::new(
                    "Reinforcement 2",
                    "37-55km - auto-aggro",
                    vec![
                        S::new(
                            4,
                            4,
                            &[
                                E::PithiInfiltrator,
                                E::PithiInvader,
                                E::PithiWrecker,
                                E::PithiPlunderer,
                            ],
                        ),
                        S::new(2, 2, &[E::PithumSilencer, E::PithumAscriber]).set_trigger(),
                    ],
                ),
                G::new(
                    "Reinforcement 3",
                    "Does not always spawn",
                    vec![S::new(2, 2, &[E::PithumMortifier, E::PithumInferno])],
                ),
            ],
        ),
        P::new(
            "Pocket 3",
            "",
            vec![
                G::new(
                    "Group 1",
                    "15km - auto-aggro",
                    vec![
                        S::new(2, 2, &[E::PersonnelTransport]).set_loot(),
                        S::new(
                            1,
                            1,
                            &[E::PithatisEnforcer, E::PithatisExecutor, E::PithatisAssaulter],
                        )
                        .set_trigger(),
                    ],
                ),
                G::new(
                    "Reinforcement 1",
                    "20-25km - auto-aggro",
                    vec![S::new(5, 5, &[E::PithiInfiltrator, E::PithiInvader])],
                ),
                G::new(
                    "Reinforcement 2",
                    "15-20km - auto-aggro",
                    vec![S::new(5, 5, &[E::PithumAscriber, E::PithumSilencer]).set_trigger()],
                ),
                G::new(
                    "Reinforcement 3",
                    "30km - auto-aggro",
                    vec![S::new(2, 2, &[E::PithumMortifier, E::PithumInferno]).set_trigger()],
                ),
                G::new(
                    "Reinforcement 4",
                    "30km - auto-aggro",
                    vec![S::new(4, 4, &[E::PithiPlunderer, E::PithiWrecker]).set_trigger()],
                ),
                G::new(
                    "Reinforcement 5",
                    "Does not always spawn",
                    vec![S::new(3, 5, &[E::PithumMortifier, E::PithumInferno])],
                ),
            ],
        ),
    ])
}

fn break_their_will() -> MissionDraft {
    MissionDraft::new("Break Their Will (Gurista Pirates)", Level::Level3, MissionType::Security)
        .set_blitz_note("Destroy Report Station, warp out")
        .set_damage_dealt(&[Kinetic, Thermal])
        .set_damage_resisted(&[Kinetic, Thermal])
        .set_info(
            "Repair station repairs itself and rats. Destroy the Aux Power Array disables the \
             Repair Station repair function",
        )
        .set_pockets(vec![P::new(
            "Pocket 1",
            "At warp-in there are no rats. Wave 1 spawns when the repait station is hit. Wave 2 \
             is spawned when the Repair station is destroyed. Auto-aggro on waves spawning",
            vec![
                G::new(
                    "Group 1",
                    "On attack on repair station",
                    vec![
                        // Pithior Nihilist not in the roster yet
                        S::new(6, 7, &[E::PithiorTerrorist, E::PithiorRenegade]),
                        S::new(5, 6, &[E::PithumSilencer, E::PithumNullifier]).set_ewar(JAM),
                        S::new(1, 1, &[E::StatisTower]).set_ewar(Ewar::Web),
                        S::new(3, 3, &[E::HeavyMissileBattery]),
                    ],
                ),
                G::new(
                    "Group 2",
                    "On destroy Repair station",
                    vec![
                        S::new(1, 1, &[E::MercenaryFighter]),
                        S::new(
                            4,
                            4,
                            &[
                                E::MercenaryCommander,
                                E::MercenaryLieutenant,
                                E::MercenaryCorporal,
                            ],
                        ),
                    ],
                ),
            ],
        )])
}

fn cut_throat_competition() -> MissionDraft {
    MissionDraft::new("Cut-Throat Competition", Level::Level3, MissionType::Security)
        .set_blitz_note(
            "Destroy ships first wave (Blackbirds only, not the Moa) and destroy repair autpost\n\
             if second wave is triggered continue focus on Blackbirds until mission completes",
        )
        .set_damage_dealt(&[Kinetic, Thermal])
        .set_damage_resisted(&[Kinetic, Thermal])
        .set_info(
            "Use two Sensor Boosters with ECCM scripts to reduce chance of being jamed.\n\
             Kill the Recon Ship (Jammers) before triggering the third wave",
        )
        .set_pockets(vec![
            P::new(
                "Warp in",
                "",
                vec![G::new(
                    "Group 1",
                    "",
                    vec![S::new(5, 5, &[E::Blackbird]).set_ewar(JAM)],
                )],
            ),
            P::new(
                "Pocket 1",
                "Either the Moa or the last ship is trogger for the second wave\n\
                 The Moa has been observed to not spawn\n\
                 When you first warp in. if there is no Moa, the trigger will be one of the two \
                 ships that are a different type from the rest. Usually it is the two that are \
                 the first to aggro.\n\
                 There are at least 3 subsequent waves, but they vary in composition order. \
                 Consider the following as examples of what you might encounter",
                vec![
                    G::new(
                        "Wave 1",
                        "The recon ships jam, a lot. The last Caracal triggers the third wave. \
                         Kill the jamming ships before triggering the third wave",
                        vec![
                            S::new(1, 1, &[E::Blackbird]).set_ewar(JAM),
                            S::new(1, 1, &[E::Moa]),
                        ],
                    ),
                    G::new(
                        "Wave 2",
                        "The last BC or the last ship triggers the next wave",
                        vec![
                            S::new(5, 5, &[E::Caracal]).set_trigger(),
                            S::new(2, 2, &[E::Rook]).set_ewar(JAM),
                        ],
                    ),
                    G::new(
                        "Wave 3",
                        "",
                        vec![
                            S::new(2, 2, &[E::Cerberus]),
                            S::new(5, 5, &[E::Ferox]).set_trigger(),
                        ],
                    ),
                    G::new("Wave 3", "", vec![S::new(5, 5, &[E::Ferox])]),
                ],
            ),
        ])
}

fn new_frontiers_raw_materials() -> MissionDraft {
    MissionDraft::new("New Fronties - Raw Materials", Level::Level3, MissionType::Security)
        .set_blitz_note("Mine the Green Arisite while tanking")
        .set_damage_dealt(&[Kinetic, Thermal])
        .set_damage_resisted(&[Kinetic, Thermal])
        .set_pockets(vec![P::new(
            "Warp-in",
            "",
            vec![
                G::new(
                    "Initial Group",
                    "Miners will warp out after some time",
                    vec![
                        S::new(3, 3, &[E::MercenaryMiner]).set_loot(),
                        S::new(3, 3, &[E::MercenaryEliteFighter]).set_trigger(),
                        S::new(2, 2, &[E::MercenaryLieutenant]).set_trigger(),
                    ],
                ),
                G::new(
                    "Wave 1",
                    "On Group 1 Frigate Destruction",
                    vec![S::new(4, 4, &[E::MercenaryCommander]).set_trigger()],
                ),
                G::new(
                    "Wave 2",
                    "On wave 1 destruction",
                    vec![S::new(5, 5, &[E::MercenaryFighter])],
                ),
                G::new(
                    "Wave 3",
                    "On Group 1 Cruiser destruction",
                    vec![
                        S::new(3, 3, &[E::MercenaryEliteFighter]).set_trigger(),
                        S::new(2, 2, &[E::MercenaryLieutenant]).set_trigger(),
                    ],
                ),
                G::new(
                    "Wave 4",
                    "On wave 3 Frigate destruction",
                    vec![S::new(4, 4, &[E::MercenaryCommander])],
                ),
                G::new(
                    "Wave 5",
                    "On wave 3 cruiser destruction",
                    vec![
                        S::new(4, 4, &[E::MercenaryFighter]),
                        S::new(2, 2, &[E::MercenaryCommander]),
                    ],
                ),
            ],
        )])
}

fn new_frontiers_mad_scientist() -> MissionDraft {
    MissionDraft::new("New Frontiers - Mad Scientist", Level::Level3, MissionType::Security)
        .set_blitz_note(
            "Go straight through the gate, blow up Professor Delainens Lab and loot the cargo \
             container spawned\nDestroy Statis/Energy Neutralizer as needed",
        )
        .set_damage_dealt(&[Explosion, Kinetic, Thermal])
        .set_damage_resisted(&[Em, Thermal])
        .set_pockets(vec![P::new(
            "Warp-In",
            "All enemies will aggro immediately",
            vec![G::new(
                "Initial Group",
                "",
                vec![S::new(11, 12, &[E::Raider, E::Sunder])],
            )],
        )])
}
