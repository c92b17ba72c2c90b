//! Standard enemy roster, grouped by hull class.

use crate::enemy::EnemyId as E;
use crate::enemy::ShipType;

const SF: ShipType = ShipType::Frigate;
const SC: ShipType = ShipType::Cruiser;
const SEC: ShipType = ShipType::EliteCruiser;
const SBC: ShipType = ShipType::Battlecruiser;
const SD: ShipType = ShipType::Destroyer;
const SI: ShipType = ShipType::Industrial;
const SS: ShipType = ShipType::Sentry;
const S: ShipType = ShipType::Structure;

/// `(id, hull, display name, bounty)` for every standard enemy.
///
/// A bounty of `0` marks a bounty nobody has recorded yet.
///
/// Two display names are corrected from the source data, which spelled them
/// `Gistum Liqzudator` and `Mercenary Lieutnant`. Mission names and notes are
/// kept verbatim because keys and wiki links derive from them.
pub const STANDARD_ROSTER: &[(E, ShipType, &str, u64)] = &[
    // ====================================================
    // Frigate
    // ====================================================
    (E::AngelViper, SF, "Angel Viper", 30_000),
    (E::AngelWebifier, SF, "Angel Webifier", 25_000),
    (E::GistiiImpaler, SF, "Gistii Impaler", 9_000),
    (E::GuristasKyoukan, SF, "Guristas Kyoukan", 30_000),
    (E::GuristasWebifier, SF, "Guristas Webifier", 25_000),
    (E::MercenaryFighter, SF, "Mercenary Fighter", 5_000),
    (E::PithiInfiltrator, SF, "Pithi Infiltrator", 4_500),
    (E::PithiInvader, SF, "Pithi Invader", 4_875),
    (E::PithiPlunderer, SF, "Pithi Plunderer", 7_500),
    (E::PithiWrecker, SF, "Pithi Wrecker", 7_875),
    // ====================================================
    // Cruiser
    // ====================================================
    (E::GistumBreaker, SC, "Gistum Breaker", 57_188),
    (E::GistumCenturion, SC, "Gistum Centurion", 79_688),
    (E::GistumCrusher, SC, "Gistum Crusher", 51_563),
    (E::GistumDefeater, SC, "Gistum Defeater", 62_813),
    // Source data: "Gistum Liqzudator"
    (E::GistumLiquidator, SC, "Gistum Liquidator", 74_063),
    (E::GistumMarauder, SC, "Gistum Marauder", 68_438),
    (E::GistumPhalanx, SC, "Gistum Phalanx", 76_875),
    (E::GistumPredator, SC, "Gistum Predator", 43_125),
    (E::MercenaryCorporal, SC, "Mercenary Corporal", 110_000),
    // Source data: "Mercenary Lieutnant"
    (E::MercenaryLieutenant, SC, "Mercenary Lieutenant", 90_000),
    (E::PithumAscriber, SC, "Pithum Ascriber", 43_125),
    (E::PithumInferno, SC, "Pithum Inferno", 74_063),
    (E::PithumMortifier, SC, "Pithum Mortifier", 68_438),
    (E::PithumNullifier, SC, "Pithum Nullifier", 62_813),
    (E::PithumSilencer, SC, "Pithum Silencer", 37_500),
    // ====================================================
    // Battlecruiser
    // ====================================================
    (E::GistatisLegionnaire, SBC, "Gistatis Legionnaire", 131_250),
    (E::GistatisPrimus, SBC, "Gistatis Primus", 135_000),
    (E::GistatisTribuni, SBC, "Gistatis Tribuni", 138_750),
    (E::PithatisAssaulter, SBC, "Pithatis Assaulter", 138_750),
    (E::PithatisEnforcer, SBC, "Pithatis Enforcer", 135_000),
    (E::PithatisExecutor, SBC, "Pithatis Executor", 131_250),
    // ====================================================
    // Destroyer
    // ====================================================
    (E::GistiorDefiler, SD, "Gistior Defiler", 13_500),
    (E::GistiorHaunter, SD, "Gistior Haunter", 12_375),
    (E::GistiorSeizer, SD, "Gistior Seizer", 14_625),
    (E::PithiorRenegade, SD, "Pithior Renegade", 12_375),
    (E::PithiorTerrorist, SD, "Pithior Terrorist", 14_625),
    // ====================================================
    // Industrial
    // ====================================================
    (E::GuristasPersonnelTransport, SI, "Guristas Personnel Transport", 25_000),
    // ====================================================
    // Sentry
    // ====================================================
    (E::AngelLightMissileBattery, SS, "Angel Light Missile Battery", 25_000),
    (E::HeavyMissileBattery, SS, "Heavy Missile Battery", 40_000),
    (E::StatisTower, SS, "Statis Tower", 35_000),
    (E::TowerSentryAngelII, SS, "Tower Sentry Angel II", 50_000),
    // ====================================================
    // Structure
    // ====================================================
    (E::AuxPowerArray, S, "Aux Power Array", 0),
    (E::RepairStation, S, "Repair Station", 0),
    // ====================================================
    // Bounty missing
    // ====================================================
    (E::MercenaryCommander, SC, "Mercenary Commander", 85_000),
    (E::PersonnelTransport, SI, "Personnel Transport", 0),
    (E::MercenaryMiner, SI, "Mercenary Miner", 25_000),
    (E::MercenaryEliteFighter, SI, "Mercenary Elite Fighter", 90_000),
    (E::Thief, SF, "Thief", 0),
    (E::Blackbird, SC, "Blackbird", 0),
    (E::Moa, SC, "Moa", 0),
    (E::Caracal, SC, "Caracal", 0),
    (E::Rook, SEC, "Rook", 0),
    (E::Cerberus, SEC, "Cerberus", 0),
    (E::Ferox, SBC, "Ferox", 0),
    (E::Raider, SF, "Raider", 0),
    (E::Sunder, SF, "Sunder", 0),
    (E::Bomber, SC, "Bomber", 0),
];
