//! Property-based testing strategies.

use mission_core::prelude::*;
use proptest::prelude::*;

/// Any mission level.
pub fn arb_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

/// Any hull class.
pub fn arb_ship_type() -> impl Strategy<Value = ShipType> {
    prop::sample::select(ShipType::ALL.to_vec())
}

/// A `(from, to)` pair with `from <= to`.
pub fn arb_count_range() -> impl Strategy<Value = (u32, u32)> {
    (0_u32..20, 0_u32..5).prop_map(|(from, extra)| (from, from + extra))
}

/// A bounty, zero included.
pub fn arb_bounty() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0_u64), 1_u64..10_000_000]
}

/// A two-word enemy name such as "Pithi Invader".
pub fn arb_enemy_name() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,8}", "[A-Z][a-z]{2,10}").prop_map(|(faction, hull)| format!("{faction} {hull}"))
}

/// Names sharing one faction word, e.g. ["Gistum Breaker", "Gistum Crusher"].
pub fn arb_same_faction_names() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        "[A-Z][a-z]{2,8}",
        prop::collection::vec("[A-Z][a-z]{2,10}", 1..5),
    )
        .prop_map(|(faction, hulls)| {
            let names = hulls.iter().map(|hull| format!("{faction} {hull}")).collect();
            (faction, names)
        })
}

/// A mission name made of words, optional hyphen and faction suffix.
pub fn arb_mission_name() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[A-Z][a-z]{1,9}", 1..5),
        any::<bool>(),
        prop::option::of(prop::sample::select(vec![
            "(Guristas Pirates)",
            "(Gurista Pirates)",
            "(Angel Cartel)",
        ])),
    )
        .prop_map(|(words, hyphenate, faction)| {
            let mut name = if hyphenate && words.len() > 1 {
                format!("{}-{}", words[0], words[1..].join(" "))
            } else {
                words.join(" ")
            };
            if let Some(faction) = faction {
                name.push(' ');
                name.push_str(faction);
            }
            name
        })
}
