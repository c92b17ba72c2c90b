//! Mission keys and wiki links derived from a mission's name and level.
//!
//! The link builders mirror the URL schemes the two wikis actually use,
//! including their quirks, so they are plain string rewrites rather than
//! general slug functions.

use crate::mission::Level;

/// Base URL of the EVE University wiki.
pub const EVE_UNI_BASE_URL: &str = "https://wiki.eveuniversity.org/";

/// Base URL of the EVE Survival wiki.
pub const EVE_SURVIVAL_BASE_URL: &str = "https://eve-survival.org/wikka.php?wakka=";

/// Stable identifier: uppercase, spaces as `_`, parentheses removed.
///
/// # Example
///
/// ```
/// use mission_core::links::mission_key;
///
/// assert_eq!(
///     mission_key("Unauthorized Military Presence (Guristas Pirates)"),
///     "UNAUTHORIZED_MILITARY_PRESENCE_GURISTAS_PIRATES"
/// );
/// ```
#[must_use]
pub fn mission_key(name: &str) -> String {
    name.to_uppercase()
        .replace(' ', "_")
        .replace(['(', ')'], "")
}

/// EVE University page, e.g. `.../Retribution_(Guristas_Pirates)_(Level_3)`.
#[must_use]
pub fn eve_uni_link(name: &str, level: Level) -> String {
    format!(
        "{EVE_UNI_BASE_URL}{}_({})",
        name.replace(' ', "_"),
        level.as_str().replace("EVEL", "evel")
    )
}

/// EVE Survival page, e.g. `.../Retribution3gu`.
///
/// The `(GuristasPirates)` suffix is only removed in that exact spelling, and
/// `gu` is appended whenever the name mentions `Guristas`.
#[must_use]
pub fn eve_survival_link(name: &str, level: Level) -> String {
    let page = name
        .replace([' ', '-'], "")
        .replace("(GuristasPirates)", "");
    let faction_suffix = if name.contains("Guristas") { "gu" } else { "" };
    format!(
        "{EVE_SURVIVAL_BASE_URL}{page}{}{faction_suffix}",
        level.as_str().replace("LEVEL_", "")
    )
}
