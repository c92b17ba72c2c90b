//! Plain-text rendering of catalog content.

use mission_core::format::format_bounty;
use mission_core::prelude::*;

/// Filter for the mission list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Only missions of this level.
    pub level: Option<Level>,
    /// Only missions of this category.
    pub mission_type: Option<MissionType>,
}

impl ListFilter {
    fn matches(&self, mission: &Mission) -> bool {
        self.level.map_or(true, |level| mission.level() == level)
            && self
                .mission_type
                .map_or(true, |mission_type| mission.mission_type() == mission_type)
    }
}

/// One summary line, e.g. `RETRIBUTION_GURISTAS_PIRATES  L3  SECURITY  ...`.
#[must_use]
pub fn list_line(mission: &Mission) -> String {
    let (from, to) = mission.ship_count_range();
    let ships = if from == to {
        from.to_string()
    } else {
        format!("{from} - {to}")
    };
    format!(
        "{:<48} L{}  {:<8}  {} ships  {}",
        mission.key(),
        mission.level().number(),
        mission.mission_type().as_str(),
        ships,
        mission.name()
    )
}

/// Summary lines for every mission passing `filter`, in catalog order.
#[must_use]
pub fn render_list(catalog: &MissionCatalog, filter: ListFilter) -> String {
    let mut out = String::new();
    for mission in catalog.iter().filter(|mission| filter.matches(mission)) {
        out.push_str(&list_line(mission));
        out.push('\n');
    }
    out
}

fn damage_list(damage: &[Damage]) -> String {
    if damage.is_empty() {
        return "-".to_string();
    }
    damage.iter().map(Damage::label).collect::<Vec<_>>().join(", ")
}

fn spawn_tags(spawn: &PocketEnemy) -> String {
    let mut tags = Vec::new();
    if let Some(ewar) = spawn.ewar() {
        tags.push(ewar.label().to_string());
    }
    if let Some(wd) = spawn.wd() {
        tags.push(wd.label().to_string());
    }
    if spawn.trigger() {
        tags.push("Trigger".to_string());
    }
    if spawn.loot() {
        tags.push("Loot".to_string());
    }
    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Full pocket / group / spawn breakdown of one mission.
#[must_use]
pub fn render_mission(mission: &Mission) -> String {
    let mut out = String::new();
    let (low, high) = mission.total_bounty_range();

    push_line(&mut out, mission.name());
    push_line(&mut out, &format!("  Key:        {}", mission.key()));
    push_line(&mut out, &format!("  Level:      {}", mission.level().number()));
    push_line(&mut out, &format!("  Type:       {}", mission.mission_type()));
    push_line(
        &mut out,
        &format!("  Deals:      {}", damage_list(mission.damage_dealt())),
    );
    push_line(
        &mut out,
        &format!("  Resists:    {}", damage_list(mission.damage_resisted())),
    );
    push_line(
        &mut out,
        &format!(
            "  Bounty:     {} - {} ISK",
            format_bounty(low),
            format_bounty(high)
        ),
    );
    push_line(&mut out, &format!("  EVE Uni:    {}", mission.eve_uni_link()));
    push_line(&mut out, &format!("  Survival:   {}", mission.eve_survival_link()));

    let briefing = mission.briefing();
    if !briefing.blitz.is_empty() {
        push_line(
            &mut out,
            &format!("  Blitz:      {}", briefing.blitz.replace('\n', " ")),
        );
    }
    if !briefing.info.is_empty() {
        push_line(
            &mut out,
            &format!("  Info:       {}", briefing.info.replace('\n', " ")),
        );
    }

    for pocket in briefing.pockets {
        out.push('\n');
        push_line(&mut out, pocket.name());
        if !pocket.note().is_empty() {
            push_line(&mut out, &format!("  {}", pocket.note().replace('\n', " ")));
        }
        for group in pocket.groups() {
            if group.note().is_empty() {
                push_line(&mut out, &format!("  {}", group.name()));
            } else {
                push_line(&mut out, &format!("  {} ({})", group.name(), group.note()));
            }
            for spawn in group.enemies() {
                push_line(
                    &mut out,
                    &format!(
                        "    {} x {:<48} {:<14} {}{}",
                        spawn.display_count(),
                        spawn.display_names(),
                        spawn.primary_ship_type().label(),
                        spawn.display_bounty(),
                        spawn_tags(spawn)
                    ),
                );
            }
        }
    }
    out
}
