//! Roster checks.

use std::collections::BTreeMap;

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;

/// One finding per player id shared by two or more players of a team.
pub fn check_duplicate_ids(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (side, team) in ctx.roster.teams() {
        let mut by_id: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for player in &team.players {
            if let Some(id) = player.id() {
                by_id.entry(id).or_default().push(player.number);
            }
        }

        let team_name = display_team(&team.team, ctx.team_name(side));
        for (player_id, numbers) in by_id {
            if numbers.len() > 1 {
                findings.push(Finding::unlocated(Issue::DuplicatePlayerId {
                    team: team_name.to_string(),
                    player_id: player_id.to_string(),
                    numbers,
                }));
            }
        }
    }

    findings
}

/// Roster entries without a position label.
pub fn check_missing_roles(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (side, team) in ctx.roster.teams() {
        let team_name = display_team(&team.team, ctx.team_name(side));
        for player in &team.players {
            let has_role = player
                .role
                .as_deref()
                .is_some_and(|role| !role.trim().is_empty());
            if !has_role {
                findings.push(Finding::unlocated(Issue::MissingRole {
                    team: team_name.to_string(),
                    number: player.number,
                    name: player.name.clone(),
                }));
            }
        }
    }

    findings
}

fn display_team<'a>(roster_name: &'a str, log_name: &'a str) -> &'a str {
    if roster_name.trim().is_empty() {
        log_name
    } else {
        roster_name
    }
}
