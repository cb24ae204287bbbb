//! Row sequence checks.

use dvw_model::Skill;

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;

/// Touch pairs a single player cannot make back to back.
const FORBIDDEN_PAIRS: &[(Skill, Skill)] = &[
    (Skill::Reception, Skill::Attack),
    (Skill::Set, Skill::Block),
];

/// Rows that repeat the previous row of the rally.
pub fn check_duplicate_rows(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let log = ctx.log;

    ctx.rows()
        .filter_map(|(idx, record)| {
            let prev = log.get(log.prev_in_rally(idx)?)?;
            let repeated = record.is_action()
                && record.skill == prev.skill
                && record.team == prev.team
                && record.player_number.is_some()
                && record.player_number == prev.player_number
                && record.evaluation_code.is_some()
                && record.evaluation_code == prev.evaluation_code;
            repeated.then(|| Finding::at(idx, Issue::DuplicateRow))
        })
        .collect()
}

/// Consecutive touches by one player that the rules forbid.
pub fn check_consecutive_player(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let log = ctx.log;

    ctx.rows()
        .filter_map(|(idx, record)| {
            let prev = log.get(log.prev_in_rally(idx)?)?;
            let pair = (prev.skill?, record.skill?);
            if !FORBIDDEN_PAIRS.contains(&pair) {
                return None;
            }
            let player_id = record.player_id.as_deref()?;
            (prev.player_id.as_deref() == Some(player_id)).then(|| {
                Finding::at(
                    idx,
                    Issue::ConsecutiveSamePlayer {
                        player_id: player_id.to_string(),
                        first: pair.0,
                        second: pair.1,
                    },
                )
            })
        })
        .collect()
}
