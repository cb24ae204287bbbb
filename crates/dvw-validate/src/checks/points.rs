//! Point attribution checks.

use dvw_model::{PlayRecord, Skill};

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;

/// Skills whose winning evaluation ends the rally for the acting team.
const WINNING_SKILLS: &[Skill] = &[Skill::Serve, Skill::Attack, Skill::Block];

fn is_error(record: &PlayRecord) -> bool {
    let invasion = record.is_skill(Skill::Block)
        && record
            .evaluation
            .as_deref()
            .is_some_and(|evaluation| evaluation.to_lowercase().contains("invasion"));
    record.has_evaluation("=") || invasion
}

/// Errors (and block invasions) followed by a point for the erring team.
pub fn check_after_error(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.rows()
        .filter_map(|(idx, record)| {
            if !record.is_action() || !is_error(record) {
                return None;
            }
            let team = record.team?;
            (record.point_won_by? == team).then(|| Finding::at(idx, Issue::PointAfterError))
        })
        .collect()
}

/// Winning serves, attacks and blocks followed by a point for the opponent.
pub fn check_after_winning_action(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.rows()
        .filter_map(|(idx, record)| {
            let skill = record.skill?;
            if !WINNING_SKILLS.contains(&skill) || !record.has_evaluation("#") {
                return None;
            }
            let team = record.team?;
            (record.point_won_by? != team)
                .then(|| Finding::at(idx, Issue::PointAfterWinningAction { skill }))
        })
        .collect()
}
