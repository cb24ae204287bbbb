//! Lineup membership and libero checks.

use dvw_model::Skill;

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;
use crate::rotation::Lineup;

/// Acting players who are neither in their team's lineup nor liberos.
///
/// Rows without a complete lineup for the acting team are not checked.
pub fn check_player_in_rotation(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let slot_count = ctx.slot_count();

    ctx.rows()
        .filter_map(|(idx, record)| {
            if !record.is_action() {
                return None;
            }
            let side = record.team?;
            let number = record.player_number?;
            let lineup = Lineup::from_record(record, side, slot_count)?;
            let on_court = lineup.contains(number) || ctx.roster.team(side).is_libero(number);
            (!on_court).then(|| {
                Finding::at(
                    idx,
                    Issue::PlayerNotInRotation {
                        team: ctx.team_name(side).to_string(),
                        number,
                    },
                )
            })
        })
        .collect()
}

/// Serves, attacks and blocks made by a libero.
pub fn check_libero_skills(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.rows()
        .filter_map(|(idx, record)| {
            let skill = record.skill?;
            if !matches!(skill, Skill::Serve | Skill::Attack | Skill::Block) {
                return None;
            }
            let number = record.player_number?;
            ctx.roster
                .team(record.team?)
                .is_libero(number)
                .then(|| Finding::at(idx, Issue::LiberoForbiddenSkill { number, skill }))
        })
        .collect()
}
