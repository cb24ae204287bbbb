//! Court position checks.
//!
//! Slots 2, 3 and 4 are the front row; slots 1, 5 and 6 the back row.
//! Attack zones 2, 3 and 4 are in front of the attack line.

use dvw_model::{PlayRecord, Skill};

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;
use crate::rotation::slot_of;

fn is_front_row(slot: usize) -> bool {
    matches!(slot, 2..=4)
}

fn is_front_zone(zone: u8) -> bool {
    matches!(zone, 2..=4)
}

/// Acting rows of `skill` with the acting player's slot.
fn positioned_rows<'a>(
    ctx: &RuleContext<'a>,
    skill: Skill,
) -> impl Iterator<Item = (usize, &'a PlayRecord, usize)> + 'a {
    let slot_count = ctx.slot_count();
    ctx.rows().filter_map(move |(idx, record)| {
        if !record.is_skill(skill) {
            return None;
        }
        let slot = slot_of(record, record.team?, record.player_number?, slot_count)?;
        Some((idx, record, slot))
    })
}

/// Back-row players attacking from a front-row zone, setter tips excepted.
pub fn check_back_row_attack(ctx: &RuleContext<'_>) -> Vec<Finding> {
    positioned_rows(ctx, Skill::Attack)
        .filter_map(|(idx, record, slot)| {
            let zone = record.start_zone?;
            if is_front_row(slot) || !is_front_zone(zone) {
                return None;
            }
            let setter_tip = record
                .attack_code
                .as_deref()
                .is_some_and(|code| ctx.options.is_setter_tip(code));
            (!setter_tip).then(|| Finding::at(idx, Issue::BackRowAttack { slot, zone }))
        })
        .collect()
}

/// Front-row players attacking from behind the attack line.
pub fn check_front_row_attack(ctx: &RuleContext<'_>) -> Vec<Finding> {
    positioned_rows(ctx, Skill::Attack)
        .filter_map(|(idx, record, slot)| {
            let zone = record.start_zone?;
            (is_front_row(slot) && !is_front_zone(zone))
                .then(|| Finding::at(idx, Issue::FrontRowAttackFromBackZone { slot, zone }))
        })
        .collect()
}

/// Blocks by back-row players.
pub fn check_back_row_block(ctx: &RuleContext<'_>) -> Vec<Finding> {
    positioned_rows(ctx, Skill::Block)
        .filter(|&(_, _, slot)| !is_front_row(slot))
        .map(|(idx, _, slot)| Finding::at(idx, Issue::BackRowBlock { slot }))
        .collect()
}

/// Serves by a player other than the slot 1 occupant.
pub fn check_server_position(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.rows()
        .filter_map(|(idx, record)| {
            if !record.is_skill(Skill::Serve) {
                return None;
            }
            let server = record.player_number?;
            let position_one = record.slots(record.team?)[0]?;
            (server != position_one).then(|| {
                Finding::at(
                    idx,
                    Issue::ServerNotInPositionOne {
                        server,
                        position_one,
                    },
                )
            })
        })
        .collect()
}
