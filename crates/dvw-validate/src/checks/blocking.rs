//! Blocker count checks.

use dvw_model::{PlayRecord, Skill};

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;

const NO_BLOCK: &str = "No block";

/// Attacks directly followed in the same rally by an opposing block.
fn blocked_attacks<'a>(ctx: &RuleContext<'a>) -> impl Iterator<Item = (usize, &'a PlayRecord)> + 'a {
    let log = ctx.log;
    ctx.rows().filter_map(move |(idx, record)| {
        if !record.is_skill(Skill::Attack) {
            return None;
        }
        let next = log.get(log.next_in_rally(idx)?)?;
        let opposing = matches!((record.team, next.team), (Some(a), Some(b)) if a != b);
        (next.is_skill(Skill::Block) && opposing).then_some((idx, record))
    })
}

/// Blocked attacks without a blocker count.
pub fn check_missing_count(ctx: &RuleContext<'_>) -> Vec<Finding> {
    blocked_attacks(ctx)
        .filter(|(_, record)| record.num_players.is_none())
        .map(|(idx, _)| Finding::at(idx, Issue::MissingBlockerCount))
        .collect()
}

/// Blocked attacks whose blocker count says nobody blocked.
pub fn check_no_block(ctx: &RuleContext<'_>) -> Vec<Finding> {
    blocked_attacks(ctx)
        .filter_map(|(idx, record)| {
            let num_players = record.num_players.as_deref()?.trim();
            num_players.eq_ignore_ascii_case(NO_BLOCK).then(|| {
                Finding::at(
                    idx,
                    Issue::NoBlockContradicted {
                        num_players: num_players.to_string(),
                    },
                )
            })
        })
        .collect()
}
