//! Rotation and substitution checks.
//!
//! Substitution rows are taken to carry the lineup after the substitution.
//! Rows in the first two and last two positions of the log lack the context
//! the substitution checks need and are skipped.

use dvw_model::{PlayRecord, TeamSide};

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;
use crate::rotation::{Lineup, lineup_after, lineup_before, parse_substitution};

const EDGE_ROWS: usize = 2;

/// Lineup changes that are not a single left rotation.
///
/// Rows compared across a substitution are exempt, as is the first row of
/// each set. A substitution row that itself supplies the previous lineup
/// already shows the incoming player, so rows after it are still checked.
pub fn check_rotation_change(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let log = ctx.log;
    let slot_count = ctx.slot_count();
    let mut findings = Vec::new();

    for (idx, record) in ctx.rows() {
        if record.is_timeout() || record.is_substitution() {
            continue;
        }
        for side in [TeamSide::Home, TeamSide::Visiting] {
            let Some(current) = Lineup::from_record(record, side, slot_count) else {
                continue;
            };
            let Some((prev_idx, previous)) = lineup_before(log, idx, side, slot_count) else {
                continue;
            };
            let substituted = (prev_idx + 1..idx)
                .filter_map(|i| log.get(i))
                .any(PlayRecord::is_substitution);
            let new_set = log
                .get(prev_idx)
                .is_some_and(|prev| prev.set_number != record.set_number);
            if substituted || new_set {
                continue;
            }
            if current != previous && !current.is_rotation_of(&previous) {
                findings.push(Finding::at(
                    idx,
                    Issue::IncorrectRotationChange {
                        team: ctx.team_name(side).to_string(),
                    },
                ));
            }
        }
    }

    findings
}

/// Substitution rows away from the edges of the log.
fn substitution_rows<'a>(
    ctx: &RuleContext<'a>,
) -> impl Iterator<Item = (usize, &'a PlayRecord)> + 'a {
    let len = ctx.log.len();
    ctx.rows().filter(move |(idx, record)| {
        *idx >= EDGE_ROWS && *idx + EDGE_ROWS < len && record.is_substitution()
    })
}

/// Lineups on either side of a substitution row, within its set.
fn surrounding_lineups(
    ctx: &RuleContext<'_>,
    idx: usize,
    side: TeamSide,
) -> Option<(Lineup, Lineup)> {
    let slot_count = ctx.slot_count();
    let set = ctx.log.get(idx)?.set_number;
    let same_set = |row: usize| ctx.log.get(row).is_some_and(|r| r.set_number == set);

    let (pre_idx, pre) = lineup_before(ctx.log, idx, side, slot_count)?;
    let (post_idx, post) = lineup_after(ctx.log, idx, side, slot_count)?;
    (same_set(pre_idx) && same_set(post_idx)).then_some((pre, post))
}

/// Substitutions after which the substituting team's lineup is unchanged.
pub fn check_substitution_unchanged(ctx: &RuleContext<'_>) -> Vec<Finding> {
    substitution_rows(ctx)
        .filter_map(|(idx, record)| {
            let side = parse_substitution(&record.code)
                .map(|sub| sub.team)
                .or(record.team)?;
            let (pre, post) = surrounding_lineups(ctx, idx, side)?;
            (pre == post).then(|| {
                Finding::at(
                    idx,
                    Issue::LineupUnchangedAfterSubstitution {
                        team: ctx.team_name(side).to_string(),
                    },
                )
            })
        })
        .collect()
}

/// Substitution codes that disagree with the lineups around them.
pub fn check_substitution_conflict(ctx: &RuleContext<'_>) -> Vec<Finding> {
    substitution_rows(ctx)
        .filter_map(|(idx, record)| {
            let sub = parse_substitution(&record.code)?;
            let (pre, post) = surrounding_lineups(ctx, idx, sub.team)?;
            (!sub.reconciles(&pre, &post)).then(|| {
                Finding::at(
                    idx,
                    Issue::SubstitutionConflict {
                        team: ctx.team_name(sub.team).to_string(),
                        outgoing: sub.outgoing,
                        incoming: sub.incoming,
                    },
                )
            })
        })
        .collect()
}
