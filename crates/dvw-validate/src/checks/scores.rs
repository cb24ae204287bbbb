//! Score progression checks.

use dvw_model::TeamSide;

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;

/// Score after a point: set number and (home, visiting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointScore {
    set: Option<u32>,
    home: u32,
    visiting: u32,
}

impl PointScore {
    fn get(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Visiting => self.visiting,
        }
    }
}

/// Each point adds one to the winner's score and nothing to the loser's.
///
/// The first point of a later set must read 1-0 or 0-1. The first point in
/// the log has nothing to compare against.
pub fn check_point_sequence(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let log = ctx.log;
    let mut findings = Vec::new();
    let mut previous: Option<PointScore> = None;

    for rally in log.rallies() {
        let winner = rally
            .indices()
            .find_map(|idx| log.get(idx).and_then(|record| record.point_won_by));
        let Some(winner) = winner else {
            continue;
        };
        let final_row = rally
            .indices()
            .rev()
            .find(|&idx| log.get(idx).is_some_and(|record| record.scores().is_some()));
        let Some((final_row, record)) =
            final_row.and_then(|idx| log.get(idx).map(|record| (idx, record)))
        else {
            continue;
        };
        let Some((home, visiting)) = record.scores() else {
            continue;
        };
        let current = PointScore {
            set: record.set_number,
            home,
            visiting,
        };

        let baseline = match previous {
            Some(prev) if prev.set == current.set => Some(prev),
            Some(_) => Some(PointScore {
                set: current.set,
                home: 0,
                visiting: 0,
            }),
            None => None,
        };
        if let Some(base) = baseline {
            let loser = winner.opponent();
            let valid = base.get(winner).checked_add(1) == Some(current.get(winner))
                && current.get(loser) == base.get(loser);
            if !valid {
                findings.push(Finding::at(final_row, Issue::ScoreSequence));
            }
        }
        previous = Some(current);
    }

    findings
}

/// Within a set, a team's score never drops and never jumps by more than one
/// between consecutive scored rows.
pub fn check_row_sequence(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut previous: Option<(Option<u32>, (u32, u32))> = None;

    for (idx, record) in ctx.rows() {
        let Some(scores) = record.scores() else {
            continue;
        };
        if let Some((set, (prev_home, prev_visiting))) = previous
            && set == record.set_number
        {
            let (home, visiting) = scores;
            let valid = (prev_home..=prev_home.saturating_add(1)).contains(&home)
                && (prev_visiting..=prev_visiting.saturating_add(1)).contains(&visiting);
            if !valid {
                findings.push(Finding::at(idx, Issue::ScoreSequence));
            }
        }
        previous = Some((record.set_number, scores));
    }

    findings
}
