//! Serve checks, evaluated once per rally.

use dvw_model::{PlayLog, Rally, Skill};

use crate::context::{Finding, RuleContext};
use crate::issue::Issue;

/// What the log shows after the serve (or after the reception, if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    /// No further touch in the rally.
    Nothing,
    /// A rotation error ended the rally.
    RotationError,
    /// The ball stayed in play.
    Play,
}

/// Serve-related facts about one rally.
struct ServeRally {
    serve: usize,
    server_won: bool,
    reception: Option<usize>,
    reception_error: bool,
    follow_up: FollowUp,
}

impl ServeRally {
    /// Facts for a decided rally with exactly one serve by a known team.
    fn read(log: &PlayLog, rally: &Rally) -> Option<Self> {
        let serves = serve_rows(log, rally);
        let [serve] = serves.as_slice() else {
            return None;
        };
        let serve = *serve;
        let serving_team = log.get(serve)?.team?;

        let winner = rally
            .indices()
            .find_map(|idx| log.get(idx).and_then(|record| record.point_won_by))?;
        let reception = (serve + 1..rally.end)
            .find(|&idx| log.get(idx).is_some_and(|r| r.is_skill(Skill::Reception)));
        let reception_error = reception
            .and_then(|idx| log.get(idx))
            .is_some_and(|r| r.has_evaluation("="));

        let after = reception.unwrap_or(serve) + 1;
        let follow_up = (after..rally.end)
            .filter_map(|idx| log.get(idx))
            .find_map(|record| {
                if record.is_skill(Skill::RotationError) {
                    Some(FollowUp::RotationError)
                } else if record.is_action() {
                    Some(FollowUp::Play)
                } else {
                    None
                }
            })
            .unwrap_or(FollowUp::Nothing);

        Some(Self {
            serve,
            server_won: winner == serving_team,
            reception,
            reception_error,
            follow_up,
        })
    }

    /// The server won without the receiving team playing the ball.
    fn outright(&self) -> bool {
        self.server_won && (self.reception.is_none() || self.reception_error)
    }
}

fn serve_rows(log: &PlayLog, rally: &Rally) -> Vec<usize> {
    rally
        .indices()
        .filter(|&idx| log.get(idx).is_some_and(|r| r.is_skill(Skill::Serve)))
        .collect()
}

/// Aces that are missing or coded where the serve did not win outright.
///
/// A rally ended by a rotation error does not need an ace, but an ace coded
/// on such a rally is accepted.
pub fn check_ace_coding(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let log = ctx.log;
    let mut findings = Vec::new();

    for rally in log.rallies() {
        let Some(facts) = ServeRally::read(log, &rally) else {
            continue;
        };
        let Some(serve) = log.get(facts.serve) else {
            continue;
        };
        let coded_ace = serve.has_evaluation("#");

        if !coded_ace && facts.outright() && facts.follow_up == FollowUp::Nothing {
            findings.push(Finding::at(facts.serve, Issue::MissingAce));
        }
        if coded_ace && !(facts.outright() && facts.follow_up != FollowUp::Play) {
            findings.push(Finding::at(facts.serve, Issue::FalseAce));
        }
    }

    findings
}

/// Rallies with more than one serve, reported at the second serve.
pub fn check_multiple_serves(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.log
        .rallies()
        .iter()
        .filter_map(|rally| {
            let serves = serve_rows(ctx.log, rally);
            (serves.len() > 1)
                .then(|| Finding::at(serves[1], Issue::MultipleServes { count: serves.len() }))
        })
        .collect()
}

/// Serves in play (neither error nor ace) with no reception in the rally.
///
/// Rallies the server won are left to the ace check. A serve on the last
/// row of the log is a boundary and is not reported.
pub fn check_serve_without_reception(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let log = ctx.log;
    let mut findings = Vec::new();

    for rally in log.rallies() {
        let Some(facts) = ServeRally::read(log, &rally) else {
            continue;
        };
        let Some(serve) = log.get(facts.serve) else {
            continue;
        };
        if serve.has_evaluation("=") || serve.has_evaluation("#") {
            continue;
        }
        if facts.serve + 1 >= log.len() {
            continue;
        }
        let rotation_error = rally
            .indices()
            .any(|idx| log.get(idx).is_some_and(|r| r.is_skill(Skill::RotationError)));
        if facts.reception.is_none() && !rotation_error && !facts.server_won {
            findings.push(Finding::at(facts.serve, Issue::ServeWithoutReception));
        }
    }

    findings
}
