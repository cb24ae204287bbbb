//! Validation issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only the observed values its message needs.

use serde::{Deserialize, Serialize};

use dvw_model::{Severity, Skill};

use crate::rules::{Category, RuleId};

/// Zone field compared between a serve and its reception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneField {
    StartZone,
    EndZone,
    EndSubzone,
}

impl ZoneField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartZone => "start zone",
            Self::EndZone => "end zone",
            Self::EndSubzone => "end sub-zone",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Roster checks
    /// Two or more roster entries of one team share a player id
    DuplicatePlayerId {
        team: String,
        player_id: String,
        numbers: Vec<u32>,
    },
    /// Roster entry has no position label
    MissingRole {
        team: String,
        number: u32,
        name: String,
    },

    // Skill chain checks
    /// Dependent skill type does not follow from the preceding skill type
    SkillTypeMismatch {
        skill: Skill,
        skill_type: String,
        source_skill: Skill,
        source_type: String,
    },
    /// Reception zone differs from the serve zone
    ReceptionZoneMismatch {
        field: ZoneField,
        reception: String,
        serve: String,
    },
    /// Skill type label missing from the type mapping table
    UnmappedSkillType { skill: Skill, skill_type: String },

    // Court position checks
    /// Back-row player attacked from zone 2, 3 or 4
    BackRowAttack { slot: usize, zone: u8 },
    /// Front-row player attacked from a back-row zone
    FrontRowAttackFromBackZone { slot: usize, zone: u8 },
    /// Back-row player blocked
    BackRowBlock { slot: usize },
    /// Server is not the slot 1 occupant
    ServerNotInPositionOne { server: u32, position_one: u32 },

    // Serve checks
    /// Serve won the point outright but is not coded as an ace
    MissingAce,
    /// Serve coded as an ace did not win the point outright
    FalseAce,
    /// Serve that was neither an error nor an ace has no reception
    ServeWithoutReception,
    /// Rally contains more than one serve
    MultipleServes { count: usize },

    // Block checks
    /// Blocked attack has no blocker count
    MissingBlockerCount,
    /// Attack followed by a block records "No block"
    NoBlockContradicted { num_players: String },

    // Lineup checks
    /// Acting player is neither on court nor a libero
    PlayerNotInRotation { team: String, number: u32 },
    /// Libero served, attacked or blocked
    LiberoForbiddenSkill { number: u32, skill: Skill },

    // Row sequence checks
    /// Row repeats the previous row
    DuplicateRow,
    /// Same player on two consecutive touches
    ConsecutiveSamePlayer {
        player_id: String,
        first: Skill,
        second: Skill,
    },

    // Point attribution checks
    /// Point credited to the team that made the error
    PointAfterError,
    /// Point not credited to the team that made the winning action
    PointAfterWinningAction { skill: Skill },

    // Score checks
    /// Scores do not increase by one point at a time
    ScoreSequence,

    // Rotation and substitution checks
    /// Lineup changed without being a left rotation
    IncorrectRotationChange { team: String },
    /// Substitution row does not change the lineup
    LineupUnchangedAfterSubstitution { team: String },
    /// Substitution code disagrees with the lineup change
    SubstitutionConflict {
        team: String,
        outgoing: u32,
        incoming: u32,
    },
}

impl Issue {
    /// Rule that reports this issue.
    ///
    /// Skill type mismatches belong to the rule of the dependent skill.
    pub fn rule(&self) -> RuleId {
        match self {
            Issue::DuplicatePlayerId { .. } => RuleId::DuplicatePlayerIds,
            Issue::MissingRole { .. } => RuleId::MissingPlayerRoles,
            Issue::SkillTypeMismatch { skill, .. } => match skill {
                Skill::Attack => RuleId::AttackSetType,
                Skill::Block => RuleId::BlockAttackType,
                Skill::Dig => RuleId::DigAttackType,
                _ => RuleId::ReceptionServeType,
            },
            Issue::ReceptionZoneMismatch { .. } => RuleId::ReceptionServeZones,
            Issue::UnmappedSkillType { .. } => RuleId::UnmappedSkillTypes,
            Issue::BackRowAttack { .. } => RuleId::BackRowAttack,
            Issue::FrontRowAttackFromBackZone { .. } => RuleId::FrontRowAttackFromBackZone,
            Issue::BackRowBlock { .. } => RuleId::BackRowBlock,
            Issue::ServerNotInPositionOne { .. } => RuleId::ServerPosition,
            Issue::MissingAce | Issue::FalseAce => RuleId::AceCoding,
            Issue::ServeWithoutReception => RuleId::ServeWithoutReception,
            Issue::MultipleServes { .. } => RuleId::MultipleServes,
            Issue::MissingBlockerCount => RuleId::MissingBlockerCount,
            Issue::NoBlockContradicted { .. } => RuleId::NoBlockContradicted,
            Issue::PlayerNotInRotation { .. } => RuleId::PlayerNotInRotation,
            Issue::LiberoForbiddenSkill { .. } => RuleId::LiberoSkills,
            Issue::DuplicateRow => RuleId::DuplicateRows,
            Issue::ConsecutiveSamePlayer { .. } => RuleId::ConsecutiveSamePlayer,
            Issue::PointAfterError => RuleId::PointAfterError,
            Issue::PointAfterWinningAction { .. } => RuleId::PointAfterWinningAction,
            // Reported by both score rules, which share category and severity.
            Issue::ScoreSequence => RuleId::PointScoreSequence,
            Issue::IncorrectRotationChange { .. } => RuleId::RotationChange,
            Issue::LineupUnchangedAfterSubstitution { .. } => RuleId::SubstitutionUnchanged,
            Issue::SubstitutionConflict { .. } => RuleId::SubstitutionConflict,
        }
    }

    pub fn category(&self) -> Category {
        self.rule().category()
    }

    pub fn severity(&self) -> Severity {
        self.rule().severity()
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::DuplicatePlayerId {
                team,
                player_id,
                numbers,
            } => {
                format!(
                    "Players {} on team {} have the same player ID ({})",
                    join_numbers(numbers),
                    team,
                    player_id
                )
            }

            Issue::MissingRole { team, number, name } => {
                format!(
                    "Player {} ({}) on team {} has no position (role) assigned",
                    number, name, team
                )
            }

            Issue::SkillTypeMismatch {
                skill,
                skill_type,
                source_skill,
                source_type,
            } => {
                format!(
                    "{} type ({}) does not match {} type ({})",
                    skill.label(),
                    skill_type,
                    source_skill.label().to_lowercase(),
                    source_type
                )
            }

            Issue::ReceptionZoneMismatch {
                field,
                reception,
                serve,
            } => {
                format!(
                    "Reception {} ({}) does not match serve {} ({})",
                    field.label(),
                    reception,
                    field.label(),
                    serve
                )
            }

            Issue::UnmappedSkillType { skill, skill_type } => {
                format!(
                    "{} type ({}) is not a recognized {} type",
                    skill.label(),
                    skill_type,
                    skill.label().to_lowercase()
                )
            }

            Issue::BackRowAttack { .. } => {
                "Back-row player made an attack from a front-row zone".to_string()
            }

            Issue::FrontRowAttackFromBackZone { .. } => {
                "Front-row player made an attack from a back-row zone (legal, but possibly a scouting error)"
                    .to_string()
            }

            Issue::BackRowBlock { .. } => "Back-row player made a block".to_string(),

            Issue::ServerNotInPositionOne {
                server,
                position_one,
            } => {
                format!(
                    "Player making the serve ({}) is not in position 1 (player {} is)",
                    server, position_one
                )
            }

            Issue::MissingAce => "Winning serve not coded as an ace".to_string(),

            Issue::FalseAce => "Non-winning serve was coded as an ace".to_string(),

            Issue::ServeWithoutReception => {
                "Serve (that was not an error) did not have an accompanying reception".to_string()
            }

            Issue::MultipleServes { count } => {
                format!("Rally contains {} serves", count)
            }

            Issue::MissingBlockerCount => {
                "Attack (which was blocked) does not have number of blockers recorded".to_string()
            }

            Issue::NoBlockContradicted { num_players } => {
                format!(
                    "Attack (which was followed by a block) has number of blockers recorded as \"{}\"",
                    num_players
                )
            }

            Issue::PlayerNotInRotation { team, number } => {
                format!(
                    "Player number {} ({}) is not in the recorded rotation",
                    number, team
                )
            }

            Issue::LiberoForbiddenSkill { number, skill } => {
                let article = if *skill == Skill::Attack { "an" } else { "a" };
                format!(
                    "Libero ({}) made {} {}",
                    number,
                    article,
                    skill.label().to_lowercase()
                )
            }

            Issue::DuplicateRow => {
                "Repeated row with same skill and evaluation code for the same player".to_string()
            }

            Issue::ConsecutiveSamePlayer {
                player_id,
                first,
                second,
            } => {
                format!(
                    "Consecutive actions by the same player ({}): {} then {}",
                    player_id,
                    first.label().to_lowercase(),
                    second.label().to_lowercase()
                )
            }

            Issue::PointAfterError => {
                "Point awarded to incorrect team following error (or \"error\" evaluation incorrect)"
                    .to_string()
            }

            Issue::PointAfterWinningAction { skill } => {
                format!(
                    "Point awarded to incorrect team (or \"winning {}\" evaluation incorrect)",
                    skill.label().to_lowercase()
                )
            }

            Issue::ScoreSequence => "Scores do not follow proper sequence".to_string(),

            Issue::IncorrectRotationChange { team } => {
                format!("Player rotation changed incorrectly ({})", team)
            }

            Issue::LineupUnchangedAfterSubstitution { team } => {
                format!("Player lineup did not change after substitution ({})", team)
            }

            Issue::SubstitutionConflict { .. } => {
                "Player lineup conflicts with recorded substitution".to_string()
            }
        }
    }
}

/// "5", "5 and 7", "5, 7 and 9".
fn join_numbers(numbers: &[u32]) -> String {
    match numbers {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(u32::to_string).collect();
            format!("{} and {}", head.join(", "), last)
        }
    }
}
