//! Play log records and rally navigation.
//!
//! A [`PlayLog`] is the ordered, immutable sequence of parsed scout rows for one
//! match. Rows that belong to the same rally share a `point_id`; the rally
//! helpers on [`PlayLog`] make those boundaries explicit so that checks never
//! compare rows across two rallies by accident.

use serde::{Deserialize, Serialize};

/// Number of rotation slot columns stored per team.
pub const MAX_SLOTS: usize = 6;

/// Skill (or marker) recorded on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Serve,
    Reception,
    Set,
    Attack,
    Block,
    Dig,
    Freeball,
    RotationError,
    TechnicalTimeout,
    Timeout,
    Substitution,
    /// Any other upstream label.
    Other,
}

impl Skill {
    /// Parse the upstream skill label. Empty labels yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        let skill = match normalized.as_str() {
            "" | "na" => return None,
            "serve" => Self::Serve,
            "reception" => Self::Reception,
            "set" => Self::Set,
            "attack" => Self::Attack,
            "block" => Self::Block,
            "dig" => Self::Dig,
            "freeball" => Self::Freeball,
            "rotation error" => Self::RotationError,
            "technical timeout" => Self::TechnicalTimeout,
            "timeout" => Self::Timeout,
            "substitution" => Self::Substitution,
            _ => Self::Other,
        };
        Some(skill)
    }

    /// Upstream label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Serve => "Serve",
            Self::Reception => "Reception",
            Self::Set => "Set",
            Self::Attack => "Attack",
            Self::Block => "Block",
            Self::Dig => "Dig",
            Self::Freeball => "Freeball",
            Self::RotationError => "Rotation error",
            Self::TechnicalTimeout => "Technical timeout",
            Self::Timeout => "Timeout",
            Self::Substitution => "Substitution",
            Self::Other => "Other",
        }
    }

    /// Skills that are touches of the ball by a player.
    pub fn is_action(self) -> bool {
        matches!(
            self,
            Self::Serve
                | Self::Reception
                | Self::Set
                | Self::Attack
                | Self::Block
                | Self::Dig
                | Self::Freeball
        )
    }
}

/// Which of the two teams a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Visiting,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Visiting,
            Self::Visiting => Self::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Visiting => "visiting",
        }
    }
}

/// One scouted action or marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub skill: Option<Skill>,
    /// Qualifier such as "Jump-float serve".
    pub skill_type: Option<String>,
    pub evaluation: Option<String>,
    /// Single-character outcome code (`=` error, `#` winning action, ...).
    pub evaluation_code: Option<String>,
    pub team: Option<TeamSide>,
    pub player_number: Option<u32>,
    pub player_id: Option<String>,
    pub start_zone: Option<u8>,
    pub end_zone: Option<u8>,
    pub end_subzone: Option<String>,
    /// Blocker count label ("No block", "2 player block", ...).
    pub num_players: Option<String>,
    /// Attack combination code (e.g. "X5", "PP").
    pub attack_code: Option<String>,
    pub home_slots: [Option<u32>; MAX_SLOTS],
    pub visiting_slots: [Option<u32>; MAX_SLOTS],
    pub substitution: bool,
    /// Raw compound scout code.
    pub code: String,
    pub point_id: Option<u32>,
    pub set_number: Option<u32>,
    pub home_team_score: Option<u32>,
    pub visiting_team_score: Option<u32>,
    pub point_won_by: Option<TeamSide>,
    /// 1-based line in the source scout file.
    pub file_line_number: Option<usize>,
}

impl PlayRecord {
    pub fn is_skill(&self, skill: Skill) -> bool {
        self.skill == Some(skill)
    }

    /// Whether the row is a touch of the ball.
    pub fn is_action(&self) -> bool {
        self.skill.is_some_and(Skill::is_action)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self.skill,
            Some(Skill::TechnicalTimeout) | Some(Skill::Timeout)
        )
    }

    pub fn is_substitution(&self) -> bool {
        self.substitution || self.is_skill(Skill::Substitution)
    }

    pub fn has_evaluation(&self, code: &str) -> bool {
        self.evaluation_code.as_deref().map(str::trim) == Some(code)
    }

    /// Rotation slot values for one team.
    pub fn slots(&self, side: TeamSide) -> &[Option<u32>; MAX_SLOTS] {
        match side {
            TeamSide::Home => &self.home_slots,
            TeamSide::Visiting => &self.visiting_slots,
        }
    }

    pub fn score(&self, side: TeamSide) -> Option<u32> {
        match side {
            TeamSide::Home => self.home_team_score,
            TeamSide::Visiting => self.visiting_team_score,
        }
    }

    /// Both scores, when both are recorded.
    pub fn scores(&self) -> Option<(u32, u32)> {
        Some((self.home_team_score?, self.visiting_team_score?))
    }
}

/// Contiguous rows sharing a `point_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rally {
    pub point_id: u32,
    /// First row index.
    pub start: usize,
    /// One past the last row index.
    pub end: usize,
}

impl Rally {
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn last(&self) -> usize {
        self.end - 1
    }
}

/// Ordered, read-only play-by-play log for one match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayLog {
    pub home_team: String,
    pub visiting_team: String,
    pub records: Vec<PlayRecord>,
    /// Raw scout file text, one entry per line.
    #[serde(default)]
    pub source_lines: Vec<String>,
}

impl PlayLog {
    pub fn new(
        home_team: impl Into<String>,
        visiting_team: impl Into<String>,
        records: Vec<PlayRecord>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            visiting_team: visiting_team.into(),
            records,
            source_lines: Vec::new(),
        }
    }

    pub fn with_source_lines(mut self, lines: Vec<String>) -> Self {
        self.source_lines = lines;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&PlayRecord> {
        self.records.get(idx)
    }

    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Visiting => &self.visiting_team,
        }
    }

    /// Raw source text for a 1-based line number.
    pub fn source_line(&self, line_number: usize) -> Option<&str> {
        let idx = line_number.checked_sub(1)?;
        self.source_lines.get(idx).map(String::as_str)
    }

    /// Whether two rows belong to the same rally.
    pub fn same_rally(&self, a: usize, b: usize) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(first), Some(second)) => {
                first.point_id.is_some() && first.point_id == second.point_id
            }
            _ => false,
        }
    }

    /// Previous row if it is part of the same rally.
    pub fn prev_in_rally(&self, idx: usize) -> Option<usize> {
        let prev = idx.checked_sub(1)?;
        self.same_rally(prev, idx).then_some(prev)
    }

    /// Next row if it is part of the same rally.
    pub fn next_in_rally(&self, idx: usize) -> Option<usize> {
        let next = idx + 1;
        self.same_rally(idx, next).then_some(next)
    }

    /// Rallies in log order. Rows without a `point_id` belong to no rally.
    pub fn rallies(&self) -> Vec<Rally> {
        let mut rallies: Vec<Rally> = Vec::new();
        for (idx, record) in self.records.iter().enumerate() {
            let Some(point_id) = record.point_id else {
                continue;
            };
            match rallies.last_mut() {
                Some(rally) if rally.point_id == point_id && rally.end == idx => {
                    rally.end = idx + 1;
                }
                _ => rallies.push(Rally {
                    point_id,
                    start: idx,
                    end: idx + 1,
                }),
            }
        }
        rallies
    }
}
