//! Team rosters.

use serde::{Deserialize, Serialize};

use crate::play::TeamSide;

/// One player on a team sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: Option<String>,
    pub number: u32,
    pub name: String,
    /// Position label ("outside", "setter", "libero", ...).
    pub role: Option<String>,
    /// Special role flags; `L` marks a libero, `C` the captain.
    pub special_role: Option<String>,
}

impl RosterEntry {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_player_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_special_role(mut self, special_role: impl Into<String>) -> Self {
        self.special_role = Some(special_role.into());
        self
    }

    pub fn is_libero(&self) -> bool {
        let flagged = self
            .special_role
            .as_deref()
            .is_some_and(|flags| flags.chars().any(|c| c.eq_ignore_ascii_case(&'L')));
        let by_role = self
            .role
            .as_deref()
            .is_some_and(|role| role.trim().eq_ignore_ascii_case("libero"));
        flagged || by_role
    }

    /// Player id with blank values treated as missing.
    pub fn id(&self) -> Option<&str> {
        self.player_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && !id.eq_ignore_ascii_case("na"))
    }
}

/// Players registered for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team: String,
    pub players: Vec<RosterEntry>,
}

impl TeamRoster {
    pub fn new(team: impl Into<String>, players: Vec<RosterEntry>) -> Self {
        Self {
            team: team.into(),
            players,
        }
    }

    pub fn find(&self, number: u32) -> Option<&RosterEntry> {
        self.players.iter().find(|player| player.number == number)
    }

    pub fn is_libero(&self, number: u32) -> bool {
        self.players
            .iter()
            .any(|player| player.number == number && player.is_libero())
    }
}

/// Rosters for both teams of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub home: TeamRoster,
    pub visiting: TeamRoster,
}

impl Roster {
    pub fn new(home: TeamRoster, visiting: TeamRoster) -> Self {
        Self { home, visiting }
    }

    pub fn team(&self, side: TeamSide) -> &TeamRoster {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Visiting => &self.visiting,
        }
    }

    pub fn teams(&self) -> [(TeamSide, &TeamRoster); 2] {
        [
            (TeamSide::Home, &self.home),
            (TeamSide::Visiting, &self.visiting),
        ]
    }
}
