//! Play log builder for validation tests.
//!
//! Builds internally consistent logs: rows carry the running score and the
//! current lineups, the serving team's slot 1 player serves, and a side-out
//! rotates the team that wins it.

#![allow(dead_code)]

use dvw_model::{PlayLog, PlayRecord, Roster, RosterEntry, Skill, TeamRoster, TeamSide};

pub const HOME_LINEUP: [u32; 6] = [1, 2, 3, 4, 5, 6];
pub const VISITING_LINEUP: [u32; 6] = [11, 12, 13, 14, 15, 16];

pub struct LogBuilder {
    records: Vec<PlayRecord>,
    point_id: u32,
    set: u32,
    score: (u32, u32),
    home: [u32; 6],
    visiting: [u32; 6],
    serving: TeamSide,
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            point_id: 1,
            set: 1,
            score: (0, 0),
            home: HOME_LINEUP,
            visiting: VISITING_LINEUP,
            serving: TeamSide::Home,
        }
    }

    pub fn lineup(&self, side: TeamSide) -> [u32; 6] {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Visiting => self.visiting,
        }
    }

    /// The team receiving the next serve.
    pub fn receiving(&self) -> TeamSide {
        self.serving.opponent()
    }

    fn lineup_mut(&mut self, side: TeamSide) -> &mut [u32; 6] {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Visiting => &mut self.visiting,
        }
    }

    fn base(&self) -> PlayRecord {
        PlayRecord {
            point_id: Some(self.point_id),
            set_number: Some(self.set),
            home_team_score: Some(self.score.0),
            visiting_team_score: Some(self.score.1),
            home_slots: self.home.map(Some),
            visiting_slots: self.visiting.map(Some),
            file_line_number: Some(self.records.len() + 1),
            ..PlayRecord::default()
        }
    }

    /// Any touch.
    pub fn touch(mut self, skill: Skill, team: TeamSide, player: u32, evaluation: &str) -> Self {
        let marker = if team == TeamSide::Home { '*' } else { 'a' };
        let record = PlayRecord {
            skill: Some(skill),
            team: Some(team),
            player_number: Some(player),
            evaluation_code: Some(evaluation.to_string()),
            code: format!("{marker}{player:02}{}{evaluation}", skill_letter(skill)),
            ..self.base()
        };
        self.records.push(record);
        self
    }

    /// Modify the last row.
    pub fn edit(mut self, f: impl FnOnce(&mut PlayRecord)) -> Self {
        if let Some(record) = self.records.last_mut() {
            f(record);
        }
        self
    }

    /// Serve by the serving team's slot 1 player.
    pub fn serve(self, evaluation: &str) -> Self {
        let team = self.serving;
        let server = self.lineup(team)[0];
        self.touch(Skill::Serve, team, server, evaluation).edit(|r| {
            r.skill_type = Some("Jump-float serve".to_string());
            r.start_zone = Some(1);
            r.end_zone = Some(5);
            r.end_subzone = Some("A".to_string());
        })
    }

    /// Reception by the slot 6 player of the receiving team.
    pub fn reception(self, evaluation: &str) -> Self {
        let team = self.serving.opponent();
        let player = self.lineup(team)[5];
        self.touch(Skill::Reception, team, player, evaluation).edit(|r| {
            r.skill_type = Some("Jump-float serve reception".to_string());
            r.start_zone = Some(1);
            r.end_zone = Some(5);
            r.end_subzone = Some("A".to_string());
        })
    }

    /// Set by slot 3 and attack by slot 4 from zone 4.
    pub fn set_and_attack(self, team: TeamSide, evaluation: &str) -> Self {
        let lineup = self.lineup(team);
        self.touch(Skill::Set, team, lineup[2], "#")
            .edit(|r| r.skill_type = Some("High ball set".to_string()))
            .touch(Skill::Attack, team, lineup[3], evaluation)
            .edit(|r| {
                r.skill_type = Some("High ball attack".to_string());
                r.start_zone = Some(4);
                r.attack_code = Some("V5".to_string());
            })
    }

    /// Close the rally: point marker row, score update and side-out rotation.
    pub fn point(mut self, winner: TeamSide) -> Self {
        let rally = self.point_id;
        for record in self
            .records
            .iter_mut()
            .filter(|r| r.point_id == Some(rally))
        {
            record.point_won_by = Some(winner);
        }
        match winner {
            TeamSide::Home => self.score.0 += 1,
            TeamSide::Visiting => self.score.1 += 1,
        }
        let code = format!(
            "{}p{:02}:{:02}",
            if winner == TeamSide::Home { '*' } else { 'a' },
            self.score.0,
            self.score.1
        );
        let record = PlayRecord {
            point_won_by: Some(winner),
            code,
            ..self.base()
        };
        self.records.push(record);

        if winner != self.serving {
            self.lineup_mut(winner).rotate_left(1);
            self.serving = winner;
        }
        self.point_id += 1;
        self
    }

    /// Serve, reception, set and kill by the receiving team.
    pub fn side_out(self) -> Self {
        let receiving = self.serving.opponent();
        self.serve("+")
            .reception("#")
            .set_and_attack(receiving, "#")
            .point(receiving)
    }

    /// Serve ace by the serving team.
    pub fn ace(self) -> Self {
        let serving = self.serving;
        self.serve("#").point(serving)
    }

    /// Substitution row carrying the lineup after the change.
    pub fn substitution(mut self, team: TeamSide, outgoing: u32, incoming: u32) -> Self {
        for slot in self.lineup_mut(team).iter_mut() {
            if *slot == outgoing {
                *slot = incoming;
            }
        }
        let marker = if team == TeamSide::Home { '*' } else { 'a' };
        let record = PlayRecord {
            skill: Some(Skill::Substitution),
            team: Some(team),
            substitution: true,
            code: format!("{marker}c{outgoing:02}:{incoming:02}"),
            point_id: None,
            ..self.base()
        };
        self.records.push(record);
        self
    }

    pub fn timeout(mut self, team: TeamSide) -> Self {
        let record = PlayRecord {
            skill: Some(Skill::Timeout),
            team: Some(team),
            code: if team == TeamSide::Home { "*T" } else { "aT" }.to_string(),
            point_id: None,
            ..self.base()
        };
        self.records.push(record);
        self
    }

    /// Start the next set with the opening lineups.
    pub fn next_set(mut self) -> Self {
        self.set += 1;
        self.score = (0, 0);
        self.home = HOME_LINEUP;
        self.visiting = VISITING_LINEUP;
        self.serving = TeamSide::Home;
        self
    }

    /// Replace the lineup of `team` without recording a substitution.
    pub fn force_lineup(mut self, team: TeamSide, lineup: [u32; 6]) -> Self {
        *self.lineup_mut(team) = lineup;
        self
    }

    pub fn records(&self) -> &[PlayRecord] {
        &self.records
    }

    pub fn build(self) -> PlayLog {
        let source_lines = self
            .records
            .iter()
            .enumerate()
            .map(|(idx, r)| format!("{};;;;;;;;;;;;{};", r.code, 100 + idx * 5))
            .collect();
        PlayLog::new("Lions", "Tigers", self.records).with_source_lines(source_lines)
    }
}

fn skill_letter(skill: Skill) -> char {
    match skill {
        Skill::Serve => 'S',
        Skill::Reception => 'R',
        Skill::Set => 'E',
        Skill::Attack => 'A',
        Skill::Block => 'B',
        Skill::Dig => 'D',
        Skill::Freeball => 'F',
        _ => '~',
    }
}

/// A short, clean match: two side-outs, an ace and another side-out.
pub fn clean_log() -> LogBuilder {
    LogBuilder::new().side_out().side_out().ace().side_out()
}

/// Rosters with roles for every lineup player and one libero per team.
pub fn full_roster() -> Roster {
    let team = |name: &str, numbers: [u32; 6], libero: u32| {
        let mut players: Vec<RosterEntry> = numbers
            .iter()
            .map(|&n| {
                RosterEntry::new(n, format!("Player {n}"))
                    .with_player_id(format!("{name}-{n}"))
                    .with_role("outside")
            })
            .collect();
        players.push(
            RosterEntry::new(libero, format!("Player {libero}"))
                .with_player_id(format!("{name}-{libero}"))
                .with_role("libero")
                .with_special_role("L"),
        );
        TeamRoster::new(name, players)
    };
    Roster::new(
        team("Lions", HOME_LINEUP, 9),
        team("Tigers", VISITING_LINEUP, 19),
    )
}

pub fn messages(diagnostics: &[dvw_validate::Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
