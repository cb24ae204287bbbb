//! Conversion of a tabular play log into typed records.

use polars::prelude::DataFrame;

use dvw_model::play::MAX_SLOTS;
use dvw_model::{PlayLog, PlayRecord, Skill, TeamSide};

use crate::column_reader::ColumnReader;
use crate::error::{IngestError, Result};

/// Columns every play log must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "skill",
    "team",
    "player_number",
    "evaluation_code",
    "point_id",
    "set_number",
    "home_team_score",
    "visiting_team_score",
    "home_team",
    "visiting_team",
    "home_p1",
    "home_p2",
    "home_p3",
    "home_p4",
    "home_p5",
    "home_p6",
    "visiting_p1",
    "visiting_p2",
    "visiting_p3",
    "visiting_p4",
    "visiting_p5",
    "visiting_p6",
];

const HOME_SLOT_COLUMNS: [&str; MAX_SLOTS] = [
    "home_p1", "home_p2", "home_p3", "home_p4", "home_p5", "home_p6",
];

const VISITING_SLOT_COLUMNS: [&str; MAX_SLOTS] = [
    "visiting_p1",
    "visiting_p2",
    "visiting_p3",
    "visiting_p4",
    "visiting_p5",
    "visiting_p6",
];

/// Build a [`PlayLog`] from a DataFrame using the upstream column names.
///
/// Fails when any of [`REQUIRED_COLUMNS`] is absent; optional columns read as
/// null when missing.
pub fn play_log_from_dataframe(df: &DataFrame, source_lines: Vec<String>) -> Result<PlayLog> {
    let reader = ColumnReader::new(df);
    let missing = reader.missing_columns(REQUIRED_COLUMNS.iter().copied());
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { columns: missing });
    }

    let home_team = reader.first_non_empty("home_team").unwrap_or_default();
    let visiting_team = reader.first_non_empty("visiting_team").unwrap_or_default();
    if home_team.is_empty() || visiting_team.is_empty() {
        tracing::warn!("play log does not name both teams; team columns will not resolve");
    }
    let resolver = TeamResolver {
        home: &home_team,
        visiting: &visiting_team,
    };

    let mut records = Vec::with_capacity(reader.height());
    let mut unresolved = 0usize;
    for idx in 0..reader.height() {
        let record = read_record(&reader, idx, &resolver, &mut unresolved);
        records.push(record);
    }
    if unresolved > 0 {
        tracing::warn!(
            rows = unresolved,
            "team names that match neither team were read as null"
        );
    }
    tracing::debug!(rows = records.len(), %home_team, %visiting_team, "play log loaded");

    Ok(PlayLog::new(home_team, visiting_team, records).with_source_lines(source_lines))
}

struct TeamResolver<'a> {
    home: &'a str,
    visiting: &'a str,
}

impl TeamResolver<'_> {
    /// Resolve a team name (or the scout team marker `*` / `a`).
    fn resolve(&self, value: &str) -> Option<TeamSide> {
        let value = value.trim();
        if value == "*" || (!self.home.is_empty() && value.eq_ignore_ascii_case(self.home)) {
            Some(TeamSide::Home)
        } else if value == "a"
            || (!self.visiting.is_empty() && value.eq_ignore_ascii_case(self.visiting))
        {
            Some(TeamSide::Visiting)
        } else {
            None
        }
    }
}

fn read_record(
    reader: &ColumnReader<'_>,
    idx: usize,
    teams: &TeamResolver<'_>,
    unresolved: &mut usize,
) -> PlayRecord {
    let mut resolve = |column: &str| {
        let raw = reader.string(column, idx)?;
        let side = teams.resolve(&raw);
        if side.is_none() {
            *unresolved += 1;
        }
        side
    };
    let team = resolve("team");
    let point_won_by = resolve("point_won_by");

    let skill = reader.string("skill", idx).as_deref().and_then(Skill::parse);
    let code = reader.string("code", idx).unwrap_or_default();
    let attack_code = reader
        .string("attack_code", idx)
        .or_else(|| attack_code_from_code(&code, skill));
    let substitution = reader.flag("substitution", idx).unwrap_or(false);

    PlayRecord {
        skill,
        skill_type: reader.string("skill_type", idx),
        evaluation: reader.string("evaluation", idx),
        evaluation_code: reader.string("evaluation_code", idx),
        team,
        player_number: reader.uint("player_number", idx),
        player_id: reader.string("player_id", idx),
        start_zone: reader.uint("start_zone", idx).and_then(|z| u8::try_from(z).ok()),
        end_zone: reader.uint("end_zone", idx).and_then(|z| u8::try_from(z).ok()),
        end_subzone: reader.string("end_subzone", idx),
        num_players: reader.string("num_players", idx),
        attack_code,
        home_slots: HOME_SLOT_COLUMNS.map(|column| reader.uint(column, idx)),
        visiting_slots: VISITING_SLOT_COLUMNS.map(|column| reader.uint(column, idx)),
        substitution,
        code,
        point_id: reader.uint("point_id", idx),
        set_number: reader.uint("set_number", idx),
        home_team_score: reader.uint("home_team_score", idx),
        visiting_team_score: reader.uint("visiting_team_score", idx),
        point_won_by,
        file_line_number: reader
            .uint("file_line_number", idx)
            .and_then(|n| usize::try_from(n).ok()),
    }
}

/// Attack combination code from a compound scout code such as `*15AH#X5~47`.
///
/// The combination occupies characters 7-8 of an attack code.
pub fn attack_code_from_code(code: &str, skill: Option<Skill>) -> Option<String> {
    if skill != Some(Skill::Attack) {
        return None;
    }
    let combination: String = code.chars().skip(6).take(2).collect();
    if combination.chars().count() == 2 && !combination.contains('~') {
        Some(combination)
    } else {
        None
    }
}
