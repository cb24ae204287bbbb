//! Roster CSV reading.
//!
//! One row per player: `team` (`home` / `visiting`), `player_id`, `number`,
//! `name`, `role`, `special_role`.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use dvw_model::{Roster, RosterEntry, TeamRoster};

use crate::error::{IngestError, Result};

/// A raw roster row.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRow {
    pub team: String,
    #[serde(default)]
    pub player_id: Option<String>,
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub special_role: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a roster CSV file for a match between `home_team` and `visiting_team`.
pub fn read_roster_csv(path: &Path, home_team: &str, visiting_team: &str) -> Result<Roster> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::io(path, e))?;
    roster_from_reader(file, path, home_team, visiting_team)
}

/// Read roster rows from any reader; `path` is used for error messages only.
pub fn roster_from_reader<R: Read>(
    reader: R,
    path: &Path,
    home_team: &str,
    visiting_team: &str,
) -> Result<Roster> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let mut home = TeamRoster::new(home_team, Vec::new());
    let mut visiting = TeamRoster::new(visiting_team, Vec::new());

    for (idx, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row_number = idx + 2;
        let row = row.map_err(|e| IngestError::RosterRow {
            path: path.to_path_buf(),
            row: row_number,
            message: e.to_string(),
        })?;
        let entry = RosterEntry {
            player_id: non_empty(row.player_id),
            number: row.number,
            name: row.name,
            role: non_empty(row.role),
            special_role: non_empty(row.special_role),
        };
        let team = row.team.trim();
        if team.eq_ignore_ascii_case("home") || team == "*" || team == home_team {
            home.players.push(entry);
        } else if team.eq_ignore_ascii_case("visiting") || team == "a" || team == visiting_team {
            visiting.players.push(entry);
        } else {
            return Err(IngestError::RosterRow {
                path: path.to_path_buf(),
                row: row_number,
                message: format!("unknown team '{team}'"),
            });
        }
    }

    tracing::debug!(
        home_players = home.players.len(),
        visiting_players = visiting.players.len(),
        "roster loaded"
    );
    Ok(Roster::new(home, visiting))
}
