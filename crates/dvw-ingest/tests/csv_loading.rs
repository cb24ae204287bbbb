//! Loading play logs and rosters from CSV files.

use std::io::Write;
use std::path::Path;

use dvw_ingest::{IngestError, read_play_log_csv, read_roster_csv, split_source_lines};
use dvw_model::{Skill, TeamSide};
use tempfile::NamedTempFile;

const SLOTS: &str = "1,2,3,4,5,6,11,12,13,14,15,16";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn play_log_csv() -> String {
    let header = "skill,skill_type,team,player_number,evaluation_code,point_id,set_number,\
home_team_score,visiting_team_score,home_team,visiting_team,point_won_by,file_line_number,code,\
home_p1,home_p2,home_p3,home_p4,home_p5,home_p6,\
visiting_p1,visiting_p2,visiting_p3,visiting_p4,visiting_p5,visiting_p6";
    let rows = [
        format!("Serve,Jump serve,Lions,1,+,1,1,0,0,Lions,Tigers,Tigers,3,*01SQ+,{SLOTS}"),
        format!(
            "Reception,Jump serve reception,Tigers,16,#,1,1,0,0,Lions,Tigers,Tigers,4,a16RQ#,{SLOTS}"
        ),
        format!(",,,,,1,1,0,1,Lions,Tigers,Tigers,5,ap00:01,{SLOTS}"),
    ];
    format!("{header}\n{}\n", rows.join("\n"))
}

#[test]
fn play_log_csv_round_trips_into_records() {
    let file = write_temp(&play_log_csv());
    let source = split_source_lines("[3DATAVOLLEYSCOUT]\n[3SCOUT]\n*01SQ+;;;;;;;;;;;;12;\n");
    let log = read_play_log_csv(file.path(), source).unwrap();

    assert_eq!(log.len(), 3);
    assert_eq!(log.home_team, "Lions");
    assert_eq!(log.visiting_team, "Tigers");

    let serve = &log.records[0];
    assert_eq!(serve.skill, Some(Skill::Serve));
    assert_eq!(serve.team, Some(TeamSide::Home));
    assert_eq!(serve.skill_type.as_deref(), Some("Jump serve"));
    assert_eq!(serve.file_line_number, Some(3));
    assert_eq!(log.source_line(3), Some("*01SQ+;;;;;;;;;;;;12;"));

    let reception = &log.records[1];
    assert_eq!(reception.team, Some(TeamSide::Visiting));
    assert_eq!(reception.player_number, Some(16));
    assert_eq!(reception.visiting_slots[5], Some(16));

    let point = &log.records[2];
    assert_eq!(point.skill, None);
    assert_eq!(point.player_number, None);
    assert_eq!(point.point_won_by, Some(TeamSide::Visiting));
    assert_eq!(point.scores(), Some((0, 1)));
    assert_eq!(log.rallies().len(), 1);
}

#[test]
fn play_log_csv_missing_columns() {
    let file = write_temp("skill,team\nServe,Lions\n");
    let err = read_play_log_csv(file.path(), Vec::new()).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumns { .. }));
}

#[test]
fn missing_file_is_reported() {
    let err = read_play_log_csv(Path::new("/nonexistent/plays.csv"), Vec::new()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn roster_csv_splits_teams() {
    let file = write_temp(
        "team,player_id,number,name,role,special_role\n\
home,L-1,1,Ana,setter,C\n\
Tigers,T-9,9,Bo,libero,L\n\
a,T-10,10,Cy,,\n",
    );
    let roster = read_roster_csv(file.path(), "Lions", "Tigers").unwrap();

    assert_eq!(roster.home.players.len(), 1);
    assert_eq!(roster.visiting.players.len(), 2);
    assert!(roster.visiting.is_libero(9));
    assert_eq!(roster.visiting.find(10).and_then(|p| p.role.clone()), None);
}
