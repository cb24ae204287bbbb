//! Validation of play logs supplied as DataFrames.

use chrono::TimeDelta;
use dvw_model::{Roster, ValidateOptions};
use dvw_validate::{ValidateError, validate_frame};
use polars::prelude::*;

const HOME: [i64; 6] = [1, 2, 3, 4, 5, 6];
const VISITING: [i64; 6] = [11, 12, 13, 14, 15, 16];

/// Serve, mismatched reception, kill and point marker.
fn play_frame(with_home_p6: bool) -> DataFrame {
    let rows = 4;
    let mut columns = vec![
        Series::new(
            "skill".into(),
            &[Some("Serve"), Some("Reception"), Some("Attack"), None],
        )
        .into_column(),
        Series::new(
            "skill_type".into(),
            &[
                Some("Float serve"),
                Some("Jump-float serve reception"),
                Some("High ball attack"),
                None,
            ],
        )
        .into_column(),
        Series::new(
            "team".into(),
            &[Some("Lions"), Some("Tigers"), Some("Tigers"), None],
        )
        .into_column(),
        Series::new("player_number".into(), &[Some(1i64), Some(16), Some(14), None])
            .into_column(),
        Series::new(
            "evaluation_code".into(),
            &[Some("+"), Some("#"), Some("#"), None],
        )
        .into_column(),
        Series::new("start_zone".into(), &[Some(1i64), Some(1), Some(4), None]).into_column(),
        Series::new("end_zone".into(), &[Some(5i64), Some(5), None, None]).into_column(),
        Series::new("point_id".into(), &[1i64; 4]).into_column(),
        Series::new("set_number".into(), &[1i64; 4]).into_column(),
        Series::new("home_team_score".into(), &[0i64; 4]).into_column(),
        Series::new("visiting_team_score".into(), &[0i64, 0, 0, 1]).into_column(),
        Series::new("home_team".into(), &["Lions"; 4]).into_column(),
        Series::new("visiting_team".into(), &["Tigers"; 4]).into_column(),
        Series::new("point_won_by".into(), &["Tigers"; 4]).into_column(),
        Series::new("file_line_number".into(), &[3i64, 4, 5, 6]).into_column(),
        Series::new(
            "code".into(),
            &["*01SH+~~~15A", "a16RM#~~~15A", "a14AH#V54", "ap00:01"],
        )
        .into_column(),
    ];
    for (slot, player) in HOME.iter().enumerate() {
        if slot == 5 && !with_home_p6 {
            continue;
        }
        let name = format!("home_p{}", slot + 1);
        columns.push(Series::new(name.as_str().into(), &vec![*player; rows]).into_column());
    }
    for (slot, player) in VISITING.iter().enumerate() {
        let name = format!("visiting_p{}", slot + 1);
        columns.push(Series::new(name.as_str().into(), &vec![*player; rows]).into_column());
    }
    DataFrame::new(columns).expect("valid frame")
}

fn source_lines() -> Vec<String> {
    vec![
        "[3DATAVOLLEYSCOUT]".to_string(),
        "[3SCOUT]".to_string(),
        "*01SH+~~~15A;;;;;;;;;;;;610;".to_string(),
        "a16RM#~~~15A;;;;;;;;;;;;611;".to_string(),
        "a14AH#V54;;;;;;;;;;;;614;".to_string(),
        "ap00:01;;;;;;;;;;;;615;".to_string(),
    ]
}

#[test]
fn frame_diagnostics_point_at_source_lines() {
    let diagnostics = validate_frame(
        &play_frame(true),
        source_lines(),
        &Roster::default(),
        2,
        &ValidateOptions::default(),
        "indoor",
    )
    .unwrap();

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(
        diagnostic.message,
        "Reception type (Jump-float serve reception) does not match serve type (Float serve)"
    );
    assert_eq!(diagnostic.file_line_number, Some(4));
    assert_eq!(
        diagnostic.file_line.as_deref(),
        Some("a16RM#~~~15A;;;;;;;;;;;;611;")
    );
    assert_eq!(diagnostic.video_time, Some(TimeDelta::seconds(611)));
}

#[test]
fn frame_without_source_lines_has_no_line_text() {
    let diagnostics = validate_frame(
        &play_frame(true),
        Vec::new(),
        &Roster::default(),
        2,
        &ValidateOptions::default(),
        "indoor",
    )
    .unwrap();

    assert_eq!(diagnostics[0].file_line_number, Some(4));
    assert_eq!(diagnostics[0].file_line, None);
    assert_eq!(diagnostics[0].video_time, None);
}

#[test]
fn missing_required_column_is_an_invalid_argument() {
    let err = validate_frame(
        &play_frame(false),
        source_lines(),
        &Roster::default(),
        2,
        &ValidateOptions::default(),
        "indoor",
    )
    .unwrap_err();

    let ValidateError::InvalidArgument { message } = err else {
        panic!("expected invalid argument, got {err:?}");
    };
    assert!(message.contains("home_p6"), "{message}");
}

#[test]
fn diagnostics_serialize_for_reporting() {
    let diagnostics = validate_frame(
        &play_frame(true),
        source_lines(),
        &Roster::default(),
        2,
        &ValidateOptions::default(),
        "indoor",
    )
    .unwrap();

    insta::assert_json_snapshot!(diagnostics, @r#"
    [
      {
        "message": "Reception type (Jump-float serve reception) does not match serve type (Float serve)",
        "file_line_number": 4,
        "video_time": 611,
        "file_line": "a16RM#~~~15A;;;;;;;;;;;;611;"
      }
    ]
    "#);
}
