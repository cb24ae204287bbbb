//! Model serialization and level properties.

use dvw_model::{
    PlayLog, PlayRecord, Severity, Skill, TeamSide, ValidateOptions, ValidationLevel,
};
use proptest::prelude::*;

#[test]
fn play_log_serializes_round_trip() {
    let record = PlayRecord {
        skill: Some(Skill::Serve),
        skill_type: Some("Jump serve".to_string()),
        team: Some(TeamSide::Home),
        player_number: Some(7),
        home_slots: [Some(7), Some(2), Some(3), Some(4), Some(5), Some(6)],
        point_won_by: Some(TeamSide::Visiting),
        file_line_number: Some(12),
        ..PlayRecord::default()
    };
    let log = PlayLog::new("Lions", "Tigers", vec![record])
        .with_source_lines(vec!["*07SQ-".to_string()]);

    let json = serde_json::to_string(&log).unwrap();
    let parsed: PlayLog = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.records, log.records);
    assert_eq!(parsed.source_lines, log.source_lines);
    assert!(json.contains("\"point_won_by\":\"visiting\""));
}

#[test]
fn options_reject_unknown_shapes() {
    assert!(ValidateOptions::from_json("[]").is_err());
    let options = ValidateOptions::from_json(r#"{"setter_tip_codes": ["PP", "P2"]}"#).unwrap();
    assert!(options.is_setter_tip("p2"));
    assert!(!options.is_setter_tip("X5"));
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Minor),
        Just(Severity::Moderate),
        Just(Severity::Major),
    ]
}

proptest! {
    #[test]
    fn stricter_levels_include_more(a in 0u8..=3, b in 0u8..=3, sev in severity()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = ValidationLevel::from_level(low).unwrap();
        let high = ValidationLevel::from_level(high).unwrap();
        if low.includes(sev) {
            prop_assert!(high.includes(sev));
        }
    }

    #[test]
    fn numeric_levels_round_trip(level in 0u8..=3) {
        let parsed = ValidationLevel::from_level(level).unwrap();
        prop_assert_eq!(parsed.as_level(), level);
    }
}
