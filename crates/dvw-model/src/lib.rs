pub mod error;
pub mod level;
pub mod options;
pub mod play;
pub mod roster;
pub mod video;

pub use error::{ModelError, Result};
pub use level::{Severity, ValidationLevel};
pub use options::{FileType, ValidateOptions};
pub use play::{PlayLog, PlayRecord, Rally, Skill, TeamSide};
pub use roster::{Roster, RosterEntry, TeamRoster};
pub use video::{NoVideoTime, VideoTimeSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_gates_severity() {
        assert!(!ValidationLevel::Off.includes(Severity::Major));
        assert!(ValidationLevel::Major.includes(Severity::Major));
        assert!(!ValidationLevel::Major.includes(Severity::Moderate));
        assert!(ValidationLevel::Standard.includes(Severity::Moderate));
        assert!(!ValidationLevel::Standard.includes(Severity::Minor));
        assert!(ValidationLevel::Strict.includes(Severity::Minor));
    }

    #[test]
    fn options_round_trip_json() {
        let options = ValidateOptions::default().with_setter_tip_codes(["PP", "PR"]);
        let json = serde_json::to_string(&options).expect("serialize options");
        let parsed = ValidateOptions::from_json(&json).expect("parse options");
        assert_eq!(parsed.setter_tip_codes, vec!["PP", "PR"]);
    }
}
