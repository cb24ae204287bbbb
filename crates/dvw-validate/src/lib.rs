//! Play log validation.
//!
//! Checks a parsed scout file for internal consistency:
//!
//! - **Roster**: duplicate player ids, missing positions
//! - **Skill chains**: reception/serve, attack/set, block and dig/attack types and zones
//! - **Court positions**: back-row attacks and blocks, server position
//! - **Serves**: ace coding, serve counts, missing receptions
//! - **Blocks**: blocker counts on blocked attacks
//! - **Lineups**: players outside the rotation, libero restrictions
//! - **Row sequence**: repeated rows, consecutive touches by one player
//! - **Points and scores**: point attribution, score progression
//! - **Rotation**: lineup changes and substitutions
//!
//! # Example
//!
//! ```ignore
//! use dvw_validate::validate;
//!
//! let diagnostics = validate(&log, &roster, 2, &ValidateOptions::default(), "indoor")?;
//! for diagnostic in &diagnostics {
//!     println!("{:?}: {}", diagnostic.file_line_number, diagnostic.message);
//! }
//! ```

mod checks;
pub mod context;
pub mod error;
pub mod issue;
pub mod report;
pub mod rotation;
pub mod rules;
pub mod skill_types;
mod validator;

use polars::prelude::DataFrame;

use dvw_ingest::play_log_from_dataframe;
use dvw_model::{FileType, PlayLog, Roster, ValidateOptions, ValidationLevel};

pub use context::{Finding, RuleContext};
pub use error::{Result, ValidateError};
pub use issue::Issue;
pub use report::{Diagnostic, Reporter, RuleCount, SeverityCounts, ValidationReport};
pub use rules::{Category, RuleId};
pub use validator::Validator;

/// Parse the numeric validation level (0..=3).
pub fn parse_level(level: u8) -> Result<ValidationLevel> {
    ValidationLevel::from_level(level).ok_or_else(|| {
        ValidateError::invalid_argument(format!("validation level must be 0, 1, 2 or 3 (got {level})"))
    })
}

/// Parse the file type selector ("indoor" or "beach").
pub fn parse_file_type(file_type: &str) -> Result<FileType> {
    FileType::parse(file_type).ok_or_else(|| {
        ValidateError::invalid_argument(format!(
            "file type must be \"indoor\" or \"beach\" (got \"{file_type}\")"
        ))
    })
}

/// Build a validator from caller arguments.
pub fn validator(level: u8, options: &ValidateOptions, file_type: &str) -> Result<Validator<'static>> {
    let level = parse_level(level)?;
    let file_type = parse_file_type(file_type)?;
    options.check()?;
    Ok(Validator::new(level, file_type).with_options(options.clone()))
}

/// Validate a play log and return its diagnostics in rule order.
pub fn validate(
    log: &PlayLog,
    roster: &Roster,
    level: u8,
    options: &ValidateOptions,
    file_type: &str,
) -> Result<Vec<Diagnostic>> {
    let validator = validator(level, options, file_type)?;
    Ok(validator.run(log, roster).into_diagnostics())
}

/// Validate a play log held in a DataFrame with the upstream column names.
pub fn validate_frame(
    df: &DataFrame,
    source_lines: Vec<String>,
    roster: &Roster,
    level: u8,
    options: &ValidateOptions,
    file_type: &str,
) -> Result<Vec<Diagnostic>> {
    let validator = validator(level, options, file_type)?;
    let log = play_log_from_dataframe(df, source_lines)?;
    Ok(validator.run(&log, roster).into_diagnostics())
}
