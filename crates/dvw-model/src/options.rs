//! Configuration options for play log validation.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Attack combination codes treated as setter tips by default.
pub const DEFAULT_SETTER_TIP_CODES: &[&str] = &["PP"];

/// Kind of match the scout file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Indoor,
    Beach,
}

impl FileType {
    /// Parse the file type selector ("indoor" or "beach").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "indoor" => Some(Self::Indoor),
            "beach" => Some(Self::Beach),
            _ => None,
        }
    }

    /// Number of rotation slots per team.
    pub fn slot_count(self) -> usize {
        match self {
            Self::Indoor => 6,
            Self::Beach => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Beach => "beach",
        }
    }
}

/// Caller-supplied validation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Attack codes exempt from the back-row attack check.
    ///
    /// A setter dumping the ball over from the back row is scouted as an
    /// attack from a front-row zone, so these codes are excused.
    pub setter_tip_codes: Vec<String>,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            setter_tip_codes: DEFAULT_SETTER_TIP_CODES
                .iter()
                .map(|code| (*code).to_string())
                .collect(),
        }
    }
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setter_tip_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.setter_tip_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.check()?;
        Ok(options)
    }

    /// Reject options that cannot be applied.
    pub fn check(&self) -> Result<()> {
        if let Some(position) = self
            .setter_tip_codes
            .iter()
            .position(|code| code.trim().is_empty())
        {
            return Err(ModelError::InvalidOptions(format!(
                "setter tip code at position {position} is blank"
            )));
        }
        Ok(())
    }

    /// Whether an attack code is exempt from the back-row attack check.
    pub fn is_setter_tip(&self, attack_code: &str) -> bool {
        let code = attack_code.trim();
        self.setter_tip_codes
            .iter()
            .any(|tip| tip.trim().eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_parse() {
        assert_eq!(FileType::parse("Indoor"), Some(FileType::Indoor));
        assert_eq!(FileType::parse(" beach "), Some(FileType::Beach));
        assert_eq!(FileType::parse("snow"), None);
        assert_eq!(FileType::Beach.slot_count(), 2);
    }

    #[test]
    fn blank_setter_tip_code_is_rejected() {
        let options = ValidateOptions::new().with_setter_tip_codes(["PP", " "]);
        assert!(matches!(options.check(), Err(ModelError::InvalidOptions(_))));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let options = ValidateOptions::from_json("{}").unwrap();
        assert!(options.is_setter_tip("pp"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = ValidateOptions::from_json(r#"{"setter_tip_codes": "PP"}"#);
        assert!(matches!(result, Err(ModelError::Json(_))));
    }
}
