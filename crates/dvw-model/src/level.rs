//! Finding severity and validation strictness.
//!
//! Every finding carries a [`Severity`]; a run carries a [`ValidationLevel`].
//! A finding is reported when the level includes its severity, which matches
//! the upstream numeric rule `4 - severity <= level`.

use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor or derivable inconsistency.
    Minor,
    /// Likely to cause misinterpretation of the data.
    Moderate,
    /// Structural error in the scouted file.
    Major,
}

impl Severity {
    /// Numeric rank (1 = minor, 3 = major).
    pub fn rank(self) -> u8 {
        match self {
            Self::Minor => 1,
            Self::Moderate => 2,
            Self::Major => 3,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Major => "Major",
        }
    }
}

/// Strictness of a validation run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// No checks at all.
    Off,
    /// Major findings only.
    Major,
    /// Major and moderate findings.
    #[default]
    Standard,
    /// Everything, including minor and derivable findings.
    Strict,
}

impl ValidationLevel {
    /// All levels, least strict first.
    pub const fn all() -> &'static [Self] {
        &[Self::Off, Self::Major, Self::Standard, Self::Strict]
    }

    /// Convert the numeric level (0..=3) used by callers.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Major),
            2 => Some(Self::Standard),
            3 => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn as_level(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Major => 1,
            Self::Standard => 2,
            Self::Strict => 3,
        }
    }

    /// Whether findings of `severity` are reported at this level.
    pub fn includes(self, severity: Severity) -> bool {
        match self {
            Self::Off => false,
            Self::Major => severity == Severity::Major,
            Self::Standard => severity >= Severity::Moderate,
            Self::Strict => true,
        }
    }

    /// The least strict level that reports `severity`.
    pub fn minimum_for(severity: Severity) -> Self {
        match severity {
            Severity::Major => Self::Major,
            Severity::Moderate => Self::Standard,
            Severity::Minor => Self::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_matches_numeric_threshold() {
        for level in ValidationLevel::all() {
            for severity in [Severity::Minor, Severity::Moderate, Severity::Major] {
                let numeric = 4 - i16::from(severity.rank()) <= i16::from(level.as_level());
                assert_eq!(level.includes(severity), numeric, "{level:?} {severity:?}");
            }
        }
    }

    #[test]
    fn from_level_rejects_out_of_range() {
        assert_eq!(ValidationLevel::from_level(2), Some(ValidationLevel::Standard));
        assert_eq!(ValidationLevel::from_level(4), None);
    }

    #[test]
    fn minimum_level_includes_its_severity() {
        for severity in [Severity::Minor, Severity::Moderate, Severity::Major] {
            let level = ValidationLevel::minimum_for(severity);
            assert!(level.includes(severity));
        }
    }
}
