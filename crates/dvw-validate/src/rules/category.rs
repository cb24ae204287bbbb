//! Rule categories.

use serde::{Deserialize, Serialize};

/// Validation rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Roster,
    SkillChain,
    CourtPosition,
    Serve,
    Block,
    Lineup,
    RowSequence,
    Points,
    Score,
    Rotation,
}

impl Category {
    /// Parse category from its label.
    pub fn parse(s: &str) -> Option<Self> {
        let category = match s.trim().to_lowercase().as_str() {
            "roster" => Self::Roster,
            "skill chain" | "skill-chain" | "skillchain" => Self::SkillChain,
            "court position" | "court-position" | "courtposition" => Self::CourtPosition,
            "serve" => Self::Serve,
            "block" => Self::Block,
            "lineup" => Self::Lineup,
            "row sequence" | "row-sequence" | "rowsequence" => Self::RowSequence,
            "points" => Self::Points,
            "score" => Self::Score,
            "rotation" => Self::Rotation,
            _ => return None,
        };
        Some(category)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Roster => "Roster",
            Self::SkillChain => "Skill Chain",
            Self::CourtPosition => "Court Position",
            Self::Serve => "Serve",
            Self::Block => "Block",
            Self::Lineup => "Lineup",
            Self::RowSequence => "Row Sequence",
            Self::Points => "Points",
            Self::Score => "Score",
            Self::Rotation => "Rotation",
        }
    }
}
