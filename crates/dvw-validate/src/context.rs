//! Shared inputs handed to every rule.

use dvw_model::{FileType, PlayLog, PlayRecord, Roster, TeamSide, ValidateOptions};

use crate::issue::Issue;

/// Read-only view of one validation run.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub log: &'a PlayLog,
    pub roster: &'a Roster,
    pub options: &'a ValidateOptions,
    pub file_type: FileType,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        log: &'a PlayLog,
        roster: &'a Roster,
        options: &'a ValidateOptions,
        file_type: FileType,
    ) -> Self {
        Self {
            log,
            roster,
            options,
            file_type,
        }
    }

    /// Rotation slots per team for this file type.
    pub fn slot_count(&self) -> usize {
        self.file_type.slot_count()
    }

    pub fn team_name(&self, side: TeamSide) -> &'a str {
        self.log.team_name(side)
    }

    /// Rows with their indices.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a PlayRecord)> + use<'a> {
        self.log.records.iter().enumerate()
    }
}

/// An issue located at a row of the play log (or at no row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub issue: Issue,
    /// Index into the play log's rows.
    pub row: Option<usize>,
}

impl Finding {
    pub fn at(row: usize, issue: Issue) -> Self {
        Self {
            issue,
            row: Some(row),
        }
    }

    /// Finding that concerns the roster rather than a row.
    pub fn unlocated(issue: Issue) -> Self {
        Self { issue, row: None }
    }
}
