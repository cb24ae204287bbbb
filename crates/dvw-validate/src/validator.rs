//! Validation runs.

use dvw_ingest::ScoutLineVideoTime;
use dvw_model::{FileType, PlayLog, Roster, ValidateOptions, ValidationLevel, VideoTimeSource};

use crate::checks;
use crate::context::RuleContext;
use crate::report::{Reporter, ValidationReport};
use crate::rules::RuleId;

static SCOUT_LINE_VIDEO_TIME: ScoutLineVideoTime = ScoutLineVideoTime;

/// Configured validation run.
///
/// ```ignore
/// let report = Validator::new(ValidationLevel::Standard, FileType::Indoor)
///     .with_options(ValidateOptions::new().with_setter_tip_codes(["PP", "PR"]))
///     .run(&log, &roster);
/// ```
#[derive(Clone)]
pub struct Validator<'v> {
    level: ValidationLevel,
    file_type: FileType,
    options: ValidateOptions,
    video: &'v dyn VideoTimeSource,
}

impl Validator<'static> {
    /// Validator reading video times from scout lines.
    pub fn new(level: ValidationLevel, file_type: FileType) -> Self {
        Self {
            level,
            file_type,
            options: ValidateOptions::default(),
            video: &SCOUT_LINE_VIDEO_TIME,
        }
    }
}

impl<'v> Validator<'v> {
    pub fn with_options(mut self, options: ValidateOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a different source for video timestamps.
    pub fn with_video_source<'w>(self, video: &'w dyn VideoTimeSource) -> Validator<'w> {
        Validator {
            level: self.level,
            file_type: self.file_type,
            options: self.options,
            video,
        }
    }

    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Rules that run for this level and file type, in run order.
    pub fn rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        RuleId::ALL
            .into_iter()
            .filter(|rule| rule.applies(self.level, self.file_type))
    }

    /// Validate a play log against its roster.
    pub fn run(&self, log: &PlayLog, roster: &Roster) -> ValidationReport {
        let _span = tracing::info_span!(
            "validate",
            level = self.level.as_level(),
            file_type = self.file_type.label(),
            rows = log.len()
        )
        .entered();

        let ctx = RuleContext::new(log, roster, &self.options, self.file_type);
        let mut reporter = Reporter::new(log, self.video, self.level);

        for rule in self.rules() {
            let findings = checks::run(rule, &ctx);
            tracing::debug!(rule = rule.id(), findings = findings.len(), "rule finished");
            reporter.add_rule(rule, findings);
        }

        let report = reporter.finish();
        tracing::info!(
            diagnostics = report.len(),
            major = report.severity_counts.major,
            moderate = report.severity_counts.moderate,
            minor = report.severity_counts.minor,
            "validation finished"
        );
        report
    }
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("level", &self.level)
            .field("file_type", &self.file_type)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
