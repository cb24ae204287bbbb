//! Rule registry.

use serde::{Deserialize, Serialize};

use dvw_model::{FileType, Severity, ValidationLevel};

use super::Category;

/// Identifier of a validation rule.
///
/// [`RuleId::ALL`] is the run order; findings are reported in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    DuplicatePlayerIds,
    MissingPlayerRoles,
    ReceptionServeType,
    ReceptionServeZones,
    AttackSetType,
    BlockAttackType,
    DigAttackType,
    UnmappedSkillTypes,
    BackRowAttack,
    FrontRowAttackFromBackZone,
    BackRowBlock,
    ServerPosition,
    AceCoding,
    MultipleServes,
    ServeWithoutReception,
    MissingBlockerCount,
    NoBlockContradicted,
    PlayerNotInRotation,
    LiberoSkills,
    DuplicateRows,
    ConsecutiveSamePlayer,
    PointAfterError,
    PointAfterWinningAction,
    PointScoreSequence,
    RowScoreSequence,
    RotationChange,
    SubstitutionUnchanged,
    SubstitutionConflict,
}

impl RuleId {
    /// All rules in run order.
    pub const ALL: [RuleId; 28] = [
        RuleId::DuplicatePlayerIds,
        RuleId::MissingPlayerRoles,
        RuleId::ReceptionServeType,
        RuleId::ReceptionServeZones,
        RuleId::AttackSetType,
        RuleId::BlockAttackType,
        RuleId::DigAttackType,
        RuleId::UnmappedSkillTypes,
        RuleId::BackRowAttack,
        RuleId::FrontRowAttackFromBackZone,
        RuleId::BackRowBlock,
        RuleId::ServerPosition,
        RuleId::AceCoding,
        RuleId::MultipleServes,
        RuleId::ServeWithoutReception,
        RuleId::MissingBlockerCount,
        RuleId::NoBlockContradicted,
        RuleId::PlayerNotInRotation,
        RuleId::LiberoSkills,
        RuleId::DuplicateRows,
        RuleId::ConsecutiveSamePlayer,
        RuleId::PointAfterError,
        RuleId::PointAfterWinningAction,
        RuleId::PointScoreSequence,
        RuleId::RowScoreSequence,
        RuleId::RotationChange,
        RuleId::SubstitutionUnchanged,
        RuleId::SubstitutionConflict,
    ];

    /// Stable kebab-case identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::DuplicatePlayerIds => "duplicate-player-ids",
            Self::MissingPlayerRoles => "missing-player-roles",
            Self::ReceptionServeType => "reception-serve-type",
            Self::ReceptionServeZones => "reception-serve-zones",
            Self::AttackSetType => "attack-set-type",
            Self::BlockAttackType => "block-attack-type",
            Self::DigAttackType => "dig-attack-type",
            Self::UnmappedSkillTypes => "unmapped-skill-types",
            Self::BackRowAttack => "back-row-attack",
            Self::FrontRowAttackFromBackZone => "front-row-attack-from-back-zone",
            Self::BackRowBlock => "back-row-block",
            Self::ServerPosition => "server-position",
            Self::AceCoding => "ace-coding",
            Self::MultipleServes => "multiple-serves",
            Self::ServeWithoutReception => "serve-without-reception",
            Self::MissingBlockerCount => "missing-blocker-count",
            Self::NoBlockContradicted => "no-block-contradicted",
            Self::PlayerNotInRotation => "player-not-in-rotation",
            Self::LiberoSkills => "libero-skills",
            Self::DuplicateRows => "duplicate-rows",
            Self::ConsecutiveSamePlayer => "consecutive-same-player",
            Self::PointAfterError => "point-after-error",
            Self::PointAfterWinningAction => "point-after-winning-action",
            Self::PointScoreSequence => "point-score-sequence",
            Self::RowScoreSequence => "row-score-sequence",
            Self::RotationChange => "rotation-change",
            Self::SubstitutionUnchanged => "substitution-unchanged",
            Self::SubstitutionConflict => "substitution-conflict",
        }
    }

    /// Look a rule up by its identifier.
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.id().eq_ignore_ascii_case(id))
    }

    pub fn category(&self) -> Category {
        match self {
            Self::DuplicatePlayerIds | Self::MissingPlayerRoles => Category::Roster,
            Self::ReceptionServeType
            | Self::ReceptionServeZones
            | Self::AttackSetType
            | Self::BlockAttackType
            | Self::DigAttackType
            | Self::UnmappedSkillTypes => Category::SkillChain,
            Self::BackRowAttack
            | Self::FrontRowAttackFromBackZone
            | Self::BackRowBlock
            | Self::ServerPosition => Category::CourtPosition,
            Self::AceCoding | Self::MultipleServes | Self::ServeWithoutReception => {
                Category::Serve
            }
            Self::MissingBlockerCount | Self::NoBlockContradicted => Category::Block,
            Self::PlayerNotInRotation | Self::LiberoSkills => Category::Lineup,
            Self::DuplicateRows | Self::ConsecutiveSamePlayer => Category::RowSequence,
            Self::PointAfterError | Self::PointAfterWinningAction => Category::Points,
            Self::PointScoreSequence | Self::RowScoreSequence => Category::Score,
            Self::RotationChange | Self::SubstitutionUnchanged | Self::SubstitutionConflict => {
                Category::Rotation
            }
        }
    }

    /// Severity of the findings this rule produces.
    pub fn severity(&self) -> Severity {
        match self {
            Self::ReceptionServeZones | Self::UnmappedSkillTypes | Self::MissingBlockerCount => {
                Severity::Minor
            }
            Self::ReceptionServeType
            | Self::AttackSetType
            | Self::BlockAttackType
            | Self::DigAttackType
            | Self::FrontRowAttackFromBackZone
            | Self::ServeWithoutReception => Severity::Moderate,
            _ => Severity::Major,
        }
    }

    /// Least strict level at which the rule runs.
    ///
    /// Usually the level that reports the rule's severity; the derived
    /// attack/block/dig type checks only run at the strict level.
    pub fn min_level(&self) -> ValidationLevel {
        match self {
            Self::AttackSetType | Self::BlockAttackType | Self::DigAttackType => {
                ValidationLevel::Strict
            }
            _ => ValidationLevel::minimum_for(self.severity()),
        }
    }

    /// Rules that assume six-player rotations and liberos.
    pub fn indoor_only(&self) -> bool {
        matches!(
            self,
            Self::MissingPlayerRoles
                | Self::BackRowAttack
                | Self::FrontRowAttackFromBackZone
                | Self::BackRowBlock
                | Self::ServerPosition
                | Self::LiberoSkills
        )
    }

    /// Whether the rule runs for this level and file type.
    pub fn applies(&self, level: ValidationLevel, file_type: FileType) -> bool {
        level >= self.min_level() && (file_type == FileType::Indoor || !self.indoor_only())
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DuplicatePlayerIds => "Players on one team share a player ID",
            Self::MissingPlayerRoles => "Roster entries without a position",
            Self::ReceptionServeType => "Reception type does not follow the serve type",
            Self::ReceptionServeZones => "Reception zones differ from the serve zones",
            Self::AttackSetType => "Attack type does not follow the set type",
            Self::BlockAttackType => "Block type does not follow the attack type",
            Self::DigAttackType => "Dig type does not follow the attack type",
            Self::UnmappedSkillTypes => "Skill types missing from the type mapping",
            Self::BackRowAttack => "Back-row attacks from front-row zones",
            Self::FrontRowAttackFromBackZone => "Front-row attacks from back-row zones",
            Self::BackRowBlock => "Blocks by back-row players",
            Self::ServerPosition => "Server is not in position 1",
            Self::AceCoding => "Aces that are missing or incorrectly coded",
            Self::MultipleServes => "Rallies with more than one serve",
            Self::ServeWithoutReception => "Serves in play without a reception",
            Self::MissingBlockerCount => "Blocked attacks without a blocker count",
            Self::NoBlockContradicted => "Blocked attacks recorded as \"No block\"",
            Self::PlayerNotInRotation => "Acting players missing from the rotation",
            Self::LiberoSkills => "Libero serves, attacks or blocks",
            Self::DuplicateRows => "Repeated rows",
            Self::ConsecutiveSamePlayer => "Same player on consecutive touches",
            Self::PointAfterError => "Point awarded to the team that erred",
            Self::PointAfterWinningAction => "Point not awarded after a winning action",
            Self::PointScoreSequence => "Point-by-point score progression",
            Self::RowScoreSequence => "Row-by-row score progression",
            Self::RotationChange => "Lineup changes that are not rotations",
            Self::SubstitutionUnchanged => "Substitutions that leave the lineup unchanged",
            Self::SubstitutionConflict => "Substitutions that disagree with the lineup",
        }
    }
}
