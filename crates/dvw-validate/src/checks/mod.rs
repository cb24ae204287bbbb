//! Rule implementations.
//!
//! Each submodule exposes `check_*` functions taking a [`RuleContext`] and
//! returning the findings of one rule in row order.

mod blocking;
mod chains;
mod lineup;
mod points;
mod positions;
mod roster;
mod rotation;
mod scores;
mod sequence;
mod serve;

use dvw_model::Skill;

use crate::context::{Finding, RuleContext};
use crate::rules::RuleId;

/// Run a single rule.
pub fn run(rule: RuleId, ctx: &RuleContext<'_>) -> Vec<Finding> {
    match rule {
        RuleId::DuplicatePlayerIds => roster::check_duplicate_ids(ctx),
        RuleId::MissingPlayerRoles => roster::check_missing_roles(ctx),
        RuleId::ReceptionServeType => chains::check_type_link(ctx, Skill::Serve, Skill::Reception),
        RuleId::ReceptionServeZones => chains::check_reception_zones(ctx),
        RuleId::AttackSetType => chains::check_type_link(ctx, Skill::Set, Skill::Attack),
        RuleId::BlockAttackType => chains::check_type_link(ctx, Skill::Attack, Skill::Block),
        RuleId::DigAttackType => chains::check_type_link(ctx, Skill::Attack, Skill::Dig),
        RuleId::UnmappedSkillTypes => chains::check_unmapped_types(ctx),
        RuleId::BackRowAttack => positions::check_back_row_attack(ctx),
        RuleId::FrontRowAttackFromBackZone => positions::check_front_row_attack(ctx),
        RuleId::BackRowBlock => positions::check_back_row_block(ctx),
        RuleId::ServerPosition => positions::check_server_position(ctx),
        RuleId::AceCoding => serve::check_ace_coding(ctx),
        RuleId::MultipleServes => serve::check_multiple_serves(ctx),
        RuleId::ServeWithoutReception => serve::check_serve_without_reception(ctx),
        RuleId::MissingBlockerCount => blocking::check_missing_count(ctx),
        RuleId::NoBlockContradicted => blocking::check_no_block(ctx),
        RuleId::PlayerNotInRotation => lineup::check_player_in_rotation(ctx),
        RuleId::LiberoSkills => lineup::check_libero_skills(ctx),
        RuleId::DuplicateRows => sequence::check_duplicate_rows(ctx),
        RuleId::ConsecutiveSamePlayer => sequence::check_consecutive_player(ctx),
        RuleId::PointAfterError => points::check_after_error(ctx),
        RuleId::PointAfterWinningAction => points::check_after_winning_action(ctx),
        RuleId::PointScoreSequence => scores::check_point_sequence(ctx),
        RuleId::RowScoreSequence => scores::check_row_sequence(ctx),
        RuleId::RotationChange => rotation::check_rotation_change(ctx),
        RuleId::SubstitutionUnchanged => rotation::check_substitution_unchanged(ctx),
        RuleId::SubstitutionConflict => rotation::check_substitution_conflict(ctx),
    }
}
