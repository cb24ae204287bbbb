//! Skill chain checks.
//!
//! Compare a touch with the touch immediately before it in the same rally:
//! reception after serve, attack after set, block or dig after attack.

use dvw_model::{PlayRecord, Skill};

use crate::context::{Finding, RuleContext};
use crate::issue::{Issue, ZoneField};
use crate::skill_types::{self, LINKED_SKILLS, TypeLink};

/// Rows of `dependent` skill directly preceded (in the same rally) by `source`.
fn linked_rows<'a>(
    ctx: &RuleContext<'a>,
    source: Skill,
    dependent: Skill,
) -> impl Iterator<Item = (usize, &'a PlayRecord, &'a PlayRecord)> + 'a {
    let log = ctx.log;
    ctx.rows().filter_map(move |(idx, record)| {
        if !record.is_skill(dependent) {
            return None;
        }
        let prev = log.get(log.prev_in_rally(idx)?)?;
        prev.is_skill(source).then_some((idx, prev, record))
    })
}

/// Type mismatches between a dependent touch and its source touch.
pub fn check_type_link(ctx: &RuleContext<'_>, source: Skill, dependent: Skill) -> Vec<Finding> {
    linked_rows(ctx, source, dependent)
        .filter_map(|(idx, prev, record)| {
            let source_type = prev.skill_type.as_deref()?;
            let skill_type = record.skill_type.as_deref()?;
            let link = skill_types::compare(source, source_type, dependent, skill_type);
            (link == TypeLink::Mismatch).then(|| {
                Finding::at(
                    idx,
                    Issue::SkillTypeMismatch {
                        skill: dependent,
                        skill_type: skill_type.to_string(),
                        source_skill: source,
                        source_type: source_type.to_string(),
                    },
                )
            })
        })
        .collect()
}

/// Reception zones that differ from the zones of the serve.
pub fn check_reception_zones(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (idx, serve, reception) in linked_rows(ctx, Skill::Serve, Skill::Reception) {
        let fields = [
            (
                ZoneField::StartZone,
                reception.start_zone.map(|z| z.to_string()),
                serve.start_zone.map(|z| z.to_string()),
            ),
            (
                ZoneField::EndZone,
                reception.end_zone.map(|z| z.to_string()),
                serve.end_zone.map(|z| z.to_string()),
            ),
            (
                ZoneField::EndSubzone,
                reception.end_subzone.clone(),
                serve.end_subzone.clone(),
            ),
        ];
        for (field, received, served) in fields {
            if let (Some(received), Some(served)) = (received, served)
                && received != served
            {
                findings.push(Finding::at(
                    idx,
                    Issue::ReceptionZoneMismatch {
                        field,
                        reception: received,
                        serve: served,
                    },
                ));
            }
        }
    }

    findings
}

/// Type labels the mapping table does not know.
///
/// Each linked pair reports whichever side is unknown; a label seen on
/// several rows is reported on each of them.
pub fn check_unmapped_types(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for &(source, dependent) in LINKED_SKILLS {
        for (idx, prev, record) in linked_rows(ctx, source, dependent) {
            let (Some(source_type), Some(skill_type)) =
                (prev.skill_type.as_deref(), record.skill_type.as_deref())
            else {
                continue;
            };
            if skill_types::compare(source, source_type, dependent, skill_type)
                != TypeLink::Unmapped
            {
                continue;
            }
            if !skill_types::is_mapped(source, source_type) {
                findings.push(Finding::at(
                    idx - 1,
                    Issue::UnmappedSkillType {
                        skill: source,
                        skill_type: source_type.to_string(),
                    },
                ));
            }
            if !skill_types::is_mapped(dependent, skill_type) {
                findings.push(Finding::at(
                    idx,
                    Issue::UnmappedSkillType {
                        skill: dependent,
                        skill_type: skill_type.to_string(),
                    },
                ));
            }
        }
    }

    findings.sort_by_key(|finding| finding.row);
    findings
}
