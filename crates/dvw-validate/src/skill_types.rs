//! Skill type mapping.
//!
//! A dependent touch inherits its type from the touch it answers: a
//! reception from the serve, an attack from the set, a block or dig from
//! the attack. The expected dependent label is looked up in an explicit
//! table rather than derived by editing the source label, so labels the
//! table does not know are reported instead of silently compared.

use dvw_model::Skill;

/// Serve types and the reception type each one implies.
const SERVE_TYPES: &[(&str, &str)] = &[
    ("Float serve", "Float serve reception"),
    ("Jump-float serve", "Jump-float serve reception"),
    ("Jump serve", "Jump serve reception"),
    ("Topspin serve", "Topspin serve reception"),
    ("Hybrid serve", "Hybrid serve reception"),
    ("Other serve", "Other serve reception"),
];

/// Tempo family labels for set, attack, block and dig.
struct TempoRow {
    set: &'static str,
    attack: &'static str,
    block: &'static str,
    dig: &'static str,
}

const TEMPO_TYPES: &[TempoRow] = &[
    TempoRow {
        set: "High ball set",
        attack: "High ball attack",
        block: "High ball block",
        dig: "High ball dig",
    },
    TempoRow {
        set: "Half ball set",
        attack: "Half ball attack",
        block: "Half ball block",
        dig: "Half ball dig",
    },
    TempoRow {
        set: "Quick ball set",
        attack: "Quick ball attack",
        block: "Quick ball block",
        dig: "Quick ball dig",
    },
    TempoRow {
        set: "Head ball set",
        attack: "Head ball attack",
        block: "Head ball block",
        dig: "Head ball dig",
    },
    TempoRow {
        set: "Super ball set",
        attack: "Super ball attack",
        block: "Super ball block",
        dig: "Super ball dig",
    },
    TempoRow {
        set: "Fast ball set",
        attack: "Fast ball attack",
        block: "Fast ball block",
        dig: "Fast ball dig",
    },
    TempoRow {
        set: "Slide ball set",
        attack: "Slide ball attack",
        block: "Slide ball block",
        dig: "Slide ball dig",
    },
    TempoRow {
        set: "Other set",
        attack: "Other attack",
        block: "Other block",
        dig: "Other dig",
    },
];

impl TempoRow {
    fn label(&self, skill: Skill) -> Option<&'static str> {
        match skill {
            Skill::Set => Some(self.set),
            Skill::Attack => Some(self.attack),
            Skill::Block => Some(self.block),
            Skill::Dig => Some(self.dig),
            _ => None,
        }
    }
}

/// Skill pairs whose types are linked, as (source, dependent).
pub const LINKED_SKILLS: &[(Skill, Skill)] = &[
    (Skill::Serve, Skill::Reception),
    (Skill::Set, Skill::Attack),
    (Skill::Attack, Skill::Block),
    (Skill::Attack, Skill::Dig),
];

/// `Unknown ... type` labels stand for a type the scout did not record.
pub fn is_placeholder(label: &str) -> bool {
    let label = label.trim();
    label.starts_with("Unknown") && label.ends_with("type")
}

/// Whether the table knows `label` as a type of `skill`.
pub fn is_mapped(skill: Skill, label: &str) -> bool {
    let label = label.trim();
    match skill {
        Skill::Serve => SERVE_TYPES.iter().any(|(serve, _)| label == *serve),
        Skill::Reception => SERVE_TYPES
            .iter()
            .any(|(_, reception)| label == *reception),
        Skill::Set | Skill::Attack | Skill::Block | Skill::Dig => TEMPO_TYPES
            .iter()
            .any(|row| row.label(skill) == Some(label)),
        _ => false,
    }
}

/// Type a `dependent` touch should carry after a `source` touch of `source_type`.
pub fn expected_type(source: Skill, source_type: &str, dependent: Skill) -> Option<&'static str> {
    let source_type = source_type.trim();
    match (source, dependent) {
        (Skill::Serve, Skill::Reception) => SERVE_TYPES
            .iter()
            .find(|(serve, _)| *serve == source_type)
            .map(|(_, reception)| *reception),
        _ if LINKED_SKILLS.contains(&(source, dependent)) => TEMPO_TYPES
            .iter()
            .find(|row| row.label(source) == Some(source_type))
            .and_then(|row| row.label(dependent)),
        _ => None,
    }
}

/// Outcome of comparing a dependent type with its source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLink {
    /// Types agree.
    Consistent,
    /// Both types are known and disagree.
    Mismatch,
    /// One side is an `Unknown ... type` placeholder.
    Placeholder,
    /// The table does not know one of the labels.
    Unmapped,
}

/// Compare the type of a dependent touch with the touch it answers.
pub fn compare(source: Skill, source_type: &str, dependent: Skill, dependent_type: &str) -> TypeLink {
    if is_placeholder(source_type) || is_placeholder(dependent_type) {
        return TypeLink::Placeholder;
    }
    if !is_mapped(dependent, dependent_type) {
        return TypeLink::Unmapped;
    }
    match expected_type(source, source_type, dependent) {
        None => TypeLink::Unmapped,
        Some(expected) if expected == dependent_type.trim() => TypeLink::Consistent,
        Some(_) => TypeLink::Mismatch,
    }
}
