//! Validation rules.
//!
//! Categories classify issues for reporting; the registry lists every rule
//! in run order together with the level and file type it applies to.

mod category;
mod registry;

pub use category::Category;
pub use registry::RuleId;
