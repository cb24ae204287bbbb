//! Play log ingestion.
//!
//! Turns the upstream parser's tabular output into a typed [`PlayLog`]:
//!
//! - **DataFrame** (`frame`): column checks and typed record conversion
//! - **CSV** (`csv`): play log and roster files
//! - **Source** (`source`): raw scout lines and the default video-time source
//!
//! [`PlayLog`]: dvw_model::PlayLog

pub mod column_reader;
pub mod csv;
pub mod error;
pub mod frame;
pub mod polars_utils;
pub mod source;

pub use column_reader::ColumnReader;
pub use self::csv::{read_play_log_csv, read_roster_csv, roster_from_reader};
pub use error::{IngestError, Result};
pub use frame::{REQUIRED_COLUMNS, attack_code_from_code, play_log_from_dataframe};
pub use polars_utils::{any_to_i64, any_to_string, any_to_string_non_empty};
pub use source::{ScoutLineVideoTime, read_source_lines, split_source_lines, video_time_from_raw};
