//! CSV loading for play logs and rosters.

mod reader;
mod roster;

pub use reader::{MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_play_log_csv};
pub use roster::{RosterRow, read_roster_csv, roster_from_reader};
