//! Raw scout file lines and video timestamps.

use std::path::Path;

use chrono::TimeDelta;

use dvw_model::VideoTimeSource;

use crate::error::{IngestError, Result};

/// Field (0-based) of a `;`-separated scout line holding the video offset in seconds.
pub const VIDEO_TIME_FIELD: usize = 12;

/// Read the raw lines of a scout file, stripping a UTF-8 BOM.
pub fn read_source_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    Ok(split_source_lines(&text))
}

/// Split scout text into lines (line `n` of the file is element `n - 1`).
pub fn split_source_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().map(str::to_string).collect()
}

/// Video timestamp of a scout line, read from its thirteenth field.
pub fn video_time_from_raw(raw_line: &str) -> Option<TimeDelta> {
    let field = raw_line.split(';').nth(VIDEO_TIME_FIELD)?.trim();
    let seconds = field.parse::<i64>().ok()?;
    if seconds < 0 {
        return None;
    }
    TimeDelta::try_seconds(seconds)
}

/// Default [`VideoTimeSource`] for scout files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoutLineVideoTime;

impl VideoTimeSource for ScoutLineVideoTime {
    fn video_time(&self, raw_line: &str) -> Option<TimeDelta> {
        video_time_from_raw(raw_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_time_field() {
        let line = "*15SM+~~~78B;s;;;;;;00.22.09;1;1;1;1;1327;;2;15;5;18;13;8;1;4;8;9;17;15;";
        assert_eq!(video_time_from_raw(line), Some(TimeDelta::seconds(1327)));
    }

    #[test]
    fn test_video_time_absent() {
        assert_eq!(video_time_from_raw("*15SM+~~~78B;s;;"), None);
        assert_eq!(video_time_from_raw("*p01:00;;;;;;;;;;;;;"), None);
        assert_eq!(video_time_from_raw(""), None);
    }

    #[test]
    fn test_split_strips_bom() {
        let lines = split_source_lines("\u{feff}[3DATAVOLLEYSCOUT]\r\nline two\n");
        assert_eq!(lines, vec!["[3DATAVOLLEYSCOUT]", "line two"]);
    }
}
