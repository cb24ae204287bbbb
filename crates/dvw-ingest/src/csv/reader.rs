//! Play log CSV reading.

use std::path::Path;

use polars::prelude::*;

use dvw_model::PlayLog;

use crate::error::{IngestError, Result};
use crate::frame::play_log_from_dataframe;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read a play log exported as CSV, attaching the raw scout lines.
pub fn read_play_log_csv(path: &Path, source_lines: Vec<String>) -> Result<PlayLog> {
    check_file_size(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "play log CSV parsed"
    );

    play_log_from_dataframe(&df, source_lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv("a,b\n1,2\n");
        assert!(check_file_size_with_limit(file.path(), 1).is_err());
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = check_file_size(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_columns_surface_from_csv() {
        let file = create_temp_csv("skill,team\nServe,Lions\n");
        let err = read_play_log_csv(file.path(), Vec::new()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns { .. }));
    }
}
