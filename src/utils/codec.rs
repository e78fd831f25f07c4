use std::fmt;
use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::models::conversion::FailureKind;

// 讀寫失敗的分類結果，供呼叫端區分 IO 與解析錯誤
#[derive(Debug, Clone)]
pub struct CodecError {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl CodecError {
    fn from_polars(e: PolarsError) -> Self {
        let kind = match &e {
            PolarsError::IO { .. } => FailureKind::Io,
            _ => FailureKind::Parse,
        };
        CodecError {
            kind,
            message: e.to_string(),
        }
    }

    fn from_io(e: std::io::Error) -> Self {
        CodecError {
            kind: FailureKind::Io,
            message: e.to_string(),
        }
    }
}

pub fn read_csv(path: &Path) -> Result<DataFrame, CodecError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(CodecError::from_polars)
}

pub fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<(), CodecError> {
    let file = File::create(path).map_err(CodecError::from_io)?;
    ParquetWriter::new(file)
        .finish(df)
        .map_err(CodecError::from_polars)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_classifies_as_io() {
        let err = read_csv(Path::new("no_such_file.csv")).unwrap_err();
        assert_eq!(err.kind, FailureKind::Io);
    }

    #[test]
    fn ragged_rows_classify_as_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "a,b\n1,2,3\n").unwrap();
        let err = read_csv(&path).unwrap_err();
        assert_eq!(err.kind, FailureKind::Parse);
    }

    #[test]
    fn reads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.csv");
        std::fs::write(&path, "name,score\nalice,1\nbob,2\n").unwrap();
        let df = read_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }
}
