use std::fs;
use std::path::{Path, PathBuf};

use snafu::{Backtrace, ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SourceError {
    /// The report file could not be read at all.
    #[snafu(display("Failed to read report {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// The report bytes are not decodable text.
    #[snafu(display("Report {} is not valid UTF-8", path.display()))]
    Decode { path: PathBuf, backtrace: Backtrace },
}

/// Supplies the raw report text to the parser.
///
/// This is the only I/O seam on the ingest path; everything downstream is a
/// pure transformation over the returned buffer.
pub trait ReportSource {
    /// Produces the complete report text.
    fn load(&self) -> Result<String, SourceError>;
}

/// Reads a report from a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for FileSource {
    fn load(&self) -> Result<String, SourceError> {
        let bytes = fs::read(&self.path).context(ReadSnafu {
            path: self.path.clone(),
        })?;
        String::from_utf8(bytes).map_err(|_| {
            DecodeSnafu {
                path: self.path.clone(),
            }
            .build()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_read_error() {
        let err = FileSource::new("/definitely/not/here.html").load().unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }
}
