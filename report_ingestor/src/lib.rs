//! Parsing of vendor battery-health reports into canonical record sets.
//!
//! The input is a single HTML document with three sections ("Installed
//! batteries", "Battery capacity history", "Battery usage"), each a heading
//! followed by a table. [`parser::parse_report`] turns that into a
//! [`models::report::ParsedReport`]: identity attributes plus two sorted
//! sample series that the analytics crate consumes.

#[cfg(feature = "cli")]
pub mod cli;
pub mod errors;
pub mod io;
pub mod models;
pub mod parser;

pub use errors::Error;

use std::path::Path;

use crate::io::source::{FileSource, ReportSource};
use crate::models::report::ParsedReport;

/// Read and parse a report file in one step.
pub fn load_report(path: impl AsRef<Path>) -> Result<ParsedReport, Error> {
    let html = FileSource::new(path.as_ref()).load()?;
    Ok(parser::parse_report(&html))
}
