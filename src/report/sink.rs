use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_REPORT_FILE;
use crate::errors::{CalculatorError, Result};
use crate::report::RepaymentResult;

/// destination for a finished repayment report
pub trait ReportSink {
    fn save(&mut self, result: &RepaymentResult) -> Result<()>;
}

/// writes the report as plain text, replacing any existing file
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileReportSink {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE)
    }
}

impl ReportSink for FileReportSink {
    fn save(&mut self, result: &RepaymentResult) -> Result<()> {
        write_report(&self.path, result)
    }
}

/// in-memory sink, one string per report line
impl ReportSink for Vec<String> {
    fn save(&mut self, result: &RepaymentResult) -> Result<()> {
        if result.is_empty() {
            return Err(CalculatorError::EmptyReport);
        }
        self.clear();
        self.extend(result.lines());
        Ok(())
    }
}

/// write one report line per text line, no header or trailer
pub fn write_report(path: impl AsRef<Path>, result: &RepaymentResult) -> Result<()> {
    let path = path.as_ref();
    if result.is_empty() {
        return Err(CalculatorError::EmptyReport);
    }

    let io_err = |source| CalculatorError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for line in &result.report {
        writeln!(writer, "{}", line).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    log::info!("saved {} report lines to {}", result.report.len(), path.display());
    Ok(())
}
