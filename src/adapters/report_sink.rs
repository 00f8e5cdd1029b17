use crate::domain::model::DomainReport;
use crate::domain::ports::ReportSink;
use crate::utils::error::{GuestError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn output_filename(&self) -> &'static str {
        match self {
            ReportFormat::Text => "domains.txt",
            ReportFormat::Json => "domains.json",
            ReportFormat::Csv => "domains.csv",
        }
    }
}

/// Writes the report into `base_path`, one file per run, format selected by
/// a match over the tag.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    base_path: PathBuf,
    format: ReportFormat,
}

impl FileReportSink {
    pub fn new(base_path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            base_path: base_path.into(),
            format,
        }
    }

    fn render(&self, report: &DomainReport) -> Result<Vec<u8>> {
        match self.format {
            ReportFormat::Text => {
                let mut out = String::new();
                for domain in &report.domains {
                    out.push_str(domain);
                    out.push('\n');
                }
                Ok(out.into_bytes())
            }
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(report)?;
                Ok(json.into_bytes())
            }
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["domain"])?;
                for domain in &report.domains {
                    writer.write_record([domain])?;
                }
                writer
                    .into_inner()
                    .map_err(|e| GuestError::IoError(e.into_error()))
            }
        }
    }
}

impl ReportSink for FileReportSink {
    fn write_report(&self, report: &DomainReport) -> Result<String> {
        let full_path = self.base_path.join(self.format.output_filename());

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, self.render(report)?)?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn report() -> DomainReport {
        DomainReport {
            domains: vec![
                "erdapfel.de".to_string(),
                "nass.de".to_string(),
                "yahoo.de".to_string(),
            ],
            guests_total: 6,
            adults_total: 4,
        }
    }

    #[test]
    fn writes_text_report_one_domain_per_line() {
        let dir = TempDir::new().unwrap();
        let sink = FileReportSink::new(dir.path(), ReportFormat::Text);

        let path = sink.write_report(&report()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "erdapfel.de\nnass.de\nyahoo.de\n");
    }

    #[test]
    fn writes_json_report_with_counters() {
        let dir = TempDir::new().unwrap();
        let sink = FileReportSink::new(dir.path(), ReportFormat::Json);

        let path = sink.write_report(&report()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["adults_total"], 4);
        assert_eq!(parsed["domains"][0], "erdapfel.de");
    }

    #[test]
    fn writes_csv_report_with_header() {
        let dir = TempDir::new().unwrap();
        let sink = FileReportSink::new(dir.path(), ReportFormat::Csv);

        let path = sink.write_report(&report()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("domain\n"));
        assert!(content.contains("yahoo.de"));
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("reports/latest");
        let sink = FileReportSink::new(&nested, ReportFormat::Text);

        sink.write_report(&report()).unwrap();
        assert!(nested.join("domains.txt").exists());
    }
}
