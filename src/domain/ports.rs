use crate::domain::model::{DomainReport, Person};
use crate::utils::error::Result;

/// Where guests come from: a file, a built-in sample list, anything that can
/// produce a finite sequence of persons.
pub trait GuestSource {
    fn read_guests(&self) -> Result<Vec<Person>>;
}

/// Where the report goes. Returns a human-readable description of the
/// destination (for file sinks, the output path).
pub trait ReportSink {
    fn write_report(&self, report: &DomainReport) -> Result<String>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Person>>;
    fn transform(&self, guests: Vec<Person>) -> Result<DomainReport>;
    fn load(&self, report: &DomainReport) -> Result<String>;
}
