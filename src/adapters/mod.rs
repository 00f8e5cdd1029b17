// Adapters layer: concrete guest sources and report sinks.

pub mod csv_source;
pub mod json_source;
pub mod report_sink;
pub mod sample;

pub use csv_source::CsvGuestSource;
pub use json_source::JsonGuestSource;
pub use report_sink::{FileReportSink, ReportFormat};
pub use sample::SampleParty;

use crate::domain::model::Person;
use crate::domain::ports::GuestSource;
use crate::utils::error::Result;

/// Closed set of guest sources, dispatched by matching on the tag.
#[derive(Debug, Clone)]
pub enum GuestInput {
    Json(JsonGuestSource),
    Csv(CsvGuestSource),
    Sample(SampleParty),
}

impl GuestSource for GuestInput {
    fn read_guests(&self) -> Result<Vec<Person>> {
        match self {
            GuestInput::Json(source) => source.read_guests(),
            GuestInput::Csv(source) => source.read_guests(),
            GuestInput::Sample(source) => source.read_guests(),
        }
    }
}
