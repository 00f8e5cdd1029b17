pub mod engine;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{DomainReport, Person};
pub use crate::domain::ports::{GuestSource, Pipeline, ReportSink};
pub use crate::utils::error::Result;
