use crate::domain::model::Person;
use crate::domain::ports::GuestSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Guest list from a CSV file with a `name,age,email` header row.
#[derive(Debug, Clone)]
pub struct CsvGuestSource {
    path: PathBuf,
}

impl CsvGuestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GuestSource for CsvGuestSource {
    fn read_guests(&self) -> Result<Vec<Person>> {
        tracing::debug!(path = %self.path.display(), "reading CSV guest list");
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut guests = Vec::new();
        for record in reader.deserialize() {
            let person: Person = record?;
            guests.push(person);
        }
        Ok(guests)
    }
}
