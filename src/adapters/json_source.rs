use crate::domain::model::Person;
use crate::domain::ports::GuestSource;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Guest list from a JSON file holding an array of
/// `{"name": ..., "age": ..., "email": ...}` objects.
#[derive(Debug, Clone)]
pub struct JsonGuestSource {
    path: PathBuf,
}

impl JsonGuestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GuestSource for JsonGuestSource {
    fn read_guests(&self) -> Result<Vec<Person>> {
        tracing::debug!(path = %self.path.display(), "reading JSON guest list");
        let content = fs::read_to_string(&self.path)?;
        let guests: Vec<Person> = serde_json::from_str(&content)?;
        Ok(guests)
    }
}
