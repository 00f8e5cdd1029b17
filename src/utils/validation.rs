use crate::utils::error::{GuestError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GuestError::ValidationError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(GuestError::ValidationError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_input_extension(field_name: &str, path: &str) -> Result<()> {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("json") | Some("csv") => Ok(()),
        Some(other) => Err(GuestError::ValidationError {
            message: format!(
                "{}: unsupported guest list extension '{}' (expected json or csv)",
                field_name, other
            ),
        }),
        None => Err(GuestError::ValidationError {
            message: format!("{}: guest list file needs a .json or .csv extension", field_name),
        }),
    }
}
