pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::engine::Engine;
pub use crate::core::extractor::adult_domains;
pub use crate::core::pipeline::GuestPipeline;
pub use crate::domain::model::{DomainReport, Email, Person, ADULT_AGE};
pub use crate::utils::error::{GuestError, Result};
