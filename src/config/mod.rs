pub mod toml_config;

use crate::adapters::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_input_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "guestlist")]
#[command(about = "Extracts the sorted set of adult guests' email domains from a guest list")]
pub struct CliConfig {
    /// Guest list file (.json or .csv); uses the built-in sample party when omitted
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// TOML pipeline configuration; overrides the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;

        if let Some(input) = &self.input {
            validate_path("input", input)?;
            validate_input_extension("input", input)?;
        }

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }

        Ok(())
    }
}
