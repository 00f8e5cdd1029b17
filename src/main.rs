use clap::Parser;
use guestlist::adapters::{
    CsvGuestSource, FileReportSink, GuestInput, JsonGuestSource, ReportFormat, SampleParty,
};
use guestlist::config::toml_config::{SourceKind, TomlConfig};
use guestlist::utils::error::ErrorSeverity;
use guestlist::utils::{logger, validation::Validate};
use guestlist::{CliConfig, Engine, GuestError, GuestPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting guestlist");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let (source, output_path, format) = match build_plan(&config) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("Could not set up pipeline: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let sink = FileReportSink::new(output_path, format);
    let pipeline = GuestPipeline::new(source, sink);
    let engine = Engine::new(pipeline);

    match engine.run() {
        Ok((report, destination)) => {
            tracing::info!("✅ Domain extraction completed successfully!");
            for domain in &report.domains {
                println!("{}", domain);
            }
            println!("📁 Report saved to: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Domain extraction failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("❌ {}", e);

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Resolves CLI flags (or the TOML config, which takes precedence) into a
/// guest source, an output directory and a report format.
fn build_plan(config: &CliConfig) -> guestlist::Result<(GuestInput, String, ReportFormat)> {
    if let Some(path) = &config.config {
        let toml = TomlConfig::from_file(path)?;
        toml.validate()?;

        let source = match (toml.source.r#type, toml.source.path.as_deref()) {
            (SourceKind::Sample, _) => GuestInput::Sample(SampleParty),
            (SourceKind::Json, Some(p)) => GuestInput::Json(JsonGuestSource::new(p)),
            (SourceKind::Csv, Some(p)) => GuestInput::Csv(CsvGuestSource::new(p)),
            (kind, None) => {
                return Err(GuestError::ConfigError {
                    message: format!("source.path is required for source type {:?}", kind),
                })
            }
        };

        return Ok((source, toml.output_path().to_string(), toml.format()));
    }

    let source = match config.input.as_deref() {
        None => GuestInput::Sample(SampleParty),
        Some(p) if p.ends_with(".json") => GuestInput::Json(JsonGuestSource::new(p)),
        Some(p) if p.ends_with(".csv") => GuestInput::Csv(CsvGuestSource::new(p)),
        Some(p) => {
            return Err(GuestError::ValidationError {
                message: format!("unsupported guest list file: {}", p),
            })
        }
    };

    Ok((source, config.output_path.clone(), config.format))
}
