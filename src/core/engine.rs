use crate::core::Pipeline;
use crate::domain::model::DomainReport;
use crate::utils::error::Result;

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<(DomainReport, String)> {
        tracing::info!("Reading guest list...");
        let guests = self.pipeline.extract()?;
        tracing::info!("Read {} guests", guests.len());

        let report = self.pipeline.transform(guests)?;
        tracing::info!(
            "Extracted {} unique domains from {} adults",
            report.domains.len(),
            report.adults_total
        );

        let destination = self.pipeline.load(&report)?;
        tracing::info!("Report written to: {}", destination);

        Ok((report, destination))
    }
}
