use crate::core::extractor::adult_domains;
use crate::core::{DomainReport, GuestSource, Person, Pipeline, ReportSink};
use crate::utils::error::Result;

/// Wires a guest source to a report sink around the domain extractor.
pub struct GuestPipeline<S: GuestSource, K: ReportSink> {
    source: S,
    sink: K,
}

impl<S: GuestSource, K: ReportSink> GuestPipeline<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }
}

impl<S: GuestSource, K: ReportSink> Pipeline for GuestPipeline<S, K> {
    fn extract(&self) -> Result<Vec<Person>> {
        self.source.read_guests()
    }

    fn transform(&self, guests: Vec<Person>) -> Result<DomainReport> {
        let guests_total = guests.len();
        let adults_total = guests.iter().filter(|p| p.is_adult()).count();
        let domains = adult_domains(&guests);

        Ok(DomainReport {
            domains,
            guests_total,
            adults_total,
        })
    }

    fn load(&self, report: &DomainReport) -> Result<String> {
        self.sink.write_report(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedSource(Vec<Person>);

    impl GuestSource for FixedSource {
        fn read_guests(&self) -> Result<Vec<Person>> {
            Ok(self.0.clone())
        }
    }

    struct CapturingSink(RefCell<Option<DomainReport>>);

    impl ReportSink for CapturingSink {
        fn write_report(&self, report: &DomainReport) -> Result<String> {
            *self.0.borrow_mut() = Some(report.clone());
            Ok("captured".to_string())
        }
    }

    #[test]
    fn transform_counts_and_extracts() {
        let guests = vec![
            Person::new("Anna", 18, "anna@nass.de").unwrap(),
            Person::new("Bernd", 17, "bernd@bibel.de").unwrap(),
        ];
        let pipeline = GuestPipeline::new(FixedSource(guests.clone()), CapturingSink(RefCell::new(None)));

        let report = pipeline.transform(guests).unwrap();
        assert_eq!(report.guests_total, 2);
        assert_eq!(report.adults_total, 1);
        assert_eq!(report.domains, vec!["nass.de"]);
    }

    #[test]
    fn load_hands_report_to_sink() {
        let sink = CapturingSink(RefCell::new(None));
        let pipeline = GuestPipeline::new(FixedSource(vec![]), sink);

        let report = DomainReport {
            domains: vec!["nass.de".to_string()],
            guests_total: 1,
            adults_total: 1,
        };
        let destination = pipeline.load(&report).unwrap();
        assert_eq!(destination, "captured");
        assert_eq!(
            pipeline.sink.0.borrow().as_ref().unwrap().domains,
            vec!["nass.de"]
        );
    }
}
