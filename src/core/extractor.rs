use crate::domain::model::Person;
use std::collections::BTreeSet;

/// The sorted, deduplicated email domains of all adult guests.
///
/// Pure transformation: filter to adults, project to the email domain,
/// deduplicate by exact (case-sensitive) equality, sort ascending. Empty
/// input yields empty output. Emails are validated at construction, so this
/// never fails.
pub fn adult_domains(persons: &[Person]) -> Vec<String> {
    let mut domains = BTreeSet::new();

    for person in persons.iter().filter(|p| p.is_adult()) {
        let domain = person.email.domain();
        tracing::debug!(guest = %person.name, domain, "domain extracted");
        domains.insert(domain);
    }

    // BTreeSet iterates in ascending lexicographic order
    domains.into_iter().map(str::to_owned).collect()
}
