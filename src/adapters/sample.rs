use crate::domain::model::Person;
use crate::domain::ports::GuestSource;
use crate::utils::error::Result;

/// Built-in demo guest list, used when no input file is given.
#[derive(Debug, Clone, Default)]
pub struct SampleParty;

impl GuestSource for SampleParty {
    fn read_guests(&self) -> Result<Vec<Person>> {
        Ok(vec![
            Person::new("Anna", 18, "anna@nass.de")?,
            Person::new("Bernd", 17, "bernd@bibel.de")?,
            Person::new("Caro", 25, "caro@yahoo.de")?,
            Person::new("Dora", 49, "dora@yahoo.de")?,
            Person::new("Edgar", 20, "edgar@erdapfel.de")?,
            Person::new("Fritz", 5, "fritz@email.de")?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_party_has_six_guests() {
        let guests = SampleParty.read_guests().unwrap();
        assert_eq!(guests.len(), 6);
        assert_eq!(guests.iter().filter(|p| p.is_adult()).count(), 4);
    }
}
