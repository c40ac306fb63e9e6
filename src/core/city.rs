// city scoping applied to records before they reach the matcher
use std::collections::BTreeSet;

use crate::core::types::{ALL_CITIES, ConstituentRecord};

/// Which records take part in a run. Unlike [`SelectionFilter`], this one
/// changes the counts: records outside the city are never aggregated.
///
/// [`SelectionFilter`]: crate::core::display::SelectionFilter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    Only(String),
}

impl CityFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CITIES { CityFilter::All } else { CityFilter::Only(value.to_string()) }
    }

    /// Exact, case-sensitive comparison. Records without a city only pass `All`.
    pub fn admits(&self, record: &ConstituentRecord) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::Only(city) => record.city.as_deref() == Some(city.as_str()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CityFilter::All => ALL_CITIES,
            CityFilter::Only(city) => city,
        }
    }

    pub fn apply(&self, records: &[ConstituentRecord]) -> Vec<ConstituentRecord> {
        records.iter().filter(|r| self.admits(r)).cloned().collect()
    }
}

/// Distinct non-empty cities, sorted, for the city selector.
pub fn available_cities(records: &[ConstituentRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.city.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ConstituentRecord> {
        vec![
            ConstituentRecord::new("1", Some("Centro")).with_city("Mossoró"),
            ConstituentRecord::new("2", Some("Centro")).with_city("Areia Branca"),
            ConstituentRecord::new("3", Some("Paredões")).with_city("Mossoró"),
            ConstituentRecord::new("4", None),
            ConstituentRecord::new("5", Some("Centro")).with_city(""),
        ]
    }

    #[test]
    fn available_cities_are_sorted_and_distinct() {
        assert_eq!(available_cities(&records()), vec!["Areia Branca".to_string(), "Mossoró".to_string()]);
        assert!(available_cities(&[]).is_empty());
    }

    #[test]
    fn all_sentinel_keeps_every_record() {
        let filter = CityFilter::parse(ALL_CITIES);
        assert_eq!(filter, CityFilter::All);
        assert_eq!(filter.apply(&records()).len(), 5);
        assert_eq!(filter.value(), "todas");
    }

    #[test]
    fn city_filter_keeps_exact_matches_only() {
        let filter = CityFilter::parse("Mossoró");
        let kept: Vec<String> = filter.apply(&records()).into_iter().map(|r| r.id).collect();
        assert_eq!(kept, vec!["1", "3"]);
        assert!(!filter.admits(&ConstituentRecord::new("x", None).with_city("mossoró")));
        assert!(!filter.admits(&ConstituentRecord::new("y", None)));
    }
}
