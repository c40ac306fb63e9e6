// traceable per-record match report
use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::catalog::NeighborhoodCatalog;
use crate::core::mapping::NameMatcher;
use crate::core::types::{ConstituentRecord, RecordId, UNRESOLVED};

/// Where one record's label ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub record_id: RecordId,
    pub raw: Option<String>,
    pub bucket: String,
}

/// Explains an aggregation run record by record, so unresolved labels can be
/// found and cleaned up at the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub assignments: Vec<Assignment>,
    pub unresolved: Vec<RecordId>,
}

impl MatchReport {
    /// Distinct raw labels that resolved to nothing, with how often each
    /// occurs. Null labels are listed under the empty string.
    pub fn unresolved_labels(&self) -> BTreeMap<String, usize> {
        let mut out = BTreeMap::new();
        for a in self.assignments.iter().filter(|a| a.bucket == UNRESOLVED) {
            let label = a.raw.as_deref().map(str::trim).unwrap_or_default().to_string();
            *out.entry(label).or_insert(0) += 1;
        }
        out
    }

    pub fn bucket_of(&self, record_id: &str) -> Option<&str> {
        self.assignments.iter().find(|a| a.record_id == record_id).map(|a| a.bucket.as_str())
    }
}

pub fn generate_report(catalog: &NeighborhoodCatalog, records: &[ConstituentRecord]) -> MatchReport {
    let matcher = NameMatcher::new(catalog);
    let mut report = MatchReport::default();

    for record in records {
        let bucket = matcher.resolve(record.neighborhood_raw.as_deref());
        if bucket == UNRESOLVED {
            report.unresolved.push(record.id.clone());
        }
        report.assignments.push(Assignment {
            record_id: record.id.clone(),
            raw: record.neighborhood_raw.clone(),
            bucket: bucket.to_string(),
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate;
    use crate::core::catalog::CatalogEntry;

    fn catalog() -> NeighborhoodCatalog {
        NeighborhoodCatalog::new(vec![
            CatalogEntry::new("Centro", 5000, None),
            CatalogEntry::new("Paredões", 4500, None),
        ])
        .unwrap()
    }

    fn records() -> Vec<ConstituentRecord> {
        vec![
            ConstituentRecord::new("e1", Some("Centro")),
            ConstituentRecord::new("e2", Some("bairro paredoes")),
            ConstituentRecord::new("e3", None),
            ConstituentRecord::new("e4", Some(" bairro paredoes ")),
        ]
    }

    #[test]
    fn report_lists_unresolved_ids_in_input_order() {
        let report = generate_report(&catalog(), &records());
        assert_eq!(report.assignments.len(), 4);
        assert_eq!(report.unresolved, vec!["e2", "e3", "e4"]);
        assert_eq!(report.bucket_of("e1"), Some("Centro"));
        assert_eq!(report.bucket_of("e3"), Some(UNRESOLVED));
        assert_eq!(report.bucket_of("missing"), None);
    }

    #[test]
    fn unresolved_labels_group_by_trimmed_text() {
        let labels = generate_report(&catalog(), &records()).unresolved_labels();
        assert_eq!(labels.get("bairro paredoes"), Some(&2));
        assert_eq!(labels.get(""), Some(&1));
    }

    #[test]
    fn report_agrees_with_aggregate() {
        let c = catalog();
        let report = generate_report(&c, &records());
        let agg = aggregate(&c, &records());
        assert_eq!(report.unresolved.len(), agg.unresolved());
        let centro = report.assignments.iter().filter(|a| a.bucket == "Centro").count();
        assert_eq!(centro, agg.count("Centro"));
    }
}
