// record -> bucket counting
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::core::catalog::NeighborhoodCatalog;
use crate::core::mapping::NameMatcher;
use crate::core::types::{ConstituentRecord, UNRESOLVED};

/// Match counts per canonical name. Buckets that received nothing are absent
/// and read back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    counts: BTreeMap<String, usize>,
    total: usize,
}

/// One bucket of an [`Aggregate`], laid out for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedStat {
    pub canonical_name: String,
    pub matched_count: usize,
}

impl Aggregate {
    pub fn count(&self, canonical_name: &str) -> usize {
        self.counts.get(canonical_name).copied().unwrap_or(0)
    }

    pub fn unresolved(&self) -> usize {
        self.count(UNRESOLVED)
    }

    /// Number of records counted, equal to the sum of every bucket.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// One stat per catalog entry in declaration order, then the unresolved
    /// bucket. Zero buckets are included.
    pub fn stats(&self, catalog: &NeighborhoodCatalog) -> Vec<AggregatedStat> {
        catalog
            .names()
            .chain(std::iter::once(UNRESOLVED))
            .map(|name| AggregatedStat { canonical_name: name.to_string(), matched_count: self.count(name) })
            .collect()
    }

    fn bump(&mut self, canonical_name: &str) {
        *self.counts.entry(canonical_name.to_string()).or_insert(0) += 1;
        self.total += 1;
    }
}

/// Count every record into exactly one bucket, from scratch.
pub fn aggregate(catalog: &NeighborhoodCatalog, records: &[ConstituentRecord]) -> Aggregate {
    let matcher = NameMatcher::new(catalog);
    let mut out = Aggregate::default();

    for record in records {
        out.bump(matcher.resolve(record.neighborhood_raw.as_deref()));
    }

    debug!(records = records.len(), buckets = out.counts.len(), unresolved = out.unresolved(), "aggregated records");
    out
}

/// Chart label for records whose neighborhood was never filled in.
pub const NOT_INFORMED: &str = "Não informado";

/// A raw neighborhood label and how many records carry it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Most frequent raw labels, no catalog resolution. Labels are grouped
/// verbatim (no trimming or case folding), null/empty ones under
/// [`NOT_INFORMED`]. Highest count first, ties in first-seen order.
pub fn top_raw_labels(records: &[ConstituentRecord], n: usize) -> Vec<LabelCount> {
    let mut ranked: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let label = record.neighborhood_raw.as_deref().filter(|s| !s.is_empty()).unwrap_or(NOT_INFORMED);
        match index.get(label) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(label, ranked.len());
                ranked.push(LabelCount { label: label.to_string(), count: 1 });
            }
        }
    }

    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}
