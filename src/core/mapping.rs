// label -> canonical neighborhood resolution
use tracing::trace;

use crate::core::catalog::NeighborhoodCatalog;
use crate::core::types::UNRESOLVED;

/// Resolves free-text neighborhood labels against a catalog.
///
/// Matching rules, kept exactly as users have come to rely on them:
/// - the label is trimmed and lower-cased, no accent folding
/// - an entry matches when the label *contains* the entry's lower-cased name
/// - entries are tried in declaration order and the first hit wins, even if a
///   later entry would be a longer match
/// - no hit (or a null/blank label) goes to [`UNRESOLVED`]
#[derive(Debug, Clone)]
pub struct NameMatcher<'a> {
    catalog: &'a NeighborhoodCatalog,
    needles: Vec<String>,
}

impl<'a> NameMatcher<'a> {
    pub fn new(catalog: &'a NeighborhoodCatalog) -> Self {
        let needles = catalog.names().map(str::to_lowercase).collect();
        Self { catalog, needles }
    }

    /// Index of the matched entry in catalog order, `None` when unresolved.
    pub fn resolve_index(&self, raw: Option<&str>) -> Option<usize> {
        let normalized = raw.map(str::trim).filter(|s| !s.is_empty())?.to_lowercase();
        self.needles.iter().position(|needle| normalized.contains(needle.as_str()))
    }

    pub fn resolve(&self, raw: Option<&str>) -> &'a str {
        let canonical = match self.resolve_index(raw) {
            Some(i) => self.catalog.entries()[i].name.as_str(),
            None => UNRESOLVED,
        };
        trace!(raw = ?raw, canonical, "resolved neighborhood label");
        canonical
    }
}
