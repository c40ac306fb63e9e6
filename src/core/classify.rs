// penetration + tier classification
use crate::core::aggregate::Aggregate;
use crate::core::catalog::NeighborhoodCatalog;
use crate::core::types::Tier;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub penetration_percent: f64,
    pub tier: Tier,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedStat {
    pub canonical_name: String,
    pub matched_count: usize,
    pub official_elector_count: u64,
    pub penetration_percent: f64,
    pub tier: Tier,
    pub color: &'static str,
}

/// `matched / official * 100`, or 0 when there is no official figure. Never
/// NaN or infinite.
pub fn penetration_percent(matched_count: usize, official_elector_count: u64) -> f64 {
    if official_elector_count == 0 {
        return 0.0;
    }
    (matched_count as f64 / official_elector_count as f64) * 100.0
}

/// Highest tier whose (exclusive) threshold the percentage clears.
pub fn tier_for(percent: f64) -> Tier {
    Tier::DESCENDING
        .into_iter()
        .find(|tier| tier.threshold().is_some_and(|t| percent > t))
        .unwrap_or(Tier::None)
}

pub fn classify(matched_count: usize, official_elector_count: u64) -> Classification {
    let penetration_percent = penetration_percent(matched_count, official_elector_count);
    let tier = tier_for(penetration_percent);
    Classification { penetration_percent, tier, color: tier.color() }
}

/// Classify every catalog entry, zero-match entries included, in catalog order.
pub fn classify_catalog(catalog: &NeighborhoodCatalog, aggregate: &Aggregate) -> Vec<ClassifiedStat> {
    catalog
        .entries()
        .iter()
        .map(|entry| {
            let matched_count = aggregate.count(&entry.name);
            let c = classify(matched_count, entry.official_elector_count);
            ClassifiedStat {
                canonical_name: entry.name.clone(),
                matched_count,
                official_elector_count: entry.official_elector_count,
                penetration_percent: c.penetration_percent,
                tier: c.tier,
                color: c.color,
            }
        })
        .collect()
}

/// The `n` entries with the most matches, highest first. Ties keep catalog
/// order and entries with no matches are left out.
pub fn top_localities(classified: &[ClassifiedStat], n: usize) -> Vec<&ClassifiedStat> {
    let mut ranked: Vec<&ClassifiedStat> = classified.iter().filter(|s| s.matched_count > 0).collect();
    // stable sort keeps catalog order on ties
    ranked.sort_by(|a, b| b.matched_count.cmp(&a.matched_count));
    ranked.truncate(n);
    ranked
}
