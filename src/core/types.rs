// shared records, sentinels and the tier scale
use serde::{Deserialize, Deserializer, Serialize};

pub type RecordId = String;

/// Bucket for labels that match no catalog entry (and for null/empty labels).
pub const UNRESOLVED: &str = "Outros";

/// Selector value meaning "show every entry".
pub const ALL_SENTINEL: &str = "todos";

/// City selector value meaning "every city".
pub const ALL_CITIES: &str = "todas";

/// A constituent as handed over by the data-access layer. Only the fields the
/// density engine reads are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstituentRecord {
    #[serde(deserialize_with = "record_id")]
    pub id: RecordId,
    #[serde(default)]
    pub neighborhood_raw: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl ConstituentRecord {
    pub fn new(id: impl Into<RecordId>, neighborhood_raw: Option<&str>) -> Self {
        Self { id: id.into(), neighborhood_raw: neighborhood_raw.map(str::to_string), city: None }
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }
}

// ids are opaque; fixture formats that infer types hand bare numbers over as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecordId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

fn record_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordId, D::Error> {
    Ok(match RawRecordId::deserialize(deserializer)? {
        RawRecordId::Text(s) => s,
        RawRecordId::Signed(n) => n.to_string(),
        RawRecordId::Unsigned(n) => n.to_string(),
        RawRecordId::Float(n) => n.to_string(),
    })
}

/// Choropleth intensity. Variant order is the intensity order, so `Ord`
/// compares tiers the way the legend reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    None,
    Minimal,
    Low,
    Medium,
    High,
}

impl Tier {
    /// Highest first, the order thresholds are evaluated in.
    pub const DESCENDING: [Tier; 5] = [Tier::High, Tier::Medium, Tier::Low, Tier::Minimal, Tier::None];

    /// Exclusive lower bound on the penetration percentage. `None` has no bound
    /// because it is the fallback for exactly 0.
    pub fn threshold(self) -> Option<f64> {
        match self {
            Tier::High => Some(5.0),
            Tier::Medium => Some(2.0),
            Tier::Low => Some(0.5),
            Tier::Minimal => Some(0.0),
            Tier::None => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::High => "#047857",
            Tier::Medium => "#10b981",
            Tier::Low => "#34d399",
            Tier::Minimal => "#6ee7b7",
            Tier::None => "#ecfdf5",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Minimal => "minimal",
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
