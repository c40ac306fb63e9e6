//! Neighborhood density engine for the constituent heat-map.
//!
//! Free-text neighborhood labels on constituent records are resolved against a
//! fixed catalog, counted, turned into penetration percentages against the
//! official elector figures and classified into choropleth tiers. The
//! [`InteractionAdapter`] wraps the whole pipeline together with the hover and
//! selection state of the map widget.

pub mod core;
pub mod mapping;

pub use crate::core::aggregate::{Aggregate, AggregatedStat, LabelCount, NOT_INFORMED, aggregate, top_raw_labels};
pub use crate::core::catalog::{Boundary, CatalogEntry, CatalogError, Coordinate, MapView, NeighborhoodCatalog};
pub use crate::core::city::{CityFilter, available_cities};
pub use crate::core::classify::{Classification, ClassifiedStat, classify, classify_catalog, penetration_percent, top_localities};
pub use crate::core::delta::InteractionAdapter;
pub use crate::core::display::{
    BoundaryStyle, DisplayPayload, InfoPanel, Legend, LegendEntry, SelectOption, SelectionFilter, build_payloads,
    legend, selection_options,
};
pub use crate::core::focus::{FocusEvent, FocusMachine, FocusState, next_state};
pub use crate::core::mapping::NameMatcher;
pub use crate::core::types::{ALL_CITIES, ALL_SENTINEL, ConstituentRecord, RecordId, Tier, UNRESOLVED};
pub use crate::mapping::generator::{Assignment, MatchReport, generate_report};
pub use crate::mapping::loader::{RecordsError, load_records_toon};
