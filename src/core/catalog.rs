// neighborhood catalog: the fixed reference set labels are resolved against
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::types::UNRESOLVED;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog entry #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("catalog entry name {0:?} is reserved for unresolved labels")]
    ReservedName(String),

    #[error("duplicate catalog entry name {0:?}")]
    DuplicateName(String),

    #[error("could not decode catalog document: {0}")]
    Decode(String),

    #[error("could not encode catalog document: {0}")]
    Encode(String),
}

/// A `[lon, lat]` position, GeoJSON axis order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// Outer ring of a neighborhood polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub ring: Vec<Coordinate>,
}

impl Boundary {
    /// Axis-aligned box, ring closed back on its first corner.
    pub fn rect(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            ring: vec![
                Coordinate::new(west, south),
                Coordinate::new(east, south),
                Coordinate::new(east, north),
                Coordinate::new(west, north),
                Coordinate::new(west, south),
            ],
        }
    }

    /// A closed ring of at least four finite positions. Anything else is
    /// left off the map by the renderer.
    pub fn is_renderable(&self) -> bool {
        self.ring.len() >= 4
            && self.ring.iter().all(Coordinate::is_finite)
            && self.ring.first() == self.ring.last()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub official_elector_count: u64,
    #[serde(default)]
    pub boundary: Option<Boundary>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, official_elector_count: u64, boundary: Option<Boundary>) -> Self {
        Self { name: name.into(), official_elector_count, boundary }
    }

    pub fn has_renderable_boundary(&self) -> bool {
        self.boundary.as_ref().is_some_and(Boundary::is_renderable)
    }
}

/// Initial viewport for the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    view: Option<MapView>,
    neighborhoods: Vec<CatalogEntry>,
}

/// Ordered, immutable set of known neighborhoods. Declaration order matters:
/// the matcher walks it front to back and the first hit wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeighborhoodCatalog {
    entries: Vec<CatalogEntry>,
    view: Option<MapView>,
}

impl NeighborhoodCatalog {
    /// Validate and freeze a list of entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        validate(&entries)?;
        debug!(entries = entries.len(), "catalog loaded");
        Ok(Self { entries, view: None })
    }

    pub fn with_view(mut self, view: MapView) -> Self {
        self.view = Some(view);
        self
    }

    /// Builtin tables are checked by tests, not at runtime.
    pub(crate) fn from_trusted(entries: Vec<CatalogEntry>, view: Option<MapView>) -> Self {
        Self { entries, view }
    }

    pub fn from_toon(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            toon_format::decode_default(text).map_err(|e| CatalogError::Decode(e.to_string()))?;

        let catalog = Self::new(doc.neighborhoods)?;
        Ok(match doc.view {
            Some(view) => catalog.with_view(view),
            None => catalog,
        })
    }

    pub fn to_toon(&self) -> Result<String, CatalogError> {
        let doc = CatalogDocument { view: self.view, neighborhoods: self.entries.clone() };
        toon_format::encode_default(&doc).map_err(|e| CatalogError::Encode(e.to_string()))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn view(&self) -> Option<MapView> {
        self.view
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//1. names are non-empty after trimming (an empty needle would match every label)
//2. names never collide with the unresolved bucket
//3. names are unique
fn validate(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if entry.name == UNRESOLVED {
            return Err(CatalogError::ReservedName(entry.name.clone()));
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(CatalogError::DuplicateName(entry.name.clone()));
        }

        if entry.official_elector_count == 0 {
            warn!(name = %entry.name, "catalog entry has no official elector count");
        }
        if !entry.has_renderable_boundary() {
            warn!(name = %entry.name, "catalog entry has no renderable boundary");
        }
    }

    Ok(())
}
