// renderer-facing payloads: map features, legend, selector options, styles
use serde::Serialize;

use crate::core::catalog::{Boundary, NeighborhoodCatalog};
use crate::core::classify::ClassifiedStat;
use crate::core::types::{ALL_SENTINEL, Tier};

/// Everything the map layer needs to draw and label one neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPayload {
    pub title: String,
    pub matched_count: usize,
    pub official_elector_count: u64,
    pub penetration_percent_formatted: String,
    pub tier: Tier,
    pub color: &'static str,
    /// `None` (or an unrenderable ring) means the renderer skips the shape.
    pub boundary: Option<Boundary>,
}

impl DisplayPayload {
    pub fn is_placeable(&self) -> bool {
        self.boundary.as_ref().is_some_and(Boundary::is_renderable)
    }
}

/// Two decimals, halves rounded up. `{:.2}` alone rounds exact halves to
/// even, which would print 0.125 as "0.12".
pub fn format_percent(percent: f64) -> String {
    // x.xx5 is only exact in binary on odd eighths (.125, .375, .625, .875)
    let eighths = percent * 8.0;
    if percent >= 0.0 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return format!("{:.2}", (percent * 100.0).ceil() / 100.0);
    }
    format!("{percent:.2}")
}

/// Pair each classified stat with its catalog geometry, catalog order.
pub fn build_payloads(catalog: &NeighborhoodCatalog, classified: &[ClassifiedStat]) -> Vec<DisplayPayload> {
    classified
        .iter()
        .map(|stat| DisplayPayload {
            title: stat.canonical_name.clone(),
            matched_count: stat.matched_count,
            official_elector_count: stat.official_elector_count,
            penetration_percent_formatted: format_percent(stat.penetration_percent),
            tier: stat.tier,
            color: stat.color,
            boundary: catalog.get(&stat.canonical_name).and_then(|e| e.boundary.clone()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub tier: Tier,
    /// Exclusive lower bound in percent, `None` for the no-data row.
    pub threshold: Option<f64>,
    pub color: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}

fn legend_label(tier: Tier) -> &'static str {
    match tier {
        Tier::High => "> 5% (Alta)",
        Tier::Medium => "2% - 5% (Média)",
        Tier::Low => "0.5% - 2% (Baixa)",
        Tier::Minimal => "< 0.5% (Mínima)",
        Tier::None => "Sem dados",
    }
}

/// Five rows, highest tier first.
pub fn legend() -> Legend {
    Legend {
        title: "Penetração (%)",
        entries: Tier::DESCENDING
            .into_iter()
            .map(|tier| LegendEntry { tier, threshold: tier.threshold(), color: tier.color(), label: legend_label(tier) })
            .collect(),
    }
}

/// Which entries the renderer gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionFilter {
    #[default]
    All,
    Only(String),
}

impl SelectionFilter {
    /// Map a selector value to a filter. Anything that is not a catalog name
    /// (the all sentinel included) shows everything.
    pub fn parse(value: &str, catalog: &NeighborhoodCatalog) -> Self {
        if value != ALL_SENTINEL && catalog.contains(value) {
            SelectionFilter::Only(value.to_string())
        } else {
            SelectionFilter::All
        }
    }

    pub fn admits(&self, canonical_name: &str) -> bool {
        match self {
            SelectionFilter::All => true,
            SelectionFilter::Only(name) => name == canonical_name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SelectionFilter::All => ALL_SENTINEL,
            SelectionFilter::Only(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// "All" first, then every catalog name in declaration order.
pub fn selection_options(catalog: &NeighborhoodCatalog) -> Vec<SelectOption> {
    std::iter::once(SelectOption { value: ALL_SENTINEL.to_string(), label: "Todos os Bairros".to_string() })
        .chain(catalog.names().map(|n| SelectOption { value: n.to_string(), label: n.to_string() }))
        .collect()
}

/// Stroke/fill instructions for one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryStyle {
    pub fill_color: &'static str,
    pub weight: u8,
    pub opacity: f32,
    pub stroke_color: &'static str,
    pub dash_array: Option<&'static str>,
    pub fill_opacity: f32,
}

impl BoundaryStyle {
    pub fn base(fill_color: &'static str) -> Self {
        Self { fill_color, weight: 2, opacity: 1.0, stroke_color: "white", dash_array: Some("3"), fill_opacity: 0.7 }
    }

    pub fn highlighted(fill_color: &'static str) -> Self {
        Self { fill_color, weight: 4, opacity: 1.0, stroke_color: "#3b82f6", dash_array: None, fill_opacity: 0.9 }
    }
}

/// Popup/side panel contents for the focused neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanel {
    pub title: String,
    /// "Cadastrados"
    pub registered: usize,
    /// "Total Estimado"
    pub estimated_total: u64,
    /// "Penetração", already formatted with a trailing `%`.
    pub penetration: String,
    /// Selected panels stay open; hover panels close on pointer-leave.
    pub pinned: bool,
}

impl InfoPanel {
    pub fn from_payload(payload: &DisplayPayload, pinned: bool) -> Self {
        Self {
            title: payload.title.clone(),
            registered: payload.matched_count,
            estimated_total: payload.official_elector_count,
            penetration: format!("{}%", payload.penetration_percent_formatted),
            pinned,
        }
    }
}
