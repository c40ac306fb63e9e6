// recompute-on-change session: records + filters + focus -> renderer output
use tracing::debug;

use crate::core::aggregate::{Aggregate, LabelCount, aggregate, top_raw_labels};
use crate::core::catalog::NeighborhoodCatalog;
use crate::core::city::{CityFilter, available_cities};
use crate::core::classify::{ClassifiedStat, classify_catalog, top_localities};
use crate::core::display::{
    BoundaryStyle, DisplayPayload, InfoPanel, Legend, SelectOption, SelectionFilter, build_payloads, legend,
    selection_options,
};
use crate::core::focus::{FocusEvent, FocusMachine, FocusState};
use crate::core::types::ConstituentRecord;

/// Long-lived state behind the heat-map widget.
///
/// The catalog is fixed at construction. Every change to the record list or
/// either filter reruns aggregation and classification over the full input;
/// nothing is patched in place, so the derived stats are always what a fresh
/// run over `(records, catalog)` would give.
#[derive(Debug, Clone)]
pub struct InteractionAdapter {
    catalog: NeighborhoodCatalog,
    records: Vec<ConstituentRecord>,
    city_filter: CityFilter,
    filter: SelectionFilter,
    focus: FocusMachine,

    aggregate: Aggregate,
    classified: Vec<ClassifiedStat>,
    payloads: Vec<DisplayPayload>,
}

impl InteractionAdapter {
    pub fn new(catalog: NeighborhoodCatalog) -> Self {
        let mut adapter = Self {
            catalog,
            records: Vec::new(),
            city_filter: CityFilter::All,
            filter: SelectionFilter::All,
            focus: FocusMachine::new(),
            aggregate: Aggregate::default(),
            classified: Vec::new(),
            payloads: Vec::new(),
        };
        adapter.recompute();
        adapter
    }

    pub fn with_records(catalog: NeighborhoodCatalog, records: Vec<ConstituentRecord>) -> Self {
        let mut adapter = Self::new(catalog);
        adapter.replace_records(records);
        adapter
    }

    //drop every derived value and rebuild it from the current inputs
    fn recompute(&mut self) {
        let scoped = self.scoped_records();
        self.aggregate = aggregate(&self.catalog, &scoped);
        self.classified = classify_catalog(&self.catalog, &self.aggregate);
        self.payloads = build_payloads(&self.catalog, &self.classified);

        // a filter can hide the focused entry; focus must stay on something visible
        if let Some(name) = self.focus.state().entry() {
            if !self.filter.admits(name) {
                self.focus.reset();
            }
        }

        debug!(
            records = self.records.len(),
            scoped = scoped.len(),
            entries = self.classified.len(),
            unresolved = self.aggregate.unresolved(),
            city = self.city_filter.value(),
            filter = self.filter.value(),
            "recomputed neighborhood density"
        );
    }

    /// New snapshot from the data-access layer.
    pub fn replace_records(&mut self, records: Vec<ConstituentRecord>) {
        self.records = records;
        self.recompute();
    }

    // records that survive the city filter, in input order
    fn scoped_records(&self) -> Vec<ConstituentRecord> {
        self.city_filter.apply(&self.records)
    }

    pub fn set_city_filter(&mut self, filter: CityFilter) {
        self.city_filter = filter;
        self.recompute();
    }

    /// Apply a raw city selector value (`"todas"` or a city name).
    pub fn select_city(&mut self, value: &str) {
        self.set_city_filter(CityFilter::parse(value));
    }

    pub fn set_filter(&mut self, filter: SelectionFilter) {
        self.filter = filter;
        self.recompute();
    }

    /// Apply a raw selector value (`"todos"` or a catalog name).
    pub fn select(&mut self, value: &str) {
        let filter = SelectionFilter::parse(value, &self.catalog);
        self.set_filter(filter);
    }

    /// Feed a pointer event. Events naming an entry that is unknown or
    /// currently filtered out are dropped.
    pub fn handle(&mut self, event: FocusEvent) -> bool {
        let target = match &event {
            FocusEvent::PointerEnter(n) | FocusEvent::PointerLeave(n) | FocusEvent::Click(n) => Some(n.as_str()),
            FocusEvent::Dismiss => None,
        };
        if let Some(name) = target {
            if !self.catalog.contains(name) || !self.filter.admits(name) {
                return false;
            }
        }
        self.focus.handle(&event)
    }

    pub fn catalog(&self) -> &NeighborhoodCatalog {
        &self.catalog
    }

    pub fn records(&self) -> &[ConstituentRecord] {
        &self.records
    }

    pub fn city_filter(&self) -> &CityFilter {
        &self.city_filter
    }

    /// Every city present in the snapshot, whatever the current city filter.
    pub fn available_cities(&self) -> Vec<String> {
        available_cities(&self.records)
    }

    pub fn filter(&self) -> &SelectionFilter {
        &self.filter
    }

    pub fn focus(&self) -> &FocusState {
        self.focus.state()
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    /// Stats for every entry, regardless of the filter.
    pub fn classified(&self) -> &[ClassifiedStat] {
        &self.classified
    }

    pub fn stat(&self, canonical_name: &str) -> Option<&ClassifiedStat> {
        self.classified.iter().find(|s| s.canonical_name == canonical_name)
    }

    pub fn unresolved(&self) -> usize {
        self.aggregate.unresolved()
    }

    /// Payloads the renderer may draw: every entry under `All`, only the
    /// chosen one otherwise. Catalog order.
    pub fn visible_payloads(&self) -> Vec<&DisplayPayload> {
        self.payloads.iter().filter(|p| self.filter.admits(&p.title)).collect()
    }

    pub fn payload(&self, canonical_name: &str) -> Option<&DisplayPayload> {
        self.payloads.iter().find(|p| p.title == canonical_name)
    }

    pub fn style_for(&self, canonical_name: &str) -> Option<BoundaryStyle> {
        let payload = self.payload(canonical_name)?;
        Some(if self.focus.state().entry() == Some(canonical_name) {
            BoundaryStyle::highlighted(payload.color)
        } else {
            BoundaryStyle::base(payload.color)
        })
    }

    pub fn info_panel(&self) -> Option<InfoPanel> {
        let state = self.focus.state();
        let payload = self.payload(state.entry()?)?;
        Some(InfoPanel::from_payload(payload, state.is_selected()))
    }

    pub fn legend(&self) -> Legend {
        legend()
    }

    pub fn selection_options(&self) -> Vec<SelectOption> {
        selection_options(&self.catalog)
    }

    pub fn top_localities(&self, n: usize) -> Vec<&ClassifiedStat> {
        top_localities(&self.classified, n)
    }

    /// Raw-label ranking for the "Top 5 bairros" chart, within the city filter.
    pub fn top_raw_labels(&self, n: usize) -> Vec<LabelCount> {
        top_raw_labels(&self.scoped_records(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::NOT_INFORMED;
    use crate::core::catalog::{Boundary, CatalogEntry};
    use crate::core::types::{ALL_CITIES, Tier};

    fn catalog() -> NeighborhoodCatalog {
        NeighborhoodCatalog::new(vec![
            CatalogEntry::new("Centro", 5000, Some(Boundary::rect(-37.348, -37.340, -5.190, -5.185))),
            CatalogEntry::new("Paredões", 4500, Some(Boundary::rect(-37.348, -37.340, -5.185, -5.180))),
            CatalogEntry::new("Bom Jardim", 4000, None),
        ])
        .unwrap()
    }

    fn records() -> Vec<ConstituentRecord> {
        vec![
            ConstituentRecord::new("1", Some("CENTRO perto da praça")),
            ConstituentRecord::new("2", Some("Centro")),
            ConstituentRecord::new("3", Some("bairro paredoes")),
            ConstituentRecord::new("4", None),
        ]
    }

    #[test]
    fn replacing_records_recomputes_from_scratch() {
        let mut a = InteractionAdapter::with_records(catalog(), records());
        assert_eq!(a.stat("Centro").unwrap().matched_count, 2);
        assert_eq!(a.unresolved(), 2);

        a.replace_records(vec![ConstituentRecord::new("9", Some("Paredões"))]);
        assert_eq!(a.stat("Centro").unwrap().matched_count, 0);
        assert_eq!(a.stat("Paredões").unwrap().matched_count, 1);
        assert_eq!(a.unresolved(), 0);

        // back to the first snapshot, back to the first result
        a.replace_records(records());
        let fresh = InteractionAdapter::with_records(catalog(), records());
        assert_eq!(a.classified(), fresh.classified());
        assert_eq!(a.aggregate(), fresh.aggregate());
    }

    #[test]
    fn filter_hides_payloads_without_touching_stats() {
        let mut a = InteractionAdapter::with_records(catalog(), records());
        let before = a.classified().to_vec();

        a.select("Centro");
        let visible = a.visible_payloads();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Centro");
        assert_eq!(a.classified(), before.as_slice());

        a.select("todos");
        assert_eq!(a.visible_payloads().len(), 3);
        assert_eq!(a.classified(), before.as_slice());
    }

    #[test]
    fn hidden_entries_cannot_take_focus() {
        let mut a = InteractionAdapter::with_records(catalog(), records());
        a.select("Centro");
        assert!(!a.handle(FocusEvent::PointerEnter("Paredões".into())));
        assert!(!a.handle(FocusEvent::Click("Nowhere".into())));
        assert_eq!(a.focus(), &FocusState::Idle);
    }

    #[test]
    fn filtering_away_the_focused_entry_resets_focus() {
        let mut a = InteractionAdapter::with_records(catalog(), records());
        a.handle(FocusEvent::Click("Paredões".into()));
        assert!(a.focus().is_selected());

        a.select("Centro");
        assert_eq!(a.focus(), &FocusState::Idle);
        assert!(a.info_panel().is_none());
    }

    #[test]
    fn focused_entry_is_highlighted_and_gets_a_panel() {
        let mut a = InteractionAdapter::with_records(catalog(), records());
        a.handle(FocusEvent::PointerEnter("Centro".into()));

        let style = a.style_for("Centro").unwrap();
        assert_eq!(style.weight, 4);
        assert_eq!(style.fill_color, Tier::Minimal.color());
        assert_eq!(a.style_for("Paredões").unwrap().weight, 2);
        assert!(a.style_for("Outros").is_none());

        let panel = a.info_panel().unwrap();
        assert_eq!(panel.title, "Centro");
        assert_eq!(panel.penetration, "0.04%");
        assert!(!panel.pinned);

        a.handle(FocusEvent::PointerLeave("Centro".into()));
        assert!(a.info_panel().is_none());
    }

    #[test]
    fn entry_without_boundary_still_has_payload() {
        let a = InteractionAdapter::with_records(catalog(), records());
        let p = a.payload("Bom Jardim").unwrap();
        assert!(!p.is_placeable());
        assert_eq!(p.penetration_percent_formatted, "0.00");
    }

    #[test]
    fn city_filter_scopes_the_counts() {
        let snapshot = vec![
            ConstituentRecord::new("1", Some("Centro")).with_city("Mossoró"),
            ConstituentRecord::new("2", Some("Centro")).with_city("Areia Branca"),
            ConstituentRecord::new("3", Some("Paredões")).with_city("Mossoró"),
            ConstituentRecord::new("4", None),
        ];
        let mut a = InteractionAdapter::with_records(catalog(), snapshot);
        assert_eq!(a.available_cities(), vec!["Areia Branca".to_string(), "Mossoró".to_string()]);
        assert_eq!(a.aggregate().total(), 4);

        a.select_city("Mossoró");
        assert_eq!(a.city_filter(), &CityFilter::Only("Mossoró".into()));
        assert_eq!(a.stat("Centro").unwrap().matched_count, 1);
        assert_eq!(a.stat("Paredões").unwrap().matched_count, 1);
        assert_eq!(a.unresolved(), 0);
        assert_eq!(a.aggregate().total(), 2);
        // the selector still offers every city
        assert_eq!(a.available_cities().len(), 2);

        a.select_city(ALL_CITIES);
        assert_eq!(a.aggregate().total(), 4);
        assert_eq!(a.stat("Centro").unwrap().matched_count, 2);
    }

    #[test]
    fn raw_label_chart_follows_the_city_filter() {
        let snapshot = vec![
            ConstituentRecord::new("1", Some("Zona rural")).with_city("Mossoró"),
            ConstituentRecord::new("2", None).with_city("Mossoró"),
            ConstituentRecord::new("3", Some("Zona rural")).with_city("Mossoró"),
            ConstituentRecord::new("4", None).with_city("Areia Branca"),
            ConstituentRecord::new("5", None).with_city("Areia Branca"),
            ConstituentRecord::new("6", None).with_city("Areia Branca"),
        ];
        let mut a = InteractionAdapter::with_records(catalog(), snapshot);
        let top = a.top_raw_labels(5);
        assert_eq!(top[0], LabelCount { label: NOT_INFORMED.into(), count: 4 });
        assert_eq!(top[1], LabelCount { label: "Zona rural".into(), count: 2 });

        a.select_city("Mossoró");
        let top = a.top_raw_labels(5);
        assert_eq!(top[0], LabelCount { label: "Zona rural".into(), count: 2 });
        assert_eq!(top[1], LabelCount { label: NOT_INFORMED.into(), count: 1 });
        // canonical ranking sees no catalog hits at all
        assert!(a.top_localities(5).is_empty());
    }

    #[test]
    fn half_hundredth_percent_rounds_up_in_payloads() {
        let records = (0..10).map(|i| ConstituentRecord::new(i.to_string(), Some("Barrocas"))).collect();
        let a = InteractionAdapter::with_records(NeighborhoodCatalog::builtin(), records);
        assert_eq!(a.payload("Barrocas").unwrap().official_elector_count, 8000);
        assert_eq!(a.payload("Barrocas").unwrap().penetration_percent_formatted, "0.13");
    }
}
