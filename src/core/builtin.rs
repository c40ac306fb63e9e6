// bundled catalog: Mossoró/RN neighborhoods (schematic boxes, not surveyed borders)
use crate::core::catalog::{Boundary, CatalogEntry, Coordinate, MapView, NeighborhoodCatalog};

// name, official electors, west, east, south, north
const MOSSORO: &[(&str, u64, [f64; 4])] = &[
    // central
    ("Centro", 5000, [-37.348, -37.340, -5.190, -5.185]),
    ("Paredões", 4500, [-37.348, -37.340, -5.185, -5.180]),
    ("Bom Jardim", 4000, [-37.340, -37.335, -5.190, -5.180]),
    ("Doze Anos", 3500, [-37.348, -37.340, -5.195, -5.190]),
    // north
    ("Santo Antônio", 12000, [-37.355, -37.335, -5.180, -5.165]),
    ("Barrocas", 8000, [-37.335, -37.325, -5.180, -5.165]),
    ("Santa Helena", 6000, [-37.365, -37.355, -5.180, -5.165]),
    // east
    ("Alto de São Manoel", 15000, [-37.335, -37.315, -5.200, -5.180]),
    ("Dom Jaime Câmara", 9000, [-37.315, -37.300, -5.200, -5.180]),
    ("Vingt Rosado", 7000, [-37.335, -37.300, -5.180, -5.170]),
    ("Ilha de Santa Luzia", 5000, [-37.340, -37.335, -5.200, -5.190]),
    // south
    ("Belo Horizonte", 8500, [-37.355, -37.340, -5.215, -5.200]),
    ("Boa Vista", 6500, [-37.355, -37.340, -5.230, -5.215]),
    ("Aeroporto", 4000, [-37.370, -37.355, -5.215, -5.200]),
    // west
    ("Abolição", 14000, [-37.380, -37.355, -5.195, -5.180]),
    ("Nova Betânia", 10000, [-37.355, -37.340, -5.200, -5.195]),
    ("Santa Delmira", 9500, [-37.395, -37.380, -5.195, -5.180]),
];

const MOSSORO_VIEW: MapView = MapView { center: Coordinate::new(-37.3442, -5.1878), zoom: 13 };

impl NeighborhoodCatalog {
    pub fn builtin() -> Self {
        let entries = MOSSORO
            .iter()
            .map(|&(name, official, [west, east, south, north])| {
                CatalogEntry::new(name, official, Some(Boundary::rect(west, east, south, north)))
            })
            .collect();

        Self::from_trusted(entries, Some(MOSSORO_VIEW))
    }
}
