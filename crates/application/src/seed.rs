//! Initial truck-filter catalog
//!
//! The starting inventory of a freshly provisioned store: MANN, WEGA,
//! UNIFILTER and PARKER filters with their shelf locations and prices.
//! The SKU column carries the fitment list.

use domain::entities::Product;
use domain::errors::DomainResult;

/// (name, category, sku/fitment, location, price)
const INITIAL_PRODUCTS: &[(&str, &str, &str, &str, f64)] = &[
    ("Filtro de Combustível MANN 1060/4", "Filtro de Combustível", "MB 1718; Atego 1718; Atron 1718", "A31", 85.50),
    ("Filtro de Combustível WEGA FCD 2214", "Filtro de Combustível", "VW 24.250", "A32", 78.90),
    ("Filtro de Óleo MANN HU 931/5x", "Filtro de Óleo", "MB 1718; Atego 1718", "A33", 92.30),
    ("Filtro de Óleo MANN WOE 475", "Filtro de Óleo", "VW 24.250; VW 25.420", "A34", 88.75),
    ("Filtro de Óleo WEGA 950/21", "Filtro de Óleo", "VW 24.250; VW 25.420", "B31", 65.40),
    ("Filtro de Óleo WEGA FCD 2093", "Filtro de Óleo", "VW 24.250; VW 25.420", "B31", 71.20),
    ("Filtro de Óleo WEGA FCD 0952", "Filtro de Óleo", "VW 24.250; VW 25.420", "B31", 69.80),
    ("Filtro de Combustível MANN 1060/2", "Filtro de Combustível", "MB 1718; Atego 1718", "B32", 82.60),
    ("Filtro de Óleo MANN HU 945/2x", "Filtro de Óleo", "Scania R440; Scania R500", "B33", 95.80),
    ("Filtro de Óleo MANN HU 1077 2z", "Filtro de Óleo", "Scania R440; Scania R500", "B33", 98.50),
    ("Filtro de Óleo MANN WO 612", "Filtro de Óleo", "VW 24.250; MB 1718", "B34", 76.30),
    ("Filtro de Combustível MANN PU 941x", "Filtro de Combustível", "MB 1718; Atego 1718", "C31", 89.90),
    ("Filtro de Combustível WEGA REC-151", "Filtro de Combustível", "MB 1718; Atego 1718", "C31", 72.40),
    ("Filtro de Combustível MANN WK 1060/2", "Filtro de Combustível", "MB 1718; Atego 1718", "C31", 84.20),
    ("Filtro de Combustível MANN WK 10 002/1x", "Filtro de Combustível", "VW 24.250; VW 25.420", "C32", 91.60),
    ("Filtro de Combustível MANN PU 1059x", "Filtro de Combustível", "VW 24.250; VW 25.420", "C32", 87.30),
    ("Filtro de Óleo MANN WO 711", "Filtro de Óleo", "VW 24.250", "C33", 73.80),
    ("Filtro de Óleo MANN WOE 440", "Filtro de Óleo", "VW 24.250", "C34", 79.50),
    ("Filtro de Combustível WEGA FCD 2214", "Filtro de Combustível", "VW 24.250", "D31", 78.90),
    ("Filtro de Combustível MANN PU 1046", "Filtro de Combustível", "VW 24.250", "D31", 86.70),
    ("Filtro de Combustível WEGA FDC 2294", "Filtro de Combustível", "MB 1718; Atego 1718", "D32", 75.60),
    ("Filtro de Combustível WEGA FCD 0768", "Filtro de Combustível", "MB 1718; Atego 1718", "D32", 74.20),
    ("Filtro de Óleo MANN WO 770", "Filtro de Óleo", "VW 24.250", "D33", 77.90),
    ("Filtro de Ar UNIFILTER UST65801", "Filtro de Ar", "Scania R440; Scania R500", "D34", 125.50),
    ("Filtro de Óleo WEGA DAF 200", "Filtro de Óleo", "VW 24.250; VW 25.420", "D35", 68.90),
    ("Filtro de Combustível WEGA FCD 0970K", "Filtro de Combustível", "VW 24.250; VW 25.420", "E31", 81.40),
    ("Filtro de Combustível WEGA FCD 2173", "Filtro de Combustível", "VW 24.250; VW 25.420", "E31", 79.80),
    ("Filtro de Combustível WEGA FCD 2099", "Filtro de Combustível", "MB 1718; Atego 1718", "E32", 76.50),
    ("Filtro de Combustível WEGA FCD 2214", "Filtro de Combustível", "MB 1718; Atego 1718", "E32", 78.90),
    ("Filtro de Combustível WEGA FCD 30123F", "Filtro de Combustível", "VW 24.250; VW 25.420", "E34", 83.20),
    ("Filtro de Combustível PARKER R120LJ-10M-AQII", "Filtro de Combustível", "VW 24.250; VW 25.420", "E34", 142.30),
    ("Filtro de Óleo WEGA DAF 200", "Filtro de Óleo", "VW 24.250; VW 25.420", "E35", 68.90),
];

/// Build the seed catalog for one group. Every item starts with one
/// unit on the shelf and a reorder level of one.
pub fn initial_catalog(group_id: &str) -> DomainResult<Vec<Product>> {
    INITIAL_PRODUCTS
        .iter()
        .map(|(name, category, sku, location, price)| {
            Product::new(*name, *sku, *category, 1, 1, *location, *price, group_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_scoping() {
        let catalog = initial_catalog("loja-1").expect("catalog");
        assert_eq!(catalog.len(), 32);
        assert!(catalog.iter().all(|p| p.group_id() == "loja-1"));
        assert!(catalog.iter().all(|p| p.quantity() == 1));
    }

    #[test]
    fn test_catalog_categories() {
        let catalog = initial_catalog("g").expect("catalog");
        let mut categories: Vec<_> = catalog.iter().map(|p| p.category()).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(
            categories,
            vec!["Filtro de Ar", "Filtro de Combustível", "Filtro de Óleo"]
        );
    }
}
