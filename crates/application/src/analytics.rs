//! Dashboard analytics
//!
//! Pure data-shaping over in-memory product and movement lists. The
//! reference instant is passed in so the 30-day window is testable.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use domain::entities::{Product, StockMovement};
use domain::value_objects::MovementKind;

/// Headline numbers of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub low_stock_items: usize,
    pub total_stock_value: f64,
    pub exits_last_30_days: u32,
}

/// Stock aggregated into one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub quantity: u32,
    pub value: f64,
}

pub fn dashboard_stats(
    products: &[Product],
    movements: &[StockMovement],
    now: DateTime<Utc>,
) -> DashboardStats {
    let thirty_days_ago = now - Duration::days(30);

    let exits_last_30_days = movements
        .iter()
        .filter(|m| m.kind() == MovementKind::Exit && m.timestamp() >= thirty_days_ago)
        .map(|m| m.quantity())
        .sum();

    DashboardStats {
        total_products: products.len(),
        low_stock_items: products.iter().filter(|p| p.is_low_stock()).count(),
        total_stock_value: products.iter().map(|p| p.stock_value()).sum(),
        exits_last_30_days,
    }
}

/// Quantity and value per category, alphabetically ordered
pub fn stock_by_category(products: &[Product]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, (u32, f64)> = BTreeMap::new();
    for product in products {
        let entry = totals.entry(product.category()).or_default();
        entry.0 += product.quantity();
        entry.1 += product.stock_value();
    }

    totals
        .into_iter()
        .map(|(category, (quantity, value))| CategoryTotal {
            category: category.to_string(),
            quantity,
            value,
        })
        .collect()
}

/// First `limit` movements of an already newest-first list
pub fn recent_movements(movements: &[StockMovement], limit: usize) -> &[StockMovement] {
    &movements[..movements.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, quantity: u32, reorder: u32, price: f64) -> Product {
        Product::new(name, "sku", category, quantity, reorder, "A1", price, "g")
            .expect("valid product")
    }

    fn movement(
        product: &Product,
        kind: MovementKind,
        quantity: u32,
        at: DateTime<Utc>,
    ) -> StockMovement {
        StockMovement::record(product, kind, quantity, None, at).expect("movement")
    }

    #[test]
    fn test_dashboard_stats() {
        let now = Utc::now();
        let products = vec![
            product("Filtro A", "Filtro de Óleo", 1, 1, 10.0),
            product("Filtro B", "Filtro de Ar", 5, 1, 20.0),
        ];
        let movements = vec![
            movement(&products[0], MovementKind::Exit, 3, now - Duration::days(2)),
            movement(&products[0], MovementKind::Exit, 4, now - Duration::days(45)),
            movement(&products[1], MovementKind::Entry, 7, now - Duration::days(1)),
        ];

        let stats = dashboard_stats(&products, &movements, now);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.low_stock_items, 1);
        assert!((stats.total_stock_value - 110.0).abs() < 1e-9);
        // Only the exit inside the window counts
        assert_eq!(stats.exits_last_30_days, 3);
    }

    #[test]
    fn test_stock_by_category_is_sorted_and_summed() {
        let products = vec![
            product("Filtro A", "Filtro de Óleo", 2, 1, 10.0),
            product("Filtro B", "Filtro de Ar", 1, 1, 100.0),
            product("Filtro C", "Filtro de Óleo", 3, 1, 10.0),
        ];

        let totals = stock_by_category(&products);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Filtro de Ar");
        assert_eq!(totals[1].category, "Filtro de Óleo");
        assert_eq!(totals[1].quantity, 5);
        assert!((totals[1].value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_recent_movements_limit() {
        let now = Utc::now();
        let p = product("Filtro A", "Filtro de Óleo", 10, 1, 10.0);
        let movements: Vec<_> = (0..7)
            .map(|i| movement(&p, MovementKind::Exit, 1, now - Duration::hours(i)))
            .collect();

        assert_eq!(recent_movements(&movements, 5).len(), 5);
        assert_eq!(recent_movements(&movements, 50).len(), 7);
    }
}
