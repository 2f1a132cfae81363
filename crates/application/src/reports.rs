//! HTML report export
//!
//! Renders a self-contained HTML stock report: headline stats, stock by
//! category, the full inventory and the latest movements.

use chrono::{DateTime, Utc};

use domain::entities::{Product, StockMovement};
use domain::value_objects::MovementKind;

use crate::analytics::{dashboard_stats, recent_movements, stock_by_category};

/// Movements shown in the report tail
const REPORT_MOVEMENT_LIMIT: usize = 20;

/// Brazilian-real formatting without locale machinery: thousands with
/// '.', decimals with ','.
fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let fraction = cents % 100;

    let digits = integer.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the stock report for one group's data.
///
/// `movements` is expected newest-first, as the movement repository
/// returns it.
pub fn render_stock_report(
    products: &[Product],
    movements: &[StockMovement],
    now: DateTime<Utc>,
) -> String {
    let stats = dashboard_stats(products, movements, now);
    let categories = stock_by_category(products);
    let generated_at = format_date(now);

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <title>Relatório de Estoque - Stock Master</title>
  <style>
    body {{ font-family: 'Arial', sans-serif; margin: 40px; color: #333; }}
    h1 {{ color: #6699CC; border-bottom: 3px solid #6699CC; padding-bottom: 10px; }}
    h2 {{ color: #77B9B9; margin-top: 30px; border-bottom: 2px solid #77B9B9; padding-bottom: 5px; }}
    .stats {{ display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin: 20px 0; }}
    .stat-card {{ border: 1px solid #ddd; padding: 20px; border-radius: 8px; background: #f9f9f9; }}
    .stat-card h3 {{ margin: 0 0 10px 0; color: #666; font-size: 14px; font-weight: normal; }}
    .stat-card .value {{ font-size: 28px; font-weight: bold; color: #6699CC; }}
    table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
    th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
    th {{ background-color: #6699CC; color: white; font-weight: bold; }}
    tr:nth-child(even) {{ background-color: #f9f9f9; }}
    .footer {{ margin-top: 40px; text-align: center; color: #999; font-size: 12px; }}
    .low-stock {{ color: #dc2626; font-weight: bold; }}
  </style>
</head>
<body>
  <h1>Relatório de Estoque - Stock Master</h1>
  <p><strong>Data de Geração:</strong> {generated_at}</p>

  <h2>Resumo Geral</h2>
  <div class="stats">
    <div class="stat-card">
      <h3>Total de Produtos</h3>
      <div class="value">{total_products}</div>
    </div>
    <div class="stat-card">
      <h3>Valor Total do Estoque</h3>
      <div class="value">{total_value}</div>
    </div>
    <div class="stat-card">
      <h3>Itens com Baixo Estoque</h3>
      <div class="value" style="color: {low_stock_color}">{low_stock}</div>
    </div>
    <div class="stat-card">
      <h3>Saídas (30 dias)</h3>
      <div class="value">{exits}</div>
    </div>
  </div>
"#,
        generated_at = generated_at,
        total_products = stats.total_products,
        total_value = format_currency(stats.total_stock_value),
        low_stock_color = if stats.low_stock_items > 0 { "#dc2626" } else { "#16a34a" },
        low_stock = stats.low_stock_items,
        exits = stats.exits_last_30_days,
    ));

    html.push_str(
        r#"
  <h2>Estoque por Categoria</h2>
  <table>
    <thead>
      <tr><th>Categoria</th><th>Quantidade Total</th><th>Valor Total</th></tr>
    </thead>
    <tbody>
"#,
    );
    for total in &categories {
        html.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&total.category),
            total.quantity,
            format_currency(total.value)
        ));
    }
    html.push_str("    </tbody>\n  </table>\n");

    html.push_str(
        r#"
  <h2>Inventário Completo</h2>
  <table>
    <thead>
      <tr><th>Produto</th><th>SKU</th><th>Categoria</th><th>Estoque</th><th>Preço</th><th>Valor Total</th><th>Localização</th></tr>
    </thead>
    <tbody>
"#,
    );
    for product in products {
        let low_stock_class = if product.is_low_stock() {
            " class=\"low-stock\""
        } else {
            ""
        };
        html.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td{}>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(product.name()),
            escape_html(product.sku()),
            escape_html(product.category()),
            low_stock_class,
            product.quantity(),
            format_currency(product.price()),
            format_currency(product.stock_value()),
            escape_html(product.location()),
        ));
    }
    html.push_str("    </tbody>\n  </table>\n");

    html.push_str(&format!(
        r#"
  <h2>Movimentações Recentes (Últimos {REPORT_MOVEMENT_LIMIT} registros)</h2>
  <table>
    <thead>
      <tr><th>Data</th><th>Produto</th><th>Tipo</th><th>Quantidade</th><th>Observações</th></tr>
    </thead>
    <tbody>
"#
    ));
    for movement in recent_movements(movements, REPORT_MOVEMENT_LIMIT) {
        let kind_color = match movement.kind() {
            MovementKind::Entry => "#16a34a",
            MovementKind::Exit => "#dc2626",
        };
        html.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td style=\"color: {}\">{}</td><td>{}</td><td>{}</td></tr>\n",
            format_date(movement.timestamp()),
            escape_html(movement.product_name()),
            kind_color,
            movement.kind().label(),
            movement.quantity(),
            escape_html(movement.notes().unwrap_or("-")),
        ));
    }
    html.push_str(&format!(
        r#"    </tbody>
  </table>

  <div class="footer">
    <p>Stock Master - Sistema de Gerenciamento de Estoque de Peças para Caminhões</p>
    <p>Relatório gerado automaticamente em {generated_at}</p>
  </div>
</body>
</html>
"#
    ));

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(95.8), "R$ 95,80");
        assert_eq!(format_currency(2567.5), "R$ 2.567,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_report_contains_stats_and_rows() {
        let now = Utc::now();
        let product = Product::new(
            "Filtro de Óleo MANN HU 945/2x",
            "Scania R440; Scania R500",
            "Filtro de Óleo",
            1,
            1,
            "B33",
            95.80,
            "g",
        )
        .expect("product");
        let movement = StockMovement::record(
            &product,
            MovementKind::Exit,
            1,
            Some("venda balcão".to_string()),
            now - Duration::days(3),
        )
        .expect("movement");

        let html = render_stock_report(&[product], &[movement], now);

        assert!(html.contains("Relatório de Estoque - Stock Master"));
        assert!(html.contains("Filtro de Óleo MANN HU 945/2x"));
        assert!(html.contains("R$ 95,80"));
        assert!(html.contains("Saída"));
        assert!(html.contains("venda balcão"));
        // One unit at reorder level: flagged as low stock
        assert!(html.contains("low-stock"));
    }

    #[test]
    fn test_html_escaping() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
    }
}
