//! Inventory commands: products, movements, dashboard and report

use anyhow::Result;
use chrono::Utc;
use clap::ValueEnum;
use console::style;
use std::path::Path;

use application::{analytics, reports, NewProduct};
use domain::value_objects::MovementKind;

use crate::context::AppContext;

/// CLI-facing movement direction
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MovementArg {
    Entry,
    Exit,
}

impl From<MovementArg> for MovementKind {
    fn from(arg: MovementArg) -> Self {
        match arg {
            MovementArg::Entry => MovementKind::Entry,
            MovementArg::Exit => MovementKind::Exit,
        }
    }
}

pub async fn seed(ctx: &AppContext, group: &str) -> Result<()> {
    let seeded = ctx.inventory.seed_initial_catalog(group).await?;
    if seeded == 0 {
        println!("{}", style("Group already has products, nothing to do.").dim());
    } else {
        println!(
            "{} {} products seeded into '{}'",
            style("✓").green(),
            seeded,
            group
        );
    }
    Ok(())
}

pub async fn list_products(ctx: &AppContext, group: &str) -> Result<()> {
    let products = ctx.inventory.list_products(group).await?;
    if products.is_empty() {
        println!("No products in group '{group}'. Try 'stockmaster seed'.");
        return Ok(());
    }

    println!(
        "{:<38} {:>6} {:>8} {:>10}  {:<10} {}",
        style("Product").bold(),
        style("Qty").bold(),
        style("Reorder").bold(),
        style("Price").bold(),
        style("Location").bold(),
        style("ID").bold(),
    );
    for product in &products {
        let quantity = if product.is_low_stock() {
            style(product.quantity().to_string()).red().bold()
        } else {
            style(product.quantity().to_string()).green()
        };
        println!(
            "{:<38} {:>6} {:>8} {:>10.2}  {:<10} {}",
            product.name(),
            quantity,
            product.reorder_level(),
            product.price(),
            product.location(),
            style(product.id()).dim(),
        );
    }
    println!("\n{} products", products.len());
    Ok(())
}

pub async fn add_product(ctx: &AppContext, group: &str, input: NewProduct) -> Result<()> {
    let product = ctx.inventory.add_product(group, input).await?;
    println!(
        "{} Product '{}' added with id {}",
        style("✓").green(),
        product.name(),
        style(product.id()).dim()
    );
    Ok(())
}

pub async fn record_movement(
    ctx: &AppContext,
    group: &str,
    product_id: &str,
    kind: MovementArg,
    quantity: u32,
    notes: Option<String>,
) -> Result<()> {
    let movement = ctx
        .inventory
        .record_movement(group, product_id, kind.into(), quantity, notes)
        .await?;
    println!(
        "{} {} de {} unidade(s) de {}",
        style("✓").green(),
        movement.kind().label(),
        movement.quantity(),
        movement.product_name()
    );
    Ok(())
}

pub async fn dashboard(ctx: &AppContext, group: &str) -> Result<()> {
    let products = ctx.inventory.list_products(group).await?;
    let movements = ctx.inventory.list_movements(group).await?;
    let stats = analytics::dashboard_stats(&products, &movements, Utc::now());

    println!("{}", style("Visão Geral do Estoque").bold().underlined());
    println!("Total de Produtos:        {}", stats.total_products);
    let low = if stats.low_stock_items > 0 {
        style(stats.low_stock_items.to_string()).red().bold()
    } else {
        style(stats.low_stock_items.to_string()).green()
    };
    println!("Itens com Baixo Estoque:  {low}");
    println!("Valor Total do Estoque:   R$ {:.2}", stats.total_stock_value);
    println!("Saídas (30 dias):         {}", stats.exits_last_30_days);

    println!("\n{}", style("Estoque por Categoria").bold().underlined());
    for total in analytics::stock_by_category(&products) {
        println!(
            "{:<28} {:>4} un.  R$ {:.2}",
            total.category, total.quantity, total.value
        );
    }

    println!("\n{}", style("Movimentações Recentes").bold().underlined());
    for movement in analytics::recent_movements(&movements, 5) {
        println!(
            "{}  {:<8} {:>4}  {}",
            movement.timestamp().format("%d/%m/%Y %H:%M"),
            movement.kind().label(),
            movement.quantity(),
            movement.product_name()
        );
    }
    Ok(())
}

pub async fn export_report(ctx: &AppContext, group: &str, output: &Path) -> Result<()> {
    let products = ctx.inventory.list_products(group).await?;
    let movements = ctx.inventory.list_movements(group).await?;

    let html = reports::render_stock_report(&products, &movements, Utc::now());
    std::fs::write(output, html)?;

    println!(
        "{} Relatório exportado para {}",
        style("✓").green(),
        output.display()
    );
    Ok(())
}
