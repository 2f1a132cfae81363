//! AI commands: compatibility lookup and reorder planning

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use domain::repositories::CompatibilityCacheRepository;
use domain::value_objects::{MovementKind, ResultSource, SalesRecord, ServiceLevel};
use flows::{CompatibilityFlow, InventoryLevel, ReorderPlan, ReorderPlanFlow};
use llm::LlmClient;

use crate::context::AppContext;

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

pub async fn find_compatible_parts(ctx: &AppContext, query: &str) -> Result<()> {
    let llm = LlmClient::from_env()?;
    let flow = CompatibilityFlow::new(
        Arc::clone(&ctx.cache) as Arc<dyn CompatibilityCacheRepository>,
        llm,
    );

    let bar = spinner("Buscando peças compatíveis...");
    let result = flow.find_compatible_parts(query).await;
    bar.finish_and_clear();

    let result = result?;

    let source = match result.source {
        ResultSource::Cache => style("cache").cyan(),
        ResultSource::Api => style("api").green(),
        ResultSource::WebSearch => style("web_search").yellow(),
    };
    println!("Fonte: {source}\n");

    if result.compatible_parts.is_empty() {
        println!("{}", style("Nenhuma peça compatível encontrada.").dim());
    } else {
        println!(
            "{:<28} {:<16} {}",
            style("Peça").bold(),
            style("Código").bold(),
            style("Fabricante").bold()
        );
        for part in &result.compatible_parts {
            println!(
                "{:<28} {:<16} {}",
                part.part_name, part.part_number, part.manufacturer
            );
        }
    }

    println!("\n{}", style(&result.rationale).dim());
    Ok(())
}

pub async fn clear_cache(ctx: &AppContext) -> Result<()> {
    let entries = ctx.cache.len();
    ctx.cache.clear().await?;
    println!(
        "{} Compatibility cache cleared ({entries} entries removed)",
        style("✓").green()
    );
    Ok(())
}

pub async fn reorder_plan(ctx: &AppContext, group: &str, service_level: u8) -> Result<()> {
    let service_level = ServiceLevel::new(service_level)?;

    let products = ctx.inventory.list_products(group).await?;
    if products.is_empty() {
        println!("No products in group '{group}', nothing to plan.");
        return Ok(());
    }
    let movements = ctx.inventory.list_movements(group).await?;

    // Units sold per product, taken from the recorded exits
    let mut sold: HashMap<&str, u32> = HashMap::new();
    for movement in &movements {
        if movement.kind() == MovementKind::Exit {
            *sold.entry(movement.product_id()).or_default() += movement.quantity();
        }
    }

    let sales_data: Vec<SalesRecord> = products
        .iter()
        .map(|p| SalesRecord {
            product_id: p.id().to_string(),
            product_name: p.name().to_string(),
            units_sold: sold.get(p.id()).copied().unwrap_or(0),
        })
        .collect();
    let inventory_levels: Vec<InventoryLevel> = products
        .iter()
        .map(|p| InventoryLevel {
            product_id: p.id().to_string(),
            product_name: p.name().to_string(),
            quantity_in_stock: p.quantity(),
        })
        .collect();

    let llm = LlmClient::from_env()?;
    let flow = ReorderPlanFlow::new(llm);

    let bar = spinner("Gerando plano de reposição...");
    let output = flow
        .generate(&sales_data, &inventory_levels, service_level)
        .await;
    bar.finish_and_clear();

    let output = output?;

    println!(
        "{}",
        style(format!("Plano de Reposição ({service_level})"))
            .bold()
            .underlined()
    );
    match &output.plan {
        ReorderPlan::Items(items) => {
            let by_id: HashMap<&str, &str> =
                products.iter().map(|p| (p.id(), p.name())).collect();
            for item in items {
                let name = item
                    .product_name
                    .as_deref()
                    .or_else(|| by_id.get(item.product_id.as_str()).copied())
                    .unwrap_or(item.product_id.as_str());
                println!("{:>5} un.  {}", item.quantity, name);
            }
        }
        ReorderPlan::Raw(text) => println!("{text}"),
    }

    println!("\n{}", style(&output.rationale).dim());
    Ok(())
}
