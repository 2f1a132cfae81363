use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use common::{init_structured_logging, LoggingConfig};

mod commands;
mod context;

use commands::admin::AdminCommands;
use commands::{admin, ai, inventory};
use context::AppContext;

#[derive(Parser)]
#[command(name = "stockmaster")]
#[command(about = "Stock Master - gerenciamento de estoque de peças para caminhões")]
#[command(version)]
struct Cli {
    /// Verbose logging (RUST_LOG still wins)
    #[arg(long, global = true)]
    verbose: bool,

    /// Store group (tenant) to operate on
    #[arg(long, global = true, default_value = "default-group")]
    group: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the initial filter catalog into the group
    Seed,

    /// List the group's products
    Products,

    /// Add a product to the group
    AddProduct {
        name: String,
        #[arg(long)]
        sku: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value_t = 0)]
        quantity: u32,
        #[arg(long, default_value_t = 1)]
        reorder_level: u32,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },

    /// Record a stock entry or exit for a product
    Movement {
        product_id: String,
        #[arg(value_enum)]
        kind: inventory::MovementArg,
        quantity: u32,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the dashboard numbers for the group
    Dashboard,

    /// Export the HTML stock report
    Report {
        #[arg(long, default_value = "relatorio-estoque.html")]
        output: PathBuf,
    },

    /// Find compatible parts for a license plate or vehicle model
    Compatibility { query: String },

    /// Clear the compatibility result cache
    CacheClear,

    /// Generate an AI reorder plan from sales and stock levels
    Reorder {
        #[arg(long, default_value_t = 95)]
        service_level: u8,
    },

    /// User and group administration
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::default()
    } else {
        LoggingConfig::quiet()
    };
    init_structured_logging(logging)?;

    let ctx = AppContext::open()?;
    let group = cli.group.as_str();

    match cli.command {
        Commands::Seed => inventory::seed(&ctx, group).await,
        Commands::Products => inventory::list_products(&ctx, group).await,
        Commands::AddProduct {
            name,
            sku,
            category,
            quantity,
            reorder_level,
            location,
            price,
        } => {
            inventory::add_product(
                &ctx,
                group,
                application::NewProduct {
                    name,
                    sku,
                    category,
                    quantity,
                    reorder_level,
                    location,
                    price,
                },
            )
            .await
        }
        Commands::Movement {
            product_id,
            kind,
            quantity,
            notes,
        } => inventory::record_movement(&ctx, group, &product_id, kind, quantity, notes).await,
        Commands::Dashboard => inventory::dashboard(&ctx, group).await,
        Commands::Report { output } => inventory::export_report(&ctx, group, &output).await,
        Commands::Compatibility { query } => ai::find_compatible_parts(&ctx, &query).await,
        Commands::CacheClear => ai::clear_cache(&ctx).await,
        Commands::Reorder { service_level } => ai::reorder_plan(&ctx, group, service_level).await,
        Commands::Admin { command } => admin::run(&ctx, command).await,
    }
}
