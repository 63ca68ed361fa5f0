//! Maison CLI - catalog browsing and back-office management.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog with client-side filters
//! maison products list --category decor --max-price 120 --sort price-low
//!
//! # Server-side product search
//! maison products search "walnut shelf"
//!
//! # Admin order table (requires MAISON_ADMIN_TOKEN)
//! maison orders list --status shipped --start-date 2026-01-01
//! maison orders set-status ord_123 delivered
//! maison orders delete ord_123
//!
//! # Dashboard aggregates
//! maison dashboard
//!
//! # Local wishlist
//! maison wishlist show
//! maison wishlist toggle prod_42
//! ```
//!
//! # Commands
//!
//! - `products` - Browse and search the catalog
//! - `orders` - Manage orders (admin)
//! - `dashboard` - Show admin dashboard aggregates
//! - `wishlist` - Manage the local wishlist

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "maison")]
#[command(author, version, about = "Maison CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and search the catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage orders (admin)
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Show admin dashboard aggregates
    Dashboard,
    /// Manage the local wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List the catalog with client-side filters
    List {
        /// Search term matched against name and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category (`furniture`, `lighting`, `decor`, `textiles`, `other`, or `all`)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Minimum price
        #[arg(long, default_value = "")]
        min_price: String,

        /// Maximum price
        #[arg(long, default_value = "")]
        max_price: String,

        /// Sort key (`featured`, `price-low`, `price-high`, `rating`, `newest`)
        #[arg(short, long, default_value = "featured")]
        sort: String,
    },
    /// Server-side product search
    Search {
        /// Search term
        query: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List the order table with client-side filters
    List {
        /// Status (`pending`, `processing`, `shipped`, `delivered`, `cancelled`, or `all`)
        #[arg(short, long, default_value = "all")]
        status: String,

        /// Inclusive start date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        start_date: String,

        /// Inclusive end date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        end_date: String,

        /// Search term
        #[arg(long, default_value = "")]
        search: String,

        /// Field the search term targets (`name`, `email`, `order-id`)
        #[arg(long, default_value = "name")]
        field: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Move an order to a new status
    SetStatus {
        /// Order ID
        id: String,
        /// Target status
        status: String,
    },
    /// Delete an order
    Delete {
        /// Order ID
        id: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Add or remove a product
    Toggle {
        /// Product ID
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List {
                query,
                category,
                min_price,
                max_price,
                sort,
            } => {
                commands::products::list(&query, &category, &min_price, &max_price, &sort).await?;
            }
            ProductAction::Search { query } => commands::products::search(&query).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List {
                status,
                start_date,
                end_date,
                search,
                field,
                page,
            } => {
                commands::orders::list(&status, &start_date, &end_date, &search, &field, page)
                    .await?;
            }
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(&id, &status).await?;
            }
            OrderAction::Delete { id } => commands::orders::delete(&id).await?,
        },
        Commands::Dashboard => commands::dashboard::show().await?,
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show()?,
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&id)?,
        },
    }
    Ok(())
}
