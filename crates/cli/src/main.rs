//! Atelier CLI - drive the storefront cart and wishlist from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! atelier catalog list
//! atelier catalog show 3
//!
//! # Work with the cart
//! atelier cart add 3 --size M
//! atelier cart update 3-M 2
//! atelier cart show
//!
//! # Work with the wishlist
//! atelier wishlist toggle 6
//! atelier wishlist to-cart 6
//! ```
//!
//! State is saved under `ATELIER_DATA_DIR` (default `.atelier`) and picked
//! up again by the next invocation.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use atelier_core::Size;
use atelier_storefront::AppState;
use atelier_storefront::config::StorefrontConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about = "Atelier storefront tools")]
struct Cli {
    /// Directory for saved cart and wishlist state (overrides `ATELIER_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Show one product
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and the order summary
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,

        /// Size (XS, S, M, L, XL)
        #[arg(short, long)]
        size: Option<Size>,
    },
    /// Remove a line
    Remove {
        /// Line key, e.g. `3` or `3-M`
        line_key: String,
    },
    /// Set a line's quantity (0 or less removes it)
    Update {
        /// Line key, e.g. `3` or `3-M`
        line_key: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlist entries
    Show,
    /// Add a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product
    Remove {
        /// Product id
        id: String,
    },
    /// Add the product if absent, remove it if present
    Toggle {
        /// Product id
        id: String,
    },
    /// Exit successfully only if the product is wishlisted
    Contains {
        /// Product id
        id: String,
    },
    /// Add a wishlisted product to the cart
    ToCart {
        /// Product id
        id: String,
    },
    /// Remove every entry
    Clear,
}

/// Initialize tracing to stderr, honoring `RUST_LOG`.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "atelier_storefront=warn,atelier_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Run a command. `Ok(false)` means a query answered "no".
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let mut state = AppState::open(config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&state),
            CatalogAction::Show { id } => commands::catalog::show(&state, &id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { id, size } => commands::cart::add(&mut state, &id, size)?,
            CartAction::Remove { line_key } => commands::cart::remove(&mut state, &line_key),
            CartAction::Update { line_key, quantity } => {
                commands::cart::update(&mut state, &line_key, quantity);
            }
            CartAction::Clear => commands::cart::clear(&mut state),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&state),
            WishlistAction::Add { id } => commands::wishlist::add(&mut state, &id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&mut state, &id),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut state, &id)?,
            WishlistAction::Contains { id } => return Ok(commands::wishlist::contains(&state, &id)),
            WishlistAction::ToCart { id } => commands::wishlist::to_cart(&mut state, &id)?,
            WishlistAction::Clear => commands::wishlist::clear(&mut state),
        },
    }
    Ok(true)
}
