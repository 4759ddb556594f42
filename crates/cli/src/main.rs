//! Sleep Outside CLI - cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart with totals
//! so-cli cart list
//!
//! # Add a product (merges by id if already present)
//! so-cli cart add -i 880RR -n "Ajax Tent" -p 199.99 -q 1 --color Pumpkin
//!
//! # Adjust a quantity by a delta (dropping to zero removes the row)
//! so-cli cart qty -i 880RR -d -1
//!
//! # Save a cart row for later
//! so-cli cart save -i 880RR
//!
//! # Move a saved item back to the cart
//! so-cli wishlist move -i 880RR
//!
//! # Submit the order (requires SO_ORDER_API_URL)
//! so-cli checkout --fname June --lname Rivers --street "123 Main" \
//!     --city Rexburg --state ID --zip 83440 \
//!     --card-number 1234123412341234 --expiration 8/28 --code 123
//! ```
//!
//! # Commands
//!
//! - `cart` - List and mutate the cart ledger
//! - `wishlist` - List and mutate the wishlist ledger
//! - `totals` - Show the computed order totals
//! - `checkout` - Assemble and submit an order, clearing the cart on success

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "so-cli")]
#[command(author, version, about = "Sleep Outside cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and mutate the cart ledger
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// List and mutate the wishlist ledger
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show the computed order totals
    Totals,
    /// Assemble and submit an order
    Checkout(CheckoutArgs),
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    List,
    /// Add a product, merging by id
    Add {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Per-unit price
        #[arg(short, long)]
        price: Decimal,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Selected color
        #[arg(long)]
        color: Option<String>,

        /// Primary image reference
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a row by product ID
    Remove {
        /// Product ID
        #[arg(short, long)]
        id: String,
    },
    /// Adjust a row's quantity by a delta
    Qty {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// Signed quantity change (e.g. -1)
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Set a row's quantity directly (0 removes the row)
    Set {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: i64,
    },
    /// Move a row to the wishlist
    Save {
        /// Product ID
        #[arg(short, long)]
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist contents
    List,
    /// Remove an entry by product ID
    Remove {
        /// Product ID
        #[arg(short, long)]
        id: String,
    },
    /// Move an entry to the cart (quantity resets to 1)
    Move {
        /// Product ID
        #[arg(short, long)]
        id: String,
    },
}

/// Checkout form fields.
#[derive(Args)]
struct CheckoutArgs {
    /// First name
    #[arg(long)]
    fname: String,

    /// Last name
    #[arg(long)]
    lname: String,

    /// Street address
    #[arg(long)]
    street: String,

    /// City
    #[arg(long)]
    city: String,

    /// State
    #[arg(long)]
    state: String,

    /// ZIP code
    #[arg(long)]
    zip: String,

    /// Card number
    #[arg(long)]
    card_number: String,

    /// Card expiration (e.g. 8/28)
    #[arg(long)]
    expiration: String,

    /// Card security code
    #[arg(long)]
    code: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sleep_outside_cart=info,so_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list()?,
            CartAction::Add {
                id,
                name,
                price,
                quantity,
                color,
                image,
            } => commands::cart::add(&id, &name, price, quantity, color, image)?,
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::Qty { id, delta } => commands::cart::update_quantity(&id, delta)?,
            CartAction::Set { id, quantity } => commands::cart::set_quantity(&id, quantity)?,
            CartAction::Save { id } => commands::cart::save_for_later(&id)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list()?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&id)?,
            WishlistAction::Move { id } => commands::wishlist::move_to_cart(&id)?,
        },
        Commands::Totals => commands::cart::totals()?,
        Commands::Checkout(args) => commands::checkout::submit(args).await?,
    }
    Ok(())
}
