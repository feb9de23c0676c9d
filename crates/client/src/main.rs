//! Kitchen client binary.
//!
//! Main entry point for the text frontend. The binary is the composition
//! root: it loads configuration, sets up logging, loads content and hands a
//! [`Kitchen`] to the frontend loop.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p kitchen-client
//!
//! # Custom content directory and verbose logs
//! KITCHEN_DATA_DIR=./my-data RUST_LOG=debug cargo run -p kitchen-client
//! ```

use anyhow::{Context, Result};
use inventory_content::ContentFactory;
use kitchen_client::{ClientConfig, Kitchen, app, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let log_file = logging::setup_logging(config.session_id.as_deref())?;
    tracing::info!("Data directory: {}", config.data_dir.display());

    // 3. Load content
    let factory = ContentFactory::new(&config.data_dir);
    let inventory_config = factory
        .load_config()
        .with_context(|| format!("loading config from {}", config.data_dir.display()))?;
    let catalog = factory
        .load_items()
        .with_context(|| format!("loading items from {}", config.data_dir.display()))?;
    tracing::info!(
        "Loaded {} items; inventory={} toolbar={} fridge={} pantry={}",
        catalog.len(),
        inventory_config.player_inventory_slots,
        inventory_config.toolbar_slots,
        inventory_config.fridge_slots,
        inventory_config.pantry_slots
    );

    // 4. Run the frontend
    let mut kitchen = Kitchen::new(catalog, &inventory_config, config.message_capacity);
    println!("Welcome to the kitchen. Type 'help' for commands.");
    println!("(logs: {})", log_file.display());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    app::run(&mut kitchen, stdin.lock(), &mut stdout)?;

    Ok(())
}
