//! Text frontend for the kitchen inventory.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment)
//!   ├─→ ContentFactory (items.ron, config.toml)
//!   └─→ Kitchen (containers, panels, drag state)
//!         └─→ app::run (read command, execute, render)
//! ```

pub mod app;
pub mod command;
pub mod config;
pub mod kitchen;
pub mod logging;
pub mod message;
pub mod panels;
pub mod render;

pub use command::{Command, CommandError};
pub use config::ClientConfig;
pub use kitchen::{Kitchen, Response};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use panels::PanelSet;
