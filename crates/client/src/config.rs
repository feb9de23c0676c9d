//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `items.ron` and `config.toml`.
    pub data_dir: PathBuf,
    /// Log directory name; a timestamped one is generated when unset.
    pub session_id: Option<String>,
    pub message_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            session_id: None,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/inventory/content/data";
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 32;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KITCHEN_DATA_DIR` - Content directory (default: crates/inventory/content/data)
    /// - `KITCHEN_SESSION_ID` - Session name used for the log directory
    /// - `KITCHEN_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("KITCHEN_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.session_id = env::var("KITCHEN_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());
        if let Some(capacity) = read_env::<usize>("KITCHEN_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
