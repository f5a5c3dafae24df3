pub mod config_manager;

pub use config_manager::{ConfigManager, ConfigOverrides, SelectionConfig};
