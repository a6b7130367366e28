mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_error::ConfigError;
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{CONFIG_FILE, GameConfig, MAX_BOT_DELAY_MS, get_config_manager};
pub use validate::Validate;
