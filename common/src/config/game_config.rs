use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{DEFAULT_BOT_DELAY, Difficulty, GameMode};
use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsHuman,
            difficulty: Difficulty::Random,
            bot_delay_ms: DEFAULT_BOT_DELAY.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    fn remove_temp_file(path: &str) {
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_saves_and_loads() {
        let config = GameConfig {
            mode: GameMode::VsBot,
            difficulty: Difficulty::Optimal,
            bot_delay_ms: 250,
        };
        let saved_path = get_temp_file_path();
        let manager = get_config_manager(&saved_path);
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider
            .set_config_content(&YamlConfigSerializer::new().serialize(&config).unwrap())
            .unwrap();
        let fresh = get_config_manager(&path);
        assert_eq!(fresh.get_config().unwrap(), config);

        remove_temp_file(&saved_path);
        remove_temp_file(&path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_yaml_uses_variant_names() {
        let content = "mode: VsBot\ndifficulty: Optimal\nbot_delay_ms: 0\n";
        let config: GameConfig = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.mode, GameMode::VsBot);
        assert_eq!(config.difficulty, Difficulty::Optimal);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider
            .set_config_content("mode: VsBot\ndifficulty: Optimal\nbot_delay_ms: 60000\n")
            .unwrap();
        let manager = get_config_manager(&path);
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
        remove_temp_file(&path);
    }

    #[test]
    fn test_malformed_config_cant_be_read() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("mode: Sideways\n").unwrap();
        let manager = get_config_manager(&path);
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
        remove_temp_file(&path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let path = get_temp_file_path();
        let manager = get_config_manager(&path);
        let config = GameConfig {
            bot_delay_ms: MAX_BOT_DELAY_MS + 1,
            ..GameConfig::default()
        };
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Validation(_))));
        assert!(!std::path::Path::new(&path).exists());
        remove_temp_file(&path);
    }
}
