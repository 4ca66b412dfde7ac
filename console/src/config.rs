use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::{validate_board_size, SnakeGameSettings};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "snake_console_config.yaml";
pub const MAX_BOARD_SIZE: usize = 100;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub board_size: usize,
    /// Fixed seed for reproducible boards; random when absent.
    pub seed: Option<u64>,
    #[serde(default)]
    pub settings: SnakeGameSettings,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        validate_board_size(self.board_size)?;
        if self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "board_size must not exceed {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            ));
        }
        self.settings.validate()?;
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            seed: None,
            settings: SnakeGameSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConsoleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let config = ConsoleConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&config).unwrap();
        let deserialized: ConsoleConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = ConsoleConfig {
            board_size: 20,
            seed: Some(1234),
            ..ConsoleConfig::default()
        };
        let manager = get_config_manager(&get_temp_file_path());

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_settings_section_is_optional() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("board_size: 10\nseed: 7\n")
            .unwrap();

        let config = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.settings, SnakeGameSettings::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("board_size: 4\nseed: ~\n")
            .unwrap();

        assert!(get_config_manager(&file_path).get_config().is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager = get_config_manager(&get_temp_file_path());
        let config = ConsoleConfig {
            board_size: 500,
            ..ConsoleConfig::default()
        };
        assert!(manager.set_config(&config).is_err());
    }

    #[test]
    fn test_board_size_is_capped_for_the_console() {
        let config = |board_size| ConsoleConfig {
            board_size,
            ..ConsoleConfig::default()
        };
        assert!(config(9).validate().is_ok());
        assert!(config(100).validate().is_ok());
        assert!(config(101).validate().is_err());
        assert!(config(8).validate().is_err());
    }
}
