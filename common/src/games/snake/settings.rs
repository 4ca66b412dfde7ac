use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Smallest board that holds the spawned snake below the center cell.
pub const MIN_BOARD_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeGameSettings {
    pub base_tick_interval_ms: u64,
    pub tick_interval_step_ms: u64,
    pub min_tick_interval_ms: u64,
    pub points_per_speed_up: u32,
}

impl Default for SnakeGameSettings {
    fn default() -> Self {
        Self {
            base_tick_interval_ms: 400,
            tick_interval_step_ms: 50,
            min_tick_interval_ms: 50,
            points_per_speed_up: 10,
        }
    }
}

impl SnakeGameSettings {
    /// Interval after reaching a speed-up threshold. Stays put once at the floor.
    pub fn next_tick_interval(&self, current_ms: u64) -> u64 {
        if current_ms > self.min_tick_interval_ms {
            current_ms
                .saturating_sub(self.tick_interval_step_ms)
                .max(self.min_tick_interval_ms)
        } else {
            current_ms
        }
    }

    pub fn is_speed_up_score(&self, score: u32) -> bool {
        self.points_per_speed_up > 0 && score > 0 && score % self.points_per_speed_up == 0
    }
}

impl Validate for SnakeGameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.base_tick_interval_ms == 0 {
            return Err("base_tick_interval_ms must be greater than 0".to_string());
        }
        if self.min_tick_interval_ms == 0 {
            return Err("min_tick_interval_ms must be greater than 0".to_string());
        }
        if self.min_tick_interval_ms > self.base_tick_interval_ms {
            return Err("min_tick_interval_ms must not exceed base_tick_interval_ms".to_string());
        }
        if self.tick_interval_step_ms == 0 {
            return Err("tick_interval_step_ms must be greater than 0".to_string());
        }
        if self.points_per_speed_up == 0 {
            return Err("points_per_speed_up must be greater than 0".to_string());
        }
        Ok(())
    }
}

// Sizes outside the standard table get the smallest count.
pub fn wall_count(board_size: usize) -> usize {
    match board_size {
        10 => 6,
        15 => 12,
        20 => 18,
        _ => 6,
    }
}

/// Only rejects boards the spawn does not fit on; every other size is playable.
pub fn validate_board_size(board_size: usize) -> Result<(), String> {
    if board_size < MIN_BOARD_SIZE {
        return Err(format!(
            "Board size must be at least {}, got {}",
            MIN_BOARD_SIZE, board_size
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_count_table() {
        assert_eq!(wall_count(10), 6);
        assert_eq!(wall_count(15), 12);
        assert_eq!(wall_count(20), 18);
        assert_eq!(wall_count(12), 6);
        assert_eq!(wall_count(40), 6);
    }

    #[test]
    fn test_next_tick_interval_has_floor() {
        let settings = SnakeGameSettings::default();
        assert_eq!(settings.next_tick_interval(400), 350);
        assert_eq!(settings.next_tick_interval(100), 50);
        assert_eq!(settings.next_tick_interval(50), 50);
    }

    #[test]
    fn test_speed_up_scores() {
        let settings = SnakeGameSettings::default();
        assert!(!settings.is_speed_up_score(0));
        assert!(!settings.is_speed_up_score(9));
        assert!(settings.is_speed_up_score(10));
        assert!(settings.is_speed_up_score(30));
    }

    #[test]
    fn test_board_size_bounds() {
        assert!(validate_board_size(8).is_err());
        assert!(validate_board_size(9).is_ok());
        assert!(validate_board_size(100).is_ok());
        assert!(validate_board_size(101).is_ok());
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeGameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = SnakeGameSettings {
            min_tick_interval_ms: 500,
            ..SnakeGameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SnakeGameSettings {
            points_per_speed_up: 0,
            ..SnakeGameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: SnakeGameSettings =
            serde_yaml_ng::from_str("base_tick_interval_ms: 300").unwrap();
        assert_eq!(settings.base_tick_interval_ms, 300);
        assert_eq!(settings.tick_interval_step_ms, 50);
        assert_eq!(settings.points_per_speed_up, 10);
    }
}
