use crate::error::ConfigError;
use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relative weights of the terms in [`Board::board_worth`](crate::Board::board_worth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub health: f64,
    pub position: f64,
    pub bad_shape: f64,
    pub capture: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            health: 1.0,
            position: 0.1,
            bad_shape: 2.0,
            capture: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub komi: f32,
    pub weights: Weights,
    /// Worth magnitude beyond which a position counts as decided.
    pub win_threshold: f64,
    /// Fraction of a typical game after which empty-region scoring reaches
    /// the board edge.
    pub empty_region_edge_threshold: f32,
    /// Run `Board::validate` after every move and panic on failure.
    pub validate_after_move: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: 9,
            komi: 6.5,
            weights: Weights::default(),
            win_threshold: 800.0,
            empty_region_edge_threshold: 0.24,
            validate_after_move: cfg!(debug_assertions),
        }
    }
}

impl EngineConfig {
    pub fn with_size(board_size: usize) -> Self {
        EngineConfig {
            board_size,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board size {} not in {}..={}",
                self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }
        if !self.win_threshold.is_finite() || self.win_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "win threshold {} must be positive",
                self.win_threshold
            )));
        }
        let edge_threshold = self.empty_region_edge_threshold;
        if !edge_threshold.is_finite() || edge_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "empty region edge threshold {} must be positive",
                self.empty_region_edge_threshold
            )));
        }
        if !self.komi.is_finite() {
            return Err(ConfigError::Invalid("komi must be finite".to_string()));
        }
        let w = &self.weights;
        if [w.health, w.position, w.bad_shape, w.capture].iter().any(|x| !x.is_finite()) {
            return Err(ConfigError::Invalid("weights must be finite".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn missing_fields_take_defaults() {
        let json = r#"{ "board_size": 13, "weights": { "capture": 3.0 } }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(config.board_size, 13);
        assert_eq!(config.komi, 6.5);
        assert_eq!(config.weights.capture, 3.0);
        assert_eq!(config.weights.health, 1.0);
    }

    #[test]
    fn rejects_oversized_board() {
        assert_matches!(
            EngineConfig::from_json_str(r#"{ "board_size": 25 }"#),
            Err(ConfigError::Invalid(_))
        );
        assert_matches!(EngineConfig::from_json_str("{ board_size"), Err(ConfigError::Parse(_)));
    }
}
