use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use backprop_nn::{NetworkError, Topology};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Everything the driver needs for one run: the network shape, the single
/// training example and how long to train on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    pub topology: Topology,
    pub learning_rate: f64,
    pub iterations: usize,
    pub inputs: Vec<f64>,
    pub target: Vec<f64>,
    /// Seeds weight initialization; thread RNG when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Log the loss every `log_every` steps; `0` disables periodic logging.
    #[serde(default = "default_log_every")]
    pub log_every: usize,
}

fn default_log_every() -> usize {
    100
}

impl Default for DriverConfig {
    /// The built-in sample: a 3-3-3 network learning to reproduce its input.
    fn default() -> Self {
        DriverConfig {
            topology: Topology::new(3, 3, 3),
            learning_rate: 0.5,
            iterations: 600,
            inputs: vec![0.01, 0.99, 0.70],
            target: vec![0.01, 0.99, 0.70],
            seed: None,
            log_every: default_log_every(),
        }
    }
}

impl DriverConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<DriverConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: DriverConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs.len() != self.topology.inputs {
            return Err(ConfigError::Invalid(format!(
                "inputs has {} values, topology expects {}",
                self.inputs.len(),
                self.topology.inputs
            )));
        }
        if self.target.len() != self.topology.outputs {
            return Err(ConfigError::Invalid(format!(
                "target has {} values, topology expects {}",
                self.target.len(),
                self.topology.outputs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(DriverConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_with_optional_fields_missing() {
        let json = r#"{
            "topology": {"inputs": 2, "hidden": 3, "outputs": 1},
            "learning_rate": 0.3,
            "iterations": 50,
            "inputs": [0.1, 0.2],
            "target": [0.8]
        }"#;
        let config: DriverConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_every, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_target_of_wrong_length() {
        let config = DriverConfig { target: vec![0.5], ..DriverConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
