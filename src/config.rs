use crate::errors::DemoResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether to emit ANSI colors. The --no-color flag overrides this.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

impl Config {
    /// Read `vuln-demo.toml` from the config dir, falling back to defaults
    /// when the file does not exist.
    pub fn load(config_dir: &Path) -> DemoResult<Self> {
        let config_path = config_dir.join("vuln-demo.toml");
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }
}

#[test]
fn load_returns_defaults_when_file_missing() {
    let cfg_dir = tempfile::tempdir().unwrap();

    let cfg = Config::load(cfg_dir.path()).expect("Config::load should succeed");

    assert!(cfg.output.color);
}

#[test]
fn load_reads_user_overrides() {
    let cfg_dir = tempfile::tempdir().unwrap();
    let user_toml = r#"
        [output]
        color = false
    "#;
    fs::write(cfg_dir.path().join("vuln-demo.toml"), user_toml).unwrap();

    let cfg = Config::load(cfg_dir.path()).expect("Config::load should succeed");

    assert!(!cfg.output.color);
}

#[test]
fn malformed_config_is_an_error() {
    let cfg_dir = tempfile::tempdir().unwrap();
    fs::write(cfg_dir.path().join("vuln-demo.toml"), "not valid toml [").unwrap();

    assert!(Config::load(cfg_dir.path()).is_err());
}
