use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from pitchscan.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Scan pipeline configuration: input shape and output naming
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Header of the column holding the statements to scan
    pub statement_column: String,
    /// Explicit field delimiter; when unset the reader tries comma, then
    /// falls back to semicolon
    pub delimiter: Option<String>,
    /// Appended to the input file stem for the annotated output
    pub output_suffix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            statement_column: "Statement".to_string(),
            delimiter: None,
            output_suffix: "_scanned".to_string(),
        }
    }
}

/// Runtime knobs that only make sense per invocation, never persisted
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub report_hits: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_hits: true,
        }
    }
}

impl RuntimeConfig {
    pub fn load_from_env() -> Self {
        let log_level = std::env::var("PITCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let report_hits = std::env::var("PITCH_REPORT_HITS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        Self {
            log_level,
            report_hits,
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses the PITCH_CONFIG environment variable or defaults to "pitchscan.toml".
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(env_path) = std::env::var("PITCH_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path =
            std::env::var("PITCH_CONFIG").unwrap_or_else(|_| "pitchscan.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Apply env overrides for the scan shape (env-first)
        if let Ok(column) = std::env::var("PITCH_STATEMENT_COLUMN") {
            config.scan.statement_column = column;
        }
        if let Ok(delimiter) = std::env::var("PITCH_DELIMITER") {
            config.scan.delimiter = Some(delimiter);
        }

        // Load runtime configuration from environment variables
        config.runtime = RuntimeConfig::load_from_env();

        // Validate configuration
        if config.scan.statement_column.trim().is_empty() {
            anyhow::bail!("statement_column must not be empty");
        }
        if let Some(delimiter) = &config.scan.delimiter {
            if delimiter.len() != 1 {
                anyhow::bail!("delimiter must be a single byte, got '{}'", delimiter);
            }
        }
        if config.scan.output_suffix.is_empty() {
            tracing::warn!("output_suffix is empty; annotated output would overwrite the input");
        }

        Ok(config)
    }
}
