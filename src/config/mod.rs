use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset output configuration.
    pub dataset: DatasetConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Dataset output configuration
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Path of the CSV file session records are appended to.
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug").
    pub level: String,
    /// Log output format.
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable output.
    Pretty,
    /// Structured JSON output.
    Json,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every key has a default, so the tool runs with no environment
    /// at all. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let dataset = DatasetConfig {
            path: PathBuf::from(
                env::var("DATASET_PATH").unwrap_or_else(|_| "sentiment_dataset.csv".to_string()),
            ),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Config { dataset, logging }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig {
                path: PathBuf::from("sentiment_dataset.csv"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}
