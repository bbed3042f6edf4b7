use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal export to analyze
    pub journal_file: String,

    // Output
    pub output_format: OutputFormat,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            journal_file: env("JOURNAL_FILE", "logs/journal.json"),
            output_format: OutputFormat::parse(&env("OUTPUT_FORMAT", "text")),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    /// Command-line overrides: a positional journal path and `--json`.
    pub fn apply_args(mut self, args: &[String]) -> Self {
        for arg in args {
            match arg.as_str() {
                "--json" => self.output_format = OutputFormat::Json,
                "--text" => self.output_format = OutputFormat::Text,
                path if !path.starts_with("--") => self.journal_file = path.to_string(),
                _ => {}
            }
        }
        self
    }
}
