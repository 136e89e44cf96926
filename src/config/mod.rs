pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::section::DEFAULT_PARTNER_LIMIT;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SectionError};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

pub const ALLOWED_OUTPUT_EXTENSIONS: [&str; 2] = ["html", "htm"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "partners-section")]
#[command(about = "Fetch partners and render the partners section as HTML")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000/api/partners")]
    pub api_endpoint: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "partners-section.html")]
    pub filename: String,

    #[arg(long, default_value_t = DEFAULT_PARTNER_LIMIT)]
    pub max_partners: usize,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// Extra request header as `Name: value`, repeatable
    #[arg(long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log process CPU and memory per phase")]
    pub monitor: bool,
}

/// Splits a `Name: value` header flag.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(SectionError::InvalidConfigValueError {
            field: "header".to_string(),
            value: raw.to_string(),
            reason: "Expected NAME:VALUE".to_string(),
        }),
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.filename
    }

    fn max_partners(&self) -> usize {
        self.max_partners
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn headers(&self) -> Vec<(String, String)> {
        // Malformed flags are rejected by validate().
        self.headers
            .iter()
            .filter_map(|raw| parse_header(raw).ok())
            .collect()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_name("filename", &self.filename, &ALLOWED_OUTPUT_EXTENSIONS)?;
        validation::validate_positive_number("max_partners", self.max_partners, 1)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        for raw in &self.headers {
            parse_header(raw)?;
        }
        Ok(())
    }
}
