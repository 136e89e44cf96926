use crate::config::ALLOWED_OUTPUT_EXTENSIONS;
use crate::core::section::DEFAULT_PARTNER_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SectionError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_FILENAME: &str = "partners-section.html";

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env var pattern: {e}"))
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub section: SectionConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionConfig {
    pub max_partners: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SectionError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }

    fn max_partners(&self) -> usize {
        self.section.max_partners.unwrap_or(DEFAULT_PARTNER_LIMIT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.source
            .headers
            .as_ref()
            .map(|headers| {
                headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_file_name(
            "output.filename",
            self.output_filename(),
            &ALLOWED_OUTPUT_EXTENSIONS,
        )?;
        validation::validate_positive_number("section.max_partners", self.max_partners(), 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/partners"

[output]
path = "./site"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_endpoint(), "https://api.example.com/partners");
        assert_eq!(config.max_partners(), 6);
        assert_eq!(config.output_filename(), "partners-section.html");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.headers().is_empty());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/partners"
timeout_seconds = 10
headers = { Authorization = "Bearer token", "X-Locale" = "ar" }

[section]
max_partners = 4

[output]
path = "./site"
filename = "home-partners.htm"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.max_partners(), 4);
        assert_eq!(config.output_filename(), "home-partners.htm");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.headers().len(), 2);
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PARTNERS_SECTION_TEST_HOST", "https://partners.test");

        let toml_content = r#"
[source]
endpoint = "${PARTNERS_SECTION_TEST_HOST}/api/partners"
headers = { Authorization = "Bearer ${PARTNERS_SECTION_UNSET_TOKEN}" }

[output]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), "https://partners.test/api/partners");
        assert_eq!(
            config.headers()[0].1,
            "Bearer ${PARTNERS_SECTION_UNSET_TOKEN}"
        );

        std::env::remove_var("PARTNERS_SECTION_TEST_HOST");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[source]
endpoint = "invalid-url"

[output]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let zero_limit = r#"
[source]
endpoint = "https://api.example.com"

[section]
max_partners = 0

[output]
path = "./output"
"#;
        let config = TomlConfig::from_toml_str(zero_limit).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let result = TomlConfig::from_toml_str("[source]\nendpoint = \"https://x.test\"\n");
        assert!(matches!(
            result,
            Err(SectionError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
endpoint = "https://api.example.com/partners"

[output]
path = "./output"
filename = "partners.html"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_filename(), "partners.html");
    }
}
