//! Application configuration structures.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{MAX_MATCH_SCORE, MIN_MATCH_SCORE, Provider};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Aggregation behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Match scoring heuristic
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Per-provider endpoints and credentials
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Settings for one provider.
    pub fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::LinkedIn => &self.providers.linkedin,
            Provider::Naukri => &self.providers.naukri,
            Provider::Internshala => &self.providers.internshala,
        }
    }

    /// Providers that are enabled, in aggregation order.
    pub fn enabled_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|&p| self.provider(p).enabled)
            .collect()
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.search.source_timeout_secs == 0 {
            return Err(AppError::validation(
                "search.source_timeout_secs must be > 0",
            ));
        }
        if self.http.timeout_secs >= self.search.source_timeout_secs {
            return Err(AppError::validation(
                "http.timeout_secs must be below search.source_timeout_secs",
            ));
        }
        if self.search.default_limit == 0 {
            return Err(AppError::validation("search.default_limit must be > 0"));
        }
        if !(MIN_MATCH_SCORE as i64..=MAX_MATCH_SCORE as i64).contains(&self.scoring.base_score) {
            return Err(AppError::validation(format!(
                "scoring.base_score must be within {MIN_MATCH_SCORE}..={MAX_MATCH_SCORE}"
            )));
        }
        let max_bonus = (MAX_MATCH_SCORE - MIN_MATCH_SCORE) as i64;
        if !(0..=max_bonus).contains(&self.scoring.skill_bonus) {
            return Err(AppError::validation(format!(
                "scoring.skill_bonus must be within 0..={max_bonus}"
            )));
        }
        if self.scoring.jitter > 50 {
            return Err(AppError::validation("scoring.jitter must be <= 50"));
        }
        if self.scoring.user_skills.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::validation("scoring.user_skills contains a blank entry"));
        }
        if self.enabled_providers().is_empty() {
            return Err(AppError::validation("No providers enabled"));
        }
        for provider in Provider::ALL {
            let base = self.provider(provider).base_url_for(provider);
            Url::parse(&base).map_err(|e| {
                AppError::validation(format!(
                    "providers.{}.base_url '{}' is invalid: {}",
                    provider.tag(),
                    base,
                    e
                ))
            })?;
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result limit sent upstream when the caller gives none
    #[serde(default = "defaults::default_limit")]
    pub default_limit: usize,

    /// Upper bound on how long one source may take before it is dropped
    #[serde(default = "defaults::source_timeout")]
    pub source_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::default_limit(),
            source_timeout_secs: defaults::source_timeout(),
        }
    }
}

/// Match scoring settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "defaults::base_score")]
    pub base_score: i64,

    /// Bonus per overlapping skill
    #[serde(default = "defaults::skill_bonus")]
    pub skill_bonus: i64,

    /// Maximum random perturbation in either direction
    #[serde(default = "defaults::jitter")]
    pub jitter: u32,

    /// Skills of the user the listings are scored against
    #[serde(default = "defaults::user_skills")]
    pub user_skills: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: defaults::base_score(),
            skill_bonus: defaults::skill_bonus(),
            jitter: defaults::jitter(),
            user_skills: defaults::user_skills(),
        }
    }
}

/// Settings for all providers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub linkedin: ProviderConfig,
    #[serde(default)]
    pub naukri: ProviderConfig,
    #[serde(default)]
    pub internshala: ProviderConfig,
}

/// Endpoint and credential settings for one provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// API base URL (provider default when unset)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Inline bearer token, takes precedence over `api_key_env`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable holding the bearer token
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled(),
            base_url: None,
            api_key: None,
            api_key_env: None,
        }
    }
}

impl ProviderConfig {
    /// Effective base URL for the provider.
    pub fn base_url_for(&self, provider: Provider) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| defaults::base_url(provider).to_string())
    }

    /// Name of the environment variable consulted for the token.
    pub fn api_key_env_for(&self, provider: Provider) -> String {
        self.api_key_env
            .clone()
            .unwrap_or_else(|| format!("{}_API_KEY", provider.tag().to_uppercase()))
    }

    /// Resolve the bearer token from inline config or the environment.
    pub fn resolve_api_key(&self, provider: Provider) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(self.api_key_env_for(provider)).ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Template for one listing line, see `Listing::format`
    #[serde(default = "defaults::line_template")]
    pub line_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_template: defaults::line_template(),
        }
    }
}

mod defaults {
    use crate::models::Provider;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; Prismiq/1.0)".into()
    }
    pub fn timeout() -> u64 {
        5
    }

    // Search defaults
    pub fn default_limit() -> usize {
        10
    }
    pub fn source_timeout() -> u64 {
        8
    }

    // Scoring defaults
    pub fn base_score() -> i64 {
        70
    }
    pub fn skill_bonus() -> i64 {
        5
    }
    pub fn jitter() -> u32 {
        10
    }
    pub fn user_skills() -> Vec<String> {
        vec![
            "React".into(),
            "JavaScript".into(),
            "TypeScript".into(),
            "Node.js".into(),
        ]
    }

    // Provider defaults
    pub fn enabled() -> bool {
        true
    }
    pub fn base_url(provider: Provider) -> &'static str {
        match provider {
            Provider::LinkedIn => "https://api.linkedin.com/v2",
            Provider::Naukri => "https://www.naukri.com/jobapi",
            Provider::Internshala => "https://internshala.com/api",
        }
    }

    // Output defaults
    pub fn line_template() -> String {
        "[{score}] {title} @ {organization} · {location} · {compensation} ({provider}, {posted})"
            .into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_base_score() {
        let mut config = Config::default();
        config.scoring.base_score = 40;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_http_timeout_not_below_source_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 5;
        config.search.source_timeout_secs = 1;
        assert!(config.validate().is_err());
        config.search.source_timeout_secs = 5;
        assert!(config.validate().is_err());
        config.search.source_timeout_secs = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_skill_bonus() {
        let mut config = Config::default();
        config.scoring.skill_bonus = -5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_oversized_skill_bonus() {
        let mut config = Config::default();
        config.scoring.skill_bonus = i64::MAX;
        assert!(config.validate().is_err());
        config.scoring.skill_bonus = 38;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_user_skill() {
        let mut config = Config::default();
        config.scoring.user_skills.push("  ".to_string());
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_rejects_all_providers_disabled() {
        let mut config = Config::default();
        config.providers.linkedin.enabled = false;
        config.providers.naukri.enabled = false;
        config.providers.internshala.enabled = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.providers.naukri.base_url = Some("not a url".to_string());
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn inline_api_key_wins() {
        let provider = ProviderConfig {
            api_key: Some(" token ".to_string()),
            api_key_env: Some("PRISMIQ_TEST_UNSET_KEY_VAR".to_string()),
            ..ProviderConfig::default()
        };
        assert_eq!(
            provider.resolve_api_key(Provider::LinkedIn).as_deref(),
            Some("token")
        );
    }

    #[test]
    fn missing_api_key_resolves_to_none() {
        let provider = ProviderConfig {
            api_key_env: Some("PRISMIQ_TEST_UNSET_KEY_VAR".to_string()),
            ..ProviderConfig::default()
        };
        assert_eq!(provider.resolve_api_key(Provider::Naukri), None);
        assert_eq!(
            ProviderConfig::default().api_key_env_for(Provider::Internshala),
            "INTERNSHALA_API_KEY"
        );
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[scoring]
jitter = 0

[providers.naukri]
enabled = false
base_url = "http://localhost:9000/naukri"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scoring.jitter, 0);
        assert_eq!(config.scoring.base_score, 70);
        assert_eq!(config.http.timeout_secs, 5);
        assert!(!config.providers.naukri.enabled);
        assert_eq!(
            config.provider(Provider::Naukri).base_url_for(Provider::Naukri),
            "http://localhost:9000/naukri"
        );
        assert_eq!(
            config.enabled_providers(),
            vec![Provider::LinkedIn, Provider::Internshala]
        );
    }

    #[test]
    fn shipped_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
        let config = Config::load(path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.enabled_providers().len(), 3);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/prismiq/config.toml");
        assert_eq!(config.search.default_limit, 10);
    }
}
