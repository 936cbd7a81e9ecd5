//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TRUSTCHECK_*` environment
//! variables. Provider credentials have no default; their absence is only an
//! error once a scan actually needs them (see [`Config::require_credentials`]).

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::aggregate::ScoreFormula;
use crate::constants::{
    DEFAULT_FANOUT_CONCURRENCY, DEFAULT_MAX_RESULTS_BASIC, DEFAULT_MAX_RESULTS_PRO,
    DEFAULT_PER_QUERY_LIMIT,
};
use crate::relevance::MatchPolicy;
use crate::severity::ScoringStrategy;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TRUSTCHECK_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Google Custom Search API key. No default.
    pub google_api_key: Option<String>,

    /// Google Custom Search engine (cx) id. No default.
    pub google_cx_id: Option<String>,

    /// Total result budget for BASIC scans. Default: `30`.
    pub max_results_basic: usize,

    /// Total result budget for PRO scans. Default: `100`.
    pub max_results_pro: usize,

    /// Per-sub-query result cap. Default: `25`.
    pub per_query_limit: usize,

    /// In-flight sub-query limit for the PRO fan-out. Default: `4`.
    pub fanout_concurrency: usize,

    /// Relevance filter strictness. Default: loose.
    pub match_policy: MatchPolicy,

    /// Per-result scoring strategy. Default: additive.
    pub scoring_strategy: ScoringStrategy,

    /// Aggregate score formula. Default: ratio-normalized.
    pub score_formula: ScoreFormula,

    /// Score at or above which the verdict is HIGH. Default: `70`.
    pub high_threshold: u32,

    /// Score at or above which the verdict is MEDIUM. Default: `40`.
    pub medium_threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            google_api_key: None,
            google_cx_id: None,
            max_results_basic: DEFAULT_MAX_RESULTS_BASIC,
            max_results_pro: DEFAULT_MAX_RESULTS_PRO,
            per_query_limit: DEFAULT_PER_QUERY_LIMIT,
            fanout_concurrency: DEFAULT_FANOUT_CONCURRENCY,
            match_policy: MatchPolicy::default(),
            scoring_strategy: ScoringStrategy::default(),
            score_formula: ScoreFormula::default(),
            high_threshold: 70,
            medium_threshold: 40,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TRUSTCHECK_PORT";
    const ENV_BIND_ADDR: &'static str = "TRUSTCHECK_BIND_ADDR";
    pub(crate) const ENV_API_KEY: &'static str = "TRUSTCHECK_GOOGLE_API_KEY";
    pub(crate) const ENV_CX_ID: &'static str = "TRUSTCHECK_GOOGLE_CX_ID";
    const ENV_MAX_RESULTS_BASIC: &'static str = "TRUSTCHECK_MAX_RESULTS_BASIC";
    const ENV_MAX_RESULTS_PRO: &'static str = "TRUSTCHECK_MAX_RESULTS_PRO";
    const ENV_PER_QUERY_LIMIT: &'static str = "TRUSTCHECK_PER_QUERY_LIMIT";
    const ENV_FANOUT_CONCURRENCY: &'static str = "TRUSTCHECK_FANOUT_CONCURRENCY";
    const ENV_MATCH_POLICY: &'static str = "TRUSTCHECK_MATCH_POLICY";
    const ENV_SCORING_STRATEGY: &'static str = "TRUSTCHECK_SCORING_STRATEGY";
    const ENV_SCORE_FORMULA: &'static str = "TRUSTCHECK_SCORE_FORMULA";
    const ENV_HIGH_THRESHOLD: &'static str = "TRUSTCHECK_HIGH_THRESHOLD";
    const ENV_MEDIUM_THRESHOLD: &'static str = "TRUSTCHECK_MEDIUM_THRESHOLD";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let google_api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let google_cx_id = Self::parse_optional_string_from_env(Self::ENV_CX_ID);
        let max_results_basic =
            Self::parse_usize_from_env(Self::ENV_MAX_RESULTS_BASIC, defaults.max_results_basic);
        let max_results_pro =
            Self::parse_usize_from_env(Self::ENV_MAX_RESULTS_PRO, defaults.max_results_pro);
        let per_query_limit =
            Self::parse_usize_from_env(Self::ENV_PER_QUERY_LIMIT, defaults.per_query_limit);
        let fanout_concurrency =
            Self::parse_usize_from_env(Self::ENV_FANOUT_CONCURRENCY, defaults.fanout_concurrency);
        let match_policy = Self::parse_match_policy_from_env(defaults.match_policy)?;
        let scoring_strategy = Self::parse_scoring_strategy_from_env(defaults.scoring_strategy)?;
        let score_formula = Self::parse_score_formula_from_env(defaults.score_formula)?;
        let high_threshold =
            Self::parse_u32_from_env(Self::ENV_HIGH_THRESHOLD, defaults.high_threshold);
        let medium_threshold =
            Self::parse_u32_from_env(Self::ENV_MEDIUM_THRESHOLD, defaults.medium_threshold);

        Ok(Self {
            port,
            bind_addr,
            google_api_key,
            google_cx_id,
            max_results_basic,
            max_results_pro,
            per_query_limit,
            fanout_concurrency,
            match_policy,
            scoring_strategy,
            score_formula,
            high_threshold,
            medium_threshold,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.high_threshold > 100 || self.medium_threshold > 100 {
            return Err(ConfigError::InvalidLimits {
                message: format!(
                    "thresholds must be <= 100 (high={}, medium={})",
                    self.high_threshold, self.medium_threshold
                ),
            });
        }
        if self.medium_threshold >= self.high_threshold {
            return Err(ConfigError::InvalidLimits {
                message: format!(
                    "medium threshold {} must be below high threshold {}",
                    self.medium_threshold, self.high_threshold
                ),
            });
        }
        if self.max_results_basic == 0 || self.max_results_pro == 0 || self.per_query_limit == 0 {
            return Err(ConfigError::InvalidLimits {
                message: "result budgets must be at least 1".to_string(),
            });
        }
        if self.fanout_concurrency == 0 {
            return Err(ConfigError::InvalidLimits {
                message: "fan-out concurrency must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the provider credentials, or [`ConfigError::MissingCredentials`].
    pub fn require_credentials(&self) -> Result<(&str, &str), ConfigError> {
        match (self.google_api_key.as_deref(), self.google_cx_id.as_deref()) {
            (Some(key), Some(cx)) => Ok((key, cx)),
            _ => Err(ConfigError::MissingCredentials {
                key_var: Self::ENV_API_KEY,
                cx_var: Self::ENV_CX_ID,
            }),
        }
    }

    /// `true` when both provider credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.google_api_key.is_some() && self.google_cx_id.is_some()
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_match_policy_from_env(default: MatchPolicy) -> Result<MatchPolicy, ConfigError> {
        match env::var(Self::ENV_MATCH_POLICY) {
            Ok(value) => match value.to_lowercase().as_str() {
                "loose" => Ok(MatchPolicy::Loose),
                "strict" => Ok(MatchPolicy::Strict),
                _ => Err(ConfigError::InvalidValue {
                    var: Self::ENV_MATCH_POLICY,
                    value,
                    expected: "loose, strict",
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_scoring_strategy_from_env(
        default: ScoringStrategy,
    ) -> Result<ScoringStrategy, ConfigError> {
        match env::var(Self::ENV_SCORING_STRATEGY) {
            Ok(value) => match value.to_lowercase().as_str() {
                "tiered" => Ok(ScoringStrategy::Tiered),
                "additive" => Ok(ScoringStrategy::Additive),
                _ => Err(ConfigError::InvalidValue {
                    var: Self::ENV_SCORING_STRATEGY,
                    value,
                    expected: "tiered, additive",
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_score_formula_from_env(default: ScoreFormula) -> Result<ScoreFormula, ConfigError> {
        match env::var(Self::ENV_SCORE_FORMULA) {
            Ok(value) => match value.to_lowercase().as_str() {
                "ratio" | "ratio_normalized" => Ok(ScoreFormula::RatioNormalized),
                "additive" | "additive_clamped" => Ok(ScoreFormula::AdditiveClamped),
                _ => Err(ConfigError::InvalidValue {
                    var: Self::ENV_SCORE_FORMULA,
                    value,
                    expected: "ratio_normalized, additive_clamped",
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_u32_from_env(var_name: &str, default: u32) -> u32 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
