use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;

use crate::aggregate::ScoreFormula;
use crate::relevance::MatchPolicy;
use crate::severity::ScoringStrategy;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_trustcheck_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("TRUSTCHECK_PORT");
        env::remove_var("TRUSTCHECK_BIND_ADDR");
        env::remove_var("TRUSTCHECK_GOOGLE_API_KEY");
        env::remove_var("TRUSTCHECK_GOOGLE_CX_ID");
        env::remove_var("TRUSTCHECK_MAX_RESULTS_BASIC");
        env::remove_var("TRUSTCHECK_MAX_RESULTS_PRO");
        env::remove_var("TRUSTCHECK_PER_QUERY_LIMIT");
        env::remove_var("TRUSTCHECK_FANOUT_CONCURRENCY");
        env::remove_var("TRUSTCHECK_MATCH_POLICY");
        env::remove_var("TRUSTCHECK_SCORING_STRATEGY");
        env::remove_var("TRUSTCHECK_SCORE_FORMULA");
        env::remove_var("TRUSTCHECK_HIGH_THRESHOLD");
        env::remove_var("TRUSTCHECK_MEDIUM_THRESHOLD");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.google_api_key.is_none());
    assert!(config.google_cx_id.is_none());
    assert_eq!(config.max_results_basic, 30);
    assert_eq!(config.max_results_pro, 100);
    assert_eq!(config.per_query_limit, 25);
    assert_eq!(config.fanout_concurrency, 4);
    assert_eq!(config.match_policy, MatchPolicy::Loose);
    assert_eq!(config.scoring_strategy, ScoringStrategy::Additive);
    assert_eq!(config.score_formula, ScoreFormula::RatioNormalized);
    assert_eq!(config.high_threshold, 70);
    assert_eq!(config.medium_threshold, 40);
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_trustcheck_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert!(config.google_api_key.is_none());
}

#[test]
#[serial]
fn test_from_env_credentials() {
    clear_trustcheck_env();

    with_env_vars(
        &[
            ("TRUSTCHECK_GOOGLE_API_KEY", "key-123"),
            ("TRUSTCHECK_GOOGLE_CX_ID", "cx-456"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert!(config.has_credentials());
            assert_eq!(config.require_credentials().unwrap(), ("key-123", "cx-456"));
        },
    );
}

#[test]
#[serial]
fn test_blank_credentials_treated_as_absent() {
    clear_trustcheck_env();

    with_env_vars(&[("TRUSTCHECK_GOOGLE_API_KEY", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.google_api_key.is_none());
    });
}

#[test]
fn test_require_credentials_missing() {
    let config = Config::default();

    let err = config.require_credentials().unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredentials { .. }));
    assert!(err.to_string().contains("TRUSTCHECK_GOOGLE_API_KEY"));
}

#[test]
#[serial]
fn test_from_env_strategy_selection() {
    clear_trustcheck_env();

    with_env_vars(
        &[
            ("TRUSTCHECK_MATCH_POLICY", "strict"),
            ("TRUSTCHECK_SCORING_STRATEGY", "tiered"),
            ("TRUSTCHECK_SCORE_FORMULA", "additive_clamped"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.match_policy, MatchPolicy::Strict);
            assert_eq!(config.scoring_strategy, ScoringStrategy::Tiered);
            assert_eq!(config.score_formula, ScoreFormula::AdditiveClamped);
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_strategy_rejected() {
    clear_trustcheck_env();

    with_env_vars(&[("TRUSTCHECK_SCORING_STRATEGY", "quantum")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("quantum"));
    });
}

#[test]
#[serial]
fn test_from_env_custom_limits() {
    clear_trustcheck_env();

    with_env_vars(
        &[
            ("TRUSTCHECK_MAX_RESULTS_PRO", "60"),
            ("TRUSTCHECK_PER_QUERY_LIMIT", "15"),
            ("TRUSTCHECK_HIGH_THRESHOLD", "60"),
            ("TRUSTCHECK_MEDIUM_THRESHOLD", "35"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.max_results_pro, 60);
            assert_eq!(config.per_query_limit, 15);
            assert_eq!(config.high_threshold, 60);
            assert_eq!(config.medium_threshold, 35);
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_limit_falls_back_to_default() {
    clear_trustcheck_env();

    with_env_vars(&[("TRUSTCHECK_MAX_RESULTS_PRO", "lots")], || {
        let config = Config::from_env().expect("should parse with fallback");
        assert_eq!(config.max_results_pro, 100);
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_trustcheck_env();

    with_env_vars(&[("TRUSTCHECK_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_trustcheck_env();

    with_env_vars(&[("TRUSTCHECK_BIND_ADDR", "not.an.ip")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    });
}

#[test]
fn test_validate_threshold_ordering() {
    let config = Config {
        high_threshold: 40,
        medium_threshold: 70,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLimits { .. }));
}

#[test]
fn test_validate_thresholds_above_100() {
    let config = Config {
        high_threshold: 120,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_zero_budget() {
    let config = Config {
        per_query_limit: 0,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_default_is_ok() {
    assert!(Config::default().validate().is_ok());
}
