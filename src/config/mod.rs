use std::env;
use std::fmt;

use crate::plan::SelectionLimits;

/// Distinguishes runtime behavior for different stages of the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an embedding shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub limits: SelectionLimits,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = SelectionLimits::default();
        let limits = SelectionLimits {
            interventions: limit_from_env("PLAN_MAX_INTERVENTIONS", defaults.interventions)?,
            referrals: limit_from_env("PLAN_MAX_REFERRALS", defaults.referrals)?,
            strategies: limit_from_env("PLAN_MAX_STRATEGIES", defaults.strategies)?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            limits,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn limit_from_env(var: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|source| ConfigError::InvalidLimit { var, source }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLimit {
        var: &'static str,
        source: std::num::ParseIntError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLimit { var, .. } => {
                write!(f, "{var} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLimit { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("PLAN_MAX_INTERVENTIONS");
        env::remove_var("PLAN_MAX_REFERRALS");
        env::remove_var("PLAN_MAX_STRATEGIES");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.limits, SelectionLimits::default());
        assert_eq!(config.limits.interventions, 5);
        assert_eq!(config.limits.referrals, 2);
        assert_eq!(config.limits.strategies, 3);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_reads_limit_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("PLAN_MAX_INTERVENTIONS", " 7 ");
        env::set_var("PLAN_MAX_REFERRALS", "1");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.limits.interventions, 7);
        assert_eq!(config.limits.referrals, 1);
        assert_eq!(config.limits.strategies, 3);
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PLAN_MAX_STRATEGIES", "three");
        match AppConfig::load() {
            Err(ConfigError::InvalidLimit { var, .. }) => assert_eq!(var, "PLAN_MAX_STRATEGIES"),
            other => panic!("expected invalid limit, got {other:?}"),
        }
        reset_env();
    }
}
