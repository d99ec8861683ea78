use std::env;
use std::time::Duration;

use crate::core::indicator::DEFAULT_COPY_FEEDBACK;

/// Counter limit shown next to the input (informational, never enforced).
pub const DEFAULT_MAX_CHARS: usize = 1000;

pub const MAX_CHARS_VAR: &str = "WA_FORMATTER_MAX_CHARS";
pub const COPY_FEEDBACK_VAR: &str = "WA_FORMATTER_COPY_FEEDBACK_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_chars: usize,
    pub copy_feedback: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Load configuration from the environment.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build a config from any key lookup (the environment in production, a map in tests).
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();
    let max_chars = match lookup(MAX_CHARS_VAR) {
        Some(v) => parse_positive(MAX_CHARS_VAR, &v)? as usize,
        None => defaults.max_chars,
    };
    let copy_feedback = match lookup(COPY_FEEDBACK_VAR) {
        Some(v) => Duration::from_millis(parse_positive(COPY_FEEDBACK_VAR, &v)?),
        None => defaults.copy_feedback,
    };
    Ok(Config {
        max_chars,
        copy_feedback,
    })
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_chars, 1000);
        assert_eq!(config.copy_feedback, Duration::from_millis(2000));
    }

    #[test]
    fn overrides_from_env() {
        let config =
            from_lookup(lookup(&[(MAX_CHARS_VAR, "280"), (COPY_FEEDBACK_VAR, " 500 ")])).unwrap();
        assert_eq!(config.max_chars, 280);
        assert_eq!(config.copy_feedback, Duration::from_millis(500));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        for bad in ["0", "-3", "lots", ""] {
            let err = from_lookup(lookup(&[(MAX_CHARS_VAR, bad)])).unwrap_err();
            assert!(err.to_string().contains(MAX_CHARS_VAR), "got: {err}");
        }
    }
}
