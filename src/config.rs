use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub vocab_path: PathBuf,
    pub static_dir: PathBuf,
    pub session_days: i64,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "QUIZ_BIND_ADDR", "127.0.0.1:5000")?;
        let session_days: i64 = parse_var(&lookup, "QUIZ_SESSION_DAYS", "1")?;
        if session_days < 1 {
            return Err(ConfigError::Invalid {
                key: "QUIZ_SESSION_DAYS",
                value: session_days.to_string(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            bind_addr,
            vocab_path: lookup("QUIZ_VOCAB_PATH")
                .unwrap_or_else(|| "data/default_vocab.csv".into())
                .into(),
            static_dir: lookup("QUIZ_STATIC_DIR")
                .unwrap_or_else(|| "static".into())
                .into(),
            session_days,
            secure_cookies: parse_var(&lookup, "QUIZ_SECURE_COOKIES", "false")?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.vocab_path, PathBuf::from("data/default_vocab.csv"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.session_days, 1);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("QUIZ_BIND_ADDR", "0.0.0.0:8080"),
            ("QUIZ_VOCAB_PATH", "/srv/words.csv"),
            ("QUIZ_SESSION_DAYS", "7"),
            ("QUIZ_SECURE_COOKIES", "true"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.vocab_path, PathBuf::from("/srv/words.csv"));
        assert_eq!(config.session_days, 7);
        assert!(config.secure_cookies);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = config_from(&[("QUIZ_BIND_ADDR", "not an address")]).unwrap_err();
        assert!(err.to_string().contains("QUIZ_BIND_ADDR"));

        let err = config_from(&[("QUIZ_SESSION_DAYS", "0")]).unwrap_err();
        assert!(err.to_string().contains("QUIZ_SESSION_DAYS"));
    }
}
