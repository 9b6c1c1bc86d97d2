use deflection_solver::analysis::{EvaluationOptions, Validation};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8085;

/// Service settings, read once at startup
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub validation: Validation,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),
    #[error("DEFLECTION_VALIDATION must be 'strict' or 'permissive', got '{0}'")]
    InvalidValidation(String),
}

impl ServiceConfig {
    /// Read `HOST`, `PORT` and `DEFLECTION_VALIDATION` from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let validation = match lookup("DEFLECTION_VALIDATION") {
            Some(raw) => raw
                .parse::<Validation>()
                .map_err(|_| ConfigError::InvalidValidation(raw))?,
            None => Validation::default(),
        };

        Ok(Self {
            host,
            port,
            validation,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            validation: self.validation,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            validation: Validation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8085");
        assert_eq!(config.validation, Validation::Strict);
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DEFLECTION_VALIDATION", "permissive"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.validation, Validation::Permissive);
    }

    #[test]
    fn test_bad_port() {
        let err = ServiceConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
