//! Chargement de la configuration depuis l'environnement (et un éventuel `.env`).

use std::str::FromStr;
use thiserror::Error;

use crate::consts;
use crate::utils::validation::PasswordPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Valeur invalide pour {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Politique de mot de passe incohérente: min {min}, max {max}")]
    InconsistentPolicy { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub http_port: u16,
    pub public_base_url: String,
    pub password_policy: PasswordPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_port: consts::HTTP_PORT,
            public_base_url: consts::PUBLIC_BASE_URL.to_string(),
            password_policy: PasswordPolicy::default(),
        }
    }
}

impl Settings {
    /// Lit la configuration depuis les variables d'environnement du processus.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Construit la configuration à partir d'une fonction de lecture, les
    /// variables absentes prennent les valeurs par défaut.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let default_policy = defaults.password_policy;

        let password_policy = PasswordPolicy {
            min_length: parse_or(&lookup, "PASSWORD_MIN_LENGTH", default_policy.min_length)?,
            max_length: parse_or(&lookup, "PASSWORD_MAX_LENGTH", default_policy.max_length)?,
            require_letter: parse_or(&lookup, "PASSWORD_REQUIRE_LETTER", default_policy.require_letter)?,
            require_digit: parse_or(&lookup, "PASSWORD_REQUIRE_DIGIT", default_policy.require_digit)?,
            require_symbol: parse_or(&lookup, "PASSWORD_REQUIRE_SYMBOL", default_policy.require_symbol)?,
        };

        if password_policy.min_length == 0 || password_policy.min_length > password_policy.max_length {
            return Err(ConfigError::InconsistentPolicy {
                min: password_policy.min_length,
                max: password_policy.max_length,
            });
        }

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.public_base_url);

        Ok(Self {
            http_port: parse_or(&lookup, "HTTP_PORT", defaults.http_port)?,
            public_base_url,
            password_policy,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
