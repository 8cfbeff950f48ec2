use std::env;

/// Tokens never outlive a day.
pub const MAX_TOKEN_EXPIRY_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256 algorithm")]
    SecretTooShort,

    #[error("JWT_EXPIRY must be between 1 and {MAX_TOKEN_EXPIRY_SECS} seconds, got `{0}`")]
    InvalidExpiry(String),
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, JwtConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(JwtConfigError::MissingSecret)?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }

        let raw_expiry =
            lookup("JWT_EXPIRY").unwrap_or_else(|| MAX_TOKEN_EXPIRY_SECS.to_string());
        let access_token_expiry = raw_expiry
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|secs| (1..=MAX_TOKEN_EXPIRY_SECS).contains(secs))
            .ok_or_else(|| JwtConfigError::InvalidExpiry(raw_expiry.clone()))?;

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "devspark-labs".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
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
        move |key| map.get(key).cloned()
    }

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn defaults_to_one_day_and_default_issuer() {
        let cfg = JwtConfig::from_lookup(lookup(&[("JWT_SECRET", SECRET)])).unwrap();

        assert_eq!(cfg.access_token_expiry, 86_400);
        assert_eq!(cfg.issuer, "devspark-labs");
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = JwtConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, JwtConfigError::MissingSecret);
    }

    #[test]
    fn short_secret_is_rejected() {
        let err = JwtConfig::from_lookup(lookup(&[("JWT_SECRET", "short")])).unwrap_err();
        assert_eq!(err, JwtConfigError::SecretTooShort);
    }

    #[test]
    fn expiry_must_be_within_a_day() {
        for bad in ["0", "-5", "86401", "soon"] {
            let err = JwtConfig::from_lookup(lookup(&[
                ("JWT_SECRET", SECRET),
                ("JWT_EXPIRY", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, JwtConfigError::InvalidExpiry(_)), "{bad}");
        }

        let cfg = JwtConfig::from_lookup(lookup(&[
            ("JWT_SECRET", SECRET),
            ("JWT_EXPIRY", "3600"),
            ("JWT_ISSUER", "staging"),
        ]))
        .unwrap();
        assert_eq!(cfg.access_token_expiry, 3600);
        assert_eq!(cfg.issuer, "staging");
    }
}
