use reservations_types::domain::reservation::ReservationProviderConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_port: String,
    pub provider_defaults: ReservationProviderConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = env::var("SERVER_PORT").unwrap_or_else(|_| "3000".into());
        let sandbox = match env::var("RESERVATIONS_SANDBOX") {
            Ok(v) => parse_flag(&v)?,
            Err(_) => false,
        };
        let provider_defaults = ReservationProviderConfig {
            api_key: env::var("RESERVATIONS_API_KEY").ok(),
            restaurant_id: None,
            webhook_secret: env::var("RESERVATIONS_WEBHOOK_SECRET").ok(),
            sandbox: Some(sandbox),
        };
        Ok(Self {
            server_port,
            provider_defaults,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("RESERVATIONS_SANDBOX: expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" ON ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
