use std::net::IpAddr;

use crate::submission::PipelineOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub pipeline: PipelineOptions,
    pub redirect_url: Option<String>,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://registrar.db?mode=rwc");

        let host: IpAddr = env_or("REGISTRAR_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid REGISTRAR_HOST: {e}"))?;

        let port: u16 = env_or("REGISTRAR_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid REGISTRAR_PORT: {e}"))?;

        let pipeline = PipelineOptions {
            country_checks: env_flag("REGISTRAR_COUNTRY_CHECKS", true)?,
            email_check: env_flag("REGISTRAR_EMAIL_CHECK", true)?,
        };

        let redirect_url = Some(env_or("REGISTRAR_REDIRECT_URL", "/thank-you"))
            .filter(|url| !url.trim().is_empty());

        let max_body_size: usize = env_or("REGISTRAR_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid REGISTRAR_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("REGISTRAR_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            pipeline,
            redirect_url,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str, default: bool) -> Result<bool, String> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(format!("Invalid {key}: expected true or false, got '{other}'")),
        },
    }
}
