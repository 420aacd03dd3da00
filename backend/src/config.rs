use std::{env, net::SocketAddr};

use axum::http::HeaderValue;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub app_host: String,
    pub app_port: u16,
    /// Origins allowed by the CORS layer. Empty means no CORS layer at all.
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let raw_port = lookup("APP_PORT").unwrap_or_else(|| "8080".to_string());
        let app_port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| AppError::InvalidPort(raw_port.clone()))?;
        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGIN") {
            Some(raw) => parse_origins(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            app_host,
            app_port,
            cors_allowed_origins,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let raw = format!("{}:{}", self.app_host, self.app_port);
        raw.parse().map_err(|_| AppError::InvalidAddr(raw))
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect()
}
