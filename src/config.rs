use std::{env, path::PathBuf, str::FromStr};

use anyhow::anyhow;

const DEFAULT_DATABASE_URL: &str = "sqlite://storefront.db";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "password123";

/// How the admin token handed out by `/api/login` is produced and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// The token is the admin password itself.
    Static,
    /// The token is an HS256 JWT with an expiry.
    Signed,
}

impl FromStr for TokenMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(TokenMode::Static),
            "signed" | "jwt" => Ok(TokenMode::Signed),
            other => Err(anyhow!("unknown ADMIN_TOKEN_MODE `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub token_mode: TokenMode,
    pub token_secret: String,
    pub token_ttl_hours: i64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            token_mode: TokenMode::Static,
            token_secret: DEFAULT_ADMIN_PASSWORD.to_string(),
            token_ttl_hours: 24,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist"));

        let username =
            lookup("ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());
        let password =
            lookup("ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());
        let token_mode = match lookup("ADMIN_TOKEN_MODE") {
            Some(mode) => mode.parse()?,
            None => TokenMode::Static,
        };
        let token_secret = lookup("ADMIN_TOKEN_SECRET").unwrap_or_else(|| password.clone());
        let token_ttl_hours = lookup("ADMIN_TOKEN_TTL_HOURS")
            .and_then(|h| h.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(24);

        Ok(Self {
            database_url,
            host,
            port,
            static_dir,
            admin: AdminConfig {
                username,
                password,
                token_mode,
                token_secret,
                token_ttl_hours,
            },
        })
    }
}
