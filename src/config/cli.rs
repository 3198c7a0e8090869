use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_required_field, validate_secret, Validate,
};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Signing secret. Never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Personal portfolio site with a snake game")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "PORTFOLIO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORTFOLIO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Signing secret, required. There is no built-in fallback.
    #[arg(long, env = "PORTFOLIO_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<SecretKey>,

    /// TOML profile file; the built-in profile is used when omitted
    #[arg(long, env = "PORTFOLIO_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Directory with home.html / game.html overriding the embedded templates
    #[arg(long, env = "PORTFOLIO_TEMPLATES")]
    pub templates: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Validate configuration, print the resolved profile and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Render one page (home, game) to stdout and exit
    #[arg(long, value_name = "PAGE")]
    pub render: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn secret_key(&self) -> Result<&SecretKey> {
        validate_required_field("secret_key", &self.secret_key)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("port", self.port as usize, 1)?;

        let secret = self.secret_key()?;
        validate_secret("secret_key", secret.expose())?;

        if let Some(profile) = &self.profile {
            validate_path("profile", &profile.to_string_lossy())?;
        }
        if let Some(templates) = &self.templates {
            validate_path("templates", &templates.to_string_lossy())?;
        }

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
