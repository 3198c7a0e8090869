pub mod cli;
pub mod toml_config;

pub use cli::{LogFormat, SecretKey, ServerConfig};
pub use toml_config::ProfileConfig;
