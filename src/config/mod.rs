#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, FormArgs, GuestSpec};
pub use toml_config::TomlConfig;
