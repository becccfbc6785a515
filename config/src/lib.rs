//! Load configuration from project `.env` and XDG `config.toml`, then apply it to the
//! process environment with priority: **existing env > .env > XDG**.
//!
//! The core crates never read config files themselves; the CLI calls
//! [`load_and_apply`] once at startup and then passes explicit values
//! (API key, model name) into the library.

mod dotenv;
mod xdg;

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("read config.toml: {0}")]
    XdgRead(std::io::Error),
    #[error("parse config.toml: {0}")]
    XdgParse(#[from] toml::de::Error),
}

/// Merges the `[env]` table of `$XDG_CONFIG_HOME/<app_name>/config.toml` with a
/// project `.env` file and sets each key in the process environment, unless the
/// key is already set there (existing env always wins).
///
/// * `app_name`: used for the XDG path `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` in this directory instead of the
///   current working directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let mut merged = xdg::env_table(app_name)?;
    // .env entries shadow XDG entries for the same key.
    merged.extend(dotenv::env_table(override_dir).map_err(LoadError::DotenvRead)?);

    for (key, value) in merged {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}
