use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CONFIG_FILENAME;
use crate::prelude::*;

/// Represents the contents of mdpress's global configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub serve: Serve,
    pub render: Render,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Serve {
    pub address: String,
    pub port: u16,
    /// Answer cross-origin requests from any host.
    pub open_cors: bool,
}

impl Default for Serve {
    fn default() -> Self {
        Serve {
            address: "0.0.0.0".to_string(),
            port: 8000,
            open_cors: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Render {
    pub smart_punctuation: bool,
    pub footnotes: bool,
    pub tasklists: bool,
}

impl Default for Render {
    fn default() -> Self {
        Render {
            smart_punctuation: true,
            footnotes: true,
            tasklists: true,
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let toml_raw = match path.exists() {
            true => {
                std::fs::read_to_string(path)
                    .wrap_err("Could not read in configuration file.")
                    .suggestion("The configuration file was found, but couldn't be read - try checking your file permissions.")?
            },
            false => bail!("Configuration file not found at {}.", path.display())
        };

        Ok(toml::from_str(&toml_raw)?)
    }

    /// Resolves the effective configuration: an explicit path must exist, the default
    /// filename is used when present, and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let default = Path::new(CONFIG_FILENAME);

        if default.exists() {
            Self::from_path(default)
        } else {
            debug!("No configuration file found - using built-in defaults.");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.serve.address, "0.0.0.0");
        assert_eq!(config.serve.port, 8000);
        assert!(config.render.smart_punctuation);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[serve]\nport = 9090").unwrap();

        assert_eq!(config.serve.port, 9090);
        assert_eq!(config.serve.address, "0.0.0.0");
        assert!(config.render.footnotes);
    }
}
