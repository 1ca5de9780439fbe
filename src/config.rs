//! Runtime Configuration
//!
//! Resolved once at startup from command-line flags, falling back to
//! environment variables and then to built-in defaults.
//!
//! | Flag       | Variable    | Default                |
//! |------------|-------------|------------------------|
//! | `--bind`   | `BIND_ADDR` | `0.0.0.0:$PORT`        |
//! | (none)     | `PORT`      | `5000`                 |
//! | `--data`   | `DATA_PATH` | `data/sales_data.csv`  |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_PATH: &str = "data/sales_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
}

impl AppConfig {
    /// Reads the process arguments and environment.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(&args, |key| std::env::var(key).ok())
    }

    /// Resolves the configuration from explicit flags and an environment lookup.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind_flag: Option<String> = None;
        let mut data_flag: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind_flag = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--data" => {
                    data_flag = Some(flag_value(args, i)?);
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let bind_addr = match bind_flag.or_else(|| env("BIND_ADDR")) {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("invalid bind address: {}", addr))?,
            None => {
                let port = match env("PORT") {
                    Some(port) => port
                        .parse()
                        .with_context(|| format!("invalid PORT: {}", port))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let data_path = data_flag
            .or_else(|| env("DATA_PATH"))
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
            .into();

        Ok(Self {
            bind_addr,
            data_path,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .with_context(|| format!("{} requires a value", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_sources(&[], env_from(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env_from(&[("PORT", "8081"), ("DATA_PATH", "/srv/sales.csv")]);

        let config = AppConfig::from_sources(&[], env).unwrap();

        assert_eq!(config.bind_addr.port(), 8081);
        assert_eq!(config.data_path, PathBuf::from("/srv/sales.csv"));
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_from(&[("BIND_ADDR", "127.0.0.1:9000"), ("DATA_PATH", "env.csv")]);

        let config = AppConfig::from_sources(
            &args(&["--bind", "127.0.0.1:7000", "--data", "flag.csv"]),
            env,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_path, PathBuf::from("flag.csv"));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(AppConfig::from_sources(&args(&["--bind", "nowhere"]), env_from(&[])).is_err());
        assert!(AppConfig::from_sources(&[], env_from(&[("PORT", "http")])).is_err());
        assert!(AppConfig::from_sources(&args(&["--data"]), env_from(&[])).is_err());
    }
}
