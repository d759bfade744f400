use nullguard_core::NullFieldValidator;
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Service settings. Layered as defaults, then YAML file, then environment,
/// then whatever the caller overrides (CLI flags).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub body_limit_bytes: usize,
    /// `0` disables the depth check.
    pub max_depth: usize,
    pub optional_fields: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            body_limit_bytes: DEFAULT_BODY_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
            optional_fields: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|k| std::env::var(k).ok())
    }

    /// Applies `NULLGUARD_*` overrides read through `lookup`.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("NULLGUARD_BIND") {
            self.bind = v.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidEnv {
                    var: "NULLGUARD_BIND",
                    value: v.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(v) = lookup("NULLGUARD_BODY_LIMIT") {
            self.body_limit_bytes = parse_usize("NULLGUARD_BODY_LIMIT", &v)?;
        }
        if let Some(v) = lookup("NULLGUARD_MAX_DEPTH") {
            self.max_depth = parse_usize("NULLGUARD_MAX_DEPTH", &v)?;
        }
        if let Some(v) = lookup("NULLGUARD_OPTIONAL_FIELDS") {
            self.optional_fields = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        Ok(self)
    }

    pub fn validator(&self) -> NullFieldValidator {
        NullFieldValidator::new(self.optional_fields.iter().cloned())
    }
}

fn parse_usize(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
