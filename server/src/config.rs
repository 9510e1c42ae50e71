//! Server configuration parsed from environment variables.
//!
//! Variables:
//! - `PORT`: listen port, default 3000
//! - `MOCK_USERS_FILE`: optional YAML roster replacing the built-in users
//! - `IMAGE_REMOTE_HOSTS`: comma-separated HTTPS hosts allowed for avatars,
//!   default `utfs.io,img.clerk.com`
//! - `COOKIE_SECURE`: mark the selection cookie `Secure` when set by the server

use std::path::PathBuf;

use users::{MockUser, Registry, RegistryError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IMAGE_REMOTE_HOSTS: [&str; 2] = ["utfs.io", "img.clerk.com"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("failed to read mock users file {path}: {source}")]
    UsersFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// HTTPS hosts avatars may be served from. Site-relative paths are always allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAllowlist {
    hosts: Vec<String>,
}

impl ImageAllowlist {
    #[must_use]
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { hosts: hosts.into_iter().map(Into::into).collect() }
    }

    /// Parse a comma-separated host list; `None` or an empty list yields the defaults.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let hosts: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(|h| h.trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        if hosts.is_empty() { Self::default() } else { Self { hosts } }
    }

    #[must_use]
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Whether `src` is site-relative or an HTTPS URL on an allowed host.
    #[must_use]
    pub fn allows(&self, src: &str) -> bool {
        if src.starts_with('/') && !src.starts_with("//") {
            return true;
        }
        let Some(rest) = src.strip_prefix("https://") else {
            return false;
        };
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = authority.split(':').next().unwrap_or_default().to_ascii_lowercase();
        self.hosts.iter().any(|allowed| *allowed == host)
    }

    /// Registry users whose avatar the allowlist would reject.
    #[must_use]
    pub fn rejected_avatars<'a>(&self, registry: &'a Registry) -> Vec<&'a MockUser> {
        registry.users().iter().filter(|u| !self.allows(&u.image_url)).collect()
    }
}

impl Default for ImageAllowlist {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_REMOTE_HOSTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub users_file: Option<PathBuf>,
    pub image_hosts: ImageAllowlist,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            users_file: std::env::var("MOCK_USERS_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            image_hosts: ImageAllowlist::parse(std::env::var("IMAGE_REMOTE_HOSTS").ok().as_deref()),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
        })
    }

    /// The configured roster, or the built-in users when no file is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UsersFile`] when the file cannot be read and
    /// [`ConfigError::Registry`] when its contents are not a valid roster.
    pub fn load_registry(&self) -> Result<Registry, ConfigError> {
        let Some(path) = &self.users_file else {
            return Ok(Registry::builtin());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::UsersFile { path: path.clone(), source })?;
        Ok(Registry::from_yaml(&raw)?)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
