//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `TRACKER_*` environment variables or the matching
//! command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors raised when settings are present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No database URL was configured.
    #[error("TRACKER_DATABASE_URL must be set")]
    MissingDatabaseUrl,
    /// The bind host is not an IP address.
    #[error("invalid bind host {value:?}")]
    InvalidBindHost {
        /// Rejected input.
        value: String,
    },
}

/// Configuration for the exercise tracker server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct TrackerSettings {
    /// PostgreSQL connection string. Required.
    pub database_url: Option<String>,
    /// Listening port.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Listening address.
    pub bind_host: Option<String>,
}

impl TrackerSettings {
    /// Connection string for the store; startup is fatal without one.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Socket address to bind; the host falls back to `0.0.0.0`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.bind_host.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| SettingsError::InvalidBindHost {
                    value: raw.to_owned(),
                })?,
            None => DEFAULT_BIND_HOST,
        };
        Ok(SocketAddr::new(host, self.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 3] = ["TRACKER_DATABASE_URL", "TRACKER_PORT", "TRACKER_BIND_HOST"];

    fn load_from_empty_args() -> TrackerSettings {
        TrackerSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::MissingDatabaseUrl)
        );
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 3000)))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "TRACKER_DATABASE_URL",
                Some("postgres://tracker@localhost/tracker".to_owned()),
            ),
            ("TRACKER_PORT", Some("8081".to_owned())),
            ("TRACKER_BIND_HOST", Some("127.0.0.1".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Ok("postgres://tracker@localhost/tracker")
        );
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([127, 0, 0, 1], 8081)))
        );
    }

    #[rstest]
    fn blank_database_url_counts_as_missing() {
        let _guard = lock_env([
            ("TRACKER_DATABASE_URL", Some("   ".to_owned())),
            ("TRACKER_PORT", None),
            ("TRACKER_BIND_HOST", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::MissingDatabaseUrl)
        );
    }

    #[rstest]
    fn invalid_bind_host_is_reported() {
        let settings = TrackerSettings {
            database_url: None,
            port: 3000,
            bind_host: Some("localhost:80".to_owned()),
        };
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidBindHost { .. })
        ));
    }
}
