use std::{net::SocketAddr, time::Duration};

use crate::{error::DmarcError, net::DEFAULT_LOOKUP_TIMEOUT};

use super::args::Args;
use super::config::ConfigFile;

/// Address the server listens on when none is configured
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub listen: SocketAddr,
    pub dns_timeout: Duration,
}

/// Load and merge settings from command line arguments and config file
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load complete settings from CLI arguments
    ///
    /// Command line values take precedence over the config file, which takes
    /// precedence over the defaults.
    pub fn load(args: &Args) -> Result<Settings, DmarcError> {
        let config = match args.config.as_ref() {
            Some(config_path) => ConfigFile::load(config_path)?,
            None => ConfigFile::default(),
        };

        let listen = args
            .listen
            .as_deref()
            .or(config.server.listen.as_deref())
            .unwrap_or(DEFAULT_LISTEN);
        let listen = listen
            .parse::<SocketAddr>()
            .map_err(|source| DmarcError::InvalidListenAddr {
                value: listen.to_string(),
                source,
            })?;

        let dns_timeout = args
            .dns_timeout
            .or(config.dns.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT);

        Ok(Settings {
            listen,
            dns_timeout,
        })
    }
}
