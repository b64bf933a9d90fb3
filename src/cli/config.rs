use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::DmarcError;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dns: DnsConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// Address to listen on
    pub listen: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DnsConfig {
    /// Upper bound in seconds for a single TXT lookup
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Load configuration file
    pub fn load(path: &Path) -> Result<Self, DmarcError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DmarcError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_full_config() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            r#"
[server]
listen = "127.0.0.1:9000"

[dns]
timeout_secs = 2
"#
        )
        .unwrap();

        let config = ConfigFile::load(tmp.path()).unwrap();
        assert_eq!(config.server.listen.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(config.dns.timeout_secs, Some(2));
    }

    #[test]
    fn load_partial_config() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "[dns]\ntimeout_secs = 10\n").unwrap();

        let config = ConfigFile::load(tmp.path()).unwrap();
        assert!(config.server.listen.is_none());
        assert_eq!(config.dns.timeout_secs, Some(10));
    }

    #[test]
    fn load_empty_config() {
        let tmp = tempfile::NamedTempFile::new().unwrap();

        let config = ConfigFile::load(tmp.path()).unwrap();
        assert!(config.server.listen.is_none());
        assert!(config.dns.timeout_secs.is_none());
    }

    #[test]
    fn load_invalid_toml_reports_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "[dns]\ntimeout_secs = \"soon\"\n").unwrap();

        let result = ConfigFile::load(tmp.path());
        match result {
            Err(DmarcError::ConfigParse { path, .. }) => assert_eq!(path, tmp.path()),
            other => panic!("Expected ConfigParse error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigFile::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(DmarcError::Io(_))));
    }
}
