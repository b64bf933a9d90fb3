use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "HTTP service reporting the DMARC policy of an email address's domain"
)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long = "listen", value_name = "ADDR")]
    pub listen: Option<String>,

    /// Upper bound in seconds for a single DNS TXT lookup
    #[arg(long = "dns-timeout", value_name = "SECS")]
    pub dns_timeout: Option<u64>,
}
