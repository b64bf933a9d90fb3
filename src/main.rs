use clap::Parser;
use dmarc_check::{
    cli::{Args, SettingsLoader},
    dmarc::DmarcResolver,
    error::DmarcError,
    net::SystemTxtResolver,
    server,
};

#[tokio::main]
async fn main() -> Result<(), DmarcError> {
    env_logger::init();

    let args = Args::parse();
    let settings = SettingsLoader::load(&args)?;

    let resolver = DmarcResolver::new(SystemTxtResolver::new(settings.dns_timeout)?);

    server::serve(settings.listen, resolver).await
}
