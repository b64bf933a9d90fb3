pub mod cli;
pub mod dmarc;
pub mod error;
pub mod net;
pub mod server;
