pub mod resolver;

// Re-export main types
pub use resolver::{DEFAULT_LOOKUP_TIMEOUT, SystemTxtResolver, TxtResolver};
