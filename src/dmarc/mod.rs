pub mod domain;
pub mod policy;
pub mod resolver;

// Re-export main types and functions
pub use domain::extract_domain;
pub use policy::parse_policy;
pub use resolver::{DmarcResolver, DmarcResult};
