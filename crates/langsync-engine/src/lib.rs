pub mod check;
pub mod error;
pub mod front_matter;
pub mod generate;
pub mod io;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use check::{Violation, ViolationKind, check_consistency};
pub use error::FatalError;
pub use front_matter::parse_front_matter;
pub use generate::{CollectionPaths, generate_collections};
pub use io::*;
pub use models::*;
