mod classifier;
mod error;
mod matcher;
pub mod normalize;
pub mod report;
pub mod rules;
mod types;
pub mod version;

pub use classifier::Classifier;
pub use error::{Error, Result};
pub use rules::Rule;
pub use types::*;

/// Extract client, device and operating system information from a
/// `User-Agent` header using the built-in rule table.
pub fn parse(header: &str) -> UserAgent {
    Classifier::shared().parse(header)
}
