mod error;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{load_config, load_config_or_default};
pub use types::*;
