pub mod errors;
pub mod logging;
pub mod root;
pub mod store;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use store::{ClientSettings, ResponderSettings};
