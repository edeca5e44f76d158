mod initialize;
pub use initialize::Initializer;

mod config;
pub use config::{BearerConfig, Config, LocalConfig, UserEntry};
