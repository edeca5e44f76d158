mod root;
pub use root::{parse, Command, GatekeepCommand};

pub mod strategies;
pub mod verify;
