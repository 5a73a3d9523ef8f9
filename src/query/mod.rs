pub mod config;
pub use config::*;

pub mod builder;
pub use builder::*;
