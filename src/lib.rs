// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod errors;
pub mod io;
pub mod observability;
pub mod value;

// Re-export commonly used types
pub use crate::counter::InstanceCounter;
pub use crate::errors::{Error, Result};
pub use crate::value::{construct_all, CountedValue};
