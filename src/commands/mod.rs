pub mod init;
pub mod run;

pub use run::{run, run_global, RunConfig, RunReport};
