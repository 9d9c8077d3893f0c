pub mod assembler;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod lookup;
pub mod monitoring;
pub mod template;
pub mod validate;
pub mod wafv2;

pub use assembler::{Stack, StackAssembler};
pub use config::Config;
pub use error::StackError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
