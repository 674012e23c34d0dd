pub mod aggregate;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod paginate;
pub mod recommend;
pub mod search;
pub mod similarity;
pub mod storage;

pub use error::{RankError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
