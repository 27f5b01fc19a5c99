// src/lib.rs
pub mod cli;
pub mod core;
pub mod fingerprint;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use fingerprint::fingerprint;
pub use models::{RewriteOutcome, RewriteSummary};
