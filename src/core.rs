// src/core.rs
pub mod ignore;
pub mod rewrite;
pub mod walker;
