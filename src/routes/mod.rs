//! src/routes/mod.rs
mod greeting;
pub use greeting::*;
