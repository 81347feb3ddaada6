//! I/O adapters around the pure view pipeline.

pub mod config;
pub mod render;
pub mod source;
