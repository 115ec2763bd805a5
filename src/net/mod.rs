// src/net/mod.rs
pub mod client;
pub mod task;
pub mod types;
