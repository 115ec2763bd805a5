// src/ui/mod.rs
pub mod progress;
pub mod results;
pub mod stats;
pub mod upload;
