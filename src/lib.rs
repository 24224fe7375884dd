pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;

// Re-export the public demo surface for library consumers
pub use demo::{EnvSnapshot, MESSAGE, vulnerability_demo};
