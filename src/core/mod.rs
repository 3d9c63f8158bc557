pub mod types;
pub mod library;
pub mod config;
pub mod error;
pub mod stats;
