//! # Core Module
//!
//! Shared configuration used across the material subsystem.
//!
//! ## Organization
//!
//! - **Config**: Material defaults, library limits and logging settings

pub mod config;

pub use config::{Config, ConfigError, MaterialDefaults, MaterialSystemConfig};
