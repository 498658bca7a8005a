//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types (colors, vectors, texture-coordinate transforms)
//! - Logging utilities

pub mod math;
pub mod logging;
