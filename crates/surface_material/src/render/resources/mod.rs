//! Resource management
//!
//! This module contains passive resource types consumed by rendering
//! pipelines. Materials are the only resource kind owned by this crate.

pub mod materials;
