//! Asset loading for materials
//!
//! Turns authored material descriptions (Wavefront MTL, RON/TOML material
//! files) into [`Material`](crate::render::Material) values. Texture files
//! are never decoded here; paths are handed to a caller-supplied
//! [`TextureResolver`] that returns handles.

pub mod materials;

pub use materials::{
    MaterialBuilder, MaterialLoader, MtlData, MtlParser, MtlTextureMap, TextureResolver,
};

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::resources::materials::MaterialError;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed statement in a text asset
    #[error("Line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// Requested material is not defined in the file
    #[error("Material '{name}' not found in {path}")]
    MaterialNotFound {
        /// Requested material name
        name: String,
        /// File that was searched
        path: String,
    },

    /// Unsupported asset format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Material file could not be read as configuration
    #[error("Material file error: {0}")]
    Config(#[from] ConfigError),

    /// Loaded materials did not fit in the library
    #[error("Material library error: {0}")]
    Library(#[from] MaterialError),
}
