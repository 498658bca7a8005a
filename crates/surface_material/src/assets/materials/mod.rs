//! Material creation and loading subsystem
//!
//! Supports both file-based (MTL, RON/TOML) and procedural (builder) workflows.

pub mod mtl_parser;
pub mod material_loader;
pub mod material_builder;

pub use mtl_parser::{MtlData, MtlParser, MtlTextureMap};
pub use material_loader::{MaterialLoader, TextureResolver};
pub use material_builder::MaterialBuilder;
