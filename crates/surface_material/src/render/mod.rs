//! # Rendering Resources
//!
//! Surface materials as seen by a rendering pipeline.
//!
//! ## Design Goals
//!
//! - **Content agnostic**: channels accept any contents; pipelines decide
//!   what they support
//! - **Plain data**: no locking on the per-frame read path; sharing policy is
//!   chosen by the caller
//!
//! Mesh data, shader compilation, texture upload and frame submission are
//! owned by the renderer that consumes these types.

// Resources
pub mod resources;

#[cfg(test)]
mod tests;

pub use resources::materials::{
    BlendMode, CullMode, LightingModel, Material, MaterialHandle, MaterialLibrary,
    MaterialPipelineKey, MaterialUniforms, MaterialVisual, SharedMaterial, TextureHandle,
    TransparencyMode, VisualContents, VisualKind, VisualMask, VisualRole,
};
