//! # Surface Material
//!
//! Surface appearance for a 3D renderer: a [`Material`](render::Material)
//! with ten shading channels and the render state a pipeline needs to draw
//! it.
//!
//! ## Features
//!
//! - **Visual Channels**: Diffuse, ambient, specular, normal, reflective,
//!   emission, transparent, multiply, ambient occlusion and self-illumination
//! - **Render State**: Culling, blending, depth and lighting model
//! - **Sharing**: Clone-on-write handles or a handle-based library
//! - **Asset Import**: Wavefront MTL and RON/TOML material files
//!
//! ## Quick Start
//!
//! ```rust
//! use surface_material::prelude::*;
//!
//! let mut material = Material::new();
//! material.diffuse_mut().set_color(rgb(0.8, 0.1, 0.1));
//! material.set_lighting_model(LightingModel::Blinn);
//!
//! let key = material.pipeline_key();
//! assert_eq!(key.shader_variant(), "blinn_per_pixel");
//! assert!(key.populated.has(VisualRole::Diffuse));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod assets;
pub mod render;

/// Common imports for material users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, MaterialBuilder, MaterialLoader, TextureResolver},
        config::{Config, ConfigError},
        core::config::{MaterialDefaults, MaterialSystemConfig},
        foundation::math::{rgb, rgba, Color},
        render::{
            BlendMode, CullMode, LightingModel, Material, MaterialHandle, MaterialLibrary,
            MaterialVisual, SharedMaterial, TextureHandle, TransparencyMode, VisualContents,
            VisualKind, VisualRole,
        },
    };
}
