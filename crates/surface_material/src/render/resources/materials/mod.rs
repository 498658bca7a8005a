//! Material system
//!
//! Material definitions, visual channels, render state and the helpers a
//! shading pipeline uses to consume them.
//!
//! # Architecture
//!
//! - [`Material`]: ten [`MaterialVisual`] channels plus render state
//! - [`MaterialVisual`]: one shading slot; contents are a [`VisualContents`]
//!   sum type (empty, color, texture, cube texture, dynamic source)
//! - [`SharedMaterial`] / [`MaterialLibrary`]: the two sharing policies
//! - [`MaterialPipelineKey`] / [`MaterialUniforms`]: read-only views for
//!   pipeline selection and GPU upload

pub mod material;
pub mod material_visual;
pub mod visual_role;
pub mod render_state;
pub mod texture;
pub mod shared_material;
pub mod material_registry;
pub mod pipeline_key;
pub mod material_ubo;

// Re-export commonly used types
pub use material::Material;
pub use material_visual::{MaterialVisual, VisualContents, VisualKind};
pub use visual_role::{VisualMask, VisualRole};
pub use render_state::{BlendMode, CullMode, LightingModel, TransparencyMode};
pub use texture::{DynamicSourceHandle, FilterMode, MipFilterMode, TextureHandle, WrapMode};
pub use shared_material::SharedMaterial;
pub use material_registry::{MaterialError, MaterialHandle, MaterialLibrary};
pub use pipeline_key::MaterialPipelineKey;
pub use material_ubo::MaterialUniforms;
