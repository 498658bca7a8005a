//! Pipeline selection key derived from a material
//!
//! Backends cache compiled pipelines per [`MaterialPipelineKey`]. Two
//! materials with equal keys can share a pipeline even if their colors,
//! scalars or texture handles differ.

use super::material::Material;
use super::render_state::{BlendMode, CullMode, LightingModel, TransparencyMode};
use super::visual_role::VisualMask;

/// Everything about a material that changes which pipeline draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialPipelineKey {
    /// Shading equation
    pub lighting_model: LightingModel,
    /// Per-pixel or per-vertex lighting
    pub lit_per_pixel: bool,
    /// Face culling
    pub cull_mode: CullMode,
    /// Blend equation
    pub blend_mode: BlendMode,
    /// Transparency derivation
    pub transparency_mode: TransparencyMode,
    /// Depth writes
    pub writes_to_depth_buffer: bool,
    /// Depth testing
    pub reads_from_depth_buffer: bool,
    /// Channels holding any contents
    pub populated: VisualMask,
    /// Channels that need a sampler bound
    pub sampled: VisualMask,
}

impl MaterialPipelineKey {
    /// Derive the key for a material. Reads only; never mutates.
    pub fn from_material(material: &Material) -> Self {
        let mut populated = VisualMask::empty();
        let mut sampled = VisualMask::empty();
        for (role, visual) in material.visuals() {
            if !visual.is_empty() {
                populated |= role.mask();
            }
            if visual.kind().is_sampled() {
                sampled |= role.mask();
            }
        }

        Self {
            lighting_model: material.lighting_model(),
            lit_per_pixel: material.lit_per_pixel(),
            cull_mode: material.cull_mode(),
            blend_mode: material.blend_mode(),
            transparency_mode: material.transparency_mode(),
            writes_to_depth_buffer: material.writes_to_depth_buffer(),
            reads_from_depth_buffer: material.reads_from_depth_buffer(),
            populated,
            sampled,
        }
    }

    /// Get the shader variant name for this key, e.g. `"blinn_per_pixel"`.
    /// Unlit materials have no granularity suffix.
    pub fn shader_variant(&self) -> String {
        if !self.lighting_model.is_lit() {
            return self.lighting_model.as_str().to_string();
        }
        let granularity = if self.lit_per_pixel { "per_pixel" } else { "per_vertex" };
        format!("{}_{}", self.lighting_model.as_str(), granularity)
    }

    /// Check if this key requires blending with the render target
    pub const fn requires_blending(&self) -> bool {
        self.blend_mode.reads_destination()
    }

    /// Whether the material can go in the opaque pass: it overwrites the
    /// target and writes depth
    pub const fn is_opaque_pass(&self) -> bool {
        !self.requires_blending() && self.writes_to_depth_buffer
    }
}

impl Material {
    /// Get the pipeline key for this material
    pub fn pipeline_key(&self) -> MaterialPipelineKey {
        MaterialPipelineKey::from_material(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::rgb;
    use crate::render::resources::materials::{DynamicSourceHandle, TextureHandle};

    #[test]
    fn test_default_key() {
        let key = Material::new().pipeline_key();
        assert_eq!(key.lighting_model, LightingModel::Constant);
        assert!(key.populated.is_empty());
        assert!(key.sampled.is_empty());
        assert_eq!(key.shader_variant(), "constant");
        assert!(key.requires_blending());
        assert!(!key.is_opaque_pass());
    }

    #[test]
    fn test_masks_follow_channel_contents() {
        let mut material = Material::new();
        material.diffuse_mut().set_texture(TextureHandle(1));
        material.emission_mut().set_color(rgb(1.0, 1.0, 1.0));
        material.transparent_mut().set_dynamic_source(DynamicSourceHandle(2));

        let key = material.pipeline_key();
        assert_eq!(
            key.populated,
            VisualMask::DIFFUSE | VisualMask::EMISSION | VisualMask::TRANSPARENT
        );
        assert_eq!(key.sampled, VisualMask::DIFFUSE | VisualMask::TRANSPARENT);
    }

    #[test]
    fn test_values_do_not_change_key() {
        let mut a = Material::new();
        let mut b = Material::new();
        a.diffuse_mut().set_color(rgb(1.0, 0.0, 0.0));
        b.diffuse_mut().set_color(rgb(0.0, 1.0, 0.0));
        b.set_shininess(100.0);

        assert_eq!(a.pipeline_key(), b.pipeline_key());
    }

    #[test]
    fn test_shader_variant_names() {
        let mut material = Material::new();
        material.set_lighting_model(LightingModel::Blinn);
        assert_eq!(material.pipeline_key().shader_variant(), "blinn_per_pixel");

        material.set_lit_per_pixel(false);
        assert_eq!(material.pipeline_key().shader_variant(), "blinn_per_vertex");
    }

    #[test]
    fn test_replace_with_depth_writes_is_opaque() {
        let mut material = Material::new();
        material.set_blend_mode(BlendMode::Replace);
        assert!(material.pipeline_key().is_opaque_pass());

        material.set_writes_to_depth_buffer(false);
        assert!(!material.pipeline_key().is_opaque_pass());
    }
}
