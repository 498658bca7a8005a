//! Procedural material builder for runtime material creation
//!
//! Provides a builder pattern API for creating materials programmatically,
//! with presets for common surface setups (unlit, glowing, decals, x-ray).

use crate::core::config::MaterialDefaults;
use crate::foundation::math::{color_from_hex, rgba, Color};
use crate::render::resources::materials::{
    BlendMode, CullMode, DynamicSourceHandle, LightingModel, Material, TextureHandle,
    TransparencyMode, VisualContents, VisualRole, WrapMode,
};

/// Builder for creating materials programmatically at runtime
///
/// # Examples
/// ```
/// use surface_material::assets::MaterialBuilder;
/// use surface_material::render::{BlendMode, LightingModel, VisualRole};
/// use surface_material::foundation::math::rgb;
///
/// // A glowing, additive marker
/// let marker = MaterialBuilder::glow(rgb(0.2, 0.6, 1.0))
///     .intensity(VisualRole::Emission, 2.5)
///     .name("marker")
///     .build();
///
/// assert_eq!(marker.lighting_model(), LightingModel::Constant);
/// assert_eq!(marker.blend_mode(), BlendMode::Add);
/// ```
#[derive(Debug, Clone)]
pub struct MaterialBuilder {
    material: Material,
}

impl MaterialBuilder {
    /// Create a new material builder from the built-in defaults
    pub fn new() -> Self {
        Self {
            material: Material::new(),
        }
    }

    /// Create a new material builder from custom defaults
    pub fn with_defaults(defaults: &MaterialDefaults) -> Self {
        Self {
            material: Material::from_defaults(defaults),
        }
    }

    /// Continue editing an existing material
    pub fn from_material(material: Material) -> Self {
        Self { material }
    }

    /// Set the material name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.material.set_name(name);
        self
    }

    // Channels

    /// Replace a channel's contents
    pub fn visual(mut self, role: VisualRole, contents: VisualContents) -> Self {
        self.material.visual_mut(role).set_contents(contents);
        self
    }

    /// Set a channel to a color
    pub fn color(mut self, role: VisualRole, color: Color) -> Self {
        self.material.visual_mut(role).set_color(color);
        self
    }

    /// Set a channel to a 2D texture
    pub fn texture(mut self, role: VisualRole, texture: TextureHandle) -> Self {
        self.material.visual_mut(role).set_texture(texture);
        self
    }

    /// Set a channel to a cube texture
    pub fn cube_texture(mut self, role: VisualRole, texture: TextureHandle) -> Self {
        self.material.visual_mut(role).set_cube_texture(texture);
        self
    }

    /// Set a channel to a dynamic source
    pub fn dynamic_source(mut self, role: VisualRole, source: DynamicSourceHandle) -> Self {
        self.material.visual_mut(role).set_dynamic_source(source);
        self
    }

    /// Set a channel's intensity
    pub fn intensity(mut self, role: VisualRole, intensity: f32) -> Self {
        self.material.visual_mut(role).set_intensity(intensity);
        self
    }

    /// Set both wrap modes of a channel
    pub fn wrap(mut self, role: VisualRole, mode: WrapMode) -> Self {
        self.material.visual_mut(role).set_wrap(mode);
        self
    }

    /// Set the diffuse color
    pub fn diffuse_color(self, color: Color) -> Self {
        self.color(VisualRole::Diffuse, color)
    }

    /// Set the diffuse color from RGB values (0-1 range)
    pub fn diffuse_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse_color(rgba(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), 1.0))
    }

    /// Set the diffuse color from hex color code
    pub fn diffuse_hex(self, hex: u32) -> Self {
        self.diffuse_color(color_from_hex(hex))
    }

    /// Set the diffuse texture
    pub fn diffuse_texture(self, texture: TextureHandle) -> Self {
        self.texture(VisualRole::Diffuse, texture)
    }

    /// Set the emission color
    pub fn emission(self, color: Color) -> Self {
        self.color(VisualRole::Emission, color)
    }

    // Scalars and render state

    /// Set the specular exponent
    pub fn shininess(mut self, shininess: f32) -> Self {
        self.material.set_shininess(shininess);
        self
    }

    /// Set the fresnel exponent
    pub fn fresnel_exponent(mut self, exponent: f32) -> Self {
        self.material.set_fresnel_exponent(exponent);
        self
    }

    /// Set uniform transparency
    pub fn transparency(mut self, transparency: f32) -> Self {
        self.material.set_transparency(transparency);
        self
    }

    /// Set how transparency is derived from the transparent channel
    pub fn transparency_mode(mut self, mode: TransparencyMode) -> Self {
        self.material.set_transparency_mode(mode);
        self
    }

    /// Set the shading equation
    pub fn lighting_model(mut self, model: LightingModel) -> Self {
        self.material.set_lighting_model(model);
        self
    }

    /// Choose per-pixel or per-vertex lighting
    pub fn lit_per_pixel(mut self, per_pixel: bool) -> Self {
        self.material.set_lit_per_pixel(per_pixel);
        self
    }

    /// Set face culling
    pub fn cull_mode(mut self, mode: CullMode) -> Self {
        self.material.set_cull_mode(mode);
        self
    }

    /// Set the blend equation
    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.material.set_blend_mode(mode);
        self
    }

    /// Enable or disable depth writes
    pub fn writes_to_depth_buffer(mut self, writes: bool) -> Self {
        self.material.set_writes_to_depth_buffer(writes);
        self
    }

    /// Enable or disable depth testing
    pub fn reads_from_depth_buffer(mut self, reads: bool) -> Self {
        self.material.set_reads_from_depth_buffer(reads);
        self
    }

    /// Build the material
    pub fn build(self) -> Material {
        self.material
    }

    // Presets

    /// Flat color, no lighting
    pub fn unlit(color: Color) -> Self {
        Self::new()
            .lighting_model(LightingModel::Constant)
            .diffuse_color(color)
    }

    /// Diffuse-only lighting
    pub fn lambert(color: Color) -> Self {
        Self::new()
            .lighting_model(LightingModel::Lambert)
            .diffuse_color(color)
    }

    /// Blinn-Phong with a white highlight
    pub fn blinn(color: Color, shininess: f32) -> Self {
        Self::new()
            .lighting_model(LightingModel::Blinn)
            .diffuse_color(color)
            .color(VisualRole::Specular, rgba(1.0, 1.0, 1.0, 1.0))
            .shininess(shininess)
    }

    /// Additive emissive surface that does not occlude
    pub fn glow(color: Color) -> Self {
        Self::new()
            .lighting_model(LightingModel::Constant)
            .emission(color)
            .blend_mode(BlendMode::Add)
            .writes_to_depth_buffer(false)
            .cull_mode(CullMode::None)
    }

    /// Texture laid over existing geometry
    pub fn decal(texture: TextureHandle) -> Self {
        Self::new()
            .diffuse_texture(texture)
            .wrap(VisualRole::Diffuse, WrapMode::Clamp)
            .transparency_mode(TransparencyMode::AOne)
            .blend_mode(BlendMode::Alpha)
            .writes_to_depth_buffer(false)
    }

    /// Drawn through other geometry
    pub fn x_ray(color: Color) -> Self {
        Self::new()
            .lighting_model(LightingModel::Constant)
            .diffuse_color(color)
            .transparency(0.5)
            .transparency_mode(TransparencyMode::AOne)
            .blend_mode(BlendMode::Alpha)
            .writes_to_depth_buffer(false)
            .reads_from_depth_buffer(false)
            .cull_mode(CullMode::None)
    }
}

impl Default for MaterialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MaterialBuilder> for Material {
    fn from(builder: MaterialBuilder) -> Self {
        builder.build()
    }
}
