//! Material uniform data for GPU transfer
//!
//! Packs everything a fragment shader reads from a material into one
//! plain-old-data block. Every member is a 16-byte row so the layout matches
//! a std140 uniform block without manual padding.

use bytemuck::{Pod, Zeroable};

use super::material::Material;
use super::render_state::{LightingModel, TransparencyMode};
use super::visual_role::VisualRole;

/// `state[3]` bit: lighting is evaluated per pixel
pub const FLAG_LIT_PER_PIXEL: u32 = 1 << 0;
/// `state[3]` bit: depth writes enabled
pub const FLAG_WRITES_DEPTH: u32 = 1 << 1;
/// `state[3]` bit: depth testing enabled
pub const FLAG_READS_DEPTH: u32 = 1 << 2;

/// Uniform block for one material
///
/// Layout must match the corresponding GLSL uniform block:
///
/// ```glsl
/// layout(set = 1, binding = 0) uniform MaterialBlock {
///     vec4 channel_colors[10];
///     vec4 channel_intensities[3];
///     vec4 shading;   // shininess, fresnel exponent, transparency, transparency mode
///     uvec4 state;    // lighting model, populated mask, sampled mask, flags
/// };
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MaterialUniforms {
    /// Constant color per channel in role order; zero for non-color channels
    pub channel_colors: [[f32; 4]; VisualRole::COUNT],
    /// Intensity per channel in role order, packed four to a row
    pub channel_intensities: [[f32; 4]; 3],
    /// Shininess, fresnel exponent, transparency, transparency mode
    pub shading: [f32; 4],
    /// Lighting model, populated mask, sampled mask, flags
    pub state: [u32; 4],
}

impl MaterialUniforms {
    /// Pack a material. Values are copied verbatim, out-of-range ones included.
    pub fn from_material(material: &Material) -> Self {
        let mut uniforms = Self::zeroed();

        for (role, visual) in material.visuals() {
            let i = role.index();
            if let Some(color) = visual.color() {
                uniforms.channel_colors[i] = [color.x, color.y, color.z, color.w];
            }
            uniforms.channel_intensities[i / 4][i % 4] = visual.intensity();
        }

        uniforms.shading = [
            material.shininess(),
            material.fresnel_exponent(),
            material.transparency(),
            transparency_mode_code(material.transparency_mode()) as f32,
        ];

        let key = material.pipeline_key();
        let mut flags = 0;
        if material.lit_per_pixel() {
            flags |= FLAG_LIT_PER_PIXEL;
        }
        if material.writes_to_depth_buffer() {
            flags |= FLAG_WRITES_DEPTH;
        }
        if material.reads_from_depth_buffer() {
            flags |= FLAG_READS_DEPTH;
        }
        uniforms.state = [
            lighting_model_code(material.lighting_model()),
            u32::from(key.populated.bits()),
            u32::from(key.sampled.bits()),
            flags,
        ];

        uniforms
    }

    /// Intensity of one channel
    pub const fn intensity(&self, role: VisualRole) -> f32 {
        let i = role.index();
        self.channel_intensities[i / 4][i % 4]
    }

    /// Get the size in bytes
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }

    /// Get as bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Shader-side code for a lighting model
pub const fn lighting_model_code(model: LightingModel) -> u32 {
    match model {
        LightingModel::Phong => 0,
        LightingModel::Blinn => 1,
        LightingModel::Lambert => 2,
        LightingModel::Constant => 3,
    }
}

/// Shader-side code for a transparency mode
pub const fn transparency_mode_code(mode: TransparencyMode) -> u32 {
    match mode {
        TransparencyMode::AOne => 0,
        TransparencyMode::RgbZero => 1,
    }
}
