//! Material: the surface appearance of a geometry
//!
//! A material owns ten visual channels and the render state a shading
//! pipeline needs to draw a surface. It is plain data: every setter accepts
//! any value and nothing is validated here. Backends decide what they can
//! render and must do so without mutating the material.
//!
//! There is no internal synchronization. Share materials through
//! [`SharedMaterial`](super::SharedMaterial) (clone-on-write) or a
//! [`MaterialLibrary`](super::MaterialLibrary) (edits go through
//! `&mut` to the library).

use serde::{Deserialize, Serialize};

use super::material_visual::MaterialVisual;
use super::render_state::{BlendMode, CullMode, LightingModel, TransparencyMode};
use super::visual_role::VisualRole;
use crate::config::Config;
use crate::core::config::MaterialDefaults;

/// Lighting, shading and blending attributes of a surface
///
/// `==` compares channels and render state. The name is left out: two
/// materials that would render identically are equal whatever they are
/// called.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    diffuse: MaterialVisual,
    ambient: MaterialVisual,
    specular: MaterialVisual,
    normal: MaterialVisual,
    reflective: MaterialVisual,
    emission: MaterialVisual,
    transparent: MaterialVisual,
    multiply: MaterialVisual,
    ambient_occlusion: MaterialVisual,
    self_illumination: MaterialVisual,

    /// User-provided name, for debugging and authoring lookups only
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Sharpness of specular highlights
    shininess: f32,
    /// Factor affecting reflectivity falloff
    fresnel_exponent: f32,
    /// Uniform transparency
    transparency: f32,
    transparency_mode: TransparencyMode,
    lighting_model: LightingModel,
    /// Per-pixel when true, per-vertex otherwise
    lit_per_pixel: bool,
    cull_mode: CullMode,
    blend_mode: BlendMode,
    writes_to_depth_buffer: bool,
    reads_from_depth_buffer: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::from_defaults(&MaterialDefaults::default())
    }
}

macro_rules! visual_accessors {
    ($($field:ident, $field_mut:ident, $doc:literal;)*) => {
        $(
            #[doc = concat!("The ", $doc, " channel")]
            pub const fn $field(&self) -> &MaterialVisual {
                &self.$field
            }

            #[doc = concat!("Mutable access to the ", $doc, " channel")]
            pub fn $field_mut(&mut self) -> &mut MaterialVisual {
                &mut self.$field
            }
        )*
    };
}

impl Material {
    /// Create a material with the built-in engine defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a material from a set of engine-wide defaults. All channels
    /// start empty.
    pub fn from_defaults(defaults: &MaterialDefaults) -> Self {
        Self {
            diffuse: MaterialVisual::default(),
            ambient: MaterialVisual::default(),
            specular: MaterialVisual::default(),
            normal: MaterialVisual::default(),
            reflective: MaterialVisual::default(),
            emission: MaterialVisual::default(),
            transparent: MaterialVisual::default(),
            multiply: MaterialVisual::default(),
            ambient_occlusion: MaterialVisual::default(),
            self_illumination: MaterialVisual::default(),
            name: None,
            shininess: defaults.shininess,
            fresnel_exponent: defaults.fresnel_exponent,
            transparency: defaults.transparency,
            transparency_mode: defaults.transparency_mode,
            lighting_model: defaults.lighting_model,
            lit_per_pixel: defaults.lit_per_pixel,
            cull_mode: defaults.cull_mode,
            blend_mode: defaults.blend_mode,
            writes_to_depth_buffer: defaults.writes_to_depth_buffer,
            reads_from_depth_buffer: defaults.reads_from_depth_buffer,
        }
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    visual_accessors! {
        diffuse, diffuse_mut, "diffuse";
        ambient, ambient_mut, "ambient";
        specular, specular_mut, "specular";
        normal, normal_mut, "normal";
        reflective, reflective_mut, "reflective";
        emission, emission_mut, "emission";
        transparent, transparent_mut, "transparent";
        multiply, multiply_mut, "multiply";
        ambient_occlusion, ambient_occlusion_mut, "ambient occlusion";
        self_illumination, self_illumination_mut, "self-illumination";
    }

    /// The channel playing `role`
    pub const fn visual(&self, role: VisualRole) -> &MaterialVisual {
        match role {
            VisualRole::Diffuse => &self.diffuse,
            VisualRole::Ambient => &self.ambient,
            VisualRole::Specular => &self.specular,
            VisualRole::Normal => &self.normal,
            VisualRole::Reflective => &self.reflective,
            VisualRole::Emission => &self.emission,
            VisualRole::Transparent => &self.transparent,
            VisualRole::Multiply => &self.multiply,
            VisualRole::AmbientOcclusion => &self.ambient_occlusion,
            VisualRole::SelfIllumination => &self.self_illumination,
        }
    }

    /// Mutable access to the channel playing `role`
    pub fn visual_mut(&mut self, role: VisualRole) -> &mut MaterialVisual {
        match role {
            VisualRole::Diffuse => &mut self.diffuse,
            VisualRole::Ambient => &mut self.ambient,
            VisualRole::Specular => &mut self.specular,
            VisualRole::Normal => &mut self.normal,
            VisualRole::Reflective => &mut self.reflective,
            VisualRole::Emission => &mut self.emission,
            VisualRole::Transparent => &mut self.transparent,
            VisualRole::Multiply => &mut self.multiply,
            VisualRole::AmbientOcclusion => &mut self.ambient_occlusion,
            VisualRole::SelfIllumination => &mut self.self_illumination,
        }
    }

    /// Every channel with its role, in role order
    pub fn visuals(&self) -> impl Iterator<Item = (VisualRole, &MaterialVisual)> + '_ {
        VisualRole::ALL.into_iter().map(move |role| (role, self.visual(role)))
    }

    /// User-provided name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name. Names are not required to be unique.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Remove the name
    pub fn clear_name(&mut self) {
        self.name = None;
    }

    /// Specular exponent
    pub const fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Set the specular exponent
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }

    /// Fresnel exponent
    pub const fn fresnel_exponent(&self) -> f32 {
        self.fresnel_exponent
    }

    /// Set the fresnel exponent
    pub fn set_fresnel_exponent(&mut self, exponent: f32) {
        self.fresnel_exponent = exponent;
    }

    /// Uniform transparency, interpreted through [`TransparencyMode`]
    pub const fn transparency(&self) -> f32 {
        self.transparency
    }

    /// Set the uniform transparency. Not clamped.
    pub fn set_transparency(&mut self, transparency: f32) {
        self.transparency = transparency;
    }

    /// How transparency is derived
    pub const fn transparency_mode(&self) -> TransparencyMode {
        self.transparency_mode
    }

    /// Set how transparency is derived
    pub fn set_transparency_mode(&mut self, mode: TransparencyMode) {
        self.transparency_mode = mode;
    }

    /// Shading equation
    pub const fn lighting_model(&self) -> LightingModel {
        self.lighting_model
    }

    /// Set the shading equation
    pub fn set_lighting_model(&mut self, model: LightingModel) {
        self.lighting_model = model;
    }

    /// Per-pixel (true) or per-vertex (false) lighting
    pub const fn lit_per_pixel(&self) -> bool {
        self.lit_per_pixel
    }

    /// Choose per-pixel or per-vertex lighting
    pub fn set_lit_per_pixel(&mut self, per_pixel: bool) {
        self.lit_per_pixel = per_pixel;
    }

    /// Face culling
    pub const fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    /// Set face culling
    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    /// Blend equation against the render target
    pub const fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Set the blend equation
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    /// Whether fragments write depth
    pub const fn writes_to_depth_buffer(&self) -> bool {
        self.writes_to_depth_buffer
    }

    /// Enable or disable depth writes
    pub fn set_writes_to_depth_buffer(&mut self, writes: bool) {
        self.writes_to_depth_buffer = writes;
    }

    /// Whether fragments are depth tested
    pub const fn reads_from_depth_buffer(&self) -> bool {
        self.reads_from_depth_buffer
    }

    /// Enable or disable depth testing
    pub fn set_reads_from_depth_buffer(&mut self, reads: bool) {
        self.reads_from_depth_buffer = reads;
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.diffuse == other.diffuse
            && self.ambient == other.ambient
            && self.specular == other.specular
            && self.normal == other.normal
            && self.reflective == other.reflective
            && self.emission == other.emission
            && self.transparent == other.transparent
            && self.multiply == other.multiply
            && self.ambient_occlusion == other.ambient_occlusion
            && self.self_illumination == other.self_illumination
            && self.shininess == other.shininess
            && self.fresnel_exponent == other.fresnel_exponent
            && self.transparency == other.transparency
            && self.transparency_mode == other.transparency_mode
            && self.lighting_model == other.lighting_model
            && self.lit_per_pixel == other.lit_per_pixel
            && self.cull_mode == other.cull_mode
            && self.blend_mode == other.blend_mode
            && self.writes_to_depth_buffer == other.writes_to_depth_buffer
            && self.reads_from_depth_buffer == other.reads_from_depth_buffer
    }
}

/// Whole materials can be stored as `.ron` or `.toml` files
impl Config for Material {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::rgb;
    use crate::render::resources::materials::TextureHandle;

    #[test]
    fn test_default_material() {
        let material = Material::new();

        assert_eq!(material.name(), None);
        assert_eq!(material.shininess(), 2.0);
        assert_eq!(material.fresnel_exponent(), 1.0);
        assert_eq!(material.transparency(), 1.0);
        assert_eq!(material.transparency_mode(), TransparencyMode::RgbZero);
        assert_eq!(material.lighting_model(), LightingModel::Constant);
        assert!(material.lit_per_pixel());
        assert_eq!(material.cull_mode(), CullMode::Back);
        assert_eq!(material.blend_mode(), BlendMode::Alpha);
        assert!(material.writes_to_depth_buffer());
        assert!(material.reads_from_depth_buffer());
        assert!(material.visuals().all(|(_, visual)| visual.is_empty()));
    }

    #[test]
    fn test_from_custom_defaults() {
        let defaults = MaterialDefaults {
            lighting_model: LightingModel::Blinn,
            shininess: 32.0,
            ..MaterialDefaults::default()
        };

        let material = Material::from_defaults(&defaults);
        assert_eq!(material.lighting_model(), LightingModel::Blinn);
        assert_eq!(material.shininess(), 32.0);
        assert_eq!(material.cull_mode(), CullMode::Back);
    }

    #[test]
    fn test_named_accessors_match_role_access() {
        let mut material = Material::new();
        material.diffuse_mut().set_texture(TextureHandle(1));
        material.ambient_mut().set_color(rgb(0.1, 0.1, 0.1));
        material.specular_mut().set_texture(TextureHandle(3));
        material.normal_mut().set_texture(TextureHandle(4));
        material.reflective_mut().set_cube_texture(TextureHandle(5));
        material.emission_mut().set_color(rgb(1.0, 0.5, 0.0));
        material.transparent_mut().set_texture(TextureHandle(7));
        material.multiply_mut().set_color(rgb(0.5, 0.5, 0.5));
        material.ambient_occlusion_mut().set_texture(TextureHandle(9));
        material.self_illumination_mut().set_color(rgb(0.0, 0.0, 1.0));

        assert_eq!(material.visual(VisualRole::Diffuse), material.diffuse());
        assert_eq!(material.visual(VisualRole::Ambient), material.ambient());
        assert_eq!(material.visual(VisualRole::Specular), material.specular());
        assert_eq!(material.visual(VisualRole::Normal), material.normal());
        assert_eq!(material.visual(VisualRole::Reflective), material.reflective());
        assert_eq!(material.visual(VisualRole::Emission), material.emission());
        assert_eq!(material.visual(VisualRole::Transparent), material.transparent());
        assert_eq!(material.visual(VisualRole::Multiply), material.multiply());
        assert_eq!(material.visual(VisualRole::AmbientOcclusion), material.ambient_occlusion());
        assert_eq!(material.visual(VisualRole::SelfIllumination), material.self_illumination());
    }

    #[test]
    fn test_visual_mut_edits_in_place() {
        let mut material = Material::new();
        material.visual_mut(VisualRole::Emission).set_color(rgb(1.0, 0.0, 0.0));
        assert_eq!(material.emission().color(), Some(rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_name_is_not_part_of_equality() {
        let mut a = Material::new().with_name("hull");
        let b = Material::new().with_name("deck");
        assert_eq!(a, b);
        assert_eq!(Material::new(), b);

        let mut c = b.clone();
        c.set_shininess(8.0);
        assert_ne!(b, c);

        a.set_name("");
        assert_eq!(a.name(), Some(""));
        a.clear_name();
        assert_eq!(a.name(), None);
    }

    #[test]
    fn test_ron_round_trip() {
        let mut material = Material::new().with_name("glass");
        material.set_lighting_model(LightingModel::Phong);
        material.set_transparency(0.25);
        material.diffuse_mut().set_color(rgb(0.2, 0.3, 0.4));
        material.normal_mut().set_texture(TextureHandle(12));

        let text = material.to_ron_string().unwrap();
        let parsed = Material::from_ron_str(&text).unwrap();
        assert_eq!(parsed, material);
        assert_eq!(parsed.name(), Some("glass"));
    }

    #[test]
    fn test_toml_file_round_trip() {
        let mut material = Material::new().with_name("visor");
        material.set_lighting_model(LightingModel::Blinn);
        material.set_blend_mode(BlendMode::Screen);
        material.set_writes_to_depth_buffer(false);
        material.diffuse_mut().set_texture(TextureHandle(3));
        material.reflective_mut().set_cube_texture(TextureHandle(5));
        material.emission_mut().set_color(rgb(0.0, 0.5, 1.0));
        material.normal_mut().set_intensity(0.5);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visor.toml");
        material.save_to_file(&path).unwrap();

        let loaded = Material::load_from_file(&path).unwrap();
        assert_eq!(loaded, material);
        assert_eq!(loaded.name(), Some("visor"));
        assert_eq!(loaded.reflective().texture(), Some(TextureHandle(5)));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let material = Material::from_toml_str("lighting_model = \"Lambert\"\ncull_mode = \"None\"\n").unwrap();
        assert_eq!(material.lighting_model(), LightingModel::Lambert);
        assert_eq!(material.cull_mode(), CullMode::None);
        assert_eq!(material.shininess(), 2.0);
        assert!(material.diffuse().is_empty());
    }
}
