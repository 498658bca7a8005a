//! Visual channel of a material
//!
//! A [`MaterialVisual`] is one shading slot (diffuse, specular, ...). Its
//! contents may be a constant color, a texture, a cube texture or a dynamic
//! source; the material owning the visual never inspects which.

use serde::{Deserialize, Serialize};

use super::texture::{DynamicSourceHandle, FilterMode, MipFilterMode, TextureHandle, WrapMode};
use crate::foundation::math::{Color, Mat3};

/// What a visual channel currently samples
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum VisualContents {
    /// Nothing authored; the channel contributes no effect
    #[default]
    Empty,
    /// Constant linear RGBA color
    Color(Color),
    /// 2D texture
    Texture(TextureHandle),
    /// Cube map, typically for the reflective channel
    CubeTexture(TextureHandle),
    /// Texture whose contents are produced every frame (video, camera)
    Dynamic(DynamicSourceHandle),
}

/// Discriminant of [`VisualContents`], without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// See [`VisualContents::Empty`]
    Empty,
    /// See [`VisualContents::Color`]
    Color,
    /// See [`VisualContents::Texture`]
    Texture,
    /// See [`VisualContents::CubeTexture`]
    CubeTexture,
    /// See [`VisualContents::Dynamic`]
    Dynamic,
}

impl VisualKind {
    /// Whether the pipeline has to bind a sampler for this kind
    pub const fn is_sampled(self) -> bool {
        matches!(self, Self::Texture | Self::CubeTexture | Self::Dynamic)
    }
}

impl VisualContents {
    /// The kind of contents
    pub const fn kind(&self) -> VisualKind {
        match self {
            Self::Empty => VisualKind::Empty,
            Self::Color(_) => VisualKind::Color,
            Self::Texture(_) => VisualKind::Texture,
            Self::CubeTexture(_) => VisualKind::CubeTexture,
            Self::Dynamic(_) => VisualKind::Dynamic,
        }
    }
}

/// One shading slot of a material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialVisual {
    contents: VisualContents,
    intensity: f32,
    wrap_s: WrapMode,
    wrap_t: WrapMode,
    min_filter: FilterMode,
    mag_filter: FilterMode,
    mip_filter: MipFilterMode,
    uv_transform: Mat3,
}

impl Default for MaterialVisual {
    fn default() -> Self {
        Self {
            contents: VisualContents::Empty,
            intensity: 1.0,
            wrap_s: WrapMode::default(),
            wrap_t: WrapMode::default(),
            min_filter: FilterMode::default(),
            mag_filter: FilterMode::default(),
            mip_filter: MipFilterMode::default(),
            uv_transform: Mat3::identity(),
        }
    }
}

impl MaterialVisual {
    /// Create an empty visual
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visual holding `contents`
    pub fn with_contents(contents: VisualContents) -> Self {
        Self {
            contents,
            ..Self::default()
        }
    }

    /// Current contents
    pub const fn contents(&self) -> &VisualContents {
        &self.contents
    }

    /// Kind of the current contents
    pub const fn kind(&self) -> VisualKind {
        self.contents.kind()
    }

    /// True when nothing is authored
    pub const fn is_empty(&self) -> bool {
        matches!(self.contents, VisualContents::Empty)
    }

    /// Replace the contents
    pub fn set_contents(&mut self, contents: VisualContents) {
        self.contents = contents;
    }

    /// Use a constant color
    pub fn set_color(&mut self, color: Color) {
        self.contents = VisualContents::Color(color);
    }

    /// Use a 2D texture
    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.contents = VisualContents::Texture(texture);
    }

    /// Use a cube map
    pub fn set_cube_texture(&mut self, texture: TextureHandle) {
        self.contents = VisualContents::CubeTexture(texture);
    }

    /// Use a dynamic source
    pub fn set_dynamic_source(&mut self, source: DynamicSourceHandle) {
        self.contents = VisualContents::Dynamic(source);
    }

    /// Return to the empty state. Sampling settings are kept.
    pub fn clear(&mut self) {
        self.contents = VisualContents::Empty;
    }

    /// The constant color, if that is what the channel holds
    pub fn color(&self) -> Option<Color> {
        match self.contents {
            VisualContents::Color(color) => Some(color),
            _ => None,
        }
    }

    /// The texture handle, for both 2D and cube textures
    pub fn texture(&self) -> Option<TextureHandle> {
        match self.contents {
            VisualContents::Texture(texture) | VisualContents::CubeTexture(texture) => Some(texture),
            _ => None,
        }
    }

    /// The dynamic source handle, if any
    pub fn dynamic_source(&self) -> Option<DynamicSourceHandle> {
        match self.contents {
            VisualContents::Dynamic(source) => Some(source),
            _ => None,
        }
    }

    /// Scalar multiplier applied to whatever the channel samples
    pub const fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Set the intensity multiplier
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Wrap mode along the S (U) axis
    pub const fn wrap_s(&self) -> WrapMode {
        self.wrap_s
    }

    /// Set the S (U) wrap mode
    pub fn set_wrap_s(&mut self, mode: WrapMode) {
        self.wrap_s = mode;
    }

    /// Wrap mode along the T (V) axis
    pub const fn wrap_t(&self) -> WrapMode {
        self.wrap_t
    }

    /// Set the T (V) wrap mode
    pub fn set_wrap_t(&mut self, mode: WrapMode) {
        self.wrap_t = mode;
    }

    /// Set both wrap modes
    pub fn set_wrap(&mut self, mode: WrapMode) {
        self.wrap_s = mode;
        self.wrap_t = mode;
    }

    /// Minification filter
    pub const fn min_filter(&self) -> FilterMode {
        self.min_filter
    }

    /// Set the minification filter
    pub fn set_min_filter(&mut self, filter: FilterMode) {
        self.min_filter = filter;
    }

    /// Magnification filter
    pub const fn mag_filter(&self) -> FilterMode {
        self.mag_filter
    }

    /// Set the magnification filter
    pub fn set_mag_filter(&mut self, filter: FilterMode) {
        self.mag_filter = filter;
    }

    /// Mipmap filter
    pub const fn mip_filter(&self) -> MipFilterMode {
        self.mip_filter
    }

    /// Set the mipmap filter
    pub fn set_mip_filter(&mut self, filter: MipFilterMode) {
        self.mip_filter = filter;
    }

    /// Texture-coordinate transform applied before sampling
    pub const fn uv_transform(&self) -> &Mat3 {
        &self.uv_transform
    }

    /// Set the texture-coordinate transform
    pub fn set_uv_transform(&mut self, transform: Mat3) {
        self.uv_transform = transform;
    }
}

impl From<VisualContents> for MaterialVisual {
    fn from(contents: VisualContents) -> Self {
        Self::with_contents(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::rgb;

    #[test]
    fn test_default_visual_is_empty() {
        let visual = MaterialVisual::new();
        assert!(visual.is_empty());
        assert_eq!(visual.kind(), VisualKind::Empty);
        assert_eq!(visual.intensity(), 1.0);
        assert_eq!(visual.wrap_s(), WrapMode::Clamp);
        assert_eq!(visual.mag_filter(), FilterMode::Linear);
        assert_eq!(visual.mip_filter(), MipFilterMode::None);
        assert_eq!(visual.uv_transform(), &Mat3::identity());
    }

    #[test]
    fn test_contents_variants() {
        let mut visual = MaterialVisual::new();

        visual.set_color(rgb(0.2, 0.4, 0.6));
        assert_eq!(visual.kind(), VisualKind::Color);
        assert_eq!(visual.color(), Some(rgb(0.2, 0.4, 0.6)));
        assert_eq!(visual.texture(), None);

        visual.set_texture(TextureHandle(7));
        assert_eq!(visual.kind(), VisualKind::Texture);
        assert_eq!(visual.texture(), Some(TextureHandle(7)));
        assert_eq!(visual.color(), None);

        visual.set_cube_texture(TextureHandle(8));
        assert_eq!(visual.kind(), VisualKind::CubeTexture);
        assert_eq!(visual.texture(), Some(TextureHandle(8)));

        visual.set_dynamic_source(DynamicSourceHandle(3));
        assert_eq!(visual.kind(), VisualKind::Dynamic);
        assert_eq!(visual.dynamic_source(), Some(DynamicSourceHandle(3)));
        assert_eq!(visual.texture(), None);
    }

    #[test]
    fn test_clear_keeps_sampling_settings() {
        let mut visual = MaterialVisual::with_contents(VisualContents::Texture(TextureHandle(1)));
        visual.set_wrap(WrapMode::Repeat);
        visual.set_intensity(0.5);

        visual.clear();

        assert!(visual.is_empty());
        assert_eq!(visual.wrap_s(), WrapMode::Repeat);
        assert_eq!(visual.wrap_t(), WrapMode::Repeat);
        assert_eq!(visual.intensity(), 0.5);
    }

    #[test]
    fn test_sampled_kinds() {
        assert!(!VisualKind::Empty.is_sampled());
        assert!(!VisualKind::Color.is_sampled());
        assert!(VisualKind::Texture.is_sampled());
        assert!(VisualKind::CubeTexture.is_sampled());
        assert!(VisualKind::Dynamic.is_sampled());
    }

    #[test]
    fn test_out_of_range_values_are_stored_as_is() {
        let mut visual = MaterialVisual::new();
        visual.set_intensity(-3.0);
        visual.set_color(rgb(4.0, -1.0, 0.0));
        assert_eq!(visual.intensity(), -3.0);
        assert_eq!(visual.color(), Some(rgb(4.0, -1.0, 0.0)));
    }
}
