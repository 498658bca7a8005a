//! Render-state enumerations carried by a material
//!
//! These select the shading equation, face culling, blending and the way
//! transparency is derived. A material stores them verbatim; resolving
//! unsupported combinations is left to the rendering backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{luminance, Color};

/// Which mesh faces are discarded before shading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CullMode {
    /// Discard back faces
    #[default]
    Back,
    /// Discard front faces
    Front,
    /// Keep both faces
    None,
}

impl CullMode {
    /// Every variant, in declaration order
    pub const ALL: [Self; 3] = [Self::Back, Self::Front, Self::None];

    /// Stable lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Front => "front",
            Self::None => "none",
        }
    }
}

/// How a shaded fragment combines with the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Standard alpha blending (src_alpha, 1-src_alpha)
    #[default]
    Alpha,
    /// Additive blending (src_alpha, one)
    Add,
    /// Reverse-subtract the source from the destination
    Subtract,
    /// Multiply source and destination colors
    Multiply,
    /// Screen blending (one, 1-src_color)
    Screen,
    /// Overwrite the destination
    Replace,
}

impl BlendMode {
    /// Every variant, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Alpha,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Screen,
        Self::Replace,
    ];

    /// Stable lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Replace => "replace",
        }
    }

    /// Whether the blend equation reads the destination color
    pub const fn reads_destination(self) -> bool {
        !matches!(self, Self::Replace)
    }
}

/// How the transparency scalar and the transparent channel produce alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransparencyMode {
    /// Alpha comes from the alpha component; 1 is opaque
    AOne,
    /// Alpha comes from the RGB luminance; black is opaque
    #[default]
    RgbZero,
}

impl TransparencyMode {
    /// Every variant, in declaration order
    pub const ALL: [Self; 2] = [Self::AOne, Self::RgbZero];

    /// Stable lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AOne => "a_one",
            Self::RgbZero => "rgb_zero",
        }
    }

    /// Resolve final opacity for a fragment.
    ///
    /// `sample` is the transparent channel's value at the fragment, or `None`
    /// when that channel is empty, in which case the uniform `transparency`
    /// is used unchanged. No clamping is applied.
    pub fn resolve_alpha(self, transparency: f32, sample: Option<&Color>) -> f32 {
        match (self, sample) {
            (_, None) => transparency,
            (Self::AOne, Some(sample)) => sample.w * transparency,
            (Self::RgbZero, Some(sample)) => (1.0 - luminance(sample)) * transparency,
        }
    }
}

/// Analytic shading equation evaluated for a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LightingModel {
    /// Phong specular (reflection vector)
    Phong,
    /// Blinn-Phong specular (half vector)
    Blinn,
    /// Diffuse only
    Lambert,
    /// Unlit; channels are used as-is
    #[default]
    Constant,
}

impl LightingModel {
    /// Every variant, in declaration order
    pub const ALL: [Self; 4] = [Self::Phong, Self::Blinn, Self::Lambert, Self::Constant];

    /// Stable lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phong => "phong",
            Self::Blinn => "blinn",
            Self::Lambert => "lambert",
            Self::Constant => "constant",
        }
    }

    /// Whether scene lights contribute at all
    pub const fn is_lit(self) -> bool {
        !matches!(self, Self::Constant)
    }

    /// Whether the equation has a specular term
    pub const fn has_specular(self) -> bool {
        matches!(self, Self::Phong | Self::Blinn)
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(CullMode, BlendMode, TransparencyMode, LightingModel);
