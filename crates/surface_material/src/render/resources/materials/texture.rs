//! Texture references and sampling modes used by material visuals
//!
//! Texture decoding and GPU upload live outside this crate; materials only
//! hold opaque handles issued by whichever texture system owns the data.

use serde::{Deserialize, Serialize};

/// Handle for a texture resource owned by an external texture system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Handle for a dynamic texture source (video, camera feed, render target)
/// whose contents change every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynamicSourceHandle(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    #[default]
    Linear,
}

/// Mipmap filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MipFilterMode {
    /// Sample the base level only
    #[default]
    None,
    /// Pick the nearest mip level
    Nearest,
    /// Blend between the two nearest mip levels
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WrapMode {
    /// Clamp to edge
    #[default]
    Clamp,
    /// Repeat the texture
    Repeat,
    /// Mirror the texture on every repeat
    Mirror,
}
