//! Math utilities and types
//!
//! Provides the vector and matrix types used by materials: RGBA colors
//! and 2D texture-coordinate transforms.

pub use nalgebra::{Matrix3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type, used as a homogeneous 2D transform for texture coordinates
pub type Mat3 = Matrix3<f32>;

/// Linear RGBA color
pub type Color = Vec4;

/// Rec. 709 luma weights for linear RGB
pub const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Build an RGBA color
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::new(r, g, b, a)
}

/// Build an opaque RGB color
pub fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::new(r, g, b, 1.0)
}

/// Build an opaque color from a `0xRRGGBB` hex code
pub fn color_from_hex(hex: u32) -> Color {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    rgb(r, g, b)
}

/// Relative luminance of a color's RGB part (alpha is ignored)
pub fn luminance(color: &Color) -> f32 {
    color.x * LUMA_WEIGHTS[0] + color.y * LUMA_WEIGHTS[1] + color.z * LUMA_WEIGHTS[2]
}

/// Build a texture-coordinate transform: scale, then rotate (radians), then offset
pub fn uv_transform(offset: Vec2, scale: Vec2, rotation: f32) -> Mat3 {
    let scaling = Mat3::new_nonuniform_scaling(&scale);
    let rotation = Mat3::new_rotation(rotation);
    let translation = Mat3::new_translation(&offset);
    translation * rotation * scaling
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_from_hex() {
        let color = color_from_hex(0xFF8000);
        assert_relative_eq!(color.x, 1.0);
        assert_relative_eq!(color.y, 128.0 / 255.0);
        assert_relative_eq!(color.z, 0.0);
        assert_relative_eq!(color.w, 1.0);
    }

    #[test]
    fn test_luminance_of_white_is_one() {
        assert_relative_eq!(luminance(&rgb(1.0, 1.0, 1.0)), 1.0, epsilon = 1e-6);
        assert_relative_eq!(luminance(&rgba(0.0, 0.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn test_uv_transform_applies_scale_then_offset() {
        let transform = uv_transform(Vec2::new(0.5, 0.25), Vec2::new(2.0, 2.0), 0.0);
        let uv = transform.transform_point(&nalgebra::Point2::new(1.0, 1.0));
        assert_relative_eq!(uv.x, 2.5);
        assert_relative_eq!(uv.y, 2.25);
    }
}
