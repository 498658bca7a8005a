//! Clone-on-write shared material
//!
//! Many geometries can point at one material. Readers keep cheap clones of a
//! [`SharedMaterial`]; an editor calls [`SharedMaterial::make_mut`], which
//! edits in place when it is the only holder and otherwise detaches a private
//! copy first. A frame in flight therefore never sees a half-edited material.

use std::ops::Deref;
use std::sync::Arc;

use super::material::Material;

/// Reference-counted material handle with clone-on-write edits
///
/// Equality is deliberately not implemented: two handles are the *same*
/// material only when [`SharedMaterial::ptr_eq`] holds, even if their
/// values compare equal.
#[derive(Debug, Clone, Default)]
pub struct SharedMaterial(Arc<Material>);

impl SharedMaterial {
    /// Wrap a material
    pub fn new(material: Material) -> Self {
        Self(Arc::new(material))
    }

    /// Borrow the material
    pub fn get(&self) -> &Material {
        &self.0
    }

    /// Mutable access, cloning the material first if anyone else holds it
    pub fn make_mut(&mut self) -> &mut Material {
        if Arc::strong_count(&self.0) > 1 {
            log::trace!("Detaching shared material {:?} before edit", self.0.name());
        }
        Arc::make_mut(&mut self.0)
    }

    /// Whether both handles refer to the same material instance
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Number of handles sharing this instance
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Take the material out, cloning only if it is still shared
    pub fn into_material(self) -> Material {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl Deref for SharedMaterial {
    type Target = Material;

    fn deref(&self) -> &Material {
        &self.0
    }
}

impl From<Material> for SharedMaterial {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::resources::materials::{BlendMode, TextureHandle};

    #[test]
    fn test_clones_share_one_instance() {
        let a = SharedMaterial::new(Material::new());
        let b = a.clone();
        assert!(SharedMaterial::ptr_eq(&a, &b));
        assert_eq!(a.holders(), 2);
    }

    #[test]
    fn test_edit_detaches_from_readers() {
        let frame_snapshot = SharedMaterial::new(Material::new());
        let mut editor = frame_snapshot.clone();

        editor.make_mut().set_blend_mode(BlendMode::Add);
        editor.make_mut().diffuse_mut().set_texture(TextureHandle(2));

        assert!(!SharedMaterial::ptr_eq(&frame_snapshot, &editor));
        assert_eq!(frame_snapshot.blend_mode(), BlendMode::Alpha);
        assert!(frame_snapshot.diffuse().is_empty());
        assert_eq!(editor.blend_mode(), BlendMode::Add);
        assert_eq!(editor.diffuse().texture(), Some(TextureHandle(2)));
    }

    #[test]
    fn test_unshared_edit_is_in_place() {
        let mut only = SharedMaterial::new(Material::new());
        let before = Arc::as_ptr(&only.0);
        only.make_mut().set_shininess(8.0);
        assert_eq!(Arc::as_ptr(&only.0), before);
        assert_eq!(only.shininess(), 8.0);
    }

    #[test]
    fn test_equal_values_are_not_the_same_material() {
        let a = SharedMaterial::new(Material::new());
        let b = SharedMaterial::new(Material::new());
        assert_eq!(a.get(), b.get());
        assert!(!SharedMaterial::ptr_eq(&a, &b));
    }

    #[test]
    fn test_into_material() {
        let a = SharedMaterial::new(Material::new().with_name("solo"));
        let b = a.clone();
        assert_eq!(a.into_material().name(), Some("solo"));
        assert_eq!(b.into_material().name(), Some("solo"));
    }
}
