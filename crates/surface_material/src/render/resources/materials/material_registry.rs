//! Material library: handle-based storage for shared materials
//!
//! Geometries refer to materials through [`MaterialHandle`]s; many handles
//! held by many geometries may point at one entry. Edits go through
//! `&mut MaterialLibrary`, so the borrow checker keeps them out of any
//! render pass that is reading the library.

use slotmap::{new_key_type, SlotMap};

use super::material::Material;
use super::shared_material::SharedMaterial;
use crate::core::config::{MaterialDefaults, MaterialSystemConfig};

new_key_type! {
    /// Stable handle to a material stored in a [`MaterialLibrary`]
    pub struct MaterialHandle;
}

/// Material library errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// The library is full
    #[error("Maximum number of materials reached ({0})")]
    CapacityExceeded(usize),

    /// The handle was removed or belongs to another library
    #[error("Material {0:?} not found")]
    InvalidHandle(MaterialHandle),
}

/// Central store for materials shared across geometries
pub struct MaterialLibrary {
    /// All registered materials
    materials: SlotMap<MaterialHandle, Material>,
    /// Values new materials start from
    defaults: MaterialDefaults,
    /// Maximum number of materials that can be stored
    max_materials: usize,
}

impl MaterialLibrary {
    /// Create a library with built-in defaults
    pub fn new(max_materials: usize) -> Self {
        Self {
            materials: SlotMap::with_capacity_and_key(max_materials.min(256)),
            defaults: MaterialDefaults::default(),
            max_materials,
        }
    }

    /// Create a library from system configuration
    pub fn from_config(config: &MaterialSystemConfig) -> Self {
        let mut library = Self::new(config.max_materials);
        library.defaults = config.defaults.clone();
        library
    }

    /// Defaults used by [`MaterialLibrary::create`]
    pub const fn defaults(&self) -> &MaterialDefaults {
        &self.defaults
    }

    /// Create a new material from the library defaults and store it
    pub fn create(&mut self) -> Result<MaterialHandle, MaterialError> {
        let material = Material::from_defaults(&self.defaults);
        self.insert(material)
    }

    /// Store a material
    pub fn insert(&mut self, material: Material) -> Result<MaterialHandle, MaterialError> {
        if self.materials.len() >= self.max_materials {
            log::warn!(
                "Rejecting material {:?}: library holds {} of {} materials",
                material.name(),
                self.materials.len(),
                self.max_materials
            );
            return Err(MaterialError::CapacityExceeded(self.max_materials));
        }

        let name = material.name().map(str::to_owned);
        let handle = self.materials.insert(material);
        log::debug!("Registered material {:?} ({:?})", handle, name);
        Ok(handle)
    }

    /// Get a material
    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle)
    }

    /// Get a material for editing. Every geometry holding `handle` sees
    /// the edit.
    pub fn get_mut(&mut self, handle: MaterialHandle) -> Option<&mut Material> {
        self.materials.get_mut(handle)
    }

    /// Remove a material, returning it
    pub fn remove(&mut self, handle: MaterialHandle) -> Result<Material, MaterialError> {
        let material = self
            .materials
            .remove(handle)
            .ok_or(MaterialError::InvalidHandle(handle))?;
        log::debug!("Removed material {:?} ({:?})", handle, material.name());
        Ok(material)
    }

    /// Whether the handle is live
    pub fn contains(&self, handle: MaterialHandle) -> bool {
        self.materials.contains_key(handle)
    }

    /// Store a copy of an existing material under a new handle, for edits
    /// that must not affect the original's users
    pub fn duplicate(&mut self, handle: MaterialHandle) -> Result<MaterialHandle, MaterialError> {
        let copy = self
            .materials
            .get(handle)
            .cloned()
            .ok_or(MaterialError::InvalidHandle(handle))?;
        self.insert(copy)
    }

    /// Snapshot a material into a [`SharedMaterial`] for a frame in flight
    pub fn share(&self, handle: MaterialHandle) -> Option<SharedMaterial> {
        self.materials.get(handle).cloned().map(SharedMaterial::new)
    }

    /// All materials carrying `name`. Names are not unique.
    pub fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (MaterialHandle, &'a Material)> + 'a {
        self.materials
            .iter()
            .filter(move |(_, material)| material.name() == Some(name))
    }

    /// Iterate over all materials
    pub fn iter(&self) -> impl Iterator<Item = (MaterialHandle, &Material)> {
        self.materials.iter()
    }

    /// Get number of stored materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Maximum number of materials
    pub const fn capacity(&self) -> usize {
        self.max_materials
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::from_config(&MaterialSystemConfig::default())
    }
}

impl Drop for MaterialLibrary {
    fn drop(&mut self) {
        log::debug!("MaterialLibrary dropping with {} materials", self.materials.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::resources::materials::{CullMode, LightingModel, TextureHandle};

    #[test]
    fn test_create_uses_configured_defaults() {
        let config = MaterialSystemConfig::new().with_defaults(MaterialDefaults {
            lighting_model: LightingModel::Lambert,
            ..MaterialDefaults::default()
        });
        let mut library = MaterialLibrary::from_config(&config);

        let handle = library.create().unwrap();
        assert_eq!(library.get(handle).unwrap().lighting_model(), LightingModel::Lambert);
    }

    #[test]
    fn test_capacity_limit() {
        let mut library = MaterialLibrary::new(1);
        library.insert(Material::new()).unwrap();
        assert_eq!(library.insert(Material::new()), Err(MaterialError::CapacityExceeded(1)));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_edits_are_visible_through_every_holder() {
        let mut library = MaterialLibrary::new(8);
        let handle = library.create().unwrap();
        let geometry_a = handle;
        let geometry_b = handle;

        library.get_mut(geometry_a).unwrap().set_cull_mode(CullMode::None);
        assert_eq!(library.get(geometry_b).unwrap().cull_mode(), CullMode::None);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut library = MaterialLibrary::new(8);
        let original = library.create().unwrap();
        let copy = library.duplicate(original).unwrap();

        library.get_mut(copy).unwrap().diffuse_mut().set_texture(TextureHandle(4));

        assert_ne!(original, copy);
        assert!(library.get(original).unwrap().diffuse().is_empty());
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut library = MaterialLibrary::new(8);
        let handle = library.create().unwrap();
        library.remove(handle).unwrap();

        assert!(!library.contains(handle));
        assert!(library.get(handle).is_none());
        assert_eq!(library.remove(handle).unwrap_err(), MaterialError::InvalidHandle(handle));
        assert!(library.is_empty());
    }

    #[test]
    fn test_find_by_name_returns_every_match() {
        let mut library = MaterialLibrary::new(8);
        library.insert(Material::new().with_name("metal")).unwrap();
        library.insert(Material::new().with_name("metal")).unwrap();
        library.insert(Material::new().with_name("glass")).unwrap();

        assert_eq!(library.find_by_name("metal").count(), 2);
        assert_eq!(library.find_by_name("glass").count(), 1);
        assert_eq!(library.find_by_name("wood").count(), 0);
    }

    #[test]
    fn test_share_snapshots_current_state() {
        let mut library = MaterialLibrary::new(8);
        let handle = library.create().unwrap();
        let snapshot = library.share(handle).unwrap();

        library.get_mut(handle).unwrap().set_shininess(64.0);

        assert_eq!(snapshot.shininess(), 2.0);
        assert_eq!(library.get(handle).unwrap().shininess(), 64.0);
    }
}
