//! Material loader with MTL file support
//!
//! Converts Wavefront MTL materials into [`Material`] values and loads
//! RON/TOML material files. Texture paths are resolved relative to the file
//! they appear in and handed to a [`TextureResolver`].

use std::fs;
use std::path::{Path, PathBuf};

use super::mtl_parser::{MtlData, MtlParser, MtlTextureMap};
use crate::assets::AssetError;
use crate::config::Config;
use crate::core::config::{MaterialDefaults, MaterialSystemConfig};
use crate::foundation::math::{uv_transform, Color, Vec3};
use crate::render::resources::materials::{
    BlendMode, LightingModel, Material, MaterialHandle, MaterialLibrary, TextureHandle,
    TransparencyMode, VisualRole, WrapMode,
};

/// Turns texture file paths into texture handles
///
/// Implemented by whatever owns texture upload. Returning `None` leaves the
/// channel with its color contents (or empty).
pub trait TextureResolver {
    /// Resolve a texture file for the given channel
    fn resolve(&mut self, path: &Path, role: VisualRole) -> Option<TextureHandle>;
}

impl<F> TextureResolver for F
where
    F: FnMut(&Path, VisualRole) -> Option<TextureHandle>,
{
    fn resolve(&mut self, path: &Path, role: VisualRole) -> Option<TextureHandle> {
        self(path, role)
    }
}

/// Material loader for creating Material instances from files
#[derive(Debug, Clone, Default)]
pub struct MaterialLoader {
    defaults: MaterialDefaults,
    base_dir: PathBuf,
}

impl MaterialLoader {
    /// Create a loader whose materials start from `defaults`
    pub fn new(defaults: MaterialDefaults) -> Self {
        Self {
            defaults,
            base_dir: PathBuf::new(),
        }
    }

    /// Create a loader from the system configuration
    pub fn from_config(config: &MaterialSystemConfig) -> Self {
        Self::new(config.defaults.clone()).with_base_dir(config.materials_dir.clone())
    }

    /// Resolve relative file paths against `dir`
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Defaults applied before MTL statements
    pub fn defaults(&self) -> &MaterialDefaults {
        &self.defaults
    }

    /// Directory relative file paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Location of `path` after base directory resolution. Absolute paths
    /// are returned unchanged.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Load every material in a file, picking the format from the extension
    ///
    /// `.mtl` files yield all their materials in file order; `.ron` and
    /// `.toml` files hold a single serialized material.
    pub fn load_materials<R>(
        &self,
        path: impl AsRef<Path>,
        resolver: &mut R,
    ) -> Result<Vec<Material>, AssetError>
    where
        R: TextureResolver + ?Sized,
    {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("mtl") => self.load_all_mtl(path, resolver),
            Some(ext) if ext.eq_ignore_ascii_case("ron") || ext.eq_ignore_ascii_case("toml") => {
                Ok(vec![self.load_material_file(path)?])
            }
            _ => Err(AssetError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Load one material from an MTL file
    ///
    /// # Arguments
    /// * `mtl_path` - Path to the .mtl file
    /// * `material_name` - Name of the specific material to load (matches newmtl name)
    /// * `resolver` - Turns texture paths into handles
    pub fn load_mtl<R>(
        &self,
        mtl_path: impl AsRef<Path>,
        material_name: &str,
        resolver: &mut R,
    ) -> Result<Material, AssetError>
    where
        R: TextureResolver + ?Sized,
    {
        let mtl_path = self.resolve_path(mtl_path);
        let materials = Self::read_mtl(&mtl_path)?;

        let mtl_data = materials
            .iter()
            .find(|data| data.name == material_name)
            .ok_or_else(|| AssetError::MaterialNotFound {
                name: material_name.to_string(),
                path: mtl_path.display().to_string(),
            })?;

        Ok(self.material_from_mtl(mtl_data, texture_dir(&mtl_path), resolver))
    }

    /// Load all materials from an MTL file, in file order
    pub fn load_all_mtl<R>(
        &self,
        mtl_path: impl AsRef<Path>,
        resolver: &mut R,
    ) -> Result<Vec<Material>, AssetError>
    where
        R: TextureResolver + ?Sized,
    {
        let mtl_path = self.resolve_path(mtl_path);
        let materials = Self::read_mtl(&mtl_path)?;
        let dir = texture_dir(&mtl_path);

        log::info!("Loaded {} materials from {:?}", materials.len(), mtl_path);

        Ok(materials
            .iter()
            .map(|data| self.material_from_mtl(data, dir, resolver))
            .collect())
    }

    /// Load every material in a file into a library
    ///
    /// Accepts the formats of [`load_materials`](Self::load_materials).
    /// Returns handles in file order. Stops at the first material the
    /// library has no room for.
    pub fn load_into_library<R>(
        &self,
        library: &mut MaterialLibrary,
        path: impl AsRef<Path>,
        resolver: &mut R,
    ) -> Result<Vec<MaterialHandle>, AssetError>
    where
        R: TextureResolver + ?Sized,
    {
        self.load_materials(path, resolver)?
            .into_iter()
            .map(|material| library.insert(material).map_err(AssetError::from))
            .collect()
    }

    /// Load a serialized material (`.ron` or `.toml`)
    ///
    /// Keys missing from the file take the built-in material defaults.
    pub fn load_material_file(&self, path: impl AsRef<Path>) -> Result<Material, AssetError> {
        let path = self.resolve_path(path);
        let material = Material::load_from_file(&path)?;
        log::debug!("Loaded material {:?} from {:?}", material.name(), path);
        Ok(material)
    }

    /// Convert parsed MTL data into a material
    ///
    /// Texture paths are joined onto `base_dir`. A texture map takes
    /// precedence over the color statement for the same channel.
    pub fn material_from_mtl<R>(&self, data: &MtlData, base_dir: &Path, resolver: &mut R) -> Material
    where
        R: TextureResolver + ?Sized,
    {
        let mut material = Material::from_defaults(&self.defaults).with_name(data.name.clone());

        // Colors
        let colors = [
            (VisualRole::Diffuse, data.diffuse),
            (VisualRole::Ambient, data.ambient),
            (VisualRole::Specular, data.specular),
            (VisualRole::Emission, data.emission.filter(|ke| *ke != Vec3::zeros())),
        ];
        for (role, color) in colors {
            if let Some(color) = color {
                material.visual_mut(role).set_color(opaque(color));
            }
        }

        // Textures
        let maps = [
            (VisualRole::Diffuse, &data.diffuse_map),
            (VisualRole::Ambient, &data.ambient_map),
            (VisualRole::Specular, &data.specular_map),
            (VisualRole::Emission, &data.emission_map),
            (VisualRole::Transparent, &data.dissolve_map),
            (VisualRole::Normal, &data.normal_map),
            (VisualRole::Reflective, &data.reflection_map),
            (VisualRole::AmbientOcclusion, &data.ambient_occlusion_map),
        ];
        for (role, map) in maps {
            if let Some(map) = map {
                Self::apply_texture_map(&mut material, role, map, base_dir, resolver);
            }
        }

        // Scalars
        if let Some(ns) = data.specular_exponent {
            material.set_shininess(ns);
        }

        if let Some(d) = data.dissolve {
            material.set_transparency(d);
            material.set_transparency_mode(TransparencyMode::AOne);
        }
        if data.dissolve_map.is_some() {
            material.set_transparency_mode(TransparencyMode::AOne);
        }

        let translucent = data.dissolve.is_some_and(|d| d < 1.0) || data.dissolve_map.is_some();
        if translucent {
            material.set_writes_to_depth_buffer(false);
            material.set_blend_mode(BlendMode::Alpha);
        }

        material.set_lighting_model(lighting_model_for_illum(data.illumination_model));

        log::debug!(
            "Converted MTL material '{}' ({:?}, translucent: {})",
            data.name,
            material.lighting_model(),
            translucent
        );

        material
    }

    fn apply_texture_map<R>(
        material: &mut Material,
        role: VisualRole,
        map: &MtlTextureMap,
        base_dir: &Path,
        resolver: &mut R,
    ) where
        R: TextureResolver + ?Sized,
    {
        let path = base_dir.join(&map.path);
        let Some(handle) = resolver.resolve(&path, role) else {
            log::warn!("Texture {:?} for {} channel could not be resolved", path, role);
            return;
        };

        let visual = material.visual_mut(role);
        if map.is_cube() {
            visual.set_cube_texture(handle);
        } else {
            visual.set_texture(handle);
        }
        visual.set_wrap(if map.clamp { WrapMode::Clamp } else { WrapMode::Repeat });
        visual.set_uv_transform(uv_transform(map.offset, map.scale, 0.0));
        if let Some(multiplier) = map.bump_multiplier {
            visual.set_intensity(multiplier);
        }
    }

    fn read_mtl(mtl_path: &Path) -> Result<Vec<MtlData>, AssetError> {
        let contents = fs::read_to_string(mtl_path)?;
        MtlParser::parse(&contents)
    }
}

/// Lighting model for an MTL `illum` value
///
/// 0 is color only, 1 is diffuse only, 2 (and a missing statement) is
/// highlight on. Higher models add reflection terms and map to Phong.
pub fn lighting_model_for_illum(illum: Option<u32>) -> LightingModel {
    match illum {
        Some(0) => LightingModel::Constant,
        Some(1) => LightingModel::Lambert,
        None | Some(2) => LightingModel::Blinn,
        Some(_) => LightingModel::Phong,
    }
}

fn opaque(color: Vec3) -> Color {
    Color::new(color.x, color.y, color.z, 1.0)
}

fn texture_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}
