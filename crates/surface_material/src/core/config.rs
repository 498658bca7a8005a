//! # Material System Configuration
//!
//! Configuration for the material subsystem: the engine-wide defaults every
//! new material starts from, library limits and logging.
//!
//! ## Design Goals
//!
//! - **Serializable**: Loaded from TOML or RON through [`Config`]
//! - **Partial files**: Missing keys fall back to the built-in defaults
//! - **Validated**: [`MaterialSystemConfig::validate`] rejects unusable limits

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};
use crate::render::resources::materials::{BlendMode, CullMode, LightingModel, TransparencyMode};

/// # Material Defaults
///
/// Initial scalar and render-state values for newly created materials.
/// The built-in values give a material that renders immediately, before any
/// channel is authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDefaults {
    /// Specular exponent
    pub shininess: f32,
    /// Fresnel exponent
    pub fresnel_exponent: f32,
    /// Uniform transparency
    pub transparency: f32,
    /// How transparency is derived
    pub transparency_mode: TransparencyMode,
    /// Shading equation
    pub lighting_model: LightingModel,
    /// Per-pixel lighting
    pub lit_per_pixel: bool,
    /// Face culling
    pub cull_mode: CullMode,
    /// Blend equation
    pub blend_mode: BlendMode,
    /// Depth writes
    pub writes_to_depth_buffer: bool,
    /// Depth testing
    pub reads_from_depth_buffer: bool,
}

impl Default for MaterialDefaults {
    fn default() -> Self {
        Self {
            shininess: 2.0,
            fresnel_exponent: 1.0,
            transparency: 1.0,
            transparency_mode: TransparencyMode::RgbZero,
            lighting_model: LightingModel::Constant,
            lit_per_pixel: true,
            cull_mode: CullMode::Back,
            blend_mode: BlendMode::Alpha,
            writes_to_depth_buffer: true,
            reads_from_depth_buffer: true,
        }
    }
}

/// # Material System Configuration
///
/// Top-level configuration for applications using this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSystemConfig {
    /// Default log filter, e.g. `"info"` or `"surface_material=debug"`
    pub log_level: String,
    /// Maximum number of materials a library holds
    pub max_materials: usize,
    /// Directory that relative material and texture paths are resolved against
    pub materials_dir: String,
    /// Initial values for new materials
    pub defaults: MaterialDefaults,
}

impl MaterialSystemConfig {
    /// Create a configuration with built-in defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            max_materials: 4096,
            materials_dir: "resources/materials".to_string(),
            defaults: MaterialDefaults::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the library capacity
    pub fn with_max_materials(mut self, max_materials: usize) -> Self {
        self.max_materials = max_materials;
        self
    }

    /// Set the material directory
    pub fn with_materials_dir(mut self, dir: impl Into<String>) -> Self {
        self.materials_dir = dir.into();
        self
    }

    /// Set the material defaults
    pub fn with_defaults(mut self, defaults: MaterialDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Validate the configuration
    ///
    /// Material defaults are not range-checked; out-of-convention values
    /// are legal material state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_materials == 0 {
            return Err(ConfigError::Invalid("max_materials must be at least 1".to_string()));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Initialize logging with this configuration's log level
    pub fn init_logging(&self) {
        crate::foundation::logging::init_with_level(&self.log_level);
    }
}

impl Default for MaterialSystemConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for MaterialDefaults {}
impl Config for MaterialSystemConfig {}
