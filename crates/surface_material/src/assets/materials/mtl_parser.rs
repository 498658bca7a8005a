//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl files into structured data for material creation.
//! Supports the Phong color and scalar statements and the common texture
//! maps, including the `-o`, `-s`, `-clamp`, `-bm` and `-type` map options.

use crate::assets::AssetError;
use crate::foundation::math::{Vec2, Vec3};

/// A texture map statement with its options
#[derive(Debug, Clone, PartialEq)]
pub struct MtlTextureMap {
    /// Texture file path as written in the file
    pub path: String,
    /// Texture-coordinate offset (`-o u v`)
    pub offset: Vec2,
    /// Texture-coordinate scale (`-s u v`)
    pub scale: Vec2,
    /// Clamp instead of repeat (`-clamp on`)
    pub clamp: bool,
    /// Bump multiplier (`-bm f`)
    pub bump_multiplier: Option<f32>,
    /// Map type, e.g. `sphere` or `cube_top` (`-type t`)
    pub map_type: Option<String>,
}

impl MtlTextureMap {
    /// Create a map with default options
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            offset: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            clamp: false,
            bump_multiplier: None,
            map_type: None,
        }
    }

    /// Whether `-type` names a cube face
    pub fn is_cube(&self) -> bool {
        self.map_type.as_deref().is_some_and(|t| t.starts_with("cube"))
    }
}

/// Parsed MTL material data (Wavefront Phong model)
///
/// Statements missing from the file stay `None` so the loader can leave the
/// matching channel empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MtlData {
    /// Material name
    pub name: String,
    /// Ambient color (Ka)
    pub ambient: Option<Vec3>,
    /// Diffuse color (Kd)
    pub diffuse: Option<Vec3>,
    /// Specular color (Ks)
    pub specular: Option<Vec3>,
    /// Emission color (Ke)
    pub emission: Option<Vec3>,
    /// Specular exponent (Ns)
    pub specular_exponent: Option<f32>,
    /// Index of refraction (Ni)
    pub optical_density: Option<f32>,
    /// Dissolve/opacity (d, or 1 - Tr) - 0.0 = transparent, 1.0 = opaque
    pub dissolve: Option<f32>,
    /// Illumination model (illum) - 0-10
    pub illumination_model: Option<u32>,
    /// Diffuse texture map (map_Kd)
    pub diffuse_map: Option<MtlTextureMap>,
    /// Ambient texture map (map_Ka)
    pub ambient_map: Option<MtlTextureMap>,
    /// Specular texture map (map_Ks)
    pub specular_map: Option<MtlTextureMap>,
    /// Emission texture map (map_Ke)
    pub emission_map: Option<MtlTextureMap>,
    /// Dissolve texture map (map_d)
    pub dissolve_map: Option<MtlTextureMap>,
    /// Bump/normal map (map_Bump, bump or norm)
    pub normal_map: Option<MtlTextureMap>,
    /// Reflection map (refl)
    pub reflection_map: Option<MtlTextureMap>,
    /// Ambient occlusion map (map_ao)
    pub ambient_occlusion_map: Option<MtlTextureMap>,
}

/// MTL file parser
pub struct MtlParser;

impl MtlParser {
    /// Parse MTL file contents into materials, in file order
    ///
    /// Unknown statements are ignored. Statements before the first
    /// `newmtl` are ignored.
    pub fn parse(contents: &str) -> Result<Vec<MtlData>, AssetError> {
        let mut materials = Vec::new();
        let mut current: Option<MtlData> = None;

        for (line_index, line) in contents.lines().enumerate() {
            let line_num = line_index + 1;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };

            if command == "newmtl" {
                if let Some(material) = current.take() {
                    materials.push(material);
                }
                let name: Vec<&str> = tokens.collect();
                if name.is_empty() {
                    return Err(parse_error(line_num, "newmtl missing material name"));
                }
                current = Some(MtlData {
                    name: name.join(" "),
                    ..MtlData::default()
                });
                continue;
            }

            let Some(material) = current.as_mut() else {
                log::trace!("Line {}: '{}' outside of any material, ignored", line_num, command);
                continue;
            };

            match command {
                "Ka" => material.ambient = Some(Self::parse_vec3(&mut tokens, line_num, command)?),
                "Kd" => material.diffuse = Some(Self::parse_vec3(&mut tokens, line_num, command)?),
                "Ks" => material.specular = Some(Self::parse_vec3(&mut tokens, line_num, command)?),
                "Ke" => material.emission = Some(Self::parse_vec3(&mut tokens, line_num, command)?),
                "Ns" => {
                    material.specular_exponent = Some(Self::parse_f32(&mut tokens, line_num, command)?);
                }
                "Ni" => {
                    material.optical_density = Some(Self::parse_f32(&mut tokens, line_num, command)?);
                }
                "d" => material.dissolve = Some(Self::parse_f32(&mut tokens, line_num, command)?),
                // Transparency (inverted dissolve): Tr = 1.0 - d
                "Tr" => {
                    material.dissolve = Some(1.0 - Self::parse_f32(&mut tokens, line_num, command)?);
                }
                "illum" => {
                    material.illumination_model = Some(Self::parse_u32(&mut tokens, line_num, command)?);
                }
                "map_Kd" => material.diffuse_map = Some(Self::parse_map(tokens, line_num, command)?),
                "map_Ka" => material.ambient_map = Some(Self::parse_map(tokens, line_num, command)?),
                "map_Ks" => material.specular_map = Some(Self::parse_map(tokens, line_num, command)?),
                "map_Ke" => material.emission_map = Some(Self::parse_map(tokens, line_num, command)?),
                "map_d" => material.dissolve_map = Some(Self::parse_map(tokens, line_num, command)?),
                "map_Bump" | "map_bump" | "bump" | "norm" => {
                    material.normal_map = Some(Self::parse_map(tokens, line_num, command)?);
                }
                "refl" | "map_refl" => {
                    material.reflection_map = Some(Self::parse_map(tokens, line_num, command)?);
                }
                "map_ao" => {
                    material.ambient_occlusion_map = Some(Self::parse_map(tokens, line_num, command)?);
                }
                _ => log::trace!("Line {}: unsupported statement '{}' ignored", line_num, command),
            }
        }

        // Save final material
        if let Some(material) = current {
            materials.push(material);
        }

        Ok(materials)
    }

    /// Parse a Vec3 color from RGB tokens. A single value is used for all
    /// three components, as the format allows.
    fn parse_vec3<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> Result<Vec3, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let r = Self::parse_f32(tokens, line_num, command)?;
        let mut rest = tokens.peekable();
        if rest.peek().is_none() {
            return Ok(Vec3::new(r, r, r));
        }
        let g = Self::parse_f32(&mut rest, line_num, command)?;
        let b = Self::parse_f32(&mut rest, line_num, command)?;
        Ok(Vec3::new(r, g, b))
    }

    /// Parse a single f32 value
    fn parse_f32<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> Result<f32, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(line_num, format!("{command} missing value")))?;
        token
            .parse::<f32>()
            .map_err(|_| parse_error(line_num, format!("{command} invalid float value '{token}'")))
    }

    /// Parse a single u32 value
    fn parse_u32<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> Result<u32, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(line_num, format!("{command} missing value")))?;
        token
            .parse::<u32>()
            .map_err(|_| parse_error(line_num, format!("{command} invalid integer value '{token}'")))
    }

    /// Parse map options followed by the texture path (which may contain spaces)
    ///
    /// The last token is always kept for the path, so a numeric file name
    /// after `-s u v` is not read as an option value.
    fn parse_map<'a, I>(tokens: I, line_num: usize, command: &str) -> Result<MtlTextureMap, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let tokens: Vec<&str> = tokens.collect();
        let mut map = MtlTextureMap::new(String::new());
        let mut pos = 0;

        while pos < tokens.len() && tokens[pos].starts_with('-') {
            let option = tokens[pos];
            pos += 1;
            match option {
                "-o" => map.offset = Self::parse_uv(&tokens, &mut pos, line_num, option)?,
                "-s" => map.scale = Self::parse_uv(&tokens, &mut pos, line_num, option)?,
                "-t" => {
                    Self::parse_uv(&tokens, &mut pos, line_num, option)?;
                }
                "-clamp" => map.clamp = Self::option_value(&tokens, &mut pos, line_num, option)? == "on",
                "-bm" => {
                    let value = Self::option_value(&tokens, &mut pos, line_num, option)?;
                    map.bump_multiplier = Some(parse_option_f32(value, line_num, option)?);
                }
                "-type" => {
                    map.map_type = Some(Self::option_value(&tokens, &mut pos, line_num, option)?.to_owned());
                }
                "-mm" => {
                    for _ in 0..2 {
                        let value = Self::option_value(&tokens, &mut pos, line_num, option)?;
                        parse_option_f32(value, line_num, option)?;
                    }
                }
                "-blendu" | "-blendv" | "-cc" | "-boost" | "-texres" | "-imfchan" => {
                    Self::option_value(&tokens, &mut pos, line_num, option)?;
                }
                _ => {
                    return Err(parse_error(line_num, format!("{command} unknown option '{option}'")));
                }
            }
        }

        // Remaining tokens form the path (texture paths can have spaces)
        let path = &tokens[pos..];
        if path.is_empty() {
            return Err(parse_error(line_num, format!("{command} missing texture path")));
        }
        map.path = path.join(" ");
        Ok(map)
    }

    /// Next option value, never consuming the final (path) token
    fn option_value<'a>(
        tokens: &[&'a str],
        pos: &mut usize,
        line_num: usize,
        option: &str,
    ) -> Result<&'a str, AssetError> {
        if *pos + 1 >= tokens.len() {
            return Err(parse_error(line_num, format!("{option} missing value")));
        }
        let value = tokens[*pos];
        *pos += 1;
        Ok(value)
    }

    /// Parse `u [v [w]]`; v defaults to u, w is read and dropped
    fn parse_uv(tokens: &[&str], pos: &mut usize, line_num: usize, option: &str) -> Result<Vec2, AssetError> {
        let u = parse_option_f32(Self::option_value(tokens, pos, line_num, option)?, line_num, option)?;
        let mut v = u;
        for component in 1..3 {
            let numeric = *pos + 1 < tokens.len() && tokens[*pos].parse::<f32>().is_ok();
            if !numeric {
                break;
            }
            let value = parse_option_f32(tokens[*pos], line_num, option)?;
            *pos += 1;
            if component == 1 {
                v = value;
            }
        }
        Ok(Vec2::new(u, v))
    }
}

fn parse_option_f32(token: &str, line_num: usize, option: &str) -> Result<f32, AssetError> {
    token
        .parse::<f32>()
        .map_err(|_| parse_error(line_num, format!("{option} invalid float value '{token}'")))
}

fn parse_error(line: usize, message: impl Into<String>) -> AssetError {
    AssetError::Parse {
        line,
        message: message.into(),
    }
}
