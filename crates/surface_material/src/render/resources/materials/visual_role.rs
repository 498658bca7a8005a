//! Fixed shading roles of a material's visual channels

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Role of one of the ten visual channels every material carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VisualRole {
    /// Base surface color under diffuse lighting
    Diffuse,
    /// Response to ambient light
    Ambient,
    /// Color of specular highlights
    Specular,
    /// Surface normal perturbation (normal map)
    Normal,
    /// Environment reflection
    Reflective,
    /// Light emitted by the surface, unaffected by lighting
    Emission,
    /// Per-fragment transparency input
    Transparent,
    /// Color multiplied into the final result
    Multiply,
    /// Ambient occlusion
    AmbientOcclusion,
    /// Replaces ambient lighting with a self-illumination term
    SelfIllumination,
}

impl VisualRole {
    /// Number of roles
    pub const COUNT: usize = 10;

    /// Every role, in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Diffuse,
        Self::Ambient,
        Self::Specular,
        Self::Normal,
        Self::Reflective,
        Self::Emission,
        Self::Transparent,
        Self::Multiply,
        Self::AmbientOcclusion,
        Self::SelfIllumination,
    ];

    /// Position of this role in [`VisualRole::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, matching the material's field names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diffuse => "diffuse",
            Self::Ambient => "ambient",
            Self::Specular => "specular",
            Self::Normal => "normal",
            Self::Reflective => "reflective",
            Self::Emission => "emission",
            Self::Transparent => "transparent",
            Self::Multiply => "multiply",
            Self::AmbientOcclusion => "ambient_occlusion",
            Self::SelfIllumination => "self_illumination",
        }
    }

    /// Look a role up by its snake_case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// The single-bit mask for this role
    pub const fn mask(self) -> VisualMask {
        VisualMask::from_bits_truncate(1 << self.index())
    }
}

impl fmt::Display for VisualRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of visual roles, one bit per role in declaration order
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct VisualMask: u16 {
        /// Diffuse channel
        const DIFFUSE = 1 << 0;
        /// Ambient channel
        const AMBIENT = 1 << 1;
        /// Specular channel
        const SPECULAR = 1 << 2;
        /// Normal channel
        const NORMAL = 1 << 3;
        /// Reflective channel
        const REFLECTIVE = 1 << 4;
        /// Emission channel
        const EMISSION = 1 << 5;
        /// Transparent channel
        const TRANSPARENT = 1 << 6;
        /// Multiply channel
        const MULTIPLY = 1 << 7;
        /// Ambient occlusion channel
        const AMBIENT_OCCLUSION = 1 << 8;
        /// Self-illumination channel
        const SELF_ILLUMINATION = 1 << 9;
    }
}

impl VisualMask {
    /// Whether `role` is in the set
    pub const fn has(self, role: VisualRole) -> bool {
        self.contains(role.mask())
    }

    /// Roles in the set, in declaration order
    pub fn roles(self) -> impl Iterator<Item = VisualRole> {
        VisualRole::ALL.into_iter().filter(move |role| self.has(*role))
    }
}

impl FromIterator<VisualRole> for VisualMask {
    fn from_iter<I: IntoIterator<Item = VisualRole>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |mask, role| mask | role.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_indexed_in_order() {
        for (i, role) in VisualRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in VisualRole::ALL {
            assert_eq!(VisualRole::from_name(role.as_str()), Some(role));
        }
        assert_eq!(VisualRole::from_name("albedo"), None);
    }

    #[test]
    fn test_masks_match_named_flags() {
        assert_eq!(VisualRole::Diffuse.mask(), VisualMask::DIFFUSE);
        assert_eq!(VisualRole::Normal.mask(), VisualMask::NORMAL);
        assert_eq!(VisualRole::SelfIllumination.mask(), VisualMask::SELF_ILLUMINATION);
        assert_eq!(VisualMask::all().bits().count_ones() as usize, VisualRole::COUNT);
    }

    #[test]
    fn test_mask_collects_roles() {
        let mask: VisualMask = [VisualRole::Emission, VisualRole::Diffuse].into_iter().collect();
        assert!(mask.has(VisualRole::Diffuse));
        assert!(mask.has(VisualRole::Emission));
        assert!(!mask.has(VisualRole::Ambient));
        assert_eq!(
            mask.roles().collect::<Vec<_>>(),
            vec![VisualRole::Diffuse, VisualRole::Emission]
        );
    }
}
