use foundation::bounds::Aabb3;
use foundation::math::Vec3;
use scene::model::{AnimationClipData, MaterialData, MeshData, ModelData, TextureSlots};
use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: &str = "1.0";

/// On-disk model description. This is the interchange format the showcase
/// assets are packaged in; one manifest stands for one displayable model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelManifest {
    pub version: String,
    pub name: String,
    pub bounds_min: [f64; 3],
    pub bounds_max: [f64; 3],
    pub meshes: Vec<MeshEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<AnimationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshEntry {
    pub vertex_count: u32,
    #[serde(default)]
    pub materials: Vec<MaterialEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MaterialEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bump: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationEntry {
    pub name: String,
    pub duration_s: f64,
}

#[derive(Debug)]
pub enum ManifestError {
    Json(serde_json::Error),
    UnsupportedVersion(String),
    InvalidBounds,
    InvalidClipDuration { name: String, duration_s: f64 },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Json(e) => write!(f, "manifest parse error: {e}"),
            ManifestError::UnsupportedVersion(v) => {
                write!(f, "unsupported manifest version {v:?}")
            }
            ManifestError::InvalidBounds => write!(f, "bounds_min exceeds bounds_max"),
            ManifestError::InvalidClipDuration { name, duration_s } => {
                write!(f, "animation {name:?} has invalid duration {duration_s}")
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl ModelManifest {
    pub fn from_json_str(payload: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(payload).map_err(ManifestError::Json)
    }

    pub fn to_model_data(&self) -> Result<ModelData, ManifestError> {
        if self.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion(self.version.clone()));
        }

        let min = Vec3::new(self.bounds_min[0], self.bounds_min[1], self.bounds_min[2]);
        let max = Vec3::new(self.bounds_max[0], self.bounds_max[1], self.bounds_max[2]);
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(ManifestError::InvalidBounds);
        }

        for clip in &self.animations {
            if !clip.duration_s.is_finite() || clip.duration_s <= 0.0 {
                return Err(ManifestError::InvalidClipDuration {
                    name: clip.name.clone(),
                    duration_s: clip.duration_s,
                });
            }
        }

        Ok(ModelData {
            name: self.name.clone(),
            bounds: Aabb3::new(min, max),
            meshes: self
                .meshes
                .iter()
                .map(|m| MeshData {
                    vertex_count: m.vertex_count,
                    materials: m
                        .materials
                        .iter()
                        .map(|mat| MaterialData {
                            textures: TextureSlots {
                                base_color: mat.base_color.clone(),
                                light: mat.light.clone(),
                                bump: mat.bump.clone(),
                                normal: mat.normal.clone(),
                                specular: mat.specular.clone(),
                                environment: mat.environment.clone(),
                            },
                        })
                        .collect(),
                })
                .collect(),
            animations: self
                .animations
                .iter()
                .map(|a| AnimationClipData {
                    name: a.name.clone(),
                    duration_s: a.duration_s,
                })
                .collect(),
        })
    }
}
