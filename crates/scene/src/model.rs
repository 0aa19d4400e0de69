use foundation::bounds::Aabb3;

/// The texture slots a material can hold. Generic so the same shape carries
/// source paths before upload and live handles after.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextureSlots<T> {
    pub base_color: Option<T>,
    pub light: Option<T>,
    pub bump: Option<T>,
    pub normal: Option<T>,
    pub specular: Option<T>,
    pub environment: Option<T>,
}

impl<T> TextureSlots<T> {
    pub fn empty() -> Self {
        Self {
            base_color: None,
            light: None,
            bump: None,
            normal: None,
            specular: None,
            environment: None,
        }
    }

    /// Slots in a fixed order, paired with their names.
    pub fn iter_named(&self) -> impl Iterator<Item = (&'static str, &T)> {
        [
            ("base_color", &self.base_color),
            ("light", &self.light),
            ("bump", &self.bump),
            ("normal", &self.normal),
            ("specular", &self.specular),
            ("environment", &self.environment),
        ]
        .into_iter()
        .filter_map(|(name, slot)| slot.as_ref().map(|t| (name, t)))
    }

    pub fn len(&self) -> usize {
        self.iter_named().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialData {
    pub textures: TextureSlots<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertex_count: u32,
    pub materials: Vec<MaterialData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClipData {
    pub name: String,
    pub duration_s: f64,
}

/// A parsed model, ready to be instantiated into a `ResourcePool`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData {
    pub name: String,
    pub bounds: Aabb3,
    pub meshes: Vec<MeshData>,
    pub animations: Vec<AnimationClipData>,
}

/// Delivery of an asynchronous model fetch. A source emits zero or more
/// `Progress` events followed by exactly one `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Progress { bytes_loaded: u64, bytes_total: u64 },
    Loaded(ModelData),
    Failed(String),
}
