use std::collections::BTreeMap;

/// Categories of GPU-side resources tracked by the pool.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResourceKind {
    Geometry,
    Material,
    Texture,
    Light,
    Node,
    Surface,
}

macro_rules! handle_type {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) u64);

        impl $name {
            pub fn kind(self) -> ResourceKind {
                $kind
            }
        }
    };
}

handle_type!(GeometryHandle, ResourceKind::Geometry);
handle_type!(MaterialHandle, ResourceKind::Material);
handle_type!(TextureHandle, ResourceKind::Texture);
handle_type!(LightHandle, ResourceKind::Light);
handle_type!(NodeHandle, ResourceKind::Node);
handle_type!(SurfaceHandle, ResourceKind::Surface);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    UnknownHandle {
        kind: ResourceKind,
        id: u64,
    },
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::UnknownHandle { kind, id } => {
                write!(f, "unknown or already disposed {kind:?} handle {id}")
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// Live resource counts per category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ResourceCounts {
    pub geometries: usize,
    pub materials: usize,
    pub textures: usize,
    pub lights: usize,
    pub nodes: usize,
    pub surfaces: usize,
}

impl ResourceCounts {
    pub fn total(&self) -> usize {
        self.geometries + self.materials + self.textures + self.lights + self.nodes + self.surfaces
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Explicit ledger of acquired scene resources.
///
/// Every acquisition hands out a unique handle; disposal is by handle and a
/// second disposal of the same handle is an error. Entries are keyed in
/// `BTreeMap`s for stable traversal order, and a debug label is kept per
/// entry so leak reports can say what was left behind.
#[derive(Debug, Default)]
pub struct ResourcePool {
    next_id: u64,
    geometries: BTreeMap<u64, String>,
    materials: BTreeMap<u64, String>,
    textures: BTreeMap<u64, String>,
    lights: BTreeMap<u64, String>,
    nodes: BTreeMap<u64, String>,
    surfaces: BTreeMap<u64, String>,
}

impl ResourcePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn create_geometry(&mut self, label: impl Into<String>) -> GeometryHandle {
        let id = self.next_id();
        self.geometries.insert(id, label.into());
        GeometryHandle(id)
    }

    pub fn create_material(&mut self, label: impl Into<String>) -> MaterialHandle {
        let id = self.next_id();
        self.materials.insert(id, label.into());
        MaterialHandle(id)
    }

    pub fn create_texture(&mut self, label: impl Into<String>) -> TextureHandle {
        let id = self.next_id();
        self.textures.insert(id, label.into());
        TextureHandle(id)
    }

    pub fn create_light(&mut self, label: impl Into<String>) -> LightHandle {
        let id = self.next_id();
        self.lights.insert(id, label.into());
        LightHandle(id)
    }

    pub fn create_node(&mut self, label: impl Into<String>) -> NodeHandle {
        let id = self.next_id();
        self.nodes.insert(id, label.into());
        NodeHandle(id)
    }

    pub fn create_surface(&mut self, label: impl Into<String>) -> SurfaceHandle {
        let id = self.next_id();
        self.surfaces.insert(id, label.into());
        SurfaceHandle(id)
    }

    pub fn dispose_geometry(&mut self, handle: GeometryHandle) -> Result<(), PoolError> {
        Self::remove(&mut self.geometries, handle.0, ResourceKind::Geometry)
    }

    pub fn dispose_material(&mut self, handle: MaterialHandle) -> Result<(), PoolError> {
        Self::remove(&mut self.materials, handle.0, ResourceKind::Material)
    }

    pub fn dispose_texture(&mut self, handle: TextureHandle) -> Result<(), PoolError> {
        Self::remove(&mut self.textures, handle.0, ResourceKind::Texture)
    }

    pub fn dispose_light(&mut self, handle: LightHandle) -> Result<(), PoolError> {
        Self::remove(&mut self.lights, handle.0, ResourceKind::Light)
    }

    pub fn dispose_node(&mut self, handle: NodeHandle) -> Result<(), PoolError> {
        Self::remove(&mut self.nodes, handle.0, ResourceKind::Node)
    }

    pub fn dispose_surface(&mut self, handle: SurfaceHandle) -> Result<(), PoolError> {
        Self::remove(&mut self.surfaces, handle.0, ResourceKind::Surface)
    }

    fn remove(
        entries: &mut BTreeMap<u64, String>,
        id: u64,
        kind: ResourceKind,
    ) -> Result<(), PoolError> {
        entries
            .remove(&id)
            .map(|_| ())
            .ok_or(PoolError::UnknownHandle { kind, id })
    }

    pub fn live_counts(&self) -> ResourceCounts {
        ResourceCounts {
            geometries: self.geometries.len(),
            materials: self.materials.len(),
            textures: self.textures.len(),
            lights: self.lights.len(),
            nodes: self.nodes.len(),
            surfaces: self.surfaces.len(),
        }
    }

    /// Labels of everything still alive, for leak diagnostics.
    pub fn live_labels(&self) -> Vec<String> {
        let mut out = Vec::new();
        for entries in [
            &self.geometries,
            &self.materials,
            &self.textures,
            &self.lights,
            &self.nodes,
            &self.surfaces,
        ] {
            out.extend(entries.values().cloned());
        }
        out
    }
}
