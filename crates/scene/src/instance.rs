use foundation::bounds::Aabb3;
use foundation::math::{Euler, Vec3};

use crate::model::{AnimationClipData, ModelData, TextureSlots};
use crate::pool::{GeometryHandle, MaterialHandle, PoolError, ResourcePool, TextureHandle};

#[derive(Debug, Clone)]
pub struct MaterialInstance {
    pub handle: MaterialHandle,
    pub textures: TextureSlots<TextureHandle>,
}

#[derive(Debug, Clone)]
pub struct MeshInstance {
    pub geometry: GeometryHandle,
    pub materials: Vec<MaterialInstance>,
}

/// An uploaded model subtree. Owns every geometry, material, and texture it
/// acquired; `dispose` must release all of them before the owner drops it.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    pub meshes: Vec<MeshInstance>,
    pub position: Vec3,
    pub rotation: Euler,
    pub bounds: Aabb3,
    pub animations: Vec<AnimationClipData>,
}

impl ModelInstance {
    pub fn instantiate(pool: &mut ResourcePool, data: &ModelData) -> Self {
        let mut meshes = Vec::with_capacity(data.meshes.len());
        for (mesh_idx, mesh) in data.meshes.iter().enumerate() {
            let geometry = pool.create_geometry(format!("{}/mesh{mesh_idx}", data.name));
            let mut materials = Vec::with_capacity(mesh.materials.len());
            for (mat_idx, mat) in mesh.materials.iter().enumerate() {
                let handle =
                    pool.create_material(format!("{}/mesh{mesh_idx}/mat{mat_idx}", data.name));
                let mut upload = |slot: &str, path: &Option<String>| {
                    path.as_ref()
                        .map(|p| pool.create_texture(format!("{p} ({slot})")))
                };
                let textures = TextureSlots {
                    base_color: upload("base_color", &mat.textures.base_color),
                    light: upload("light", &mat.textures.light),
                    bump: upload("bump", &mat.textures.bump),
                    normal: upload("normal", &mat.textures.normal),
                    specular: upload("specular", &mat.textures.specular),
                    environment: upload("environment", &mat.textures.environment),
                };
                materials.push(MaterialInstance { handle, textures });
            }
            meshes.push(MeshInstance { geometry, materials });
        }

        Self {
            meshes,
            position: Vec3::ZERO,
            rotation: Euler::ZERO,
            bounds: data.bounds,
            animations: data.animations.clone(),
        }
    }

    /// Releases the whole subtree: each mesh's geometry buffer, then every
    /// texture slot a material holds, then the material itself.
    pub fn dispose(self, pool: &mut ResourcePool) -> Result<(), PoolError> {
        for mesh in self.meshes {
            pool.dispose_geometry(mesh.geometry)?;
            for material in mesh.materials {
                let slots = material.textures;
                for tex in [
                    slots.base_color,
                    slots.light,
                    slots.bump,
                    slots.normal,
                    slots.specular,
                    slots.environment,
                ]
                .into_iter()
                .flatten()
                {
                    pool.dispose_texture(tex)?;
                }
                pool.dispose_material(material.handle)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ModelInstance;
    use crate::model::{MaterialData, MeshData, ModelData, TextureSlots};
    use crate::pool::ResourcePool;
    use foundation::bounds::Aabb3;
    use foundation::math::Vec3;

    fn two_mesh_model() -> ModelData {
        ModelData {
            name: "test".into(),
            bounds: Aabb3::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)),
            meshes: vec![
                MeshData {
                    vertex_count: 24,
                    materials: vec![MaterialData {
                        textures: TextureSlots {
                            base_color: Some("a.png".into()),
                            normal: Some("n.png".into()),
                            ..TextureSlots::empty()
                        },
                    }],
                },
                MeshData {
                    vertex_count: 12,
                    materials: vec![
                        MaterialData {
                            textures: TextureSlots::empty(),
                        },
                        MaterialData {
                            textures: TextureSlots {
                                environment: Some("env.png".into()),
                                ..TextureSlots::empty()
                            },
                        },
                    ],
                },
            ],
            animations: Vec::new(),
        }
    }

    #[test]
    fn instantiate_acquires_every_resource() {
        let mut pool = ResourcePool::new();
        let instance = ModelInstance::instantiate(&mut pool, &two_mesh_model());

        let counts = pool.live_counts();
        assert_eq!(counts.geometries, 2);
        assert_eq!(counts.materials, 3);
        assert_eq!(counts.textures, 3);
        assert_eq!(instance.meshes.len(), 2);
    }

    #[test]
    fn dispose_releases_every_resource() {
        let mut pool = ResourcePool::new();
        let instance = ModelInstance::instantiate(&mut pool, &two_mesh_model());
        instance.dispose(&mut pool).expect("dispose");
        assert!(pool.live_counts().is_empty());
    }
}
