use foundation::generation::{Generation, GenerationCounter};
use foundation::math::Vec3;
use foundation::time::{TickClock, Time};
use scene::camera::Camera;
use scene::instance::ModelInstance;
use scene::model::LoadEvent;
use scene::pool::{PoolError, ResourcePool, SurfaceHandle};
use scene::rig::LightRig;

use crate::config::{
    ViewerConfig, AMBIENT_INTENSITY, DIRECTIONAL_DIRECTION, DIRECTIONAL_INTENSITY, FAR_PLANE,
    FOV_Y_RAD, INITIAL_CAMERA_Z, INITIAL_SPOT_POSITION, LOAD_ERROR_MESSAGE, NEAR_PLANE,
    SPOT_PARAMS, SPOT_STANDOFF,
};
use crate::controller::OrbitController;
use crate::framing;
use crate::mixer::AnimationMixer;
use crate::render::{RenderCommand, RenderFrame};

/// Load state of the current mount cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading { progress: u8 },
    Ready,
    Failed { message: String },
}

impl LoadPhase {
    pub fn progress(&self) -> Option<u8> {
        match self {
            LoadPhase::Loading { progress } => Some(*progress),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }
}

impl Default for LoadPhase {
    fn default() -> Self {
        LoadPhase::Idle
    }
}

/// Everything one mount cycle owns. Dropped only through `Viewer::unmount`,
/// which releases each resource back to the pool.
#[derive(Debug)]
struct MountedScene {
    config: ViewerConfig,
    camera: Camera,
    rig: LightRig,
    surface: SurfaceHandle,
    controller: OrbitController,
    clock: TickClock,
    model: Option<ModelInstance>,
    mixer: Option<AnimationMixer>,
}

/// Owns the full lifecycle of one showcase viewer: scene construction on
/// mount, generation-guarded load delivery, per-frame ticking, synchronous
/// resize, and complete teardown.
///
/// Invariants:
/// - at most one mounted scene (and therefore one render loop) at a time;
/// - teardown of the previous cycle strictly precedes acquisition of the
///   next, so reconfiguration can never accumulate resources;
/// - load events from a superseded generation are discarded unseen.
#[derive(Debug, Default)]
pub struct Viewer {
    generations: GenerationCounter,
    current: Option<Generation>,
    phase: LoadPhase,
    mounted: Option<MountedScene>,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn generation(&self) -> Option<Generation> {
        self.current
    }

    pub fn config(&self) -> Option<&ViewerConfig> {
        self.mounted.as_ref().map(|m| &m.config)
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.mounted.as_ref().map(|m| &m.camera)
    }

    /// Builds a new scene for `config` and begins a load cycle.
    ///
    /// Any previous cycle is fully torn down first; the returned generation
    /// must accompany every load event delivered for this cycle.
    pub fn mount(
        &mut self,
        pool: &mut ResourcePool,
        config: ViewerConfig,
    ) -> Result<Generation, PoolError> {
        self.unmount(pool)?;

        let generation = self.generations.advance();
        let camera = Camera::look_at(
            Vec3::new(0.0, 0.0, INITIAL_CAMERA_Z),
            Vec3::ZERO,
            FOV_Y_RAD,
            NEAR_PLANE,
            FAR_PLANE,
            config.container.aspect(),
        );
        let rig = LightRig::build(
            pool,
            AMBIENT_INTENSITY,
            DIRECTIONAL_INTENSITY,
            DIRECTIONAL_DIRECTION,
            SPOT_PARAMS,
            INITIAL_SPOT_POSITION,
        );
        let surface = pool.create_surface(format!("surface for {}", config.model_path));
        let controller = OrbitController::new(config.auto_rotate);

        self.mounted = Some(MountedScene {
            config,
            camera,
            rig,
            surface,
            controller,
            clock: TickClock::new(),
            model: None,
            mixer: None,
        });
        self.current = Some(generation);
        self.phase = LoadPhase::Loading { progress: 0 };
        Ok(generation)
    }

    /// Alias for the reconfiguration path: every config change is a full
    /// teardown plus rebuild, never an incremental update.
    pub fn reconfigure(
        &mut self,
        pool: &mut ResourcePool,
        config: ViewerConfig,
    ) -> Result<Generation, PoolError> {
        self.mount(pool, config)
    }

    /// Applies one load delivery for the given mount generation.
    ///
    /// Returns `false` when the event was discarded: it belonged to a
    /// superseded cycle, or the current cycle already finished loading.
    pub fn apply_load_event(
        &mut self,
        pool: &mut ResourcePool,
        generation: Generation,
        event: LoadEvent,
    ) -> bool {
        if self.current != Some(generation) {
            return false;
        }
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        let current_progress = match &self.phase {
            LoadPhase::Loading { progress } => *progress,
            // A load already concluded; the failure state is terminal for
            // this cycle and success never regresses.
            _ => return false,
        };

        match event {
            LoadEvent::Progress {
                bytes_loaded,
                bytes_total,
            } => {
                let pct = if bytes_total == 0 {
                    0
                } else {
                    let ratio = bytes_loaded as f64 / bytes_total as f64;
                    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
                };
                // Monotone within a cycle even if deliveries arrive oddly.
                self.phase = LoadPhase::Loading {
                    progress: current_progress.max(pct),
                };
            }
            LoadEvent::Loaded(data) => {
                let mut instance = ModelInstance::instantiate(pool, &data);
                instance.position = framing::recenter_position(&data.bounds);
                instance.rotation = mounted.config.initial_rotation;

                let distance = framing::camera_distance(data.bounds.max_dimension(), FOV_Y_RAD)
                    * framing::distance_multiplier(mounted.config.viewport_width_hint);
                mounted.camera.position = Vec3::new(0.0, 0.0, distance);

                mounted
                    .rig
                    .aim_at(framing::spotlight_target(instance.position, &data.bounds));

                mounted.mixer = data.animations.first().map(AnimationMixer::new);
                mounted.model = Some(instance);
                self.phase = LoadPhase::Ready;
            }
            LoadEvent::Failed(_) => {
                self.phase = LoadPhase::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                };
            }
        }
        true
    }

    /// One animation frame: advances the controller and animation clip by
    /// the elapsed wall-clock delta, repositions the spotlight over the
    /// camera's shoulder, and emits the frame's draw state.
    ///
    /// Returns `None` when nothing is mounted; ticking stops on unmount.
    pub fn tick(&mut self, now: Time) -> Option<RenderFrame> {
        let mounted = self.mounted.as_mut()?;
        let dt = mounted.clock.delta(now);

        mounted.controller.update(dt);
        let distance = (mounted.camera.position - mounted.camera.target).length();
        mounted.camera.position = mounted
            .controller
            .orbit_position(mounted.camera.target, distance);
        mounted
            .rig
            .follow_camera(mounted.camera.position, SPOT_STANDOFF);

        if let Some(mixer) = mounted.mixer.as_mut() {
            mixer.advance(dt);
        }

        let mut commands = vec![RenderCommand::Clear {
            background: mounted.config.background,
        }];
        if let Some(model) = mounted.model.as_ref() {
            for mesh in &model.meshes {
                commands.push(RenderCommand::DrawMesh {
                    geometry: mesh.geometry,
                    position: model.position,
                    rotation: model.rotation,
                });
            }
        }

        Some(RenderFrame {
            commands,
            camera: mounted.camera,
            spot_position: mounted.rig.spot_position,
        })
    }

    /// Synchronous viewport update: camera aspect and surface size only.
    /// The model, rotation, and load state are untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.config.container = crate::config::SurfaceSize::new(width, height);
            mounted.camera.set_aspect(width, height);
        }
    }

    /// Tears down the current cycle: stops ticking, drops the controller,
    /// releases the model subtree (geometries, then each material's
    /// textures, then the material), removes the lights and the spotlight
    /// target, and releases the render surface.
    pub fn unmount(&mut self, pool: &mut ResourcePool) -> Result<(), PoolError> {
        if let Some(mounted) = self.mounted.take() {
            drop(mounted.controller);
            if let Some(model) = mounted.model {
                model.dispose(pool)?;
            }
            mounted.rig.dispose(pool)?;
            pool.dispose_surface(mounted.surface)?;
        }
        self.current = None;
        self.phase = LoadPhase::Idle;
        Ok(())
    }
}
