use std::path::PathBuf;

use clap::Parser;
use foundation::math::Euler;
use foundation::time::Time;
use formats::{FileModelSource, ModelSource};
use scene::pool::ResourcePool;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use viewer::{LoadPhase, SurfaceSize, Viewer, ViewerConfig};
use votes::{default_candidates, VoteSession};

/// Walks the showcase viewer through a full lifecycle (mount, load, tick,
/// reconfigure, unmount) against a model manifest on disk, then runs a
/// quick vote-session round. Prints resource-ledger counts along the way.
#[derive(Debug, Parser)]
struct Args {
    /// Directory containing model manifests.
    #[arg(long, default_value = "crates/apps/showcase/assets")]
    asset_root: PathBuf,
    /// Site-absolute asset path to load.
    #[arg(long, default_value = "/BodyPillow.glb")]
    model: String,
    /// Frames to simulate per mount cycle.
    #[arg(long, default_value_t = 120)]
    frames: u32,
    /// Viewport width hint for the first cycle, in pixels.
    #[arg(long, default_value_t = 1280)]
    viewport_width: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let source = FileModelSource::new(&args.asset_root);
    let mut pool = ResourcePool::new();
    let mut viewer = Viewer::new();

    let config = ViewerConfig::new(&args.model, SurfaceSize::new(960, 540))
        .with_rotation(Euler::new(0.0, 0.3, 0.0))
        .with_viewport_width(args.viewport_width);

    run_cycle(&mut viewer, &mut pool, &source, config.clone(), args.frames);
    // Reconfigure onto the narrow-viewport framing; this must tear the
    // first cycle down completely before acquiring the second.
    run_cycle(
        &mut viewer,
        &mut pool,
        &source,
        config.with_viewport_width(500),
        args.frames,
    );

    if let Err(err) = viewer.unmount(&mut pool) {
        error!("teardown failed: {err}");
    }
    let counts = pool.live_counts();
    if counts.is_empty() {
        info!("teardown complete, no live resources");
    } else {
        warn!("leaked resources: {:?}", pool.live_labels());
    }

    let mut session = VoteSession::new(default_candidates());
    for (id, up) in [(1, true), (2, false), (3, true)] {
        let result = if up {
            session.vote_up(id)
        } else {
            session.vote_down(id)
        };
        if let Err(err) = result {
            error!("vote failed: {err}");
        }
    }
    info!(
        "votes cast: {} of {} (complete: {})",
        session.vote_count(),
        session.votes().len(),
        session.all_voted()
    );
}

fn run_cycle(
    viewer: &mut Viewer,
    pool: &mut ResourcePool,
    source: &FileModelSource,
    config: ViewerConfig,
    frames: u32,
) {
    let path = config.model_path.clone();
    let generation = match viewer.mount(pool, config) {
        Ok(generation) => generation,
        Err(err) => {
            error!("{path}: mount failed: {err}");
            return;
        }
    };

    for event in source.load(&path) {
        viewer.apply_load_event(pool, generation, event);
    }
    match viewer.phase() {
        LoadPhase::Ready => info!("{path}: ready"),
        LoadPhase::Failed { message } => error!("{path}: {message}"),
        LoadPhase::Loading { progress } => warn!("{path}: stalled at {progress}%"),
        LoadPhase::Idle => warn!("{path}: not mounted"),
    }

    let mut draws = 0usize;
    for i in 0..frames {
        let now = Time(f64::from(i) / 60.0);
        if let Some(frame) = viewer.tick(now) {
            draws = frame.draw_count();
        }
    }
    info!(
        "{path}: {frames} frames, {draws} draw(s)/frame, live resources: {}",
        pool.live_counts().total()
    );
}
