use anyhow::Context;
use clap::{Parser, Subcommand};
use gameloop_camera::{Bounds, Camera, CameraConfig, CameraInput, CameraState};
use gameloop_objects::{GameObject, ObjectManager};
use gameloop_render::{DebugTextRenderer, Renderer};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Half-extent of the bounded camera's clamp rectangle.
const BOUNDS_EXTENT: f32 = 100.0;
const SHAKE_INTENSITY: f32 = 5.0;
const SHAKE_DURATION: f32 = 0.5;

#[derive(Parser)]
#[command(name = "gameloop-cli", about = "Game loop demos: object updates and a follow camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Update and render a player and an enemy each frame
    Objects {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Deactivate the named object before the first frame
        #[arg(long)]
        deactivate: Option<String>,
    },
    /// Drive the smoothed camera with one frame of input, then let it settle
    Camera {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Clamp the target to ±100 unless the config sets bounds
        #[arg(short, long)]
        bounded: bool,
        /// RNG seed for shake offsets and shake triggers
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Per-frame probability of triggering a shake while bounds are set
        #[arg(long, default_value = "0.1")]
        shake_chance: f64,
        /// JSON camera config (speed, rotation_speed, zoom_speed, smoothing, bounds)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print one JSON camera state per frame instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("gameloop-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", gameloop_common::crate_info());
            println!("objects: {}", gameloop_objects::crate_info());
            println!("camera: {}", gameloop_camera::crate_info());
            println!("render: {}", gameloop_render::crate_info());
        }
        Commands::Objects {
            frames,
            dt,
            deactivate,
        } => run_objects(frames, dt, deactivate.as_deref())?,
        Commands::Camera {
            frames,
            dt,
            bounded,
            seed,
            shake_chance,
            config,
            json,
        } => {
            anyhow::ensure!(
                (0.0..=1.0).contains(&shake_chance),
                "--shake-chance must be within [0, 1], got {shake_chance}"
            );
            let config = load_camera_config(config.as_deref(), bounded)?;
            let run = run_camera(CameraDemo {
                frames,
                dt,
                seed,
                shake_chance,
                config,
                json,
            })?;
            let p = run.state.position;
            tracing::info!(
                x = p.x,
                y = p.y,
                zoom = run.state.zoom,
                shakes = run.shakes,
                "camera demo finished"
            );
        }
    }

    Ok(())
}

fn run_objects(frames: u32, dt: f32, deactivate: Option<&str>) -> anyhow::Result<()> {
    let mut objects = ObjectManager::new();
    objects.add(GameObject::player("Hero", 0.0, 0.0));
    objects.add(GameObject::enemy("Goblin", 10.0, 0.0));

    if let Some(name) = deactivate {
        let id = objects
            .find_by_name(name)
            .map(|o| o.id())
            .with_context(|| format!("no object named {name:?}"))?;
        objects.set_active(id, false)?;
    }

    let renderer = DebugTextRenderer::new();
    for _ in 0..frames {
        objects.update_all(dt);
        for frame in renderer.render_all(&objects) {
            print!("{frame}");
        }
    }

    tracing::info!(
        ticks = objects.tick(),
        events = objects.events().len(),
        "object demo finished"
    );
    Ok(())
}

/// Read `path` if given, then add the default ±100 bounds when `bounded`
/// and the file set none.
fn load_camera_config(path: Option<&Path>, bounded: bool) -> anyhow::Result<CameraConfig> {
    let mut config = match path {
        Some(path) => CameraConfig::from_json_file(path)
            .with_context(|| format!("loading camera config {}", path.display()))?,
        None => CameraConfig::default(),
    };
    if bounded && config.bounds.is_none() {
        config.bounds = Some(Bounds::new(
            Vec2::splat(-BOUNDS_EXTENT),
            Vec2::splat(BOUNDS_EXTENT),
        )?);
    }
    Ok(config)
}

struct CameraDemo {
    frames: u32,
    dt: f32,
    seed: u64,
    shake_chance: f64,
    config: CameraConfig,
    json: bool,
}

/// Outcome of a camera demo run.
#[derive(Debug)]
struct CameraRun {
    state: CameraState,
    shakes: u32,
}

fn run_camera(demo: CameraDemo) -> anyhow::Result<CameraRun> {
    let mut camera = Camera::seeded(Vec2::ZERO, demo.config, demo.seed)?;
    // Separate stream so trigger draws don't shift the shake offsets.
    let mut triggers = Pcg32::seed_from_u64(demo.seed.wrapping_add(1));
    let renderer = DebugTextRenderer::new();

    let mut input = CameraInput::new(Vec2::X, 0.1, -0.05);
    let mut shakes = 0u32;
    for _ in 0..demo.frames {
        camera.update(demo.dt, input);
        if camera.bounds().is_some() && triggers.random_bool(demo.shake_chance) {
            camera.set_shake(SHAKE_INTENSITY, SHAKE_DURATION);
            shakes += 1;
        }

        if demo.json {
            println!("{}", serde_json::to_string(&camera.state())?);
        } else {
            print!("{}", renderer.render_camera(&camera));
        }
        input = CameraInput::default();
    }

    Ok(CameraRun {
        state: camera.state(),
        shakes,
    })
}
