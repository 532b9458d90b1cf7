use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Vec3;
use meshview_common::SystemId;
use meshview_ecs::{Action, Host, RenderSystem};
use meshview_render::{DebugTextRenderer, PerspectiveCamera, RendererHandle, Scene};
use meshview_static_mesh::{STATIC_MESH_SYSTEM, StaticMeshRenderer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meshview-cli", about = "CLI tool for the static mesh render system")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and system info
    Info,
    /// Check every descriptor in a JSON file
    Validate {
        /// JSON file holding one descriptor or an array of them
        descriptors: PathBuf,
    },
    /// Spawn descriptors into a host and print debug frames
    Render {
        /// JSON file holding one descriptor or an array of them
        #[arg(short, long)]
        descriptors: Option<PathBuf>,
        /// Number of frames to draw
        #[arg(short, long, default_value = "1")]
        frames: u64,
        /// Seconds per frame passed to the drawer
        #[arg(long, default_value = "0.016")]
        delta: f32,
        /// Number of views, spaced around the origin
        #[arg(long, default_value = "1")]
        views: usize,
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
            let system = StaticMeshRenderer::new();
            println!("meshview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("system: {}", system.system_id());
            println!("common: {}", meshview_common::crate_info());
            println!("render: {}", meshview_render::crate_info());
            println!("ecs: {}", meshview_ecs::crate_info());
            println!("static-mesh: {}", meshview_static_mesh::crate_info());
            println!(
                "default color: #{:06x}",
                meshview_static_mesh::DEFAULT_COLOR
            );
        }
        Commands::Validate { descriptors } => {
            let inits = load_descriptors(&descriptors)?;
            let system = StaticMeshRenderer::new();
            let mut failures = 0;
            for (i, init) in inits.iter().enumerate() {
                match system.make_component(init) {
                    Ok(mesh) => println!(
                        "[{i}] ok: vertices={} color=#{:06x} {}",
                        mesh.geometry.vertex_count(),
                        mesh.material.color.to_hex(),
                        describe_bounds(mesh.geometry.bounding_box())
                    ),
                    Err(e) => {
                        failures += 1;
                        println!("[{i}] {e}");
                    }
                }
            }
            if failures > 0 {
                anyhow::bail!("{failures} of {} descriptors invalid", inits.len());
            }
        }
        Commands::Render {
            descriptors,
            frames,
            delta,
            views,
        } => {
            let inits = match descriptors {
                Some(path) => load_descriptors(&path)?,
                None => vec![demo_descriptor()],
            };

            let debug = Arc::new(DebugTextRenderer::new());
            let handle: RendererHandle = debug.clone();
            let mut host = Host::new(StaticMeshRenderer::new());
            host.dispatch(Action::InitRenderer { renderer: handle });
            for camera in orbit_cameras(views) {
                host.dispatch(Action::AddView {
                    scene: Scene::new(),
                    camera: Some(camera),
                });
            }
            let systems = vec![SystemId::new(STATIC_MESH_SYSTEM)];
            for (i, init) in inits.iter().enumerate() {
                host.spawn(init, systems.clone())
                    .with_context(|| format!("descriptor {i}"))?;
            }
            info!(
                entities = inits.len(),
                views = host.state().views.len(),
                "scene ready"
            );

            run_frames(&mut host, &debug, frames, delta, |frame, texts| {
                for text in texts {
                    println!("--- frame {frame} ---");
                    print!("{text}");
                }
            });
        }
    }

    Ok(())
}

/// Tick `frames` times, handing each frame's debug output to `emit`. Host
/// events are drained and logged every frame.
fn run_frames<S: RenderSystem>(
    host: &mut Host<S>,
    debug: &DebugTextRenderer,
    frames: u64,
    delta: f32,
    mut emit: impl FnMut(u64, Vec<String>),
) {
    for frame in 0..frames {
        host.tick(delta);
        for event in host.drain_events() {
            debug!(?event, "host event");
        }
        emit(frame, debug.take_frames());
    }
}

fn describe_bounds(bounds: Option<(Vec3, Vec3)>) -> String {
    match bounds {
        Some((min, max)) => format!(
            "bounds=({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2})",
            min.x, min.y, min.z, max.x, max.y, max.z
        ),
        None => "bounds=empty".to_owned(),
    }
}

/// Read descriptors from a JSON file holding one object or an array.
fn load_descriptors(path: &Path) -> anyhow::Result<Vec<Value>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// A single triangle in front of the default camera.
fn demo_descriptor() -> Value {
    serde_json::json!({
        "vertices": [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    })
}

/// `count` cameras evenly spaced on a circle of radius 5, all facing the origin.
fn orbit_cameras(count: usize) -> Vec<PerspectiveCamera> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            PerspectiveCamera::default().at(Vec3::new(angle.sin() * 5.0, 0.0, angle.cos() * 5.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_single_descriptor() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"{{ "vertices": [0, 0, 0], "color": 255 }}"#).unwrap();
        let inits = load_descriptors(tmp.path()).unwrap();
        assert_eq!(inits.len(), 1);
        assert_eq!(inits[0]["color"], 255);
    }

    #[test]
    fn load_descriptor_array() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"[{{ "vertices": [] }}, {{ "vertices": {{}} }}]"#).unwrap();
        let inits = load_descriptors(tmp.path()).unwrap();
        assert_eq!(inits.len(), 2);
        assert!(StaticMeshRenderer::new().make_component(&inits[1]).is_err());
    }

    #[test]
    fn load_rejects_bad_json() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "not json").unwrap();
        assert!(load_descriptors(tmp.path()).is_err());
    }

    #[test]
    fn demo_descriptor_is_valid() {
        let mesh = StaticMeshRenderer::new()
            .make_component(&demo_descriptor())
            .unwrap();
        assert_eq!(mesh.geometry.vertex_count(), 3);
    }

    #[test]
    fn run_frames_keeps_event_log_empty() {
        let debug = Arc::new(DebugTextRenderer::new());
        let handle: RendererHandle = debug.clone();
        let mut host = Host::new(StaticMeshRenderer::new());
        host.dispatch(Action::InitRenderer { renderer: handle });
        host.dispatch(Action::AddView {
            scene: Scene::new(),
            camera: None,
        });

        host.drain_events();
        let mut emitted = 0;
        run_frames(&mut host, &debug, 1_000, 0.016, |_, texts| {
            assert_eq!(texts.len(), 1);
            emitted += 1;
        });
        assert_eq!(emitted, 1_000);
        assert!(host.events().is_empty());
        assert_eq!(host.frame(), 1_000);
    }

    #[test]
    fn bounds_are_described() {
        let mesh = StaticMeshRenderer::new()
            .make_component(&demo_descriptor())
            .unwrap();
        assert_eq!(
            describe_bounds(mesh.geometry.bounding_box()),
            "bounds=(0.00, 0.00, 0.00)..(1.00, 1.00, 0.00)"
        );
        assert_eq!(describe_bounds(None), "bounds=empty");
    }

    #[test]
    fn orbit_cameras_face_origin() {
        let cams = orbit_cameras(4);
        assert_eq!(cams.len(), 4);
        assert_eq!(cams[0].position, Vec3::new(0.0, 0.0, 5.0));
        assert!(cams.iter().all(|c| c.target == Vec3::ZERO));
        assert!(cams.iter().all(|c| (c.position.length() - 5.0).abs() < 1e-4));
    }
}
