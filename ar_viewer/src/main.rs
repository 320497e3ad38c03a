//! AR viewer demo host
//!
//! Drives the engine the way the Android host does, minus the camera feed:
//! places the configured models, replays their scripted slider edits, pulls
//! one frame of matrices from the fallback camera, and logs what a GL
//! renderer would draw.
//!
//! Usage: `ar_viewer [config.toml|config.ron]`

use ar_engine::foundation::logging;
use ar_engine::prelude::*;
use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
enum ViewerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("model '{model}': {source}")]
    Model {
        model: String,
        #[source]
        source: MeshError,
    },
}

struct ViewerApp {
    scene: SceneRegistry,
    camera: StaticCamera,
}

impl ViewerApp {
    fn new(config: &ViewerConfig) -> Result<Self, ViewerError> {
        log::info!("Creating AR viewer with {} model(s)...", config.scene.models.len());
        let mut scene = SceneRegistry::new();

        for model in &config.scene.models {
            let handle = scene
                .load_model(&model.kind())
                .map_err(|source| ViewerError::Model {
                    model: model.model.clone(),
                    source,
                })?;

            if let Some(mesh) = scene.get_mesh_mut(handle) {
                mesh.set_pose(model.pose);
            }
            for command in &model.commands {
                scene.apply(handle, *command);
            }
        }

        Ok(Self {
            scene,
            camera: config.camera.build_camera(),
        })
    }

    fn render_frame(&self) {
        let Some(frame) = self.camera.frame_matrices() else {
            log::warn!("No camera frame available, skipping draw");
            return;
        };

        for item in frame.draw_list(&self.scene) {
            let Some(mesh) = self.scene.get_mesh(item.handle) else {
                continue;
            };
            match mesh.packed_buffers() {
                Ok(packed) => log::info!(
                    "draw {} '{}': {} indices, {} position bytes, {} color bytes, origin -> {:?}",
                    item.handle,
                    mesh.name(),
                    item.index_count,
                    packed.positions().len(),
                    packed.colors().len(),
                    item.mvp.transform_point(&Point3::origin()),
                ),
                Err(err) => log::error!("skip {} '{}': {}", item.handle, mesh.name(), err),
            }
        }

        let stats = self.scene.statistics();
        log::info!(
            "Scene: {} meshes, {} vertices, {} triangles, {} packed bytes",
            stats.mesh_count,
            stats.total_vertices,
            stats.total_triangles,
            stats.packed_bytes
        );
    }

    fn cleanup(&mut self) {
        log::info!("Cleaning up AR viewer...");
        self.scene.clear();
    }
}

fn load_config() -> Result<ViewerConfig, ViewerError> {
    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load_from_file(&path)?,
        None => ViewerConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    let mut app = ViewerApp::new(&config)?;
    app.render_frame();
    app.cleanup();

    log::info!("AR viewer finished");
    Ok(())
}
