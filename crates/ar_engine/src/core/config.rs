//! # Viewer Configuration
//!
//! Startup settings for a host embedding the engine: log filter, the models
//! placed when the scene opens (with their initial pose and any scripted
//! edits), and the fallback camera used when no AR frame source is attached.
//!
//! ```toml
//! [engine]
//! log_level = "debug"
//!
//! [[scene.models]]
//! model = "cube"
//! pose = { scale = 0.5, translation_z = -1.0 }
//!
//! [camera]
//! position = [0.0, 0.0, 3.0]
//! fov_degrees = 60.0
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;
use crate::render::primitives::{ModelKind, Pose, StaticCamera};
use crate::scene::PoseCommand;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn camera_up() -> Vec3 {
    Vec3::y()
}

/// # Engine Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One model placed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Picker name: `cube`, `sphere`, `pyramid`, anything else gives a triangle
    pub model: String,
    /// Initial pose
    #[serde(default)]
    pub pose: Pose,
    /// Edits applied after placement, in order
    #[serde(default)]
    pub commands: Vec<PoseCommand>,
}

impl ModelConfig {
    /// Model with the identity pose
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            pose: Pose::default(),
            commands: Vec::new(),
        }
    }

    /// Builder pattern: set initial pose
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Builder pattern: append a scripted edit
    pub fn with_command(mut self, command: PoseCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Resolve the picker name
    pub fn kind(&self) -> ModelKind {
        ModelKind::from_name(&self.model)
    }
}

/// # Scene Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Models placed at startup, in handle order
    pub models: Vec<ModelConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            models: vec![ModelConfig::new("cube")],
        }
    }
}

/// # Camera Configuration
///
/// Parameters for the [`StaticCamera`] fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position
    pub position: [f32; 3],
    /// Look-at target
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Width over height
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 60.0,
            aspect: 9.0 / 16.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera aspect must be finite and positive, got {}",
                self.aspect
            )));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes need 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if !self.position.iter().chain(&self.target).all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid(
                "camera position and target must be finite".to_string(),
            ));
        }
        if self.position == self.target {
            return Err(ConfigError::Invalid("camera position equals target".to_string()));
        }
        let forward = (Vec3::from(self.target) - Vec3::from(self.position)).normalize();
        if forward.cross(&camera_up()).norm() < 1e-4 {
            return Err(ConfigError::Invalid(format!(
                "camera looks along the up axis from {:?} to {:?}",
                self.position, self.target
            )));
        }
        Ok(())
    }

    /// Build the fallback camera
    pub fn build_camera(&self) -> StaticCamera {
        let mut camera = StaticCamera::perspective(
            Vec3::from(self.position),
            self.fov_degrees,
            self.aspect,
            self.near,
            self.far,
        );
        camera.look_at(Vec3::from(self.target), camera_up());
        camera
    }
}

/// # Complete Viewer Configuration
///
/// Top-level configuration hosts load at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Startup scene
    pub scene: SceneConfig,
    /// Fallback camera
    pub camera: CameraConfig,
}

impl ViewerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.engine.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.engine.log_level
            )));
        }
        self.camera.validate()
    }
}

impl Config for ViewerConfig {}
