//! # Core Engine Module
//!
//! Shared configuration types that hosts load at startup.
//!
//! ## Organization
//!
//! - **Config**: Viewer configuration (logging, startup scene, fallback camera)

pub mod config;

// Re-export commonly used config types
pub use crate::config::{Config, ConfigError, ConfigFormat};
pub use config::{CameraConfig, EngineConfig, ModelConfig, SceneConfig, ViewerConfig};
