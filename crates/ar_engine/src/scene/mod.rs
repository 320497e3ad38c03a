//! Scene management
//!
//! The [`SceneRegistry`] owns every placed mesh. The UI layer mutates poses
//! through it (directly or with [`PoseCommand`]s) and the renderer walks it
//! once per frame in insertion order.

mod commands;
mod registry;

#[cfg(test)]
mod integration_tests;

pub use commands::PoseCommand;
pub use registry::{MeshHandle, SceneRegistry, SceneStatistics};
