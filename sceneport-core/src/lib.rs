//! # Sceneport Core
//!
//! Export pipeline for turning an authored 3D scene into a data-driven
//! engine's asset files.
//!
//! This crate provides the core of sceneport, including:
//! - A scene document model mirroring what a DCC tool exposes
//! - Per-object artifact writers (texture, material, mesh, prefab)
//! - A Lua level-bootstrap script emitter
//! - Asset-relative path resolution for cross-file references
//!
//! ## Architecture
//!
//! One export run is a single pass over the scene's objects. For each
//! renderable mesh object the [`export::Exporter`] writes four artifacts in
//! dependency order (texture -> material -> mesh -> prefab), each stage
//! returning the asset-relative path the next stage embeds. After the pass,
//! a level script is emitted that spawns every exported prefab with a
//! coordinate-converted transform. Nothing is kept in memory between runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sceneport_core::{export::Exporter, scene::Scene};
//! use std::path::Path;
//!
//! let scene = Scene::from_file(Path::new("assets/world/scene.json"))?;
//!
//! let result = Exporter::new("assets/world")
//!     .export_scene(&scene, Path::new("assets/world/level1.lua"))?;
//!
//! println!("Exported {} files", result.files.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod convert;
pub mod export;
pub mod paths;
pub mod scene;
pub mod wavefront;

// Re-export commonly used types
pub use export::{
    ArtifactKind, ExportError, ExportResult, ExportedFile, Exporter, PrefabInstance,
};
pub use scene::{
    CollisionShapeRef, Material, MeshData, ObjectType, RigidBody, Scene, SceneObject, Texture,
    Transform,
};

use anyhow::Result;
use tracing::info;

/// Version information for the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with structured logging.
///
/// Binaries embedding the pipeline can call this instead of configuring
/// their own subscriber; repeated calls are harmless.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sceneport_core=info")
        .with_target(false)
        .try_init();

    info!("Initializing sceneport-core v{}", VERSION);

    Ok(())
}
