//! Export system for writing engine asset files from a scene
//!
//! This module walks a scene's objects and writes the texture, material,
//! mesh and prefab artifacts for each, followed by a Lua level-bootstrap
//! script that instantiates every exported prefab.

mod descriptors;
mod export;

pub use descriptors::{
    CollisionShapeEntry, MaterialDescriptor, PhysicsComponent, PrefabComponents, PrefabDescriptor,
    RenderComponent, TextureDescriptor, TextureSlot,
};
pub use export::{
    ArtifactKind, ExportError, ExportResult, ExportedFile, Exporter, PrefabInstance,
};
