//! On-disk descriptor formats consumed by the engine's resource loaders.
//!
//! Each descriptor is a small JSON document. The types here serialize with
//! serde so escaping and separators are always valid; field order follows
//! declaration order, and maps that must preserve authoring order use
//! `serde_json::Map` (order-preserving in this workspace).

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `.texture` descriptor: a 2D texture and its image per texture unit
#[derive(Debug, Clone, Serialize)]
pub struct TextureDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    /// Texture-unit index -> asset-relative image path
    pub images: BTreeMap<String, String>,
}

impl TextureDescriptor {
    /// Descriptor for a single 2D image bound to unit 0
    pub fn single_2d(image: String) -> Self {
        let mut images = BTreeMap::new();
        images.insert("0".to_string(), image);
        Self {
            kind: "2D".to_string(),
            images,
        }
    }
}

/// `.material` descriptor: shader plus texture bindings
#[derive(Debug, Clone, Serialize)]
pub struct MaterialDescriptor {
    pub shader: String,
    /// Named sampler slots
    pub textures: BTreeMap<String, TextureSlot>,
    /// Shader parameter overrides; an extension point, never populated by
    /// this pipeline
    pub parameters: Map<String, Value>,
}

/// One sampler slot in a material
#[derive(Debug, Clone, Serialize)]
pub struct TextureSlot {
    pub texture: String,
}

/// `.prefab` descriptor: named components bundled for instantiation
#[derive(Debug, Clone, Serialize)]
pub struct PrefabDescriptor {
    pub components: PrefabComponents,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefabComponents {
    pub render_component: RenderComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics_component: Option<PhysicsComponent>,
}

/// Render component: mesh reference plus material bindings
#[derive(Debug, Clone, Serialize)]
pub struct RenderComponent {
    pub mesh: String,
    /// Material path -> reserved per-instance override slot, always empty
    pub materials: Map<String, Value>,
}

/// Physics component emitted when the source object carries rigid-body data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsComponent {
    pub restitution: f32,
    /// Linear damping
    pub damping: f32,
    pub angular_damping: f32,
    pub mass: f32,
    /// Placeholder; the engine recomputes inertia from the shapes
    pub inv_inertia_tensor: [f32; 3],
    /// Shape name -> [`CollisionShapeEntry`], in authoring order
    pub collision_shapes: Map<String, Value>,
}

/// One collision volume inside a physics component
#[derive(Debug, Clone, Serialize)]
pub struct CollisionShapeEntry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Half-extents per axis
    pub dim: [f32; 3],
    /// Local offset in engine space
    pub offset: [f32; 3],
}
