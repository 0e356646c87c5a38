use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Attribute key on a material holding the engine shader path
pub const SHADER_PATH_ATTR: &str = "shaderpath";

/// Kind of object in the authored scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    Mesh,
    Empty,
    Light,
    Camera,
}

/// A scene document as exposed by the authoring tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub objects: Vec<SceneObject>,
}

/// A single object in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub object_type: ObjectType,
    #[serde(default)]
    pub transform: Transform,
    /// Geometry, present on mesh objects
    #[serde(default)]
    pub mesh: Option<MeshData>,
    /// Active material binding
    #[serde(default)]
    pub material: Option<Material>,
    /// Rigid-body parameters, present when the object participates in physics
    #[serde(default)]
    pub rigid_body: Option<RigidBody>,
    /// Marks a helper object that only defines a collision volume. Such
    /// objects are referenced by name from a physics component and are never
    /// exported on their own.
    #[serde(default)]
    pub collision_shape: bool,
}

/// Object placement in the source coordinate system (right-handed, Z-up)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Quaternion in the authoring tool's (w, x, y, z) component order
    pub rotation: [f32; 4],
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: [1.0, 0.0, 0.0, 0.0],
            scale: Vec3::ONE,
        }
    }
}

/// Polygonal geometry for one object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    #[serde(default)]
    pub normals: Vec<Vec3>,
    #[serde(default)]
    pub uvs: Vec<[f32; 2]>,
    pub faces: Vec<Face>,
}

/// A single polygon; corners wind counter-clockwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    pub corners: Vec<Corner>,
}

/// One face corner, indexing into the mesh attribute arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corner {
    pub position: usize,
    #[serde(default)]
    pub uv: Option<usize>,
    #[serde(default)]
    pub normal: Option<usize>,
}

/// Material binding on a scene object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Free-form attribute table authored on the material. The engine shader
    /// path lives under [`SHADER_PATH_ATTR`].
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// Active texture of the material
    #[serde(default)]
    pub texture: Option<Texture>,
}

impl Material {
    /// Engine shader path, if the material carries one
    pub fn shader_path(&self) -> Option<&str> {
        self.attributes.get(SHADER_PATH_ATTR).map(String::as_str)
    }
}

/// A 2D texture referencing an image file on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub image: PathBuf,
}

/// Rigid-body parameters attached to an object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    #[serde(default)]
    pub mass: f32,
    #[serde(default)]
    pub linear_damping: f32,
    #[serde(default)]
    pub angular_damping: f32,
    #[serde(default)]
    pub restitution: f32,
    /// Collision volumes, each backed by a helper object of the same name
    #[serde(default)]
    pub collision_shapes: Vec<CollisionShapeRef>,
}

/// Reference to a collision volume defined by a helper object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionShapeRef {
    /// Name of the scene object holding the volume's transform
    pub name: String,
    /// Shape type understood by the engine ("box", "sphere", ...)
    pub shape: String,
}

impl Scene {
    /// Load a scene document from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene document: {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse scene document: {}", path.display()))
    }

    /// Look up an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Objects eligible for export: mesh objects that are not collision-shape
    /// helpers, in scene order
    pub fn exportable_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| o.object_type == ObjectType::Mesh && !o.collision_shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_JSON: &str = r#"{
        "name": "demo",
        "objects": [
            {
                "name": "Crate",
                "object_type": "Mesh",
                "transform": {
                    "position": [1.0, 2.0, 3.0],
                    "rotation": [1.0, 0.0, 0.0, 0.0],
                    "scale": [1.0, 1.0, 1.0]
                },
                "material": {
                    "name": "Wood",
                    "attributes": { "shaderpath": "shaders/lit.glsl" }
                }
            },
            {
                "name": "CrateCol",
                "object_type": "Mesh",
                "collision_shape": true
            },
            {
                "name": "KeyLight",
                "object_type": "Light"
            }
        ]
    }"#;

    #[test]
    fn parses_scene_document() {
        let scene: Scene = serde_json::from_str(SCENE_JSON).expect("parse scene");

        assert_eq!(scene.name, "demo");
        assert_eq!(scene.objects.len(), 3);

        let crate_obj = scene.object("Crate").expect("Crate present");
        assert_eq!(crate_obj.transform.position, Vec3::new(1.0, 2.0, 3.0));
        let material = crate_obj.material.as_ref().expect("material present");
        assert_eq!(material.shader_path(), Some("shaders/lit.glsl"));
    }

    #[test]
    fn exportable_objects_skip_helpers_and_non_meshes() {
        let scene: Scene = serde_json::from_str(SCENE_JSON).expect("parse scene");

        let names: Vec<&str> = scene.exportable_objects().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Crate"]);
    }

    #[test]
    fn transform_defaults_to_identity() {
        let transform = Transform::default();
        assert_eq!(transform.position, Vec3::ZERO);
        assert_eq!(transform.rotation, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(transform.scale, Vec3::ONE);
    }

    #[test]
    fn missing_shader_attribute_resolves_to_none() {
        let material = Material {
            name: "Bare".to_string(),
            attributes: HashMap::new(),
            texture: None,
        };
        assert_eq!(material.shader_path(), None);
    }
}
