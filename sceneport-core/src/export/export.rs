use super::descriptors::{
    CollisionShapeEntry, MaterialDescriptor, PhysicsComponent, PrefabComponents, PrefabDescriptor,
    RenderComponent, TextureDescriptor, TextureSlot,
};
use crate::convert;
use crate::paths;
use crate::scene::{RigidBody, Scene, SceneObject};
use crate::wavefront;
use glam::Vec3;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during an export run
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("object `{object}` has no mesh data")]
    MissingMesh { object: String },

    #[error("object `{object}` has no material")]
    MissingMaterial { object: String },

    #[error("material `{material}` on object `{object}` has no texture")]
    MissingTexture { object: String, material: String },

    #[error("material `{material}` on object `{object}` has no `shaderpath` attribute")]
    MissingShaderPath { object: String, material: String },

    #[error("collision shape `{name}` does not match any scene object")]
    UnknownCollisionShape { name: String },

    #[error("texture image path `{0}` has no file name")]
    InvalidImagePath(PathBuf),

    #[error("level script path `{0}` has no file stem")]
    InvalidScriptPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("descriptor serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Kind of artifact written during an export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Image,
    Texture,
    Material,
    Mesh,
    Prefab,
    LevelScript,
}

/// Information about one file written during an export run
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// Output file path
    pub path: PathBuf,
    /// File size in bytes
    pub size_bytes: u64,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Scene object the artifact was derived from
    pub source_object: String,
}

/// Result of one export run
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Files written, in write order
    pub files: Vec<ExportedFile>,
    /// Total bytes written
    pub total_bytes: u64,
    /// Wall-clock duration
    pub duration_ms: u64,
    /// Non-fatal conditions encountered
    pub warnings: Vec<String>,
}

/// Spawn data recorded for one exported object, consumed by the level script
/// emitter. Transform components stay in source space until emission.
#[derive(Debug, Clone)]
pub struct PrefabInstance {
    /// Asset-relative prefab descriptor path
    pub prefab: String,
    pub position: Vec3,
    /// (w, x, y, z) as authored
    pub rotation: [f32; 4],
    pub scale: Vec3,
}

/// Writes a scene's asset files into one destination folder.
///
/// Each stage takes its target object explicitly and returns the
/// asset-relative path the next stage embeds, so the texture -> material ->
/// mesh -> prefab ordering is visible in the call flow rather than hidden in
/// ambient state.
pub struct Exporter {
    folder: PathBuf,
    files: Vec<ExportedFile>,
    warnings: Vec<String>,
}

impl Exporter {
    /// Create an exporter writing into `folder`
    pub fn new<P: Into<PathBuf>>(folder: P) -> Self {
        Self {
            folder: folder.into(),
            files: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Export every eligible object in `scene` and finish with a level
    /// script at `script_path`.
    ///
    /// Eligible objects are mesh objects not flagged as collision-shape
    /// helpers. Artifacts for one object are written in dependency order
    /// before the next object begins; a failure aborts the whole run,
    /// leaving any files already written in place.
    pub fn export_scene(
        mut self,
        scene: &Scene,
        script_path: &Path,
    ) -> Result<ExportResult, ExportError> {
        let start_time = Instant::now();

        info!("Exporting scene `{}` to {}", scene.name, self.folder.display());
        fs::create_dir_all(&self.folder)?;

        let mut spawns = Vec::new();
        for object in scene.exportable_objects() {
            info!("Exporting object `{}`", object.name);

            let texture_path = self.write_object_texture(object)?;
            let material_path = self.write_object_material(object, &texture_path)?;
            let mesh_path = self.write_object_mesh(object)?;
            let prefab_path = self.write_prefab(scene, object, &mesh_path, &material_path)?;

            spawns.push(PrefabInstance {
                prefab: prefab_path,
                position: object.transform.position,
                rotation: object.transform.rotation,
                scale: object.transform.scale,
            });
        }

        self.write_level_script(script_path, &spawns)?;

        info!(
            "Exported {} objects ({} files)",
            spawns.len(),
            self.files.len()
        );

        Ok(self.finish(start_time.elapsed()))
    }

    /// Copy the object's texture image into the destination folder and write
    /// the `.texture` descriptor. Returns the descriptor's asset-relative
    /// path.
    pub fn write_object_texture(&mut self, object: &SceneObject) -> Result<String, ExportError> {
        let material = object.material.as_ref().ok_or_else(|| {
            ExportError::MissingMaterial {
                object: object.name.clone(),
            }
        })?;
        let texture = material.texture.as_ref().ok_or_else(|| {
            ExportError::MissingTexture {
                object: object.name.clone(),
                material: material.name.clone(),
            }
        })?;

        let image_name = texture
            .image
            .file_name()
            .ok_or_else(|| ExportError::InvalidImagePath(texture.image.clone()))?;
        let image_dest = self.folder.join(image_name);

        if is_same_file(&texture.image, &image_dest) {
            let message = format!(
                "texture image `{}` already lives at the destination, skipping copy",
                image_dest.display()
            );
            warn!("{}", message);
            self.warnings.push(message);
        } else {
            fs::copy(&texture.image, &image_dest)?;
        }
        self.record(&image_dest, ArtifactKind::Image, &object.name)?;

        let descriptor = TextureDescriptor::single_2d(paths::asset_relative(
            &image_dest.to_string_lossy(),
        ));
        let descriptor_path = self.folder.join(format!("{}.texture", texture.name));
        self.write_json(&descriptor_path, &descriptor, ArtifactKind::Texture, &object.name)?;

        Ok(paths::asset_relative(&descriptor_path.to_string_lossy()))
    }

    /// Write the `.material` descriptor binding the shader and the texture
    /// descriptor. Returns the asset-relative path.
    pub fn write_object_material(
        &mut self,
        object: &SceneObject,
        texture_path: &str,
    ) -> Result<String, ExportError> {
        let material = object.material.as_ref().ok_or_else(|| {
            ExportError::MissingMaterial {
                object: object.name.clone(),
            }
        })?;
        let shader = material
            .shader_path()
            .ok_or_else(|| ExportError::MissingShaderPath {
                object: object.name.clone(),
                material: material.name.clone(),
            })?;

        let mut textures = BTreeMap::new();
        textures.insert(
            "tex".to_string(),
            TextureSlot {
                texture: texture_path.to_string(),
            },
        );
        let descriptor = MaterialDescriptor {
            shader: shader.to_string(),
            textures,
            parameters: Map::new(),
        };

        let descriptor_path = self.folder.join(format!("{}.material", material.name));
        self.write_json(&descriptor_path, &descriptor, ArtifactKind::Material, &object.name)?;

        Ok(paths::asset_relative(&descriptor_path.to_string_lossy()))
    }

    /// Write the object's geometry as a triangulated OBJ file. Returns the
    /// asset-relative path.
    pub fn write_object_mesh(&mut self, object: &SceneObject) -> Result<String, ExportError> {
        let mesh = object.mesh.as_ref().ok_or_else(|| ExportError::MissingMesh {
            object: object.name.clone(),
        })?;

        let mesh_path = self.folder.join(format!("{}.obj", object.name));
        wavefront::write(mesh, &object.name, &mesh_path)?;
        self.record(&mesh_path, ArtifactKind::Mesh, &object.name)?;

        Ok(paths::asset_relative(&mesh_path.to_string_lossy()))
    }

    /// Write the `.prefab` descriptor bundling the render component and,
    /// when rigid-body data is present, the physics component. Returns the
    /// asset-relative path.
    pub fn write_prefab(
        &mut self,
        scene: &Scene,
        object: &SceneObject,
        mesh_path: &str,
        material_path: &str,
    ) -> Result<String, ExportError> {
        let mut materials = Map::new();
        // Empty string: reserved per-instance override slot
        materials.insert(material_path.to_string(), Value::String(String::new()));

        let physics = object
            .rigid_body
            .as_ref()
            .map(|body| physics_component(scene, body))
            .transpose()?;

        let descriptor = PrefabDescriptor {
            components: PrefabComponents {
                render_component: RenderComponent {
                    mesh: mesh_path.to_string(),
                    materials,
                },
                physics_component: physics,
            },
        };

        let prefab_path = self.folder.join(format!("{}.prefab", object.name));
        self.write_json(&prefab_path, &descriptor, ArtifactKind::Prefab, &object.name)?;

        Ok(paths::asset_relative(&prefab_path.to_string_lossy()))
    }

    /// Write the Lua bootstrap script spawning every exported prefab.
    /// Overwrites any existing file at `script_path`.
    pub fn write_level_script(
        &mut self,
        script_path: &Path,
        spawns: &[PrefabInstance],
    ) -> Result<(), ExportError> {
        let routine = script_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ExportError::InvalidScriptPath(script_path.to_path_buf()))?;

        let mut lines = Vec::with_capacity(spawns.len() + 3);
        lines.push(format!("-- generated by sceneport {}", crate::VERSION));
        lines.push(format!("function {}()", routine));
        for spawn in spawns {
            let prefab_ref = Path::new(&spawn.prefab).with_extension("");
            let position = convert::to_engine(spawn.position);
            let rotation = convert::quat_to_engine(spawn.rotation);
            lines.push(format!(
                "    Script.spawn_prefab(\"{}\", Vector3({}, {}, {}), Quaternion({}, {}, {}, {}), Vector3({}, {}, {}))",
                prefab_ref.to_string_lossy(),
                position.x,
                position.y,
                position.z,
                rotation[0],
                rotation[1],
                rotation[2],
                rotation[3],
                spawn.scale.x,
                spawn.scale.y,
                spawn.scale.z,
            ));
        }
        lines.push("end".to_string());

        fs::write(script_path, lines.join("\n") + "\n")?;
        self.record(script_path, ArtifactKind::LevelScript, routine)?;

        Ok(())
    }

    /// Warnings accumulated so far
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn write_json<T: Serialize>(
        &mut self,
        path: &Path,
        value: &T,
        kind: ArtifactKind,
        source_object: &str,
    ) -> Result<(), ExportError> {
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(path, &json)?;
        self.record(path, kind, source_object)
    }

    fn record(
        &mut self,
        path: &Path,
        kind: ArtifactKind,
        source_object: &str,
    ) -> Result<(), ExportError> {
        let metadata = fs::metadata(path)?;
        self.files.push(ExportedFile {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
            kind,
            source_object: source_object.to_string(),
        });
        Ok(())
    }

    fn finish(self, duration: Duration) -> ExportResult {
        let total_bytes = self.files.iter().map(|f| f.size_bytes).sum();
        ExportResult {
            files: self.files,
            total_bytes,
            duration_ms: duration.as_millis() as u64,
            warnings: self.warnings,
        }
    }
}

/// Build the physics component for one rigid body, resolving each collision
/// shape against the scene by helper-object name.
fn physics_component(scene: &Scene, body: &RigidBody) -> Result<PhysicsComponent, ExportError> {
    let mut collision_shapes = Map::new();
    for shape in &body.collision_shapes {
        let helper = scene
            .object(&shape.name)
            .ok_or_else(|| ExportError::UnknownCollisionShape {
                name: shape.name.clone(),
            })?;

        let offset = convert::to_engine(helper.transform.position);
        let entry = CollisionShapeEntry {
            kind: shape.shape.clone(),
            dim: convert::half_extents(helper.transform.scale),
            offset: [offset.x, offset.y, offset.z],
        };
        collision_shapes.insert(shape.name.clone(), serde_json::to_value(&entry)?);
    }

    Ok(PhysicsComponent {
        restitution: body.restitution,
        damping: body.linear_damping,
        angular_damping: body.angular_damping,
        mass: body.mass,
        inv_inertia_tensor: [1.0, 1.0, 1.0],
        collision_shapes,
    })
}

/// Whether `a` and `b` name the same existing file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
