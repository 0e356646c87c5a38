use crate::ui::{info, print_table};
use anyhow::{Context, Result};
use clap::Args;
use sceneport_core::scene::{Scene, SceneObject};
use serde::Serialize;
use std::path::PathBuf;

/// Summarize the contents of a scene document
#[derive(Args)]
pub struct InspectCommand {
    /// Scene document to inspect
    #[arg(short, long)]
    pub scene: PathBuf,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable scene summary for `--json`
#[derive(Debug, Serialize)]
struct SceneSummary {
    name: String,
    objects: usize,
    exportable: usize,
    collision_helpers: usize,
}

impl InspectCommand {
    pub fn execute(&self) -> Result<()> {
        let scene = Scene::from_file(&self.scene)?;

        if self.json {
            let summary = SceneSummary {
                name: scene.name.clone(),
                objects: scene.objects.len(),
                exportable: scene.exportable_objects().count(),
                collision_helpers: scene.objects.iter().filter(|o| o.collision_shape).count(),
            };
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize scene summary")?;
            println!("{}", json);
            return Ok(());
        }

        info(&format!(
            "Scene `{}`: {} objects",
            scene.name,
            scene.objects.len()
        ));

        let rows: Vec<(String, String)> = scene
            .objects
            .iter()
            .map(|object| (object.name.clone(), describe(object)))
            .collect();
        print_table("Objects", &rows);

        let exportable = scene.exportable_objects().count();
        info(&format!("{} objects eligible for export", exportable));

        Ok(())
    }
}

fn describe(object: &SceneObject) -> String {
    let mut traits = vec![format!("{:?}", object.object_type)];
    if object.collision_shape {
        traits.push("collision helper".to_string());
    }
    if object.rigid_body.is_some() {
        traits.push("rigid body".to_string());
    }
    if let Some(material) = &object.material {
        traits.push(format!("material {}", material.name));
    }
    traits.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneport_core::scene::{ObjectType, Transform};

    fn object(name: &str) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            object_type: ObjectType::Mesh,
            transform: Transform::default(),
            mesh: None,
            material: None,
            rigid_body: None,
            collision_shape: false,
        }
    }

    #[test]
    fn describes_collision_helpers() {
        let mut helper = object("CrateCol");
        helper.collision_shape = true;

        let description = describe(&helper);
        assert!(description.contains("Mesh"));
        assert!(description.contains("collision helper"));
    }

    #[test]
    fn describes_plain_mesh_objects() {
        assert_eq!(describe(&object("Crate")), "Mesh");
    }

    #[test]
    fn summary_serializes_counts() {
        let summary = SceneSummary {
            name: "yard".to_string(),
            objects: 3,
            exportable: 1,
            collision_helpers: 1,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "yard");
        assert_eq!(json["objects"], 3);
        assert_eq!(json["exportable"], 1);
        assert_eq!(json["collision_helpers"], 1);
    }
}
