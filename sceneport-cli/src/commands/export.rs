use crate::ui::{format_file_size, info, print_table, progress_styles, success, warning};
use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use sceneport_core::{export::Exporter, scene::Scene};
use std::path::PathBuf;
use tracing::debug;

/// Export a scene document into an engine asset folder
#[derive(Args)]
pub struct ExportCommand {
    /// Scene document to export
    #[arg(short, long)]
    pub scene: PathBuf,

    /// Destination folder for the exported assets
    #[arg(short, long)]
    pub output: PathBuf,

    /// Level script file name, written inside the destination folder
    /// (defaults to the scene document's stem with a .lua extension)
    #[arg(long)]
    pub level_script: Option<String>,
}

impl ExportCommand {
    pub fn execute(&self) -> Result<()> {
        info(&format!("Loading scene from: {}", self.scene.display()));

        let scene = Scene::from_file(&self.scene)?;
        let script_path = self.output.join(self.script_name());
        debug!("Level script target: {}", script_path.display());

        let pb = ProgressBar::new_spinner();
        pb.set_style(progress_styles::spinner());
        pb.set_message(format!("Exporting scene `{}`...", scene.name));

        let result = Exporter::new(&self.output)
            .export_scene(&scene, &script_path)
            .with_context(|| format!("Failed to export scene `{}`", scene.name))?;

        pb.finish_and_clear();

        for message in &result.warnings {
            warning(message);
        }

        print_table(
            "Export summary",
            &[
                ("Files".to_string(), result.files.len().to_string()),
                ("Size".to_string(), format_file_size(result.total_bytes)),
                ("Duration".to_string(), format!("{}ms", result.duration_ms)),
                (
                    "Level script".to_string(),
                    script_path.display().to_string(),
                ),
            ],
        );

        success("Export completed successfully!");
        Ok(())
    }

    fn script_name(&self) -> String {
        match &self.level_script {
            Some(name) => name.clone(),
            None => {
                let stem = self
                    .scene
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("level");
                format!("{}.lua", stem)
            }
        }
    }
}
