use clap::{Parser, Subcommand};

mod commands;
mod ui;

use commands::{export::ExportCommand, inspect::InspectCommand};

/// Sceneport CLI - scene-to-asset export for data-driven engines
#[derive(Parser)]
#[command(
    name = "sceneport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export authored scenes into engine asset trees",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene document into an engine asset folder
    Export(ExportCommand),

    /// Summarize the contents of a scene document
    Inspect(InspectCommand),
}

fn main() {
    let cli = Cli::parse();

    // Initialize colored output
    colored::control::set_override(!cli.no_color);

    // Initialize logging
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Export(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        ui::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("sceneport_core={},sceneport_cli={}", level, level))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
