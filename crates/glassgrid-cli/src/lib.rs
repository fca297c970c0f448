//! CLI logic for the GlassGrid batch editor.
//!
//! Loads a starting grid, replays an edit script through an
//! [`EditorSession`] and writes the resulting grid as JSON.

pub mod error_adapter;
pub mod script;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use glassgrid::{
    EditorSession, GlassGridError, export, preset::PresetLibrary, template::TemplateRegistry,
};

/// Run the GlassGrid CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GlassGridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed grids, scripts or template catalogs
/// - Rejected commands when `--strict` is set
pub fn run(args: &Args) -> Result<(), GlassGridError> {
    info!(
        output_path = args.output,
        strict = args.strict;
        "Processing layout"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let engine_config = app_config.engine().clone();
    let presets = PresetLibrary::builtin();

    // Starting grid
    let mut session = if let Some(input) = &args.input {
        let grid = export::from_json(&fs::read_to_string(input)?)?;
        EditorSession::with_grid(engine_config, grid)
    } else {
        let mut session = EditorSession::new(engine_config);
        if let Some(name) = &args.preset {
            session.load_preset(&presets, name)?;
        }
        session
    };

    let templates: TemplateRegistry = match &args.templates {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TemplateRegistry::new(),
    };

    if let Some(path) = &args.script {
        let commands = script::parse(&fs::read_to_string(path)?)?;
        info!(commands = commands.len(); "Replaying script");

        let mut rejected = 0usize;
        for (index, command) in commands.iter().enumerate() {
            if let Err(err) = command.apply(&mut session, &presets, &templates) {
                if args.strict {
                    return Err(err.into());
                }
                warn!(index, err:%; "Command rejected, skipping");
                rejected += 1;
            }
        }
        info!(rejected, history = session.history_len(); "Script finished");
    }

    let json = session.export_json(app_config.export().pretty())?;
    if args.output == "-" {
        println!("{json}");
    } else {
        fs::write(&args.output, json)?;
        info!(output_file = args.output; "Layout exported successfully");
    }

    Ok(())
}
