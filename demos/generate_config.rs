//! Generate default converter configuration file
//!
//! Creates a JSON config with all default parameters

use munsell_engine::ConverterConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/munsell.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = ConverterConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Achromatic below chroma {}", config.mono_limit_chroma);
            eprintln!(
                "  Value inversion: tolerance {}, at most {} iterations",
                config.value_tolerance, config.max_value_iterations
            );
            eprintln!("  Hue search window: ±{} steps", config.search_window);
            eprintln!("  Level snap: {}", config.level_snap);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e.user_message());
            process::exit(1);
        }
    }
}
