use std::env;
use std::fs;
use std::process;

use fretshape::{resolve_from_yaml, ShapeCatalog, Tuning};

fn usage() -> ! {
    eprintln!("Usage: fretshape <request.yaml> [output.json]");
    eprintln!("       fretshape --lint-catalog");
    eprintln!("       fretshape --tunings");
    process::exit(1);
}

fn lint_catalog() {
    let catalog = match ShapeCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    for diagnostic in catalog.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    eprintln!(
        "{} shapes, {} rejected entries",
        catalog.len(),
        catalog.diagnostics().len()
    );
    if !catalog.diagnostics().is_empty() {
        process::exit(1);
    }
}

fn list_tunings() {
    for tuning in Tuning::presets() {
        let names: Vec<&str> = (0..fretshape::STRING_COUNT)
            .map(|string| tuning.open_pitch(string).name())
            .collect();
        println!("{:<16}{}", tuning.name().unwrap_or_default(), names.join(" "));
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
    }

    match args[1].as_str() {
        "--lint-catalog" => return lint_catalog(),
        "--tunings" => return list_tunings(),
        flag if flag.starts_with("--") => usage(),
        _ => {}
    }

    let input_path = &args[1];
    let output_path: Option<&String> = args.get(2);

    // Read request file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let diagram = match resolve_from_yaml(&source) {
        Ok(diagram) => diagram,
        Err(e) => {
            eprintln!("Resolution error: {}", e);
            process::exit(1);
        }
    };

    if diagram.shapes.is_empty() {
        eprintln!("No shapes found");
    }
    for diagnostic in &diagram.diagnostics {
        log::info!("{}", diagnostic);
    }

    let json = match serde_json::to_string_pretty(&diagram) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing diagram: {}", e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote {} shapes to {}", diagram.shapes.len(), path);
        }
        None => {
            println!("{}", json);
        }
    }
}
