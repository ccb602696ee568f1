use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("catalog.rs");

    let mut code = String::new();
    code.push_str("/// Embedded shape catalog files\n");
    code.push_str("pub static CATALOG_SOURCES: &[(&str, &str)] = &[\n");

    let catalog_dir = Path::new("catalog");

    if catalog_dir.exists() {
        let mut paths: Vec<_> = WalkDir::new(catalog_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "yaml"))
            .map(|e| e.into_path())
            .collect();
        // Triads first, then larger chords; file order is discovery order.
        paths.sort_by_key(|path| !path.ends_with("triads.yaml"));

        for path in paths {
            let name = path.strip_prefix(catalog_dir).unwrap().to_string_lossy().into_owned();
            if let Ok(content) = fs::read_to_string(&path) {
                code.push_str(&format!("    ({:?}, {:?}),\n", name, content));
            }
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=catalog");
}
