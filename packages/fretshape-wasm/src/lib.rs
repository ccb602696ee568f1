use serde::Serialize;
use wasm_bindgen::prelude::*;

use fretshape::{ShapeCatalog, ShapeError, Tuning, STRING_COUNT};

#[derive(Serialize)]
struct ResolveError {
    message: String,
    kind: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TuningPreset {
    name: String,
    offsets: Vec<u8>,
    open_strings: Vec<&'static str>,
}

fn error_kind(e: &ShapeError) -> &'static str {
    match e {
        ShapeError::UnknownPitch(_) => "unknownPitch",
        ShapeError::UnknownQuality(_) => "unknownQuality",
        ShapeError::UnknownVariant { .. } => "unknownVariant",
        ShapeError::MalformedTuning(_) => "malformedTuning",
        ShapeError::InvalidStringGroup(_) => "invalidStringGroup",
        ShapeError::Config(_) => "config",
        ShapeError::Catalog(_) => "catalog",
    }
}

fn to_js_error(e: ShapeError) -> JsValue {
    let error = ResolveError {
        message: e.to_string(),
        kind: error_kind(&e),
    };
    let json = serde_json::to_string(&error)
        .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", error.message));
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolve a YAML diagram request to render-ready JSON
#[wasm_bindgen]
pub fn resolve_diagram(request_yaml: &str) -> Result<String, JsValue> {
    let diagram = fretshape::resolve_from_yaml(request_yaml).map_err(to_js_error)?;
    to_json(&diagram)
}

/// Resolve from settings-panel values and return the raw shape instances
#[wasm_bindgen]
pub fn resolve_shapes(
    root: &str,
    quality: &str,
    variant: &str,
    tuning: &str,
    strings: &str,
    fret_limit: u8,
) -> Result<String, JsValue> {
    let resolution = fretshape::resolve_by_name(root, quality, variant, tuning, strings, fret_limit)
        .map_err(to_js_error)?;
    to_json(&resolution)
}

/// Tuning presets as a JSON array, for populating a picker
#[wasm_bindgen]
pub fn list_tunings() -> String {
    let presets: Vec<TuningPreset> = Tuning::presets()
        .into_iter()
        .map(|tuning| TuningPreset {
            name: tuning.name().unwrap_or_default().to_string(),
            offsets: tuning.offsets().to_vec(),
            open_strings: (0..STRING_COUNT).map(|s| tuning.open_pitch(s).name()).collect(),
        })
        .collect();
    serde_json::to_string(&presets).unwrap_or_else(|_| "[]".to_string())
}

/// Built-in catalog entries rejected at load time, as a JSON array
#[wasm_bindgen]
pub fn lint_catalog() -> Result<String, JsValue> {
    let catalog = ShapeCatalog::builtin().map_err(to_js_error)?;
    to_json(catalog.diagnostics())
}
