// src/cli/validate_import.rs

use std::path::Path;

use crate::catalog::form::import::import_product_json;
use crate::catalog::form::payload::build_create_payload;

/// Runs the same normalizer the Import JSON tab uses and prints a summary of
/// the create payload it would produce.
pub fn run(path: &Path) -> Result<(), String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Could not read {path:?}: {e}"))?;
    let form = import_product_json(&contents)?;
    let payload = build_create_payload(&form, form.status);

    println!("OK: '{}'", payload.name);
    println!("  slug:            {}", payload.slug);
    println!("  status:          {}", payload.status.as_str());
    println!("  ratings:         {}", payload.ratings.len());
    println!("  key highlights:  {}", payload.key_highlights.len());
    println!("  pros / cons:     {} / {}", payload.pros.len(), payload.cons.len());
    println!("  verdict points:  {}", payload.final_verdict_points.len());
    if payload.quick_verdict.is_none() {
        println!("  note: no quick verdict section");
    }
    if payload.category_id.is_none() {
        println!("  note: no categoryId — assign one before publishing");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::form::template::JSON_TEMPLATE;

    #[test]
    fn template_file_validates() {
        let dir = std::env::temp_dir().join("reviewdesk_cli_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("template.json");
        std::fs::write(&path, JSON_TEMPLATE).unwrap();
        assert!(run(&path).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run(Path::new("/nonexistent/import.json")).unwrap_err();
        assert!(err.contains("Could not read"));
    }
}
