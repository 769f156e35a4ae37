//! Catalog file loading.

use crate::schema::CatalogDef;
use crate::{CatalogError, CatalogResult};
use std::path::Path;
use tracing::debug;

/// Load a catalog from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
pub fn load_catalog(path: &Path) -> CatalogResult<CatalogDef> {
    let content = std::fs::read_to_string(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let catalog: CatalogDef = match ext.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    debug!(
        path = %path.display(),
        products = catalog.products.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("hs_catalog_io_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const MINIMAL_YAML: &str = r#"
version: 1
products:
  - id: p1
    name: P1
    tags: [air-water]
    power:
      min_kw: 4.0
      max_kw: 16.0
      supply:
        type: Discrete
    emitter:
      temp_min_c: 25.0
      temp_max_c: 55.0
"#;

    #[test]
    fn loads_yaml() {
        let path = temp_file("catalog.yaml", MINIMAL_YAML);
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.products.len(), 1);
    }

    #[test]
    fn loads_json() {
        let catalog: CatalogDef = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let path = temp_file("catalog.json", &json);
        assert_eq!(load_catalog(&path).unwrap(), catalog);
    }

    #[test]
    fn unknown_extension_rejected() {
        let path = temp_file("catalog.toml", "version = 1");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
    }
}
