//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse the contents of a RON file containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(contents: &str, file_name: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&contents, &file_name)
}

/// Load all content from assets/data/*.ron into a ContentRegistry.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    let path = base_path.join("characters.ron");
    match load_data_file::<CharacterDef>(&path) {
        Ok(items) => {
            for item in items {
                if registry.characters.contains_key(&item.id) {
                    errors.push(ContentLoadError {
                        file: path.display().to_string(),
                        message: format!("Duplicate character id '{}'", item.id),
                    });
                    continue;
                }
                registry.characters.insert(item.id.clone(), item);
            }
        }
        Err(e) => errors.push(e),
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}
