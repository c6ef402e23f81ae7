/// Generator configuration.
use super::content::DanceCatalog;
use super::error::Result;
use super::layout::MenuGrid;
use std::path::{Path, PathBuf};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "Museo_Digital_Danzas_Peruanas.pptx";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Where the deck is written; overwritten if present
    pub output: PathBuf,
    pub catalog: DanceCatalog,
    pub menu_grid: MenuGrid,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            catalog: DanceCatalog::builtin(),
            menu_grid: MenuGrid::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_catalog(mut self, catalog: DanceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the built-in dances with those of a YAML content file.
    pub fn with_content_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let catalog = DanceCatalog::load(path)?;
        Ok(self.with_catalog(catalog))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output, PathBuf::from("Museo_Digital_Danzas_Peruanas.pptx"));
        assert_eq!(config.catalog.len(), 7);
        assert_eq!(config.menu_grid.columns, 2);
    }

    #[test]
    fn test_content_file_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.yaml");
        std::fs::write(&path, "dances:\n  - name: Tondero\n    video_url: ''\n").unwrap();

        let config = GeneratorConfig::new()
            .with_output(dir.path().join("out.pptx"))
            .with_content_file(&path)
            .unwrap();
        assert_eq!(config.catalog.len(), 1);
        assert!(config.output.ends_with("out.pptx"));
    }
}
