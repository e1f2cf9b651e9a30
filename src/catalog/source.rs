use crate::catalog::Catalog;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

/// Common trait for anything that can supply a catalog.
/// The query engine only sees the loaded catalog, so a future database or
/// remote API source slots in here without touching query semantics.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full catalog from the source
    async fn load(&self) -> Result<Catalog>;

    /// Name of the source, for logging
    fn source_name(&self) -> &'static str;
}

/// Built-in seed data, used when no external catalog is configured
pub struct SeedSource;

#[async_trait]
impl CatalogSource for SeedSource {
    async fn load(&self) -> Result<Catalog> {
        let catalog = Catalog::seed();
        info!("Loaded {} seed listings", catalog.len());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "seed"
    }
}

/// Catalog stored as a JSON array of properties on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;
        let properties: Vec<Property> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        if properties.is_empty() {
            warn!("Catalog file {} contains no listings", self.path.display());
        } else {
            info!(
                "Loaded {} listings from {}",
                properties.len(),
                self.path.display()
            );
        }

        Ok(Catalog::new(properties))
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_source_loads_seed_catalog() {
        let catalog = SeedSource.load().await.unwrap();
        assert_eq!(catalog.len(), 8);
    }

    #[tokio::test]
    async fn json_file_source_round_trips_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let seed = Catalog::seed();
        let json = serde_json::to_vec_pretty(seed.as_slice()).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let loaded = JsonFileSource::new(&path).load().await.unwrap();
        assert_eq!(loaded.len(), seed.len());
        assert_eq!(loaded.get("3").map(|p| p.title.as_str()), Some("Mese Residence Çorum Projesi"));
    }

    #[tokio::test]
    async fn json_file_source_reports_missing_file() {
        let err = JsonFileSource::new("/nonexistent/catalog.json")
            .load()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
