//! Content catalog: region -> chapter -> chart list
//!
//! The shell and the state layer only talk to [`CatalogSource`]; the embedded
//! dataset is one implementation of it.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ChartDescriptor;

/// Dataset compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no regions")]
    Empty,
    #[error("duplicate region key `{0}`")]
    DuplicateRegion(String),
    #[error("duplicate chapter key `{chapter}` in region `{region}`")]
    DuplicateChapter { region: String, chapter: String },
}

/// One report chapter ("BAB") of a region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub charts: Vec<ChartDescriptor>,
}

/// One region (kecamatan) with its chapters in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Region {
    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.key == key)
    }
}

// ============================================================================
// CATALOG SOURCE
// ============================================================================

/// Read-only access to the catalog, whatever backs it
pub trait CatalogSource: Send + Sync {
    /// Regions in display order
    fn regions(&self) -> &[Region];

    fn region(&self, key: &str) -> Option<&Region> {
        self.regions().iter().find(|r| r.key == key)
    }

    fn chapter(&self, region: &str, chapter: &str) -> Option<&Chapter> {
        self.region(region).and_then(|r| r.chapter(chapter))
    }

    /// Chart list stored under the pair, empty when the pair is absent
    fn charts(&self, region: &str, chapter: &str) -> &[ChartDescriptor] {
        match self.chapter(region, chapter) {
            Some(c) => &c.charts,
            None => {
                tracing::debug!(region, chapter, "catalog lookup missed");
                &[]
            }
        }
    }
}

/// Shared handle passed through the component tree
pub type SharedCatalog = Arc<dyn CatalogSource>;

/// In-memory catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub regions: Vec<Region>,
}

impl Catalog {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Parse and check region/chapter key uniqueness
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// The compiled-in dataset
    pub fn embedded() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        tracing::info!(
            regions = catalog.regions.len(),
            charts = catalog.chart_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(self)
    }

    pub fn chart_count(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|r| &r.chapters)
            .map(|c| c.charts.len())
            .sum()
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.regions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for region in &self.regions {
            if !seen.insert(region.key.as_str()) {
                return Err(CatalogError::DuplicateRegion(region.key.clone()));
            }

            let mut chapters = HashSet::new();
            for chapter in &region.chapters {
                if !chapters.insert(chapter.key.as_str()) {
                    return Err(CatalogError::DuplicateChapter {
                        region: region.key.clone(),
                        chapter: chapter.key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl CatalogSource for Catalog {
    fn regions(&self) -> &[Region] {
        &self.regions
    }
}

/// Iteration keys for a chart list.
///
/// Ids are not unique in the dataset: the first non-empty occurrence keeps its
/// id, later duplicates and empty ids get a positional suffix.
pub fn chart_keys(charts: &[ChartDescriptor]) -> Vec<String> {
    let mut seen = HashSet::new();
    charts
        .iter()
        .enumerate()
        .map(|(index, chart)| {
            if !chart.id.is_empty() && seen.insert(chart.id.as_str()) {
                chart.id.clone()
            } else {
                format!("{}#{}", chart.id, index)
            }
        })
        .collect()
}
