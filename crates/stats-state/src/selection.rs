//! Region/chapter cursor into the catalog

use stats_core::{CatalogSource, Chapter, ChartDescriptor, Region};

/// Selected region and chapter; an empty string means "nothing selected"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    region: String,
    chapter: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    /// Set the region. The chapter is always cleared, even when the region
    /// is unchanged, so a stale chapter key never resolves under another region.
    pub fn select_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
        self.chapter.clear();
        tracing::debug!(region = %self.region, "region selected, chapter cleared");
    }

    /// Set the chapter, leaving the region untouched
    pub fn select_chapter(&mut self, chapter: impl Into<String>) {
        self.chapter = chapter.into();
        tracing::debug!(region = %self.region, chapter = %self.chapter, "chapter selected");
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    /// Both fields set; only then is a catalog lookup attempted
    pub fn is_complete(&self) -> bool {
        !self.region.is_empty() && !self.chapter.is_empty()
    }

    pub fn selected_region<'a>(&self, catalog: &'a dyn CatalogSource) -> Option<&'a Region> {
        if !self.has_region() {
            return None;
        }
        catalog.region(&self.region)
    }

    pub fn selected_chapter<'a>(&self, catalog: &'a dyn CatalogSource) -> Option<&'a Chapter> {
        if !self.is_complete() {
            return None;
        }
        catalog.chapter(&self.region, &self.chapter)
    }

    /// Charts for the current pair; empty while the selection is incomplete
    pub fn charts<'a>(&self, catalog: &'a dyn CatalogSource) -> &'a [ChartDescriptor] {
        if !self.is_complete() {
            return &[];
        }
        catalog.charts(&self.region, &self.chapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::Catalog;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Region {
                key: "kanigoro".into(),
                title: "Kanigoro".into(),
                chapters: vec![
                    Chapter {
                        key: "bab1".into(),
                        title: "Geografi".into(),
                        charts: vec![ChartDescriptor::new("c1", "bar")],
                        ..Default::default()
                    },
                    Chapter {
                        key: "bab2".into(),
                        title: "Pemerintahan".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            Region {
                key: "sutojayan".into(),
                title: "Sutojayan".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_initial_selection_is_empty() {
        let selection = Selection::new();
        assert_eq!(selection.region(), "");
        assert_eq!(selection.chapter(), "");
        assert!(!selection.is_complete());
        assert!(selection.charts(&catalog()).is_empty());
    }

    #[test]
    fn test_region_change_clears_chapter() {
        let mut selection = Selection::new();
        selection.select_region("kanigoro");
        selection.select_chapter("bab1");
        assert!(selection.is_complete());

        selection.select_region("sutojayan");
        assert_eq!(selection.region(), "sutojayan");
        assert_eq!(selection.chapter(), "");

        // re-selecting the same region clears too
        selection.select_chapter("bab1");
        selection.select_region("sutojayan");
        assert_eq!(selection.chapter(), "");
    }

    #[test]
    fn test_chapter_change_keeps_region() {
        let mut selection = Selection::new();
        selection.select_region("kanigoro");
        selection.select_chapter("bab1");
        selection.select_chapter("bab2");
        assert_eq!(selection.region(), "kanigoro");
        assert_eq!(selection.chapter(), "bab2");
    }

    #[test]
    fn test_lookup_through_selection() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_region("kanigoro");
        assert_eq!(selection.selected_region(&catalog).unwrap().title, "Kanigoro");
        assert!(selection.selected_chapter(&catalog).is_none());

        selection.select_chapter("bab1");
        let charts = selection.charts(&catalog);
        assert!(std::ptr::eq(charts, catalog.regions[0].chapters[0].charts.as_slice()));

        // chapter key that only exists under another region
        selection.select_region("sutojayan");
        selection.select_chapter("bab1");
        assert!(selection.charts(&catalog).is_empty());
        assert!(selection.selected_chapter(&catalog).is_none());
    }
}
