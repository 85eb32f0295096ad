//! Shell text and select options

use stats_core::{CatalogSource, Region};

/// Fixed UI strings of the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub filter_title: &'static str,
    pub filter_button: &'static str,
    pub region_label: &'static str,
    pub region_placeholder: &'static str,
    pub chapter_label: &'static str,
    pub chapter_placeholder: &'static str,
    /// Chapter select text while no region is chosen
    pub chapter_locked: &'static str,
    pub empty_lines: [&'static str; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Dashboard Dalam Data",
            subtitle: "Dashboard yang mengambil data dari Kecamatan Dalam Angka 2025",
            filter_title: "Filter",
            filter_button: "Filter Data",
            region_label: "Kecamatan",
            region_placeholder: "-- Pilih Wilayah --",
            chapter_label: "Bab Statistik",
            chapter_placeholder: "-- Pilih BAB --",
            chapter_locked: "Pilih wilayah dahulu",
            empty_lines: [
                "Silakan lengkapi filter di sebelah kiri",
                "untuk memuat visualisasi data.",
            ],
        }
    }
}

impl DashboardConfig {
    /// Empty-option text of the chapter select
    pub fn chapter_prompt(&self, region_selected: bool) -> &'static str {
        if region_selected {
            self.chapter_placeholder
        } else {
            self.chapter_locked
        }
    }
}

/// One `<option>` of a filter select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Regions in catalog order
pub fn region_options(catalog: &dyn CatalogSource) -> Vec<SelectOption> {
    catalog
        .regions()
        .iter()
        .map(|r| SelectOption {
            value: r.key.clone(),
            label: r.title.clone(),
        })
        .collect()
}

/// Chapters of the region, empty when no region is selected
pub fn chapter_options(region: Option<&Region>) -> Vec<SelectOption> {
    region
        .map(|r| {
            r.chapters
                .iter()
                .map(|c| SelectOption {
                    value: c.key.clone(),
                    label: c.title.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Glyph for a region's icon name
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "map" => "\u{1f5fa}",
        "chart" => "\u{1f4ca}",
        _ => "\u{1f4d6}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::Catalog;

    #[test]
    fn test_embedded_options() {
        let catalog = Catalog::embedded().unwrap();
        let regions = region_options(&catalog);
        assert_eq!(regions[0].value, "kanigoro");
        assert_eq!(regions.len(), catalog.regions.len());

        let chapters = chapter_options(catalog.region("kanigoro"));
        assert_eq!(chapters.len(), 7);
        assert_eq!(chapters[0].value, "bab1");
        assert!(chapter_options(None).is_empty());
    }

    #[test]
    fn test_chapter_prompt() {
        let config = DashboardConfig::default();
        assert_eq!(config.chapter_prompt(false), "Pilih wilayah dahulu");
        assert_eq!(config.chapter_prompt(true), "-- Pilih BAB --");
    }

    #[test]
    fn test_icon_fallback() {
        assert_eq!(icon_glyph("book"), icon_glyph("unknown"));
    }
}
