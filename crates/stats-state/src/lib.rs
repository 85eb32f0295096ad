//! # stats-state
//!
//! Reactive state for the statistics dashboard.
//! The region/chapter rule lives in the plain [`Selection`] value; [`AppState`]
//! wraps it in a signal so both fields always change together.

pub mod selection;

pub use selection::*;

use leptos::prelude::*;
use stats_core::{Catalog, ChartDescriptor, SharedCatalog};

// ============================================================================
// UI STATE
// ============================================================================

/// Shell chrome state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    /// Mobile filter drawer
    pub filter_open: bool,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// Read-only content source
    pub catalog: SharedCatalog,
    pub selection: RwSignal<Selection>,
    pub ui: RwSignal<UiState>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            selection: RwSignal::new(Selection::new()),
            ui: RwSignal::new(UiState::default()),
            error: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_region(&self, region: impl Into<String>) {
        let region = region.into();
        self.selection.update(|s| s.select_region(region));
    }

    /// Also closes the mobile filter drawer
    pub fn select_chapter(&self, chapter: impl Into<String>) {
        let chapter = chapter.into();
        self.selection.update(|s| s.select_chapter(chapter));
        self.close_filter();
    }

    /// Charts for the current selection (tracks the selection signal)
    pub fn selected_charts(&self) -> Vec<ChartDescriptor> {
        self.selection
            .with(|s| s.charts(self.catalog.as_ref()).to_vec())
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub fn open_filter(&self) {
        self.ui.update(|ui| ui.filter_open = true);
    }

    pub fn close_filter(&self) {
        self.ui.update(|ui| ui.filter_open = false);
    }

    pub fn is_filter_open(&self) -> bool {
        self.ui.get().filter_open
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default().into_shared())
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state(catalog: SharedCatalog) -> AppState {
    let state = AppState::new(catalog);
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Try to get app state from context (returns None if not provided)
pub fn try_use_app_state() -> Option<AppState> {
    use_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::{Chapter, Region};

    fn state() -> AppState {
        let catalog = Catalog::new(vec![Region {
            key: "kanigoro".into(),
            title: "Kanigoro".into(),
            chapters: vec![Chapter {
                key: "bab3".into(),
                title: "Penduduk".into(),
                charts: vec![
                    ChartDescriptor::new("penduduk", "bar"),
                    ChartDescriptor::new("penduduk", "pie"),
                ],
                ..Default::default()
            }],
            ..Default::default()
        }]);
        AppState::new(catalog.into_shared())
    }

    #[test]
    fn test_chapter_selection_closes_drawer() {
        let state = state();
        state.open_filter();
        assert!(state.is_filter_open());

        state.select_region("kanigoro");
        assert!(state.is_filter_open());

        state.select_chapter("bab3");
        assert!(!state.is_filter_open());
        assert_eq!(state.selected_charts().len(), 2);
    }

    #[test]
    fn test_region_change_resets_charts() {
        let state = state();
        state.select_region("kanigoro");
        state.select_chapter("bab3");
        state.select_region("kanigoro");

        assert_eq!(state.selection.get_untracked().chapter(), "");
        assert!(state.selected_charts().is_empty());
    }

    #[test]
    fn test_error_signal() {
        let state = AppState::default();
        state.set_error("catalog has no regions");
        assert_eq!(state.error.get_untracked().as_deref(), Some("catalog has no regions"));
        state.clear_error();
        assert!(state.error.get_untracked().is_none());
    }
}
