//! Kecamatan statistics dashboard - WASM entry point

use leptos::prelude::*;
use stats_components::{Dashboard, DashboardConfig};
use stats_core::{Catalog, SharedCatalog};
use stats_state::provide_app_state;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let layer = WASMLayer::new(WASMLayerConfigBuilder::new().set_max_level(level).build());
    tracing_subscriber::registry().with(layer).init();
}

/// Embedded catalog, or an empty one plus the error message to show
fn load_catalog() -> (SharedCatalog, Option<String>) {
    match Catalog::embedded() {
        Ok(catalog) => (catalog.into_shared(), None),
        Err(e) => {
            tracing::error!(error = %e, "failed to load catalog");
            (Catalog::default().into_shared(), Some(e.to_string()))
        }
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
fn App(catalog: SharedCatalog, load_error: Option<String>) -> impl IntoView {
    let state = provide_app_state(catalog);
    if let Some(message) = load_error {
        state.set_error(message);
    }

    view! { <Dashboard /> }
}

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    set_document_title(DashboardConfig::default().title);

    let (catalog, load_error) = load_catalog();
    leptos::mount::mount_to_body(move || {
        view! { <App catalog=catalog.clone() load_error=load_error.clone() /> }
    });
}
