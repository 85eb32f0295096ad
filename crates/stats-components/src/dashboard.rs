//! Main dashboard layout component

use leptos::{ev, prelude::*};
use stats_state::use_app_state;

use crate::{ChapterView, DashboardConfig, FilterPanel, Placeholder};

#[component]
pub fn Dashboard(#[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = use_app_state();
    let selection = state.selection;
    let error = state.error;

    let open_filter = move |_: ev::MouseEvent| state.open_filter();

    view! {
        <div class="dashboard-wrapper">
            <div class="dashboard-main-content">
                <div class="mobile-header-controls">
                    <button class="mobile-filter-btn" on:click=open_filter>
                        <span class="filter-icon">"\u{2263}"</span>
                        <span>{config.filter_button}</span>
                    </button>
                </div>

                <div class="dashboard-layout">
                    <FilterPanel config=config />

                    <main class="main-content-area">
                        <div class="dashboard-header">
                            <h1>{config.title}</h1>
                            <p>{config.subtitle}</p>
                        </div>

                        {move || {
                            error.get().map(|e| {
                                view! {
                                    <div class="dashboard-error">
                                        <span class="error-icon">"\u{26a0}"</span>
                                        <span class="error-msg">{e}</span>
                                    </div>
                                }
                            })
                        }}

                        <Show when=move || !selection.with(|s| s.is_complete())>
                            <Placeholder config=config />
                        </Show>

                        <ChapterView />
                    </main>
                </div>
            </div>
        </div>
    }
}
