//! Cascading region/chapter filter

use leptos::{ev, prelude::*};
use stats_state::use_app_state;

use crate::{DashboardConfig, SelectOption, chapter_options, region_options};

fn options_view(options: Vec<SelectOption>) -> impl IntoView {
    options
        .into_iter()
        .map(|o| view! { <option value=o.value>{o.label}</option> })
        .collect_view()
}

/// Filter card; slides in as a drawer on small screens
#[component]
pub fn FilterPanel(#[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = use_app_state();
    let selection = state.selection;
    let ui = state.ui;

    let regions = region_options(state.catalog.as_ref());
    let catalog = state.catalog.clone();
    let chapters = move || {
        selection.with(|s| chapter_options(s.selected_region(catalog.as_ref())))
    };
    let has_region = move || selection.with(|s| s.has_region());

    let on_region = {
        let state = state.clone();
        move |event: ev::Event| state.select_region(event_target_value(&event))
    };
    let on_chapter = {
        let state = state.clone();
        move |event: ev::Event| state.select_chapter(event_target_value(&event))
    };
    let close = move |_: ev::MouseEvent| ui.update(|ui| ui.filter_open = false);

    view! {
        <Show when=move || ui.get().filter_open>
            <div class="filter-backdrop" on:click=close></div>
        </Show>

        <aside class=move || {
            if ui.get().filter_open {
                "filter-section-card mobile-open"
            } else {
                "filter-section-card"
            }
        }>
            <div class="filter-header-content">
                <div class="filter-header-title-group">
                    <span class="filter-header-icon">"\u{2263}"</span>
                    <h3 class="filter-header-title">{config.filter_title}</h3>
                </div>
                <button class="mobile-close-btn" on:click=close>"\u{2715}"</button>
            </div>

            <div class="filter-grid-container">
                <div class="filter-group">
                    <label>{config.region_label}</label>
                    <div class="filter-select-wrapper">
                        <select
                            class="filter-select"
                            prop:value=move || selection.with(|s| s.region().to_string())
                            on:change=on_region
                        >
                            <option value="">{config.region_placeholder}</option>
                            {options_view(regions)}
                        </select>
                    </div>
                </div>

                <div class="filter-group">
                    <label>{config.chapter_label}</label>
                    <div class="filter-select-wrapper">
                        <select
                            class=move || {
                                if has_region() { "filter-select" } else { "filter-select dropdown-disabled" }
                            }
                            disabled=move || !has_region()
                            prop:value=move || selection.with(|s| s.chapter().to_string())
                            on:change=on_chapter
                        >
                            <option value="">{move || config.chapter_prompt(has_region())}</option>
                            {move || options_view(chapters())}
                        </select>
                    </div>
                </div>
            </div>
        </aside>
    }
}
