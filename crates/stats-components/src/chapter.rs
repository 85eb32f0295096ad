//! Selected chapter: info card and one card per chart

use leptos::prelude::*;
use stats_charts::ChartRenderer;
use stats_core::{ChartDescriptor, chart_keys};
use stats_state::use_app_state;

use crate::{DashboardConfig, icon_glyph};

/// Shown until both filters are set
#[component]
pub fn Placeholder(#[prop(optional)] config: Option<DashboardConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let [first, second] = config.empty_lines;

    view! {
        <div class="placeholder-card">
            <div class="placeholder-content">
                <span class="icon-large">"\u{25a6}"</span>
                <p class="mb-2">{first}</p>
                <p>{second}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ChartCard(descriptor: ChartDescriptor) -> impl IntoView {
    let title = descriptor.title.clone();
    let description = descriptor.description.clone().filter(|d| !d.is_empty());

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            {description.map(|d| view! { <p class="chart-description">{d}</p> })}
            <ChartRenderer descriptor=descriptor />
        </div>
    }
}

/// Info card plus charts of the selected chapter; renders nothing while the
/// selection does not resolve
#[component]
pub fn ChapterView() -> impl IntoView {
    let state = use_app_state();
    let selection = state.selection;
    let catalog = state.catalog.clone();

    let info = move || {
        selection.with(|s| {
            let region = s.selected_region(catalog.as_ref())?;
            let chapter = s.selected_chapter(catalog.as_ref())?;
            Some((
                icon_glyph(&region.icon),
                chapter.title.clone(),
                chapter.description.clone(),
            ))
        })
    };

    let cards = move || {
        let charts = state.selected_charts();
        chart_keys(&charts).into_iter().zip(charts).collect::<Vec<_>>()
    };

    move || {
        info().map(|(icon, title, description)| {
            view! {
                <div class="stats-cards-grid">
                    <div
                        class="stat-card blue"
                        style="background: linear-gradient(135deg, var(--color-brand-600), var(--color-brand-800));"
                    >
                        <div class="info-card-inner">
                            <div class="icon-wrapper">{icon}</div>
                            <div class="info-text-wrapper">
                                <p class="label">{title}</p>
                                <p class="desc">{description}</p>
                            </div>
                        </div>
                    </div>

                    <For
                        each=cards.clone()
                        key=|(key, _)| key.clone()
                        children=|(_, descriptor)| view! { <ChartCard descriptor=descriptor /> }
                    />
                </div>
            }
        })
    }
}
