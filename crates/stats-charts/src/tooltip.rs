//! Hover content for rendered charts

use leptos::prelude::*;
use stats_core::format_value;

use crate::{ChartBody, RenderedChart};

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub color: String,
}

/// What the tooltip shows for one hovered category or slice
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub label: Option<String>,
    pub lines: Vec<TooltipLine>,
}

/// Tooltip for the category (or slice) at `index`.
///
/// Series with no value at the index are left out; `None` means there is
/// nothing at that index at all.
pub fn tooltip_content(chart: &RenderedChart, index: usize) -> Option<TooltipContent> {
    match &chart.body {
        ChartBody::Cartesian(body) => {
            let label = body.categories.get(index)?.clone();
            let lines = body
                .series
                .iter()
                .filter_map(|series| {
                    let value = series.values.get(index).copied().flatten()?;
                    Some(TooltipLine {
                        text: format!("{}: {}", series.name, format_value(value)),
                        color: series.color.clone(),
                    })
                })
                .collect();
            Some(TooltipContent {
                label: Some(label),
                lines,
            })
        }
        ChartBody::Pie(body) => {
            let slice = body.slices.get(index)?;
            Some(TooltipContent {
                label: None,
                lines: vec![TooltipLine {
                    text: format!("{}: {}", slice.name, format_value(slice.value)),
                    color: slice.color.clone(),
                }],
            })
        }
        ChartBody::Scatter(body) => {
            let point = body.points.get(index)?;
            let lines = point
                .value
                .map(|value| TooltipLine {
                    text: format!("{}: {}", body.y_key, format_value(value)),
                    color: point.color.clone(),
                })
                .into_iter()
                .collect();
            Some(TooltipContent {
                label: Some(point.category.clone()),
                lines,
            })
        }
    }
}

/// Floating tooltip box positioned in chart (viewBox) percentages
#[component]
pub fn ChartTooltip(
    content: TooltipContent,
    /// Anchor as a fraction of chart width/height
    anchor: (f64, f64),
    font_size: f64,
) -> impl IntoView {
    let (fx, fy) = anchor;
    // flip to the other side past the middle so the box stays inside the card
    let shift_x = if fx > 0.5 { "-105%" } else { "5%" };
    let style = format!(
        "position: absolute; left: {:.2}%; top: {:.2}%; transform: translate({}, -50%); \
         font-size: {}px; pointer-events: none;",
        fx * 100.0,
        fy * 100.0,
        shift_x,
        font_size
    );

    view! {
        <div class="chart-tooltip" style=style>
            {content.label.map(|label| view! { <p class="chart-tooltip-label">{label}</p> })}
            <ul class="chart-tooltip-items">
                {content
                    .lines
                    .into_iter()
                    .map(|line| {
                        view! {
                            <li style=format!("color: {};", line.color)>{line.text}</li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
