//! SVG chart components
//!
//! [`ChartRenderer`] is the entry point used by the dashboard: it dispatches a
//! descriptor and either draws the chart or shows the unsupported-type notice.

use leptos::prelude::*;
use stats_core::ChartDescriptor;

use crate::{
    CartesianScene, ChartBody, ChartDimensions, ChartFrame, ChartTooltip, Cursor, PieScene,
    PointLabel, RenderedChart, Scene, layout, render, tooltip_content,
};

/// Chart for a descriptor, or the notice for an unknown type
#[component]
pub fn ChartRenderer(descriptor: ChartDescriptor) -> impl IntoView {
    match render(&descriptor) {
        Ok(chart) => view! { <ChartView chart=chart /> }.into_any(),
        Err(notice) => view! {
            <p class="chart-unsupported" data-chart-type=notice.tag>
                {notice.message}
            </p>
        }
        .into_any(),
    }
}

/// Responsive SVG drawing of a rendered chart with hover tooltip and legend
#[component]
pub fn ChartView(chart: RenderedChart) -> impl IntoView {
    let dims = chart.dimensions;
    let frame = chart.frame.clone();
    let legend_items = chart.legend_items();
    let class = format!("chart-view {}", chart.kind.css_class());
    let slice_stroke = match &chart.body {
        ChartBody::Pie(body) => (body.stroke, body.stroke_width),
        _ => ("none", 0.0),
    };

    let scene = layout(&chart);
    let anchors = tooltip_anchors(&scene, dims);
    let hovered = RwSignal::new(None::<usize>);

    let chart = StoredValue::new(chart);
    let font_size = frame.tooltip_font_size;
    let tooltip = move || {
        let index = hovered.get()?;
        let content = chart.with_value(|chart| tooltip_content(chart, index))?;
        let anchor = *anchors.get(index)?;
        Some(view! { <ChartTooltip content=content anchor=anchor font_size=font_size /> })
    };

    let marks = match scene {
        Scene::Cartesian(scene) => cartesian_marks(scene, frame.clone(), hovered).into_any(),
        Scene::Pie(scene) => pie_marks(scene, slice_stroke, hovered).into_any(),
    };

    let legend = frame.legend.clone().map(|style| {
        view! {
            <div class="chart-legend" style=style.css()>
                {legend_items
                    .into_iter()
                    .map(|(name, color)| {
                        view! {
                            <span class="chart-legend-item">
                                <span
                                    class="chart-legend-swatch"
                                    style=format!("background: {};", color)
                                ></span>
                                {name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class=class style="position: relative; width: 100%;">
            <svg
                viewBox=dims.viewbox()
                preserveAspectRatio="xMidYMid meet"
                style="width: 100%; height: auto;"
                on:mouseleave=move |_| hovered.set(None)
            >
                {marks}
            </svg>
            {tooltip}
            {legend}
        </div>
    }
}

/// Tooltip anchor per hover index, as fractions of the chart size
fn tooltip_anchors(scene: &Scene, dims: ChartDimensions) -> Vec<(f64, f64)> {
    let (w, h) = (dims.width.max(1.0), dims.height.max(1.0));
    match scene {
        Scene::Cartesian(scene) => {
            let y = scene.plot.y + scene.plot.height / 2.0;
            scene.slots.iter().map(|slot| (slot.center / w, y / h)).collect()
        }
        Scene::Pie(scene) => scene
            .slices
            .iter()
            .map(|slice| {
                // halfway between the center and the slice label
                let (lx, ly) = scene
                    .labels
                    .get(slice.index)
                    .map(|label| (label.x, label.y))
                    .unwrap_or((scene.cx, scene.cy));
                ((scene.cx + lx) / 2.0 / w, (scene.cy + ly) / 2.0 / h)
            })
            .collect(),
    }
}

fn label_view(label: PointLabel) -> impl IntoView {
    let baseline = if label.centered { "central" } else { "auto" };
    view! {
        <text
            x=label.x
            y=label.y
            text-anchor=label.anchor.as_svg()
            dominant-baseline=baseline
            font-size=label.font_size
            font-weight=label.font_weight
            fill=label.fill
        >
            {label.text}
        </text>
    }
}

fn cartesian_marks(
    scene: CartesianScene,
    frame: ChartFrame,
    hovered: RwSignal<Option<usize>>,
) -> impl IntoView {
    let plot = scene.plot;

    let grid = frame.grid.clone().map(|grid| {
        let rows = scene
            .grid_rows
            .iter()
            .map(|&y| {
                view! {
                    <line
                        x1=plot.x y1=y x2=plot.right() y2=y
                        stroke=grid.stroke
                        stroke-dasharray=grid.dash
                    />
                }
            })
            .collect_view();
        let columns = scene
            .grid_columns
            .iter()
            .map(|&x| {
                view! {
                    <line
                        x1=x y1=plot.y x2=x y2=plot.bottom()
                        stroke=grid.stroke
                        stroke-dasharray=grid.dash
                    />
                }
            })
            .collect_view();
        view! { <g class="chart-grid">{rows}{columns}</g> }
    });

    let category_axis = frame.category_axis.clone().map(|axis| {
        scene
            .category_ticks
            .iter()
            .map(|tick| {
                view! {
                    <text
                        x=tick.position
                        y=plot.bottom() + axis.tick.font_size + axis.dy
                        text-anchor="middle"
                        fill=axis.tick.fill
                        font-size=axis.tick.font_size
                        font-weight=axis.tick.font_weight
                    >
                        {tick.label.clone()}
                    </text>
                }
            })
            .collect_view()
    });

    let value_axis = frame.value_axis.clone().map(|axis| {
        scene
            .value_ticks
            .iter()
            .map(|tick| {
                view! {
                    <text
                        x=plot.x - 8.0
                        y=tick.position
                        dy="0.32em"
                        text-anchor="end"
                        fill=axis.tick.fill
                        font-size=axis.tick.font_size
                        font-weight=axis.tick.font_weight
                    >
                        {tick.label.clone()}
                    </text>
                }
            })
            .collect_view()
    });

    let slots = scene.slots.clone();
    let cursor = frame.cursor;
    let cursor_view = move || {
        let slot = *slots.get(hovered.get()?)?;
        match cursor {
            Cursor::Band { fill } => Some(
                view! {
                    <rect x=slot.x y=plot.y width=slot.width height=plot.height fill=fill />
                }
                .into_any(),
            ),
            Cursor::Line | Cursor::Dashed => {
                let dash = if cursor == Cursor::Dashed { "3 3" } else { "none" };
                Some(
                    view! {
                        <line
                            x1=slot.center y1=plot.y x2=slot.center y2=plot.bottom()
                            stroke="#ccc"
                            stroke-dasharray=dash
                        />
                    }
                    .into_any(),
                )
            }
            Cursor::None => None,
        }
    };

    let areas = scene
        .areas
        .into_iter()
        .map(|area| {
            view! {
                <g class="chart-area">
                    <path d=area.band fill=area.color.clone() fill-opacity=area.fill_opacity stroke="none" />
                    <path d=area.edge fill="none" stroke=area.color stroke-width="2" />
                </g>
            }
        })
        .collect_view();

    let bars = scene
        .bars
        .into_iter()
        .map(|bar| view! { <path class="chart-bar" d=bar.path fill=bar.color /> })
        .collect_view();

    let lines = scene
        .lines
        .into_iter()
        .map(|line| {
            view! {
                <path
                    class="chart-line"
                    d=line.path
                    fill="none"
                    stroke=line.color
                    stroke-width=line.stroke_width
                />
            }
        })
        .collect_view();

    let dots = scene
        .dots
        .into_iter()
        .map(|dot| {
            let (index, radius, active) = (dot.index, dot.radius, dot.active_radius);
            view! {
                <circle
                    cx=dot.x
                    cy=dot.y
                    r=move || if hovered.get() == Some(index) { active } else { radius }
                    fill=dot.fill
                    stroke=dot.stroke
                    stroke-width="2"
                />
            }
        })
        .collect_view();

    let labels = scene.labels.into_iter().map(label_view).collect_view();

    let hover_targets = scene
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            view! {
                <rect
                    x=slot.x y=plot.y width=slot.width height=plot.height
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(index))
                />
            }
        })
        .collect_view();

    view! {
        {grid}
        <g class="chart-cursor">{cursor_view}</g>
        <g class="chart-marks">{areas}{bars}{lines}{dots}</g>
        <g class="chart-labels">{labels}</g>
        <g class="chart-axis chart-axis-category">{category_axis}</g>
        <g class="chart-axis chart-axis-value">{value_axis}</g>
        <g class="chart-hover">{hover_targets}</g>
    }
}

fn pie_marks(
    scene: PieScene,
    (stroke, stroke_width): (&'static str, f64),
    hovered: RwSignal<Option<usize>>,
) -> impl IntoView {
    let slices = scene
        .slices
        .into_iter()
        .map(|slice| {
            let index = slice.index;
            view! {
                <path
                    class="chart-slice"
                    d=slice.path
                    fill=slice.color
                    stroke=stroke
                    stroke-width=stroke_width
                    on:mouseenter=move |_| hovered.set(Some(index))
                />
            }
        })
        .collect_view();

    let labels = scene.labels.into_iter().map(label_view).collect_view();

    view! {
        <g class="chart-slices">{slices}</g>
        <g class="chart-labels">{labels}</g>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::DataRow;

    #[test]
    fn test_cartesian_marks_outlive_frame() {
        let descriptor = ChartDescriptor::new("b", "bar")
            .with_x_axis_key("desa")
            .with_keys(["jumlah"])
            .with_rows(vec![DataRow::new().with("desa", "Tlogo").with("jumlah", 4.0)]);
        let chart = render(&descriptor).unwrap();
        let Scene::Cartesian(scene) = layout(&chart) else {
            panic!("expected cartesian scene");
        };

        // the frame is gone before the marks are used
        let marks = {
            let frame = chart.frame.clone();
            cartesian_marks(scene, frame, RwSignal::new(None)).into_any()
        };
        drop(chart);
        let _ = marks;
    }
}
