//! Screen geometry for rendered charts
//!
//! Pure functions: a [`RenderedChart`] in, positioned marks and labels out.
//! The SVG components only draw what these return.

use stats_core::{colors, format_value};

use crate::{
    CATEGORY_AXIS_HEIGHT, CartesianBody, ChartBody, PieBody, PointLabel, RenderedChart,
    ScatterBody, SeriesMark, SliceGeometry, VALUE_AXIS_WIDTH,
    chartkit::{
        BandScale, LinearScale, MonotonePath, PathGenerator, Scale, area_band_path,
        monotone_path_with_gaps, sector_path, top_rounded_rect,
    },
    labels::{bar_top_label, line_vertex_label, pie_slice_label},
};

/// Share of each category slot left empty on both sides of a bar group
const BAR_CATEGORY_GAP: f64 = 0.1;
/// Pixels between bars of one group
const BAR_GAP: f64 = 4.0;
const VALUE_TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Hover target for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f64,
    pub width: f64,
    pub center: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub series: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineMark {
    pub series: usize,
    pub color: String,
    pub stroke_width: f64,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaMark {
    pub series: usize,
    pub color: String,
    pub fill_opacity: f64,
    /// Closed band between this series and the one below it
    pub band: String,
    /// Upper edge, stroked
    pub edge: String,
}

/// Vertex marker or scatter point
#[derive(Debug, Clone, PartialEq)]
pub struct DotMark {
    pub series: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub active_radius: f64,
    pub fill: String,
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartesianScene {
    pub plot: PlotArea,
    pub category_ticks: Vec<AxisTick>,
    pub value_ticks: Vec<AxisTick>,
    pub grid_rows: Vec<f64>,
    pub grid_columns: Vec<f64>,
    pub slots: Vec<Slot>,
    pub bars: Vec<BarMark>,
    pub areas: Vec<AreaMark>,
    pub lines: Vec<LineMark>,
    pub dots: Vec<DotMark>,
    pub labels: Vec<PointLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceMark {
    pub index: usize,
    pub path: String,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieScene {
    pub cx: f64,
    pub cy: f64,
    pub slices: Vec<SliceMark>,
    pub labels: Vec<PointLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Cartesian(CartesianScene),
    Pie(PieScene),
}

/// Lay out a rendered chart inside its own dimensions
pub fn layout(chart: &RenderedChart) -> Scene {
    match &chart.body {
        ChartBody::Cartesian(body) => Scene::Cartesian(layout_cartesian(chart, body)),
        ChartBody::Scatter(body) => Scene::Cartesian(layout_scatter(chart, body)),
        ChartBody::Pie(body) => Scene::Pie(layout_pie(chart, body)),
    }
}

pub fn plot_area(chart: &RenderedChart) -> PlotArea {
    let dims = chart.dimensions;
    let (left, bottom) = if chart.frame.value_axis.is_some() {
        (VALUE_AXIS_WIDTH, CATEGORY_AXIS_HEIGHT)
    } else {
        (0.0, 0.0)
    };

    PlotArea {
        x: dims.margin.left + left,
        y: dims.margin.top,
        width: (dims.inner_width() - left).max(0.0),
        height: (dims.inner_height() - bottom).max(0.0),
    }
}

// ============================================================================
// CARTESIAN
// ============================================================================

/// Category bands plus the value scale fitted to `values`
struct Axes {
    plot: PlotArea,
    band: BandScale,
    value: LinearScale,
}

impl Axes {
    fn new(chart: &RenderedChart, categories: usize, values: impl Iterator<Item = f64>) -> Self {
        let plot = plot_area(chart);
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let max = if max <= min { min + 1.0 } else { max };

        let value = LinearScale::new()
            .domain(min, max)
            .nice(VALUE_TICK_COUNT)
            .range(plot.bottom(), plot.y);
        let band = BandScale::new(categories)
            .range(plot.x, plot.right())
            .padding(0.0, 0.0);

        Self { plot, band, value }
    }

    /// Screen y of zero, kept inside the plot
    fn baseline(&self) -> f64 {
        let (lo, hi) = self.value.domain_bounds();
        self.value.scale(0.0_f64.clamp(lo, hi))
    }

    fn scene(&self, chart: &RenderedChart, categories: &[String]) -> CartesianScene {
        let slots: Vec<Slot> = (0..categories.len())
            .map(|i| Slot {
                x: self.band.scale(i),
                width: self.band.step(),
                center: self.band.scale_center(i),
            })
            .collect();

        let value_ticks: Vec<AxisTick> = self
            .value
            .nice_ticks(VALUE_TICK_COUNT)
            .into_iter()
            .map(|tick| AxisTick {
                position: self.value.scale(tick),
                label: format_value(tick),
            })
            .collect();

        let grid = chart.frame.grid.as_ref();
        let grid_rows = match grid {
            Some(g) if g.horizontal => value_ticks.iter().map(|t| t.position).collect(),
            _ => Vec::new(),
        };
        let grid_columns = match grid {
            Some(g) if g.vertical => slots.iter().map(|s| s.center).collect(),
            _ => Vec::new(),
        };

        CartesianScene {
            plot: self.plot,
            category_ticks: categories
                .iter()
                .zip(&slots)
                .map(|(label, slot)| AxisTick {
                    position: slot.center,
                    label: label.clone(),
                })
                .collect(),
            value_ticks,
            grid_rows,
            grid_columns,
            slots,
            bars: Vec::new(),
            areas: Vec::new(),
            lines: Vec::new(),
            dots: Vec::new(),
            labels: Vec::new(),
        }
    }
}

/// Running stack tops per category, series by series
fn stack_tops(body: &CartesianBody) -> Vec<Vec<(f64, f64)>> {
    let mut base = vec![0.0; body.categories.len()];
    body.series
        .iter()
        .map(|series| {
            base.iter_mut()
                .enumerate()
                .map(|(i, b)| {
                    let lower = *b;
                    *b += series.values.get(i).copied().flatten().unwrap_or(0.0);
                    (lower, *b)
                })
                .collect()
        })
        .collect()
}

fn layout_cartesian(chart: &RenderedChart, body: &CartesianBody) -> CartesianScene {
    let stacks = body.stacked.then(|| stack_tops(body));
    let values: Vec<f64> = match &stacks {
        Some(stacks) => stacks.iter().flatten().map(|&(_, upper)| upper).collect(),
        None => body
            .series
            .iter()
            .flat_map(|s| s.values.iter().flatten().copied())
            .collect(),
    };

    let axes = Axes::new(chart, body.categories.len(), values.into_iter());
    let mut scene = axes.scene(chart, &body.categories);
    let baseline = axes.baseline();
    let series_count = body.series.len().max(1) as f64;

    for (s, series) in body.series.iter().enumerate() {
        match &series.mark {
            SeriesMark::Bar { corner_radius } => {
                let group = axes.band.step() * (1.0 - 2.0 * BAR_CATEGORY_GAP);
                let width = ((group - BAR_GAP * (series_count - 1.0)) / series_count).max(1.0);

                for (i, value) in series.values.iter().enumerate() {
                    let Some(v) = *value else { continue };
                    let x = axes.band.scale(i)
                        + axes.band.step() * BAR_CATEGORY_GAP
                        + s as f64 * (width + BAR_GAP);
                    let top = axes.value.scale(v);
                    let (y, height) = (top.min(baseline), (baseline - top).abs());

                    scene.bars.push(BarMark {
                        series: s,
                        index: i,
                        x,
                        y,
                        width,
                        height,
                        color: series.color.clone(),
                        path: top_rounded_rect(x, y, width, height, *corner_radius),
                    });
                    scene.labels.extend(bar_top_label(x, y, width, Some(v)));
                }
            }
            SeriesMark::Line {
                stroke_width,
                dot_radius,
                active_dot_radius,
            } => {
                let points: Vec<Option<(f64, f64)>> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| v.map(|v| (axes.band.scale_center(i), axes.value.scale(v))))
                    .collect();

                scene.lines.push(LineMark {
                    series: s,
                    color: series.color.clone(),
                    stroke_width: *stroke_width,
                    path: monotone_path_with_gaps(&points),
                });

                for (i, point) in points.iter().enumerate() {
                    let Some((x, y)) = *point else { continue };
                    scene.dots.push(DotMark {
                        series: s,
                        index: i,
                        x,
                        y,
                        radius: *dot_radius,
                        active_radius: *active_dot_radius,
                        fill: colors::BG_CARD.to_string(),
                        stroke: series.color.clone(),
                    });
                    scene.labels.extend(line_vertex_label(x, y, series.values[i]));
                }
            }
            SeriesMark::Area { fill_opacity, .. } => {
                let to_points = |pick: fn(&(f64, f64)) -> f64, stack: &[(f64, f64)]| {
                    stack
                        .iter()
                        .enumerate()
                        .map(|(i, pair)| (axes.band.scale_center(i), axes.value.scale(pick(pair))))
                        .collect::<Vec<_>>()
                };
                let own;
                let stack: &[(f64, f64)] = match &stacks {
                    Some(stacks) => &stacks[s],
                    None => {
                        own = series
                            .values
                            .iter()
                            .map(|v| (0.0, v.unwrap_or(0.0)))
                            .collect::<Vec<_>>();
                        &own
                    }
                };
                let upper = to_points(|p| p.1, stack);
                let lower = to_points(|p| p.0, stack);

                scene.areas.push(AreaMark {
                    series: s,
                    color: series.color.clone(),
                    fill_opacity: *fill_opacity,
                    band: area_band_path(&upper, &lower),
                    edge: MonotonePath.generate(&upper),
                });
            }
        }
    }

    scene
}

fn layout_scatter(chart: &RenderedChart, body: &ScatterBody) -> CartesianScene {
    let categories: Vec<String> = body.points.iter().map(|p| p.category.clone()).collect();
    let axes = Axes::new(
        chart,
        categories.len(),
        body.points.iter().filter_map(|p| p.value),
    );
    let mut scene = axes.scene(chart, &categories);

    for (i, point) in body.points.iter().enumerate() {
        let Some(v) = point.value else { continue };
        scene.dots.push(DotMark {
            series: 0,
            index: i,
            x: axes.band.scale_center(i),
            y: axes.value.scale(v),
            radius: body.radius,
            active_radius: body.radius,
            fill: point.color.clone(),
            stroke: point.color.clone(),
        });
    }

    scene
}

// ============================================================================
// PIE
// ============================================================================

/// Sector angles in degrees: (start, end) per slice.
///
/// Slices run counter-clockwise from 0 to 360. Only non-zero slices consume
/// padding, so zero-value slices collapse onto their neighbour's edge.
pub fn slice_angles(body: &PieBody) -> Vec<(f64, f64)> {
    let non_zero = body.slices.iter().filter(|s| s.value != 0.0).count() as f64;
    let real_total = 360.0 - non_zero * body.padding_angle;

    let mut angles: Vec<(f64, f64)> = Vec::with_capacity(body.slices.len());
    for slice in &body.slices {
        let start = match angles.last() {
            Some(&(_, prev_end)) if slice.value != 0.0 => prev_end + body.padding_angle,
            Some(&(_, prev_end)) => prev_end,
            None => 0.0,
        };
        angles.push((start, start + slice.percent * real_total));
    }
    angles
}

fn layout_pie(chart: &RenderedChart, body: &PieBody) -> PieScene {
    let dims = chart.dimensions;
    let cx = dims.margin.left + dims.inner_width() / 2.0;
    let cy = dims.margin.top + dims.inner_height() / 2.0;

    let mut slices = Vec::with_capacity(body.slices.len());
    let mut labels = Vec::with_capacity(body.slices.len());

    for (index, (slice, (start, end))) in body.slices.iter().zip(slice_angles(body)).enumerate() {
        let mid = (start + end) / 2.0;
        slices.push(SliceMark {
            index,
            path: sector_path(cx, cy, body.inner_radius, body.outer_radius, start, end),
            color: slice.color.clone(),
            start_angle: start,
            end_angle: end,
            mid_angle: mid,
        });
        labels.push(pie_slice_label(
            SliceGeometry {
                cx,
                cy,
                outer_radius: body.outer_radius,
                mid_angle: mid,
            },
            &slice.name,
            slice.percent,
        ));
    }

    PieScene {
        cx,
        cy,
        slices,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use stats_core::{ChartDescriptor, DataRow, PieSlice};

    fn bar_chart(values: &[Option<f64>]) -> RenderedChart {
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let row = DataRow::new().with("desa", format!("D{}", i).as_str());
                match v {
                    Some(v) => row.with("jumlah", *v),
                    None => row,
                }
            })
            .collect();
        render(
            &ChartDescriptor::new("b", "bar")
                .with_x_axis_key("desa")
                .with_keys(["jumlah"])
                .with_rows(rows),
        )
        .unwrap()
    }

    fn cartesian(scene: Scene) -> CartesianScene {
        match scene {
            Scene::Cartesian(scene) => scene,
            Scene::Pie(_) => panic!("expected cartesian scene"),
        }
    }

    #[test]
    fn test_zero_bar_has_no_label() {
        let scene = cartesian(layout(&bar_chart(&[Some(0.0), Some(5.0), None])));

        // zero still draws a (flat) bar, the absent value does not
        assert_eq!(scene.bars.len(), 2);
        assert_eq!(scene.labels.len(), 1);

        let label = &scene.labels[0];
        let bar = &scene.bars[1];
        assert_eq!(label.text, "5");
        assert!(label.y < bar.y);
        assert!((label.x - (bar.x + bar.width / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_bars_stand_on_baseline() {
        let chart = bar_chart(&[Some(2.0), Some(8.0)]);
        let scene = cartesian(layout(&chart));
        let plot = plot_area(&chart);

        for bar in &scene.bars {
            assert!((bar.y + bar.height - plot.bottom()).abs() < 1e-9);
        }
        assert!(scene.bars[1].height > scene.bars[0].height);
        // bar charts suppress vertical grid lines
        assert!(scene.grid_columns.is_empty());
        assert!(!scene.grid_rows.is_empty());
    }

    #[test]
    fn test_line_gap_and_labels() {
        let descriptor = ChartDescriptor::new("l", "line")
            .with_x_axis_key("tahun")
            .with_keys(["jumlah"])
            .with_rows(vec![
                DataRow::new().with("tahun", "2022").with("jumlah", 10.0),
                DataRow::new().with("tahun", "2023"),
                DataRow::new().with("tahun", "2024").with("jumlah", 12.0),
            ]);
        let scene = cartesian(layout(&render(&descriptor).unwrap()));

        assert_eq!(scene.dots.len(), 2);
        let texts: Vec<_> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["10", "12"]);
        assert!(!texts.iter().any(|t| *t == "null" || *t == "undefined"));
        assert_eq!(scene.lines[0].path.matches('M').count(), 2);
    }

    #[test]
    fn test_stacked_area_tops() {
        let descriptor = ChartDescriptor::new("a", "area")
            .with_x_axis_key("tahun")
            .with_keys(["sawah", "kebun"])
            .with_rows(vec![
                DataRow::new().with("tahun", "2023").with("sawah", 1.0).with("kebun", 2.0),
                DataRow::new().with("tahun", "2024").with("sawah", 3.0),
            ]);
        let chart = render(&descriptor).unwrap();
        let ChartBody::Cartesian(body) = &chart.body else {
            panic!("expected cartesian body");
        };

        let stacks = stack_tops(body);
        assert_eq!(stacks[0], vec![(0.0, 1.0), (0.0, 3.0)]);
        assert_eq!(stacks[1], vec![(1.0, 3.0), (3.0, 3.0)]);

        let scene = cartesian(layout(&chart));
        assert_eq!(scene.areas.len(), 2);
        assert!(scene.labels.is_empty());
        // area shows vertical grid lines
        assert_eq!(scene.grid_columns.len(), 2);
    }

    #[test]
    fn test_pie_angles_with_padding() {
        let descriptor = ChartDescriptor::new("p", "pie").with_rows(vec![
            PieSlice::new("A", 25.0).to_row(),
            PieSlice::new("B", 25.0).to_row(),
            PieSlice::new("C", 50.0).to_row(),
        ]);
        let chart = render(&descriptor).unwrap();
        let ChartBody::Pie(body) = &chart.body else {
            panic!("expected pie body");
        };

        let angles = slice_angles(body);
        // 360 - 3 * 5 degrees shared by value
        assert_eq!(angles[0], (0.0, 86.25));
        assert_eq!(angles[1], (91.25, 177.5));
        assert_eq!(angles[2], (182.5, 355.0));

        let Scene::Pie(scene) = layout(&chart) else {
            panic!("expected pie scene");
        };
        assert_eq!(scene.labels[0].text, "A (25.0%)");
        assert_eq!(scene.labels[2].text, "C (50.0%)");
        assert_eq!(scene.slices.len(), 3);
    }

    #[test]
    fn test_zero_slice_still_labelled() {
        let descriptor = ChartDescriptor::new("p", "pie").with_rows(vec![
            PieSlice::new("Dalam Kawasan Hutan", 0.0).to_row(),
            PieSlice::new("Luar Kawasan Hutan", 12.0).to_row(),
        ]);
        let chart = render(&descriptor).unwrap();
        let Scene::Pie(scene) = layout(&chart) else {
            panic!("expected pie scene");
        };

        assert!(scene.slices[0].path.is_empty());
        assert_eq!(scene.labels[0].text, "Dalam Kawasan Hutan (0.0%)");
        assert_eq!(scene.labels[1].text, "Luar Kawasan Hutan (100.0%)");
    }

    #[test]
    fn test_scatter_points_cycle_colors() {
        let rows = (0..7)
            .map(|i| DataRow::new().with("desa", format!("D{}", i).as_str()).with("y", i as f64))
            .collect();
        let chart = render(
            &ChartDescriptor::new("s", "scatter")
                .with_x_axis_key("desa")
                .with_keys(["y", "ignored"])
                .with_rows(rows),
        )
        .unwrap();
        let scene = cartesian(layout(&chart));

        assert_eq!(scene.dots.len(), 7);
        assert_eq!(scene.dots[6].fill, scene.dots[0].fill);
        assert_eq!(scene.category_ticks[3].label, "D3");
    }
}
