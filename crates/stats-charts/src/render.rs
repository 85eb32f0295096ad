//! Chart renderer: descriptor to fully configured chart
//!
//! [`render`] is the single entry point. It resolves the descriptor's type tag
//! into a [`ChartKind`] and builds the series encoding for that kind on top of
//! the shared [`ChartFrame`]. Unknown tags produce an [`UnsupportedChartNotice`]
//! instead of failing.

use stats_core::{ChartDescriptor, ChartKind, UnknownChartKind};

use crate::{ChartDimensions, ChartFrame, ChartTheme};

/// Placeholder text shown instead of an unrenderable chart
pub const UNSUPPORTED_MESSAGE: &str = "Tipe chart tidak dikenal.";

/// Non-fatal result for a descriptor whose type is outside the known set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedChartNotice {
    pub chart_id: String,
    pub tag: String,
    pub message: &'static str,
}

impl UnsupportedChartNotice {
    fn new(descriptor: &ChartDescriptor, err: UnknownChartKind) -> Self {
        Self {
            chart_id: descriptor.id.clone(),
            tag: err.0,
            message: UNSUPPORTED_MESSAGE,
        }
    }
}

/// Visual encoding of one cartesian series
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesMark {
    Bar {
        corner_radius: f64,
    },
    Line {
        stroke_width: f64,
        dot_radius: f64,
        active_dot_radius: f64,
    },
    Area {
        fill_opacity: f64,
        /// All areas of one chart share this group
        stack_id: &'static str,
    },
}

/// One named, colored data track
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: String,
    pub name: String,
    pub color: String,
    /// One entry per category; `None` is a gap
    pub values: Vec<Option<f64>>,
    pub mark: SeriesMark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartesianBody {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub stacked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Share of the total, `0..=1`
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieBody {
    pub slices: Vec<RenderedSlice>,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub padding_angle: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub category: String,
    pub value: Option<f64>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterBody {
    pub name: String,
    /// Field plotted on the value axis (`keys[0]`)
    pub y_key: String,
    pub points: Vec<ScatterPoint>,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Cartesian(CartesianBody),
    Pie(PieBody),
    Scatter(ScatterBody),
}

/// A chart ready to be laid out and drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub id: String,
    pub kind: ChartKind,
    pub dimensions: ChartDimensions,
    pub frame: ChartFrame,
    pub body: ChartBody,
}

impl RenderedChart {
    /// Legend entries as (name, color) in series order
    pub fn legend_items(&self) -> Vec<(String, String)> {
        match &self.body {
            ChartBody::Cartesian(body) => body
                .series
                .iter()
                .map(|s| (s.name.clone(), s.color.clone()))
                .collect(),
            ChartBody::Pie(body) => body
                .slices
                .iter()
                .map(|s| (s.name.clone(), s.color.clone()))
                .collect(),
            ChartBody::Scatter(body) => body
                .points
                .first()
                .map(|p| vec![(body.name.clone(), p.color.clone())])
                .unwrap_or_default(),
        }
    }
}

/// Render with the default theme
pub fn render(descriptor: &ChartDescriptor) -> Result<RenderedChart, UnsupportedChartNotice> {
    render_with(descriptor, &ChartTheme::default())
}

pub fn render_with(
    descriptor: &ChartDescriptor,
    theme: &ChartTheme,
) -> Result<RenderedChart, UnsupportedChartNotice> {
    let kind = match descriptor.chart_kind() {
        Ok(kind) => kind,
        Err(err) => {
            tracing::warn!(chart = %descriptor.id, tag = %err.0, "unsupported chart type");
            return Err(UnsupportedChartNotice::new(descriptor, err));
        }
    };

    let body = match kind {
        ChartKind::Bar => cartesian(
            descriptor,
            kind,
            theme,
            SeriesMark::Bar {
                corner_radius: theme.bar_radius,
            },
        ),
        ChartKind::Line => cartesian(
            descriptor,
            kind,
            theme,
            SeriesMark::Line {
                stroke_width: theme.line_stroke_width,
                dot_radius: theme.dot_radius,
                active_dot_radius: theme.active_dot_radius,
            },
        ),
        ChartKind::Area => cartesian(
            descriptor,
            kind,
            theme,
            SeriesMark::Area {
                fill_opacity: 1.0,
                stack_id: "1",
            },
        ),
        ChartKind::LineArea => cartesian(
            descriptor,
            kind,
            theme,
            SeriesMark::Area {
                fill_opacity: theme.line_area_opacity,
                stack_id: "1",
            },
        ),
        ChartKind::Pie => pie(descriptor, theme),
        ChartKind::Scatter => scatter(descriptor, theme),
    };

    let frame = ChartFrame::for_kind(kind, theme);
    Ok(RenderedChart {
        id: descriptor.id.clone(),
        kind,
        dimensions: ChartDimensions::new(theme.width, theme.height).with_margin(frame.margin),
        frame,
        body,
    })
}

fn cartesian(
    descriptor: &ChartDescriptor,
    kind: ChartKind,
    theme: &ChartTheme,
    mark: SeriesMark,
) -> ChartBody {
    let naming = kind.series_naming();
    let series = descriptor
        .keys
        .iter()
        .enumerate()
        .map(|(index, key)| Series {
            key: key.clone(),
            name: naming.apply(key),
            color: theme.color(index).to_string(),
            values: descriptor.series_values(key),
            mark: mark.clone(),
        })
        .collect();

    ChartBody::Cartesian(CartesianBody {
        categories: descriptor.categories(),
        series,
        stacked: kind.is_stacked(),
    })
}

fn pie(descriptor: &ChartDescriptor, theme: &ChartTheme) -> ChartBody {
    let slices = descriptor.pie_slices();
    let total: f64 = slices.iter().map(|s| s.value).sum();

    let slices = slices
        .into_iter()
        .enumerate()
        .map(|(index, slice)| RenderedSlice {
            percent: if total != 0.0 { slice.value / total } else { 0.0 },
            color: slice
                .color
                .unwrap_or_else(|| theme.color(index).to_string()),
            name: slice.name,
            value: slice.value,
        })
        .collect();

    ChartBody::Pie(PieBody {
        slices,
        inner_radius: theme.pie.inner_radius,
        outer_radius: theme.pie.outer_radius,
        padding_angle: theme.pie.padding_angle,
        stroke: theme.pie.stroke,
        stroke_width: theme.pie.stroke_width,
    })
}

fn scatter(descriptor: &ChartDescriptor, theme: &ChartTheme) -> ChartBody {
    // only the first key is plotted
    let y_key = descriptor.keys.first().cloned().unwrap_or_default();
    let points = descriptor
        .categories()
        .into_iter()
        .zip(descriptor.series_values(&y_key))
        .enumerate()
        .map(|(index, (category, value))| ScatterPoint {
            category,
            value,
            color: theme.color(index).to_string(),
        })
        .collect();

    ChartBody::Scatter(ScatterBody {
        name: "Data".to_string(),
        y_key,
        points,
        radius: theme.scatter_radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::{DataRow, PieSlice, colors};

    fn keyed(kind: &str, keys: &[&str]) -> ChartDescriptor {
        let row = keys
            .iter()
            .enumerate()
            .fold(DataRow::new().with("bulan", "Januari"), |row, (i, key)| {
                row.with(key, i as f64 + 1.0)
            });
        ChartDescriptor::new("c1", kind)
            .with_x_axis_key("bulan")
            .with_keys(keys.iter().copied())
            .with_rows(vec![row])
    }

    fn cartesian_body(chart: &RenderedChart) -> &CartesianBody {
        match &chart.body {
            ChartBody::Cartesian(body) => body,
            other => panic!("expected cartesian body, got {:?}", other),
        }
    }

    #[test]
    fn test_every_kind_renders() {
        for kind in ChartKind::all() {
            let descriptor = if *kind == ChartKind::Pie {
                ChartDescriptor::new("p", "pie").with_rows(vec![PieSlice::new("A", 1.0).to_row()])
            } else {
                keyed(kind.tag(), &["a", "b"])
            };
            let chart = render(&descriptor).unwrap();
            assert_eq!(chart.kind, *kind);
        }
    }

    #[test]
    fn test_unknown_type_is_notice() {
        let notice = render(&keyed("radar", &["a"])).unwrap_err();
        assert_eq!(notice.tag, "radar");
        assert_eq!(notice.chart_id, "c1");
        assert_eq!(notice.message, UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn test_color_cycle_wraps() {
        let keys = ["k1", "k2", "k3", "k4", "k5", "k6", "k7"];
        let chart = render(&keyed("bar", &keys)).unwrap();
        let series = &cartesian_body(&chart).series;
        assert_eq!(series.len(), 7);
        assert_eq!(series[6].color, series[0].color);
        assert_eq!(series[0].color, colors::PALETTE[0]);
        assert_eq!(series[5].color, colors::PALETTE[5]);
    }

    #[test]
    fn test_series_naming_per_kind() {
        let bar = render(&keyed("bar", &["hari_hujan"])).unwrap();
        assert_eq!(cartesian_body(&bar).series[0].name, "hari hujan");

        let line = render(&keyed("line", &["laki_laki"])).unwrap();
        assert_eq!(cartesian_body(&line).series[0].name, "laki laki");

        let area = render(&keyed("area", &["kebun"])).unwrap();
        assert_eq!(cartesian_body(&area).series[0].name, "Kebun");

        let line_area = render(&keyed("line-area", &["luas_tanam"])).unwrap();
        assert_eq!(cartesian_body(&line_area).series[0].name, "luas tanam");
    }

    #[test]
    fn test_area_kinds_share_stack() {
        for tag in ["area", "line-area"] {
            let chart = render(&keyed(tag, &["a", "b"])).unwrap();
            let body = cartesian_body(&chart);
            assert!(body.stacked);
            let ids: Vec<_> = body
                .series
                .iter()
                .map(|s| match s.mark {
                    SeriesMark::Area { stack_id, .. } => stack_id,
                    _ => panic!("expected area mark"),
                })
                .collect();
            assert_eq!(ids, vec!["1", "1"]);
        }

        let line_area = render(&keyed("line-area", &["a"])).unwrap();
        assert_eq!(
            cartesian_body(&line_area).series[0].mark,
            SeriesMark::Area {
                fill_opacity: 0.6,
                stack_id: "1"
            }
        );
    }

    #[test]
    fn test_missing_field_is_gap() {
        let descriptor = ChartDescriptor::new("b", "bar")
            .with_x_axis_key("desa")
            .with_keys(["Desa", "kelurahan"])
            .with_rows(vec![
                DataRow::new().with("desa", "Minggirsari").with("Desa", 1.0),
                DataRow::new().with("desa", "Satreyan").with("kelurahan", 1.0),
            ]);
        let chart = render(&descriptor).unwrap();
        let body = cartesian_body(&chart);
        assert_eq!(body.categories, vec!["Minggirsari", "Satreyan"]);
        assert_eq!(body.series[0].values, vec![Some(1.0), None]);
        assert_eq!(body.series[1].values, vec![None, Some(1.0)]);
    }

    #[test]
    fn test_pie_colors_and_percent() {
        let descriptor = ChartDescriptor::new("p", "pie").with_rows(vec![
            PieSlice::new("A", 25.0).to_row(),
            PieSlice::new("B", 75.0).with_color("#10b981").to_row(),
        ]);
        let chart = render(&descriptor).unwrap();
        let ChartBody::Pie(body) = &chart.body else {
            panic!("expected pie body");
        };
        assert_eq!(body.slices[0].color, colors::PALETTE[0]);
        assert_eq!(body.slices[1].color, "#10b981");
        assert_eq!(body.slices[0].percent, 0.25);
        assert_eq!((body.inner_radius, body.outer_radius, body.padding_angle), (60.0, 110.0, 5.0));
    }

    #[test]
    fn test_scatter_uses_first_key_only() {
        let chart = render(&keyed("scatter", &["a", "b", "c"])).unwrap();
        let ChartBody::Scatter(body) = &chart.body else {
            panic!("expected scatter body");
        };
        assert_eq!(body.y_key, "a");
        assert_eq!(body.points.len(), 1);
        assert_eq!(body.points[0].value, Some(1.0));
        assert_eq!(body.points[0].category, "Januari");
        assert!(chart.frame.legend.is_none());
    }

    #[test]
    fn test_legend_items_follow_keys() {
        let chart = render(&keyed("line", &["tahun_2022", "tahun_2023"])).unwrap();
        let names: Vec<_> = chart.legend_items().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["tahun 2022", "tahun 2023"]);
    }
}
