//! Shared visual grammar
//!
//! Every chart kind pulls grid, axis, legend and tooltip styling from one
//! [`ChartTheme`]; only the per-kind differences live in [`ChartFrame::for_kind`].

use stats_core::{ChartKind, colors};

use crate::ChartMargin;

/// Room reserved left of the plot for value-axis ticks
pub const VALUE_AXIS_WIDTH: f64 = 60.0;
/// Room reserved below the plot for category ticks
pub const CATEGORY_AXIS_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TickStyle {
    pub fill: &'static str,
    pub font_size: f64,
    pub font_weight: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendStyle {
    pub font_size: f64,
    pub border: &'static str,
    pub padding_top: f64,
    pub border_radius: f64,
    pub color: &'static str,
}

impl LegendStyle {
    /// Inline CSS for the legend wrapper
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; border: {}; padding-top: {}px; border-radius: {}px; margin: 0 auto; color: {};",
            self.font_size, self.border, self.padding_top, self.border_radius, self.color
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieStyle {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub padding_angle: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// Chart theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub palette: [&'static str; 6],
    pub width: f64,
    pub height: f64,
    pub grid_stroke: &'static str,
    pub grid_dash: &'static str,
    pub axis_stroke: &'static str,
    pub category_tick: TickStyle,
    pub value_tick: TickStyle,
    pub legend: LegendStyle,
    pub tooltip_font_size: f64,
    pub cursor_fill: &'static str,
    pub bar_radius: f64,
    pub line_stroke_width: f64,
    pub dot_radius: f64,
    pub active_dot_radius: f64,
    pub line_area_opacity: f64,
    pub scatter_radius: f64,
    pub pie: PieStyle,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: colors::PALETTE,
            width: 800.0,
            height: 400.0,
            grid_stroke: colors::GRID,
            grid_dash: "3 3",
            axis_stroke: colors::AXIS,
            category_tick: TickStyle {
                fill: colors::TEXT_DARK,
                font_size: 16.0,
                font_weight: "bold",
            },
            value_tick: TickStyle {
                fill: colors::TEXT_MUTED,
                font_size: 12.0,
                font_weight: "normal",
            },
            legend: LegendStyle {
                font_size: 16.0,
                border: "1px solid #e4e7ec",
                padding_top: 8.0,
                border_radius: 8.0,
                color: colors::TEXT_DARK,
            },
            tooltip_font_size: 16.0,
            cursor_fill: colors::CURSOR,
            bar_radius: 4.0,
            line_stroke_width: 3.0,
            dot_radius: 4.0,
            active_dot_radius: 6.0,
            line_area_opacity: 0.6,
            scatter_radius: 5.0,
            pie: PieStyle {
                inner_radius: 60.0,
                outer_radius: 110.0,
                padding_angle: 5.0,
                stroke: colors::SLICE_STROKE,
                stroke_width: 2.0,
            },
        }
    }
}

impl ChartTheme {
    /// Color of the i-th series, wrapping around the palette
    pub fn color(&self, index: usize) -> &'static str {
        self.palette[index % self.palette.len()]
    }
}

// ============================================================================
// FRAME: grid, axes, tooltip cursor, legend
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    pub stroke: &'static str,
    pub dash: &'static str,
    pub horizontal: bool,
    pub vertical: bool,
}

/// Axis without axis line or tick marks, only tick labels
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub stroke: &'static str,
    pub axis_line: bool,
    pub tick_line: bool,
    pub tick: TickStyle,
    /// Extra vertical offset of tick labels
    pub dy: f64,
}

/// Hover highlight drawn under the tooltip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cursor {
    /// Filled category band
    Band { fill: &'static str },
    /// Vertical guide line at the category
    Line,
    /// Dashed vertical guide line
    Dashed,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub margin: ChartMargin,
    pub grid: Option<GridLines>,
    pub category_axis: Option<AxisConfig>,
    pub value_axis: Option<AxisConfig>,
    pub cursor: Cursor,
    pub legend: Option<LegendStyle>,
    pub tooltip_font_size: f64,
}

impl ChartFrame {
    /// Shared frame with the per-kind differences applied
    pub fn for_kind(kind: ChartKind, theme: &ChartTheme) -> Self {
        let (margin, vertical_grid, category_dy) = match kind {
            ChartKind::Bar => (ChartMargin::new(20.0, 10.0, 0.0, 0.0), false, 2.0),
            ChartKind::Line => (ChartMargin::new(30.0, 30.0, 0.0, 0.0), false, 10.0),
            ChartKind::Area => (ChartMargin::new(10.0, 30.0, 0.0, 0.0), true, 0.0),
            ChartKind::LineArea => (ChartMargin::new(10.0, 10.0, 0.0, 0.0), false, 10.0),
            ChartKind::Scatter => (ChartMargin::uniform(20.0), true, 0.0),
            ChartKind::Pie => (ChartMargin::uniform(5.0), false, 0.0),
        };

        let cursor = match kind {
            ChartKind::Bar => Cursor::Band {
                fill: theme.cursor_fill,
            },
            ChartKind::Scatter => Cursor::Dashed,
            ChartKind::Pie => Cursor::None,
            _ => Cursor::Line,
        };

        let axis = |tick: &TickStyle, dy: f64| AxisConfig {
            stroke: theme.axis_stroke,
            axis_line: false,
            tick_line: false,
            tick: tick.clone(),
            dy,
        };

        let cartesian = kind != ChartKind::Pie;
        Self {
            margin,
            grid: cartesian.then(|| GridLines {
                stroke: theme.grid_stroke,
                dash: theme.grid_dash,
                horizontal: true,
                vertical: vertical_grid,
            }),
            category_axis: cartesian.then(|| axis(&theme.category_tick, category_dy)),
            value_axis: cartesian.then(|| axis(&theme.value_tick, 0.0)),
            cursor,
            legend: (kind != ChartKind::Scatter).then(|| theme.legend.clone()),
            tooltip_font_size: theme.tooltip_font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_shared_axis_style() {
        let theme = ChartTheme::default();
        for kind in ChartKind::all().iter().filter(|k| **k != ChartKind::Pie) {
            let frame = ChartFrame::for_kind(*kind, &theme);
            let category = frame.category_axis.unwrap();
            let value = frame.value_axis.unwrap();
            assert!(!category.axis_line && !category.tick_line);
            assert_eq!(category.tick.font_weight, "bold");
            assert_eq!(category.tick.fill, colors::TEXT_DARK);
            assert_eq!(value.tick.fill, colors::TEXT_MUTED);
            assert_eq!(frame.grid.unwrap().dash, "3 3");
        }
    }

    #[test]
    fn test_vertical_grid_per_kind() {
        let theme = ChartTheme::default();
        let vertical = |kind| ChartFrame::for_kind(kind, &theme).grid.unwrap().vertical;
        assert!(!vertical(ChartKind::Bar));
        assert!(!vertical(ChartKind::Line));
        assert!(!vertical(ChartKind::LineArea));
        assert!(vertical(ChartKind::Area));
        assert!(vertical(ChartKind::Scatter));
    }

    #[test]
    fn test_pie_frame_has_no_axes() {
        let frame = ChartFrame::for_kind(ChartKind::Pie, &ChartTheme::default());
        assert!(frame.grid.is_none());
        assert!(frame.category_axis.is_none());
        assert!(frame.legend.is_some());
        assert_eq!(frame.cursor, Cursor::None);
    }

    #[test]
    fn test_legend_css() {
        let css = ChartTheme::default().legend.css();
        assert!(css.contains("font-size: 16px"));
        assert!(css.contains("border: 1px solid #e4e7ec"));
    }
}
