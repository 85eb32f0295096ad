//! Data-point annotations
//!
//! Each formatter receives an already-computed screen position plus the value
//! and returns the text to draw and where, or `None` when nothing is drawn.

use stats_core::{colors, format_value};

use crate::chartkit::polar_to_cartesian;

/// Vertical gap between a point/bar top and its label
pub const LABEL_OFFSET: f64 = 10.0;
/// Distance of pie labels beyond the outer radius
pub const PIE_LABEL_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Text placed at a screen position
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub font_weight: &'static str,
    pub fill: &'static str,
    /// Vertically centered on `y` instead of sitting on it
    pub centered: bool,
}

/// Label above a line vertex. Absent values get no label.
pub fn line_vertex_label(x: f64, y: f64, value: Option<f64>) -> Option<PointLabel> {
    let value = value?;
    Some(PointLabel {
        x,
        y: y - LABEL_OFFSET,
        text: format_value(value),
        anchor: TextAnchor::Middle,
        font_size: 14.0,
        font_weight: "bold",
        fill: colors::TEXT_DARK,
        centered: false,
    })
}

/// Label above a bar. Zero, NaN and absent values count as nothing to show.
pub fn bar_top_label(x: f64, y: f64, width: f64, value: Option<f64>) -> Option<PointLabel> {
    let value = value.filter(|v| *v != 0.0 && !v.is_nan())?;
    Some(PointLabel {
        x: x + width / 2.0,
        y: y - LABEL_OFFSET,
        text: format_value(value),
        anchor: TextAnchor::Middle,
        font_size: 12.0,
        font_weight: "bold",
        fill: colors::TEXT_DARK,
        centered: false,
    })
}

/// Geometry of one pie slice as laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    /// Degrees, counter-clockwise from 3 o'clock
    pub mid_angle: f64,
}

/// One decimal place, exact ties rounded away from zero.
///
/// `{:.1}` breaks exact ties to even (12.25 -> 12.2). A tie at one decimal is
/// only representable when the value is an odd multiple of 0.25.
fn fixed_one(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

/// `"{name} ({percent}%)"` placed on the slice's bisector beyond the ring.
/// `percent` is a fraction in `0..=1`.
pub fn pie_slice_label(slice: SliceGeometry, name: &str, percent: f64) -> PointLabel {
    let (x, y) = polar_to_cartesian(
        slice.cx,
        slice.cy,
        slice.outer_radius + PIE_LABEL_OFFSET,
        slice.mid_angle,
    );
    let anchor = if x > slice.cx {
        TextAnchor::Start
    } else {
        TextAnchor::End
    };

    PointLabel {
        x,
        y,
        text: format!("{} ({}%)", name, fixed_one(percent * 100.0)),
        anchor,
        font_size: 16.0,
        font_weight: "500",
        fill: colors::PIE_LABEL,
        centered: true,
    }
}
