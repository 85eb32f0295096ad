//! # stats-charts
//!
//! Chart-type dispatch and D3.js-style SVG rendering built with Leptos.
//!
//! ## Architecture
//!
//! A [`ChartDescriptor`](stats_core::ChartDescriptor) goes through three stages:
//! - `render` - six-way dispatch into a declarative [`RenderedChart`]
//!   (axes, grid, tooltip, legend, series encodings, colors)
//! - `layout` - pure screen geometry for a rendered chart (bars, curves,
//!   sectors, labels, ticks)
//! - `view` - Leptos components drawing the geometry as SVG
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, polar geometry
//! - `labels` - Line-vertex, bar-top and pie-slice label formatters
//! - `theme` - Shared visual grammar (grid, axes, legend, tooltip)
//! - `render` - Descriptor to rendered chart dispatch
//! - `layout` - Rendered chart to screen geometry
//! - `tooltip` - Hover content
//! - `view` - SVG components

pub mod chartkit;
pub mod labels;
pub mod layout;
pub mod render;
pub mod theme;
pub mod tooltip;
pub mod view;

pub use chartkit::*;
pub use labels::*;
pub use layout::*;
pub use render::*;
pub use theme::*;
pub use tooltip::*;
pub use view::*;

// Re-export colors from stats-core for convenience
pub use stats_core::colors;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_dimensions() {
        let dims = ChartDimensions::new(800.0, 400.0).with_margin(ChartMargin::new(20.0, 10.0, 0.0, 0.0));
        assert_eq!(dims.inner_width(), 790.0);
        assert_eq!(dims.inner_height(), 380.0);
        assert_eq!(dims.viewbox(), "0 0 800 400");
    }
}
