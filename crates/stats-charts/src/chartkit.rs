//! # chartkit
//!
//! Core chart primitives: scales, path builders, polar geometry.
//! Implements Strategy pattern for flexible scale and curve behaviors.

use std::f64::consts::PI;
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Extend the domain outward to multiples of a nice step
    pub fn nice(mut self, count: usize) -> Self {
        let (min, max) = self.domain;
        if let Some(step) = nice_step(min, max, count) {
            self.domain = ((min / step).floor() * step, (max / step).ceil() * step);
        }
        self
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let Some(step) = nice_step(min, max, count) else {
            return vec![min];
        };

        let nice_min = (min / step).floor() * step;
        let nice_max = (max / step).ceil() * step;

        let mut ticks = Vec::new();
        let mut i = 0.0;
        loop {
            // recompute from the index to avoid accumulating float error
            let tick = nice_min + i * step;
            if tick > nice_max + step * 0.5 {
                break;
            }
            if tick >= min - step * 1e-9 && tick <= max + step * 1e-9 {
                ticks.push(round_to_step(tick, step));
            }
            i += 1.0;
        }

        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }
}

/// 1, 2, 5 or 10 times a power of ten
fn nice_step(min: f64, max: f64, count: usize) -> Option<f64> {
    let range = max - min;
    if range <= 0.0 || count == 0 || !range.is_finite() {
        return None;
    }

    let rough_step = range / count as f64;
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    let step = if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };
    Some(step)
}

fn round_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let factor = 10.0_f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// BAND SCALE (categorical x positions)
// ============================================================================

/// Band scale for categorical data (one band per category)
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    /// Distance between the starts of two adjacent bands
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        let n = self.domain_count as f64;
        (r_max - r_min) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start of the band at `index`
    pub fn scale(&self, index: usize) -> f64 {
        let step = self.step();
        self.range.0 + step * self.padding_outer + index as f64 * step
    }

    pub fn scale_center(&self, index: usize) -> f64 {
        self.scale(index) + self.bandwidth() / 2.0
    }
}

impl Default for BandScale {
    fn default() -> Self {
        Self::new(10)
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[(f64, f64)]) -> String;
}

/// Monotone cubic interpolation in x (D3 `curveMonotoneX`)
#[derive(Debug, Clone, Default)]
pub struct MonotonePath;

impl MonotonePath {
    /// Cubic segments after the first point, appended onto `builder`
    fn extend(builder: PathBuilder, points: &[(f64, f64)]) -> PathBuilder {
        match points.len() {
            0 | 1 => builder,
            2 => builder.line_to(points[1].0, points[1].1),
            _ => {
                let tangents = monotone_tangents(points);
                let mut builder = builder;
                for i in 0..points.len() - 1 {
                    let (x0, y0) = points[i];
                    let (x1, y1) = points[i + 1];
                    let dx = (x1 - x0) / 3.0;
                    builder = builder.cubic_to(
                        x0 + dx,
                        y0 + dx * tangents[i],
                        x1 - dx,
                        y1 - dx * tangents[i + 1],
                        x1,
                        y1,
                    );
                }
                builder
            }
        }
    }
}

impl PathGenerator for MonotonePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        let Some(&(x, y)) = points.first() else {
            return String::new();
        };
        Self::extend(PathBuilder::new().move_to(x, y), points).build()
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Fritsch-Carlson tangents as computed by D3
fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];

    for i in 1..n - 1 {
        let (x0, y0) = points[i - 1];
        let (x1, y1) = points[i];
        let (x2, y2) = points[i + 1];
        let h0 = x1 - x0;
        let h1 = x2 - x1;
        let s0 = if h0 != 0.0 { (y1 - y0) / h0 } else { 0.0 };
        let s1 = if h1 != 0.0 { (y2 - y1) / h1 } else { 0.0 };
        let p = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = if t.is_finite() { t } else { 0.0 };
    }

    let end_tangent = |(x0, y0): (f64, f64), (x1, y1): (f64, f64), t: f64| {
        let h = x1 - x0;
        if h != 0.0 { (3.0 * (y1 - y0) / h - t) / 2.0 } else { t }
    };
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    tangents
}

/// Monotone path over points with gaps; each contiguous run is its own subpath
pub fn monotone_path_with_gaps(points: &[Option<(f64, f64)>]) -> String {
    points
        .split(Option::is_none)
        .filter(|run| !run.is_empty())
        .map(|run| {
            let run: Vec<(f64, f64)> = run.iter().flatten().copied().collect();
            MonotonePath.generate(&run)
        })
        .collect()
}

/// Closed band between an upper and a lower edge, both monotone.
/// Edges share x coordinates and are given left to right.
pub fn area_band_path(upper: &[(f64, f64)], lower: &[(f64, f64)]) -> String {
    let (Some(&(ux, uy)), Some(&(lx, ly))) = (upper.first(), lower.last()) else {
        return String::new();
    };

    let builder = MonotonePath::extend(PathBuilder::new().move_to(ux, uy), upper);
    let reversed: Vec<(f64, f64)> = lower.iter().rev().copied().collect();
    let builder = MonotonePath::extend(builder.line_to(lx, ly), &reversed);
    builder.close().build()
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn cubic_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let _ = write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            x1, y1, x2, y2, x, y
        );
        self
    }

    pub fn quadratic_to(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "Q{:.2},{:.2},{:.2},{:.2}", x1, y1, x, y);
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        let _ = write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx, ry, rotation, large_arc as u8, sweep as u8, x, y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Rectangle with rounded top corners only
pub fn top_rounded_rect(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let r = radius.min(width / 2.0).min(height).max(0.0);
    PathBuilder::new()
        .move_to(x, y + height)
        .vertical_to(y + r)
        .quadratic_to(x, y, x + r, y)
        .horizontal_to(x + width - r)
        .quadratic_to(x + width, y, x + width, y + r)
        .vertical_to(y + height)
        .close()
        .build()
}

// ============================================================================
// POLAR GEOMETRY
// ============================================================================

pub const RADIAN: f64 = PI / 180.0;

/// Point at `angle` degrees (counter-clockwise from 3 o'clock) on screen
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (
        cx + radius * (-angle * RADIAN).cos(),
        cy + radius * (-angle * RADIAN).sin(),
    )
}

/// Annular sector between two angles
pub fn sector_path(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let delta = end_angle - start_angle;
    if delta.abs() < f64::EPSILON {
        return String::new();
    }
    // a full circle cannot be drawn as one arc
    let end_angle = start_angle + delta.clamp(-359.999, 359.999);
    let large_arc = (end_angle - start_angle).abs() > 180.0;
    let ccw = start_angle > end_angle;

    let outer_start = polar_to_cartesian(cx, cy, outer_radius, start_angle);
    let outer_end = polar_to_cartesian(cx, cy, outer_radius, end_angle);

    let builder = PathBuilder::new()
        .move_to(outer_start.0, outer_start.1)
        .arc_to(outer_radius, outer_radius, 0.0, large_arc, ccw, outer_end.0, outer_end.1);

    let builder = if inner_radius > 0.0 {
        let inner_end = polar_to_cartesian(cx, cy, inner_radius, end_angle);
        let inner_start = polar_to_cartesian(cx, cy, inner_radius, start_angle);
        builder
            .line_to(inner_end.0, inner_end.1)
            .arc_to(inner_radius, inner_radius, 0.0, large_arc, !ccw, inner_start.0, inner_start.1)
    } else {
        builder.line_to(cx, cy)
    };

    builder.close().build()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_nice_domain_and_ticks() {
        let scale = LinearScale::new().domain(0.0, 357.0).nice(5);
        assert_eq!(scale.domain_bounds(), (0.0, 400.0));
        assert_eq!(
            scale.nice_ticks(5),
            vec![0.0, 100.0, 200.0, 300.0, 400.0]
        );

        let small = LinearScale::new().domain(0.0, 1.0).nice(5);
        assert_eq!(small.nice_ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(5).range(0.0, 100.0);
        let bw = scale.bandwidth();
        assert!(bw > 0.0);
        assert!(bw < 20.0);
        // bands stay inside the range
        assert!(scale.scale(0) > 0.0);
        assert!(scale.scale(4) + bw < 100.0 + 1e-9);
        assert!((scale.scale(1) - scale.scale(0) - scale.step()).abs() < 1e-9);
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .close()
            .build();

        assert_eq!(path, "M0.00,0.00L100.00,100.00Z");
    }

    #[test]
    fn test_monotone_path() {
        let path = MonotonePath.generate(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        assert!(path.starts_with("M0.00,0.00C"));
        assert_eq!(path.matches('C').count(), 2);
        assert!(path.ends_with("100.00,0.00"));

        // two points degrade to a straight segment
        assert_eq!(
            MonotonePath.generate(&[(0.0, 0.0), (10.0, 10.0)]),
            "M0.00,0.00L10.00,10.00"
        );
    }

    #[test]
    fn test_monotone_flat_peak() {
        // the middle tangent of a local maximum is flat, so the curve does not overshoot
        let tangents = monotone_tangents(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        assert_eq!(tangents[1], 0.0);
    }

    #[test]
    fn test_gaps_split_subpaths() {
        let path = monotone_path_with_gaps(&[
            Some((0.0, 0.0)),
            Some((10.0, 5.0)),
            None,
            Some((30.0, 5.0)),
            Some((40.0, 0.0)),
        ]);
        assert_eq!(path.matches('M').count(), 2);
        assert!(monotone_path_with_gaps(&[None, None]).is_empty());
    }

    #[test]
    fn test_area_band_closed() {
        let upper = [(0.0, 10.0), (10.0, 5.0), (20.0, 8.0)];
        let lower = [(0.0, 20.0), (10.0, 20.0), (20.0, 20.0)];
        let path = area_band_path(&upper, &lower);
        assert!(path.starts_with("M0.00,10.00"));
        assert!(path.contains("L20.00,20.00"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 10.0, 90.0);
        assert!((x - 100.0).abs() < 1e-9);
        // 90 degrees points up on screen
        assert!((y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_sector_path() {
        let path = sector_path(0.0, 0.0, 60.0, 110.0, 0.0, 90.0);
        assert!(path.starts_with("M110.00,0.00A110.00,110.00,0.00,0,0,"));
        assert!(path.contains("A60.00,60.00,0.00,0,1,60.00,0.00"));
        assert!(sector_path(0.0, 0.0, 60.0, 110.0, 45.0, 45.0).is_empty());
    }
}
