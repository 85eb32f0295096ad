//! # stats-core
//!
//! Core domain types for the Kecamatan statistics dashboard.
//! Chart descriptors, the content catalog, and the naming/formatting
//! strategies shared by the renderer and the shell.

pub mod catalog;
pub mod chart;

pub use catalog::*;
pub use chart::*;

// ============================================================================
// STRATEGY PATTERN: Series naming
// ============================================================================

/// Strategy trait for deriving a legend/tooltip name from a field name
pub trait SeriesNamer: Send + Sync {
    fn name(&self, field: &str) -> String;
}

/// Replaces every underscore with a space (`hari_hujan` -> `hari hujan`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedNamer;

impl SeriesNamer for SpacedNamer {
    fn name(&self, field: &str) -> String {
        field.replace('_', " ")
    }
}

/// Upper-cases the first character only (`kebun` -> `Kebun`)
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedNamer;

impl SeriesNamer for CapitalizedNamer {
    fn name(&self, field: &str) -> String {
        let mut chars = field.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Naming convention selected per chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesNaming {
    #[default]
    Spaced,
    Capitalized,
}

impl SeriesNaming {
    pub fn apply(&self, field: &str) -> String {
        match self {
            Self::Spaced => SpacedNamer.name(field),
            Self::Capitalized => CapitalizedNamer.name(field),
        }
    }
}

// ============================================================================
// STRATEGY PATTERN: Value formatting
// ============================================================================

/// Strategy trait for value display text
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Shortest round-trip decimal form (`5`, `2.5`, `96`); exponent form below
/// 1e-6 and from 1e21 up
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNumberFormatter;

impl ValueFormatter for PlainNumberFormatter {
    fn format(&self, value: f64) -> String {
        if value == 0.0 {
            // covers -0.0 as well
            return "0".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }

        let magnitude = value.abs();
        if !(1e-6..1e21).contains(&magnitude) {
            // exponent form always carries its sign: 1e+21, 1.5e-7
            let text = format!("{:e}", value);
            return match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
                _ => text,
            };
        }
        format!("{}", value)
    }
}

/// Display form of a numeric value
pub fn format_value(value: f64) -> String {
    PlainNumberFormatter.format(value)
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Cyclic series palette
    pub const PALETTE: [&str; 6] = [
        "#465fff", "#12b76a", "#f79009", "#f04438", "#0ba5ec", "#ee46bc",
    ];

    pub const GRID: &str = "#e4e7ec";
    pub const AXIS: &str = "#475467";
    pub const TEXT_DARK: &str = "#101828";
    pub const TEXT_MUTED: &str = "#475467";
    pub const PIE_LABEL: &str = "#131313";
    pub const CURSOR: &str = "#f2f4f7";
    pub const SLICE_STROKE: &str = "#ffffff";
    pub const BG_CARD: &str = "#ffffff";

    /// Palette color for the i-th series, wrapping every six
    pub fn palette(index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_namer() {
        assert_eq!(SpacedNamer.name("hari_hujan"), "hari hujan");
        assert_eq!(SpacedNamer.name("jarak_ke_ibukota_kab_kota"), "jarak ke ibukota kab kota");
        assert_eq!(SpacedNamer.name("Desa"), "Desa");
    }

    #[test]
    fn test_capitalized_namer() {
        assert_eq!(CapitalizedNamer.name("kebun"), "Kebun");
        // only the first letter changes, underscores stay
        assert_eq!(CapitalizedNamer.name("luas_tanam"), "Luas_tanam");
        assert_eq!(CapitalizedNamer.name(""), "");
    }

    #[test]
    fn test_plain_number_formatter() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(3.35), "3.35");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_exponent_ranges() {
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(-2.5e22), "-2.5e+22");
        assert_eq!(format_value(1e-7), "1e-7");
        assert_eq!(format_value(1.5e-7), "1.5e-7");
        // plain decimal inside the range
        assert_eq!(format_value(1e20), "100000000000000000000");
        assert_eq!(format_value(0.000001), "0.000001");
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(colors::palette(0), colors::palette(6));
        assert_eq!(colors::palette(5), "#ee46bc");
    }
}
