//! Chart descriptor types

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{SeriesNaming, format_value};

/// One cell of a data row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

impl FieldValue {
    /// Numeric reading; text and null have none
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text shown on a category axis
    pub fn label(&self) -> String {
        match self {
            Self::Number(n) => format_value(*n),
            Self::Text(s) => s.clone(),
            Self::Null => String::new(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A data row: field name to value. Absent fields are simply missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow(pub HashMap<String, FieldValue>);

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Numeric value of a field, `None` when absent, null or text
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_f64)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }
}

/// The closed set of visual encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Area,
    LineArea,
    Scatter,
}

/// Raised when a type tag is outside [`ChartKind`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart type `{0}`")]
pub struct UnknownChartKind(pub String);

impl ChartKind {
    pub fn all() -> &'static [Self] {
        &[
            Self::Bar,
            Self::Line,
            Self::Pie,
            Self::Area,
            Self::LineArea,
            Self::Scatter,
        ]
    }

    /// Tag as written in descriptors
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Area => "area",
            Self::LineArea => "line-area",
            Self::Scatter => "scatter",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Series name derivation. `area` is the only kind that capitalizes.
    pub fn series_naming(&self) -> SeriesNaming {
        match self {
            Self::Area => SeriesNaming::Capitalized,
            _ => SeriesNaming::Spaced,
        }
    }

    /// Kinds whose series share one stack group
    pub fn is_stacked(&self) -> bool {
        matches!(self, Self::Area | Self::LineArea)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Bar => "kind-bar",
            Self::Line => "kind-line",
            Self::Pie => "kind-pie",
            Self::Area => "kind-area",
            Self::LineArea => "kind-line-area",
            Self::Scatter => "kind-scatter",
        }
    }
}

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One visualization as stored in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    #[serde(default)]
    pub id: String,
    /// Raw type tag; kept as text so unknown tags survive loading
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "xAxisKey", default, skip_serializing_if = "Option::is_none")]
    pub x_axis_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(default)]
    pub data: Vec<DataRow>,
}

impl ChartDescriptor {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_x_axis_key(mut self, key: impl Into<String>) -> Self {
        self.x_axis_key = Some(key.into());
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rows(mut self, rows: Vec<DataRow>) -> Self {
        self.data = rows;
        self
    }

    /// Parsed kind, if the tag is one of the known six
    pub fn chart_kind(&self) -> Result<ChartKind, UnknownChartKind> {
        self.kind.parse()
    }

    /// Category label per row, read from `xAxisKey`
    pub fn categories(&self) -> Vec<String> {
        let key = self.x_axis_key.as_deref();
        self.data
            .iter()
            .map(|row| {
                key.and_then(|k| row.get(k))
                    .map(FieldValue::label)
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Values of one series in row order; gaps are `None`
    pub fn series_values(&self, key: &str) -> Vec<Option<f64>> {
        self.data.iter().map(|row| row.number(key)).collect()
    }

    /// Rows read with the fixed pie shape
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        self.data.iter().map(PieSlice::from_row).collect()
    }
}

/// Pie row: `{name, value, color?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PieSlice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Missing name reads as empty, missing value as zero
    pub fn from_row(row: &DataRow) -> Self {
        Self {
            name: row.get("name").map(FieldValue::label).unwrap_or_default(),
            value: row.number("value").unwrap_or(0.0),
            color: row.text("color").map(str::to_string),
        }
    }

    pub fn to_row(&self) -> DataRow {
        let row = DataRow::new()
            .with("name", self.name.as_str())
            .with("value", self.value);
        match &self.color {
            Some(color) => row.with("color", color.as_str()),
            None => row,
        }
    }
}
