// File: crates/pulse-core/src/series.rs
// Summary: Series model for bar, line and pie charts, one point schema per chart kind.

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// Glyph shown in the "no data" placeholder.
    pub fn placeholder_glyph(&self) -> &'static str {
        match self {
            ChartKind::Bar => "📊",
            ChartKind::Line => "📈",
            ChartKind::Pie => "🍕",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
    /// Overrides the chart color for this bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BarPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color: None }
    }
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
}

impl LinePoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PiePoint {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl PiePoint {
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self { label: label.into(), value, color }
    }
}

/// Chart input, discriminated by chart kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChartData {
    Bar(Vec<BarPoint>),
    Line(Vec<LinePoint>),
    Pie(Vec<PiePoint>),
}

impl ChartData {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Bar(_) => ChartKind::Bar,
            ChartData::Line(_) => ChartKind::Line,
            ChartData::Pie(_) => ChartKind::Pie,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChartData::Bar(p) => p.len(),
            ChartData::Line(p) => p.len(),
            ChartData::Pie(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// A dashboard chart card: metadata plus its series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Growth badge text, e.g. `+15.2%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
    /// Chart color for bar and line charts; pie points carry their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, data: ChartData) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            period: None,
            growth: None,
            color: None,
            data,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn with_growth(mut self, growth: impl Into<String>) -> Self {
        self.growth = Some(growth.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn kind(&self) -> ChartKind { self.data.kind() }
}

/// Value usable as geometry input: non-finite and negative values become 0.
pub(crate) fn sanitize(label: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("point '{label}' has value {value}; drawing it as 0");
        0.0
    }
}
