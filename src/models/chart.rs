use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    Bar,
    Line,
    Pie,
}

impl ChartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartMode::Bar => "bar",
            ChartMode::Line => "line",
            ChartMode::Pie => "pie",
        }
    }
}

impl FromStr for ChartMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(ChartMode::Bar),
            "line" => Ok(ChartMode::Line),
            "pie" => Ok(ChartMode::Pie),
            _ => Err(anyhow::anyhow!("Unknown chart mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub mode: ChartMode,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Reads the chart back as plain `(label, value)` pairs.
    pub fn pairs(&self) -> Vec<(String, Option<f64>)> {
        self.points
            .iter()
            .map(|p| (p.label.clone(), p.value))
            .collect()
    }
}
