use crate::engine::EngineError;
use crate::models::{Breakdown, ChartMode, ChartPoint, ChartSeries, WeeklySeries};

/// Largest gap allowed between a breakdown's parts and its reported total.
pub const BREAKDOWN_TOLERANCE: f64 = 0.01;

/// Shape a series for a chart. Labels and values pass through untouched.
pub fn project(series: &WeeklySeries, mode: ChartMode) -> ChartSeries {
    ChartSeries {
        title: series.kind.display_name().to_string(),
        mode,
        points: series
            .points
            .iter()
            .map(|p| ChartPoint {
                label: p.label.clone(),
                value: p.value,
            })
            .collect(),
    }
}

/// Pie slices for a breakdown. Parts that do not add up to the total are an
/// ingestion error and are reported, never rescaled.
pub fn project_breakdown(title: &str, breakdown: &Breakdown) -> Result<ChartSeries, EngineError> {
    let sum = breakdown.sum();
    if !sum.is_finite() || (sum - breakdown.total).abs() > BREAKDOWN_TOLERANCE {
        return Err(EngineError::InconsistentBreakdown {
            total: breakdown.total,
            sum,
        });
    }
    Ok(ChartSeries {
        title: title.to_string(),
        mode: ChartMode::Pie,
        points: breakdown
            .parts
            .iter()
            .map(|part| ChartPoint {
                label: part.name.clone(),
                value: Some(part.value),
            })
            .collect(),
    })
}
