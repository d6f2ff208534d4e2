use crate::db::CategoryCount;
use serde::Serialize;

/// One bar of a template-rendered bar chart. `width_percent` scales the
/// bar against the largest count so the longest bar always fills its row.
#[derive(Debug, Clone, Serialize)]
pub struct BarContext {
    pub label: String,
    pub count: i64,
    pub width_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChartContext {
    pub bars: Vec<BarContext>,
}

impl BarChartContext {
    pub fn from_counts(counts: Vec<CategoryCount>) -> Self {
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
        let bars = counts
            .into_iter()
            .map(|c| BarContext {
                width_percent: if max > 0 {
                    round1(c.count as f64 * 100.0 / max as f64)
                } else {
                    0.0
                },
                label: c.label,
                count: c.count,
            })
            .collect();
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSliceContext {
    pub label: String,
    pub count: i64,
    pub percent: f64,
}

/// Pie-chart data: zero-count slices are dropped from the chart but still
/// contribute to `total`, so proportions stay honest.
#[derive(Debug, Clone, Serialize)]
pub struct PieChartContext {
    pub slices: Vec<PieSliceContext>,
    pub total: i64,
}

impl PieChartContext {
    pub fn from_counts(counts: impl IntoIterator<Item = (String, i64)>) -> Self {
        let counts: Vec<(String, i64)> = counts.into_iter().collect();
        let total: i64 = counts.iter().map(|(_, count)| count).sum();

        let slices = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| PieSliceContext {
                label,
                count,
                percent: round1(count as f64 * 100.0 / total as f64),
            })
            .collect();

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
