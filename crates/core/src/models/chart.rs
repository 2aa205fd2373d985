use serde::{Deserialize, Serialize};

/// One slice of a pie chart.
///
/// Values are final; the renderer only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

/// One group of an income-vs-expense bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBar {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}
