use ndarray::Array2;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A summary that may legitimately be empty. Serialized with a `status`
/// tag so consumers render `no_data` as an empty state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    NoData,
    Ready(T),
}

impl<T> Outcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Outcome::Ready(v) => Some(v),
            Outcome::NoData => None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map(Outcome::Ready).unwrap_or(Outcome::NoData)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartitionSummary {
    pub partition: String,
    pub present: bool,
    pub documents: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: String,
    pub documents: usize,
    pub partitions: Vec<PartitionSummary>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalsCount {
    pub total: usize,
    pub subtotal: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsReport {
    #[serde(flatten)]
    pub counts: TotalsCount,
    pub shares: Vec<Share>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartitionTaxes {
    pub partition: String,
    pub images: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxesReport {
    pub partitions: Vec<PartitionTaxes>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram2d {
    /// Indexed `[x_bin, y_bin]`.
    #[serde(serialize_with = "serialize_grid")]
    pub counts: Array2<u64>,
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
}

impl Histogram2d {
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }
}

fn serialize_grid<S: Serializer>(grid: &Array2<u64>, s: S) -> Result<S::Ok, S::Error> {
    let rows: Vec<Vec<u64>> = grid.outer_iter().map(|row| row.to_vec()).collect();
    rows.serialize(s)
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionsReport {
    pub category: String,
    pub point_count: usize,
    pub bins: usize,
    pub heatmap: Outcome<Histogram2d>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntitiesReport {
    pub lines: usize,
    pub categories: Vec<CategoryCount>,
    pub rarest: Outcome<CategoryCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    pub scan: ScanReport,
    pub totals: TotalsReport,
    pub taxes: TaxesReport,
    pub positions: PositionsReport,
    pub entities: EntitiesReport,
}
