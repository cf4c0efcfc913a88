use crate::domain::constants::TOTAL_CATEGORY;
use crate::domain::models::{Histogram2d, Outcome, Point, PositionsReport};
use crate::domain::record::Document;
use crate::services::loader::Corpus;
use ndarray::Array2;
use std::num::NonZeroUsize;

/// Midpoints of every quad-bearing word on lines labelled `category`.
pub fn category_positions<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    category: &str,
) -> Vec<Point> {
    documents
        .into_iter()
        .flat_map(|d| d.lines())
        .filter(|l| l.has_category(category))
        .flat_map(|l| l.words())
        .filter_map(|w| w.midpoint())
        .collect()
}

pub fn total_positions<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Vec<Point> {
    category_positions(documents, TOTAL_CATEGORY)
}

/// Per-partition extraction concatenated in partition order.
pub fn corpus_total_positions(corpus: &Corpus) -> Vec<Point> {
    corpus
        .partitions
        .iter()
        .flat_map(|p| total_positions(&p.documents))
        .collect()
}

/// Bin edges over `[lo, hi]`; a zero-width range is widened by 0.5 each way.
fn edges(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    // Divide before subtracting so extreme finite ranges do not overflow.
    let step = hi / bins as f64 - lo / bins as f64;
    let mut out: Vec<f64> = (0..bins).map(|i| lo + step * i as f64).collect();
    out.push(hi);
    out
}

/// Index of the half-open bin holding `v`; the top edge belongs to the last bin.
fn bin_index(edges: &[f64], v: f64) -> usize {
    let bins = edges.len() - 1;
    edges
        .partition_point(|&e| e <= v)
        .saturating_sub(1)
        .min(bins - 1)
}

/// `bins × bins` counts over the bounding range of `points`. Returns `None`
/// for an empty input, where the range is undefined.
pub fn histogram2d(points: &[Point], bins: NonZeroUsize) -> Option<Histogram2d> {
    let first = points.first()?;
    let bins = bins.get();
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    let x_edges = edges(x_min, x_max, bins);
    let y_edges = edges(y_min, y_max, bins);

    let mut counts = Array2::<u64>::zeros((bins, bins));
    for p in points {
        counts[[bin_index(&x_edges, p.x), bin_index(&y_edges, p.y)]] += 1;
    }
    Some(Histogram2d {
        counts,
        x_edges,
        y_edges,
    })
}

pub fn positions_report(corpus: &Corpus, bins: NonZeroUsize) -> PositionsReport {
    let points = corpus_total_positions(corpus);
    let heatmap = Outcome::from(histogram2d(&points, bins));
    if let Some(h) = heatmap.ready() {
        tracing::debug!("binned {} of {} positions", h.total(), points.len());
    }
    PositionsReport {
        category: TOTAL_CATEGORY.to_string(),
        point_count: points.len(),
        bins: bins.get(),
        heatmap,
    }
}
