use crate::domain::constants::{SUBTOTAL_CATEGORY, TOTAL_CATEGORY};
use crate::domain::models::{Share, TotalsCount, TotalsReport};
use crate::domain::record::Document;

pub fn count_totals<'a>(documents: impl IntoIterator<Item = &'a Document>) -> TotalsCount {
    let mut counts = TotalsCount::default();
    for line in documents.into_iter().flat_map(|d| d.lines()) {
        match line.category() {
            Some(TOTAL_CATEGORY) => counts.total += 1,
            Some(SUBTOTAL_CATEGORY) => counts.subtotal += 1,
            _ => {}
        }
    }
    counts
}

/// Slices for a proportion view. A zero subtotal is left out entirely, and
/// no slices at all are produced when both counts are zero.
pub fn shares(counts: TotalsCount) -> Vec<Share> {
    let sum = counts.total + counts.subtotal;
    if sum == 0 {
        return vec![];
    }
    let mut out = vec![("Total", counts.total)];
    if counts.subtotal > 0 {
        out.push(("Subtotal", counts.subtotal));
    }
    out.into_iter()
        .map(|(label, count)| Share {
            label: label.to_string(),
            count,
            percent: count as f64 * 100.0 / sum as f64,
        })
        .collect()
}

pub fn totals_report<'a>(documents: impl IntoIterator<Item = &'a Document>) -> TotalsReport {
    let counts = count_totals(documents);
    TotalsReport {
        counts,
        shares: shares(counts),
    }
}
