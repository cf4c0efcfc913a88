use crate::domain::models::FullReport;
use crate::services::entities::entities_report;
use crate::services::loader::Corpus;
use crate::services::positions::positions_report;
use crate::services::taxes::taxes_report;
use crate::services::totals::totals_report;
use std::num::NonZeroUsize;

/// Every summary over one loaded corpus. Each reducer makes its own pass.
pub fn full_report(corpus: &Corpus, bins: NonZeroUsize) -> FullReport {
    FullReport {
        scan: corpus.scan_report(),
        totals: totals_report(corpus.documents()),
        taxes: taxes_report(corpus),
        positions: positions_report(corpus, bins),
        entities: entities_report(corpus),
    }
}
