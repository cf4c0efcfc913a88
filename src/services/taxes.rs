use crate::domain::constants::TAX_MARKER;
use crate::domain::models::{PartitionTaxes, TaxesReport};
use crate::domain::record::Document;
use crate::services::loader::Corpus;
use std::collections::BTreeMap;

/// Tax-line counts per `image_id` for one partition, keeping only documents
/// with more than one tax line. Documents lacking `meta.image_id` or
/// `valid_line` are ignored. A repeated image id keeps the later qualifying
/// document; a later one with one tax line or fewer leaves the entry alone.
pub fn count_taxes<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
) -> BTreeMap<String, usize> {
    let mut per_image = BTreeMap::new();
    for doc in documents {
        let Some(image_id) = doc.image_id() else {
            continue;
        };
        if !doc.has_valid_lines() {
            continue;
        }
        let taxes = doc
            .lines()
            .filter(|l| l.category_mentions(TAX_MARKER))
            .count();
        if taxes > 1 {
            if per_image.contains_key(&image_id) {
                tracing::debug!("{} repeats image id {}", doc.source().display(), image_id);
            }
            per_image.insert(image_id, taxes);
        }
    }
    per_image
}

/// One entry per partition, in corpus order; partitions are never merged.
pub fn taxes_report(corpus: &Corpus) -> TaxesReport {
    TaxesReport {
        partitions: corpus
            .partitions
            .iter()
            .map(|p| PartitionTaxes {
                partition: p.partition.clone(),
                images: count_taxes(&p.documents),
            })
            .collect(),
    }
}
