use crate::domain::models::{CategoryCount, EntitiesReport, Outcome};
use crate::domain::record::Document;
use crate::services::loader::Corpus;
use std::collections::HashMap;

/// Category frequencies that remember first-seen order, so equal counts
/// sort deterministically (by first appearance, not alphabetically).
#[derive(Debug, Default, Clone)]
pub struct CategoryCounter {
    index: HashMap<String, usize>,
    entries: Vec<CategoryCount>,
}

impl CategoryCounter {
    pub fn add(&mut self, category: &str, n: usize) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].count += n,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryCount {
                    category: category.to_string(),
                    count: n,
                });
            }
        }
    }

    pub fn merge(&mut self, other: &CategoryCounter) {
        for e in &other.entries {
            self.add(&e.category, e.count);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub fn lines(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count descending; ties keep first-seen order.
    pub fn most_common(&self) -> Vec<CategoryCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

pub fn count_categories<'a>(documents: impl IntoIterator<Item = &'a Document>) -> CategoryCounter {
    let mut counter = CategoryCounter::default();
    for category in documents
        .into_iter()
        .flat_map(|d| d.lines())
        .filter_map(|l| l.category())
    {
        counter.add(category, 1);
    }
    counter
}

/// Partition counters merged in partition order.
pub fn corpus_categories(corpus: &Corpus) -> CategoryCounter {
    let mut total = CategoryCounter::default();
    for p in &corpus.partitions {
        total.merge(&count_categories(&p.documents));
    }
    total
}

/// The least frequent entry of a table sorted by [`CategoryCounter::most_common`].
pub fn rarest(sorted: &[CategoryCount]) -> Outcome<CategoryCount> {
    Outcome::from(sorted.last().cloned())
}

pub fn entities_report(corpus: &Corpus) -> EntitiesReport {
    let counter = corpus_categories(corpus);
    tracing::debug!(
        "{} distinct categories over {} lines",
        counter.len(),
        counter.lines()
    );
    let categories = counter.most_common();
    EntitiesReport {
        lines: counter.lines(),
        rarest: rarest(&categories),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::{count_categories, rarest, CategoryCounter};
    use crate::domain::models::Outcome;
    use crate::domain::record::Document;
    use serde_json::json;
    use std::collections::HashSet;

    fn doc(lines: serde_json::Value) -> Document {
        Document::new("mem.json", json!({ "valid_line": lines }))
    }

    #[test]
    fn table_sums_to_categorized_lines_with_unique_keys() {
        let docs = vec![
            doc(json!([{"category": "menu.nm"}, {"category": "menu.price"}, {"words": []}])),
            doc(json!([{"category": "menu.nm"}, {"category": 5}])),
            Document::new("none.json", json!({"meta": {}})),
        ];
        let counter = count_categories(&docs);
        let table = counter.most_common();
        assert_eq!(table.iter().map(|c| c.count).sum::<usize>(), 3);
        assert_eq!(counter.lines(), 3);
        let keys: HashSet<_> = table.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(keys.len(), table.len());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let counter = count_categories(&vec![doc(json!([
            {"category": "z.last"},
            {"category": "a.first"},
            {"category": "m.most"},
            {"category": "m.most"}
        ]))]);
        let order: Vec<_> = counter
            .most_common()
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(order, vec!["m.most", "z.last", "a.first"]);
    }

    #[test]
    fn merge_accumulates_across_partitions() {
        let mut a = count_categories(&vec![doc(json!([{"category": "x"}, {"category": "y"}]))]);
        let b = count_categories(&vec![doc(json!([{"category": "y"}, {"category": "z"}]))]);
        a.merge(&b);
        assert_eq!(a.len(), 3);
        let table = a.most_common();
        assert_eq!(table[0].category, "y");
        assert_eq!(table[0].count, 2);
    }

    #[test]
    fn rarest_is_global_minimum() {
        let mut counter = CategoryCounter::default();
        counter.add("common", 9);
        counter.add("rare", 1);
        counter.add("middle", 4);
        let table = counter.most_common();
        let min = table.iter().map(|c| c.count).min().unwrap();
        match rarest(&table) {
            Outcome::Ready(c) => {
                assert_eq!(c.category, "rare");
                assert_eq!(c.count, min);
            }
            Outcome::NoData => panic!("expected an entry"),
        }
    }

    #[test]
    fn rarest_of_empty_table_is_no_data() {
        assert_eq!(CategoryCounter::default().len(), 0);
        assert_eq!(rarest(&[]), Outcome::NoData);
    }
}
