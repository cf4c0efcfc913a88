pub const TOTAL_CATEGORY: &str = "total.total_price";
pub const SUBTOTAL_CATEGORY: &str = "sub_total.subtotal_price";
/// Matched case-insensitively anywhere in a line category.
pub const TAX_MARKER: &str = "tax";

pub const DEFAULT_PARTITIONS: [&str; 3] = ["dev", "test", "train"];
pub const DEFAULT_BINS: usize = 50;
/// Upper bound on bins per axis; the grid holds `bins²` counters.
pub const MAX_BINS: usize = 1000;

/// Per-partition folder holding the document records.
pub const JSON_DIR: &str = "json";

pub const ROOT_ENV: &str = "RECEIPT_STATS_ROOT";
pub const CONFIG_ENV: &str = "RECEIPT_STATS_CONFIG";
