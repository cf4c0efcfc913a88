//! Service layer: corpus loading, the statistics reducers, and output.
//!
//! ## Service map
//! - `config.rs` — flag/env/config-file resolution into `Settings`.
//! - `loader.rs` — partition walk, per-file parsing, skip bookkeeping.
//! - `totals.rs` — total/subtotal line counts and proportion shares.
//! - `taxes.rs` — per-partition tax-line counts per image.
//! - `positions.rs` — total-price word midpoints and the 2D histogram.
//! - `entities.rs` — category frequency table and rarest category.
//! - `report.rs` — all summaries over one corpus.
//! - `output.rs` — JSON/text output helper.
//!
//! ## Conventions
//! - Reducers are pure: they take documents and return a fresh summary.
//! - Filesystem access lives in `loader.rs` and `config.rs` only.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod entities;
pub mod loader;
pub mod output;
pub mod positions;
pub mod report;
pub mod taxes;
pub mod totals;
