//! Command handler layer.
//!
//! ## Files
//! - `report.rs` — one handler per report page plus its text rendering.
//!
//! ## Principles
//! - Resolve settings and load the corpus here.
//! - Delegate statistics to `services/*`.
//! - Keep `--json` output schema stable (`docs/contracts/*`).

pub mod report;

pub use report::handle_report_commands;
