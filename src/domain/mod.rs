//! Shared data model layer.
//!
//! ## Files
//! - `record.rs` — read-only accessors over parsed annotation documents.
//! - `models.rs` — report/output structs (the `--json` schema).
//! - `constants.rs` — category labels, default partitions, env var names.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in `models.rs` affect `--json` outputs. Keep them synchronized
//! with `docs/contracts/*`.

pub mod constants;
pub mod models;
pub mod record;
