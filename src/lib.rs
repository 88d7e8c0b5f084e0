// src/lib.rs
//! Hierarchy core for a Persian budgeting back office: code
//! canonicalization, forest building from flat server records, and
//! visible-row ordering for tabular rendering.
//!
//! The pure pipeline is `records -> build_forest -> resolve_visible_rows`;
//! everything in it is synchronous, infallible and recomputed from scratch
//! per render. The only fallible pieces are the opt-in `ui_settings`
//! persistence capability and the `OpenSet` snapshots built on it.

pub mod code_tree;
pub mod codes;
pub mod collate;
pub mod db;
pub mod error;
pub mod open_state;
pub mod records;
pub mod row_order;
pub mod types;
pub mod ui_settings;

pub use code_tree::build_forest;
pub use codes::{canonicalize, fold_digits, is_registered, to_display_code};
pub use error::StoreError;
pub use open_state::OpenSet;
pub use records::{
    budget_center_rows, project_estimate_rows, revenue_estimate_rows, BudgetCenterRecord,
    ProjectEstimateRecord, RevenueEstimateRecord,
};
pub use row_order::{resolve_visible_rows, VisibleRow};
pub use types::{CanonicalMode, CodeRow, CodeScheme, Forest, Node, SortDirection};
pub use ui_settings::{MemorySettings, SettingsStore, SqliteSettings};
