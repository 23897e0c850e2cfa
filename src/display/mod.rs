//! Display formatting for terminal output
//!
//! Provides utilities for formatting plans, line items and projections for
//! terminal display, including tables, bars and status markers.

pub mod report;
pub mod table;

pub use table::{
    format_allocations_table, format_horizon_table, format_line_items_table, format_points_table,
};
