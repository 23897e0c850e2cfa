//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the plan, projection and balance reports.

use crate::models::{BudgetStatus, Money};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude < 0.1 && magnitude > 0.0 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a fraction such as a save rate (0.2 -> "20%")
pub fn format_rate(rate: f64) -> String {
    format_percentage(rate * 100.0)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for the share one amount takes of another
pub fn money_bar(part: Money, whole: Money, width: usize) -> String {
    format_bar(part.cents_f64(), whole.cents_f64(), width)
}

/// Health score as "72/100" followed by a bar
pub fn format_score(score: u8) -> String {
    format!("{:>3}/100 {}", score, format_bar(score as f64, 100.0, 20))
}

/// Status with a terminal marker
pub fn status_badge(status: BudgetStatus) -> String {
    let marker = match status {
        BudgetStatus::Healthy => "✓",
        BudgetStatus::Warning => "!",
        BudgetStatus::Critical => "✗",
    };
    format!("[{}] {}", marker, status.label())
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
