//! Configuration module for stashflow
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Allocation engine defaults (splits, save rates, limits, growth rate)

pub mod allocation;
pub mod paths;
pub mod settings;

pub use allocation::{AllocationConfig, CadencePolicy, TierLimits};
pub use paths::StashPaths;
pub use settings::Settings;
