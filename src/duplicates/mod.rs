//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Driving the walk → hash → group pipeline ([`finder`])
//! - Insertion-ordered grouping by content digest ([`groups`])

pub mod finder;
pub mod groups;

pub use finder::{DuplicateFinder, FinderConfig, FinderError, ScanSummary};
pub use groups::{DuplicateGroup, HashGrouper};
