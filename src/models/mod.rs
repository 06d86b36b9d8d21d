//! Data models for the wheel TUI
//!
//! This module contains the core data structures:
//! - The ordered candidate list and its editing operations
//! - The exclusion set of names that cannot be drawn
//! - Header pool and enums for state management

pub mod candidates;
pub mod enums;
pub mod exclusions;
pub mod header;

// Re-exports for convenient access
pub use candidates::CandidateList;
pub use enums::{Mode, SortDirection};
pub use exclusions::ExclusionSet;
pub use header::pick_random_header;
