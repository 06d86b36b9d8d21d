//! Enums used throughout the wheel TUI
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Wheel,      // Default mode - spin and list shortcuts
    Names,      // Editing the names text area
    Exclusions, // Moving through the exclusion list
    Header,     // Editing the header line
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Wheel => "WHEEL",
            Mode::Names => "NAMES",
            Mode::Exclusions => "EXCLUDE",
            Mode::Header => "HEADER",
        }
    }
}

/// Direction applied by the next sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "A-Z",
            SortDirection::Descending => "Z-A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_direction_label() {
        assert_eq!(SortDirection::Ascending.label(), "A-Z");
        assert_eq!(SortDirection::Descending.label(), "Z-A");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(Mode::default(), Mode::Wheel);
    }
}
