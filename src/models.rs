//! Widget Models
//!
//! Data structures for the to-do list.

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Stable identifier assigned at creation
    pub id: u32,
    /// Trimmed, non-empty text
    pub text: String,
}

impl TodoItem {
    pub fn new(id: u32, text: String) -> Self {
        Self { id, text }
    }
}

/// Current sort direction of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    /// Every add resets back to descending
    #[default]
    Descending,
}

/// Sort icon assets (direction x hover state)
const ICON_UP_HOVER: &str = "../svg/up-sort-black.svg";
const ICON_DOWN_HOVER: &str = "../svg/down-sort-black.svg";
const ICON_UP: &str = "../svg/up-sort.svg";
const ICON_DOWN: &str = "../svg/down-sort.svg";

/// Delete affordance icon
pub const ICON_CANCEL: &str = "../svg/cancel.svg";

impl SortDirection {
    /// Flip the direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    /// Icon path for this direction and hover state
    pub fn icon(self, hover: bool) -> &'static str {
        match (self, hover) {
            (SortDirection::Ascending, true) => ICON_UP_HOVER,
            (SortDirection::Ascending, false) => ICON_UP,
            (SortDirection::Descending, true) => ICON_DOWN_HOVER,
            (SortDirection::Descending, false) => ICON_DOWN,
        }
    }
}
