//! Data roles for item models.
//!
//! Roles define what type of data is being requested from a model item.

/// Roles for accessing different aspects of item data.
///
/// - **Display**: the primary text to show
/// - **User**: application-specific data; each model documents its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display. Should return `String`.
    Display,

    /// Application-specific role.
    User(u32),
}

/// Data returned by `ItemModel::data`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data.
    String(String),
}

impl ItemData {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns the string slice if this holds a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts into an owned string if this holds a string.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}
