use std::hash::Hash;

/// Trait for identifier types of domain records
pub trait AggregateId: Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug {
    /// Render the ID as a string (used as a list key in views)
    fn as_string(&self) -> String;

    /// Parse the ID back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}
