//! Core types shared by the chain and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value unlinked by a successful deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removed<T> {
    /// The payload the link held.
    pub value: T,

    /// 1-based position the link occupied before removal.
    pub position: usize,
}

impl<T: fmt::Display> fmt::Display for Removed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.value, self.position)
    }
}

/// How a chain is turned into text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Placed after every value.
    pub separator: String,

    /// End-of-chain marker, written after the last separator.
    pub terminator: String,

    /// Whole output for a chain with no links.
    pub empty: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            separator: " -> ".to_string(),
            terminator: "END".to_string(),
            empty: "empty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_display() {
        let removed = Removed {
            value: "b",
            position: 2,
        };
        assert_eq!(removed.to_string(), "b at position 2");
    }

    #[test]
    fn test_style_partial_json() {
        let style: RenderStyle = serde_json::from_str(r#"{"separator": ", "}"#).unwrap();
        assert_eq!(style.separator, ", ");
        assert_eq!(style.terminator, "END");
        assert_eq!(style.empty, "empty");
    }
}
