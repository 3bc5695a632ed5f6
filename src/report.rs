//! Human-readable outcome messages for deletions.
//!
//! `SequentialChain::delete_at` hands back a `Result`; callers that want
//! to print the outcome (like an interactive driver) turn it into text here.

use crate::error::Result;
use crate::types::Removed;
use std::fmt;

/// Describe a deletion outcome.
///
/// Success names the position and the removed value; failure carries the
/// error text, which always names the offending condition.
pub fn describe<T: fmt::Display>(outcome: &Result<Removed<T>>) -> String {
    match outcome {
        Ok(removed) => format!(
            "Deleted link at position {} with value {}",
            removed.position, removed.value
        ),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChainError;

    #[test]
    fn test_describe_success() {
        let outcome = Ok(Removed {
            value: 42,
            position: 3,
        });
        assert_eq!(
            describe(&outcome),
            "Deleted link at position 3 with value 42"
        );
    }

    #[test]
    fn test_describe_failures() {
        let empty: Result<Removed<i32>> = Err(ChainError::EmptyChain);
        assert_eq!(describe(&empty), "Error: Cannot delete from an empty chain");

        let invalid: Result<Removed<i32>> = Err(ChainError::InvalidPosition(-1));
        assert_eq!(
            describe(&invalid),
            "Error: Position must be 1 or greater (got -1)"
        );

        let out_of_range: Result<Removed<i32>> =
            Err(ChainError::PositionOutOfRange { position: 10, len: 2 });
        assert_eq!(
            describe(&out_of_range),
            "Error: Position 10 is out of range (chain length is 2)"
        );
    }
}
