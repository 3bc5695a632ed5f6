//! # Sequential Chain
//!
//! A singly-linked chain of values supporting append, rendering, and
//! deletion by 1-based position.
//!
//! ## Core Concepts
//!
//! - **Links**: Nodes holding one value and exclusively owning the next link
//! - **Chain**: Owns the first link and, through it, the rest
//! - **Positions**: 1-based ordinals counted from the head
//!
//! Deletion never panics: empty chains, non-positive positions, and
//! positions past the end come back as [`ChainError`] values and leave
//! the chain untouched.
//!
//! ## Example
//!
//! ```
//! use linkchain::{report, ChainError, SequentialChain};
//!
//! let mut chain = SequentialChain::new();
//! chain.append("a");
//! chain.append("b");
//! chain.append("c");
//! assert_eq!(chain.render(), "a -> b -> c -> END");
//!
//! let outcome = chain.delete_at(1);
//! assert_eq!(report::describe(&outcome), "Deleted link at position 1 with value a");
//! assert_eq!(chain.render(), "b -> c -> END");
//!
//! assert!(matches!(
//!     chain.delete_at(10),
//!     Err(ChainError::PositionOutOfRange { .. })
//! ));
//! ```

pub mod chain;
pub mod error;
pub mod links;
pub mod report;
pub mod types;

// Re-exports
pub use chain::{ChainConfig, SequentialChain};
pub use error::{ChainError, Result};
pub use links::{IntoIter, Iter, Link};
pub use types::{Removed, RenderStyle};
