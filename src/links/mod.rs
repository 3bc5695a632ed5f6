//! Link records and traversal.
//!
//! A [`Link`] owns its successor through a `Box`, so the `next` references
//! form a strict chain with exactly one owner per link: either the chain's
//! head slot or the preceding link.

mod iter;
mod link;

pub use iter::{IntoIter, Iter};
pub use link::Link;

pub(crate) use link::Slot;
