//! The sequential chain tying links together.

use crate::error::{ChainError, Result};
use crate::links::{IntoIter, Iter, Link, Slot};
use crate::types::{Removed, RenderStyle};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use tracing::{debug, info, warn};

/// Chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Style used by `render` and `Display`.
    pub style: RenderStyle,

    /// Emit a tracing event for every deletion outcome.
    pub report_outcomes: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            report_outcomes: true,
        }
    }
}

impl ChainConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A singly-linked chain of values.
///
/// The chain owns its first link, and every link owns the next, so the
/// whole chain is released when the chain is dropped. No tail pointer is
/// kept: `append` and `len` walk from the head.
pub struct SequentialChain<T> {
    head: Slot<T>,
    config: ChainConfig,
}

impl<T> Default for SequentialChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequentialChain<T> {
    /// Create an empty chain with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    /// Create an empty chain with the given configuration.
    pub fn with_config(config: ChainConfig) -> Self {
        Self { head: None, config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Append a value after the last link.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        let mut walked = 0usize;
        while let Some(link) = cursor {
            cursor = &mut link.next;
            walked += 1;
        }
        *cursor = Some(Link::boxed(value));
        debug!(len = walked + 1, "appended link");
    }

    /// First link, if any.
    pub fn head(&self) -> Option<&Link<T>> {
        self.head.as_deref()
    }

    /// Number of links reachable from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate values from the head to the end.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head(),
        }
    }

    /// Release every link.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut link) = cursor {
            cursor = link.take_next();
        }
    }

    /// Unlink the link at a 1-based position.
    ///
    /// Checks run in order: empty chain, non-positive position, then a
    /// walk that fails if the chain ends before `position`. On any error
    /// the chain is left exactly as it was.
    fn unlink_at(&mut self, position: i64) -> Result<Removed<T>> {
        if self.head.is_none() {
            return Err(ChainError::EmptyChain);
        }
        if position <= 0 {
            return Err(ChainError::InvalidPosition(position));
        }

        let target = usize::try_from(position).unwrap_or(usize::MAX);
        let out_of_range = |len| ChainError::PositionOutOfRange { position, len };

        // `cursor` is the slot owning the link at `walked + 1`.
        let mut cursor = &mut self.head;
        let mut walked = 0usize;
        while walked + 1 < target {
            match cursor {
                Some(link) => {
                    cursor = &mut link.next;
                    walked += 1;
                }
                None => return Err(out_of_range(walked)),
            }
        }

        let mut link = cursor.take().ok_or_else(|| out_of_range(walked))?;
        *cursor = link.take_next();

        Ok(Removed {
            value: link.into_value(),
            position: target,
        })
    }
}

impl<T: fmt::Display> SequentialChain<T> {
    /// Remove the link at a 1-based position and return its value.
    ///
    /// Failures come back as [`ChainError`] values; nothing panics and the
    /// chain is unchanged on failure. When `report_outcomes` is set, every
    /// outcome is also emitted as a tracing event.
    pub fn delete_at(&mut self, position: i64) -> Result<Removed<T>> {
        let outcome = self.unlink_at(position);

        if self.config.report_outcomes {
            match &outcome {
                Ok(removed) => info!(
                    position = removed.position,
                    value = %removed.value,
                    "deleted link"
                ),
                Err(e) => warn!(position, error = %e, "deletion failed"),
            }
        }

        outcome
    }

    /// Render with the configured style.
    pub fn render(&self) -> String {
        self.render_with(&self.config.style)
    }

    /// Render values in chain order followed by the end marker, or the
    /// style's empty indicator when there are no links.
    pub fn render_with(&self, style: &RenderStyle) -> String {
        if self.is_empty() {
            return style.empty.clone();
        }

        let mut out = String::new();
        for value in self.iter() {
            // Writing into a String cannot fail.
            let _ = write!(out, "{}{}", value, style.separator);
        }
        out.push_str(&style.terminator);
        out
    }
}

impl<T: fmt::Display> fmt::Display for SequentialChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: fmt::Debug> fmt::Debug for SequentialChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for SequentialChain<T> {
    fn drop(&mut self) {
        // Iterative, so long chains don't recurse through Box drops.
        self.clear();
    }
}

impl<T> Extend<T> for SequentialChain<T> {
    /// Appends every value in order. The tail is found once, not per value.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(link) = cursor {
            cursor = &mut link.next;
        }
        let mut added = 0usize;
        for value in iter {
            let link = cursor.insert(Link::boxed(value));
            cursor = &mut link.next;
            added += 1;
        }
        debug!(added, "extended chain");
    }
}

impl<T> FromIterator<T> for SequentialChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T> IntoIterator for SequentialChain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            head: self.head.take(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SequentialChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
