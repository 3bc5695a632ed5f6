//! Single link record.

/// Ownership slot for a link: the chain's head or a link's `next`.
pub(crate) type Slot<T> = Option<Box<Link<T>>>;

/// A single node holding one payload value and its successor.
#[derive(Debug)]
pub struct Link<T> {
    pub(crate) value: T,
    pub(crate) next: Slot<T>,
}

impl<T> Link<T> {
    /// Create a boxed link with no successor.
    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }

    /// The payload held by this link.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following link, if this is not the last one.
    pub fn next(&self) -> Option<&Link<T>> {
        self.next.as_deref()
    }

    /// Whether this link ends the chain.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Detach the successor, leaving this link last.
    pub(crate) fn take_next(&mut self) -> Slot<T> {
        self.next.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}
