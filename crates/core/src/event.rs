/// A domain event.
///
/// Events are facts: immutable, versioned for schema evolution, and only ever
/// appended.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.product.sold").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}
