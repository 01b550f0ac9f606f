/// Implemented by record types kept in a resource store.
///
/// A record always carries a store-assigned `id`. The input and patch types
/// have no way to express one, so callers can neither pick an id on create
/// nor reassign it on update; a stray `"id"` key in a request body is simply
/// ignored during deserialization.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Create payload; everything but the id.
    type Input: Send;
    /// Partial update; fields left `None` keep their current value.
    ///
    /// A JSON `null` deserializes to `None` and therefore reads as absent,
    /// so a patch can set or replace an optional field but never clear it.
    type Patch: Send;

    /// Name used in "<name> not found" messages.
    const NAME: &'static str;

    fn from_input(id: u64, input: Self::Input) -> Self;
    fn id(&self) -> u64;
    fn apply(&mut self, patch: Self::Patch);
}
