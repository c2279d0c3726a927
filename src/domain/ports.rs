//! Seams between the domain records and the storage layer.

/// Accessor for the string id every stored record carries.
///
/// Implemented by each record type held in an entity store; lookups and
/// replacements match on this key.
pub trait Keyed {
    fn key(&self) -> &str;
}
