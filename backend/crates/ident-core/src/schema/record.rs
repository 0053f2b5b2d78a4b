use crate::{Field, Identifiable};

/// A plain data type that can be persisted positionally.
///
/// Decoding starts from `Default::default()` and assigns every field in
/// `fields()` order, so every field a record wants persisted must be listed.
pub trait Record: Identifiable + Default + Send + Sync + 'static {
    /// Persisted fields in declaration order.
    fn fields() -> &'static [Field<Self>];

    fn field_count() -> usize {
        Self::fields().len()
    }
}
