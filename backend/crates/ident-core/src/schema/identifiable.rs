use uuid::Uuid;

/// Anything keyed by a unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}
