/// Trait for entities that carry the numeric identifier assigned by the backend
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> i64;
}
