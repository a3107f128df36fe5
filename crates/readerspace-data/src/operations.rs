use crate::StorageError;

/// Read the complete persisted state of a store.
pub trait Load<T> {
    fn load(&self) -> Result<T, StorageError>;
}

/// Replace the complete persisted state of a store.
pub trait Save<T> {
    fn save(&self, item: &T) -> Result<(), StorageError>;
}
