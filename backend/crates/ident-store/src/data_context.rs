use crate::Result;

use ident_core::Record;

use async_trait::async_trait;
use uuid::Uuid;

/// Identifier-keyed persistence for any [`Record`] type.
#[async_trait]
pub trait DataContext: Send + Sync {
    /// Persist a new record.
    async fn create<T: Record>(&self, item: &T) -> Result<()>;

    /// Remove a record. Removing a record that is not stored is not an error.
    async fn delete<T: Record>(&self, item: &T) -> Result<()>;

    /// Fetch a fresh copy of a record, `None` when nothing is stored under `id`.
    async fn get_by_id<T: Record>(&self, id: Uuid) -> Result<Option<T>>;

    /// Fetch every stored record, in no particular order.
    async fn get_all<T: Record>(&self) -> Result<Vec<T>>;

    /// Replace a stored record wholesale, creating it when absent.
    async fn update<T: Record>(&self, item: &T) -> Result<()>;
}
