use std::path::Path;

use super::ipos_model::{Ipo, NewIpo};
use crate::Result;

/// Trait defining the contract for IPO repository operations.
///
/// Reloads are expressed as two separate calls on purpose: the deletion
/// commits before the replacement batch is even parsed, matching the
/// store's replace-all lifecycle.
pub trait IpoRepositoryTrait: Send + Sync {
    /// Returns every stored record in storage order.
    fn list(&self) -> Result<Vec<Ipo>>;

    /// Deletes all records, committing the deletion. Returns the number of
    /// rows removed.
    fn delete_all(&self) -> Result<usize>;

    /// Inserts the batch in a single transaction. Returns the number of
    /// rows inserted.
    fn insert_batch(&self, records: Vec<NewIpo>) -> Result<usize>;
}

/// Trait defining the contract for IPO service operations.
pub trait IpoServiceTrait: Send + Sync {
    fn get_ipos(&self) -> Result<Vec<Ipo>>;

    /// Replaces the store's contents with the records parsed from the CSV
    /// file at `file_path`. Returns the accepted-row count.
    fn reload_from_csv(&self, file_path: &Path) -> Result<usize>;
}
