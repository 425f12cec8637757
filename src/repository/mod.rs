use crate::{
    domain::client::Client,
    pagination::{Page, PageRequest},
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read side of the storage boundary for client records.
pub trait ClientReader {
    /// Looks a client up by id, returning `None` when the row is absent.
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;

    /// Fetches a client that is expected to exist. Errors with
    /// [`errors::RepositoryError::NotFound`] when the row is absent, before
    /// anything else happens.
    fn get_existing(&self, id: i32) -> RepositoryResult<Client>;

    /// Returns one page of all clients.
    fn list(&self, page: &PageRequest) -> RepositoryResult<Page<Client>>;

    /// Returns one page of the clients whose income equals `income`.
    fn list_by_income(&self, income: f64, page: &PageRequest) -> RepositoryResult<Page<Client>>;

    /// Returns one page of the clients whose income is strictly greater than
    /// `income`.
    fn list_by_income_greater_than(
        &self,
        income: f64,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Client>>;
}

/// Write side of the storage boundary for client records.
pub trait ClientWriter {
    /// Persists the entity and returns the stored row. An id of zero asks
    /// the database to assign one; any other id is kept, replacing an
    /// existing row with that id.
    fn save(&self, client: &Client) -> RepositoryResult<Client>;

    /// Removes the client with the given id. Errors with
    /// [`errors::RepositoryError::NotFound`] when no row was removed.
    fn delete_by_id(&self, id: i32) -> RepositoryResult<()>;
}
