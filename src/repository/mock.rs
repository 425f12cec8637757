//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
        fn get_existing(&self, id: i32) -> RepositoryResult<Client>;
        fn list(&self, page: &PageRequest) -> RepositoryResult<Page<Client>>;
        fn list_by_income(&self, income: f64, page: &PageRequest) -> RepositoryResult<Page<Client>>;
        fn list_by_income_greater_than(
            &self,
            income: f64,
            page: &PageRequest,
        ) -> RepositoryResult<Page<Client>>;
    }

    impl ClientWriter for Repository {
        fn save(&self, client: &Client) -> RepositoryResult<Client>;
        fn delete_by_id(&self, id: i32) -> RepositoryResult<()>;
    }
}
