use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::{DbPool, get_connection},
    domain::client::Client,
    pagination::{Page, PageRequest, Sort, SortDirection, SortField},
    repository::{
        ClientReader, ClientWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clients,
};

/// Diesel implementation of [`ClientReader`] and [`ClientWriter`].
pub struct DieselClientRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselClientRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

/// Applies the requested sort order to a boxed clients query.
fn apply_sort<'a>(
    query: clients::BoxedQuery<'a, Sqlite>,
    sort: &Sort,
) -> clients::BoxedQuery<'a, Sqlite> {
    match (sort.field, sort.direction) {
        (SortField::Id, SortDirection::Asc) => query.order(clients::id.asc()),
        (SortField::Id, SortDirection::Desc) => query.order(clients::id.desc()),
        (SortField::Name, SortDirection::Asc) => query.order(clients::name.asc()),
        (SortField::Name, SortDirection::Desc) => query.order(clients::name.desc()),
        (SortField::Cpf, SortDirection::Asc) => query.order(clients::cpf.asc()),
        (SortField::Cpf, SortDirection::Desc) => query.order(clients::cpf.desc()),
        (SortField::Income, SortDirection::Asc) => query.order(clients::income.asc()),
        (SortField::Income, SortDirection::Desc) => query.order(clients::income.desc()),
        (SortField::BirthDate, SortDirection::Asc) => query.order(clients::birth_date.asc()),
        (SortField::BirthDate, SortDirection::Desc) => query.order(clients::birth_date.desc()),
        (SortField::Children, SortDirection::Asc) => query.order(clients::children.asc()),
        (SortField::Children, SortDirection::Desc) => query.order(clients::children.desc()),
    }
}

impl ClientReader for DieselClientRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = get_connection(self.pool)?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn get_existing(&self, id: i32) -> RepositoryResult<Client> {
        use crate::models::client::Client as DbClient;

        let mut conn = get_connection(self.pool)?;
        let client = clients::table.find(id).first::<DbClient>(&mut conn)?;

        Ok(client.into())
    }

    fn list(&self, page: &PageRequest) -> RepositoryResult<Page<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = get_connection(self.pool)?;

        let items = apply_sort(clients::table.into_boxed(), &page.sort)
            .limit(page.per_page as i64)
            .offset(page.offset() as i64)
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        let total: i64 = clients::table.count().get_result(&mut conn)?;

        Ok(Page::new(items, page, total as u64))
    }

    fn list_by_income(&self, income: f64, page: &PageRequest) -> RepositoryResult<Page<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = get_connection(self.pool)?;

        let query = clients::table
            .filter(clients::income.eq(income))
            .into_boxed();
        let items = apply_sort(query, &page.sort)
            .limit(page.per_page as i64)
            .offset(page.offset() as i64)
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        let total: i64 = clients::table
            .filter(clients::income.eq(income))
            .count()
            .get_result(&mut conn)?;

        Ok(Page::new(items, page, total as u64))
    }

    fn list_by_income_greater_than(
        &self,
        income: f64,
        page: &PageRequest,
    ) -> RepositoryResult<Page<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = get_connection(self.pool)?;

        let query = clients::table
            .filter(clients::income.gt(income))
            .into_boxed();
        let items = apply_sort(query, &page.sort)
            .limit(page.per_page as i64)
            .offset(page.offset() as i64)
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        let total: i64 = clients::table
            .filter(clients::income.gt(income))
            .count()
            .get_result(&mut conn)?;

        Ok(Page::new(items, page, total as u64))
    }
}

impl ClientWriter for DieselClientRepository<'_> {
    fn save(&self, client: &Client) -> RepositoryResult<Client> {
        use crate::models::client::{
            Client as DbClient, ClientWithId, NewClient as DbNewClient,
            UpdateClient as DbUpdateClient,
        };

        let mut conn = get_connection(self.pool)?;

        let saved: DbClient = if client.id == 0 {
            diesel::insert_into(clients::table)
                .values(DbNewClient::from(client))
                .get_result(&mut conn)?
        } else {
            diesel::insert_into(clients::table)
                .values(ClientWithId::from(client))
                .on_conflict(clients::id)
                .do_update()
                .set(DbUpdateClient::from(client))
                .get_result(&mut conn)?
        };

        Ok(saved.into())
    }

    fn delete_by_id(&self, id: i32) -> RepositoryResult<()> {
        let mut conn = get_connection(self.pool)?;

        let affected = diesel::delete(clients::table.find(id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
