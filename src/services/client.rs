use crate::dto::client::ClientDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a client by its identifier, failing with
/// [`ServiceError::NotFound`] when no such record exists.
pub fn get_client_by_id<R>(repo: &R, id: i32) -> ServiceResult<ClientDto>
where
    R: ClientReader + ?Sized,
{
    let client = repo.get_by_id(id)?.ok_or(ServiceError::NotFound)?;
    Ok(client.into())
}

/// Returns one page of all clients, mapped element-for-element into DTOs.
pub fn list_clients<R>(repo: &R, page: &PageRequest) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    Ok(repo.list(page)?.map(ClientDto::from))
}

/// Returns one page of the clients whose income equals the given value.
pub fn list_clients_by_income<R>(
    repo: &R,
    page: &PageRequest,
    income: f64,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    Ok(repo.list_by_income(income, page)?.map(ClientDto::from))
}

/// Returns one page of the clients whose income is strictly greater than the
/// given value.
pub fn list_clients_by_income_greater_than<R>(
    repo: &R,
    page: &PageRequest,
    income: f64,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    Ok(repo
        .list_by_income_greater_than(income, page)?
        .map(ClientDto::from))
}

/// Persists a new client built from the DTO and returns the stored record,
/// including a database-assigned id when the DTO carried none.
pub fn create_client<R>(repo: &R, dto: &ClientDto) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let saved = repo.save(&dto.to_entity())?;
    Ok(saved.into())
}

/// Copies the DTO's fields onto the stored client with the given id and
/// persists the result. The existence check happens before any field copy.
pub fn update_client<R>(repo: &R, id: i32, dto: &ClientDto) -> ServiceResult<ClientDto>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let mut client = repo.get_existing(id)?;
    dto.apply_to(&mut client);
    let saved = repo.save(&client)?;
    Ok(saved.into())
}

/// Removes the client with the given id, failing with
/// [`ServiceError::NotFound`] when no such record exists.
pub fn delete_client<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete_by_id(id).map_err(ServiceError::from)
}
