use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::Client as DomainClient;

/// Diesel model for [`crate::domain::client::Client`].
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

/// Insertable form of [`Client`] without an identifier; the database assigns
/// one.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
pub struct NewClient<'a> {
    pub name: &'a str,
    pub cpf: &'a str,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

/// Insertable form of [`Client`] carrying a caller-chosen identifier.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
pub struct ClientWithId<'a> {
    pub id: i32,
    pub name: &'a str,
    pub cpf: &'a str,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

/// Data used when updating a [`Client`] record in place.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub cpf: &'a str,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            cpf: client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

impl<'a> From<&'a DomainClient> for NewClient<'a> {
    fn from(client: &'a DomainClient) -> Self {
        Self {
            name: &client.name,
            cpf: &client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

impl<'a> From<&'a DomainClient> for ClientWithId<'a> {
    fn from(client: &'a DomainClient) -> Self {
        Self {
            id: client.id,
            name: &client.name,
            cpf: &client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

impl<'a> From<&'a DomainClient> for UpdateClient<'a> {
    fn from(client: &'a DomainClient) -> Self {
        Self {
            name: &client.name,
            cpf: &client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}
