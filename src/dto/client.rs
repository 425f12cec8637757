//! Transfer representation of [`Client`] and the pure mappings between the
//! two.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// Mirror of [`Client`] carried across the service boundary. Always derived
/// from or destined for an entity; it has no identity of its own.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

impl ClientDto {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        cpf: impl Into<String>,
        income: f64,
        birth_date: NaiveDateTime,
        children: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cpf: cpf.into(),
            income,
            birth_date,
            children,
        }
    }

    /// Builds the persistence entity this DTO describes.
    pub fn to_entity(&self) -> Client {
        Client {
            id: self.id,
            name: self.name.clone(),
            cpf: self.cpf.clone(),
            income: self.income,
            birth_date: self.birth_date,
            children: self.children,
        }
    }

    /// Copies every field except the identifier onto an existing entity.
    /// This is the update step: the target keeps its identity.
    pub fn apply_to(&self, client: &mut Client) {
        client.name = self.name.clone();
        client.cpf = self.cpf.clone();
        client.income = self.income;
        client.birth_date = self.birth_date;
        client.children = self.children;
    }
}

impl From<Client> for ClientDto {
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

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        Self::from(client.clone())
    }
}
