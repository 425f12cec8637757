use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered client. Identity is `id`; every other field may change over
/// the record's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: i32,
    pub name: String,
    /// CPF tax identifier, stored as opaque text.
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDateTime,
    pub children: i32,
}

impl Client {
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
}
