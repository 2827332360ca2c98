use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub initials: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub email: String,
}

/// The person the API token belongs to, as returned by `GET /me`.
pub type Me = Person;
