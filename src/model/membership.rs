use serde::{Deserialize, Serialize};

use super::person::Person;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMembership {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub person: Person,
}
