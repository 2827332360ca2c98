//! Resource structures exchanged with the service.
//!
//! These are plain data: they are produced by decoding a response body or
//! built by the caller before a create call, and never hold a connection.

pub mod activity;
pub mod membership;
pub mod person;
pub mod project;
pub mod story;
pub mod task;

pub use activity::Activity;
pub use membership::ProjectMembership;
pub use person::{Me, Person};
pub use project::Project;
pub use story::{Comment, Label, Story, StoryState, StoryType};
pub use task::Task;

use serde::{Deserialize, Deserializer};

/// Reads `null` as the type's default, so a field the service nulls out
/// decodes the same as a missing one.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
