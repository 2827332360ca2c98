//! Client for the Pivotal Tracker v5 REST API.
//!
//! A [`Client`] owns a single [`Connection`] (API token plus base URL) and
//! hands out [`ProjectClient`]s that share it. Every call is one HTTP round
//! trip: no retries, no caching.
//!
//! ```no_run
//! use secrecy::SecretString;
//! use tracker::{Client, StoriesQuery, StoryState};
//!
//! # async fn example() -> tracker::Result<()> {
//! let client = Client::new(SecretString::from("my-api-token".to_string()));
//! let me = client.me().await?;
//! println!("hello {}", me.name);
//!
//! let project = client.in_project(99);
//! let query = StoriesQuery {
//!     state: Some(StoryState::FINISHED),
//!     limit: Some(20),
//!     ..Default::default()
//! };
//! let (stories, pagination) = project.stories(&query).await?;
//! println!("{} of {} finished stories", stories.len(), pagination.total);
//!
//! if let Some(id) = stories.first().and_then(|s| s.id) {
//!     project.deliver_story_with_comment(id, "shipped in 1.2.0").await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod model;
pub mod query;

pub use client::{Client, ProjectClient};
pub use config::{load_config, load_config_from, TrackerConfig};
pub use connection::{Connection, Pagination, DEFAULT_URL};
pub use error::{Error, Result};
pub use model::{
    Activity, Comment, Label, Me, Person, Project, ProjectMembership, Story, StoryState,
    StoryType, Task,
};
pub use query::{ActivityQuery, Query, QueryParams, StoriesQuery, TaskQuery};
