use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::connection::{Connection, Pagination};
use crate::error::Result;
use crate::model::{Activity, Comment, ProjectMembership, Story, Task};
use crate::query::{ActivityQuery, Query, QueryParams, StoriesQuery, TaskQuery};

const DELIVER_BODY: &str = r#"{"current_state":"delivered"}"#;

/// Operations on a single project. Every path is relative to
/// `/projects/{id}`.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    id: u64,
    conn: Arc<Connection>,
}

impl ProjectClient {
    pub(crate) fn new(id: u64, conn: Arc<Connection>) -> Self {
        Self { id, conn }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    #[instrument(skip(self), fields(project = self.id))]
    pub async fn stories(&self, query: &StoriesQuery) -> Result<(Vec<Story>, Pagination)> {
        let request = self.create_request(Method::GET, "/stories", &query.query())?;
        self.conn.execute(request).await
    }

    #[instrument(skip(self), fields(project = self.id))]
    pub async fn story(&self, story_id: u64) -> Result<Story> {
        let path = format!("/stories/{story_id}");
        let request = self.create_request(Method::GET, &path, &QueryParams::new())?;
        let (story, _) = self.conn.execute(request).await?;
        Ok(story)
    }

    #[instrument(skip(self), fields(project = self.id))]
    pub async fn story_activity(
        &self,
        story_id: u64,
        query: &ActivityQuery,
    ) -> Result<Vec<Activity>> {
        let path = format!("/stories/{story_id}/activity");
        let request = self.create_request(Method::GET, &path, &query.query())?;
        let (activities, _) = self.conn.execute(request).await?;
        Ok(activities)
    }

    #[instrument(skip(self), fields(project = self.id))]
    pub async fn story_tasks(&self, story_id: u64, query: &TaskQuery) -> Result<Vec<Task>> {
        let path = format!("/stories/{story_id}/tasks");
        let request = self.create_request(Method::GET, &path, &query.query())?;
        let (tasks, _) = self.conn.execute(request).await?;
        Ok(tasks)
    }

    /// Creates `story` and returns the service's copy, which carries the
    /// assigned id and timestamps.
    #[instrument(skip(self, story), fields(project = self.id))]
    pub async fn create_story(&self, story: &Story) -> Result<Story> {
        let mut request = self.create_request(Method::POST, "/stories", &QueryParams::new())?;
        add_json_body(&mut request, story)?;
        let (created, _) = self.conn.execute(request).await?;
        Ok(created)
    }

    /// Sends every set field of `story` as an update. This is the way to move
    /// a story to any state other than delivered; transitions are not checked
    /// here.
    #[instrument(skip(self, story), fields(project = self.id))]
    pub async fn update_story(&self, story_id: u64, story: &Story) -> Result<Story> {
        let path = format!("/stories/{story_id}");
        let mut request = self.create_request(Method::PUT, &path, &QueryParams::new())?;
        add_json_body(&mut request, story)?;
        let (updated, _) = self.conn.execute(request).await?;
        Ok(updated)
    }

    #[instrument(skip(self), fields(project = self.id))]
    pub async fn delete_story(&self, story_id: u64) -> Result<()> {
        let path = format!("/stories/{story_id}");
        let request = self.create_request(Method::DELETE, &path, &QueryParams::new())?;
        self.conn.execute_without_body(request).await?;
        Ok(())
    }

    #[instrument(skip(self, task), fields(project = self.id))]
    pub async fn create_task(&self, story_id: u64, task: &Task) -> Result<Task> {
        let path = format!("/stories/{story_id}/tasks");
        let mut request = self.create_request(Method::POST, &path, &QueryParams::new())?;
        add_json_body(&mut request, task)?;
        let (created, _) = self.conn.execute(request).await?;
        Ok(created)
    }

    /// Moves the story to `delivered` with a minimal partial update.
    #[instrument(skip(self), fields(project = self.id))]
    pub async fn deliver_story(&self, story_id: u64) -> Result<()> {
        let path = format!("/stories/{story_id}");
        let mut request = self.create_request(Method::PUT, &path, &QueryParams::new())?;
        set_json_body(&mut request, DELIVER_BODY.to_string());
        self.conn.execute_without_body(request).await?;
        Ok(())
    }

    /// Delivers the story, then posts `comment` on it.
    ///
    /// The two calls are independent: nothing is posted if delivering fails,
    /// and a failed comment leaves the story delivered.
    #[instrument(skip(self, comment), fields(project = self.id))]
    pub async fn deliver_story_with_comment(&self, story_id: u64, comment: &str) -> Result<()> {
        self.deliver_story(story_id).await?;
        debug!(story_id, "story delivered, posting comment");

        let path = format!("/stories/{story_id}/comments");
        let mut request = self.create_request(Method::POST, &path, &QueryParams::new())?;
        add_json_body(&mut request, &Comment::new(comment))?;
        self.conn.execute_without_body(request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(project = self.id))]
    pub async fn project_memberships(&self) -> Result<Vec<ProjectMembership>> {
        let request = self.create_request(Method::GET, "/memberships", &QueryParams::new())?;
        let (memberships, _) = self.conn.execute(request).await?;
        Ok(memberships)
    }

    fn create_request(&self, method: Method, path: &str, query: &QueryParams) -> Result<Request> {
        let project_path = format!("/projects/{}{}", self.id, path);
        self.conn.create_request(method, &project_path, query)
    }
}

fn add_json_body<T: Serialize>(request: &mut Request, body: &T) -> Result<()> {
    set_json_body(request, serde_json::to_string(body)?);
    Ok(())
}

fn set_json_body(request: &mut Request, body: String) {
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *request.body_mut() = Some(body.into());
}
