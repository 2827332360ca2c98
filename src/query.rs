//! Query encoders for list endpoints.
//!
//! Each query spec turns into a [`QueryParams`] set. Unset or zero fields are
//! left out entirely rather than sent as empty values.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::StoryState;

/// Canonical query parameters, kept sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<&'static str, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-encodes the parameters: `key=value` pairs in key order joined by
    /// `&`, spaces as `+`, and everything outside `A-Za-z0-9-_.~` escaped.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn set_nonzero<N>(&mut self, key: &'static str, value: Option<N>)
    where
        N: Default + PartialEq + ToString,
    {
        if let Some(n) = value.filter(|n| *n != N::default()) {
            self.set(key, n.to_string());
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn escape(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

/// Anything that can be sent as the query string of a request.
pub trait Query {
    fn query(&self) -> QueryParams;
}

/// Filters for `GET /projects/{id}/stories`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesQuery {
    pub state: Option<StoryState>,
    pub label: Option<String>,
    /// Search clauses, sent space-separated in the given order.
    pub filter: Vec<String>,
    pub accepted_after: Option<DateTime<Utc>>,
    pub accepted_before: Option<DateTime<Utc>>,

    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Query for StoriesQuery {
    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if let Some(state) = self.state.as_ref().filter(|s| !s.as_str().is_empty()) {
            params.set("with_state", state.as_str());
        }

        if let Some(label) = self.label.as_ref().filter(|l| !l.is_empty()) {
            params.set("with_label", label.as_str());
        }

        if !self.filter.is_empty() {
            params.set("filter", self.filter.join(" "));
        }

        params.set_nonzero("limit", self.limit);
        params.set_nonzero("offset", self.offset);

        if let Some(after) = self.accepted_after {
            params.set("accepted_after", after.timestamp_millis().to_string());
        }

        if let Some(before) = self.accepted_before {
            params.set("accepted_before", before.timestamp_millis().to_string());
        }

        params
    }
}

/// Filters for a story's activity feed. Timestamps are milliseconds since
/// the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub occurred_before: Option<i64>,
    pub occurred_after: Option<i64>,
    pub since_version: Option<u64>,
}

impl Query for ActivityQuery {
    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_nonzero("limit", self.limit);
        params.set_nonzero("offset", self.offset);
        params.set_nonzero("occurred_before", self.occurred_before);
        params.set_nonzero("occurred_after", self.occurred_after);
        params.set_nonzero("since_version", self.since_version);
        params
    }
}

/// The task list endpoint takes no filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery;

impl Query for TaskQuery {
    fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}
