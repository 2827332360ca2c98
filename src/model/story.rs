use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declares an open string enumeration: known values are associated
/// constants, anything else the service sends is kept verbatim.
macro_rules! open_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(pub const $variant: $name = $name(Cow::Borrowed($value));)+

            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this value is one of the associated constants.
            pub fn is_known(&self) -> bool {
                Self::ALL.contains(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(Cow::Owned(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(Cow::Owned(value))
            }
        }
    };
}

open_enum! {
    /// Kind of story (`story_type` on the wire).
    StoryType {
        FEATURE => "feature",
        BUG => "bug",
        CHORE => "chore",
        RELEASE => "release",
    }
}

open_enum! {
    /// Workflow position of a story (`current_state` on the wire).
    StoryState {
        UNSCHEDULED => "unscheduled",
        PLANNED => "planned",
        STARTED => "started",
        FINISHED => "finished",
        DELIVERED => "delivered",
        ACCEPTED => "accepted",
        REJECTED => "rejected",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,
    #[serde(default, rename = "current_state", skip_serializing_if = "Option::is_none")]
    pub state: Option<StoryState>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Story {
    pub fn new(name: impl Into<String>, story_type: StoryType) -> Self {
        Self {
            name: Some(name.into()),
            story_type: Some(story_type),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Comment {
    /// Empty text is left unset, so it is omitted from the encoded body.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()).filter(|t| !t.is_empty()),
        }
    }
}
