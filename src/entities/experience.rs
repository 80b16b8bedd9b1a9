use serde::{Deserialize, Serialize};

use super::{null_as_empty, SortOrdered};
use crate::utils::tags;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    /// Comma-delimited technology list
    #[serde(deserialize_with = "null_as_empty")]
    pub technologies: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub logo_url: String,
    pub current: bool,
    pub sort_order: i32,
}

impl Experience {
    pub fn tags(&self) -> Vec<&str> {
        tags::parse(&self.technologies)
    }

    /// "start — end", with "Present" for the current role when no end date was given.
    pub fn date_range(&self) -> String {
        let end = if self.current && self.end_date.trim().is_empty() {
            "Present"
        } else {
            self.end_date.as_str()
        };
        format!("{} — {}", self.start_date, end)
    }
}

impl SortOrdered for Experience {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
