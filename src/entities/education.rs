use serde::{Deserialize, Serialize};

use super::{blank_as_none, null_as_empty, SortOrdered};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_year: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_year: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub grade: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub logo_url: String,
    pub sort_order: i32,
}

impl Education {
    pub fn year_range(&self) -> String {
        format!("{} — {}", self.start_year, self.end_year)
    }
}

impl SortOrdered for Education {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
