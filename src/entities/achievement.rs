use serde::{Deserialize, Serialize};

use super::{null_as_empty, SortOrdered};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    /// Icon category key, resolved through [`crate::icons::IconService::achievement`]
    #[serde(deserialize_with = "null_as_empty")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub year: String,
    pub sort_order: i32,
}

impl SortOrdered for Achievement {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
