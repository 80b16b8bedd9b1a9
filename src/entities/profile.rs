use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// The resume owner. One per session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(rename = "linkedIn", deserialize_with = "null_as_empty")]
    pub linked_in: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub github: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub portfolio: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub profile_image_url: String,
    pub years_of_experience: u32,
    pub projects_completed: u32,
    pub companies_worked: u32,
    pub certifications_earned: u32,
}

impl Profile {
    /// Initials used in place of the profile image.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
