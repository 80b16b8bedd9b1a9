//! Resume records as delivered by the backend.
//!
//! Every entity is an immutable snapshot of one fetch; screens derive view
//! state from them but never mutate them.

pub mod achievement;
pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

pub use achievement::Achievement;
pub use education::Education;
pub use experience::Experience;
pub use profile::Profile;
pub use project::Project;
pub use skill::{Skill, SkillGroups};

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `null`, missing and blank values as absent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a string that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Records that carry an explicit display position.
pub trait SortOrdered {
    fn sort_order(&self) -> i32;
}

/// Stable sort by `sort_order`, keeping delivery order for ties.
pub fn sort_by_order<T: SortOrdered>(items: &mut [T]) {
    items.sort_by_key(|item| item.sort_order());
}
