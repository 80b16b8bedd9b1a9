use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::null_as_empty;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    /// Percentage as sent by the backend; may fall outside 0..=100
    pub proficiency: i32,
    #[serde(deserialize_with = "null_as_empty")]
    pub icon_name: String,
}

impl Skill {
    /// Proficiency clamped to the displayable range.
    pub fn clamped_proficiency(&self) -> u8 {
        self.proficiency.clamp(0, 100) as u8
    }
}

/// Skills grouped by category, keeping the order the backend delivered the keys in.
///
/// JSON object key order is not a portable contract, so the order is captured
/// explicitly while deserializing instead of relying on map iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillGroups {
    keys: Vec<String>,
    groups: HashMap<String, Vec<Skill>>,
}

impl SkillGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category. Re-inserting a key replaces its skills but keeps its position.
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<Skill>) {
        let category = category.into();
        if !self.groups.contains_key(&category) {
            self.keys.push(category.clone());
        }
        self.groups.insert(category, skills);
    }

    /// Category keys in delivery order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn get(&self, category: &str) -> Option<&[Skill]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.groups.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate `(category, skills)` in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Skill])> {
        self.keys
            .iter()
            .filter_map(|key| self.groups.get(key).map(|skills| (key.as_str(), skills.as_slice())))
    }
}

impl FromIterator<(String, Vec<Skill>)> for SkillGroups {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Skill>)>>(iter: I) -> Self {
        let mut groups = SkillGroups::new();
        for (category, skills) in iter {
            groups.insert(category, skills);
        }
        groups
    }
}

impl<'de> Deserialize<'de> for SkillGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = SkillGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to a list of skills")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = SkillGroups::new();
                while let Some((category, skills)) = map.next_entry::<String, Option<Vec<Skill>>>()? {
                    groups.insert(category, skills.unwrap_or_default());
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

impl Serialize for SkillGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for (category, skills) in self.iter() {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_follows_json() {
        let json = r#"{"TOOLS":[],"BACKEND":[{"name":"Rust","proficiency":90}],"FRONTEND":null}"#;
        let groups: SkillGroups = serde_json::from_str(json).unwrap();
        assert_eq!(groups.keys(), ["TOOLS", "BACKEND", "FRONTEND"]);
        assert_eq!(groups.get("BACKEND").unwrap()[0].name, "Rust");
        assert!(groups.get("FRONTEND").unwrap().is_empty());
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut groups = SkillGroups::new();
        groups.insert("A", vec![]);
        groups.insert("B", vec![]);
        groups.insert("A", vec![Skill::default()]);
        assert_eq!(groups.keys(), ["A", "B"]);
        assert_eq!(groups.get("A").unwrap().len(), 1);
    }

    #[test]
    fn test_clamped_proficiency() {
        let over = Skill { proficiency: 140, ..Default::default() };
        let under = Skill { proficiency: -5, ..Default::default() };
        assert_eq!(over.clamped_proficiency(), 100);
        assert_eq!(under.clamped_proficiency(), 0);
    }
}
