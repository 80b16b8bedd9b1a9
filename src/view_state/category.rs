//! Category projection over grouped skills.

use crate::entities::{Skill, SkillGroups};

/// Aggregates shown above the category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillStats {
    pub total_skills: usize,
    /// Rounded mean of clamped proficiencies; 0 when there are no skills
    pub avg_proficiency: u8,
    pub category_count: usize,
}

/// Skills grouped by category with a single active category.
#[derive(Debug, Clone, Default)]
pub struct CategoryProjection {
    groups: SkillGroups,
    active: Option<String>,
}

impl CategoryProjection {
    /// An empty projection with no active category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a freshly loaded grouping. The first category becomes active.
    pub fn load(&mut self, groups: SkillGroups) {
        self.active = groups.keys().first().cloned();
        self.groups = groups;
    }

    pub fn from_groups(groups: SkillGroups) -> Self {
        let mut projection = Self::new();
        projection.load(groups);
        projection
    }

    /// Category keys in the order the backend delivered them.
    pub fn categories(&self) -> &[String] {
        self.groups.keys()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Switch the active category. Unknown keys leave the selection untouched.
    ///
    /// Returns whether the active category changed.
    pub fn set_active(&mut self, key: &str) -> bool {
        if !self.groups.contains(key) || self.active.as_deref() == Some(key) {
            return false;
        }
        self.active = Some(key.to_string());
        true
    }

    pub fn next_category(&mut self) -> bool {
        self.step(1)
    }

    pub fn previous_category(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let keys = self.groups.keys();
        if keys.is_empty() {
            return false;
        }
        let current = self
            .active
            .as_deref()
            .and_then(|active| keys.iter().position(|key| key == active));
        let next = match current {
            Some(index) => (index as isize + delta).rem_euclid(keys.len() as isize) as usize,
            None if delta >= 0 => 0,
            None => keys.len() - 1,
        };
        let key = keys[next].clone();
        self.set_active(&key)
    }

    /// Skills of the active category, empty when nothing is active.
    pub fn active_skills(&self) -> &[Skill] {
        self.active
            .as_deref()
            .and_then(|key| self.groups.get(key))
            .unwrap_or(&[])
    }

    pub fn count_for(&self, key: &str) -> usize {
        self.groups.get(key).map_or(0, <[Skill]>::len)
    }

    pub fn stats(&self) -> SkillStats {
        let (total_skills, sum) = self
            .groups
            .iter()
            .flat_map(|(_, skills)| skills)
            .fold((0usize, 0u64), |(count, sum), skill| {
                (count + 1, sum + u64::from(skill.clamped_proficiency()))
            });

        let avg_proficiency = if total_skills == 0 {
            0
        } else {
            (sum as f64 / total_skills as f64).round() as u8
        };

        SkillStats {
            total_skills,
            avg_proficiency,
            category_count: self.groups.len(),
        }
    }
}
