//! Itemized price breakdown, serialized as an insertion-ordered JSON object.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix that marks task entries in the flattened breakdown map.
pub const TASK_PREFIX: &str = "task:";

/// Key of a breakdown entry: either a skill surcharge or a detected task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BreakdownLabel {
    Skill(String),
    Task(String),
}

impl BreakdownLabel {
    /// Render the wire key (`"Python"`, `"task:debug code"`).
    pub fn key(&self) -> String {
        match self {
            Self::Skill(name) => name.clone(),
            Self::Task(name) => format!("{TASK_PREFIX}{name}"),
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key.strip_prefix(TASK_PREFIX) {
            Some(task) => Self::Task(task.to_string()),
            None => Self::Skill(key.to_string()),
        }
    }
}

/// Ordered label → amount mapping. Labels are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBreakdown {
    entries: Vec<(BreakdownLabel, f64)>,
}

impl PriceBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry. Overwrites keep the original position.
    pub fn insert(&mut self, label: BreakdownLabel, amount: f64) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((label, amount)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        let label = BreakdownLabel::from_key(key);
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BreakdownLabel, f64)> {
        self.entries.iter().map(|(l, a)| (l, *a))
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(l, _)| l.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PriceBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, amount) in &self.entries {
            map.serialize_entry(&label.key(), amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PriceBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = PriceBreakdown;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of label to amount")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = PriceBreakdown::new();
                while let Some((key, amount)) = access.next_entry::<String, f64>()? {
                    breakdown.insert(BreakdownLabel::from_key(&key), amount);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_insertion_order() {
        let mut b = PriceBreakdown::new();
        b.insert(BreakdownLabel::Skill("Python".into()), 2000.0);
        b.insert(BreakdownLabel::Skill("Cloud".into()), 3500.0);
        b.insert(BreakdownLabel::Task("debug code".into()), 4000.0);

        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(
            json,
            r#"{"Python":2000.0,"Cloud":3500.0,"task:debug code":4000.0}"#
        );
    }

    #[test]
    fn task_and_skill_keys_do_not_collide() {
        let mut b = PriceBreakdown::new();
        b.insert(BreakdownLabel::Skill("latex formatting".into()), 1.0);
        b.insert(BreakdownLabel::Task("latex formatting".into()), 2.0);
        assert_eq!(b.len(), 2);
        assert_eq!(b.get("latex formatting"), Some(1.0));
        assert_eq!(b.get("task:latex formatting"), Some(2.0));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut b = PriceBreakdown::new();
        b.insert(BreakdownLabel::Skill("R".into()), 1.0);
        b.insert(BreakdownLabel::Skill("Web".into()), 2.0);
        b.insert(BreakdownLabel::Skill("R".into()), 3.0);
        assert_eq!(b.keys(), vec!["R".to_string(), "Web".to_string()]);
        assert_eq!(b.get("R"), Some(3.0));
    }

    #[test]
    fn deserializes_task_prefix() {
        let b: PriceBreakdown =
            serde_json::from_str(r#"{"Web":2000.0,"task:create frontend":450.0}"#).unwrap();
        let labels: Vec<_> = b.iter().map(|(l, _)| l.clone()).collect();
        assert_eq!(
            labels,
            vec![
                BreakdownLabel::Skill("Web".into()),
                BreakdownLabel::Task("create frontend".into()),
            ]
        );
    }
}
