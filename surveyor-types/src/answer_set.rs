use std::collections::BTreeMap;

use serde::Serialize;

use crate::AnswerValue;

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(String),

    #[error("Type mismatch for question '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected from one survey level.
///
/// Keys are question names and are unique per level. Answers of a sub-survey
/// are stored under the sub-survey question's own name as a nested value,
/// never merged into the parent namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert an answer for the given question name, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get the answer for a question name.
    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    /// Check if an answer exists for the question name.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove the answer for a question name.
    pub fn remove(&mut self, name: &str) -> Option<AnswerValue> {
        self.values.remove(name)
    }

    /// Get an iterator over all name-value pairs, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    /// Get an iterator over the answered question names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another answer set into this one.
    pub fn extend(&mut self, other: AnswerSet) {
        self.values.extend(other.values);
    }

    // === Convenience accessors ===

    /// Get a string answer.
    pub fn get_string(&self, name: &str) -> Result<&str, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::String(s)) => Ok(s),
            Some(other) => Err(mismatch(name, "String", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a boolean answer.
    pub fn get_bool(&self, name: &str) -> Result<bool, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(name, "Bool", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a list answer.
    pub fn get_list(&self, name: &str) -> Result<&[String], AnswerError> {
        match self.get(name) {
            Some(AnswerValue::List(list)) => Ok(list),
            Some(other) => Err(mismatch(name, "List", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a nested answer set.
    pub fn get_nested(&self, name: &str) -> Result<&AnswerSet, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Nested(answers)) => Ok(answers),
            Some(other) => Err(mismatch(name, "Nested", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get the per-iteration answer sets of a confirm loop.
    pub fn get_nested_list(&self, name: &str) -> Result<&[AnswerSet], AnswerError> {
        match self.get(name) {
            Some(AnswerValue::NestedList(list)) => Ok(list),
            Some(other) => Err(mismatch(name, "NestedList", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Check if an answer is present and non-empty.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }
}

fn mismatch(name: &str, expected: &'static str, actual: &AnswerValue) -> AnswerError {
    AnswerError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (name, value) in iter {
            answers.insert(name, value);
        }
        answers
    }
}

impl IntoIterator for AnswerSet {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = AnswerSet::new();
        answers.insert("name", "orders");
        answers.insert("scopes", true);

        assert_eq!(answers.get_string("name").unwrap(), "orders");
        assert!(answers.get_bool("scopes").unwrap());
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn type_mismatch_error() {
        let answers = AnswerSet::new().with("scopes", true);

        let result = answers.get_string("scopes");
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_error() {
        let answers = AnswerSet::new();
        assert!(matches!(
            answers.get_list("lifecycle"),
            Err(AnswerError::Missing(name)) if name == "lifecycle"
        ));
    }

    #[test]
    fn nested_values_stay_under_their_key() {
        let inner = AnswerSet::new().with("x", "v");
        let outer = AnswerSet::new().with("outer", inner.clone());

        assert_eq!(outer.len(), 1);
        assert_eq!(outer.get_nested("outer").unwrap(), &inner);
        assert!(!outer.contains("x"));
    }

    #[test]
    fn has_value_ignores_blank_strings() {
        let answers = AnswerSet::new().with("url", "").with("name", "orders");
        assert!(!answers.has_value("url"));
        assert!(answers.has_value("name"));
        assert!(!answers.has_value("missing"));
    }

    #[test]
    fn serializes_as_object() {
        let answers = AnswerSet::new()
            .with("name", "orders")
            .with("lifecycle", vec!["start"]);
        assert_eq!(
            serde_json::to_value(&answers).unwrap(),
            serde_json::json!({ "lifecycle": ["start"], "name": "orders" })
        );
    }
}
