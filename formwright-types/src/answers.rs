use std::collections::HashMap;

use crate::FieldId;

/// Raw text answers collected while taking a form.
///
/// Answers are kept exactly as typed; trimming and parsing happen only inside
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<FieldId, String>,
}

impl Answers {
    /// Create a new empty answer collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the answer for a field, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for a field.
    pub fn get(&self, id: &FieldId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Check if a field has been answered at all (even with an empty string).
    pub fn contains(&self, id: &FieldId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a field.
    pub fn remove(&mut self, id: &FieldId) -> Option<String> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.values.iter().map(|(id, value)| (id, value.as_str()))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<FieldId>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut answers = Answers::new();
        for (id, value) in iter {
            answers.insert(id, value);
        }
        answers
    }
}

impl IntoIterator for Answers {
    type Item = (FieldId, String);
    type IntoIter = std::collections::hash_map::IntoIter<FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("name", "Alice");
        answers.insert("name", "Bob");

        assert_eq!(answers.get(&FieldId::new("name")), Some("Bob"));
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(&FieldId::new("age")), None);
    }

    #[test]
    fn empty_answer_is_still_present() {
        let answers: Answers = [("name", "")].into_iter().collect();
        assert!(answers.contains(&FieldId::new("name")));
        assert_eq!(answers.get(&FieldId::new("name")), Some(""));
    }
}
