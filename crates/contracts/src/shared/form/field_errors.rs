use crate::shared::metadata::FieldMetadata;

/// Errors of a form, keyed by field name, in the order they were found.
///
/// Only the first error of each field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.summary())]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.contains(field) {
            self.entries.push((field, message.into()));
        }
    }

    /// Record the outcome of a field check, returning the value on success.
    pub fn take<T>(&mut self, field: &FieldMetadata, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field.name, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn first_message(&self) -> Option<&str> {
        self.entries.first().map(|(_, message)| message.as_str())
    }

    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_error_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        errors.insert("image", "missing");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "image"]);
        assert_eq!(errors.to_string(), "first; missing");
    }

    #[test]
    fn into_result_passes_value_through_when_clean() {
        assert_eq!(FieldErrors::new().into_result(5), Ok(5));
        let mut errors = FieldErrors::new();
        errors.insert("stock", "bad");
        assert!(errors.into_result(5).is_err());
    }
}
