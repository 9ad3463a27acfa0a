//! Named transport header fields.

/// Transport header map: ordered `(name, value)` pairs with replace-on-set.
///
/// Field names match case-insensitively, as HTTP header names do.
#[derive(Debug, Default, Clone)]
pub struct MessageHeaders {
    fields: Vec<(String, String)>,
}

impl MessageHeaders {
    /// Create an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(field) = self
            .fields
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            field.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Look up a header field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set the `Content-Type` field.
    pub fn set_content_type(&mut self, content_type: &str) {
        self.set("Content-Type", content_type);
    }

    /// Number of header fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
