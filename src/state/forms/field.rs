//! Form field value objects

use super::attachment::ImageAttachment;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Path typed at the UI boundary plus the attachment loaded from it
    Image {
        path: String,
        attachment: Option<ImageAttachment>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    /// Rendered masked unless password visibility is on
    pub is_secret: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_secret: false,
        }
    }

    /// Create a new password field
    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new image field with nothing selected
    pub fn image(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Image {
                path: String::new(),
                attachment: None,
            },
            is_secret: false,
        }
    }

    /// Get the text value (the typed path for image fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Image { path, .. } => path,
        }
    }

    /// Get the loaded attachment, if any
    pub fn attachment(&self) -> Option<&ImageAttachment> {
        match &self.value {
            FieldValue::Image { attachment, .. } => attachment.as_ref(),
            FieldValue::Text(_) => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Image { path, attachment } => {
                *path = value;
                *attachment = None;
            }
        }
    }

    /// Replace the selected attachment. Ignored on text fields.
    pub fn set_attachment(&mut self, image: ImageAttachment) {
        if let FieldValue::Image { path, attachment } = &mut self.value {
            *path = image.source_path.clone();
            *attachment = Some(image);
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Image { path, attachment } => {
                path.push(c);
                *attachment = None;
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Image { path, attachment } => {
                path.pop();
                *attachment = None;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal: bool) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret && !reveal => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Image { path, attachment } => match attachment {
                Some(image) => format!(
                    "{} ({}, {} bytes)",
                    image.file_name,
                    image.mime_type,
                    image.bytes.len()
                ),
                None => path.clone(),
            },
        }
    }
}
