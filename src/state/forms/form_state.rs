//! Field stores for the login and registration forms

use super::attachment::ImageAttachment;
use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn field_mut(&mut self, name: &str) -> Option<&mut FormField>;

    /// Replace the value of a declared field. Unknown names are ignored
    /// and reported as `false`.
    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.set_text(value.to_string());
                true
            }
            None => {
                tracing::debug!("Ignoring update to undeclared field {name:?}");
                false
            }
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub show_password: bool,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            show_password: false,
            active_field_index: 0,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

// Register Form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: FormField,
    pub email: FormField,
    pub phone_number: FormField,
    pub image: FormField,
    pub password: FormField,
    /// Held alongside the payload fields but never sent
    pub confirm_password: FormField,
    /// Governs both password inputs
    pub show_password: bool,
    pub active_field_index: usize,
}

impl RegisterForm {
    pub const IMAGE_FIELD_INDEX: usize = 3;

    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Full Name"),
            email: FormField::text("email", "Email"),
            phone_number: FormField::text("phone_number", "Phone Number"),
            image: FormField::image("image", "Image (path)"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirm_password", "Confirm Password"),
            show_password: false,
            active_field_index: 0,
        }
    }

    pub fn set_image(&mut self, image: ImageAttachment) {
        self.image.set_attachment(image);
    }

    pub fn image_attachment(&self) -> Option<&ImageAttachment> {
        self.image.attachment()
    }

    /// Returns true if an image path was typed but not loaded yet
    pub fn has_unloaded_image_path(&self) -> bool {
        !self.image.as_text().is_empty() && self.image.attachment().is_none()
    }

    pub fn is_image_field_active(&self) -> bool {
        self.active_field_index == Self::IMAGE_FIELD_INDEX
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        6
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.full_name,
            1 => &mut self.email,
            2 => &mut self.phone_number,
            3 => &mut self.image,
            4 => &mut self.password,
            _ => &mut self.confirm_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.phone_number),
            3 => Some(&self.image),
            4 => Some(&self.password),
            5 => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        // The image is replaced through set_image, not as text
        match name {
            "full_name" => Some(&mut self.full_name),
            "email" => Some(&mut self.email),
            "phone_number" => Some(&mut self.phone_number),
            "password" => Some(&mut self.password),
            "confirm_password" => Some(&mut self.confirm_password),
            _ => None,
        }
    }
}
