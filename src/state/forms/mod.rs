//! Form domain layer
//!
//! Field stores, field values and the validators for the login and
//! registration forms.

mod attachment;
mod field;
mod form_state;
mod validation;

pub use attachment::ImageAttachment;
pub use field::FormField;
pub use form_state::{Form, LoginForm, RegisterForm};
pub use validation::{validate_login, validate_registration, ValidationErrors};
