//! Signup form draft state
//!
//! `FormInputs` is the record the user edits before submission. It is sent to
//! the backend exactly as typed.

use serde::{Deserialize, Serialize};

/// The four-field draft record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Identifies one field of [`FormInputs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Username,
    Email,
    Password,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Username,
        FormField::Email,
        FormField::Password,
    ];

    /// Input `name` attribute and JSON key
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Username => "Username",
            FormField::Email => "Email address",
            FormField::Password => "Password",
        }
    }
}

impl FormInputs {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
    }

    /// Fields that are empty or whitespace-only, in display order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Masked vs. plaintext rendering of the password input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Plain,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Plain,
            PasswordVisibility::Plain => PasswordVisibility::Masked,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Value for the input's `type` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Plain => "text",
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, PasswordVisibility::Plain)
    }
}
