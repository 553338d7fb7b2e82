//! Form input validation for the auth and listing forms.
//!
//! Each validator trims its inputs and returns either the typed request body
//! or the message shown under the form.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, Registration, TutorDraft};
use crate::state::tutors::LANGUAGES;

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Validate the login form.
///
/// # Errors
///
/// Returns the message to display when a field is missing or too short.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Minimum 6 characters required");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Uppercase + lowercase + minimum length.
pub fn password_is_strong(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().count() >= MIN_PASSWORD_CHARS
}

/// Validate the registration form. An empty photo URL means no avatar.
///
/// # Errors
///
/// Returns the message to display when a field is missing or the password
/// is too weak.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    photo_url: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() {
        return Err("Email is required");
    }
    if !password_is_strong(password) {
        return Err("Password must contain uppercase, lowercase and be 6+ characters.");
    }
    let photo_url = photo_url.trim();
    Ok(Registration {
        display_name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        avatar_url: (!photo_url.is_empty()).then(|| photo_url.to_owned()),
    })
}

/// Raw text of the add/update listing form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorForm {
    pub tutor_name: String,
    pub tutor_email: String,
    pub image: String,
    pub language: String,
    pub price: String,
    pub description: String,
}

impl TutorForm {
    /// Pre-fill the form from an existing draft (update page).
    pub fn from_draft(draft: &TutorDraft) -> Self {
        Self {
            tutor_name: draft.tutor_name.clone(),
            tutor_email: draft.tutor_email.clone(),
            image: draft.image.clone(),
            language: draft.language.clone(),
            price: draft.price.to_string(),
            description: draft.description.clone(),
        }
    }

    /// Validate into a request body.
    ///
    /// # Errors
    ///
    /// Returns the message to display for the first invalid field.
    pub fn validate(&self) -> Result<TutorDraft, &'static str> {
        let required = [
            (&self.tutor_name, "Tutor name is required"),
            (&self.tutor_email, "Tutor email is required"),
            (&self.image, "Image URL is required"),
            (&self.description, "Description is required"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(message);
            }
        }
        let language = LANGUAGES
            .iter()
            .find(|lang| lang.eq_ignore_ascii_case(self.language.trim()))
            .ok_or("Select a language")?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or("Price must be a non-negative number")?;
        Ok(TutorDraft {
            tutor_name: self.tutor_name.trim().to_owned(),
            tutor_email: self.tutor_email.trim().to_owned(),
            image: self.image.trim().to_owned(),
            language: (*language).to_owned(),
            price,
            description: self.description.trim().to_owned(),
        })
    }
}
