//! Wire DTOs for the REST backend and the identity provider.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (camelCase, Mongo-style `_id`), so
//! every struct carries serde renames instead of mirroring them in Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user as reported by the identity provider.
///
/// Opaque to the client: it is displayed and copied into outgoing requests,
/// never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserIdentity {
    /// Name shown in the navbar and pre-filled into forms.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("User")
    }
}

/// Email/password pair for `POST /sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account details for `POST /sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub avatar_url: Option<String>,
}

/// Decode `null` the same as a missing field. The backend stores `null` for
/// unparsable prices and unset review counts.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tutor listing as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    #[serde(rename = "_id")]
    pub id: String,
    pub tutor_name: String,
    pub tutor_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Number of reviews left by students.
    #[serde(default, deserialize_with = "null_as_default")]
    pub review: u32,
    /// Display name of the user who owns the listing.
    #[serde(default)]
    pub name: Option<String>,
    /// Email of the user who owns the listing.
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Editable listing fields, shared by the add and update forms.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorDraft {
    pub tutor_name: String,
    pub tutor_email: String,
    pub image: String,
    pub language: String,
    pub price: f64,
    pub description: String,
}

/// Body of `POST /tutors`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTutor {
    pub name: String,
    pub user_email: String,
    #[serde(flatten)]
    pub draft: TutorDraft,
    pub review: u32,
    pub created_at: String,
}

impl NewTutor {
    /// Listing owned by `owner`, starting with zero reviews.
    pub fn owned_by(owner: &UserIdentity, draft: TutorDraft, created_at: String) -> Self {
        Self {
            name: owner.label().to_owned(),
            user_email: owner.email.clone(),
            draft,
            review: 0,
            created_at,
        }
    }
}

/// A booked session as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub tutor_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    pub tutor_email: String,
    /// Student who booked the session.
    pub email: String,
    #[serde(default)]
    pub booked_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewed: bool,
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub tutor_id: String,
    pub image: String,
    pub language: String,
    pub price: f64,
    pub tutor_email: String,
    pub email: String,
    pub booked_at: String,
}

impl NewBooking {
    /// Booking of `tutor` by `student`, snapshotting the listing's price.
    pub fn for_tutor(tutor: &Tutor, student: &UserIdentity, booked_at: String) -> Self {
        Self {
            tutor_id: tutor.id.clone(),
            image: tutor.image.clone(),
            language: tutor.language.clone(),
            price: tutor.price,
            tutor_email: tutor.tutor_email.clone(),
            email: student.email.clone(),
            booked_at,
        }
    }
}

/// A language category shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub title: String,
    /// Route segment under `/find-tutors/`.
    pub path: String,
    #[serde(default)]
    pub icon: Option<String>,
}
