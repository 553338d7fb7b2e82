//! REST API helpers for the tutor marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since pages
//! only fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages turn failures into inline
//! messages instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Booking, Category, NewBooking, NewTutor, Tutor, TutorDraft};

/// Handle on the REST backend, provided to pages through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn tutors_url(&self) -> String {
        self.url("/tutors")
    }

    pub fn tutors_by_owner_url(&self, email: &str) -> String {
        format!("{}?email={}", self.tutors_url(), urlencoding::encode(email))
    }

    pub fn tutor_url(&self, id: &str) -> String {
        self.url(&format!("/tutors/{}", urlencoding::encode(id)))
    }

    pub fn tutor_review_url(&self, tutor_id: &str) -> String {
        self.url(&format!("/tutors/review/{}", urlencoding::encode(tutor_id)))
    }

    pub fn bookings_url(&self) -> String {
        self.url("/bookings")
    }

    pub fn bookings_for_url(&self, email: &str) -> String {
        self.url(&format!("/bookings/{}", urlencoding::encode(email)))
    }

    pub fn booking_reviewed_url(&self, booking_id: &str) -> String {
        self.url(&format!("/bookings/reviewed/{}", urlencoding::encode(booking_id)))
    }

    pub fn categories_url(&self) -> String {
        self.url("/categories")
    }

    /// `GET /tutors`
    pub async fn fetch_tutors(&self) -> Result<Vec<Tutor>, ApiError> {
        get_json(&self.tutors_url()).await
    }

    /// `GET /tutors?email=`: listings owned by `email`.
    pub async fn fetch_tutors_by_owner(&self, email: &str) -> Result<Vec<Tutor>, ApiError> {
        get_json(&self.tutors_by_owner_url(email)).await
    }

    /// `GET /tutors/{id}`
    pub async fn fetch_tutor(&self, id: &str) -> Result<Tutor, ApiError> {
        get_json(&self.tutor_url(id)).await
    }

    /// `POST /tutors`
    pub async fn create_tutor(&self, tutor: &NewTutor) -> Result<(), ApiError> {
        send_json(Method::Post, &self.tutors_url(), Some(tutor)).await
    }

    /// `PUT /tutors/{id}`
    pub async fn update_tutor(&self, id: &str, draft: &TutorDraft) -> Result<(), ApiError> {
        send_json(Method::Put, &self.tutor_url(id), Some(draft)).await
    }

    /// `DELETE /tutors/{id}`
    pub async fn delete_tutor(&self, id: &str) -> Result<(), ApiError> {
        send_json::<()>(Method::Delete, &self.tutor_url(id), None).await
    }

    /// `GET /bookings/{email}`
    pub async fn fetch_bookings(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        get_json(&self.bookings_for_url(email)).await
    }

    /// `POST /bookings`
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<(), ApiError> {
        send_json(Method::Post, &self.bookings_url(), Some(booking)).await
    }

    /// Leave a review: bump the tutor's review count, then flag the booking.
    ///
    /// # Errors
    ///
    /// Fails if either PATCH fails; the booking flag is not sent when the
    /// tutor update already failed.
    pub async fn submit_review(&self, tutor_id: &str, booking_id: &str) -> Result<(), ApiError> {
        send_json::<()>(Method::Patch, &self.tutor_review_url(tutor_id), None).await?;
        send_json::<()>(Method::Patch, &self.booking_reviewed_url(booking_id), None).await
    }

    /// `GET /categories`
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        get_json(&self.categories_url()).await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Post,
    Put,
    Patch,
    Delete,
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn send_json<B: serde::Serialize>(method: Method, url: &str, body: Option<&B>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            None => builder
                .header("Content-Type", "application/json")
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(ApiError::Unavailable)
    }
}
