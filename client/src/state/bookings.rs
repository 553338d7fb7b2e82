//! Bookings list for the "My Bookings" page.
//!
//! DESIGN
//! ======
//! The reviewed flag is applied locally only after the backend accepted
//! both review calls, so the list never shows a review the server lacks.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::Booking;

/// Loaded bookings plus the in-flight review, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub loading: bool,
    /// Booking whose review request is in flight.
    pub reviewing: Option<String>,
    pub error: Option<String>,
}

impl BookingsState {
    /// Replace the list with a fresh fetch result.
    pub fn loaded(&mut self, items: Vec<Booking>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a fetch or review failure.
    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.reviewing = None;
        self.error = Some(message);
    }

    /// Mark a review request as started. Returns `false` when the booking is
    /// unknown, already reviewed, or another review is in flight.
    pub fn begin_review(&mut self, booking_id: &str) -> bool {
        if self.reviewing.is_some() {
            return false;
        }
        let reviewable = self
            .items
            .iter()
            .any(|booking| booking.id == booking_id && !booking.reviewed);
        if reviewable {
            self.reviewing = Some(booking_id.to_owned());
            self.error = None;
        }
        reviewable
    }

    /// Apply a confirmed review. Returns `true` if a booking was updated.
    pub fn mark_reviewed(&mut self, booking_id: &str) -> bool {
        if self.reviewing.as_deref() == Some(booking_id) {
            self.reviewing = None;
        }
        match self.items.iter_mut().find(|booking| booking.id == booking_id) {
            Some(booking) if !booking.reviewed => {
                booking.reviewed = true;
                true
            }
            _ => false,
        }
    }
}
