//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `bookings`, `tutors`, `ui`) so pages
//! and components depend on small focused models.

pub mod auth;
pub mod bookings;
pub mod tutors;
pub mod ui;
