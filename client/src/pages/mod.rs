//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages assume a signed-in user; the router wraps
//! them in `AccessGate`.

pub mod add_tutor;
pub mod find_tutors;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod my_tutors;
pub mod not_found;
pub mod register;
pub(crate) mod tutor_form;
pub mod tutor_details;
pub mod update_tutor;
